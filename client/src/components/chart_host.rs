//! Bridge component between dashboard state and the `charts` crate.
//!
//! ARCHITECTURE
//! ============
//! Each host owns one `ChartSlot` bound to its canvas. The rebuild effect
//! tracks both the snapshot revision and the canvas `NodeRef`, so it only
//! paints once data has arrived and the element is in the DOM, whichever
//! happens last.

use leptos::prelude::*;

use crate::state::dashboard::DashboardState;
use crate::util::chart_data::ChartTarget;

#[cfg(feature = "hydrate")]
use charts::render::CanvasSurface;
#[cfg(feature = "hydrate")]
use charts::slot::ChartSlot;
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

/// Canvas card hosting one dashboard chart.
#[component]
pub fn ChartHost(target: ChartTarget) -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let snapshot_rev = Memo::new(move |_| dashboard.with(|state| state.snapshot_rev));
    let has_data = move || {
        dashboard.with(|state| match target {
            ChartTarget::FuelEfficiency => !state.equipment.is_empty(),
            ChartTarget::Production => !state.production.is_empty(),
        })
    };

    #[cfg(feature = "hydrate")]
    {
        let slot = Rc::new(RefCell::new(ChartSlot::<CanvasSurface>::new()));
        Effect::new(move || {
            let rev = snapshot_rev.get();
            let canvas = canvas_ref.get();
            if rev == 0 {
                return;
            }
            let config = dashboard.with_untracked(|state| target.build(&state.equipment, &state.production));
            let surface = match canvas.map(CanvasSurface::new).transpose() {
                Ok(surface) => surface,
                Err(e) => {
                    log::warn!("{} canvas unusable: {e}", target.canvas_id());
                    return;
                }
            };
            match slot.borrow_mut().replace(surface, config) {
                Ok(true) => log::debug!("{} rebuilt for snapshot rev {rev}", target.canvas_id()),
                Ok(false) => {}
                Err(e) => log::warn!("{} render failed: {e}", target.canvas_id()),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = snapshot_rev;

    view! {
        <section class="panel chart-card">
            <h3 class="panel__title">{target.title()}</h3>
            <div class="chart-card__body">
                <canvas id=target.canvas_id() class="chart-card__canvas" node_ref=canvas_ref></canvas>
                <Show when=move || !has_data()>
                    <div class="chart-card__empty">"No data yet"</div>
                </Show>
            </div>
        </section>
    }
}
