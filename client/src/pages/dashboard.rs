//! Co-pilot dashboard page.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. On the client it runs the mount sequence once
//! (guard, feeds, greeting); until the guard grants access only a
//! placeholder is shown, so an unauthenticated visitor never sees data.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::alert_list::AlertList;
use crate::components::carbon_panel::CarbonPanel;
use crate::components::chart_host::ChartHost;
use crate::components::chat_panel::ChatPanel;
use crate::net::api::HttpBackend;
use crate::shell;
use crate::state::chat::ChatSession;
use crate::state::dashboard::{DashboardState, check_health, load_alerts, load_snapshot};
use crate::util::chart_data::ChartTarget;
use crate::util::clock;
use crate::util::session_guard::{Access, SessionGuard};

/// Label and CSS class for the backend status badge.
fn backend_badge(online: Option<bool>) -> (&'static str, &'static str) {
    match online {
        None => ("checking", "badge badge--pending"),
        Some(true) => ("online", "badge badge--ok"),
        Some(false) => ("offline", "badge badge--down"),
    }
}

fn placeholder_text(access: Access) -> &'static str {
    match access {
        Access::Denied => "Redirecting to login...",
        Access::Pending | Access::Granted => "Checking session...",
    }
}

/// Kick off the snapshot, alert, and health requests. They complete in any order.
fn start_feeds(backend: HttpBackend, dashboard: RwSignal<DashboardState>) {
    dashboard.update(DashboardState::begin_loading);

    let snapshot_backend = backend.clone();
    leptos::task::spawn_local(async move {
        load_snapshot(&snapshot_backend, &dashboard).await;
    });

    let alerts_backend = backend.clone();
    leptos::task::spawn_local(async move {
        load_alerts(&alerts_backend, &dashboard).await;
    });

    leptos::task::spawn_local(async move {
        check_health(&backend, &dashboard).await;
    });
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let chat = expect_context::<RwSignal<ChatSession>>();
    let backend = expect_context::<HttpBackend>();
    let access = RwSignal::new(Access::Pending);

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        if access.get_untracked() != Access::Pending {
            return;
        }
        let guard = SessionGuard::default();
        let backend = backend.clone();
        let outcome = shell::mount(&guard, &chat, clock::now_ms(), move || start_feeds(backend, dashboard));
        access.set(outcome);
    });

    let badge = move || backend_badge(dashboard.with(|s| s.backend_online));
    let data_unavailable = move || dashboard.with(DashboardState::has_unavailable_feed);

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <h1 class="dashboard__title">"MineMind Operations Co-Pilot"</h1>
                <div class="dashboard__badges">
                    <Show when=data_unavailable>
                        <span class="badge badge--warn">"data unavailable"</span>
                    </Show>
                    <span class=move || badge().1>{move || format!("backend {}", badge().0)}</span>
                </div>
            </header>

            <Show
                when=move || access.get() == Access::Granted
                fallback=move || view! { <div class="dashboard__placeholder">{placeholder_text(access.get())}</div> }
            >
                <main class="dashboard__grid">
                    <ChartHost target=ChartTarget::FuelEfficiency/>
                    <ChartHost target=ChartTarget::Production/>
                    <AlertList/>
                    <CarbonPanel/>
                    <ChatPanel/>
                </main>
            </Show>
        </div>
    }
}
