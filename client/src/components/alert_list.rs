//! Maintenance alert list, styled by severity.

use leptos::prelude::*;

use crate::state::dashboard::{DashboardState, FeedStatus};

/// Alerts in backend order; each row carries its severity's CSS class.
#[component]
pub fn AlertList() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    view! {
        <section class="panel alerts">
            <h3 class="panel__title">"Maintenance Alerts"</h3>
            {move || {
                let (alerts, status) = dashboard.with(|s| (s.alerts.clone(), s.alerts_status));
                if alerts.is_empty() {
                    let note = match status {
                        FeedStatus::Idle | FeedStatus::Loading => "Loading alerts...",
                        FeedStatus::Ready => "No active alerts",
                        FeedStatus::Unavailable => "Alerts unavailable",
                    };
                    return view! { <div class="alerts__empty">{note}</div> }.into_any();
                }
                view! {
                    <ul class="alerts__list">
                        {alerts
                            .into_iter()
                            .map(|alert| {
                                let class = format!("alert {}", alert.severity.style_class());
                                let due = alert.due_label();
                                view! {
                                    <li class=class>
                                        <div class="alert__head">
                                            <strong class="alert__equipment">{alert.equipment_name}</strong>
                                            <span class="alert__severity">{alert.severity.label()}</span>
                                        </div>
                                        <div class="alert__message">{alert.message}</div>
                                        {due.map(|due| view! { <div class="alert__due">{due}</div> })}
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                }
                    .into_any()
            }}
        </section>
    }
}
