//! Carbon footprint summary rendered as generic key/value rows.

#[cfg(test)]
#[path = "carbon_panel_test.rs"]
mod carbon_panel_test;

use leptos::prelude::*;
use serde_json::{Map, Value};

use crate::state::dashboard::DashboardState;

/// Label/value pairs in backend key order.
fn carbon_rows(summary: &Map<String, Value>) -> Vec<(String, String)> {
    summary
        .iter()
        .map(|(key, value)| (humanize_key(key), display_value(value)))
        .collect()
}

/// `total_co2_tons` -> `Total co2 tons`.
fn humanize_key(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "-".to_owned(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() != 0.0 => format!("{f:.2}"),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

#[component]
pub fn CarbonPanel() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    view! {
        <section class="panel carbon">
            <h3 class="panel__title">"Carbon Footprint"</h3>
            {move || {
                let rows = dashboard.with(|s| carbon_rows(&s.carbon_footprint));
                if rows.is_empty() {
                    return view! { <div class="carbon__empty">"No carbon data"</div> }.into_any();
                }
                view! {
                    <dl class="carbon__rows">
                        {rows
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <div class="carbon__row">
                                        <dt>{label}</dt>
                                        <dd>{value}</dd>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </dl>
                }
                    .into_any()
            }}
        </section>
    }
}
