use super::*;
use serde_json::json;

fn snapshot(value: Value) -> Snapshot {
    serde_json::from_value(value).unwrap()
}

// =============================================================
// Snapshot defaults
// =============================================================

#[test]
fn snapshot_missing_fields_default_to_empty() {
    let snap = snapshot(json!({}));
    assert!(snap.equipment.is_empty());
    assert!(snap.production.is_empty());
    assert!(snap.carbon_footprint.is_empty());
}

#[test]
fn snapshot_null_fields_default_to_empty() {
    let snap = snapshot(json!({ "equipment": null, "production": null, "carbon_footprint": null }));
    assert_eq!(snap, Snapshot::default());
}

#[test]
fn snapshot_non_object_carbon_footprint_becomes_empty() {
    let snap = snapshot(json!({ "carbon_footprint": [1, 2, 3] }));
    assert!(snap.carbon_footprint.is_empty());
}

#[test]
fn snapshot_carbon_footprint_passes_through_untouched() {
    let carbon = json!({ "total_co2_tons": 412.5, "by_site": { "north": 200 } });
    let snap = snapshot(json!({ "carbon_footprint": carbon.clone() }));
    assert_eq!(Value::Object(snap.carbon_footprint), carbon);
}

// =============================================================
// Records
// =============================================================

#[test]
fn equipment_keeps_backend_defined_fields() {
    let snap = snapshot(json!({
        "equipment": [{ "name": "Haul Truck 7", "fuel_efficiency": 42.5, "status": "active", "hours": 1200 }]
    }));
    let truck = &snap.equipment[0];
    assert_eq!(truck.name, "Haul Truck 7");
    assert_eq!(truck.fuel_efficiency, Some(42.5));
    assert_eq!(truck.extra.get("status"), Some(&json!("active")));
    assert_eq!(truck.extra.get("hours"), Some(&json!(1200)));
    assert!(!truck.extra.contains_key("name"));
}

#[test]
fn equipment_accepts_numeric_strings() {
    let snap = snapshot(json!({ "equipment": [{ "name": "Dozer", "fuel_efficiency": " 18.25 " }] }));
    assert_eq!(snap.equipment[0].fuel_efficiency, Some(18.25));
}

#[test]
fn equipment_unusable_number_is_a_gap() {
    let snap = snapshot(json!({
        "equipment": [
            { "name": "A", "fuel_efficiency": "n/a" },
            { "name": "B", "fuel_efficiency": null },
            { "name": "C" }
        ]
    }));
    assert!(snap.equipment.iter().all(|e| e.fuel_efficiency.is_none()));
    assert_eq!(snap.equipment.len(), 3);
}

#[test]
fn production_record_decodes_all_columns() {
    let snap = snapshot(json!({
        "production": [{ "date": "2024-03-01", "ore_extracted_tons": 1520, "target_tons": "1500.0" }]
    }));
    let day = &snap.production[0];
    assert_eq!(day.date, "2024-03-01");
    assert_eq!(day.ore_extracted_tons, Some(1520.0));
    assert_eq!(day.target_tons, Some(1500.0));
}

#[test]
fn numeric_name_is_rendered_as_text() {
    let snap = snapshot(json!({ "equipment": [{ "name": 17, "fuel_efficiency": 1 }] }));
    assert_eq!(snap.equipment[0].name, "17");
}

// =============================================================
// Severity
// =============================================================

#[test]
fn severity_maps_known_values() {
    assert_eq!(Severity::from_wire(Some("high")), Severity::High);
    assert_eq!(Severity::from_wire(Some("medium")), Severity::Medium);
    assert_eq!(Severity::from_wire(Some("low")), Severity::Low);
}

#[test]
fn severity_is_case_and_whitespace_insensitive() {
    assert_eq!(Severity::from_wire(Some(" HIGH ")), Severity::High);
    assert_eq!(Severity::from_wire(Some("Medium")), Severity::Medium);
}

#[test]
fn severity_unknown_empty_or_missing_is_low() {
    assert_eq!(Severity::from_wire(Some("")), Severity::Low);
    assert_eq!(Severity::from_wire(Some("unknown")), Severity::Low);
    assert_eq!(Severity::from_wire(Some("critical")), Severity::Low);
    assert_eq!(Severity::from_wire(None), Severity::Low);
}

#[test]
fn severity_style_classes() {
    assert_eq!(Severity::High.style_class(), "alert-high");
    assert_eq!(Severity::Medium.style_class(), "alert-medium");
    assert_eq!(Severity::Low.style_class(), "alert-low");
    assert_eq!(Severity::from_wire(Some("bogus")).style_class(), "alert-low");
}

// =============================================================
// Alerts
// =============================================================

#[test]
fn alert_decodes_with_lenient_severity() {
    let resp: AlertsResponse = serde_json::from_value(json!({
        "alerts": [
            { "equipment_name": "Excavator 2", "message": "Hydraulic service", "severity": "high", "days_until": 3 },
            { "equipment_name": "Loader 1", "message": "Tyre check", "severity": "urgent" },
            { "equipment_name": "Drill 4", "message": "Bit wear", "severity": null, "days_until": "5" }
        ]
    }))
    .unwrap();
    let severities: Vec<_> = resp.alerts.iter().map(|a| a.severity).collect();
    assert_eq!(severities, vec![Severity::High, Severity::Low, Severity::Low]);
    assert_eq!(resp.alerts[0].days_until, Some(3));
    assert_eq!(resp.alerts[1].days_until, None);
    assert_eq!(resp.alerts[2].days_until, Some(5));
}

#[test]
fn alerts_response_missing_key_is_empty() {
    let resp: AlertsResponse = serde_json::from_value(json!({})).unwrap();
    assert!(resp.alerts.is_empty());
}

#[test]
fn due_label_formats_days() {
    let mut alert = Alert::default();
    assert_eq!(alert.due_label(), None);
    alert.days_until = Some(0);
    assert_eq!(alert.due_label().as_deref(), Some("due today"));
    alert.days_until = Some(1);
    assert_eq!(alert.due_label().as_deref(), Some("due in 1 day"));
    alert.days_until = Some(12);
    assert_eq!(alert.due_label().as_deref(), Some("due in 12 days"));
    alert.days_until = Some(-1);
    assert_eq!(alert.due_label().as_deref(), Some("overdue by 1 day"));
    alert.days_until = Some(-4);
    assert_eq!(alert.due_label().as_deref(), Some("overdue by 4 days"));
}

// =============================================================
// Query / health
// =============================================================

#[test]
fn query_request_serializes_raw_text() {
    let body = serde_json::to_value(QueryRequest { query: "  fuel efficiency? " }).unwrap();
    assert_eq!(body, json!({ "query": "  fuel efficiency? " }));
}

#[test]
fn query_response_ignores_extra_fields() {
    let resp: QueryResponse = serde_json::from_value(json!({
        "query": "fuel?",
        "response": "Average burn is 38 L/hr.",
        "query_type": "fuel",
        "data": { "avg": 38 },
        "timestamp": "2024-03-01T10:00:00"
    }))
    .unwrap();
    assert_eq!(resp.response.as_deref(), Some("Average burn is 38 L/hr."));
    assert_eq!(resp.data, Some(json!({ "avg": 38 })));
}

#[test]
fn query_response_null_data_is_none() {
    let resp: QueryResponse = serde_json::from_value(json!({ "response": "ok", "data": null })).unwrap();
    assert_eq!(resp.data, None);
}

#[test]
fn health_status_reports_healthy() {
    let health: HealthStatus = serde_json::from_value(json!({
        "status": "healthy", "service": "AI Mining Operations Co-Pilot", "timestamp": "x"
    }))
    .unwrap();
    assert!(health.is_healthy());
    assert!(!HealthStatus::default().is_healthy());
}

#[test]
fn number_from_value_rejects_non_numbers() {
    assert_eq!(number_from_value(&json!(true)), None);
    assert_eq!(number_from_value(&json!([1])), None);
    assert_eq!(number_from_value(&json!("NaN")), None);
    assert_eq!(number_from_value(&json!(2.5)), Some(2.5));
}
