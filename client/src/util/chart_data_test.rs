use super::*;

fn equipment(name: &str, fuel: Option<f64>) -> EquipmentRecord {
    EquipmentRecord { name: name.to_owned(), fuel_efficiency: fuel, ..Default::default() }
}

fn day(date: &str, ore: Option<f64>, target: Option<f64>) -> ProductionRecord {
    ProductionRecord { date: date.to_owned(), ore_extracted_tons: ore, target_tons: target, ..Default::default() }
}

#[test]
fn fuel_chart_is_single_bar_dataset_in_input_order() {
    let config = fuel_chart(&[equipment("Truck 7", Some(42.0)), equipment("Dozer 1", Some(18.5))]);
    assert_eq!(config.kind, ChartKind::Bar);
    assert_eq!(config.labels, vec!["Truck 7", "Dozer 1"]);
    assert_eq!(config.datasets.len(), 1);
    assert_eq!(config.datasets[0].label, "Fuel Efficiency (L/hr)");
    assert_eq!(config.datasets[0].values, vec![Some(42.0), Some(18.5)]);
}

#[test]
fn fuel_chart_keeps_gap_for_missing_reading() {
    let config = fuel_chart(&[equipment("A", Some(1.0)), equipment("B", None), equipment("C", Some(3.0))]);
    assert_eq!(config.datasets[0].values, vec![Some(1.0), None, Some(3.0)]);
    assert!(config.is_aligned());
}

#[test]
fn production_chart_has_filled_series_and_dashed_target() {
    let config = production_chart(&[
        day("2024-03-01", Some(1500.0), Some(1400.0)),
        day("2024-03-02", Some(1320.0), Some(1400.0)),
    ]);
    assert_eq!(config.kind, ChartKind::Line);
    assert_eq!(config.labels, vec!["2024-03-01", "2024-03-02"]);

    let ore = &config.datasets[0];
    assert_eq!(ore.label, "Ore Extracted (tons)");
    assert!(ore.filled);
    assert!(ore.dash.is_empty());

    let target = &config.datasets[1];
    assert_eq!(target.label, "Target (tons)");
    assert!(!target.filled);
    assert_eq!(target.dash, vec![5.0, 5.0]);
}

#[test]
fn production_chart_is_index_aligned_with_gaps() {
    let config = production_chart(&[
        day("d1", Some(10.0), Some(12.0)),
        day("d2", None, Some(12.0)),
        day("d3", Some(11.0), None),
    ]);
    assert!(config.is_aligned());
    assert_eq!(config.datasets[0].values, vec![Some(10.0), None, Some(11.0)]);
    assert_eq!(config.datasets[1].values, vec![Some(12.0), Some(12.0), None]);
}

#[test]
fn empty_feeds_give_empty_charts() {
    assert_eq!(fuel_chart(&[]).category_count(), 0);
    assert!(production_chart(&[]).is_aligned());
}

#[test]
fn chart_targets_build_matching_configs() {
    let fleet = [equipment("Truck", Some(5.0))];
    let days = [day("d1", Some(1.0), Some(2.0))];
    assert_eq!(ChartTarget::FuelEfficiency.build(&fleet, &days), fuel_chart(&fleet));
    assert_eq!(ChartTarget::Production.build(&fleet, &days), production_chart(&days));
    assert_ne!(ChartTarget::FuelEfficiency.canvas_id(), ChartTarget::Production.canvas_id());
}
