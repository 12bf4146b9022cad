//! Projection of dashboard feeds into chart configs.
//!
//! Values stay index-aligned with their category labels: a record with an
//! unusable reading yields a gap at its own index rather than shifting the
//! series.

#[cfg(test)]
#[path = "chart_data_test.rs"]
mod chart_data_test;

use charts::model::{ChartConfig, ChartKind, Dataset};

use crate::net::types::{EquipmentRecord, ProductionRecord};

pub const FUEL_LABEL: &str = "Fuel Efficiency (L/hr)";
pub const ORE_LABEL: &str = "Ore Extracted (tons)";
pub const TARGET_LABEL: &str = "Target (tons)";

const FUEL_STROKE: &str = "rgba(50, 130, 184, 1)";
const FUEL_FILL: &str = "rgba(50, 130, 184, 0.6)";
const ORE_STROKE: &str = "rgba(39, 174, 96, 1)";
const ORE_FILL: &str = "rgba(39, 174, 96, 0.2)";
const TARGET_STROKE: &str = "rgba(243, 156, 18, 1)";

/// Which dashboard chart a canvas hosts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartTarget {
    FuelEfficiency,
    Production,
}

impl ChartTarget {
    #[must_use]
    pub fn canvas_id(self) -> &'static str {
        match self {
            Self::FuelEfficiency => "fuelChart",
            Self::Production => "productionChart",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::FuelEfficiency => "Equipment Fuel Efficiency",
            Self::Production => "Production vs Target",
        }
    }

    /// Build this chart's config from the current feeds.
    #[must_use]
    pub fn build(self, equipment: &[EquipmentRecord], production: &[ProductionRecord]) -> ChartConfig {
        match self {
            Self::FuelEfficiency => fuel_chart(equipment),
            Self::Production => production_chart(production),
        }
    }
}

/// Bar chart of fuel efficiency, one bar per equipment record in input order.
#[must_use]
pub fn fuel_chart(equipment: &[EquipmentRecord]) -> ChartConfig {
    let labels = equipment.iter().map(|e| e.name.clone()).collect();
    let values = equipment.iter().map(|e| e.fuel_efficiency).collect();
    ChartConfig::new(ChartKind::Bar, labels)
        .with_dataset(Dataset::new(FUEL_LABEL, values).colors(FUEL_STROKE, FUEL_FILL))
}

/// Line chart of ore extracted (filled) against the dashed daily target.
#[must_use]
pub fn production_chart(production: &[ProductionRecord]) -> ChartConfig {
    let labels = production.iter().map(|p| p.date.clone()).collect();
    let ore = production.iter().map(|p| p.ore_extracted_tons).collect();
    let target = production.iter().map(|p| p.target_tons).collect();
    ChartConfig::new(ChartKind::Line, labels)
        .with_dataset(
            Dataset::new(ORE_LABEL, ore)
                .colors(ORE_STROKE, ORE_FILL)
                .filled(true)
                .line_width(2.0),
        )
        .with_dataset(
            Dataset::new(TARGET_LABEL, target)
                .colors(TARGET_STROKE, TARGET_STROKE)
                .reference()
                .line_width(2.0),
        )
}
