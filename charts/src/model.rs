//! Declarative chart description consumed by the renderer.
//!
//! A [`ChartConfig`] is plain data: category labels plus one or more
//! [`Dataset`]s whose values are index-aligned with those labels. A `None`
//! value is a gap, so a missing reading never shifts later points.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use crate::consts::REFERENCE_DASH;

/// Visual form of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Vertical bars, one group per category.
    Bar,
    /// Polyline through one point per category.
    Line,
}

/// Text and grid colors shared by every chart on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub text: String,
    pub grid: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self { text: "#e0e0e0".to_owned(), grid: "rgba(255, 255, 255, 0.1)".to_owned() }
    }
}

/// One labelled series of values.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub values: Vec<Option<f64>>,
    /// Outline / line color.
    pub stroke: String,
    /// Bar fill, or the area fill under a filled line.
    pub fill: String,
    /// Line charts only: shade the area between the line and the x axis.
    pub filled: bool,
    /// Line dash pattern; empty for a solid line.
    pub dash: Vec<f64>,
    pub line_width: f64,
}

impl Dataset {
    #[must_use]
    pub fn new(label: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            label: label.into(),
            values,
            stroke: "rgba(50, 130, 184, 1)".to_owned(),
            fill: "rgba(50, 130, 184, 0.6)".to_owned(),
            filled: false,
            dash: Vec::new(),
            line_width: 1.0,
        }
    }

    #[must_use]
    pub fn colors(mut self, stroke: impl Into<String>, fill: impl Into<String>) -> Self {
        self.stroke = stroke.into();
        self.fill = fill.into();
        self
    }

    #[must_use]
    pub fn filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    /// Render as a dashed reference line.
    #[must_use]
    pub fn reference(mut self) -> Self {
        self.dash = REFERENCE_DASH.to_vec();
        self
    }

    #[must_use]
    pub fn line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    /// Largest finite value, if any.
    #[must_use]
    pub fn max_value(&self) -> Option<f64> {
        self.values
            .iter()
            .flatten()
            .copied()
            .filter(|v| v.is_finite())
            .reduce(f64::max)
    }
}

/// Everything needed to draw one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub theme: Theme,
}

impl ChartConfig {
    #[must_use]
    pub fn new(kind: ChartKind, labels: Vec<String>) -> Self {
        Self { kind, labels, datasets: Vec::new(), theme: Theme::default() }
    }

    #[must_use]
    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    /// Number of categories along the x axis.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.labels.len()
    }

    /// Largest finite value across all datasets, floored at zero so the
    /// y axis always begins at zero.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.datasets
            .iter()
            .filter_map(Dataset::max_value)
            .fold(0.0, f64::max)
    }

    /// Whether every dataset has exactly one value per label.
    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.datasets
            .iter()
            .all(|d| d.values.len() == self.labels.len())
    }
}
