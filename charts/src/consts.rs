//! Shared numeric constants for the charts crate.

// ── Plot padding (CSS pixels) ───────────────────────────────────

/// Space left of the plot for y-axis tick labels.
pub const PAD_LEFT_PX: f64 = 48.0;

/// Space right of the plot.
pub const PAD_RIGHT_PX: f64 = 16.0;

/// Space above the plot for the legend row.
pub const PAD_TOP_PX: f64 = 32.0;

/// Space below the plot for category labels.
pub const PAD_BOTTOM_PX: f64 = 28.0;

// ── Axis ────────────────────────────────────────────────────────

/// Preferred number of y-axis intervals.
pub const Y_TICK_TARGET: usize = 5;

/// Upper bound on y-axis intervals, whatever the step works out to.
pub const Y_TICK_MAX: u32 = 50;

/// Font used for tick labels and the legend.
pub const LABEL_FONT: &str = "12px sans-serif";

// ── Series styling ──────────────────────────────────────────────

/// Fraction of a category slot covered by its bar group.
pub const BAR_GROUP_RATIO: f64 = 0.7;

/// Dash pattern for reference lines (on, off).
pub const REFERENCE_DASH: [f64; 2] = [5.0, 5.0];

/// Radius of the marker drawn at each line-chart point.
pub const POINT_RADIUS_PX: f64 = 3.0;

/// Legend swatch edge length.
pub const LEGEND_SWATCH_PX: f64 = 12.0;
