//! Plot geometry: where the axes sit and how values map to pixels.
//!
//! Everything here is in CSS pixels and free of browser types so the math
//! can be tested natively. The renderer applies the device pixel ratio as a
//! context transform before using these coordinates.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::consts::{
    BAR_GROUP_RATIO, PAD_BOTTOM_PX, PAD_LEFT_PX, PAD_RIGHT_PX, PAD_TOP_PX, Y_TICK_MAX, Y_TICK_TARGET,
};
use crate::model::ChartConfig;

/// Axis-aligned rectangle in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Resolved geometry for one chart at one viewport size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotLayout {
    /// Region inside the axes.
    pub area: Rect,
    /// Value at the top of the y axis.
    pub y_max: f64,
    /// Distance between y-axis ticks.
    pub y_step: f64,
    pub categories: usize,
}

impl PlotLayout {
    /// Lay out `config` inside a `width` x `height` viewport.
    #[must_use]
    pub fn compute(config: &ChartConfig, width: f64, height: f64) -> Self {
        let area = Rect {
            x: PAD_LEFT_PX,
            y: PAD_TOP_PX,
            width: (width - PAD_LEFT_PX - PAD_RIGHT_PX).max(1.0),
            height: (height - PAD_TOP_PX - PAD_BOTTOM_PX).max(1.0),
        };
        let (y_max, y_step) = nice_axis(config.max_value(), Y_TICK_TARGET);
        Self { area, y_max, y_step, categories: config.category_count() }
    }

    /// Vertical pixel position of `value` (zero sits on the x axis).
    #[must_use]
    pub fn y_to_px(&self, value: f64) -> f64 {
        let clamped = value.clamp(0.0, self.y_max);
        self.area.bottom() - (clamped / self.y_max) * self.area.height
    }

    /// Width of one category slot.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn slot_width(&self) -> f64 {
        self.area.width / self.categories.max(1) as f64
    }

    /// Horizontal center of category `index`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn category_center(&self, index: usize) -> f64 {
        self.area.x + self.slot_width() * (index as f64 + 0.5)
    }

    /// Bar for `value` of dataset `series` (of `series_count`) in category `index`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn bar_rect(&self, index: usize, series: usize, series_count: usize, value: f64) -> Rect {
        let group_width = self.slot_width() * BAR_GROUP_RATIO;
        let bar_width = group_width / series_count.max(1) as f64;
        let group_left = self.category_center(index) - group_width * 0.5;
        let top = self.y_to_px(value);
        Rect {
            x: group_left + bar_width * series as f64,
            y: top,
            width: bar_width,
            height: self.area.bottom() - top,
        }
    }

    /// Tick values from zero to `y_max` inclusive, at most `Y_TICK_MAX + 1` of them.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn y_ticks(&self) -> Vec<f64> {
        let intervals = self.y_max / self.y_step;
        if !intervals.is_finite() || intervals < 0.0 {
            return vec![0.0];
        }
        let count = (intervals.round() as u32).min(Y_TICK_MAX);
        (0..=count).map(|i| self.y_step * f64::from(i)).collect()
    }
}

/// Pick a rounded axis top and tick step covering `max` with about `target` intervals.
///
/// Steps are 1, 2, or 5 times a power of ten. A non-positive or non-finite
/// `max`, or one too small to yield a positive step, gives a unit axis. When
/// rounding the top up would overflow, the axis ends at `max` itself.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn nice_axis(max: f64, target: usize) -> (f64, f64) {
    let target = target.max(1) as f64;
    let unit = (1.0, 1.0 / target);
    if !max.is_finite() || max <= 0.0 {
        return unit;
    }
    let raw_step = max / target;
    if !raw_step.is_normal() {
        return unit;
    }
    let magnitude = 10_f64.powi(raw_step.log10().floor() as i32);
    let residual = raw_step / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    let step = nice * magnitude;
    if !step.is_finite() || step <= 0.0 {
        return unit;
    }
    let top = (max / step).ceil() * step;
    if top.is_finite() {
        (top, step)
    } else {
        (max, raw_step)
    }
}

/// Format a tick value without trailing zeros.
#[must_use]
pub fn format_tick(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        let text = format!("{value:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_owned()
    }
}
