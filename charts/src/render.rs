//! Rendering: draws a [`ChartConfig`] to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! Geometry comes from [`crate::layout`]; this code only issues drawing calls.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! [`CanvasSurface::paint`] converts them into [`ChartError`].

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::ChartError;
use crate::consts::{LABEL_FONT, LEGEND_SWATCH_PX, PAD_LEFT_PX, POINT_RADIUS_PX};
use crate::layout::{PlotLayout, format_tick};
use crate::model::{ChartConfig, ChartKind, Dataset};
use crate::slot::Surface;

/// A `<canvas>` element plus its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2D context of `canvas`.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::ContextUnavailable`] if the element has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, ChartError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_error)?
            .ok_or(ChartError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ChartError::ContextUnavailable)?;
        Ok(Self { canvas, ctx })
    }

    /// Size the backing store to the element's CSS size times the device pixel ratio.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn sync_backing_store(&self) -> (f64, f64, f64) {
        let dpr = web_sys::window()
            .map_or(1.0, |w| w.device_pixel_ratio())
            .max(1.0);
        let width = f64::from(self.canvas.client_width()).max(1.0);
        let height = f64::from(self.canvas.client_height()).max(1.0);
        self.canvas.set_width((width * dpr).round() as u32);
        self.canvas.set_height((height * dpr).round() as u32);
        (width, height, dpr)
    }
}

impl Surface for CanvasSurface {
    fn paint(&mut self, config: &ChartConfig) -> Result<(), ChartError> {
        let (width, height, dpr) = self.sync_backing_store();
        draw(&self.ctx, config, width, height, dpr).map_err(js_error)
    }

    fn release(&mut self) {
        // Clearing in device pixels needs the identity transform.
        if self
            .ctx
            .set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
            .is_ok()
        {
            self.ctx.clear_rect(
                0.0,
                0.0,
                f64::from(self.canvas.width()),
                f64::from(self.canvas.height()),
            );
        }
    }
}

fn js_error(err: JsValue) -> ChartError {
    ChartError::Canvas(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// Draw the full chart: grid, axes labels, series, legend.
///
/// `width` and `height` are in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    config: &ChartConfig,
    width: f64,
    height: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    let layout = PlotLayout::compute(config, width, height);

    // Layer 1: clear and scale to CSS pixels.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, width, height);

    // Layer 2: grid and tick labels.
    draw_grid(ctx, config, &layout)?;

    // Layer 3: series.
    let count = config.datasets.len();
    for (series, dataset) in config.datasets.iter().enumerate() {
        match config.kind {
            ChartKind::Bar => draw_bars(ctx, dataset, &layout, series, count),
            ChartKind::Line => draw_line(ctx, dataset, &layout)?,
        }
    }

    // Layer 4: legend.
    draw_legend(ctx, config)
}

// =============================================================
// Axes
// =============================================================

fn draw_grid(ctx: &CanvasRenderingContext2d, config: &ChartConfig, layout: &PlotLayout) -> Result<(), JsValue> {
    let area = layout.area;
    ctx.save();
    ctx.set_font(LABEL_FONT);
    ctx.set_stroke_style_str(&config.theme.grid);
    ctx.set_fill_style_str(&config.theme.text);
    ctx.set_line_width(1.0);

    ctx.set_text_align("right");
    ctx.set_text_baseline("middle");
    for tick in layout.y_ticks() {
        let y = layout.y_to_px(tick);
        ctx.begin_path();
        ctx.move_to(area.x, y);
        ctx.line_to(area.right(), y);
        ctx.stroke();
        ctx.fill_text(&format_tick(tick), area.x - 6.0, y)?;
    }

    ctx.set_text_align("center");
    ctx.set_text_baseline("top");
    for (index, label) in config.labels.iter().enumerate() {
        let x = layout.category_center(index);
        ctx.begin_path();
        ctx.move_to(x, area.y);
        ctx.line_to(x, area.bottom());
        ctx.stroke();
        ctx.fill_text_with_max_width(label, x, area.bottom() + 6.0, layout.slot_width())?;
    }

    ctx.restore();
    Ok(())
}

// =============================================================
// Series renderers
// =============================================================

fn draw_bars(ctx: &CanvasRenderingContext2d, dataset: &Dataset, layout: &PlotLayout, series: usize, count: usize) {
    ctx.save();
    ctx.set_fill_style_str(&dataset.fill);
    ctx.set_stroke_style_str(&dataset.stroke);
    ctx.set_line_width(dataset.line_width);
    for (index, value) in dataset.values.iter().enumerate() {
        let Some(value) = value.filter(|v| v.is_finite()) else {
            continue;
        };
        let bar = layout.bar_rect(index, series, count, value);
        ctx.fill_rect(bar.x, bar.y, bar.width, bar.height);
        ctx.stroke_rect(bar.x, bar.y, bar.width, bar.height);
    }
    ctx.restore();
}

fn draw_line(ctx: &CanvasRenderingContext2d, dataset: &Dataset, layout: &PlotLayout) -> Result<(), JsValue> {
    let runs = point_runs(dataset, layout);

    ctx.save();
    if dataset.filled {
        ctx.set_fill_style_str(&dataset.fill);
        for run in &runs {
            fill_under(ctx, run, layout.area.bottom());
        }
    }

    ctx.set_stroke_style_str(&dataset.stroke);
    ctx.set_line_width(dataset.line_width.max(1.0));
    let dash = js_sys::Array::new();
    for segment in &dataset.dash {
        dash.push(&JsValue::from_f64(*segment));
    }
    ctx.set_line_dash(&dash)?;
    for run in &runs {
        stroke_run(ctx, run);
    }
    ctx.set_line_dash(&js_sys::Array::new())?;

    ctx.set_fill_style_str(&dataset.stroke);
    for &(x, y) in runs.iter().flatten() {
        ctx.begin_path();
        ctx.arc(x, y, POINT_RADIUS_PX, 0.0, std::f64::consts::TAU)?;
        ctx.fill();
    }
    ctx.restore();
    Ok(())
}

/// Split a dataset into contiguous runs of present values; gaps break the line.
fn point_runs(dataset: &Dataset, layout: &PlotLayout) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (index, value) in dataset.values.iter().enumerate() {
        match value.filter(|v| v.is_finite()) {
            Some(v) => current.push((layout.category_center(index), layout.y_to_px(v))),
            None => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

fn stroke_run(ctx: &CanvasRenderingContext2d, run: &[(f64, f64)]) {
    let Some(&(x0, y0)) = run.first() else {
        return;
    };
    ctx.begin_path();
    ctx.move_to(x0, y0);
    for &(x, y) in &run[1..] {
        ctx.line_to(x, y);
    }
    ctx.stroke();
}

fn fill_under(ctx: &CanvasRenderingContext2d, run: &[(f64, f64)], baseline: f64) {
    let (Some(&(first_x, _)), Some(&(last_x, _))) = (run.first(), run.last()) else {
        return;
    };
    ctx.begin_path();
    ctx.move_to(first_x, baseline);
    for &(x, y) in run {
        ctx.line_to(x, y);
    }
    ctx.line_to(last_x, baseline);
    ctx.close_path();
    ctx.fill();
}

// =============================================================
// Legend
// =============================================================

fn draw_legend(ctx: &CanvasRenderingContext2d, config: &ChartConfig) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_font(LABEL_FONT);
    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");

    let y = LEGEND_SWATCH_PX;
    let mut x = PAD_LEFT_PX;
    for dataset in &config.datasets {
        ctx.set_fill_style_str(&dataset.fill);
        ctx.set_stroke_style_str(&dataset.stroke);
        ctx.fill_rect(x, y - LEGEND_SWATCH_PX * 0.5, LEGEND_SWATCH_PX, LEGEND_SWATCH_PX);
        ctx.stroke_rect(x, y - LEGEND_SWATCH_PX * 0.5, LEGEND_SWATCH_PX, LEGEND_SWATCH_PX);
        x += LEGEND_SWATCH_PX + 6.0;

        ctx.set_fill_style_str(&config.theme.text);
        ctx.fill_text(&dataset.label, x, y)?;
        x += ctx.measure_text(&dataset.label)?.width() + 18.0;
    }

    ctx.restore();
    Ok(())
}
