//! Chart model, lifecycle, and 2D-canvas rendering for the dashboard.
//!
//! This crate is compiled to WebAssembly alongside the client. Pages describe
//! what to plot with a [`model::ChartConfig`]; a [`slot::ChartSlot`] owns the
//! single live chart bound to one canvas and replaces it wholesale when new
//! data arrives; [`render`] turns a config into pixels.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | Chart kinds, datasets, theme, and [`model::ChartConfig`] |
//! | [`layout`] | Plot-area geometry and y-axis scaling (no browser types) |
//! | [`slot`] | Owned chart handle with destroy-before-rebuild semantics |
//! | [`render`] | `CanvasRenderingContext2d` drawing and the canvas [`slot::Surface`] |
//! | [`consts`] | Shared numeric constants (padding, tick counts, dash patterns) |

pub mod consts;
pub mod layout;
pub mod model;
pub mod render;
pub mod slot;

/// Error produced while binding or painting a chart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChartError {
    /// The canvas element did not yield a 2D rendering context.
    #[error("2d rendering context unavailable")]
    ContextUnavailable,
    /// A `Canvas2D` call failed.
    #[error("canvas call failed: {0}")]
    Canvas(String),
}
