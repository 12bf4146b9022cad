//! Owned chart handle bound to one drawing surface.
//!
//! A [`ChartSlot`] holds at most one live [`Chart`]. [`ChartSlot::replace`]
//! releases the previous chart before the next one is built, so a reload can
//! never leave two charts painting into the same canvas. Dropping a chart
//! releases its surface.

#[cfg(test)]
#[path = "slot_test.rs"]
mod slot_test;

use crate::ChartError;
use crate::model::ChartConfig;

/// A drawing target a chart can be bound to.
pub trait Surface {
    /// Paint `config`, replacing whatever the surface showed before.
    ///
    /// # Errors
    ///
    /// Returns a [`ChartError`] if the underlying drawing calls fail.
    fn paint(&mut self, config: &ChartConfig) -> Result<(), ChartError>;

    /// Clear the surface and let go of anything held for painting.
    fn release(&mut self);
}

/// A chart instance: a surface plus the config painted on it.
pub struct Chart<S: Surface> {
    surface: S,
    config: ChartConfig,
}

impl<S: Surface> Chart<S> {
    /// Bind `config` to `surface` and paint it once.
    ///
    /// # Errors
    ///
    /// Returns the paint error; the surface is released before returning.
    pub fn build(surface: S, config: ChartConfig) -> Result<Self, ChartError> {
        let mut chart = Self { surface, config };
        chart.repaint()?;
        Ok(chart)
    }

    /// Paint the current config again (e.g. after a resize).
    ///
    /// # Errors
    ///
    /// Returns a [`ChartError`] if painting fails.
    pub fn repaint(&mut self) -> Result<(), ChartError> {
        self.surface.paint(&self.config)
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }
}

impl<S: Surface> Drop for Chart<S> {
    fn drop(&mut self) {
        self.surface.release();
    }
}

/// Single-owner holder for the chart bound to one canvas.
pub struct ChartSlot<S: Surface> {
    live: Option<Chart<S>>,
    builds: u64,
}

impl<S: Surface> Default for ChartSlot<S> {
    fn default() -> Self {
        Self { live: None, builds: 0 }
    }
}

impl<S: Surface> ChartSlot<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the live chart with one built from `config` on `surface`.
    ///
    /// Returns `Ok(false)` without touching the current chart when `surface`
    /// is `None` (the canvas is not mounted yet).
    ///
    /// # Errors
    ///
    /// Returns a [`ChartError`] if the new chart fails to paint. The previous
    /// chart has already been released at that point and the slot is empty.
    pub fn replace(&mut self, surface: Option<S>, config: ChartConfig) -> Result<bool, ChartError> {
        let Some(surface) = surface else {
            return Ok(false);
        };
        self.clear();
        let chart = Chart::build(surface, config)?;
        self.live = Some(chart);
        self.builds += 1;
        Ok(true)
    }

    /// Release the live chart, if any.
    pub fn clear(&mut self) {
        drop(self.live.take());
    }

    #[must_use]
    pub fn live(&self) -> Option<&Chart<S>> {
        self.live.as_ref()
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    /// Number of charts successfully built in this slot.
    #[must_use]
    pub fn builds(&self) -> u64 {
        self.builds
    }
}
