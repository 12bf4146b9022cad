//! Dashboard feed state: snapshot, alerts, and backend health.
//!
//! DESIGN
//! ======
//! Each feed is replaced wholesale on success. A failed fetch is logged and
//! marks the feed `Unavailable` but never clears what was already shown, so
//! a flaky backend degrades to stale data instead of an empty page.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use serde_json::{Map, Value};

use super::Store;
use crate::net::api::{ApiError, DashboardBackend};
use crate::net::types::{Alert, EquipmentRecord, HealthStatus, ProductionRecord, Snapshot};

/// Lifecycle of one fetched feed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedStatus {
    /// Not requested yet.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// Last request succeeded.
    Ready,
    /// Last request failed; any data shown is from an earlier success.
    Unavailable,
}

/// View state for the dashboard page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub equipment: Vec<EquipmentRecord>,
    pub production: Vec<ProductionRecord>,
    pub carbon_footprint: Map<String, Value>,
    pub alerts: Vec<Alert>,
    pub snapshot_status: FeedStatus,
    pub alerts_status: FeedStatus,
    /// Bumped on every successful snapshot; charts rebuild when it changes.
    pub snapshot_rev: u64,
    /// `None` until the health check answers.
    pub backend_online: Option<bool>,
}

impl DashboardState {
    /// Mark both feeds as in flight.
    pub fn begin_loading(&mut self) {
        self.snapshot_status = FeedStatus::Loading;
        self.alerts_status = FeedStatus::Loading;
    }

    pub fn apply_snapshot(&mut self, result: Result<Snapshot, ApiError>) {
        match result {
            Ok(snapshot) => {
                self.equipment = snapshot.equipment;
                self.production = snapshot.production;
                self.carbon_footprint = snapshot.carbon_footprint;
                self.snapshot_status = FeedStatus::Ready;
                self.snapshot_rev += 1;
                log::debug!(
                    "snapshot loaded: {} equipment, {} production days",
                    self.equipment.len(),
                    self.production.len()
                );
            }
            Err(e) => {
                log::warn!("dashboard data unavailable: {e}");
                self.snapshot_status = FeedStatus::Unavailable;
            }
        }
    }

    pub fn apply_alerts(&mut self, result: Result<Vec<Alert>, ApiError>) {
        match result {
            Ok(alerts) => {
                self.alerts = alerts;
                self.alerts_status = FeedStatus::Ready;
            }
            Err(e) => {
                log::warn!("maintenance alerts unavailable: {e}");
                self.alerts_status = FeedStatus::Unavailable;
            }
        }
    }

    pub fn apply_health(&mut self, result: Result<HealthStatus, ApiError>) {
        self.backend_online = Some(match result {
            Ok(health) => health.is_healthy(),
            Err(e) => {
                log::warn!("health check failed: {e}");
                false
            }
        });
    }

    /// Whether either feed failed on its last attempt.
    #[must_use]
    pub fn has_unavailable_feed(&self) -> bool {
        self.snapshot_status == FeedStatus::Unavailable || self.alerts_status == FeedStatus::Unavailable
    }
}

/// Fetch `/api/data` and fold the outcome into `store`.
pub async fn load_snapshot<B, S>(backend: &B, store: &S)
where
    B: DashboardBackend + ?Sized,
    S: Store<DashboardState>,
{
    let result = backend.fetch_snapshot().await;
    store.modify(|state| state.apply_snapshot(result));
}

/// Fetch `/api/alerts` and fold the outcome into `store`.
pub async fn load_alerts<B, S>(backend: &B, store: &S)
where
    B: DashboardBackend + ?Sized,
    S: Store<DashboardState>,
{
    let result = backend.fetch_alerts().await;
    store.modify(|state| state.apply_alerts(result));
}

/// Probe `/api/health` once and record whether the backend is online.
pub async fn check_health<B, S>(backend: &B, store: &S)
where
    B: DashboardBackend + ?Sized,
    S: Store<DashboardState>,
{
    let result = backend.health().await;
    store.modify(|state| state.apply_health(result));
}
