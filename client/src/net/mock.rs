//! Scripted [`DashboardBackend`] for unit tests.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::api::{ApiError, DashboardBackend};
use super::types::{Alert, HealthStatus, QueryAnswer, Snapshot};

/// Returns canned results and counts every call.
#[derive(Default)]
pub(crate) struct MockBackend {
    pub snapshot: RefCell<Option<Result<Snapshot, ApiError>>>,
    pub alerts: RefCell<Option<Result<Vec<Alert>, ApiError>>>,
    pub answer: RefCell<Option<Result<QueryAnswer, ApiError>>>,
    pub health: RefCell<Option<Result<HealthStatus, ApiError>>>,
    pub queries: RefCell<Vec<String>>,
    pub fetches: Cell<usize>,
    /// When set, `query` records the question and then never resolves.
    pub stall_queries: Cell<bool>,
}

impl MockBackend {
    pub fn answering(text: &str) -> Self {
        let backend = Self::default();
        *backend.answer.borrow_mut() = Some(Ok(QueryAnswer { text: text.to_owned(), data: None }));
        backend
    }

    pub fn failing_queries() -> Self {
        let backend = Self::default();
        *backend.answer.borrow_mut() = Some(Err(ApiError::Status(500)));
        backend
    }
}

#[async_trait(?Send)]
impl DashboardBackend for MockBackend {
    async fn fetch_snapshot(&self) -> Result<Snapshot, ApiError> {
        self.fetches.set(self.fetches.get() + 1);
        self.snapshot.borrow().clone().unwrap_or(Err(ApiError::Unavailable))
    }

    async fn fetch_alerts(&self) -> Result<Vec<Alert>, ApiError> {
        self.fetches.set(self.fetches.get() + 1);
        self.alerts.borrow().clone().unwrap_or(Err(ApiError::Unavailable))
    }

    async fn query(&self, question: &str) -> Result<QueryAnswer, ApiError> {
        self.queries.borrow_mut().push(question.to_owned());
        if self.stall_queries.get() {
            futures::future::pending::<()>().await;
        }
        self.answer.borrow().clone().unwrap_or(Err(ApiError::Unavailable))
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.health.borrow().clone().unwrap_or(Err(ApiError::Unavailable))
    }
}
