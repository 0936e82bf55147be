use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;
use trip::{Event, Vacation};

/// Failure modes of the persistence collaborator, each with a
/// machine-readable code for callers that dispatch on it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Vacation not found: {0}")]
    NotFound(String),

    #[error("Connectivity failure: {0}")]
    Connectivity(String),

    #[error("Remote validation rejected the write: {0}")]
    RemoteValidation(String),
}

impl StoreError {
    pub fn code(&self) -> &str {
        match self {
            StoreError::NotFound(_) => "not_found",
            StoreError::Connectivity(_) => "connectivity",
            StoreError::RemoteValidation(_) => "remote_validation",
        }
    }
}

/// Persistence collaborator for vacations and their events.
///
/// Reads are eventually consistent with this client's prior writes; no
/// cross-client guarantee is assumed. `update_event` has upsert semantics
/// keyed by vacation id + event id.
#[async_trait]
pub trait VacationStore: Send + Sync {
    async fn get_vacation(&self, vacation_id: &str) -> Result<Vacation, StoreError>;

    async fn update_event(
        &self,
        vacation_id: &str,
        event_id: &str,
        event: Event,
    ) -> Result<Event, StoreError>;
}

#[derive(Default)]
struct MemoryStoreInner {
    vacations: HashMap<String, Vacation>,
    fail_next_update: Option<StoreError>,
}

/// In-memory `VacationStore` used by tests and the CLI demo shell.
///
/// `fail_next_update` lets a test inject exactly one remote write failure
/// to exercise the pipeline's reconciliation path.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryStoreInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_vacation(&self, vacation: Vacation) {
        let mut inner = self.inner.write().await;
        inner.vacations.insert(vacation.id.clone(), vacation);
    }

    /// Arrange for the next `update_event` call to fail with `error`.
    pub async fn fail_next_update(&self, error: StoreError) {
        let mut inner = self.inner.write().await;
        inner.fail_next_update = Some(error);
    }
}

#[async_trait]
impl VacationStore for MemoryStore {
    async fn get_vacation(&self, vacation_id: &str) -> Result<Vacation, StoreError> {
        let inner = self.inner.read().await;
        inner
            .vacations
            .get(vacation_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(vacation_id.to_string()))
    }

    async fn update_event(
        &self,
        vacation_id: &str,
        event_id: &str,
        event: Event,
    ) -> Result<Event, StoreError> {
        let mut inner = self.inner.write().await;
        if let Some(error) = inner.fail_next_update.take() {
            return Err(error);
        }
        let vacation = inner
            .vacations
            .get_mut(vacation_id)
            .ok_or_else(|| StoreError::NotFound(vacation_id.to_string()))?;

        match vacation
            .stored_events
            .iter_mut()
            .find(|existing| existing.id == event_id)
        {
            Some(existing) => *existing = event.clone(),
            None => vacation.stored_events.push(event.clone()),
        }
        Ok(event)
    }
}
