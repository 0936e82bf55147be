use crate::store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ItineraryError {
    /// Input to the update pipeline was malformed or out of bounds.
    /// Carries the single human-readable message surfaced to the user.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Vacation not found: {0}")]
    VacationNotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
