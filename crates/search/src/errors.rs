use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// Store connectivity or query failure; maps to a 5xx at the HTTP layer.
    #[error("search backend unavailable: {0}")]
    Unavailable(String),
    /// Duplicate-key race during sync; callers treat it as "already synced".
    #[error("sync conflict: {0}")]
    Conflict(String),
}

impl SearchError {
    pub fn unavailable(e: impl ToString) -> Self {
        Self::Unavailable(e.to_string())
    }

    /// Classify a store insert failure: a unique-key violation is a
    /// [`SearchError::Conflict`], everything else is backend trouble.
    pub fn from_insert_err(e: sea_orm::DbErr) -> Self {
        match e.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) => Self::Conflict(msg),
            _ => Self::Unavailable(e.to_string()),
        }
    }
}
