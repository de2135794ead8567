use models::ModelError;
use thiserror::Error;

use crate::storage::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("{0}")]
    Duplicate(String),
    #[error("{0}")]
    NotFound(String),
    #[error("new data not detected for {0}")]
    NoChange(String),
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => Self::Validation(msg),
        }
    }
}

impl ServiceError {
    pub fn not_found(entity: &str, key: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("{entity} {key} not found"))
    }

    pub fn duplicate(entity: &str, key: impl std::fmt::Display) -> Self {
        Self::Duplicate(format!("{entity} {key} already exists"))
    }

    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Duplicate(_) => "duplicate",
            Self::NotFound(_) => "not_found",
            Self::NoChange(_) => "no_change",
            Self::Store(_) => "storage",
        }
    }
}
