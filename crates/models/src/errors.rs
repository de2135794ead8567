use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid input: {0}")]
    Validation(String),
}

impl ModelError {
    pub fn invalid(msg: impl Into<String>) -> Self { Self::Validation(msg.into()) }
}
