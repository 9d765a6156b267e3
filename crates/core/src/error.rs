//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// A constrained field rejected the value it was given.
///
/// `Display` is the human-readable message only, so the API layer can hand it
/// to users as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub entity: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(entity: &'static str, field: &'static str, message: impl Into<String>) -> Self {
        Self {
            entity,
            field,
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Domain-level error.
///
/// Keep this focused on deterministic domain failures. Storage failures live in
/// the infra crate and are never folded into these variants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field value failed validation on assignment.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested record was not found (domain-level).
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(entity: &'static str, field: &'static str, msg: impl Into<String>) -> Self {
        Self::Validation(ValidationError::new(entity, field, msg))
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// The validation payload, if this is a validation failure.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            DomainError::Validation(e) => Some(e),
            _ => None,
        }
    }
}
