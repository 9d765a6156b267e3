//! Field validators shared by construction and setters.

use cosmos_core::ValidationError;

/// Required text: present and at least one character long.
pub(crate) fn required_text(
    entity: &'static str,
    field: &'static str,
    value: Option<String>,
    message: &str,
) -> Result<String, ValidationError> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(reject(entity, field, message)),
    }
}

/// Required foreign key: present. Existence is checked by the store.
pub(crate) fn required_id<T>(
    entity: &'static str,
    field: &'static str,
    value: Option<T>,
    message: &str,
) -> Result<T, ValidationError> {
    value.ok_or_else(|| reject(entity, field, message))
}

fn reject(entity: &'static str, field: &'static str, message: &str) -> ValidationError {
    tracing::debug!(entity, field, "rejected field assignment");
    ValidationError::new(entity, field, message)
}
