//! Shared error type for catalog operations
//!
//! Component-specific failures (draft storage, assembly, wizard flow) carry
//! their own error enums next to the code that raises them; this type covers
//! the failures shared-level operations can produce.

use thiserror::Error;

/// Errors raised by shared-level catalog operations
#[derive(Debug, Error)]
pub enum AppError {
    /// Schema validation failed; the inner value maps field paths to messages
    #[error("validation failed")]
    Validation(#[from] validator::ValidationErrors),

    /// Referenced resource does not exist
    #[error("not found: {0}")]
    NotFound(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Flatten validation messages for display, one per offending field.
    pub fn field_messages(&self) -> Vec<String> {
        match self {
            Self::Validation(errors) => errors
                .field_errors()
                .iter()
                .flat_map(|(field, errs)| {
                    errs.iter().map(move |e| {
                        let message = e
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string());
                        format!("{field}: {message}")
                    })
                })
                .collect(),
            other => vec![other.to_string()],
        }
    }
}
