//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Every variant is recoverable: the caller reports it and the state it
/// was about to change stays as it was, except for [`DomainError::Exhausted`]
/// which leaves the draw engine in its sticky exhausted state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0} must not be empty")]
    EmptyInput(String),

    #[error("{kind} '{name}' not found")]
    NotFound { kind: &'static str, name: String },

    #[error("Everyone has presented!")]
    Exhausted,

    #[error("Invalid group parameters: {0}")]
    InvalidGroupParameters(String),

    #[error("Import failed: {0}")]
    ImportParseFailure(String),
}

impl DomainError {
    pub fn empty(what: impl Into<String>) -> Self {
        Self::EmptyInput(what.into())
    }

    pub fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }

    /// Check if this error represents an exhausted roster
    pub fn is_exhausted(&self) -> bool {
        matches!(self, DomainError::Exhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_error_display() {
        assert_eq!(DomainError::Exhausted.to_string(), "Everyone has presented!");
    }

    #[test]
    fn test_not_found_display() {
        let error = DomainError::not_found("Saved list", "Period 3");
        assert_eq!(error.to_string(), "Saved list 'Period 3' not found");
    }

    #[test]
    fn test_is_exhausted_check() {
        assert!(DomainError::Exhausted.is_exhausted());
        assert!(!DomainError::empty("List name").is_exhausted());
        assert!(!DomainError::ImportParseFailure("no names found".into()).is_exhausted());
    }
}
