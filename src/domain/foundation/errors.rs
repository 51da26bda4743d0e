//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Administrator input errors
    InvalidMatrix,
    ValidationFailed,

    // Scoring errors
    NoConfiguration,
    InvalidCoordinate,
    NoVendorsAvailable,

    // Infrastructure errors
    DatabaseError,
    StorageError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidMatrix => "INVALID_MATRIX",
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::NoConfiguration => "NO_CONFIGURATION",
            ErrorCode::InvalidCoordinate => "INVALID_COORDINATE",
            ErrorCode::NoVendorsAvailable => "NO_VENDORS_AVAILABLE",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::NoVendorsAvailable, "No vendor can supply this item");
        assert_eq!(
            format!("{}", err),
            "[NO_VENDORS_AVAILABLE] No vendor can supply this item"
        );
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::InvalidMatrix, "Matrix must be square")
            .with_detail("rows", "3")
            .with_detail("columns", "2");

        assert_eq!(err.details.get("rows"), Some(&"3".to_string()));
        assert_eq!(err.details.get("columns"), Some(&"2".to_string()));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::NoConfiguration), "NO_CONFIGURATION");
        assert_eq!(format!("{}", ErrorCode::InvalidCoordinate), "INVALID_COORDINATE");
    }
}
