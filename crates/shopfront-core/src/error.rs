//! # Error Types
//!
//! Domain-specific error types for shopfront-core.
//!
//! ## Error Philosophy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Surfaces                                  │
//! │                                                                         │
//! │  shopfront-core errors (this file)                                     │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  shopfront-store errors (separate crate)                               │
//! │  └── StoreError       - Snapshot persistence failures                  │
//! │                                                                         │
//! │  Store OPERATIONS never return errors: invalid input degrades to a    │
//! │  no-op, a `false`, or a `None`. ValidationError exists so the checks   │
//! │  themselves are typed and testable, not so callers must handle them.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// The session layer maps them to the boolean failure results that the
/// presentation layer consumes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value has an invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: &'static str, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required { field: "email" };
        assert_eq!(err.to_string(), "email is required");

        let err = ValidationError::InvalidFormat {
            field: "email",
            reason: "missing @".to_string(),
        };
        assert_eq!(err.to_string(), "email has invalid format: missing @");
    }
}
