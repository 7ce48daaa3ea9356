//! # Validation Module
//!
//! Input validation for session operations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation (forms)                                         │
//! │  ├── Basic format checks, immediate user feedback                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required-field checks before the session fabricates a user        │
//! │  └── Typed errors; the session layer maps them to false                │
//! │                                                                         │
//! │  There is no layer 3: login is simulated, nothing verifies the         │
//! │  credentials against anything.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};

/// Validates a login credential pair.
///
/// ## Rules
/// Both fields must be non-empty after trimming. Nothing else is checked;
/// the session accepts any non-empty pair.
///
/// ## Example
/// ```rust
/// use shopfront_core::validation::validate_credentials;
///
/// assert!(validate_credentials("a@b.com", "pw").is_ok());
/// assert!(validate_credentials("", "pw").is_err());
/// assert!(validate_credentials("a@b.com", "   ").is_err());
/// ```
pub fn validate_credentials(email: &str, password: &str) -> ValidationResult<()> {
    if email.trim().is_empty() {
        return Err(ValidationError::Required { field: "email" });
    }
    if password.trim().is_empty() {
        return Err(ValidationError::Required { field: "password" });
    }
    Ok(())
}

/// Validates a registration form.
///
/// ## Rules
/// Name, email and password must all be non-empty after trimming.
pub fn validate_registration(name: &str, email: &str, password: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }
    validate_credentials(email, password)
}
