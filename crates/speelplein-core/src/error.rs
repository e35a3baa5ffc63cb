//! # Error Types
//!
//! Domain-specific error types for speelplein-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CoreError            - Domain errors (amounts, discounts, catalog)    │
//! │  └── ValidationError  - Field-level input validation failures          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → caller (form, import, generator)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Subtracting more than an amount holds, or multiplying by a negative
//! factor, clamps to €0.00. Rendering code never has to handle a negative
//! amount, so those operations are infallible.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A monetary amount was constructed from a negative euro or cents value.
    ///
    /// ## When This Occurs
    /// - Unparsed form input handed straight to `Money::new`
    /// - A stored document with a negative `euro`/`cents` field
    ///
    /// This signals a caller bug and is not recovered from inside the crate.
    #[error("Invalid amount: euro={euro}, cents={cents} (negative values are not allowed)")]
    InvalidAmount { euro: i64, cents: i64 },

    /// A relative discount outside 0..=100 percent.
    #[error("Invalid relative discount: {0}% (must be between 0 and 100)")]
    InvalidPercentage(f64),

    /// The discount catalog could not be read.
    #[error("Invalid discount configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A discount was requested by name but is not in the catalog.
    #[error("Discount not found: {0}")]
    UnknownDiscount(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when operator input doesn't meet requirements.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., invalid UUID, invalid e-mail).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two catalog discounts with the same name).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
