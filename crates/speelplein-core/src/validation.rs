//! # Validation Module
//!
//! Input validation for forms and imports, run before values are turned
//! into domain records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end (TypeScript, shares the ts-rs exported shapes)     │
//! │  └── Immediate operator feedback                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - field rules with a field name in every error   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Constructors (Money::new, Discount::relative)                │
//! │  └── Invariants that can never be violated, whatever the caller did    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use speelplein_core::validation::{validate_amount, validate_email};
//!
//! validate_amount(12, 50).unwrap();
//! assert!(validate_email("not an e-mail").is_err());
//! ```

use crate::error::ValidationError;
use crate::{FIRST_SEASON_YEAR, MAX_NAME_LENGTH, MAX_RELATIVE_DISCOUNT};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Amount Validators
// =============================================================================

/// Validates raw euro/cents input before building a [`crate::Money`].
///
/// Both parts must be non-negative. Cents above 99 are fine; they are
/// carried into euro on construction.
pub fn validate_amount(euro: i64, cents: i64) -> ValidationResult<()> {
    if euro < 0 {
        return Err(ValidationError::OutOfRange {
            field: "euro".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "cents".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a relative discount percentage (0 to 100 inclusive).
pub fn validate_percentage(percent: f64) -> ValidationResult<()> {
    if !(0.0..=MAX_RELATIVE_DISCOUNT).contains(&percent) {
        return Err(ValidationError::OutOfRange {
            field: "relativeDiscount".to_string(),
            min: 0,
            max: MAX_RELATIVE_DISCOUNT as i64,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required name-like field (first name, discount name, ...).
pub fn validate_name(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates an e-mail address.
///
/// ## Rules
/// - Exactly one `@`, with text on both sides
/// - A dot in the domain, not at either end
/// - No whitespace
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    if email.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain spaces"));
    }

    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| invalid("must contain '@'"))?;

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid("must look like name@example.com"));
    }

    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid("domain must contain a dot"));
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a Belgian postal code (1000 to 9999).
pub fn validate_zip_code(zip_code: u32) -> ValidationResult<()> {
    if !(1000..=9999).contains(&zip_code) {
        return Err(ValidationError::OutOfRange {
            field: "zipCode".to_string(),
            min: 1000,
            max: 9999,
        });
    }

    Ok(())
}

/// Validates the year a crew member started.
///
/// Must lie between the first season and `current_year`.
pub fn validate_year_started(year: i32, current_year: i32) -> ValidationResult<()> {
    if year < FIRST_SEASON_YEAR || year > current_year {
        return Err(ValidationError::OutOfRange {
            field: "yearStarted".to_string(),
            min: FIRST_SEASON_YEAR as i64,
            max: current_year as i64,
        });
    }

    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a record id (UUID, hyphenated form).
///
/// ## Example
/// ```rust
/// use speelplein_core::validation::validate_uuid;
///
/// assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_uuid("not-a-uuid").is_err());
/// ```
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
