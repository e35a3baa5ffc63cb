//! # speelplein-core: Shared Domain Logic for Speelplein Administration
//!
//! Records and pure business rules shared by the crew and child-attendance
//! administration: people, addresses, crew, discounts and money. Nothing in
//! this crate performs I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Speelplein Administration                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │        Front end / invoice & certificate generators             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ speelplein-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────────┐   │   │
//! │  │   │  money   │  │ discount │  │   crew   │  │    mapper    │   │   │
//! │  │   │  Money   │  │ Discount │  │ Address  │  │ lift/unlift  │   │   │
//! │  │   │          │  │ Catalog  │  │ Person   │  │              │   │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          Document store (collections, repositories)             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Non-negative euro amounts with clamping arithmetic
//! - [`discount`] - Discount rules and ordered application
//! - [`catalog`] - The configured list of discounts
//! - [`address`], [`person`], [`crew`] - People records
//! - [`file`] - Generated document requests
//! - [`mapper`] - Stored document ↔ domain value translation
//! - [`validation`] - Field-level input checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use speelplein_core::{Discount, Money};
//!
//! let day_price = Money::new(10, 0).unwrap();
//! let sibling = Discount::combined("Sibling", Money::new(2, 50).unwrap(), 20.0).unwrap();
//! let voucher = Discount::absolute("Voucher", Money::new(2, 50).unwrap());
//!
//! // Order matters: €10.00 → €6.00 → €3.50
//! let line = day_price.apply_all_discounts([&sibling, &voucher]);
//! assert_eq!(line.to_string(), "€3.50");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod address;
pub mod catalog;
pub mod crew;
pub mod discount;
pub mod error;
pub mod file;
pub mod mapper;
pub mod money;
pub mod person;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use address::Address;
pub use catalog::DiscountCatalog;
pub use crew::Crew;
pub use discount::Discount;
pub use error::{CoreError, CoreResult, ValidationError};
pub use file::{FileFormat, FileRequestMetadata, FileType};
pub use mapper::{CrewMapper, DiscountMapper, Identified, IdentityMapper, Mapper};
pub use money::Money;
pub use person::{Person, PhoneContact};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Prefix used when rendering amounts.
pub const CURRENCY_SYMBOL: &str = "€";

/// Cents in one euro.
pub const CENTS_PER_EURO: u64 = 100;

/// Upper bound of a relative discount, in percent.
pub const MAX_RELATIVE_DISCOUNT: f64 = 100.0;

/// Longest accepted name (people, discounts).
pub const MAX_NAME_LENGTH: usize = 100;

/// Earliest plausible year for `Crew::year_started`.
pub const FIRST_SEASON_YEAR: i32 = 1950;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_values_can_be_shared_across_threads() {
        assert_send_sync::<Money>();
        assert_send_sync::<Discount>();
        assert_send_sync::<DiscountCatalog>();
        assert_send_sync::<Crew>();
    }

    #[test]
    fn test_shared_discounts_give_the_same_result_on_every_thread() {
        let discounts = std::sync::Arc::new(vec![
            Discount::combined("Sibling", Money::new(2, 50).unwrap(), 20.0).unwrap(),
            Discount::absolute("Voucher", Money::new(2, 50).unwrap()),
        ]);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let discounts = std::sync::Arc::clone(&discounts);
                std::thread::spawn(move || {
                    Money::new(10, 0).unwrap().apply_all_discounts(discounts.iter())
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Money::new(3, 50).unwrap());
        }
    }
}
