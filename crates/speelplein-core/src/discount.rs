//! # Discount Module
//!
//! Discount rules and the order-sensitive algorithm that applies them.
//!
//! ## Application Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ONE DISCOUNT                                                           │
//! │                                                                         │
//! │  €10.00 ──► - absolute (€2.50) ──► €7.50 ──► × (1 - 20%) ──► €6.00     │
//! │             clamped at €0.00                 rounded half up            │
//! │                                                                         │
//! │  Absolute ALWAYS before relative. Reversing them changes the amount.   │
//! │                                                                         │
//! │  A LIST OF DISCOUNTS                                                    │
//! │                                                                         │
//! │  €10.00 ──► d1 ──► €6.00 ──► d2 ──► €3.50                               │
//! │  €10.00 ──► d2 ──► €7.50 ──► d1 ──► €4.00                               │
//! │                                                                         │
//! │  Left to right, each on the result of the previous one. Never batched. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{de, Deserialize, Deserializer, Serialize};
use tracing::trace;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::validate_percentage;

// =============================================================================
// Discount
// =============================================================================

/// A discount rule: an optional absolute reduction and an optional
/// percentage, with a display name.
///
/// Discounts are built once (from the catalog or by an operator) and only
/// ever read afterwards. Replacing a component returns a new value.
///
/// ## Example
/// ```rust
/// use speelplein_core::{Discount, Money};
///
/// let sibling = Discount::new("Sibling")
///     .with_absolute_discount(Money::new(2, 50).unwrap())
///     .with_relative_discount(20.0)
///     .unwrap();
///
/// let price = Money::new(10, 0).unwrap();
/// assert_eq!(sibling.apply_to(price).to_string(), "€6.00");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Discount {
    /// Label shown on invoices and certificates.
    name: String,

    /// Fixed amount subtracted first.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    absolute_discount: Option<Money>,

    /// Percentage (0..=100) taken off what remains.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    relative_discount: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDiscount {
    #[serde(default)]
    name: String,
    absolute_discount: Option<Money>,
    relative_discount: Option<f64>,
}

impl<'de> Deserialize<'de> for Discount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawDiscount::deserialize(deserializer)?;
        let discount = Discount::new(raw.name);
        let discount = match raw.absolute_discount {
            Some(amount) => discount.with_absolute_discount(amount),
            None => discount,
        };
        match raw.relative_discount {
            Some(percent) => discount
                .with_relative_discount(percent)
                .map_err(de::Error::custom),
            None => Ok(discount),
        }
    }
}

impl Discount {
    /// Creates a discount without any component, i.e. a no-op.
    pub fn new(name: impl Into<String>) -> Self {
        Discount {
            name: name.into(),
            absolute_discount: None,
            relative_discount: None,
        }
    }

    /// Creates a discount that only subtracts a fixed amount.
    pub fn absolute(name: impl Into<String>, amount: Money) -> Self {
        Discount::new(name).with_absolute_discount(amount)
    }

    /// Creates a discount that only takes off a percentage.
    ///
    /// ## Errors
    /// [`CoreError::InvalidPercentage`] when `percent` is outside 0..=100.
    pub fn relative(name: impl Into<String>, percent: f64) -> CoreResult<Self> {
        Discount::new(name).with_relative_discount(percent)
    }

    /// Creates a discount with both components.
    pub fn combined(name: impl Into<String>, amount: Money, percent: f64) -> CoreResult<Self> {
        Discount::absolute(name, amount).with_relative_discount(percent)
    }

    /// Returns this discount with a different name.
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Discount {
            name: name.into(),
            ..self
        }
    }

    /// Returns this discount with `amount` as its absolute component.
    pub fn with_absolute_discount(self, amount: Money) -> Self {
        Discount {
            absolute_discount: Some(amount),
            ..self
        }
    }

    /// Returns this discount with `percent` as its relative component.
    pub fn with_relative_discount(self, percent: f64) -> CoreResult<Self> {
        validate_percentage(percent).map_err(|_| CoreError::InvalidPercentage(percent))?;

        Ok(Discount {
            relative_discount: Some(percent),
            ..self
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn absolute_discount(&self) -> Option<Money> {
        self.absolute_discount
    }

    #[inline]
    pub fn relative_discount(&self) -> Option<f64> {
        self.relative_discount
    }

    /// True when applying this discount can never change an amount.
    pub fn is_noop(&self) -> bool {
        let no_absolute = self.absolute_discount.map_or(true, |amount| amount.is_zero());
        let no_relative = self.relative_discount.map_or(true, |percent| percent == 0.0);
        no_absolute && no_relative
    }

    /// Applies this discount to `price`.
    ///
    /// 1. Subtract the absolute component, clamped at €0.00.
    /// 2. Multiply by `1 - relative / 100`, rounded half up on the cents.
    ///    The percentage counts to two decimals (basis points) and the
    ///    multiplication is done in integers.
    ///
    /// Missing components are skipped. A 100% relative discount always
    /// results in €0.00.
    pub fn apply_to(&self, price: Money) -> Money {
        let after_absolute = match self.absolute_discount {
            Some(amount) => price.subtract(amount),
            None => price,
        };

        let result = match self.relative_discount {
            Some(percent) => after_absolute.apply_percentage_discount(basis_points(percent)),
            None => after_absolute,
        };

        trace!(
            discount = %self.name,
            before = %price,
            after = %result,
            "Applied discount"
        );
        result
    }
}

/// A validated percentage (0..=100) in basis points: 12.5% → 1250.
fn basis_points(percent: f64) -> u32 {
    (percent * 100.0).round() as u32
}

/// Applies `discounts` to `price` one by one, in iteration order.
///
/// ## Example
/// ```rust
/// use speelplein_core::{discount, Discount, Money};
///
/// let d1 = Discount::combined("Sibling", Money::new(2, 50).unwrap(), 20.0).unwrap();
/// let d2 = Discount::absolute("Voucher", Money::new(2, 50).unwrap());
/// let price = Money::new(10, 0).unwrap();
///
/// assert_eq!(discount::apply_all(price, [&d1, &d2]).to_string(), "€3.50");
/// assert_eq!(discount::apply_all(price, [&d2, &d1]).to_string(), "€4.00");
/// ```
pub fn apply_all<'a, I>(price: Money, discounts: I) -> Money
where
    I: IntoIterator<Item = &'a Discount>,
{
    discounts
        .into_iter()
        .fold(price, |current, discount| discount.apply_to(current))
}

// =============================================================================
// Unit Tests
// =============================================================================
