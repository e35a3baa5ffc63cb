//! # Money Module
//!
//! Provides the `Money` type for prices, invoice lines and fiscal certificate
//! amounts.
//!
//! ## Representation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  EURO + CENTS, ALWAYS NORMALIZED                                        │
//! │                                                                         │
//! │  Money::new(4, 111)   →  €5.11   (111 cents carried into euro)          │
//! │  Money::new(0, -1)    →  Err(InvalidAmount)                             │
//! │                                                                         │
//! │  Arithmetic runs on the flattened cent total (euro × 100 + cents)       │
//! │  and is re-normalized once per result, so rounding never compounds.     │
//! │                                                                         │
//! │  NEVER NEGATIVE: €1.00 - €2.00 = €0.00 (clamped, not an error)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use speelplein_core::money::Money;
//!
//! let day_price = Money::new(6, 57).unwrap();
//! let doubled = day_price.multiply(2.0);
//! assert_eq!(doubled.to_string(), "€13.14");
//!
//! let refund = Money::new(20, 0).unwrap();
//! assert_eq!(day_price - refund, Money::ZERO);
//! ```

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};
use tracing::debug;
use ts_rs::TS;

use crate::discount::{self, Discount};
use crate::error::{CoreError, CoreResult};
use crate::validation::validate_amount;
use crate::{CENTS_PER_EURO, CURRENCY_SYMBOL};

/// Fixed-point scale for factors and percentages: 10_000 units = ×1.0,
/// so one unit is one basis point.
const FACTOR_SCALE: u128 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// A non-negative amount of euro, normalized so that `cents` is always 0..=99.
///
/// ## Design Decisions
/// - **Unsigned fields**: a negative amount is unrepresentable
/// - **Private fields**: the only ways in are the validating constructor,
///   [`Money::from_cents`] and arithmetic, all of which normalize
/// - **Field order**: euro before cents, so the derived `Ord` is the amount order
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Day price ──► apply_all_discounts(sibling, early-bird) ──► Line amount │
/// │                                                                         │
/// │  Line amounts ──► Money::total ──► Invoice / fiscal certificate total   │
/// │                                                                         │
/// │  Every amount is rendered through Display: "€12.03"                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
pub struct Money {
    #[ts(type = "number")]
    euro: u64,
    cents: u8,
}

/// Stored shape of an amount, before validation.
///
/// Missing fields count as zero, matching older documents that only carry
/// one of the two.
#[derive(Debug, Deserialize)]
struct RawMoney {
    #[serde(default)]
    euro: i64,
    #[serde(default)]
    cents: i64,
}

/// Deserializes through [`Money::new`], so stored documents get the same
/// validation and normalization as form input.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawMoney::deserialize(deserializer)?;
        Money::new(raw.euro, raw.cents).map_err(de::Error::custom)
    }
}

impl Money {
    /// The canonical €0.00.
    pub const ZERO: Money = Money { euro: 0, cents: 0 };

    /// Creates an amount from raw euro and cents, carrying cents ≥ 100 into euro.
    ///
    /// ## Errors
    /// [`CoreError::InvalidAmount`] when either part is negative, or when the
    /// cent total does not fit in a `u64`.
    ///
    /// ## Example
    /// ```rust
    /// use speelplein_core::money::Money;
    ///
    /// let price = Money::new(4, 111).unwrap();
    /// assert_eq!(price.euro(), 5);
    /// assert_eq!(price.cents(), 11);
    ///
    /// assert!(Money::new(-1, 0).is_err());
    /// assert!(Money::new(i64::MAX, 0).is_err());
    /// ```
    pub fn new(euro: i64, cents: i64) -> CoreResult<Self> {
        let invalid = || CoreError::InvalidAmount { euro, cents };
        validate_amount(euro, cents).map_err(|_| invalid())?;

        let total = (euro as u64)
            .checked_mul(CENTS_PER_EURO)
            .and_then(|euro_cents| euro_cents.checked_add(cents as u64))
            .ok_or_else(invalid)?;
        Ok(Money::from_cents(total))
    }

    /// Creates an amount from a cent total. €12.30 is `from_cents(1230)`.
    ///
    /// This is the single normalization step: every constructor and every
    /// arithmetic result goes through here.
    #[inline]
    pub const fn from_cents(total_cents: u64) -> Self {
        Money {
            euro: total_cents / CENTS_PER_EURO,
            cents: (total_cents % CENTS_PER_EURO) as u8,
        }
    }

    /// Whole euro part.
    #[inline]
    pub const fn euro(&self) -> u64 {
        self.euro
    }

    /// Cents part, always 0..=99.
    #[inline]
    pub const fn cents(&self) -> u8 {
        self.cents
    }

    /// This amount expressed in cents. €12.30 → 1230.
    ///
    /// `from_cents` bounds `euro` to `u64::MAX / 100`, so this cannot overflow.
    #[inline]
    pub const fn total_cents(&self) -> u64 {
        self.euro * CENTS_PER_EURO + self.cents as u64
    }

    /// Checks if the amount is €0.00.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.euro == 0 && self.cents == 0
    }

    /// Adds two amounts.
    #[inline]
    pub const fn add(self, other: Money) -> Money {
        Money::from_cents(self.total_cents().saturating_add(other.total_cents()))
    }

    /// Subtracts `other`, flooring at €0.00.
    ///
    /// ## Example
    /// ```rust
    /// use speelplein_core::money::Money;
    ///
    /// let one = Money::new(2, 70).unwrap();
    /// let two = Money::new(3, 50).unwrap();
    /// assert_eq!(two.subtract(one).to_string(), "€0.80");
    /// assert_eq!(one.subtract(two), Money::ZERO);
    /// ```
    pub fn subtract(self, other: Money) -> Money {
        match self.total_cents().checked_sub(other.total_cents()) {
            Some(rest) => Money::from_cents(rest),
            None => {
                debug!(amount = %self, subtrahend = %other, "Subtraction clamped to zero");
                Money::ZERO
            }
        }
    }

    /// Multiplies the cent total by `factor` and rounds half up.
    ///
    /// The factor is taken to four decimals (basis points) and the product is
    /// computed in integers, so exact half-cent results always round up.
    /// A negative factor (or NaN) yields €0.00.
    ///
    /// ## Example
    /// ```rust
    /// use speelplein_core::money::Money;
    ///
    /// let price = Money::new(12, 69).unwrap();
    /// assert_eq!(price.multiply(3.5).to_string(), "€44.42");
    /// assert_eq!(price.multiply(-5.0), Money::ZERO);
    /// ```
    pub fn multiply(self, factor: f64) -> Money {
        if factor.is_nan() || factor < 0.0 {
            debug!(amount = %self, factor, "Multiplication clamped to zero");
            return Money::ZERO;
        }

        // `as` saturates, so +inf becomes u128::MAX units.
        let units = (factor * FACTOR_SCALE as f64).round() as u128;
        Money::from_cents(scale_half_up(self.total_cents(), units))
    }

    /// Takes `discount_bps` basis points off this amount (1000 = 10%) and
    /// rounds the remainder half up. Anything above 10_000 counts as 100%.
    ///
    /// ## Example
    /// ```rust
    /// use speelplein_core::money::Money;
    ///
    /// let price = Money::new(0, 45).unwrap();
    /// // 45 × 70% = 31.5 cents
    /// assert_eq!(price.apply_percentage_discount(3000).total_cents(), 32);
    /// assert_eq!(price.apply_percentage_discount(10_000), Money::ZERO);
    /// ```
    pub fn apply_percentage_discount(self, discount_bps: u32) -> Money {
        let remaining = FACTOR_SCALE.saturating_sub(discount_bps as u128);
        Money::from_cents(scale_half_up(self.total_cents(), remaining))
    }

    /// Sums a sequence of amounts, starting from zero.
    ///
    /// ## Example
    /// ```rust
    /// use speelplein_core::money::Money;
    ///
    /// let total = Money::total([
    ///     Money::new(10, 0).unwrap(),
    ///     Money::new(6, 57).unwrap(),
    ///     Money::new(6, 57).unwrap(),
    /// ]);
    /// assert_eq!(total.to_string(), "€23.14");
    /// ```
    pub fn total<I>(values: I) -> Money
    where
        I: IntoIterator<Item = Money>,
    {
        values.into_iter().fold(Money::ZERO, Money::add)
    }

    /// Applies a single discount. See [`Discount::apply_to`].
    #[inline]
    pub fn apply_discount(&self, discount: &Discount) -> Money {
        discount.apply_to(*self)
    }

    /// Applies discounts one after the other, in the given order.
    /// See [`discount::apply_all`].
    #[inline]
    pub fn apply_all_discounts<'a, I>(&self, discounts: I) -> Money
    where
        I: IntoIterator<Item = &'a Discount>,
    {
        discount::apply_all(*self, discounts)
    }
}

/// `total_cents × units / FACTOR_SCALE`, rounded half up, saturating at
/// `u64::MAX` cents.
fn scale_half_up(total_cents: u64, units: u128) -> u64 {
    let scaled = (total_cents as u128)
        .checked_mul(units)
        .and_then(|product| product.checked_add(FACTOR_SCALE / 2))
        .map_or(u128::MAX, |product| product / FACTOR_SCALE);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `€<euro>.<cents>` with two-digit cents, e.g. `€12.03`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}.{:02}", CURRENCY_SYMBOL, self.euro, self.cents)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::ZERO
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money::add(self, other)
    }
}

/// Clamping subtraction, same as [`Money::subtract`].
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        self.subtract(other)
    }
}

impl Mul<f64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, factor: f64) -> Self {
        self.multiply(factor)
    }
}

/// Exact multiplication by a count (e.g. number of attended days).
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: u32) -> Self {
        Money::from_cents(self.total_cents().saturating_mul(count as u64))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        Money::total(iter)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        Money::total(iter.copied())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Upper bound for generated cent totals, far below any saturation point.
    const MAX_TEST_CENTS: u64 = 1_000_000_000_000;

    fn money(euro: i64, cents: i64) -> Money {
        Money::new(euro, cents).unwrap()
    }

    #[test]
    fn test_new_carries_cents_into_euro() {
        let result = money(4, 111);
        assert_eq!(result.euro(), 5);
        assert_eq!(result.cents(), 11);

        let exact = money(0, 300);
        assert_eq!(exact.euro(), 3);
        assert_eq!(exact.cents(), 0);
    }

    #[test]
    fn test_new_rejects_negative_parts() {
        assert!(matches!(
            Money::new(0, -1),
            Err(CoreError::InvalidAmount { euro: 0, cents: -1 })
        ));
        assert!(matches!(
            Money::new(-1, 0),
            Err(CoreError::InvalidAmount { euro: -1, cents: 0 })
        ));
    }

    #[test]
    fn test_new_rejects_overflowing_amounts() {
        assert!(matches!(
            Money::new(i64::MAX, 0),
            Err(CoreError::InvalidAmount { euro: i64::MAX, cents: 0 })
        ));
        assert!(Money::new(i64::MAX, i64::MAX).is_err());
        assert!(Money::new(0, i64::MAX).is_ok());
    }

    #[test]
    fn test_total_cents() {
        assert_eq!(money(12, 30).total_cents(), 1230);
        assert_eq!(Money::ZERO.total_cents(), 0);
        assert_eq!(Money::from_cents(1230), money(12, 30));
    }

    #[test]
    fn test_display() {
        assert_eq!(money(12, 30).to_string(), "€12.30");
        assert_eq!(money(12, 0).to_string(), "€12.00");
        assert_eq!(money(12, 3).to_string(), "€12.03");
        assert_eq!(money(0, 0).to_string(), "€0.00");
        assert_eq!(money(0, 7).to_string(), "€0.07");
    }

    #[test]
    fn test_add() {
        let one = money(2, 50);
        let two = money(3, 70);
        let result = Money::ZERO.add(one).add(two).add(money(1, 20));

        assert_eq!(result.euro(), 7);
        assert_eq!(result.cents(), 40);
    }

    #[test]
    fn test_add_is_order_independent() {
        let a = money(1, 99);
        let b = money(0, 2);
        let c = money(13, 50);

        let left = a.add(b).add(c);
        assert_eq!(left, a.add(b.add(c)));
        assert_eq!(left, c.add(a).add(b));
        assert_eq!(left, b + c + a);
        assert_eq!(left.to_string(), "€15.51");
    }

    #[test]
    fn test_subtract() {
        let one = money(2, 70);
        let two = money(3, 50);
        let result = two.subtract(one).subtract(Money::ZERO);

        assert_eq!(result.euro(), 0);
        assert_eq!(result.cents(), 80);
    }

    #[test]
    fn test_subtract_clamps_to_zero() {
        assert_eq!(Money::ZERO.subtract(money(1, 0)), Money::ZERO);
        assert_eq!(money(2, 70) - money(3, 50), Money::ZERO);
        assert_eq!(money(3, 50) - money(3, 50), Money::ZERO);
    }

    #[test]
    fn test_multiply() {
        let price1 = money(10, 0);
        let price2 = money(6, 57);
        let price3 = money(12, 69);

        assert_eq!(price1.multiply(1.0), money(10, 0));
        assert_eq!(price2.multiply(2.0), money(13, 14));
        assert_eq!(price2.multiply(0.0), Money::ZERO);
        assert_eq!(price3.multiply(3.5), money(44, 42));
    }

    #[test]
    fn test_multiply_rounds_half_up() {
        // 25 × 0.5 = 12.5 cents
        assert_eq!(money(0, 25).multiply(0.5).total_cents(), 13);
        // 33 × 0.5 = 16.5 cents
        assert_eq!(money(0, 33).multiply(0.5).total_cents(), 17);
        assert_eq!(money(0, 33).multiply(0.49).total_cents(), 16);
    }

    #[test]
    fn test_multiply_rounds_ties_with_inexact_factors() {
        // 0.7 and 0.1 have no exact binary form; 45 × 0.7 is 31.4999... in f64
        assert_eq!(money(0, 45).multiply(0.7).total_cents(), 32);
        assert_eq!(money(0, 5).multiply(0.1).total_cents(), 1);
        assert_eq!(money(0, 15).multiply(0.1).total_cents(), 2);
        assert_eq!(money(0, 25).multiply(0.66).total_cents(), 17);
    }

    #[test]
    fn test_multiply_saturates_on_huge_factors() {
        let max = Money::from_cents(u64::MAX);
        assert_eq!(money(1, 0).multiply(f64::INFINITY), max);
        assert_eq!(money(1, 0).multiply(1e30), max);
        assert_eq!(Money::ZERO.multiply(f64::INFINITY), Money::ZERO);
    }

    #[test]
    fn test_apply_percentage_discount() {
        let price = money(10, 0);
        assert_eq!(price.apply_percentage_discount(1000), money(9, 0));
        assert_eq!(price.apply_percentage_discount(0), price);
        assert_eq!(price.apply_percentage_discount(10_000), Money::ZERO);
        assert_eq!(price.apply_percentage_discount(20_000), Money::ZERO);
        // 5 cents at 90% off = 0.5 cent
        assert_eq!(money(0, 5).apply_percentage_discount(9000).total_cents(), 1);
    }

    #[test]
    fn test_multiply_clamps_negative_and_nan() {
        assert_eq!(money(6, 57).multiply(-5.0), Money::ZERO);
        assert_eq!(money(6, 57).multiply(f64::NAN), Money::ZERO);
        assert_eq!(Money::ZERO.multiply(-1.0), Money::ZERO);
    }

    #[test]
    fn test_multiply_by_count() {
        let day_price = money(6, 57);
        assert_eq!(day_price * 3u32, money(19, 71));
        assert_eq!(day_price * 0u32, Money::ZERO);
    }

    #[test]
    fn test_total() {
        let price1 = money(10, 0);
        let price2 = money(6, 57);
        let price3 = money(0, 0);

        let total = Money::total([price1, price2, price2, price3]);
        assert_eq!(total.euro(), 23);
        assert_eq!(total.cents(), 14);

        let summed: Money = [price1, price2, price2, price3].iter().sum();
        assert_eq!(summed, total);
        assert_eq!(Money::total(Vec::new()), Money::ZERO);
    }

    #[test]
    fn test_ordering_follows_amount() {
        assert!(money(1, 0) > money(0, 99));
        assert!(money(0, 5) < money(0, 50));
        assert_eq!(money(0, 150).cmp(&money(1, 50)), std::cmp::Ordering::Equal);
    }

    #[test]
    fn test_serde_roundtrip_and_validation() {
        let price = money(12, 3);
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, r#"{"euro":12,"cents":3}"#);

        let parsed: Money = serde_json::from_str(r#"{"euro":4,"cents":111}"#).unwrap();
        assert_eq!(parsed, money(5, 11));

        let partial: Money = serde_json::from_str(r#"{"cents":250}"#).unwrap();
        assert_eq!(partial, money(2, 50));

        assert!(serde_json::from_str::<Money>(r#"{"euro":-1,"cents":0}"#).is_err());
    }

    proptest! {
        #[test]
        fn test_add_is_associative_and_commutative(
            a in 0..MAX_TEST_CENTS,
            b in 0..MAX_TEST_CENTS,
            c in 0..MAX_TEST_CENTS,
        ) {
            let (a, b, c) = (Money::from_cents(a), Money::from_cents(b), Money::from_cents(c));
            prop_assert_eq!(a.add(b).add(c), a.add(b.add(c)));
            prop_assert_eq!(a.add(b), b.add(a));
            prop_assert!(a.add(b).cents() <= 99);
        }

        #[test]
        fn test_subtract_never_goes_negative(a in 0..MAX_TEST_CENTS, b in 0..MAX_TEST_CENTS) {
            let result = Money::from_cents(a).subtract(Money::from_cents(b));
            prop_assert_eq!(result.total_cents(), a.saturating_sub(b));
            prop_assert!(result.cents() <= 99);
        }

        #[test]
        fn test_new_normalizes_cents(euro in 0i64..1_000_000_000, cents in 0i64..100_000) {
            let amount = Money::new(euro, cents).unwrap();
            prop_assert!(amount.cents() <= 99);
            prop_assert_eq!(amount.total_cents(), (euro * 100 + cents) as u64);
        }

        #[test]
        fn test_multiply_normalizes_cents(cents in 0..MAX_TEST_CENTS, factor in 0.0f64..1000.0) {
            prop_assert!(Money::from_cents(cents).multiply(factor).cents() <= 99);
        }

        #[test]
        fn test_multiply_by_whole_percent_rounds_half_up(cents in 0..MAX_TEST_CENTS, pct in 0u64..=100) {
            let result = Money::from_cents(cents).multiply(pct as f64 / 100.0);
            prop_assert_eq!(result.total_cents(), (cents * pct + 50) / 100);
        }

        #[test]
        fn test_percentage_discount_rounds_half_up(cents in 0..MAX_TEST_CENTS, bps in 0u32..=10_000) {
            let result = Money::from_cents(cents).apply_percentage_discount(bps);
            let expected = (cents as u128 * (10_000 - bps) as u128 + 5_000) / 10_000;
            prop_assert_eq!(result.total_cents() as u128, expected);
            prop_assert!(result.cents() <= 99);
        }
    }
}
