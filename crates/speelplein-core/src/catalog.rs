//! # Discount Catalog
//!
//! The configured set of discounts a playground offers (sibling discount,
//! early registration, social tariff, ...).
//!
//! ## Configuration Format
//! ```json
//! {
//!   "discounts": [
//!     { "name": "Sibling", "relativeDiscount": 20 },
//!     { "name": "Voucher", "absoluteDiscount": { "euro": 2, "cents": 50 } }
//!   ]
//! }
//! ```
//!
//! This is the same document the discount mapper lifts from storage, so the
//! catalog can be read from a settings file or from the database alike.
//! Reading the bytes is the caller's job; this crate only parses.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;
use ts_rs::TS;

use crate::discount::{self, Discount};
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::validate_name;

/// Ordered list of named discounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountCatalog {
    #[serde(default)]
    discounts: Vec<Discount>,
}

impl From<Vec<Discount>> for DiscountCatalog {
    fn from(discounts: Vec<Discount>) -> Self {
        DiscountCatalog { discounts }
    }
}

impl DiscountCatalog {
    /// Parses and validates a catalog document.
    ///
    /// ## Errors
    /// - [`CoreError::Config`] for malformed JSON, a negative amount or a
    ///   percentage outside 0..=100
    /// - [`CoreError::Validation`] for a blank or duplicate discount name
    ///
    /// ## Example
    /// ```rust
    /// use speelplein_core::{DiscountCatalog, Money};
    ///
    /// let catalog = DiscountCatalog::from_json(
    ///     r#"{ "discounts": [ { "name": "Sibling", "relativeDiscount": 20 } ] }"#,
    /// )
    /// .unwrap();
    ///
    /// let price = Money::new(10, 0).unwrap();
    /// assert_eq!(catalog.apply(price, ["Sibling"]).unwrap().to_string(), "€8.00");
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let catalog: DiscountCatalog = serde_json::from_str(json)?;
        catalog.validate()?;

        debug!(count = catalog.len(), "Loaded discount catalog");
        Ok(catalog)
    }

    /// Serializes the catalog back into its configuration form.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Every discount needs a non-blank name, unique within the catalog.
    pub fn validate(&self) -> CoreResult<()> {
        let mut seen = HashSet::new();
        for discount in &self.discounts {
            validate_name("name", discount.name())?;
            if !seen.insert(discount.name()) {
                return Err(ValidationError::Duplicate {
                    field: "name".to_string(),
                    value: discount.name().to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    pub fn discounts(&self) -> &[Discount] {
        &self.discounts
    }

    pub fn into_discounts(self) -> Vec<Discount> {
        self.discounts
    }

    pub fn len(&self) -> usize {
        self.discounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discounts.is_empty()
    }

    /// Looks a discount up by its exact name.
    pub fn get(&self, name: &str) -> Option<&Discount> {
        self.discounts.iter().find(|discount| discount.name() == name)
    }

    /// Looks up several discounts, keeping the order of `names`.
    pub fn resolve<I, S>(&self, names: I) -> CoreResult<Vec<&Discount>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                self.get(name)
                    .ok_or_else(|| CoreError::UnknownDiscount(name.to_string()))
            })
            .collect()
    }

    /// Applies the named discounts to `price`, in the order given.
    pub fn apply<I, S>(&self, price: Money, names: I) -> CoreResult<Money>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let discounts = self.resolve(names)?;
        Ok(discount::apply_all(price, discounts))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "discounts": [
            { "name": "Sibling", "relativeDiscount": 20, "absoluteDiscount": { "euro": 2, "cents": 50 } },
            { "name": "Voucher", "absoluteDiscount": { "euro": 2, "cents": 50 } },
            { "name": "Social", "relativeDiscount": 100 }
        ]
    }"#;

    fn money(euro: i64, cents: i64) -> Money {
        Money::new(euro, cents).unwrap()
    }

    #[test]
    fn test_from_json() {
        let catalog = DiscountCatalog::from_json(CATALOG).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.get("Voucher").unwrap().absolute_discount(),
            Some(money(2, 50))
        );
        assert!(catalog.get("voucher").is_none());
    }

    #[test]
    fn test_empty_document() {
        let catalog = DiscountCatalog::from_json("{}").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.apply(money(6, 57), Vec::<String>::new()).unwrap(), money(6, 57));
    }

    #[test]
    fn test_apply_keeps_requested_order() {
        let catalog = DiscountCatalog::from_json(CATALOG).unwrap();
        let price = money(10, 0);

        assert_eq!(catalog.apply(price, ["Sibling", "Voucher"]).unwrap(), money(3, 50));
        assert_eq!(catalog.apply(price, ["Voucher", "Sibling"]).unwrap(), money(4, 0));
        assert_eq!(catalog.apply(price, ["Social"]).unwrap(), Money::ZERO);
    }

    #[test]
    fn test_unknown_discount() {
        let catalog = DiscountCatalog::from_json(CATALOG).unwrap();
        let result = catalog.apply(money(10, 0), ["Sibling", "Grandparent"]);
        assert!(matches!(result, Err(CoreError::UnknownDiscount(name)) if name == "Grandparent"));
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(
            DiscountCatalog::from_json("not json"),
            Err(CoreError::Config(_))
        ));
        assert!(matches!(
            DiscountCatalog::from_json(
                r#"{ "discounts": [ { "name": "X", "absoluteDiscount": { "euro": -2 } } ] }"#
            ),
            Err(CoreError::Config(_))
        ));
        assert!(matches!(
            DiscountCatalog::from_json(r#"{ "discounts": [ { "name": "X", "relativeDiscount": 120 } ] }"#),
            Err(CoreError::Config(_))
        ));
    }

    #[test]
    fn test_duplicate_and_blank_names() {
        let duplicate = r#"{ "discounts": [ { "name": "X" }, { "name": "X" } ] }"#;
        assert!(matches!(
            DiscountCatalog::from_json(duplicate),
            Err(CoreError::Validation(ValidationError::Duplicate { .. }))
        ));

        let blank = r#"{ "discounts": [ { "relativeDiscount": 5 } ] }"#;
        assert!(matches!(
            DiscountCatalog::from_json(blank),
            Err(CoreError::Validation(ValidationError::Required { .. }))
        ));
    }

    #[test]
    fn test_to_json_roundtrip() {
        let catalog = DiscountCatalog::from_json(CATALOG).unwrap();
        let json = catalog.to_json().unwrap();
        assert_eq!(DiscountCatalog::from_json(&json).unwrap(), catalog);
    }
}
