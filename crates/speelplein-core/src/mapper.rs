//! # Mappers
//!
//! Translation between stored documents and domain values.
//!
//! ## Lift / Unlift
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   Storage                                  Domain                       │
//! │                                                                         │
//! │   (document id, stored value) ──lift────► domain value (id injected)   │
//! │   stored value (no id)        ◄──unlift── domain value                 │
//! │                                                                         │
//! │   The id lives next to the document in storage, never inside it.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use crate::catalog::DiscountCatalog;
use crate::crew::Crew;
use crate::discount::Discount;

/// Converts a stored document into its domain form and back.
pub trait Mapper<Stored, Domain> {
    /// Builds the domain value for the document stored under `id`.
    fn lift(&self, id: &str, stored: Stored) -> Domain;

    /// Strips the domain value back down to what is stored.
    fn unlift(&self, domain: Domain) -> Stored;
}

// =============================================================================
// Identity Mapper
// =============================================================================

/// A stored value together with its document id.
///
/// Serializes flat: `{ "id": "...", ...value fields }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identified<T> {
    pub id: String,

    #[serde(flatten)]
    pub value: T,
}

/// Mapper for values without a domain type of their own: lifting only
/// attaches the id.
pub struct IdentityMapper<T>(PhantomData<fn() -> T>);

impl<T> IdentityMapper<T> {
    pub fn new() -> Self {
        IdentityMapper(PhantomData)
    }
}

impl<T> Default for IdentityMapper<T> {
    fn default() -> Self {
        IdentityMapper::new()
    }
}

impl<T> Mapper<T, Identified<T>> for IdentityMapper<T> {
    fn lift(&self, id: &str, stored: T) -> Identified<T> {
        Identified {
            id: id.to_string(),
            value: stored,
        }
    }

    fn unlift(&self, domain: Identified<T>) -> T {
        domain.value
    }
}

// =============================================================================
// Record Mappers
// =============================================================================

/// Injects the document id into a [`Crew`] record and removes it again.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrewMapper;

impl Mapper<Crew, Crew> for CrewMapper {
    fn lift(&self, id: &str, stored: Crew) -> Crew {
        stored.with_id(Some(id.to_string()))
    }

    fn unlift(&self, domain: Crew) -> Crew {
        domain.with_id(None)
    }
}

/// The discounts document is stored as `{ "discounts": [...] }`; the domain
/// works with the plain ordered list.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountMapper;

impl Mapper<DiscountCatalog, Vec<Discount>> for DiscountMapper {
    fn lift(&self, _id: &str, stored: DiscountCatalog) -> Vec<Discount> {
        stored.into_discounts()
    }

    fn unlift(&self, domain: Vec<Discount>) -> DiscountCatalog {
        DiscountCatalog::from(domain)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
