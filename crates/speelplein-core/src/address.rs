//! # Address
//!
//! Postal addresses of crew members and contact persons.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use url::Url;

use crate::validation::{validate_zip_code, ValidationResult};

const MAPS_BASE_URL: &str = "https://maps.google.com/";

/// A physical street address. Every part is optional because records are
/// often entered incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Address {
    /// e.g. "Baker Street"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub street: Option<String>,

    /// House number, e.g. "12A"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub number: Option<String>,

    /// e.g. 1200
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub zip_code: Option<u32>,

    /// e.g. "Brussels"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub city: Option<String>,
}

fn present(part: &Option<String>) -> bool {
    part.as_deref().is_some_and(|s| !s.trim().is_empty())
}

impl Address {
    /// True when street, number, zip code and city are all filled in.
    pub fn is_valid(&self) -> bool {
        present(&self.street)
            && present(&self.number)
            && self.zip_code.is_some_and(|zip| zip != 0)
            && present(&self.city)
    }

    /// Checks the zip code, when there is one.
    pub fn validate(&self) -> ValidationResult<()> {
        match self.zip_code {
            Some(zip) => validate_zip_code(zip),
            None => Ok(()),
        }
    }

    /// Single-line form, e.g. `"Baker Street 12A, 1200 Brussels"`.
    ///
    /// Missing parts are left out.
    pub fn one_line(&self) -> String {
        let street = [self.street.as_deref(), self.number.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        let zip = self.zip_code.map(|zip| zip.to_string());
        let locality = [zip.as_deref(), self.city.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");

        [street, locality]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Link that opens this address in Google Maps.
    ///
    /// The one-line form goes into the query as is, with spaces and non-ASCII
    /// characters percent-encoded (`%20`) and separators such as `,` kept.
    ///
    /// ## Example
    /// ```rust
    /// use speelplein_core::Address;
    ///
    /// let address = Address {
    ///     street: Some("Baker Street".into()),
    ///     number: Some("12A".into()),
    ///     zip_code: Some(1200),
    ///     city: Some("Brussels".into()),
    /// };
    /// assert_eq!(
    ///     address.google_maps_link(),
    ///     "https://maps.google.com/?q=Baker%20Street%2012A,%201200%20Brussels"
    /// );
    /// ```
    pub fn google_maps_link(&self) -> String {
        let mut url = match Url::parse(MAPS_BASE_URL) {
            Ok(url) => url,
            // The base is a constant; this arm is unreachable in practice.
            Err(_) => return MAPS_BASE_URL.to_string(),
        };
        url.set_query(Some(&format!("q={}", self.one_line())));
        url.into()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
