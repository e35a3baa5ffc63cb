//! # People
//!
//! What every person record (crew member, contact person, child) shares.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Anything with a first and last name.
pub trait Person {
    fn first_name(&self) -> &str;

    fn last_name(&self) -> &str;

    /// `"<first> <last>"`, the key used for alphabetical listings.
    fn full_name(&self) -> String {
        format!("{} {}", self.first_name(), self.last_name())
    }
}

/// A phone number with an optional label ("Mother", "Work", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PhoneContact {
    pub phone_number: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub kind: Option<String>,
}

impl PhoneContact {
    pub fn new(phone_number: impl Into<String>) -> Self {
        PhoneContact {
            phone_number: phone_number.into(),
            kind: None,
        }
    }

    /// Belgian mobile numbers start with `04` or `+324`.
    pub fn is_mobile(&self) -> bool {
        let number = self.phone_number.trim();
        number.starts_with("04") || number.starts_with("+324")
    }
}
