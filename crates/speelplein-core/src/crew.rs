//! # Crew
//!
//! Volunteers (animators) who run the playground days.
//!
//! ## Record Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Crew::empty() ──► with_first_name(..) ──► with_address(..) ──► save   │
//! │                                                                         │
//! │  Stored document (no id) ──► CrewMapper::lift(id, ..) ──► Crew { id }  │
//! │  Crew { id } ──► CrewMapper::unlift ──► stored document (no id)        │
//! │                                                                         │
//! │  Every with_* consumes the record and returns the updated one;         │
//! │  nothing is changed behind the back of another holder.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::address::Address;
use crate::person::{Person, PhoneContact};
use crate::validation::{
    validate_email, validate_name, validate_uuid, validate_year_started, ValidationResult,
};

const VCARD_CATEGORY: &str = "Speelplein (animator)";
const VCARD_NOTE: &str = "Geimporteerde animator (speelplein)";
const VCARD_COUNTRY: &str = "Belgium";

fn default_active() -> bool {
    true
}

/// A crew member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Crew {
    /// Record id; absent until the record has been stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub id: Option<String>,

    pub first_name: String,

    pub last_name: String,

    #[serde(default)]
    pub address: Address,

    /// Inactive members are hidden from attendance lists.
    #[serde(default = "default_active")]
    pub active: bool,

    /// Bank account, preferably IBAN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub bank_account: Option<String>,

    #[serde(default)]
    pub phone: Vec<PhoneContact>,

    #[serde(default)]
    pub email: Vec<String>,

    /// Year the member started volunteering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub year_started: Option<i32>,

    /// ISO 8601 date (`YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub birth_date: Option<NaiveDate>,

    #[serde(default)]
    pub remarks: String,
}

impl Person for Crew {
    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }
}

impl Default for Crew {
    fn default() -> Self {
        Crew::empty()
    }
}

impl Crew {
    /// A blank, active crew member, as shown in the "new crew" form.
    pub fn empty() -> Self {
        Crew {
            id: None,
            first_name: String::new(),
            last_name: String::new(),
            address: Address::default(),
            active: true,
            bank_account: None,
            phone: Vec::new(),
            email: Vec::new(),
            year_started: None,
            birth_date: None,
            remarks: String::new(),
        }
    }

    /// Returns a copy of `list` ordered by full name (case-insensitive).
    pub fn sorted(list: &[Crew]) -> Vec<Crew> {
        let mut sorted = list.to_vec();
        sorted.sort_by_cached_key(|crew| crew.full_name().to_lowercase());
        sorted
    }

    pub fn with_id(self, id: Option<String>) -> Self {
        Crew { id, ..self }
    }

    /// Assigns a fresh UUID v4, for records created offline.
    pub fn with_generated_id(self) -> Self {
        self.with_id(Some(Uuid::new_v4().to_string()))
    }

    pub fn with_active(self, active: bool) -> Self {
        Crew { active, ..self }
    }

    pub fn with_address(self, address: Address) -> Self {
        Crew { address, ..self }
    }

    pub fn with_bank_account(self, bank_account: Option<String>) -> Self {
        Crew {
            bank_account,
            ..self
        }
    }

    pub fn with_birth_date(self, birth_date: Option<NaiveDate>) -> Self {
        Crew { birth_date, ..self }
    }

    pub fn with_email(self, email: Vec<String>) -> Self {
        Crew { email, ..self }
    }

    pub fn with_phone(self, phone: Vec<PhoneContact>) -> Self {
        Crew { phone, ..self }
    }

    pub fn with_first_name(self, first_name: impl Into<String>) -> Self {
        Crew {
            first_name: first_name.into(),
            ..self
        }
    }

    pub fn with_last_name(self, last_name: impl Into<String>) -> Self {
        Crew {
            last_name: last_name.into(),
            ..self
        }
    }

    pub fn with_remarks(self, remarks: impl Into<String>) -> Self {
        Crew {
            remarks: remarks.into(),
            ..self
        }
    }

    pub fn with_year_started(self, year_started: Option<i32>) -> Self {
        Crew {
            year_started,
            ..self
        }
    }

    /// Checks the record before it is stored.
    ///
    /// ## Rules
    /// - First and last name are required
    /// - Every e-mail address is well-formed
    /// - `year_started` lies between the first season and `current_year`
    /// - `id`, when present, is a UUID
    /// - The address zip code, when present, is a Belgian postal code
    pub fn validate(&self, current_year: i32) -> ValidationResult<()> {
        validate_name("firstName", &self.first_name)?;
        validate_name("lastName", &self.last_name)?;

        for email in &self.email {
            validate_email(email)?;
        }

        if let Some(year) = self.year_started {
            validate_year_started(year, current_year)?;
        }

        if let Some(id) = &self.id {
            validate_uuid(id)?;
        }

        self.address.validate()
    }

    /// Contact card (vCard 3.0) for importing into a phone or address book.
    ///
    /// ## Contents
    /// ```text
    /// N / FN        name
    /// CATEGORIES    "Speelplein (animator)"
    /// TEL           CELL for Belgian mobile numbers, HOME otherwise
    /// EMAIL         HOME
    /// BDAY          ISO 8601, when known
    /// ADR           HOME, Belgium, only when a street is known
    /// ```
    pub fn vcard(&self) -> String {
        let mut lines = vec![
            "BEGIN:VCARD".to_string(),
            "VERSION:3.0".to_string(),
            format!(
                "N:{};{};;;",
                escape_vcard(&self.last_name),
                escape_vcard(&self.first_name)
            ),
            format!("FN:{}", escape_vcard(&self.full_name())),
            format!("CATEGORIES:{}", escape_vcard(VCARD_CATEGORY)),
            format!("NOTE:{}", escape_vcard(VCARD_NOTE)),
        ];

        for contact in &self.phone {
            let kind = if contact.is_mobile() { "CELL" } else { "HOME" };
            lines.push(format!(
                "TEL;TYPE={}:{}",
                kind,
                escape_vcard(&contact.phone_number)
            ));
        }

        for email in &self.email {
            lines.push(format!("EMAIL;TYPE=HOME:{}", escape_vcard(email)));
        }

        if let Some(birth_date) = self.birth_date {
            lines.push(format!("BDAY:{}", birth_date.format("%Y-%m-%d")));
        }

        if let Some(street) = &self.address.street {
            let street_line = match &self.address.number {
                Some(number) => format!("{} {}", street, number),
                None => street.clone(),
            };
            let zip = self
                .address
                .zip_code
                .map(|zip| zip.to_string())
                .unwrap_or_default();
            lines.push(format!(
                "ADR;TYPE=HOME:;;{};{};;{};{}",
                escape_vcard(&street_line),
                escape_vcard(self.address.city.as_deref().unwrap_or_default()),
                zip,
                VCARD_COUNTRY
            ));
        }

        lines.push("END:VCARD".to_string());

        let mut card = lines.join("\r\n");
        card.push_str("\r\n");
        card
    }
}

/// Escapes a vCard text value (backslash, comma, semicolon, newline).
fn escape_vcard(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ',' => escaped.push_str("\\,"),
            ';' => escaped.push_str("\\;"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            other => escaped.push(other),
        }
    }
    escaped
}

// =============================================================================
// Unit Tests
// =============================================================================
