//! # File Requests
//!
//! Metadata sent along when the front end asks for a generated document
//! (lists, attendance sheets, fiscal certificates, invoices).

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Kind of document to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum FileType {
    AllChildren,
    AllCrew,
    ChildrenWithComment,
    FiscalCertificatesList,
    CrewAttendances,
    ChildAttendances,
    ChildHealthInsuranceCertificate,
    ChildFiscalCertificate,
    ChildInvoice,
    ChildrenPerDay,
    DayOverview,
}

impl FileType {
    /// Documents that show amounts of money, rendered through `Money`'s
    /// `Display`.
    pub fn contains_amounts(&self) -> bool {
        matches!(
            self,
            FileType::FiscalCertificatesList
                | FileType::ChildFiscalCertificate
                | FileType::ChildInvoice
        )
    }

    /// Documents that only make sense for a single fiscal year.
    pub fn is_yearly(&self) -> bool {
        matches!(
            self,
            FileType::FiscalCertificatesList
                | FileType::ChildFiscalCertificate
                | FileType::CrewAttendances
                | FileType::ChildAttendances
        )
    }
}

/// Output format of a generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum FileFormat {
    Pdf,
    Xlsx,
    Docx,
}

impl FileFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Pdf => "pdf",
            FileFormat::Xlsx => "xlsx",
            FileFormat::Docx => "docx",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::Pdf => write!(f, "PDF"),
            FileFormat::Xlsx => write!(f, "XLSX"),
            FileFormat::Docx => write!(f, "DOCX"),
        }
    }
}

/// Options accompanying a [`FileType`] request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FileRequestMetadata {
    pub format: FileFormat,

    /// Fiscal year, for yearly documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub year: Option<i32>,
}

impl FileRequestMetadata {
    pub fn new(format: FileFormat) -> Self {
        FileRequestMetadata { format, year: None }
    }

    pub fn with_year(self, year: i32) -> Self {
        FileRequestMetadata {
            year: Some(year),
            ..self
        }
    }
}
