use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::reference::County;
use crate::domain::value::{IdentifierKind, Sex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
/// Category of a failed sub-check.
pub enum IssueKind {
    /// Structural shape is wrong: length, characters, pattern, date.
    Format,
    /// Well-formed, but the check digit does not match.
    Checksum,
    /// Well-formed and arithmetically valid, but refers to an unknown county or bank.
    ReferenceData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
/// A single field-level diagnostic.
pub struct ValidationIssue {
    pub field: &'static str,
    pub kind: IssueKind,
}

impl ValidationIssue {
    const fn new(field: &'static str, kind: IssueKind) -> Self {
        Self { field, kind }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CuiValidation {
    pub format_valid: bool,
    pub checksum_valid: bool,
    #[serde(rename = "hasROPrefix")]
    pub has_ro_prefix: bool,
    pub numeric_part: String,
    #[serde(rename = "formattedCUI")]
    pub formatted_cui: String,
    pub is_valid: bool,
}

impl CuiValidation {
    pub fn issues(&self) -> Vec<ValidationIssue> {
        if !self.format_valid {
            vec![ValidationIssue::new("cui", IssueKind::Format)]
        } else if !self.checksum_valid {
            vec![ValidationIssue::new("cui", IssueKind::Checksum)]
        } else {
            Vec::new()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IbanValidation {
    /// Input with whitespace removed, uppercased.
    pub iban: String,
    pub length_valid: bool,
    pub country_valid: bool,
    pub checksum_valid: bool,
    pub bank_code: Option<String>,
    pub account_number: Option<String>,
    pub bank_name: Option<&'static str>,
    pub bank_exists: bool,
    /// Length, country and checksum all pass. An unknown bank does not invalidate the IBAN.
    pub is_valid: bool,
}

impl IbanValidation {
    /// Diagnostics, blocking issues first. An unknown bank code is reported last.
    pub fn issues(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        if !self.length_valid {
            issues.push(ValidationIssue::new("iban", IssueKind::Format));
        }
        if !self.country_valid {
            issues.push(ValidationIssue::new("countryCode", IssueKind::Format));
        }
        if self.length_valid && self.country_valid {
            if !self.checksum_valid {
                issues.push(ValidationIssue::new("iban", IssueKind::Checksum));
            }
            if !self.bank_exists {
                issues.push(ValidationIssue::new("bankCode", IssueKind::ReferenceData));
            }
        }
        issues
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnrcValidation {
    pub format_valid: bool,
    pub county_valid: bool,
    pub year_valid: bool,
    pub county_code: Option<u8>,
    pub county: Option<&'static County>,
    pub registration_number: Option<String>,
    pub year: Option<i32>,
    /// Canonical form, e.g. `J12/1234/2023`.
    pub normalized: Option<String>,
    pub is_valid: bool,
}

impl OnrcValidation {
    pub(crate) fn rejected() -> Self {
        Self {
            format_valid: false,
            county_valid: false,
            year_valid: false,
            county_code: None,
            county: None,
            registration_number: None,
            year: None,
            normalized: None,
            is_valid: false,
        }
    }

    pub fn issues(&self) -> Vec<ValidationIssue> {
        if !self.format_valid {
            return vec![ValidationIssue::new("onrc", IssueKind::Format)];
        }
        let mut issues = Vec::new();
        if !self.county_valid {
            issues.push(ValidationIssue::new("county", IssueKind::ReferenceData));
        }
        if !self.year_valid {
            issues.push(ValidationIssue::new("year", IssueKind::Format));
        }
        issues
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CnpValidation {
    pub format_valid: bool,
    pub sex_century_valid: bool,
    pub birth_date_valid: bool,
    pub county_valid: bool,
    pub checksum_valid: bool,
    pub sex: Option<Sex>,
    pub birth_date: Option<NaiveDate>,
    pub county_code: Option<u8>,
    /// Resolved county; Bucharest sector codes resolve to Bucharest, code 70 to none.
    pub county: Option<&'static County>,
    pub resident_foreigner: bool,
    pub is_valid: bool,
}

impl CnpValidation {
    pub(crate) fn rejected() -> Self {
        Self {
            format_valid: false,
            sex_century_valid: false,
            birth_date_valid: false,
            county_valid: false,
            checksum_valid: false,
            sex: None,
            birth_date: None,
            county_code: None,
            county: None,
            resident_foreigner: false,
            is_valid: false,
        }
    }

    pub fn issues(&self) -> Vec<ValidationIssue> {
        if !self.format_valid {
            return vec![ValidationIssue::new("cnp", IssueKind::Format)];
        }
        let mut issues = Vec::new();
        if !self.sex_century_valid {
            issues.push(ValidationIssue::new("sexCentury", IssueKind::Format));
        }
        if !self.birth_date_valid {
            issues.push(ValidationIssue::new("birthDate", IssueKind::Format));
        }
        if !self.county_valid {
            issues.push(ValidationIssue::new("county", IssueKind::ReferenceData));
        }
        if !self.checksum_valid {
            issues.push(ValidationIssue::new("cnp", IssueKind::Checksum));
        }
        issues
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
/// Result of validating an identifier of a kind chosen at runtime.
pub enum IdentifierValidation {
    #[serde(rename = "CUI")]
    Cui(CuiValidation),
    #[serde(rename = "IBAN")]
    Iban(IbanValidation),
    #[serde(rename = "ONRC")]
    Onrc(OnrcValidation),
    #[serde(rename = "CNP")]
    Cnp(CnpValidation),
}

impl IdentifierValidation {
    pub fn kind(&self) -> IdentifierKind {
        match self {
            Self::Cui(_) => IdentifierKind::Cui,
            Self::Iban(_) => IdentifierKind::Iban,
            Self::Onrc(_) => IdentifierKind::Onrc,
            Self::Cnp(_) => IdentifierKind::Cnp,
        }
    }

    pub fn is_valid(&self) -> bool {
        match self {
            Self::Cui(r) => r.is_valid,
            Self::Iban(r) => r.is_valid,
            Self::Onrc(r) => r.is_valid,
            Self::Cnp(r) => r.is_valid,
        }
    }

    pub fn issues(&self) -> Vec<ValidationIssue> {
        match self {
            Self::Cui(r) => r.issues(),
            Self::Iban(r) => r.issues(),
            Self::Onrc(r) => r.issues(),
            Self::Cnp(r) => r.issues(),
        }
    }
}
