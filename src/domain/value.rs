use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::reference::{Bank, County};
use crate::domain::result::{CnpValidation, CuiValidation, IbanValidation, OnrcValidation};
use crate::domain::validation::ValidationError;
use crate::validator::RomanianValidator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
/// The identifier formats recognized by this crate.
pub enum IdentifierKind {
    #[serde(rename = "CUI")]
    Cui,
    #[serde(rename = "IBAN")]
    Iban,
    #[serde(rename = "ONRC")]
    Onrc,
    #[serde(rename = "CNP")]
    Cnp,
}

impl IdentifierKind {
    pub const ALL: [IdentifierKind; 4] = [Self::Cui, Self::Iban, Self::Onrc, Self::Cnp];

    /// Canonical uppercase name (`"CUI"`, `"IBAN"`, `"ONRC"`, `"CNP"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cui => "CUI",
            Self::Iban => "IBAN",
            Self::Onrc => "ONRC",
            Self::Cnp => "CNP",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentifierKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::UnknownKind {
                input: trimmed.to_owned(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
/// Sex encoded in the first CNP digit.
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Romanian business tax id (CUI / CIF).
///
/// Invariant: 2–10 ASCII digits with a matching check digit. Stored without the `RO` prefix.
pub struct Cui(String);

impl Cui {
    pub const FIELD: &'static str = "cui";

    /// Create a validated [`Cui`]; whitespace and an optional `RO` prefix are accepted.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Self::from_validation(RomanianValidator::default().validate_cui(value))
    }

    /// Digits without the `RO` prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digits with the `RO` prefix, as used for VAT-registered companies.
    pub fn with_ro_prefix(&self) -> String {
        format!("RO{}", self.0)
    }
}

impl Cui {
    fn from_validation(result: CuiValidation) -> Result<Self, ValidationError> {
        let digits_ok = (2..=10).contains(&result.numeric_part.len())
            && result.numeric_part.bytes().all(|b| b.is_ascii_digit());
        if !result.format_valid || !digits_ok {
            return Err(ValidationError::InvalidFormat { field: Self::FIELD });
        }
        if !result.checksum_valid {
            return Err(ValidationError::ChecksumMismatch { field: Self::FIELD });
        }
        Ok(Self(result.numeric_part))
    }
}

impl fmt::Display for Cui {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Romanian IBAN.
///
/// Invariant: 24 uppercase ASCII characters, `RO` country code, valid mod 97 checksum.
/// The bank code is not required to be known.
pub struct RomanianIban(String);

impl RomanianIban {
    pub const FIELD: &'static str = "iban";

    /// Create a validated [`RomanianIban`]; spaces and lowercase letters are accepted.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Self::from_validation(RomanianValidator::default().validate_iban(value))
    }

    /// Compact form without spaces.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Characters 5–8.
    pub fn bank_code(&self) -> &str {
        &self.0[4..8]
    }

    /// Characters 9–24.
    pub fn account_number(&self) -> &str {
        &self.0[8..]
    }

    pub fn bank(&self) -> Option<&'static Bank> {
        Bank::by_code(self.bank_code())
    }

    /// Grouped in blocks of four, e.g. `RO49 AAAA 1B31 0075 9384 0000`.
    pub fn formatted(&self) -> String {
        crate::validator::format_romanian_iban(&self.0)
    }
}

impl RomanianIban {
    fn from_validation(result: IbanValidation) -> Result<Self, ValidationError> {
        let shape_ok = result.iban.len() == 24
            && result.iban.starts_with("RO")
            && result
                .iban
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
        if !result.length_valid || !result.country_valid || !shape_ok {
            return Err(ValidationError::InvalidFormat { field: Self::FIELD });
        }
        if !result.checksum_valid {
            return Err(ValidationError::ChecksumMismatch { field: Self::FIELD });
        }
        Ok(Self(result.iban))
    }
}

impl fmt::Display for RomanianIban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Trade-registry (ONRC) registration number, e.g. `J12/1234/2023`.
///
/// Invariant: known county code, numeric registration number, year not before the
/// configured minimum and not in the future.
pub struct OnrcNumber {
    normalized: String,
    county: &'static County,
    registration_number: String,
    year: i32,
}

impl OnrcNumber {
    pub const FIELD: &'static str = "onrc";

    /// Create a validated [`OnrcNumber`] using today's date as the upper bound for the year.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Self::from_validation(RomanianValidator::default().validate_onrc(value))
    }

    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    pub fn county(&self) -> &'static County {
        self.county
    }

    pub fn registration_number(&self) -> &str {
        &self.registration_number
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

impl OnrcNumber {
    fn from_validation(result: OnrcValidation) -> Result<Self, ValidationError> {
        let (Some(normalized), Some(registration_number), Some(year), Some(code)) = (
            result.normalized,
            result.registration_number,
            result.year,
            result.county_code,
        ) else {
            return Err(ValidationError::InvalidFormat { field: Self::FIELD });
        };
        if !result.format_valid
            || registration_number.is_empty()
            || !registration_number.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ValidationError::InvalidFormat { field: Self::FIELD });
        }
        let county = result
            .county
            .ok_or_else(|| ValidationError::UnknownReference {
                field: "county",
                code: format!("{code:02}"),
            })?;
        if !result.year_valid {
            return Err(ValidationError::InvalidFormat { field: "year" });
        }
        Ok(Self {
            normalized,
            county,
            registration_number,
            year,
        })
    }
}

impl fmt::Display for OnrcNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Romanian personal numeric code (CNP).
///
/// Invariant: all sub-checks pass (sex/century digit, birth date, county, check digit).
/// `Debug` masks the digits after the birth date.
pub struct Cnp {
    value: String,
    sex: Sex,
    birth_date: NaiveDate,
    county_code: u8,
    county: Option<&'static County>,
}

impl Cnp {
    pub const FIELD: &'static str = "cnp";

    /// Create a validated [`Cnp`]. The input must be exactly 13 digits; it is not trimmed.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let result = RomanianValidator::default().validate_cnp_detailed(value);
        Self::from_validation(value, result)
    }

    fn from_validation(
        value: &str,
        result: CnpValidation,
    ) -> Result<Self, ValidationError> {
        if !result.format_valid || !result.sex_century_valid {
            return Err(ValidationError::InvalidFormat { field: Self::FIELD });
        }
        let (Some(sex), Some(birth_date), Some(county_code)) =
            (result.sex, result.birth_date, result.county_code)
        else {
            return Err(ValidationError::InvalidFormat { field: "birthDate" });
        };
        if !result.county_valid {
            return Err(ValidationError::UnknownReference {
                field: "county",
                code: format!("{county_code:02}"),
            });
        }
        if !result.checksum_valid {
            return Err(ValidationError::ChecksumMismatch { field: Self::FIELD });
        }
        Ok(Self {
            value: value.to_owned(),
            sex,
            birth_date,
            county_code,
            county: result.county,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Digits 8–9 as a number (`41..=48` are Bucharest sectors, `70` is registered abroad).
    pub fn county_code(&self) -> u8 {
        self.county_code
    }

    pub fn county(&self) -> Option<&'static County> {
        self.county
    }
}

impl fmt::Debug for Cnp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let visible = self.value.get(..7).unwrap_or_default();
        f.debug_tuple("Cnp")
            .field(&format_args!("{visible}******"))
            .finish()
    }
}
