//! Validator layer: normalizes raw input, runs the checksum kernels and resolves
//! reference data into structured results.

use chrono::{Datelike, NaiveDate, Utc};

use crate::checksum::{ascii_digits, cnp_check_digit, cui_check_digit, is_valid_iban_checksum};
use crate::domain::{
    Bank, CnpValidation, County, CuiValidation, IbanValidation, IdentifierKind,
    IdentifierValidation, OnrcValidation, Sex, ValidationError,
};

/// Earliest ONRC registration year accepted by default.
pub const DEFAULT_ONRC_MIN_YEAR: i32 = 1990;

const CUI_MIN_DIGITS: usize = 2;
const CUI_MAX_DIGITS: usize = 10;
const IBAN_LENGTH: usize = 24;
/// Country code of Romanian IBANs, also the VAT prefix of a CUI.
const RO_PREFIX: &str = "RO";
const CNP_LENGTH: usize = 13;
/// CNP county code for people registered abroad and foreign citizens.
const CNP_ABROAD_CODE: u8 = 70;

#[derive(Debug, thiserror::Error)]
/// Errors returned when configuring or driving a [`RomanianValidator`].
///
/// Invalid identifiers are never errors; they produce results with failed flags.
pub enum ValidatorError {
    /// The configured minimum ONRC year lies after the reference year.
    #[error("minimum registration year {min_year} is after the reference year {reference_year}")]
    MinYearAfterReference { min_year: i32, reference_year: i32 },

    /// One of the domain parsers rejected its input.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone, Copy)]
/// Builder for [`RomanianValidator`].
pub struct RomanianValidatorBuilder {
    onrc_min_year: i32,
    reference_date: Option<NaiveDate>,
}

impl RomanianValidatorBuilder {
    /// Create a builder with the default minimum year and the live clock.
    pub fn new() -> Self {
        Self {
            onrc_min_year: DEFAULT_ONRC_MIN_YEAR,
            reference_date: None,
        }
    }

    /// Earliest accepted ONRC registration year.
    pub fn onrc_min_year(mut self, year: i32) -> Self {
        self.onrc_min_year = year;
        self
    }

    /// Pin "today" used for ONRC year and CNP birth date upper bounds.
    ///
    /// Without this the current UTC date is read on every call.
    pub fn reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Build a [`RomanianValidator`].
    pub fn build(self) -> Result<RomanianValidator, ValidatorError> {
        let reference_year = self
            .reference_date
            .unwrap_or_else(|| Utc::now().date_naive())
            .year();
        if self.onrc_min_year > reference_year {
            return Err(ValidatorError::MinYearAfterReference {
                min_year: self.onrc_min_year,
                reference_year,
            });
        }
        Ok(RomanianValidator {
            onrc_min_year: self.onrc_min_year,
            reference_date: self.reference_date,
        })
    }
}

impl Default for RomanianValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Validator for Romanian identifiers.
///
/// Stateless apart from its configuration; cheap to copy and safe to share across threads.
pub struct RomanianValidator {
    onrc_min_year: i32,
    reference_date: Option<NaiveDate>,
}

impl Default for RomanianValidator {
    fn default() -> Self {
        Self {
            onrc_min_year: DEFAULT_ONRC_MIN_YEAR,
            reference_date: None,
        }
    }
}

impl RomanianValidator {
    /// Create a builder to customize the minimum ONRC year or pin the reference date.
    pub fn builder() -> RomanianValidatorBuilder {
        RomanianValidatorBuilder::new()
    }

    pub fn onrc_min_year(&self) -> i32 {
        self.onrc_min_year
    }

    fn today(&self) -> NaiveDate {
        self.reference_date.unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Validate an identifier whose kind is only known at runtime.
    pub fn validate(&self, kind: IdentifierKind, raw: &str) -> IdentifierValidation {
        match kind {
            IdentifierKind::Cui => IdentifierValidation::Cui(self.validate_cui(raw)),
            IdentifierKind::Iban => IdentifierValidation::Iban(self.validate_iban(raw)),
            IdentifierKind::Onrc => IdentifierValidation::Onrc(self.validate_onrc(raw)),
            IdentifierKind::Cnp => IdentifierValidation::Cnp(self.validate_cnp_detailed(raw)),
        }
    }

    /// Like [`RomanianValidator::validate`], with the kind given by name (`"cui"`, `"IBAN"`, ...).
    pub fn validate_named(
        &self,
        kind: &str,
        raw: &str,
    ) -> Result<IdentifierValidation, ValidatorError> {
        let kind: IdentifierKind = kind.parse()?;
        Ok(self.validate(kind, raw))
    }

    /// Validate a CUI, with or without the `RO` prefix.
    pub fn validate_cui(&self, raw: &str) -> CuiValidation {
        let compact = strip_whitespace(raw).to_uppercase();
        let (has_ro_prefix, numeric_part) = match compact.strip_prefix(RO_PREFIX) {
            Some(rest) => (true, rest.to_owned()),
            None => (false, compact),
        };

        let digits = if (CUI_MIN_DIGITS..=CUI_MAX_DIGITS).contains(&numeric_part.len()) {
            ascii_digits(&numeric_part)
        } else {
            None
        };
        let format_valid = digits.is_some();
        let checksum_valid = digits
            .as_deref()
            .and_then(|digits| {
                let (body, check) = digits.split_last().map(|(c, b)| (b, *c))?;
                cui_check_digit(body).map(|expected| expected == check)
            })
            .unwrap_or(false);

        tracing::debug!(
            kind = %IdentifierKind::Cui,
            format_valid,
            checksum_valid,
            has_ro_prefix,
            "validated identifier"
        );

        CuiValidation {
            format_valid,
            checksum_valid,
            has_ro_prefix,
            formatted_cui: format!("{RO_PREFIX}{numeric_part}"),
            numeric_part,
            is_valid: format_valid && checksum_valid,
        }
    }

    /// Validate a Romanian IBAN. Spaces and lowercase letters are accepted.
    pub fn validate_iban(&self, raw: &str) -> IbanValidation {
        let iban = normalize_iban(raw);
        let length_valid = iban.chars().count() == IBAN_LENGTH;
        let country_valid = iban.starts_with(RO_PREFIX);
        let checksum_valid = length_valid && country_valid && is_valid_iban_checksum(&iban);

        let (bank_code, account_number) = if length_valid && country_valid && iban.is_ascii() {
            (Some(iban[4..8].to_owned()), Some(iban[8..].to_owned()))
        } else {
            (None, None)
        };
        let bank = bank_code.as_deref().and_then(Bank::by_code);

        tracing::debug!(
            kind = %IdentifierKind::Iban,
            length_valid,
            country_valid,
            checksum_valid,
            bank_exists = bank.is_some(),
            "validated identifier"
        );

        IbanValidation {
            iban,
            length_valid,
            country_valid,
            checksum_valid,
            bank_code,
            account_number,
            bank_name: bank.map(|b| b.name),
            bank_exists: bank.is_some(),
            is_valid: length_valid && country_valid && checksum_valid,
        }
    }

    /// Validate an ONRC registration number (`J<county>/<number>/<year>`).
    ///
    /// Any parse failure yields a result with every flag false.
    pub fn validate_onrc(&self, raw: &str) -> OnrcValidation {
        let Some(parts) = OnrcParts::parse(&raw.to_ascii_uppercase()) else {
            tracing::debug!(
                kind = %IdentifierKind::Onrc,
                format_valid = false,
                "validated identifier"
            );
            return OnrcValidation::rejected();
        };

        let county = County::by_code(parts.county_code);
        let county_valid = county.is_some();
        let year_valid = (self.onrc_min_year..=self.today().year()).contains(&parts.year);

        tracing::debug!(
            kind = %IdentifierKind::Onrc,
            format_valid = true,
            county_valid,
            year_valid,
            "validated identifier"
        );

        OnrcValidation {
            format_valid: true,
            county_valid,
            year_valid,
            county_code: Some(parts.county_code),
            county,
            normalized: Some(format!(
                "J{:02}/{}/{}",
                parts.county_code, parts.registration_number, parts.year
            )),
            registration_number: Some(parts.registration_number),
            year: Some(parts.year),
            is_valid: county_valid && year_valid,
        }
    }

    /// Validate a CNP, returning only the overall verdict.
    pub fn validate_cnp(&self, raw: &str) -> bool {
        self.validate_cnp_detailed(raw).is_valid
    }

    /// Validate a CNP and report every sub-check.
    ///
    /// The input must be exactly 13 ASCII digits; it is not trimmed.
    pub fn validate_cnp_detailed(&self, raw: &str) -> CnpValidation {
        let digits = if raw.len() == CNP_LENGTH {
            ascii_digits(raw)
        } else {
            None
        };
        let Some(digits) = digits else {
            tracing::debug!(
                kind = %IdentifierKind::Cnp,
                format_valid = false,
                "validated identifier"
            );
            return CnpValidation::rejected();
        };

        let today = self.today();
        let first = digits[0];
        let sex_century_valid = (1..=8).contains(&first);
        let sex = sex_century_valid.then(|| if first % 2 == 1 { Sex::Male } else { Sex::Female });
        let resident_foreigner = matches!(first, 7 | 8);

        let yy = i32::from(digits[1] * 10 + digits[2]);
        let month = u32::from(digits[3] * 10 + digits[4]);
        let day = u32::from(digits[5] * 10 + digits[6]);
        let date_in = |century: i32| NaiveDate::from_ymd_opt(century + yy, month, day);
        let birth_date = match first {
            1 | 2 => date_in(1900),
            3 | 4 => date_in(1800),
            5 | 6 => date_in(2000),
            // Residents carry no century; prefer the most recent one not in the future.
            7 | 8 => date_in(2000)
                .filter(|date| *date <= today)
                .or_else(|| date_in(1900)),
            _ => None,
        }
        .filter(|date| *date <= today);
        let birth_date_valid = birth_date.is_some();

        let county_code = digits[7] * 10 + digits[8];
        let county_valid = is_cnp_county_code(county_code);
        let county = match county_code {
            41..=48 => Some(County::bucharest()),
            code => County::by_code(code),
        };

        let checksum_valid = cnp_check_digit(&digits[..12]) == Some(digits[12]);

        tracing::debug!(
            kind = %IdentifierKind::Cnp,
            format_valid = true,
            sex_century_valid,
            birth_date_valid,
            county_valid,
            checksum_valid,
            "validated identifier"
        );

        CnpValidation {
            format_valid: true,
            sex_century_valid,
            birth_date_valid,
            county_valid,
            checksum_valid,
            sex,
            birth_date,
            county_code: Some(county_code),
            county,
            resident_foreigner,
            is_valid: sex_century_valid && birth_date_valid && county_valid && checksum_valid,
        }
    }
}

/// CNP county digits: counties 01–40, Bucharest sectors 41–48, Călărași, Giurgiu, abroad.
fn is_cnp_county_code(code: u8) -> bool {
    matches!(code, 1..=48 | 51 | 52 | CNP_ABROAD_CODE)
}

#[derive(Debug, PartialEq, Eq)]
struct OnrcParts {
    county_code: u8,
    registration_number: String,
    year: i32,
}

impl OnrcParts {
    /// Parse an uppercased `J<1-2 digits>/<digits>/<4 digits>`.
    ///
    /// Whitespace is allowed around the slashes and after `J`, never inside a digit group.
    fn parse(upper: &str) -> Option<Self> {
        let rest = upper.trim().strip_prefix('J')?;
        let mut parts = rest.split('/').map(str::trim);
        let (county, number, year) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }
        if !(1..=2).contains(&county.len()) || number.is_empty() || year.len() != 4 {
            return None;
        }
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(county) || !all_digits(number) || !all_digits(year) {
            return None;
        }
        Some(Self {
            county_code: county.parse().ok()?,
            registration_number: number.to_owned(),
            year: year.parse().ok()?,
        })
    }
}

fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

fn normalize_iban(raw: &str) -> String {
    strip_whitespace(raw).to_uppercase()
}

/// Normalize an IBAN and group it in blocks of four characters separated by spaces.
///
/// Applying it to its own output returns the same string.
pub fn format_romanian_iban(raw: &str) -> String {
    let chars: Vec<char> = normalize_iban(raw).chars().collect();
    chars
        .chunks(4)
        .map(|block| block.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// [`RomanianValidator::validate_cui`] with the default configuration.
pub fn validate_cui(raw: &str) -> CuiValidation {
    RomanianValidator::default().validate_cui(raw)
}

/// [`RomanianValidator::validate_iban`] with the default configuration.
pub fn validate_iban(raw: &str) -> IbanValidation {
    RomanianValidator::default().validate_iban(raw)
}

/// [`RomanianValidator::validate_onrc`] with the default configuration.
pub fn validate_onrc(raw: &str) -> OnrcValidation {
    RomanianValidator::default().validate_onrc(raw)
}

/// [`RomanianValidator::validate_cnp`] with the default configuration.
pub fn validate_cnp(raw: &str) -> bool {
    RomanianValidator::default().validate_cnp(raw)
}

/// [`RomanianValidator::validate_cnp_detailed`] with the default configuration.
pub fn validate_cnp_detailed(raw: &str) -> CnpValidation {
    RomanianValidator::default().validate_cnp_detailed(raw)
}

/// [`RomanianValidator::validate`] with the default configuration.
pub fn validate(kind: IdentifierKind, raw: &str) -> IdentifierValidation {
    RomanianValidator::default().validate(kind, raw)
}
