//! Typed Rust validators for Romanian identifiers used in supplier onboarding.
//!
//! Four formats are supported: CUI (business tax id), IBAN, ONRC trade-registry
//! numbers and CNP (personal numeric code). The crate is split into a domain layer
//! of strong types and results, private checksum kernels, and a validator layer
//! that normalizes input and assembles structured results.
//!
//! Invalid input is never an error: every `validate_*` function returns a fully
//! populated result whose flags say which sub-checks failed.
//!
//! ```rust
//! use roident::{IdentifierKind, RomanianIban, validate, validate_cui};
//!
//! let cui = validate_cui("RO18547290");
//! assert!(cui.is_valid);
//! assert_eq!(cui.numeric_part, "18547290");
//!
//! let iban = RomanianIban::new("RO65 BTRL RONC RT01 2345 6789").unwrap();
//! assert_eq!(iban.bank_code(), "BTRL");
//!
//! assert!(!validate(IdentifierKind::Cnp, "9800101400010").is_valid());
//! ```
#![forbid(unsafe_code)]

mod checksum;
pub mod domain;
pub mod extract;
pub mod validator;

pub use domain::{
    Bank, Cnp, CnpValidation, County, Cui, CuiValidation, IbanValidation, IdentifierKind,
    IdentifierValidation, IssueKind, OnrcNumber, OnrcValidation, RomanianIban, Sex,
    ValidationError, ValidationIssue,
};
pub use extract::{ExtractedIdentifier, extract_identifiers, extract_identifiers_with};
pub use validator::{
    RomanianValidator, RomanianValidatorBuilder, ValidatorError, format_romanian_iban, validate,
    validate_cnp, validate_cnp_detailed, validate_cui, validate_iban, validate_onrc,
};
