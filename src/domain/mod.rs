//! Domain layer: strong types, validation results and reference data (no I/O).

mod reference;
mod result;
mod validation;
mod value;

pub use reference::{BUCHAREST_CODE, Bank, County};
pub use result::{
    CnpValidation, CuiValidation, IbanValidation, IdentifierValidation, IssueKind,
    OnrcValidation, ValidationIssue,
};
pub use validation::ValidationError;
pub use value::{Cnp, Cui, IdentifierKind, OnrcNumber, RomanianIban, Sex};
