//! Property-based tests using `proptest`.
//!
//! Validators must never panic on arbitrary input, must honour the length and
//! normalization rules, and must accept every value built to satisfy the checksums.

use chrono::NaiveDate;
use proptest::prelude::*;
use roident::{
    County, RomanianValidator, extract_identifiers, format_romanian_iban, validate_cnp,
    validate_cnp_detailed, validate_cui, validate_iban, validate_onrc,
};

fn pinned() -> RomanianValidator {
    RomanianValidator::builder()
        .reference_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
        .build()
        .unwrap()
}

fn digits_to_string(digits: &[u32]) -> String {
    digits
        .iter()
        .map(|d| char::from_digit(*d, 10).unwrap())
        .collect()
}

// ---------- Never-panic properties ----------

proptest! {
    #[test]
    fn cui_never_panics(s in "\\PC*") {
        let _ = validate_cui(&s);
    }

    #[test]
    fn iban_never_panics(s in "\\PC*") {
        let _ = validate_iban(&s);
        let _ = format_romanian_iban(&s);
    }

    #[test]
    fn onrc_never_panics(s in "\\PC*") {
        let _ = validate_onrc(&s);
    }

    #[test]
    fn cnp_never_panics(s in "\\PC*") {
        let _ = validate_cnp_detailed(&s);
    }

    #[test]
    fn extract_never_panics(s in "\\PC{0,300}") {
        let _ = extract_identifiers(&s);
    }
}

// ---------- Structural rules ----------

proptest! {
    #[test]
    fn cnp_wrong_length_is_invalid(s in "[0-9]{0,12}|[0-9]{14,20}") {
        prop_assert!(!validate_cnp(&s));
    }

    #[test]
    fn cnp_any_string_not_13_bytes_is_invalid(s in "\\PC*") {
        prop_assume!(s.len() != 13);
        prop_assert!(!validate_cnp(&s));
    }

    #[test]
    fn cnp_starting_with_nine_is_invalid(rest in "[0-9]{12}") {
        let cnp = format!("9{rest}");
        prop_assert!(!validate_cnp(&cnp));
    }

    #[test]
    fn cui_prefix_does_not_change_checksum(digits in "[0-9]{1,12}") {
        let bare = validate_cui(&digits);
        let with_prefix = format!("RO{digits}");
        let prefixed = validate_cui(&with_prefix);
        prop_assert_eq!(&bare.numeric_part, &prefixed.numeric_part);
        prop_assert_eq!(bare.format_valid, prefixed.format_valid);
        prop_assert_eq!(bare.checksum_valid, prefixed.checksum_valid);
        prop_assert!(!bare.has_ro_prefix);
        prop_assert!(prefixed.has_ro_prefix);
    }

    #[test]
    fn cui_outside_2_to_10_digits_is_malformed(digits in "[0-9]{0,1}|[0-9]{11,16}") {
        prop_assert!(!validate_cui(&digits).format_valid);
        let with_prefix = format!("RO{digits}");
        prop_assert!(!validate_cui(&with_prefix).format_valid);
    }

    #[test]
    fn iban_formatting_is_idempotent(s in "[A-Za-z0-9 ]{0,40}") {
        let once = format_romanian_iban(&s);
        prop_assert_eq!(format_romanian_iban(&once), once);
    }
}

// ---------- Valid-by-construction values ----------

/// Generate a checksum-valid CUI (digits only, 2..=10 chars).
fn valid_cui_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(0u32..10, 1..=9).prop_map(|body| {
        let weights = [7, 5, 3, 2, 1, 7, 5, 3, 2];
        let offset = weights.len() - body.len();
        let sum: u32 = body.iter().zip(&weights[offset..]).map(|(d, w)| d * w).sum();
        let check = match sum * 10 % 11 {
            10 => 0,
            r => r,
        };
        let mut digits = body;
        digits.push(check);
        digits_to_string(&digits)
    })
}

/// Generate a checksum-valid Romanian IBAN (compact form).
fn valid_iban_strategy() -> impl Strategy<Value = String> {
    ("[A-Z]{4}", "[A-Z0-9]{16}").prop_map(|(bank, account)| {
        let rearranged = format!("{bank}{account}RO00");
        let remainder = rearranged.bytes().fold(0u32, |acc, b| match b {
            b'0'..=b'9' => (acc * 10 + u32::from(b - b'0')) % 97,
            _ => (acc * 100 + u32::from(b - b'A') + 10) % 97,
        });
        format!("RO{:02}{bank}{account}", 98 - remainder)
    })
}

/// Generate a checksum-valid CNP of someone born in the 1900s.
fn valid_cnp_strategy() -> impl Strategy<Value = String> {
    let county = prop_oneof![1u32..=46, Just(51u32), Just(52u32), Just(70u32)];
    (1u32..=2, 0u32..100, 1u32..=12, 1u32..=28, county, 0u32..1000).prop_map(
        |(sex, yy, month, day, county, seq)| {
            let body = format!("{sex}{yy:02}{month:02}{day:02}{county:02}{seq:03}");
            let weights = [2, 7, 9, 1, 4, 6, 3, 5, 8, 2, 7, 9];
            let sum: u32 = body
                .chars()
                .zip(weights)
                .map(|(c, w)| c.to_digit(10).unwrap() * w)
                .sum();
            let check = match sum % 11 {
                10 => 1,
                r => r,
            };
            format!("{body}{check}")
        },
    )
}

proptest! {
    #[test]
    fn valid_cui_roundtrip(cui in valid_cui_strategy()) {
        let result = validate_cui(&cui);
        prop_assert!(result.is_valid, "Generated CUI should validate: {}", cui);
        let with_prefix = format!("RO{cui}");
        prop_assert!(validate_cui(&with_prefix).is_valid);
    }

    #[test]
    fn valid_cui_with_wrong_check_digit_fails(cui in valid_cui_strategy(), bump in 1u32..10) {
        let (body, check) = cui.split_at(cui.len() - 1);
        let wrong = (check.parse::<u32>().unwrap() + bump) % 10;
        let tampered = format!("{body}{wrong}");
        prop_assert!(!validate_cui(&tampered).checksum_valid);
    }

    #[test]
    fn valid_iban_roundtrip(iban in valid_iban_strategy()) {
        let result = validate_iban(&iban);
        prop_assert!(result.is_valid, "Generated IBAN should validate: {}", iban);
        prop_assert_eq!(result.bank_code.as_deref(), Some(&iban[4..8]));
    }

    #[test]
    fn spaced_iban_validates_like_compact(iban in valid_iban_strategy()) {
        let spaced = format_romanian_iban(&iban);
        prop_assert_eq!(validate_iban(&spaced).is_valid, validate_iban(&iban).is_valid);
        prop_assert_eq!(spaced.replace(' ', ""), iban);
    }

    #[test]
    fn valid_cnp_roundtrip(cnp in valid_cnp_strategy()) {
        let result = pinned().validate_cnp_detailed(&cnp);
        prop_assert!(result.is_valid, "Generated CNP should validate: {} {:?}", cnp, result);
    }

    #[test]
    fn valid_onrc_roundtrip(
        index in 0usize..42,
        number in "[1-9][0-9]{0,5}",
        year in 1990i32..=2024
    ) {
        let county = &County::all()[index];
        let raw = format!("J{}/{number}/{year}", county.code);
        let result = pinned().validate_onrc(&raw);
        prop_assert!(result.is_valid, "Generated ONRC should validate: {}", raw);
        prop_assert_eq!(result.county, Some(county));
    }
}
