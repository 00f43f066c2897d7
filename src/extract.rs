//! Finds identifier candidates in free text, such as the OCR output of an uploaded
//! registration certificate or bank statement, and validates each one.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::domain::{IdentifierKind, IdentifierValidation};
use crate::validator::RomanianValidator;

static IBAN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bRO[0-9]{2}(?: ?[A-Z0-9]{4}){5}\b").expect("IBAN pattern is valid")
});

static CNP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[0-9]{13}\b").expect("CNP pattern is valid"));

static ONRC_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bJ\s*[0-9]{1,2}\s*/\s*[0-9]+\s*/\s*[0-9]{4}\b").expect("ONRC pattern is valid")
});

/// A bare number is only a CUI candidate with the `RO` prefix or right after a keyword.
static CUI_PREFIXED_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bRO ?[0-9]{2,10}\b").expect("CUI pattern is valid"));

static CUI_KEYWORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:CUI|CIF|cod\s+fiscal)\s*:?\s*((?:RO ?)?[0-9]{2,10})\b")
        .expect("CUI keyword pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// An identifier candidate found in text, with its validation result.
pub struct ExtractedIdentifier {
    pub kind: IdentifierKind,
    /// Byte offset of the first character of the match.
    pub start: usize,
    /// Byte offset one past the last character of the match.
    pub end: usize,
    /// The matched text as it appears in the input.
    pub text: String,
    pub validation: IdentifierValidation,
}

impl ExtractedIdentifier {
    pub fn is_valid(&self) -> bool {
        self.validation.is_valid()
    }
}

/// Scan `text` with the default validator. See [`extract_identifiers_with`].
pub fn extract_identifiers(text: &str) -> Vec<ExtractedIdentifier> {
    extract_identifiers_with(&RomanianValidator::default(), text)
}

/// Scan `text` for IBAN, CNP, ONRC and CUI candidates and validate each one.
///
/// Candidates that overlap an already accepted candidate of a higher-priority kind
/// (IBAN, then CNP, then ONRC, then CUI) are dropped. Invalid candidates are kept so
/// callers can flag them for review. Results are in order of appearance.
pub fn extract_identifiers_with(
    validator: &RomanianValidator,
    text: &str,
) -> Vec<ExtractedIdentifier> {
    let mut accepted: Vec<(IdentifierKind, Range<usize>)> = Vec::new();
    for (kind, span) in candidates(text) {
        if accepted.iter().all(|(_, taken)| !overlaps(taken, &span)) {
            accepted.push((kind, span));
        }
    }
    accepted.sort_by_key(|(_, span)| span.start);

    let found: Vec<ExtractedIdentifier> = accepted
        .into_iter()
        .map(|(kind, span)| {
            let matched = &text[span.clone()];
            ExtractedIdentifier {
                kind,
                start: span.start,
                end: span.end,
                text: matched.to_owned(),
                validation: validator.validate(kind, matched),
            }
        })
        .collect();

    tracing::debug!(
        candidates = found.len(),
        valid = found.iter().filter(|f| f.is_valid()).count(),
        "extracted identifiers from text"
    );
    found
}

/// All candidates, in priority order.
fn candidates(text: &str) -> Vec<(IdentifierKind, Range<usize>)> {
    let mut out = Vec::new();
    for (kind, pattern) in [
        (IdentifierKind::Iban, &IBAN_PATTERN),
        (IdentifierKind::Cnp, &CNP_PATTERN),
        (IdentifierKind::Onrc, &ONRC_PATTERN),
        (IdentifierKind::Cui, &CUI_PREFIXED_PATTERN),
    ] {
        out.extend(pattern.find_iter(text).map(|m| (kind, m.range())));
    }
    out.extend(
        CUI_KEYWORD_PATTERN
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| (IdentifierKind::Cui, m.range())),
    );
    out
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn pinned() -> RomanianValidator {
        RomanianValidator::builder()
            .reference_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn finds_every_kind_in_order_of_appearance() {
        let text = "Furnizor: AGRO SRL, CUI: RO18547290, Nr. Reg. Com. J12/1234/2015, \
                    IBAN RO65 BTRL RONC RT01 2345 6789, administrator CNP 1800101221144.";
        let found = extract_identifiers_with(&pinned(), text);

        let kinds: Vec<IdentifierKind> = found.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![
                IdentifierKind::Cui,
                IdentifierKind::Onrc,
                IdentifierKind::Iban,
                IdentifierKind::Cnp
            ]
        );
        assert!(found.iter().all(ExtractedIdentifier::is_valid));

        let texts: Vec<&str> = found.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "RO18547290",
                "J12/1234/2015",
                "RO65 BTRL RONC RT01 2345 6789",
                "1800101221144"
            ]
        );
        for f in &found {
            assert_eq!(&text[f.start..f.end], f.text);
        }
    }

    #[test]
    fn iban_takes_priority_over_embedded_cui_prefix() {
        let found = extract_identifiers("cont RO49 AAAA 1B31 0075 9384 0000");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, IdentifierKind::Iban);
        assert!(found[0].is_valid());
    }

    #[test]
    fn keyword_cui_without_prefix_is_found() {
        let found = extract_identifiers("Cod fiscal: 14399840; CIF 12345678");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].text, "14399840");
        assert!(found[0].is_valid());
        assert_eq!(found[1].text, "12345678");
        assert!(!found[1].is_valid());
        assert_eq!(
            found[1].validation.issues()[0].kind,
            crate::domain::IssueKind::Checksum
        );
    }

    #[test]
    fn bare_numbers_are_not_cui_candidates() {
        assert!(extract_identifiers("Comanda 12345678 din 2023, 40 tone grau").is_empty());
    }

    #[test]
    fn onrc_with_spaces_is_normalized() {
        let found = extract_identifiers_with(&pinned(), "Nr. ONRC: j 8 / 42 / 2001");
        assert_eq!(found.len(), 1);
        match &found[0].validation {
            IdentifierValidation::Onrc(onrc) => {
                assert!(onrc.is_valid);
                assert_eq!(onrc.normalized.as_deref(), Some("J08/42/2001"));
            }
            other => panic!("unexpected validation: {other:?}"),
        }
    }

    #[test]
    fn invalid_cnp_candidates_are_kept() {
        let found = extract_identifiers("CNP 1800101221145");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, IdentifierKind::Cnp);
        assert!(!found[0].is_valid());
    }

    #[test]
    fn extracted_identifier_serializes() {
        let found = extract_identifiers("RO18547290");
        let json = serde_json::to_value(&found[0]).unwrap();
        assert_eq!(json["kind"], "CUI");
        assert_eq!(json["start"], 0);
        assert_eq!(json["end"], 10);
        assert_eq!(json["validation"]["kind"], "CUI");
        assert_eq!(json["validation"]["isValid"], true);
    }
}
