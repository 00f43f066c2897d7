//! Static reference data: Romanian counties and bank codes.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
/// A Romanian county (județ) or the Municipality of Bucharest.
///
/// `code` is the numeric code used in CNP digits 8–9 and in ONRC numbers.
pub struct County {
    pub code: u8,
    pub abbreviation: &'static str,
    pub name: &'static str,
}

const fn county(code: u8, abbreviation: &'static str, name: &'static str) -> County {
    County {
        code,
        abbreviation,
        name,
    }
}

/// Numeric code of the Municipality of Bucharest.
pub const BUCHAREST_CODE: u8 = 40;

static COUNTIES: [County; 42] = [
    county(1, "AB", "Alba"),
    county(2, "AR", "Arad"),
    county(3, "AG", "Argeș"),
    county(4, "BC", "Bacău"),
    county(5, "BH", "Bihor"),
    county(6, "BN", "Bistrița-Năsăud"),
    county(7, "BT", "Botoșani"),
    county(8, "BV", "Brașov"),
    county(9, "BR", "Brăila"),
    county(10, "BZ", "Buzău"),
    county(11, "CS", "Caraș-Severin"),
    county(12, "CJ", "Cluj"),
    county(13, "CT", "Constanța"),
    county(14, "CV", "Covasna"),
    county(15, "DB", "Dâmbovița"),
    county(16, "DJ", "Dolj"),
    county(17, "GL", "Galați"),
    county(18, "GJ", "Gorj"),
    county(19, "HR", "Harghita"),
    county(20, "HD", "Hunedoara"),
    county(21, "IL", "Ialomița"),
    county(22, "IS", "Iași"),
    county(23, "IF", "Ilfov"),
    county(24, "MM", "Maramureș"),
    county(25, "MH", "Mehedinți"),
    county(26, "MS", "Mureș"),
    county(27, "NT", "Neamț"),
    county(28, "OT", "Olt"),
    county(29, "PH", "Prahova"),
    county(30, "SM", "Satu Mare"),
    county(31, "SJ", "Sălaj"),
    county(32, "SB", "Sibiu"),
    county(33, "SV", "Suceava"),
    county(34, "TR", "Teleorman"),
    county(35, "TM", "Timiș"),
    county(36, "TL", "Tulcea"),
    county(37, "VS", "Vaslui"),
    county(38, "VL", "Vâlcea"),
    county(39, "VN", "Vrancea"),
    county(BUCHAREST_CODE, "B", "București"),
    county(51, "CL", "Călărași"),
    county(52, "GR", "Giurgiu"),
];

static COUNTIES_BY_ABBREVIATION: Lazy<HashMap<&'static str, &'static County>> =
    Lazy::new(|| COUNTIES.iter().map(|c| (c.abbreviation, c)).collect());

impl County {
    /// All 42 entries, ordered by numeric code.
    pub fn all() -> &'static [County] {
        &COUNTIES
    }

    /// Look up a county by its numeric code (`12` → Cluj).
    pub fn by_code(code: u8) -> Option<&'static County> {
        COUNTIES.iter().find(|c| c.code == code)
    }

    /// Look up a county by its vehicle-plate abbreviation (`"CJ"`), case-insensitive.
    pub fn by_abbreviation(abbreviation: &str) -> Option<&'static County> {
        COUNTIES_BY_ABBREVIATION
            .get(abbreviation.trim().to_ascii_uppercase().as_str())
            .copied()
    }

    /// The Bucharest entry; CNP sector codes resolve to it.
    pub fn bucharest() -> &'static County {
        &COUNTIES[39]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
/// A bank operating in Romania, keyed by the 4-letter code embedded in its IBANs.
pub struct Bank {
    pub code: &'static str,
    pub name: &'static str,
}

const fn bank(code: &'static str, name: &'static str) -> Bank {
    Bank { code, name }
}

static BANKS: [Bank; 22] = [
    bank("BACX", "UniCredit Bank"),
    bank("BRDE", "BRD - Groupe Société Générale"),
    bank("BREL", "Libra Internet Bank"),
    bank("BRMA", "Banca Românească"),
    bank("BTRL", "Banca Transilvania"),
    bank("BUCU", "Alpha Bank România"),
    bank("CARP", "Patria Bank"),
    bank("CECE", "CEC Bank"),
    bank("CITI", "Citibank Europe"),
    bank("EXIM", "Exim Banca Românească"),
    bank("FNNB", "Credit Europe Bank"),
    bank("INGB", "ING Bank"),
    bank("MIND", "ProCredit Bank"),
    bank("NBOR", "Banca Națională a României"),
    bank("OTPV", "OTP Bank România"),
    bank("PIRB", "First Bank"),
    bank("PORL", "Porsche Bank România"),
    bank("RNCB", "Banca Comercială Română"),
    bank("RZBR", "Raiffeisen Bank"),
    bank("TREZ", "Trezoreria Statului"),
    bank("UGBI", "Garanti BBVA"),
    bank("WBAN", "Intesa Sanpaolo Bank"),
];

static BANKS_BY_CODE: Lazy<HashMap<&'static str, &'static Bank>> =
    Lazy::new(|| BANKS.iter().map(|b| (b.code, b)).collect());

impl Bank {
    /// All known bank codes, sorted by code.
    pub fn all() -> &'static [Bank] {
        &BANKS
    }

    /// Look up a bank by the IBAN bank code (characters 5–8), case-insensitive.
    pub fn by_code(code: &str) -> Option<&'static Bank> {
        BANKS_BY_CODE
            .get(code.to_ascii_uppercase().as_str())
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn county_table_has_42_unique_entries() {
        assert_eq!(County::all().len(), 42);

        let codes: HashSet<u8> = County::all().iter().map(|c| c.code).collect();
        assert_eq!(codes.len(), 42);

        let abbreviations: HashSet<&str> =
            County::all().iter().map(|c| c.abbreviation).collect();
        assert_eq!(abbreviations.len(), 42);
    }

    #[test]
    fn county_lookup_by_code_and_abbreviation() {
        assert_eq!(County::by_code(12).map(|c| c.abbreviation), Some("CJ"));
        assert_eq!(County::by_code(23).map(|c| c.name), Some("Ilfov"));
        assert_eq!(County::by_code(52).map(|c| c.name), Some("Giurgiu"));
        assert!(County::by_code(0).is_none());
        assert!(County::by_code(41).is_none());
        assert!(County::by_code(50).is_none());

        assert_eq!(County::by_abbreviation("cj").map(|c| c.code), Some(12));
        assert_eq!(County::by_abbreviation(" B ").map(|c| c.code), Some(40));
        assert!(County::by_abbreviation("XX").is_none());
    }

    #[test]
    fn bucharest_entry_is_code_40() {
        assert_eq!(County::bucharest().code, BUCHAREST_CODE);
        assert_eq!(County::bucharest().abbreviation, "B");
    }

    #[test]
    fn bank_lookup_is_case_insensitive() {
        assert_eq!(
            Bank::by_code("btrl").map(|b| b.name),
            Some("Banca Transilvania")
        );
        assert_eq!(
            Bank::by_code("RNCB").map(|b| b.name),
            Some("Banca Comercială Română")
        );
        assert!(Bank::by_code("AAAA").is_none());
    }

    #[test]
    fn bank_table_is_sorted_and_unique() {
        let codes: Vec<&str> = Bank::all().iter().map(|b| b.code).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(codes, sorted);
        assert!(codes.iter().all(|c| c.len() == 4));
    }
}
