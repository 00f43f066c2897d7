/// ISO 7064 mod 97-10 remainder of an IBAN.
///
/// The first four characters are moved to the end and letters are expanded to
/// `A=10..Z=35`. The expanded number is reduced incrementally, so no big-integer
/// arithmetic is needed. Returns `None` for input shorter than four characters
/// or containing anything other than ASCII digits and uppercase letters.
pub fn iban_remainder(iban: &str) -> Option<u32> {
    if iban.len() < 4 || !iban.is_ascii() {
        return None;
    }
    let (head, tail) = iban.split_at(4);

    tail.bytes()
        .chain(head.bytes())
        .try_fold(0u32, |acc, b| match b {
            b'0'..=b'9' => Some((acc * 10 + u32::from(b - b'0')) % 97),
            b'A'..=b'Z' => Some((acc * 100 + u32::from(b - b'A') + 10) % 97),
            _ => None,
        })
}

/// Whether the IBAN's mod 97-10 remainder equals 1.
pub fn is_valid_iban_checksum(iban: &str) -> bool {
    iban_remainder(iban) == Some(1)
}
