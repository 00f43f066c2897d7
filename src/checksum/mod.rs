//! Checksum kernels: the arithmetic behind each identifier's check digits.
//!
//! Nothing here normalizes input; callers pass already-normalized values.

mod mod11;
mod mod97;

pub use mod11::{cnp_check_digit, cui_check_digit};
pub use mod97::is_valid_iban_checksum;

/// Convert an all-ASCII-digit string into its digit values.
///
/// Returns `None` if any character is not `0..=9` (this includes non-ASCII digits).
pub fn ascii_digits(value: &str) -> Option<Vec<u8>> {
    value
        .bytes()
        .map(|b| b.is_ascii_digit().then(|| b - b'0'))
        .collect()
}
