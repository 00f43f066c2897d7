/// CUI weights, aligned to the rightmost digits before the check digit.
pub const CUI_WEIGHTS: [u32; 9] = [7, 5, 3, 2, 1, 7, 5, 3, 2];

/// CNP weights for the first 12 digits.
pub const CNP_WEIGHTS: [u32; 12] = [2, 7, 9, 1, 4, 6, 3, 5, 8, 2, 7, 9];

fn right_aligned_sum(digits: &[u8], weights: &[u32]) -> Option<u32> {
    let offset = weights.len().checked_sub(digits.len())?;
    Some(
        digits
            .iter()
            .zip(&weights[offset..])
            .map(|(&d, &w)| u32::from(d) * w)
            .sum(),
    )
}

/// Expected CUI check digit for the digits preceding it.
///
/// Uses the rule applied by the Romanian fiscal authority (ANAF): the weighted sum is
/// multiplied by 10 and reduced mod 11, and a remainder of 10 maps to 0. A plain mod 11
/// of the sum rejects real CUIs such as `18547290`.
/// Returns `None` when `body` is empty or longer than the weight table.
pub fn cui_check_digit(body: &[u8]) -> Option<u8> {
    if body.is_empty() {
        return None;
    }
    let remainder = right_aligned_sum(body, &CUI_WEIGHTS)? * 10 % 11;
    Some(if remainder == 10 { 0 } else { remainder as u8 })
}

/// Expected CNP check digit for the first 12 digits.
///
/// A remainder of 10 maps to 1. Returns `None` unless `body` has exactly 12 digits.
pub fn cnp_check_digit(body: &[u8]) -> Option<u8> {
    if body.len() != CNP_WEIGHTS.len() {
        return None;
    }
    let remainder = right_aligned_sum(body, &CNP_WEIGHTS)? % 11;
    Some(if remainder == 10 { 1 } else { remainder as u8 })
}
