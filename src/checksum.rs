use crate::error::CheckDigitError;
use crate::structure::is_base_valid;

/// Modulo 11 weights. The last character summed always gets the last weight (2), so the
/// 12 character base uses the table from its second entry and the base plus the first
/// check digit uses all 13.
pub const CHECK_DIGIT_WEIGHTS: &[u32] = &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Computes the check digits of a 12 character base, e.g. `"123456780001"` -> `"95"`.
pub fn compute_check_digits(base: &str) -> Result<String, CheckDigitError> {
    if !is_base_valid(base) {
        return Err(CheckDigitError::InvalidBase(base.to_string()));
    }

    let first = compute_digit(base.as_bytes());

    let mut extended = Vec::with_capacity(base.len() + 1);
    extended.extend_from_slice(base.as_bytes());
    extended.push(digit_to_byte(first));
    let second = compute_digit(&extended);

    Ok([digit_to_byte(first), digit_to_byte(second)]
        .iter()
        .map(|&b| b as char)
        .collect())
}

// Characters are valued by their offset from '0', so letters count as 17 ('A') to 42 ('Z').
// Callers only pass ASCII of at most 13 characters.
fn compute_digit(chars: &[u8]) -> u32 {
    let sum: u32 = chars
        .iter()
        .rev()
        .zip(CHECK_DIGIT_WEIGHTS.iter().rev())
        .map(|(&c, weight)| u32::from(c - b'0') * weight)
        .sum();

    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

#[inline]
fn digit_to_byte(digit: u32) -> u8 {
    b'0' + digit as u8
}
