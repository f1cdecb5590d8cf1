use lazy_static::lazy_static;
use regex::Regex;

/// Number of characters in the identifier body, before the check digits.
pub const CNPJ_BASE_LENGTH: usize = 12;
/// Number of characters in a normalized identifier (base + 2 check digits).
pub const CNPJ_LENGTH: usize = CNPJ_BASE_LENGTH + 2;

lazy_static! {
    // `[0-9]` rather than `\d`, which would also accept non-ASCII digits
    static ref BASE_FORMAT: Regex = Regex::new(r"^[A-Z0-9]{12}$").unwrap();
    static ref CHECK_DIGITS_FORMAT: Regex = Regex::new(r"^[0-9]{2}$").unwrap();
    static ref TRAILING_ZEROS: Regex = Regex::new(r"0+$").unwrap();
}

/// Returns true if `base` is exactly 12 uppercase ASCII letters or digits and does not
/// end in `0`.
///
/// The zero filter only looks at the end of the string: `"000000000001"` and
/// `"111111111111"` both pass it, `"123456789010"` does not.
pub fn is_base_valid(base: &str) -> bool {
    BASE_FORMAT.is_match(base) && !TRAILING_ZEROS.is_match(base)
}

/// Returns true if `full` has the shape of a normalized identifier: a 12 character base
/// followed by 2 ASCII digits, with the whole string not ending in `0`.
///
/// The check digits are not verified here.
pub fn is_full_valid(full: &str) -> bool {
    if full.len() != CNPJ_LENGTH {
        return false;
    }
    // 14 bytes of multi-byte characters can't be split at the base boundary
    let (Some(base), Some(check_digits)) =
        (full.get(..CNPJ_BASE_LENGTH), full.get(CNPJ_BASE_LENGTH..))
    else {
        return false;
    };
    BASE_FORMAT.is_match(base)
        && CHECK_DIGITS_FORMAT.is_match(check_digits)
        && !TRAILING_ZEROS.is_match(full)
}
