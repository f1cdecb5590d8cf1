use crate::normalization::normalize;
use crate::secondary_validation::Validator;
use crate::structure::is_base_valid;

/// Shape check of a CNPJ base, the 12 characters before the check digits.
/// Mask punctuation is ignored. No checksum is involved.
pub struct BrazilianCnpjBaseFormat;

impl Validator for BrazilianCnpjBaseFormat {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        is_base_valid(&normalize(regex_match))
    }
}
