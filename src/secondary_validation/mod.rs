mod brazilian_cnpj_base_format;
mod brazilian_cnpj_checksum;

pub use crate::secondary_validation::brazilian_cnpj_base_format::BrazilianCnpjBaseFormat;
pub use crate::secondary_validation::brazilian_cnpj_checksum::{is_valid, BrazilianCnpjChecksum};

use crate::config::SecondaryValidator;

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, regex_match: &str) -> bool;
}

impl Validator for SecondaryValidator {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        match self {
            SecondaryValidator::BrazilianCnpjChecksum => {
                BrazilianCnpjChecksum.is_valid_match(regex_match)
            }
            SecondaryValidator::BrazilianCnpjBaseFormat => {
                BrazilianCnpjBaseFormat.is_valid_match(regex_match)
            }
        }
    }
}
