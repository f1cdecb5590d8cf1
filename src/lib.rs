// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checksum;
mod config;
mod error;
#[cfg(feature = "validator")]
mod field_validation;
mod normalization;
mod observability;
mod secondary_validation;
mod stats;
mod structure;

// This is the public API of the CNPJ checksum library
pub use checksum::{compute_check_digits, CHECK_DIGIT_WEIGHTS};
pub use config::SecondaryValidator;
pub use error::CheckDigitError;
pub use normalization::{normalize, FORMATTING_CHARACTERS};
pub use secondary_validation::{is_valid, BrazilianCnpjBaseFormat, BrazilianCnpjChecksum, Validator};
pub use structure::{is_base_valid, is_full_valid, CNPJ_BASE_LENGTH, CNPJ_LENGTH};

#[cfg(feature = "validator")]
pub use field_validation::{validate_cnpj, CNPJ_VALIDATION_CODE};
