//! Adapter for the [`validator`] crate.
//!
//! ```ignore
//! #[derive(Validate)]
//! struct Company {
//!     #[validate(custom(function = "cnpj_checksum::validate_cnpj"))]
//!     cnpj: String,
//! }
//! ```

use std::borrow::Cow;

use validator::ValidationError;

use crate::secondary_validation::is_valid;

/// Error code reported for a field that is not a valid CNPJ.
pub const CNPJ_VALIDATION_CODE: &str = "cnpj";

pub fn validate_cnpj(value: &str) -> Result<(), ValidationError> {
    if is_valid(value) {
        Ok(())
    } else {
        Err(ValidationError::new(CNPJ_VALIDATION_CODE)
            .with_message(Cow::Borrowed("invalid CNPJ")))
    }
}
