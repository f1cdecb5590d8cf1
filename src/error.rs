use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum CheckDigitError {
    /// The base is not 12 uppercase ASCII letters or digits, or it ends in `0`
    #[error("CNPJ base {0:?} is not valid for check digit calculation")]
    InvalidBase(String),
}
