use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

/// Names a validator, so it can be picked from configuration, e.g.
/// `{"type": "BrazilianCnpjChecksum"}`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, AsRefStr, EnumIter)]
#[serde(tag = "type")]
pub enum SecondaryValidator {
    BrazilianCnpjChecksum,
    BrazilianCnpjBaseFormat,
}
