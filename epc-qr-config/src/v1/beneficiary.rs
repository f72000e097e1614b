use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct BeneficiaryConfig {
    pub name: String,
    pub iban: String,
    /// Only needed for version 1 payloads.
    #[serde(default)]
    pub bic: String,
}
