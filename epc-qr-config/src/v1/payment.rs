use epc_qr_types::{Amount, CharacterSet, Version};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PaymentConfig {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub character_set: CharacterSet,
    #[serde(default)]
    pub epc_version: Version,
    /// Fixed amount to request, e.g. a membership fee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub information: Option<String>,
}

pub fn default_currency() -> String {
    "EUR".to_string()
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            character_set: CharacterSet::default(),
            epc_version: Version::default(),
            amount: None,
            purpose: None,
            information: None,
        }
    }
}
