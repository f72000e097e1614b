use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// EPC QR format version. Version 1 is the legacy variant that requires a BIC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Version {
    V1 = 1,
    #[default]
    V2 = 2,
}

impl Version {
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Zero-padded to three digits, as written in the payload (`002`).
    pub fn padded(self) -> String {
        format!("{:03}", self.number())
    }

    pub fn requires_bic(self) -> bool {
        self == Version::V1
    }
}

impl TryFrom<u8> for Version {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Version::V1),
            2 => Ok(Version::V2),
            other => Err(other),
        }
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.number())
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Version::try_from(value)
            .map_err(|v| serde::de::Error::custom(format!("Invalid EPC version {v}")))
    }
}
