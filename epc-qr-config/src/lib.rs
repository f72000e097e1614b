use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use v1::beneficiary::BeneficiaryConfig;
pub use v1::payment::PaymentConfig;

mod v1 {
    /// Beneficiary Config
    pub mod beneficiary;

    /// Payment defaults Config
    pub mod payment;
}

pub const CURRENT_VERSION: usize = 1;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IoError: {0}")]
    IoError(#[from] std::io::Error),
    #[error("ParseError: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("SerializeError: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    version: usize,
    #[serde(default)]
    beneficiary: BeneficiaryConfig,
    #[serde(default)]
    payment: PaymentConfig,
}

impl Config {
    pub fn beneficiary(&self) -> &BeneficiaryConfig {
        &self.beneficiary
    }

    pub fn beneficiary_mut(&mut self) -> &mut BeneficiaryConfig {
        &mut self.beneficiary
    }

    pub fn payment(&self) -> &PaymentConfig {
        &self.payment
    }

    pub fn payment_mut(&mut self) -> &mut PaymentConfig {
        &mut self.payment
    }

    pub fn needs_upgrade(&self) -> bool {
        self.version < CURRENT_VERSION
    }

    /// Version 0 files only lack the version key, so upgrading just stamps it.
    pub fn upgrade_to_latest(mut self) -> Self {
        if self.needs_upgrade() {
            tracing::warn!(
                from = self.version,
                to = CURRENT_VERSION,
                "upgrading configuration file format"
            );
            self.version = CURRENT_VERSION;
        }
        self
    }

    pub fn from_toml(toml: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Loads the config from the default location, or defaults when there is none.
    pub fn load_from_file() -> Result<Self, ConfigError> {
        Self::load_from_path(config_location()?)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Default::default());
        }
        let config = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&config)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config.upgrade_to_latest())
    }

    pub fn save_to_file(&self) -> Result<PathBuf, ConfigError> {
        let path = config_location()?;
        self.save_to_path(&path)?;
        Ok(path)
    }

    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let config_file = std::fs::File::create(path)?;
        let toml = self.to_toml()?;
        let mut buf = BufWriter::new(config_file);
        buf.write_all(toml.as_bytes())?;
        buf.flush()?;
        Ok(())
    }

    /// get a list of all things potentially wrong with the config
    pub fn config_errors(&self) -> Vec<&str> {
        let mut errors = Vec::new();
        if self.beneficiary().name.is_empty() {
            errors.push("Beneficiary name is empty");
        }
        if self.beneficiary().iban.is_empty() {
            errors.push("Beneficiary IBAN is empty");
        }
        if self.payment().epc_version.requires_bic() && self.beneficiary().bic.is_empty() {
            errors.push("Beneficiary BIC is empty but version 1 requires it");
        }
        let bic = &self.beneficiary().bic;
        if !bic.is_empty() && bic.len() != 8 && bic.len() != 11 {
            errors.push("Beneficiary BIC is not 8 or 11 characters");
        }
        if self.payment().currency.len() != 3 {
            errors.push("Currency is not a 3 character ISO 4217 code");
        }
        if matches!(&self.payment().purpose, Some(purpose) if purpose.len() != 4) {
            errors.push("Purpose code is not 4 characters");
        }
        if self.beneficiary().name.len() > 70 {
            errors.push("Beneficiary name is longer than 70 characters");
        }
        if self.beneficiary().iban.len() > 34 {
            errors.push("Beneficiary IBAN is longer than 34 characters");
        }
        if matches!(&self.payment().information, Some(information) if information.len() > 70) {
            errors.push("Information is longer than 70 characters");
        }
        errors
    }
}

fn config_location() -> Result<PathBuf, ConfigError> {
    if let Some(config_dir) = dirs::config_dir() {
        let dir = config_dir.join("epc-qr");
        std::fs::create_dir_all(&dir)?;
        Ok(dir.join("config.toml"))
    } else {
        Ok(PathBuf::from("epc-qr.toml"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            beneficiary: BeneficiaryConfig::default(),
            payment: PaymentConfig::default(),
        }
    }
}
