//! Prints the EPC QR payload for a SEPA credit transfer.
//!
//! The beneficiary and payment defaults come from the config file; every
//! value can be overridden on the command line.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use epc_qr_config::Config;
use epc_qr_payload::SepaPayload;
use epc_qr_types::{CharacterSet, Version};

/// Prints the EPC QR payload for a SEPA credit transfer.
#[derive(Parser, Debug)]
#[command(name = "epc-qr", version, about)]
struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Name of the beneficiary.
    #[arg(long)]
    name: Option<String>,
    /// Account number of the beneficiary.
    #[arg(long)]
    iban: Option<String>,
    /// BIC of the beneficiary bank, required for version 1.
    #[arg(long)]
    bic: Option<String>,
    /// Amount to transfer, e.g. 12.50.
    #[arg(long)]
    amount: Option<f64>,
    /// ISO 4217 currency code.
    #[arg(long)]
    currency: Option<String>,
    /// Four letter purpose code.
    #[arg(long)]
    purpose: Option<String>,
    /// Structured creditor reference.
    #[arg(long, conflicts_with = "text")]
    reference: Option<String>,
    /// Unstructured remittance text.
    #[arg(long)]
    text: Option<String>,
    /// Beneficiary to originator information.
    #[arg(long)]
    information: Option<String>,
    /// EPC QR format version (1 or 2).
    #[arg(long, value_parser = parse_version)]
    epc_version: Option<Version>,
    /// Character set code (1 = UTF-8 .. 8 = ISO-8859-15).
    #[arg(long, value_parser = parse_character_set)]
    character_set: Option<CharacterSet>,

    /// Store the effective beneficiary and payment settings in the config file.
    #[arg(long)]
    write_config: bool,
    /// List problems with the effective config and exit.
    #[arg(long)]
    check_config: bool,
}

fn parse_version(s: &str) -> Result<Version, String> {
    let n: u8 = s.parse().map_err(|_| format!("{s} is not a number"))?;
    Version::try_from(n).map_err(|v| format!("Invalid version: {v}. Should be either 1 or 2."))
}

fn parse_character_set(s: &str) -> Result<CharacterSet, String> {
    let n: u8 = s.parse().map_err(|_| format!("{s} is not a number"))?;
    CharacterSet::try_from(n)
        .map_err(|c| format!("Invalid character set: {c}. Should be between 1 and 8."))
}

impl Cli {
    /// Overlays the command line settings onto the loaded config.
    fn apply_to(&self, cfg: &mut Config) {
        let beneficiary = cfg.beneficiary_mut();
        if let Some(name) = &self.name {
            beneficiary.name = name.clone();
        }
        if let Some(iban) = &self.iban {
            beneficiary.iban = iban.clone();
        }
        if let Some(bic) = &self.bic {
            beneficiary.bic = bic.clone();
        }
        let payment = cfg.payment_mut();
        if let Some(currency) = &self.currency {
            payment.currency = currency.clone();
        }
        if let Some(version) = self.epc_version {
            payment.epc_version = version;
        }
        if let Some(character_set) = self.character_set {
            payment.character_set = character_set;
        }
        if let Some(purpose) = &self.purpose {
            payment.purpose = Some(purpose.clone());
        }
        if let Some(information) = &self.information {
            payment.information = Some(information.clone());
        }
    }

    fn build_payload(&self, cfg: &Config) -> anyhow::Result<SepaPayload> {
        let mut payload = SepaPayload::from_config(cfg)?;
        if let Some(amount) = self.amount {
            payload.set_amount(amount)?;
        }
        if let Some(reference) = &self.reference {
            payload.set_remittance_reference(reference)?;
        }
        if let Some(text) = &self.text {
            payload.set_remittance_text(text)?;
        }
        Ok(payload)
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        let cfg = match &self.config {
            Some(path) => Config::load_from_path(path)
                .with_context(|| format!("could not load config from {}", path.display()))?,
            None => Config::load_from_file().context("could not load config")?,
        };
        Ok(cfg)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut cfg = cli.load_config()?;
    cli.apply_to(&mut cfg);

    if cli.check_config {
        let errors = cfg.config_errors();
        if errors.is_empty() {
            println!("Config is fine");
            return Ok(());
        }
        for error in &errors {
            println!("{error}");
        }
        anyhow::bail!("config has {} problem(s)", errors.len());
    }

    if cli.write_config {
        match &cli.config {
            Some(path) => {
                cfg.save_to_path(path)
                    .with_context(|| format!("could not write config to {}", path.display()))?;
                tracing::info!(path = %path.display(), "wrote config");
            }
            None => {
                let path = cfg.save_to_file().context("could not write config")?;
                tracing::info!(path = %path.display(), "wrote config");
            }
        }
    }

    let payload = cli.build_payload(&cfg)?;
    let encoded = payload.encode()?;
    println!("{encoded}");
    Ok(())
}
