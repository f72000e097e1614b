use epc_qr_types::{Amount, CharacterSet, Version};

use crate::error::{CompositionError, Field, ValidationError};

use self::payload_gen::PayloadString;

mod payload_gen;

pub const SERVICE_TAG: &str = "BCD";
pub const IDENTIFICATION: &str = "SCT";
pub const DEFAULT_CURRENCY: &str = "EUR";

const NAME_MAX: usize = 70;
const IBAN_MAX: usize = 34;
const REFERENCE_MAX: usize = 35;
const TEXT_MAX: usize = 140;
const INFORMATION_MAX: usize = 70;
const CURRENCY_LEN: usize = 3;
const PURPOSE_LEN: usize = 4;

/// Remittance information is either structured or unstructured, never both.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Remittance {
    #[default]
    None,
    /// Structured creditor reference.
    Reference(String),
    /// Free-form text.
    Text(String),
}

impl Remittance {
    pub fn reference(&self) -> Option<&str> {
        match self {
            Remittance::Reference(r) => Some(r),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Remittance::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Builder for an EPC QR (SEPA Credit Transfer) payload.
///
/// Each setter checks its value before storing it and hands back the same
/// builder, so calls chain with `?`. On error nothing is stored.
/// Required fields are only checked by [`SepaPayload::encode`].
#[derive(Debug, Clone, PartialEq)]
pub struct SepaPayload {
    service_tag: String,
    version: Version,
    character_set: CharacterSet,
    identification: String,
    bic: Option<String>,
    name: Option<String>,
    iban: Option<String>,
    currency: Option<String>,
    amount: Option<Amount>,
    purpose: Option<String>,
    remittance: Remittance,
    information: Option<String>,
}

impl Default for SepaPayload {
    fn default() -> Self {
        Self {
            service_tag: SERVICE_TAG.to_string(),
            version: Version::default(),
            character_set: CharacterSet::default(),
            identification: IDENTIFICATION.to_string(),
            bic: None,
            name: None,
            iban: None,
            currency: None,
            amount: None,
            purpose: None,
            remittance: Remittance::None,
            information: None,
        }
    }
}

impl SepaPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fills the beneficiary and payment defaults from the config.
    /// Empty beneficiary fields are left unset.
    pub fn from_config(cfg: &epc_qr_config::Config) -> Result<Self, ValidationError> {
        let mut payload = Self::new();
        let beneficiary = cfg.beneficiary();
        let payment = cfg.payment();
        payload
            .set_version(payment.epc_version.number())?
            .set_character_set(payment.character_set.code())?
            .set_currency(&payment.currency)?;
        if !beneficiary.name.is_empty() {
            payload.set_name(&beneficiary.name)?;
        }
        if !beneficiary.iban.is_empty() {
            payload.set_iban(&beneficiary.iban)?;
        }
        if !beneficiary.bic.is_empty() {
            payload.set_bic(&beneficiary.bic)?;
        }
        if let Some(amount) = payment.amount {
            payload.set_amount(amount.as_f64())?;
        }
        if let Some(purpose) = &payment.purpose {
            payload.set_purpose(purpose)?;
        }
        if let Some(information) = &payment.information {
            payload.set_information(information)?;
        }
        Ok(payload)
    }

    pub fn set_service_tag(&mut self, service_tag: &str) -> Result<&mut Self, ValidationError> {
        if service_tag != SERVICE_TAG {
            return Err(rejected(ValidationError::ServiceTag(service_tag.to_string())));
        }
        self.service_tag = service_tag.to_string();
        Ok(self)
    }

    pub fn set_version(&mut self, version: u8) -> Result<&mut Self, ValidationError> {
        self.version =
            Version::try_from(version).map_err(|v| rejected(ValidationError::Version(v)))?;
        Ok(self)
    }

    /// Accepts the raw code 1..=8, see [`CharacterSet`] for the named sets.
    pub fn set_character_set(&mut self, character_set: u8) -> Result<&mut Self, ValidationError> {
        self.character_set = CharacterSet::try_from(character_set)
            .map_err(|c| rejected(ValidationError::CharacterSet(c)))?;
        Ok(self)
    }

    pub fn set_identification(
        &mut self,
        identification: &str,
    ) -> Result<&mut Self, ValidationError> {
        if identification != IDENTIFICATION {
            return Err(rejected(ValidationError::Identification(
                identification.to_string(),
            )));
        }
        self.identification = identification.to_string();
        Ok(self)
    }

    /// Exactly 8 or 11 characters. The BIC is not checked against any registry.
    pub fn set_bic(&mut self, bic: impl ToString) -> Result<&mut Self, ValidationError> {
        let bic = bic.to_string();
        if bic.len() != 8 && bic.len() != 11 {
            return Err(rejected(ValidationError::BicLength(bic)));
        }
        self.bic = Some(bic);
        Ok(self)
    }

    pub fn set_name(&mut self, name: impl ToString) -> Result<&mut Self, ValidationError> {
        self.name = Some(max_len(Field::Name, name.to_string(), NAME_MAX)?);
        Ok(self)
    }

    /// Only the length is checked, not the IBAN checksum.
    pub fn set_iban(&mut self, iban: impl ToString) -> Result<&mut Self, ValidationError> {
        self.iban = Some(max_len(Field::Iban, iban.to_string(), IBAN_MAX)?);
        Ok(self)
    }

    pub fn set_currency(&mut self, currency: impl ToString) -> Result<&mut Self, ValidationError> {
        let currency = currency.to_string();
        if currency.len() != CURRENCY_LEN {
            return Err(rejected(ValidationError::Currency(currency)));
        }
        self.currency = Some(currency);
        Ok(self)
    }

    /// Accepts `0.01..=999999999.99`; the stored value is rounded to cents.
    pub fn set_amount(&mut self, amount: f64) -> Result<&mut Self, ValidationError> {
        if !amount.is_finite() {
            return Err(rejected(ValidationError::AmountNotFinite(amount)));
        }
        if amount < Amount::MIN.as_f64() {
            return Err(rejected(ValidationError::AmountTooLow(amount)));
        }
        if amount > Amount::MAX.as_f64() {
            return Err(rejected(ValidationError::AmountTooHigh(amount)));
        }
        let amount = Amount::try_from(amount)
            .map_err(|_| rejected(ValidationError::AmountNotFinite(amount)))?;
        self.amount = Some(amount);
        Ok(self)
    }

    pub fn set_purpose(&mut self, purpose: impl ToString) -> Result<&mut Self, ValidationError> {
        self.purpose = Some(exact_len(Field::Purpose, purpose.to_string(), PURPOSE_LEN)?);
        Ok(self)
    }

    /// Structured reference. Anything displayable is accepted and stored as text.
    pub fn set_remittance_reference(
        &mut self,
        reference: impl ToString,
    ) -> Result<&mut Self, ValidationError> {
        let reference = max_len(
            Field::RemittanceReference,
            reference.to_string(),
            REFERENCE_MAX,
        )?;
        if let Remittance::Text(_) = self.remittance {
            return Err(rejected(ValidationError::RemittanceConflict(
                Field::RemittanceReference,
            )));
        }
        self.remittance = Remittance::Reference(reference);
        Ok(self)
    }

    pub fn set_remittance_text(&mut self, text: impl ToString) -> Result<&mut Self, ValidationError> {
        let text = max_len(Field::RemittanceText, text.to_string(), TEXT_MAX)?;
        if let Remittance::Reference(_) = self.remittance {
            return Err(rejected(ValidationError::RemittanceConflict(
                Field::RemittanceText,
            )));
        }
        self.remittance = Remittance::Text(text);
        Ok(self)
    }

    pub fn set_information(
        &mut self,
        information: impl ToString,
    ) -> Result<&mut Self, ValidationError> {
        self.information = Some(max_len(
            Field::Information,
            information.to_string(),
            INFORMATION_MAX,
        )?);
        Ok(self)
    }

    /// Encodes the payload, failing if a required field is missing.
    ///
    /// Encoding does not touch the builder; it can be repeated and the
    /// builder can be changed and encoded again afterwards.
    pub fn encode(&self) -> Result<String, CompositionError> {
        let payload = PayloadString::try_from(self)?.to_payload();
        tracing::debug!(
            lines = payload.lines().count(),
            bytes = payload.len(),
            "encoded EPC QR payload"
        );
        Ok(payload)
    }

    pub fn service_tag(&self) -> &str {
        &self.service_tag
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn character_set(&self) -> CharacterSet {
        self.character_set
    }

    pub fn identification(&self) -> &str {
        &self.identification
    }

    pub fn bic(&self) -> Option<&str> {
        self.bic.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn iban(&self) -> Option<&str> {
        self.iban.as_deref()
    }

    /// The configured currency, or `EUR` when none was set.
    pub fn currency(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }

    pub fn amount(&self) -> Option<Amount> {
        self.amount
    }

    pub fn purpose(&self) -> Option<&str> {
        self.purpose.as_deref()
    }

    pub fn remittance(&self) -> &Remittance {
        &self.remittance
    }

    pub fn information(&self) -> Option<&str> {
        self.information.as_deref()
    }
}

/// Currency code upper-cased, followed by the amount with two decimals.
/// A zero amount means "unset" and leaves only the currency.
pub fn format_money(currency: &str, amount: Amount) -> String {
    if amount > Amount::default() {
        format!("{}{}", currency.to_uppercase(), amount.payload_string())
    } else {
        currency.to_uppercase()
    }
}

fn max_len(field: Field, value: String, max: usize) -> Result<String, ValidationError> {
    if value.len() > max {
        return Err(rejected(ValidationError::TooLong { field, value, max }));
    }
    Ok(value)
}

fn exact_len(field: Field, value: String, expected: usize) -> Result<String, ValidationError> {
    if value.len() != expected {
        return Err(rejected(ValidationError::WrongLength {
            field,
            value,
            expected,
        }));
    }
    Ok(value)
}

fn rejected(err: ValidationError) -> ValidationError {
    tracing::debug!(field = %err.field(), error = %err, "rejected payload field");
    err
}
