use std::fmt::Display;

/// Every settable field of the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ServiceTag,
    Version,
    CharacterSet,
    Identification,
    Bic,
    Name,
    Iban,
    Currency,
    Amount,
    Purpose,
    RemittanceReference,
    RemittanceText,
    Information,
}

impl Field {
    pub fn description(self) -> &'static str {
        match self {
            Field::ServiceTag => "service tag",
            Field::Version => "version",
            Field::CharacterSet => "character set",
            Field::Identification => "identification code",
            Field::Bic => "BIC of the beneficiary",
            Field::Name => "name of the beneficiary",
            Field::Iban => "account number of the beneficiary",
            Field::Currency => "currency",
            Field::Amount => "amount",
            Field::Purpose => "purpose code",
            Field::RemittanceReference => "structured remittance information",
            Field::RemittanceText => "unstructured remittance information",
            Field::Information => "beneficiary to originator information",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// A setter was handed a value that violates its field's constraint.
/// The payload is left untouched when this is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid service tag: {0}. Should be BCD.")]
    ServiceTag(String),
    #[error("Invalid version: {0}. Should be either 1 or 2.")]
    Version(u8),
    #[error("Invalid character set: {0}. Should be between 1 and 8.")]
    CharacterSet(u8),
    #[error("Invalid identification code: {0}. Should be SCT.")]
    Identification(String),
    #[error("Invalid BIC of the beneficiary: {0}. Should be either 8 or 11 characters.")]
    BicLength(String),
    #[error("Invalid currency: {0}. Should be a valid 3 character ISO 4217 code.")]
    Currency(String),
    #[error("Invalid {field}: {value}. Should be maximum {max} characters.")]
    TooLong {
        field: Field,
        value: String,
        max: usize,
    },
    #[error("Invalid {field}: {value}. Should be {expected} characters.")]
    WrongLength {
        field: Field,
        value: String,
        expected: usize,
    },
    #[error("Invalid amount: {0}. Should be minimum 0.01.")]
    AmountTooLow(f64),
    #[error("Invalid amount: {0}. Should be maximum 999999999.99.")]
    AmountTooHigh(f64),
    #[error("Invalid amount: {0}. Should be a finite number.")]
    AmountNotFinite(f64),
    #[error("Invalid remittance information. Use either structured or unstructured remittance information, not both.")]
    RemittanceConflict(Field),
}

impl ValidationError {
    /// The field whose setter produced this error.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::ServiceTag(_) => Field::ServiceTag,
            ValidationError::Version(_) => Field::Version,
            ValidationError::CharacterSet(_) => Field::CharacterSet,
            ValidationError::Identification(_) => Field::Identification,
            ValidationError::BicLength(_) => Field::Bic,
            ValidationError::Currency(_) => Field::Currency,
            ValidationError::TooLong { field, .. } => *field,
            ValidationError::WrongLength { field, .. } => *field,
            ValidationError::AmountTooLow(_)
            | ValidationError::AmountTooHigh(_)
            | ValidationError::AmountNotFinite(_) => Field::Amount,
            ValidationError::RemittanceConflict(field) => *field,
        }
    }
}

/// The payload cannot be encoded because a required field is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CompositionError {
    #[error("BIC of the beneficiary is required for version 1.")]
    MissingBic,
    #[error("Name of the beneficiary is required.")]
    MissingName,
    #[error("Account number of the beneficiary is required.")]
    MissingIban,
}

impl CompositionError {
    pub fn field(&self) -> Field {
        match self {
            CompositionError::MissingBic => Field::Bic,
            CompositionError::MissingName => Field::Name,
            CompositionError::MissingIban => Field::Iban,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Composition(#[from] CompositionError),
}
