//! Builder and encoder for EPC QR code (SEPA Credit Transfer) payloads.
//!
//! ```
//! use epc_qr_payload::SepaPayload;
//!
//! let mut payload = SepaPayload::new();
//! payload
//!     .set_name("Test")?
//!     .set_iban("ABC")?
//!     .set_amount(1075.25)?
//!     .set_remittance_text("DEF")?;
//!
//! assert_eq!(
//!     payload.encode()?,
//!     "BCD\n002\n1\nSCT\n\nTest\nABC\nEUR1075.25\n\n\nDEF"
//! );
//! # Ok::<(), epc_qr_payload::Error>(())
//! ```

mod error;
mod payload;

pub use epc_qr_types::{Amount, CharacterSet, Version};
pub use error::{CompositionError, Error, Field, ValidationError};
pub use payload::{
    format_money, Remittance, SepaPayload, DEFAULT_CURRENCY, IDENTIFICATION, SERVICE_TAG,
};
