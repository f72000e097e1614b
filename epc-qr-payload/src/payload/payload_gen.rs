use crate::error::CompositionError;

use super::{format_money, Remittance, SepaPayload, DEFAULT_CURRENCY};

/// Every field of the record in its final textual form, in payload order.
pub(super) struct PayloadString {
    service_tag: String,
    version: String,
    character_set: String,
    identification: String,
    bic: String,
    name: String,
    iban: String,
    money: String,
    purpose: String,
    remittance_reference: String,
    remittance_text: String,
    information: String,
}

impl PayloadString {
    fn lines(&self) -> [&str; 12] {
        [
            self.service_tag.as_str(),
            self.version.as_str(),
            self.character_set.as_str(),
            self.identification.as_str(),
            self.bic.as_str(),
            self.name.as_str(),
            self.iban.as_str(),
            self.money.as_str(),
            self.purpose.as_str(),
            self.remittance_reference.as_str(),
            self.remittance_text.as_str(),
            self.information.as_str(),
        ]
    }

    /// Newline-joined record; trailing empty fields leave no separators behind.
    pub(super) fn to_payload(&self) -> String {
        self.lines().join("\n").trim_end_matches('\n').to_string()
    }
}

impl TryFrom<&SepaPayload> for PayloadString {
    type Error = CompositionError;

    fn try_from(value: &SepaPayload) -> Result<Self, Self::Error> {
        let bic = value.bic.clone().unwrap_or_default();
        let name = value.name.clone().unwrap_or_default();
        let iban = value.iban.clone().unwrap_or_default();

        if value.version.requires_bic() && bic.is_empty() {
            return Err(CompositionError::MissingBic);
        }
        if name.is_empty() {
            return Err(CompositionError::MissingName);
        }
        if iban.is_empty() {
            return Err(CompositionError::MissingIban);
        }

        let (remittance_reference, remittance_text) = match &value.remittance {
            Remittance::None => (String::new(), String::new()),
            Remittance::Reference(r) => (r.clone(), String::new()),
            Remittance::Text(t) => (String::new(), t.clone()),
        };

        Ok(Self {
            service_tag: value.service_tag.clone(),
            version: value.version.padded(),
            character_set: value.character_set.code().to_string(),
            identification: value.identification.clone(),
            bic,
            name,
            iban,
            money: format_money(
                value.currency.as_deref().unwrap_or(DEFAULT_CURRENCY),
                value.amount.unwrap_or_default(),
            ),
            purpose: value.purpose.clone().unwrap_or_default(),
            remittance_reference,
            remittance_text,
            information: value.information.clone().unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{CompositionError, SepaPayload};

    fn minimal() -> SepaPayload {
        let mut payload = SepaPayload::new();
        payload.set_name("Test").unwrap().set_iban("ABC").unwrap();
        payload
    }

    #[test]
    fn encode_message() {
        let mut payload = SepaPayload::new();
        payload
            .set_name("Test")
            .unwrap()
            .set_iban("ABC")
            .unwrap()
            .set_amount(1075.25)
            .unwrap()
            .set_remittance_text("DEF")
            .unwrap();

        let message = payload.encode().unwrap();

        assert!(message.contains("EUR1075.25"));
        assert_eq!(message.split('\n').count(), 11);
        assert!(message.ends_with("DEF"));
        assert_eq!(
            message,
            "BCD\n002\n1\nSCT\n\nTest\nABC\nEUR1075.25\n\n\nDEF"
        );
    }

    #[test]
    fn all_twelve_fields() {
        let mut payload = SepaPayload::new();
        payload
            .set_version(1)
            .unwrap()
            .set_character_set(2)
            .unwrap()
            .set_bic("ABCDEFGHIJK")
            .unwrap()
            .set_name("Test")
            .unwrap()
            .set_iban("ABC")
            .unwrap()
            .set_currency("usd")
            .unwrap()
            .set_amount(100.0)
            .unwrap()
            .set_purpose("ACMT")
            .unwrap()
            .set_remittance_reference("RF18539007547034")
            .unwrap()
            .set_information("Thanks")
            .unwrap();

        assert_eq!(
            payload.encode().unwrap(),
            "BCD\n001\n2\nSCT\nABCDEFGHIJK\nTest\nABC\nUSD100.00\nACMT\nRF18539007547034\n\nThanks"
        );
    }

    #[test]
    fn trailing_empty_fields_are_trimmed() {
        let message = minimal().encode().unwrap();
        assert_eq!(message, "BCD\n002\n1\nSCT\n\nTest\nABC\nEUR");
        assert!(!message.ends_with('\n'));
    }

    #[test]
    fn unset_amount_keeps_currency() {
        let mut payload = minimal();
        payload.set_purpose("ACMT").unwrap();
        let message = payload.encode().unwrap();
        assert_eq!(message.lines().nth(7), Some("EUR"));
        assert!(message.ends_with("EUR\nACMT"));
    }

    #[test]
    fn missing_name() {
        let payload = SepaPayload::new();
        let err = payload.encode().unwrap_err();
        assert_eq!(err, CompositionError::MissingName);
        assert_eq!(err.to_string(), "Name of the beneficiary is required.");
    }

    #[test]
    fn missing_iban() {
        let mut payload = SepaPayload::new();
        payload.set_name("ABC").unwrap();
        let err = payload.encode().unwrap_err();
        assert_eq!(err, CompositionError::MissingIban);
        assert_eq!(err.to_string(), "Account number of the beneficiary is required.");
    }

    #[test]
    fn version_one_requires_bic() {
        let mut payload = SepaPayload::new();
        payload
            .set_version(1)
            .unwrap()
            .set_name("ABC")
            .unwrap()
            .set_iban("DEF")
            .unwrap();
        assert_eq!(payload.encode(), Err(CompositionError::MissingBic));

        payload.set_bic("ABCDEFGH").unwrap();
        assert!(payload.encode().unwrap().starts_with("BCD\n001\n1\nSCT\nABCDEFGH\nABC"));
    }

    #[test]
    fn bic_is_checked_before_name() {
        let mut payload = SepaPayload::new();
        payload.set_version(1).unwrap();
        assert_eq!(payload.encode(), Err(CompositionError::MissingBic));
    }

    #[test]
    fn empty_name_counts_as_missing() {
        let mut payload = SepaPayload::new();
        payload.set_name("").unwrap().set_iban("ABC").unwrap();
        assert_eq!(payload.encode(), Err(CompositionError::MissingName));
    }

    #[test]
    fn builder_can_change_after_encoding() {
        let mut payload = minimal();
        let first = payload.encode().unwrap();
        payload.set_information("later").unwrap();
        let second = payload.encode().unwrap();
        assert_ne!(first, second);
        assert!(second.ends_with("\n\n\n\nlater"));
    }

    fn optional(pattern: &'static str) -> impl Strategy<Value = Option<String>> {
        proptest::option::of(pattern)
    }

    prop_compose! {
        fn any_payload()(
            bic in optional("[A-Z]{8}|[A-Z]{11}"),
            name in "[A-Za-z ]{1,70}",
            iban in "[A-Z0-9]{1,34}",
            amount in proptest::option::of(0.01f64..=999_999_999.99),
            purpose in optional("[A-Z]{4}"),
            reference in optional("[A-Z0-9]{0,35}"),
            information in optional("[a-z ]{0,70}"),
        ) -> SepaPayload {
            let mut payload = SepaPayload::new();
            payload.set_name(name).unwrap().set_iban(iban).unwrap();
            if let Some(bic) = bic {
                payload.set_bic(bic).unwrap();
            }
            if let Some(amount) = amount {
                payload.set_amount(amount).unwrap();
            }
            if let Some(purpose) = purpose {
                payload.set_purpose(purpose).unwrap();
            }
            if let Some(reference) = reference {
                payload.set_remittance_reference(reference).unwrap();
            }
            if let Some(information) = information {
                payload.set_information(information).unwrap();
            }
            payload
        }
    }

    proptest! {
        /// Encoding twice yields identical bytes and leaves the builder as it was.
        #[test]
        fn encode_is_repeatable(payload in any_payload()) {
            let before = payload.clone();
            let a = payload.encode().unwrap();
            let b = payload.encode().unwrap();
            prop_assert_eq!(a, b);
            prop_assert_eq!(before, payload);
        }

        /// At most 12 lines and never a trailing separator.
        #[test]
        fn no_trailing_separators(payload in any_payload()) {
            let message = payload.encode().unwrap();
            prop_assert!(!message.ends_with('\n'));
            prop_assert!(message.split('\n').count() <= 12);
            prop_assert!(message.split('\n').count() >= 8);
        }

        /// BIC is accepted iff its length is 8 or 11.
        #[test]
        fn bic_length_rule(bic in "[A-Z0-9]{0,20}") {
            let mut payload = SepaPayload::new();
            let accepted = payload.set_bic(&bic).is_ok();
            prop_assert_eq!(accepted, bic.len() == 8 || bic.len() == 11);
        }

        /// Amount is accepted iff it lies in 0.01..=999999999.99.
        #[test]
        fn amount_range_rule(amount in -10.0f64..2_000_000_000.0) {
            let mut payload = SepaPayload::new();
            let accepted = payload.set_amount(amount).is_ok();
            prop_assert_eq!(accepted, (0.01..=999_999_999.99).contains(&amount));
        }

        /// Money is rendered with a dot and exactly two decimals.
        #[test]
        fn money_has_two_decimals(amount in 0.01f64..=999_999_999.99) {
            let mut payload = minimal();
            payload.set_amount(amount).unwrap();
            let message = payload.encode().unwrap();
            let money = message.lines().nth(7).unwrap();
            let (whole, cents) = money.trim_start_matches("EUR").split_once('.').unwrap();
            prop_assert!(whole.chars().all(|c| c.is_ascii_digit()));
            prop_assert_eq!(cents.len(), 2);
        }
    }
}
