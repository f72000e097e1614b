use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A monetary amount in the transfer currency, kept rounded to whole cents.
#[derive(PartialEq, Eq, Clone, Copy, Default, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    /// Smallest amount a credit transfer may carry.
    pub const MIN: Amount = Amount(Decimal::from_parts(1, 0, 0, false, 2));
    /// Largest amount a credit transfer may carry (999999999.99).
    pub const MAX: Amount = Amount(Decimal::from_parts(1_215_752_191, 23, 0, false, 2));

    /// Two decimals, `.` as decimal point, no grouping.
    pub fn payload_string(&self) -> String {
        let mut value = self.0;
        value.rescale(2);
        value.to_string()
    }

    pub fn new(units: i64, cents: i64) -> Self {
        Amount(Decimal::from(units) + Decimal::new(cents, 2)).round()
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }

    /// rounds to the nearest cent, half a cent rounds up
    fn round(self) -> Self {
        Amount(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

impl FromStr for Amount {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let d = Decimal::from_str(s.trim()).map_err(|_| "Invalid amount format")?;
        Ok(Amount(d).round())
    }
}

/// Converts through the shortest decimal that reads back as the same `f64`,
/// so `1.005` is taken as written and not as `1.00499999...`.
impl TryFrom<f64> for Amount {
    type Error = &'static str;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err("Amount must be a finite number");
        }
        value.to_string().parse()
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount(value).round()
    }
}

macro_rules! from_integer_type {
    ($($t:ty),* $(,)?) => {
        $(impl From<$t> for Amount {
            fn from(value: $t) -> Self {
                Amount::new(value as i64, 0)
            }
        })*
    };
}

from_integer_type!(i8, i16, i32, i64, u8, u16, u32);

impl Debug for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Amount").field(&self.0).finish()
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.payload_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.payload_string().serialize(serializer)
    }
}
