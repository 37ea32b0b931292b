//! Monetary amounts on the wire.
//!
//! Amounts are written as JSON numbers. On read, both JSON numbers and
//! numeric strings are accepted (`"150.00"` and `150.0` are the same amount).

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serializer};
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(serde_json::Number),
    Text(String),
}

/// Parse a textual amount such as `"150.00"`, `" 85.9 "` or `"1.5e3"`.
pub fn parse_amount(text: &str) -> Result<Decimal, String> {
    let trimmed = text.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| format!("invalid amount: {:?}", text))
}

pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    rust_decimal::serde::float::serialize(value, serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(number) => number.to_string(),
        RawAmount::Text(text) => text,
    };
    parse_amount(&text).map_err(serde::de::Error::custom)
}
