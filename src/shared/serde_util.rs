//! Custom serde helpers for API wire formats.
//!
//! `serde_json` is built with `arbitrary_precision`, so JSON numbers reach
//! these helpers as their exact source text rather than an `f64`.

use serde::{Deserialize, Deserializer};

/// Read a JSON string or integer as its exact text. Floats are rejected.
fn integer_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => {
            let text = n.to_string();
            if text.contains(['.', 'e', 'E']) {
                return Err(serde::de::Error::custom(format!(
                    "Expected an integer, got {text}"
                )));
            }
            Ok(text)
        }
        other => Err(serde::de::Error::custom(format!(
            "Expected a string or integer, got {other}"
        ))),
    }
}

/// (De)serializes a `U256` as a base-10 string.
///
/// Token amounts routinely exceed 18 decimal digits, so they are never routed
/// through a float. Deserialization accepts a decimal string, a `0x`-prefixed
/// hex string, or a JSON integer of any size.
pub mod u256_string {
    use alloy_primitives::U256;
    use serde::{Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = super::integer_text(deserializer)?;
        U256::from_str(&s)
            .map_err(|e| serde::de::Error::custom(format!("Invalid amount {s}: {e}")))
    }
}

/// Deserializes a JSON string or integer into a `String`, digit for digit.
///
/// Seaport order components are emitted as strings by some endpoints and as
/// plain numbers by others (`counter`, `startTime`, amounts).
pub mod string_or_number {
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::integer_text(deserializer)
    }
}
