//! Seed derivation
//!
//! Seeds arrive as numbers or strings. Strings that do not start with an
//! integer are folded through a 32-bit rolling hash which must stay
//! bit-compatible with existing seeded fixtures.

use crate::domain::parse::parse_int_prefix;

/// A seed as supplied by the caller
#[derive(Debug, Clone, PartialEq)]
pub enum SeedValue {
    Number(i64),
    Text(String),
    /// Any other JSON shape; derives to 0
    Unsupported(&'static str),
}

impl SeedValue {
    /// Interpret a JSON value; `null` means no seed
    #[cfg(test)]
    fn from_json(value: &serde_json::Value) -> Option<Self> {
        use serde_json::Value;

        match value {
            Value::Null => None,
            Value::Number(n) => Some(Self::Number(
                n.as_i64()
                    .or_else(|| n.as_f64().map(|f| f as i64))
                    .unwrap_or_default(),
            )),
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Bool(_) => Some(Self::Unsupported("boolean")),
            Value::Array(_) => Some(Self::Unsupported("array")),
            Value::Object(_) => Some(Self::Unsupported("object")),
        }
    }

    /// The numeric seed fed to the generator
    pub fn derive(&self) -> i64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => parse_int_prefix(s).unwrap_or_else(|| i64::from(string_hash(s))),
            Self::Unsupported(kind) => {
                tracing::warn!(seed_type = kind, "Unexpected seed type, using default seed 0");
                0
            }
        }
    }
}

impl From<&str> for SeedValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for SeedValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// Rolling hash over UTF-16 code units: `h = h * 31 + unit` with 32-bit wraparound
pub fn string_hash(input: &str) -> i32 {
    input
        .encode_utf16()
        .fold(0_i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}
