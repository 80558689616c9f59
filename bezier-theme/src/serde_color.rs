//! Custom serialization helpers for [ColorComponents](crate::color::ColorComponents).
//!
//! Use with `#[serde(with = "crate::serde_color")]`; colors travel as
//! `#rrggbb` / `#rrggbbaa` strings.

use serde::{Deserialize, Deserializer, Serializer};

use crate::color::ColorComponents;

/// Serialize a color as a hex string.
pub fn serialize<S>(color: &ColorComponents, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&color.to_hex())
}

/// Deserialize a color from a hex string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<ColorComponents, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let hex = String::deserialize(deserializer)?;
    ColorComponents::from_hex(&hex).map_err(Error::custom)
}
