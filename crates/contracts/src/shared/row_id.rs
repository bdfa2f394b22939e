//! Идентификаторы строк
//!
//! Backends key rows either by integer or by string; the UI always keys by string.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

/// `deserialize_with` helper accepting `"7"` as well as `7`
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(RawId::into_string)
}

/// Same conversion for a loose JSON value; `None` for anything but a string or number
pub fn id_from_value(value: serde_json::Value) -> Option<String> {
    RawId::deserialize(value).ok().map(RawId::into_string)
}
