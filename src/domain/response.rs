//! Optional typed views over the `info` payloads returned by SMS Club.
//!
//! The client hands back raw JSON so that unknown fields survive. These views
//! pick out the fields most callers need and return `None` when the payload
//! has a different shape.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Account balance from `sms/balance`.
pub struct Balance {
    #[serde(deserialize_with = "de_string_or_number")]
    pub money: String,
    #[serde(default)]
    pub currency: Option<String>,
}

impl Balance {
    pub fn from_info(info: &Value) -> Option<Self> {
        serde_json::from_value(info.clone()).ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Alpha-names enabled for the account, from `sms/originator`.
pub struct Signatures(pub Vec<String>);

impl Signatures {
    /// Accepts either a JSON array of names or an object whose values are names.
    pub fn from_info(info: &Value) -> Option<Self> {
        let names = match info {
            Value::Array(items) => items,
            Value::Object(map) => return collect_strings(map.values()).map(Self),
            _ => return None,
        };
        collect_strings(names.iter()).map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Message ids assigned by `sms/send`, keyed by SMS id with the phone number as value.
pub struct SentMessages(pub BTreeMap<String, String>);

impl SentMessages {
    pub fn from_info(info: &Map<String, Value>) -> Option<Self> {
        string_map(info).map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Delivery state per SMS id, from `sms/status`.
pub struct DeliveryStatuses(pub BTreeMap<String, String>);

impl DeliveryStatuses {
    pub fn from_info(info: &Value) -> Option<Self> {
        info.as_object().and_then(string_map).map(Self)
    }
}

fn collect_strings<'a>(values: impl Iterator<Item = &'a Value>) -> Option<Vec<String>> {
    values
        .map(|value| value.as_str().map(str::to_owned))
        .collect()
}

fn string_map(map: &Map<String, Value>) -> Option<BTreeMap<String, String>> {
    map.iter()
        .map(|(key, value)| scalar_to_string(value).map(|value| (key.clone(), value)))
        .collect()
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(value) => Some(value.clone()),
        Value::Number(value) => Some(value.to_string()),
        _ => None,
    }
}

fn de_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_to_string(&value)
        .ok_or_else(|| serde::de::Error::custom("expected money to be JSON string or number"))
}
