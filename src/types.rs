use serde::{ Deserialize, Deserializer, Serialize };
use serde_json::Value;

/// Reads an explicit `null` as the field's default value.
pub fn null_as_default<'de, D, T>(deserializer:D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Every response from the API is wrapped in this. A `code` of zero means success.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub code: i64,
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    #[serde(rename="type")]
    pub kind: &'a str,
    pub keywords: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct IdRecord {
    #[serde(rename="oid")]
    pub id: String,
}
