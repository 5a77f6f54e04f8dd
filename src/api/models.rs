use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt::Display, str::FromStr};

/// A DNS record as exchanged with the omg.lol API.
///
/// Zero values (`id == 0`, empty strings, `ttl == 0`, missing timestamps) are
/// left out of the serialized payload, so a record built from user input can be
/// posted as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    #[serde(default, skip_serializing_if = "is_zero", deserialize_with = "number_or_string")]
    pub id: u64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub r#type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub data: String,
    #[serde(default, skip_serializing_if = "is_zero", deserialize_with = "number_or_string")]
    pub ttl: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub response: T,
}

#[derive(Debug, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub message: String,
    pub dns: Vec<DnsRecord>,
}

#[derive(Debug, Deserialize)]
pub struct CreateResponse {
    pub response_received: CreateReceived,
}

#[derive(Debug, Deserialize)]
pub struct CreateReceived {
    pub data: DnsRecord,
}

fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

// Older API versions send `id` and `ttl` as numeric strings, newer ones as
// integers. Both decode to the same value; null decodes to zero.
fn number_or_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr + Default,
    T::Err: Display,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString<N> {
        Number(N),
        String(String),
    }

    match Option::<NumberOrString<T>>::deserialize(deserializer)? {
        Some(NumberOrString::Number(n)) => Ok(n),
        Some(NumberOrString::String(s)) => s
            .trim()
            .parse()
            .map_err(|e| Error::custom(format!("invalid numeric string {s:?}: {e}"))),
        None => Ok(T::default()),
    }
}
