//! Repository records and error definitions for the upstream API.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// One repository as reported by the upstream listing endpoint.
///
/// Decoding is lenient per field: a missing, `null` or mistyped field takes
/// its empty value instead of failing the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub full_name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient")]
    pub html_url: String,
    #[serde(default, deserialize_with = "lenient")]
    pub language: String,
    #[serde(default, deserialize_with = "lenient")]
    pub stargazers_count: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub forks_count: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub created_at: String,
    #[serde(default, deserialize_with = "lenient")]
    pub updated_at: String,
    #[serde(default, deserialize_with = "lenient")]
    pub topics: Vec<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Decode an upstream listing body.
///
/// The body must be a JSON array. Each element becomes exactly one record;
/// an element that is not an object yields an empty record.
pub fn decode_repositories(body: &[u8]) -> Result<Vec<RepositoryRecord>, DecodeError> {
    let entries: Vec<Value> = serde_json::from_slice(body)?;

    Ok(entries
        .into_iter()
        .map(|entry| RepositoryRecord::deserialize(entry).unwrap_or_default())
        .collect())
}

/// The upstream body was not a JSON array.
#[derive(Debug, Error)]
#[error("failed to decode repository list: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// Errors that can occur while calling the upstream API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request URL could not be built.
    #[error("invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The upstream did not answer within the configured timeout.
    #[error("upstream request timed out after {0} seconds")]
    Timeout(u64),

    /// Connection, TLS or body read failure.
    #[error("failed to fetch repositories: {0}")]
    Transport(#[source] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("upstream API returned status: {status}, body: {body}")]
    Status { status: u16, body: String },
}

/// Any failure on the fetch → decode path of the project listing.
#[derive(Debug, Error)]
pub enum ProjectsError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
