//! Carrier encoding for tab groups.
//!
//! A tab group travels through the normalized text as base64 (standard
//! alphabet, padded) of its JSON array. The alphabet never contains `}`, `"`
//! or `<`, so titles and bodies cannot break the surrounding marker.

use base64::Engine;
use base64::prelude::BASE64_STANDARD;

use crate::node::Tab;

/// Error decoding or encoding a tabs payload.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// Payload is not valid base64.
    #[error("invalid base64 in tabs payload: {0}")]
    Base64(#[from] base64::DecodeError),
    /// Decoded bytes are not a JSON array of tabs.
    #[error("invalid JSON in tabs payload: {0}")]
    Json(#[from] serde_json::Error),
    /// Payload decoded to a group without tabs.
    #[error("tabs payload contains no tabs")]
    Empty,
}

/// Encode tabs as a marker payload.
pub fn encode_tabs(tabs: &[Tab]) -> Result<String, PayloadError> {
    if tabs.is_empty() {
        return Err(PayloadError::Empty);
    }
    let json = serde_json::to_vec(tabs)?;
    Ok(BASE64_STANDARD.encode(json))
}

/// Decode a marker payload back into tabs.
pub fn decode_tabs(payload: &str) -> Result<Vec<Tab>, PayloadError> {
    let bytes = BASE64_STANDARD.decode(payload.trim())?;
    let tabs: Vec<Tab> = serde_json::from_slice(&bytes)?;
    if tabs.is_empty() {
        return Err(PayloadError::Empty);
    }
    Ok(tabs)
}
