//! Codec seam for transporting transactions.
//!
//! Two encodings, two jobs: `bincode` for the compact binary form that
//! goes to a ledger node, `serde_json` for tooling output humans and
//! scripts read. Neither encoding is part of the consensus contract —
//! the canonical digests in [`super::instruction`] and [`super::client`]
//! read struct fields directly and never hash codec output, so the wire
//! format can evolve without forking the network.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Errors from encoding or decoding a wire message.
#[derive(Debug, Error)]
pub enum WireError {
    /// Binary (de)serialization failed.
    #[error("binary codec error: {0}")]
    Binary(#[from] bincode::Error),

    /// JSON (de)serialization failed.
    #[error("json codec error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encode a message in the compact binary wire format.
pub fn to_wire<T: Serialize>(value: &T) -> Result<Vec<u8>, WireError> {
    Ok(bincode::serialize(value)?)
}

/// Decode a message from the compact binary wire format.
pub fn from_wire<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, WireError> {
    Ok(bincode::deserialize(bytes)?)
}

/// Encode a message as pretty-printed JSON for tooling output.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, WireError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Decode a message from JSON.
pub fn from_json<T: DeserializeOwned>(s: &str) -> Result<T, WireError> {
    Ok(serde_json::from_str(s)?)
}
