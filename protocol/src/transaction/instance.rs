//! `InstanceId` — the 32-byte name of a contract instance.
//!
//! Every instruction targets exactly one instance, and instances are named
//! by fixed-width 32-byte identifiers with value semantics. The genesis
//! configuration instance lives at the all-zero identifier; everything
//! else gets its identifier from [`super::instruction`]'s derived-ID
//! scheme.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors from constructing an [`InstanceId`].
#[derive(Debug, Error)]
pub enum InstanceIdError {
    /// The input was not exactly 32 bytes.
    #[error("instance IDs are always 32 bytes, got {got}")]
    InvalidLength {
        /// The length that was actually supplied.
        got: usize,
    },

    /// The hex string could not be decoded.
    #[error("invalid instance ID hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// A 32-byte contract instance identifier.
///
/// Value type: equality is full byte-content comparison, and construction
/// from a slice copies the input so the identifier stays stable even if
/// the caller later mutates their buffer. Construction fails for any
/// length other than 32.
///
/// # Examples
///
/// ```
/// use aurum_protocol::transaction::InstanceId;
///
/// let iid = InstanceId::from_hex(&"00".repeat(32)).unwrap();
/// assert_eq!(iid, InstanceId::zero());
/// assert!(InstanceId::from_slice(&[0u8; 31]).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId {
    bytes: [u8; 32],
}

impl InstanceId {
    /// The all-zero identifier, naming the ledger's genesis configuration
    /// instance.
    pub fn zero() -> Self {
        Self { bytes: [0u8; 32] }
    }

    /// Wrap exactly 32 bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Construct from a byte slice, copying the input.
    ///
    /// Fails unless the slice is exactly 32 bytes. This is the entry
    /// point for externally-deserialized representations — whatever the
    /// codec hands us gets length-checked here, once.
    pub fn from_slice(slice: &[u8]) -> Result<Self, InstanceIdError> {
        let bytes: [u8; 32] = slice
            .try_into()
            .map_err(|_| InstanceIdError::InvalidLength { got: slice.len() })?;
        Ok(Self { bytes })
    }

    /// Parse a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, InstanceIdError> {
        let bytes = hex::decode(s)?;
        Self::from_slice(&bytes)
    }

    /// The raw identifier bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Hex-encoded representation, 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl TryFrom<&[u8]> for InstanceId {
    type Error = InstanceIdError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(slice)
    }
}

impl TryFrom<Vec<u8>> for InstanceId {
    type Error = InstanceIdError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_slice(&bytes)
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InstanceId({})", &self.to_hex()[..16])
    }
}

impl Serialize for InstanceId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_hex())
        } else {
            serializer.serialize_bytes(&self.bytes)
        }
    }
}

impl<'de> Deserialize<'de> for InstanceId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            InstanceId::from_hex(&s).map_err(serde::de::Error::custom)
        } else {
            let bytes = <Vec<u8>>::deserialize(deserializer)?;
            InstanceId::from_slice(&bytes).map_err(serde::de::Error::custom)
        }
    }
}
