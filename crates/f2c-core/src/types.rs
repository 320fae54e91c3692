//! Strong type definitions for F2C claims.

use std::fmt;

use crate::crypto::{Blake3Hash, Ed25519PublicKey};
use crate::payload::CanonicalPayload;

/// Domain prefix for claim identifiers.
pub const CLAIM_ID_DOMAIN: &[u8] = b"f2c/claim-id/v1";

/// A 32-byte claim identifier.
///
/// Computed as Blake3(domain || signer public key || canonical payload bytes).
/// Two envelopes carrying the same payload from the same signer share a
/// ClaimId, which is what replay detection keys on.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClaimId(pub [u8; 32]);

impl ClaimId {
    /// Derive the identifier for a payload signed by `signer`.
    pub fn derive(signer: &Ed25519PublicKey, payload: &CanonicalPayload) -> Self {
        let mut input = Vec::with_capacity(CLAIM_ID_DOMAIN.len() + 32 + 80);
        input.extend_from_slice(CLAIM_ID_DOMAIN);
        input.extend_from_slice(signer.as_bytes());
        input.extend_from_slice(&payload.canonical_bytes());
        Self(Blake3Hash::hash(&input).0)
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClaimId({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for ClaimId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
