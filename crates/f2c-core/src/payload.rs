//! Claim payloads: the raw request a seller fills in, and the compact
//! canonical payload that gets signed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::canonical::canonical_payload_bytes;
use crate::error::Result;
use crate::registry::{ChainId, SchemeId};

/// The current payload protocol version.
pub const PROTOCOL_VERSION: u32 = 1;

/// Number of trailing seller characters kept in the seller tag.
pub const SELLER_TAG_LEN: usize = 8;

/// Exact nonce length in the compact form.
pub const NONCE_LEN: usize = 4;

/// Character used to right-pad short nonces.
pub const NONCE_PAD: char = '0';

/// Minimum reward percentage after normalization.
pub const MIN_REWARD_PCT: f64 = 3.0;

/// Maximum reward percentage.
pub const MAX_REWARD_PCT: f64 = 100.0;

/// Unsigned auxiliary data carried beside the signed payload.
///
/// Never part of the canonical payload, so it can be altered in transit
/// without invalidating the signature. Treat it as untrusted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuxData(pub Map<String, Value>);

impl AuxData {
    /// Create empty auxiliary data.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Insert a key.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Get a key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether no entries are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for AuxData {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// A claim request as entered by the seller, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRequest {
    /// Target chain.
    pub chain: ChainId,
    /// Seller identifier, typically a wallet address.
    pub seller: String,
    /// Reward scheme.
    pub scheme: SchemeId,
    /// Reward percentage as entered; clamped during normalization.
    pub reward_pct: f64,
    /// Free-form metadata. Never signed.
    pub metadata: AuxData,
    /// Absolute expiry, Unix milliseconds.
    pub expires_at_ms: u64,
    /// Single-use nonce. Only the first 4 characters survive normalization.
    pub nonce: String,
}

impl RawRequest {
    /// Build a request from human-readable identifiers.
    ///
    /// Fails with `UnknownChain` / `UnknownScheme` when an identifier is not
    /// in the registry.
    pub fn new(
        chain_id: &str,
        seller: impl Into<String>,
        scheme_id: &str,
        reward_pct: f64,
        expires_at_ms: u64,
        nonce: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            chain: chain_id.parse()?,
            seller: seller.into(),
            scheme: scheme_id.parse()?,
            reward_pct,
            metadata: AuxData::new(),
            expires_at_ms,
            nonce: nonce.into(),
        })
    }

    /// Attach metadata.
    pub fn with_metadata(mut self, metadata: AuxData) -> Self {
        self.metadata = metadata;
        self
    }
}

/// The compact signed payload.
///
/// Field names are the wire keys. The canonical byte form emits them in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CanonicalPayload {
    /// Protocol version.
    pub v: u32,
    /// Chain tag.
    pub c: String,
    /// Seller tag (last 8 characters of the seller identifier).
    pub s: String,
    /// Scheme tag.
    pub i: u32,
    /// Reward percentage, integer.
    pub r: u8,
    /// Expiry, Unix seconds.
    pub e: u64,
    /// Nonce, exactly 4 characters.
    pub n: String,
}

impl CanonicalPayload {
    /// The canonical byte form; this is exactly what gets signed.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        canonical_payload_bytes(self)
    }

    /// Resolve the chain tag against the registry.
    pub fn chain(&self) -> Option<ChainId> {
        ChainId::from_tag(&self.c)
    }

    /// Resolve the scheme tag against the registry.
    pub fn scheme(&self) -> Option<SchemeId> {
        SchemeId::from_tag(self.i)
    }

    /// Whether the claim has expired at `now_secs`.
    pub fn is_expired(&self, now_secs: u64) -> bool {
        now_secs >= self.e
    }
}
