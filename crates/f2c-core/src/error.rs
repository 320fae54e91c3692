//! Error types for the F2C core.

use thiserror::Error;

/// Core errors that can occur while building, encoding or verifying claims.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Text encoding or transport JSON could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Payload fails field-range or shape validation.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Cryptographic verification failed.
    #[error("signature mismatch")]
    SignatureMismatch,

    /// Public key bytes are not a valid Ed25519 point.
    #[error("invalid public key")]
    InvalidPublicKey,

    /// Key material has the wrong size.
    #[error("invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// Signature has the wrong size.
    #[error("invalid signature length: expected {expected}, got {actual}")]
    InvalidSignatureLength { expected: usize, actual: usize },

    /// The OS random source could not be read. Fatal for key generation.
    #[error("entropy unavailable: {0}")]
    EntropyUnavailable(String),

    /// Chain identifier is not in the registry.
    #[error("unknown chain identifier: {0}")]
    UnknownChain(String),

    /// Reward-scheme identifier is not in the registry.
    #[error("unknown scheme identifier: {0}")]
    UnknownScheme(String),

    /// Value cannot be represented in the canonical form.
    #[error("non-canonical value: {0}")]
    NonCanonicalValue(String),
}

/// Schema violations for a canonical payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("unsupported protocol version: {0}")]
    UnsupportedVersion(u32),

    #[error("unknown chain tag: {0:?}")]
    UnknownChainTag(String),

    #[error("unknown scheme tag: {0}")]
    UnknownSchemeTag(u32),

    #[error("reward percentage {0} outside 0..=100")]
    RewardOutOfRange(u8),

    #[error("seller tag has {0} characters, at most 8 allowed")]
    SellerTagTooLong(usize),

    #[error("nonce has {0} characters, exactly 4 required")]
    NonceLength(usize),

    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
