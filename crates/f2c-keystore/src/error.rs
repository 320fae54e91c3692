//! Error types for the key store.

use thiserror::Error;

/// Errors that can occur during key store operations.
#[derive(Debug, Error)]
pub enum KeyStoreError {
    /// Lock was poisoned by a panicking writer.
    #[error("key store lock poisoned")]
    Poisoned,

    /// Stored material is not a valid seed.
    #[error("invalid key material: {0}")]
    InvalidKey(String),

    /// Backend-specific failure (platform keychain, secure enclave).
    #[error("key store backend error: {0}")]
    Backend(String),

    /// Core error.
    #[error("core error: {0}")]
    Core(#[from] f2c_core::CoreError),
}

/// Result type for key store operations.
pub type Result<T> = std::result::Result<T, KeyStoreError>;
