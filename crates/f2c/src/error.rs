//! Error types for the F2C service layer.

use f2c_core::CoreError;
use f2c_keystore::KeyStoreError;
use thiserror::Error;

use crate::submit::SubmitError;

/// Errors that can occur during issuance and submission.
#[derive(Debug, Error)]
pub enum F2cError {
    /// Core error (normalization input, encoding, entropy).
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Key store error.
    #[error("key store error: {0}")]
    KeyStore(#[from] KeyStoreError),

    /// Submission error.
    #[error("submission error: {0}")]
    Submit(#[from] SubmitError),

    /// Network name not recognized.
    #[error("unknown network: {0}")]
    UnknownNetwork(String),

    /// The wallet context has no chain in the registry.
    #[error("network {0} has no registered chain")]
    UnsupportedNetwork(String),
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, F2cError>;
