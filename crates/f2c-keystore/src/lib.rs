//! # F2C Key Store
//!
//! Storage abstraction for the signer's private seed.
//!
//! Real deployments back [`KeyStore`] with platform secure storage; this crate
//! ships [`MemoryKeyStore`] for tests and ephemeral signers. A seed is held
//! for the lifetime of the signer identity and removed by [`KeyStore::clear`]
//! when the wallet is cleared.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{KeyStoreError, Result};
pub use memory::MemoryKeyStore;
pub use traits::KeyStore;
