//! In-memory implementation of the KeyStore trait.
//!
//! Same semantics as a persistent store, but the seed is lost when the store
//! is dropped. The seed buffer is zeroized on replace, clear and drop.

use std::sync::RwLock;

use async_trait::async_trait;
use f2c_core::crypto::SECRET_KEY_SIZE;
use zeroize::Zeroizing;

use crate::error::{KeyStoreError, Result};
use crate::traits::KeyStore;

/// In-memory key store. Thread-safe via RwLock.
pub struct MemoryKeyStore {
    seed: RwLock<Option<Zeroizing<[u8; SECRET_KEY_SIZE]>>>,
}

impl MemoryKeyStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            seed: RwLock::new(None),
        }
    }

    /// Create a store already holding `seed`.
    pub fn with_seed(seed: [u8; SECRET_KEY_SIZE]) -> Self {
        Self {
            seed: RwLock::new(Some(Zeroizing::new(seed))),
        }
    }
}

impl Default for MemoryKeyStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyStore for MemoryKeyStore {
    async fn store(&self, seed: &[u8; SECRET_KEY_SIZE]) -> Result<()> {
        let mut slot = self.seed.write().map_err(|_| KeyStoreError::Poisoned)?;
        *slot = Some(Zeroizing::new(*seed));
        tracing::debug!("signer seed stored in memory");
        Ok(())
    }

    async fn load(&self) -> Result<Option<Zeroizing<[u8; SECRET_KEY_SIZE]>>> {
        let slot = self.seed.read().map_err(|_| KeyStoreError::Poisoned)?;
        Ok(slot.clone())
    }

    async fn clear(&self) -> Result<()> {
        let mut slot = self.seed.write().map_err(|_| KeyStoreError::Poisoned)?;
        *slot = None;
        tracing::debug!("signer seed cleared");
        Ok(())
    }
}
