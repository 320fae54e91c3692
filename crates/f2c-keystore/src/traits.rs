//! KeyStore trait: the abstract interface for signer seed persistence.

use async_trait::async_trait;
use f2c_core::crypto::SECRET_KEY_SIZE;
use f2c_core::Keypair;
use zeroize::Zeroizing;

use crate::error::Result;

/// Async interface for storing the signer's private seed.
///
/// # Design Notes
///
/// - **Single identity**: a store holds at most one seed. `store` replaces it.
/// - **Never logged**: implementations must not log or serialize seed bytes.
/// - **Clear is idempotent**: clearing an empty store is not an error.
#[async_trait]
pub trait KeyStore: Send + Sync {
    /// Persist the seed, replacing any previous one.
    async fn store(&self, seed: &[u8; SECRET_KEY_SIZE]) -> Result<()>;

    /// Load the seed, if one is stored.
    async fn load(&self) -> Result<Option<Zeroizing<[u8; SECRET_KEY_SIZE]>>>;

    /// Remove the stored seed.
    async fn clear(&self) -> Result<()>;

    /// Load the seed and rebuild the keypair.
    async fn load_keypair(&self) -> Result<Option<Keypair>> {
        Ok(self.load().await?.map(|seed| Keypair::from_seed(&seed)))
    }

    /// Persist a keypair's seed.
    async fn store_keypair(&self, keypair: &Keypair) -> Result<()> {
        self.store(&keypair.seed()).await
    }
}
