//! The Issuer: the seller side of the protocol.
//!
//! Owns the signer identity (held in a [`KeyStore`]) and turns claim requests
//! into signed envelopes plus the text that goes into the QR code.

use std::sync::Arc;

use f2c_core::payload::NONCE_LEN;
use f2c_core::{
    build_envelope_with, normalize, AuxData, ClaimId, Ed25519PublicKey, Envelope, Keypair,
    RawRequest, SchemeId,
};
use f2c_keystore::KeyStore;
use rand::distributions::Alphanumeric;
use rand::Rng;
use tokio::sync::Mutex;

use crate::clock::now_millis;
use crate::config::F2cConfig;
use crate::context::WalletContext;
use crate::error::{F2cError, Result};

/// A freshly issued claim.
#[derive(Debug, Clone)]
pub struct IssuedClaim {
    /// The signed envelope.
    pub envelope: Envelope,
    /// Transport text to render as a QR code.
    pub qr_text: String,
    /// Identifier the verifier will see for this claim.
    pub id: ClaimId,
}

/// Signs claims for the wallet's seller.
pub struct Issuer<K: KeyStore> {
    keystore: Arc<K>,
    config: F2cConfig,
    /// Cached identity, loaded lazily from the key store.
    identity: Mutex<Option<Keypair>>,
}

impl<K: KeyStore> Issuer<K> {
    /// Create an issuer backed by `keystore`.
    pub fn new(keystore: K, config: F2cConfig) -> Self {
        Self {
            keystore: Arc::new(keystore),
            config,
            identity: Mutex::new(None),
        }
    }

    /// Get the key store reference.
    pub fn keystore(&self) -> &K {
        &self.keystore
    }

    /// Get the issuer configuration.
    pub fn config(&self) -> &F2cConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Identity
    // ─────────────────────────────────────────────────────────────────────────

    /// Load the signer identity, creating and storing one on first use.
    ///
    /// Returns the signer's public key.
    pub async fn ensure_identity(&self) -> Result<Ed25519PublicKey> {
        Ok(self.signer().await?.public_key())
    }

    async fn signer(&self) -> Result<Keypair> {
        let mut identity = self.identity.lock().await;
        if let Some(keypair) = identity.as_ref() {
            return Ok(keypair.clone());
        }

        let keypair = match self.keystore.load_keypair().await? {
            Some(keypair) => {
                tracing::debug!(signer = %keypair.public_key().to_hex(), "signer identity loaded");
                keypair
            }
            None => {
                let keypair = Keypair::generate()?;
                self.keystore.store_keypair(&keypair).await?;
                tracing::info!(signer = %keypair.public_key().to_hex(), "new signer identity created");
                keypair
            }
        };

        *identity = Some(keypair.clone());
        Ok(keypair)
    }

    /// The signer's public key, if an identity has been loaded.
    pub async fn public_key(&self) -> Option<Ed25519PublicKey> {
        self.identity.lock().await.as_ref().map(Keypair::public_key)
    }

    /// Drop the signer identity from memory and from the key store.
    ///
    /// The next issuance creates a new identity. If the store cannot be
    /// cleared, the cached identity is kept.
    pub async fn forget_identity(&self) -> Result<()> {
        let mut identity = self.identity.lock().await;
        self.keystore.clear().await?;
        *identity = None;
        tracing::info!("signer identity cleared");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Issuance
    // ─────────────────────────────────────────────────────────────────────────

    /// Issue a claim for `raw`.
    ///
    /// The request's chain must be the one registered for the context's
    /// network. Metadata rides along as unsigned aux data.
    pub async fn issue(&self, ctx: &WalletContext, raw: &RawRequest) -> Result<IssuedClaim> {
        if ctx.network.chain() != Some(raw.chain) {
            return Err(F2cError::UnsupportedNetwork(ctx.network.to_string()));
        }

        let keypair = self.signer().await?;
        let payload = normalize(raw);
        let envelope = build_envelope_with(payload, &keypair, self.config.text_encoding)
            .with_aux(raw.metadata.clone());
        let id = ClaimId::derive(&keypair.public_key(), &envelope.payload);

        let qr_text = envelope.to_transport();
        tracing::info!(
            claim = %id,
            network = %ctx.network,
            reward = envelope.payload.r,
            expires = envelope.payload.e,
            "claim issued"
        );

        Ok(IssuedClaim {
            envelope,
            qr_text,
            id,
        })
    }

    /// Issue a claim for the wallet's own address, expiring after the
    /// configured TTL, with a fresh random nonce.
    pub async fn issue_now(
        &self,
        ctx: &WalletContext,
        reward_pct: f64,
        metadata: AuxData,
    ) -> Result<IssuedClaim> {
        let chain = ctx
            .network
            .chain()
            .ok_or_else(|| F2cError::UnsupportedNetwork(ctx.network.to_string()))?;

        let ttl_ms = u64::try_from(self.config.default_ttl.as_millis()).unwrap_or(u64::MAX);
        let raw = RawRequest {
            chain,
            seller: ctx.address.clone(),
            scheme: SchemeId::Default,
            reward_pct,
            metadata,
            expires_at_ms: now_millis().saturating_add(ttl_ms),
            nonce: random_nonce(),
        };

        self.issue(ctx, &raw).await
    }
}

fn random_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect()
}
