//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use f2c_core::{
    build_envelope, normalize, AuxData, ChainId, Ed25519PublicKey, Envelope, Keypair, RawRequest,
    SchemeId,
};
use f2c_keystore::MemoryKeyStore;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde_json::json;

/// Seller address used by fixtures.
pub const FIXTURE_SELLER: &str = "0xABCDEF1234567890";

/// Expiry used by fixtures: 2023-11-14T22:13:20Z, in milliseconds.
pub const FIXTURE_EXPIRY_MS: u64 = 1_700_000_000_000;

/// A test fixture with a deterministic signer.
pub struct TestFixture {
    pub keypair: Keypair,
    pub seller: String,
}

impl TestFixture {
    /// Create with a deterministic keypair from seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self {
            keypair: Keypair::from_seed(&seed),
            seller: FIXTURE_SELLER.to_string(),
        }
    }

    /// Get the keypair's public key.
    pub fn public_key(&self) -> Ed25519PublicKey {
        self.keypair.public_key()
    }

    /// A key store already holding this fixture's seed.
    pub fn keystore(&self) -> MemoryKeyStore {
        MemoryKeyStore::with_seed(*self.keypair.seed())
    }

    /// A request from this fixture's seller.
    pub fn request(&self, reward_pct: f64, expires_at_ms: u64, nonce: &str) -> RawRequest {
        RawRequest {
            chain: ChainId::SuiMainnet,
            seller: self.seller.clone(),
            scheme: SchemeId::Default,
            reward_pct,
            metadata: AuxData::new(),
            expires_at_ms,
            nonce: nonce.to_string(),
        }
    }

    /// Sign a claim expiring at [`FIXTURE_EXPIRY_MS`].
    pub fn make_envelope(&self, reward_pct: f64, nonce: &str) -> Envelope {
        self.make_envelope_expiring(reward_pct, FIXTURE_EXPIRY_MS, nonce)
    }

    /// Sign a claim with an explicit expiry.
    pub fn make_envelope_expiring(
        &self,
        reward_pct: f64,
        expires_at_ms: u64,
        nonce: &str,
    ) -> Envelope {
        build_envelope(normalize(&self.request(reward_pct, expires_at_ms, nonce)), &self.keypair)
    }

    /// Sign a claim with a random nonce and a sample note as aux data.
    pub fn make_envelope_with_note(&self, reward_pct: f64, note: &str) -> Envelope {
        let mut aux = AuxData::new();
        aux.insert("note", json!(note));
        self.make_envelope(reward_pct, &random_nonce()).with_aux(aux)
    }
}

/// Create multiple test fixtures for multi-party tests.
pub fn multi_party_fixtures(count: usize) -> Vec<TestFixture> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[0] = i as u8;
            TestFixture::with_seed(seed)
        })
        .collect()
}

/// Four random alphanumeric characters.
pub fn random_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(f2c_core::payload::NONCE_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use f2c_core::verify_envelope;
    use f2c_keystore::KeyStore;

    #[test]
    fn test_fixture_envelope_verifies() {
        let fixture = TestFixture::with_seed([0x09; 32]);
        let envelope = fixture.make_envelope(5.0, "abcd");

        assert!(verify_envelope(&envelope));
        assert_eq!(envelope.public_key().unwrap(), fixture.public_key());
        assert_eq!(envelope.payload.s, "34567890");
    }

    #[test]
    fn test_fixture_note_rides_along() {
        let fixture = TestFixture::with_seed([0x09; 32]);
        let envelope = fixture.make_envelope_with_note(5.0, "table 4");

        assert!(verify_envelope(&envelope));
        assert_eq!(envelope.aux.unwrap().get("note"), Some(&json!("table 4")));
    }

    #[tokio::test]
    async fn test_fixture_keystore_holds_seed() {
        let fixture = TestFixture::with_seed([0x0A; 32]);
        let loaded = fixture.keystore().load_keypair().await.unwrap().unwrap();
        assert_eq!(loaded.public_key(), fixture.public_key());
    }

    #[test]
    fn test_multi_party() {
        let parties = multi_party_fixtures(3);

        let pks: Vec<_> = parties.iter().map(|p| p.public_key()).collect();
        assert_ne!(pks[0], pks[1]);
        assert_ne!(pks[1], pks[2]);
        assert_ne!(pks[0], pks[2]);
    }
}
