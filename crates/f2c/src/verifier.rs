//! The Verifier: the buyer side of the protocol.
//!
//! Takes scanned QR text and decides whether to accept the claim. A claim is
//! accepted only if its signature verifies, it has not expired, and it has not
//! been accepted before.

use f2c_core::{check_envelope, ClaimId, CoreError, Ed25519PublicKey, Envelope};
use thiserror::Error;

use crate::clock::now_secs;
use crate::config::F2cConfig;
use crate::replay::ReplayGuard;

/// Why a scanned claim was turned down.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimRejection {
    /// Malformed text, schema violation, or bad signature.
    #[error("invalid claim: {0}")]
    Invalid(#[from] CoreError),

    #[error("claim expired at {expired_at} (now {now})")]
    Expired { expired_at: u64, now: u64 },

    #[error("claim {0} already accepted")]
    Replayed(ClaimId),
}

/// A claim that passed every check.
#[derive(Debug, Clone)]
pub struct VerifiedClaim {
    pub id: ClaimId,
    pub signer: Ed25519PublicKey,
    pub envelope: Envelope,
}

/// Accepts or rejects scanned claims.
pub struct Verifier {
    config: F2cConfig,
    replay: ReplayGuard,
}

impl Verifier {
    /// Create a verifier with an empty replay memory.
    pub fn new(config: F2cConfig) -> Self {
        let replay = ReplayGuard::new(config.replay_capacity);
        Self { config, replay }
    }

    /// Get the verifier configuration.
    pub fn config(&self) -> &F2cConfig {
        &self.config
    }

    /// Parse and accept transport text at `now_secs`.
    pub fn accept(&self, text: &str, now_secs: u64) -> Result<VerifiedClaim, ClaimRejection> {
        let envelope = Envelope::from_transport(text).map_err(|e| self.reject(e.into()))?;
        self.accept_envelope(envelope, now_secs)
    }

    /// Accept transport text against the wall clock.
    pub fn accept_now(&self, text: &str) -> Result<VerifiedClaim, ClaimRejection> {
        self.accept(text, now_secs())
    }

    /// Accept an already parsed envelope at `now_secs`.
    ///
    /// Checks run in order: signature, expiry, replay. A claim is recorded
    /// for replay only once every other check has passed.
    pub fn accept_envelope(
        &self,
        envelope: Envelope,
        now_secs: u64,
    ) -> Result<VerifiedClaim, ClaimRejection> {
        let signer = check_envelope(&envelope).map_err(|e| self.reject(e.into()))?;

        if self.config.enforce_expiry && envelope.payload.is_expired(now_secs) {
            return Err(self.reject(ClaimRejection::Expired {
                expired_at: envelope.payload.e,
                now: now_secs,
            }));
        }

        let id = ClaimId::derive(&signer, &envelope.payload);
        if self.config.replay_protection && !self.replay.record(id) {
            return Err(self.reject(ClaimRejection::Replayed(id)));
        }

        tracing::info!(claim = %id, reward = envelope.payload.r, "claim accepted");
        Ok(VerifiedClaim {
            id,
            signer,
            envelope,
        })
    }

    /// Whether `id` has been accepted and is still remembered.
    pub fn has_seen(&self, id: &ClaimId) -> bool {
        self.replay.contains(id)
    }

    fn reject(&self, rejection: ClaimRejection) -> ClaimRejection {
        tracing::warn!(reason = %rejection, "claim rejected");
        rejection
    }
}

impl Default for Verifier {
    fn default() -> Self {
        Self::new(F2cConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use f2c_core::{build_envelope, normalize, Keypair, RawRequest, SchemaError};

    const EXPIRY_SECS: u64 = 1_700_000_000;

    fn envelope(nonce: &str) -> Envelope {
        let raw = RawRequest::new(
            "sui-mainnet",
            "0xABCDEF1234567890",
            "default",
            7.3,
            EXPIRY_SECS * 1000,
            nonce,
        )
        .unwrap();
        build_envelope(normalize(&raw), &Keypair::from_seed(&[0x05; 32]))
    }

    fn text(nonce: &str) -> String {
        envelope(nonce).to_transport()
    }

    #[test]
    fn test_accepts_valid_claim() {
        let verifier = Verifier::default();
        let claim = verifier.accept(&text("abcd"), EXPIRY_SECS - 1).unwrap();

        assert_eq!(claim.signer, Keypair::from_seed(&[0x05; 32]).public_key());
        assert_eq!(claim.envelope.payload.n, "abcd");
        assert!(verifier.has_seen(&claim.id));
    }

    #[test]
    fn test_rejects_garbage_text() {
        let verifier = Verifier::default();
        assert!(matches!(
            verifier.accept("not json", 0),
            Err(ClaimRejection::Invalid(CoreError::Decode(_)))
        ));
        assert!(matches!(
            verifier.accept("{\"payload\":1}", 0),
            Err(ClaimRejection::Invalid(CoreError::Schema(SchemaError::Malformed(_))))
        ));
    }

    #[test]
    fn test_rejects_tampered_claim() {
        let verifier = Verifier::default();
        let mut envelope = envelope("abcd");
        envelope.payload.r = 50;
        assert_eq!(
            verifier.accept_envelope(envelope, 0).unwrap_err(),
            ClaimRejection::Invalid(CoreError::SignatureMismatch)
        );
    }

    #[test]
    fn test_rejects_expired_claim() {
        let verifier = Verifier::default();
        assert_eq!(
            verifier.accept(&text("abcd"), EXPIRY_SECS).unwrap_err(),
            ClaimRejection::Expired {
                expired_at: EXPIRY_SECS,
                now: EXPIRY_SECS
            }
        );
    }

    #[test]
    fn test_expiry_check_can_be_disabled() {
        let verifier = Verifier::new(F2cConfig {
            enforce_expiry: false,
            ..F2cConfig::default()
        });
        assert!(verifier.accept(&text("abcd"), EXPIRY_SECS + 3600).is_ok());
    }

    #[test]
    fn test_rejects_replay() {
        let verifier = Verifier::default();
        let first = verifier.accept(&text("abcd"), 0).unwrap();
        assert_eq!(
            verifier.accept(&text("abcd"), 0).unwrap_err(),
            ClaimRejection::Replayed(first.id)
        );
        assert!(verifier.accept(&text("abce"), 0).is_ok());
    }

    #[test]
    fn test_expired_claim_not_recorded() {
        let verifier = Verifier::default();
        assert!(verifier.accept(&text("abcd"), EXPIRY_SECS).is_err());

        let id = envelope("abcd").claim_id().unwrap();
        assert!(!verifier.has_seen(&id));
    }

    #[test]
    fn test_replay_check_can_be_disabled() {
        let verifier = Verifier::new(F2cConfig {
            replay_protection: false,
            ..F2cConfig::default()
        });
        assert!(verifier.accept(&text("abcd"), 0).is_ok());
        assert!(verifier.accept(&text("abcd"), 0).is_ok());
    }

    #[test]
    fn test_aux_data_does_not_change_identity() {
        use f2c_core::AuxData;
        use serde_json::json;

        let verifier = Verifier::default();
        let mut aux = AuxData::new();
        aux.insert("note", json!("extra"));
        let with_aux = envelope("abcd").with_aux(aux).to_transport();

        let first = verifier.accept(&text("abcd"), 0).unwrap();
        assert_eq!(
            verifier.accept(&with_aux, 0).unwrap_err(),
            ClaimRejection::Replayed(first.id)
        );
    }
}
