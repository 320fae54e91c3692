//! Submission: handing a signed envelope to the chain.
//!
//! The real submitter is an external collaborator. [`MockSubmitter`] mimics
//! it for UI flows and tests: it waits, checks the envelope, and fabricates a
//! transaction id.

use std::time::Duration;

use async_trait::async_trait;
use f2c_core::{check_envelope, CoreError, Envelope};
use rand::RngCore;
use thiserror::Error;

use crate::clock::now_millis;
use crate::context::{Network, WalletContext};

/// Errors a submitter can report.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Envelope is missing required parts.
    #[error("invalid envelope: {0}")]
    InvalidEnvelope(String),

    /// Envelope failed verification.
    #[error("envelope rejected: {0}")]
    Rejected(#[from] CoreError),

    /// Transport or node failure.
    #[error("submission failed: {0}")]
    Failed(String),
}

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub tx_id: String,
    pub explorer_url: String,
    pub network: Network,
}

/// Accepts a built envelope and returns a transaction id or a failure reason.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(
        &self,
        ctx: &WalletContext,
        envelope: &Envelope,
    ) -> Result<Submission, SubmitError>;
}

/// Submitter that never touches the network.
#[derive(Debug, Clone, Default)]
pub struct MockSubmitter {
    latency: Duration,
}

impl MockSubmitter {
    /// Create a submitter with the default simulated latency.
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate network latency before answering.
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl Submitter for MockSubmitter {
    async fn submit(
        &self,
        ctx: &WalletContext,
        envelope: &Envelope,
    ) -> Result<Submission, SubmitError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if envelope.sig.is_empty() || envelope.pub_key.is_empty() {
            return Err(SubmitError::InvalidEnvelope("missing signature or key".into()));
        }
        check_envelope(envelope)?;

        let tx_id = fake_tx_id();
        let explorer_url = ctx.explorer_tx_url(&tx_id);
        tracing::info!(tx_id = %tx_id, network = %ctx.network, "mock submission accepted");

        Ok(Submission {
            tx_id,
            explorer_url,
            network: ctx.network,
        })
    }
}

/// `0x` + 8 random bytes + current Unix milliseconds, all hex.
fn fake_tx_id() -> String {
    let mut random = [0u8; 8];
    rand::thread_rng().fill_bytes(&mut random);
    format!("0x{}{:x}", hex::encode(random), now_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use f2c_core::{build_envelope, normalize, Keypair, RawRequest};

    fn envelope() -> Envelope {
        let raw = RawRequest::new("sui-mainnet", "0xABCDEF1234567890", "default", 5.0, 1_000, "abcd")
            .unwrap();
        build_envelope(normalize(&raw), &Keypair::from_seed(&[0x11; 32]))
    }

    #[tokio::test]
    async fn test_mock_accepts_valid_envelope() {
        let ctx = WalletContext::new("0xABCDEF1234567890", Network::Devnet);
        let submission = MockSubmitter::new().submit(&ctx, &envelope()).await.unwrap();

        assert!(submission.tx_id.starts_with("0x"));
        assert_eq!(
            submission.explorer_url,
            format!("https://explorer.sui.io/devnet/tx/{}", submission.tx_id)
        );
        assert_eq!(submission.network, Network::Devnet);
    }

    #[tokio::test]
    async fn test_mock_rejects_missing_signature() {
        let ctx = WalletContext::new("0xabc", Network::Mainnet);
        let mut envelope = envelope();
        envelope.sig.clear();
        assert!(matches!(
            MockSubmitter::new().submit(&ctx, &envelope).await,
            Err(SubmitError::InvalidEnvelope(_))
        ));
    }

    #[tokio::test]
    async fn test_mock_rejects_tampered_envelope() {
        let ctx = WalletContext::new("0xabc", Network::Mainnet);
        let mut envelope = envelope();
        envelope.payload.r = 99;
        assert!(matches!(
            MockSubmitter::new().submit(&ctx, &envelope).await,
            Err(SubmitError::Rejected(CoreError::SignatureMismatch))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_mock_latency() {
        let ctx = WalletContext::new("0xabc", Network::Mainnet);
        let submitter = MockSubmitter::with_latency(Duration::from_millis(700));
        let start = tokio::time::Instant::now();
        submitter.submit(&ctx, &envelope()).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(700));
    }

    #[test]
    fn test_fake_tx_ids_differ() {
        assert_ne!(fake_tx_id(), fake_tx_id());
    }
}
