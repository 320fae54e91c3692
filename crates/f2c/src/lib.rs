//! # F2C
//!
//! Face-to-Crypto claims: a seller signs a compact claim, shows it as a QR
//! code, and a buyer verifies it offline before submitting it on chain.
//!
//! ## Overview
//!
//! - **Issuer**: owns the signer identity and produces signed envelopes
//! - **Verifier**: checks scanned claims for signature, expiry and replay
//! - **Submitter**: hands an envelope to the chain (mocked here)
//! - **WalletContext**: the seller address and network, passed explicitly
//!
//! ## Usage
//!
//! ```rust
//! use f2c::{F2cConfig, Issuer, Network, Verifier, WalletContext};
//! use f2c::core::AuxData;
//! use f2c::keystore::MemoryKeyStore;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let ctx = WalletContext::new("0xABCDEF1234567890", Network::Mainnet);
//! let issuer = Issuer::new(MemoryKeyStore::new(), F2cConfig::default());
//!
//! let claim = issuer.issue_now(&ctx, 5.0, AuxData::new()).await.unwrap();
//!
//! let verifier = Verifier::default();
//! let accepted = verifier.accept_now(&claim.qr_text).unwrap();
//! assert_eq!(accepted.id, claim.id);
//! # }
//! ```
//!
//! ## Re-exports
//!
//! - `f2c::core` - Protocol primitives (payload, canonical form, envelope)
//! - `f2c::keystore` - Signer seed storage

pub mod clock;
pub mod config;
pub mod context;
pub mod error;
pub mod issuer;
pub mod replay;
pub mod submit;
pub mod verifier;

pub use f2c_core as core;
pub use f2c_keystore as keystore;

pub use config::F2cConfig;
pub use context::{Network, NetworkConfig, WalletContext};
pub use error::{F2cError, Result};
pub use issuer::{IssuedClaim, Issuer};
pub use replay::ReplayGuard;
pub use submit::{MockSubmitter, Submission, SubmitError, Submitter};
pub use verifier::{ClaimRejection, VerifiedClaim, Verifier};

pub use f2c_core::{ClaimId, Ed25519PublicKey, Envelope, Keypair, RawRequest, TextEncoding};
