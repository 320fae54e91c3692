//! # F2C Core
//!
//! Pure primitives for Face-to-Crypto claims: normalization, canonical
//! encoding, Ed25519 envelopes, and compact text encoding.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation over in-memory buffers; every type is `Send + Sync`.
//!
//! ## Key Types
//!
//! - [`RawRequest`] - A claim as entered by the seller
//! - [`CanonicalPayload`] - The compact 7-field payload that gets signed
//! - [`Envelope`] - Payload plus signature plus signer public key
//! - [`Keypair`] - Ed25519 signer identity
//! - [`ClaimId`] - Identifier used for replay detection
//!
//! ## Flow
//!
//! ```rust
//! use f2c_core::{build_envelope, normalize, verify_envelope, Keypair, RawRequest};
//!
//! let raw = RawRequest::new(
//!     "sui-mainnet",
//!     "0xABCDEF1234567890",
//!     "default",
//!     7.3,
//!     1_700_000_000_000,
//!     "n0nce-value",
//! )
//! .unwrap();
//!
//! let keypair = Keypair::generate().unwrap();
//! let envelope = build_envelope(normalize(&raw), &keypair);
//! assert!(verify_envelope(&envelope));
//! ```
//!
//! ## Canonicalization
//!
//! Payloads are encoded as whitespace-free JSON with a fixed top-level key
//! order. See [`canonical`] module.

pub mod canonical;
pub mod crypto;
pub mod encoding;
pub mod envelope;
pub mod error;
pub mod normalize;
pub mod payload;
pub mod registry;
pub mod types;
pub mod validation;

pub use canonical::{canonical_payload_bytes, canonical_payload_string, canonical_value};
pub use crypto::{Blake3Hash, Ed25519PublicKey, Ed25519Signature, Keypair};
pub use encoding::{decode, encode, encode_hex, encode_with, TextEncoding};
pub use envelope::{
    build_envelope, build_envelope_with, check_envelope, verify_envelope, verify_transport,
    Envelope,
};
pub use error::{CoreError, Result, SchemaError};
pub use normalize::normalize;
pub use payload::{AuxData, CanonicalPayload, RawRequest, PROTOCOL_VERSION};
pub use registry::{ChainId, SchemeId};
pub use types::ClaimId;
pub use validation::validate_payload;
