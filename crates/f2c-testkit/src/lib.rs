//! # F2C Testkit
//!
//! Testing utilities for F2C claims.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known requests with their expected canonical form
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: A deterministic signer with a populated key store
//!
//! ## Golden Vectors
//!
//! Golden vectors pin the canonical byte form across implementations:
//!
//! ```rust
//! use f2c_testkit::vectors::{all_vectors, envelope_from_vector};
//!
//! for vector in all_vectors() {
//!     let envelope = envelope_from_vector(&vector);
//!     assert_eq!(
//!         envelope.payload.canonical_bytes(),
//!         vector.expected_canonical.as_bytes()
//!     );
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use f2c_testkit::generators::{envelope_from_params, RequestParams};
//!
//! proptest! {
//!     #[test]
//!     fn envelopes_verify(params: RequestParams) {
//!         prop_assert!(f2c_core::verify_envelope(&envelope_from_params(&params)));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use f2c_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::with_seed([7; 32]);
//! let envelope = fixture.make_envelope(5.0, "abcd");
//! assert!(f2c_core::verify_envelope(&envelope));
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_party_fixtures, TestFixture};
pub use generators::{envelope_from_params, RequestParams};
pub use vectors::{all_vectors, envelope_from_vector, verify_all_vectors, GoldenVector};
