//! Golden test vectors for deterministic verification.
//!
//! Each vector pins the canonical string a request must normalize to. Any
//! other implementation that signs the same bytes interoperates.

use f2c_core::{build_envelope, normalize, Envelope, Keypair, RawRequest};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Seed for deterministic key generation.
    pub seed: [u8; 32],
    pub seller: &'static str,
    pub reward_pct: f64,
    /// Expiry, Unix milliseconds.
    pub expires_at_ms: u64,
    pub nonce: &'static str,
    /// Expected canonical payload string.
    pub expected_canonical: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "reference claim",
            seed: [0x42; 32],
            seller: "0xABCDEF1234567890",
            reward_pct: 7.3,
            expires_at_ms: 1_700_000_000_000,
            nonce: "n0nce-value",
            expected_canonical: r#"{"v":1,"c":"aqy","s":"34567890","i":1,"r":7,"e":1700000000,"n":"n0nc"}"#,
        },
        GoldenVector {
            name: "short seller, reward floor, padded nonce",
            seed: [0x00; 32],
            seller: "0xab",
            reward_pct: 0.0,
            expires_at_ms: 999,
            nonce: "x",
            expected_canonical: r#"{"v":1,"c":"aqy","s":"0xab","i":1,"r":3,"e":0,"n":"x000"}"#,
        },
        GoldenVector {
            name: "non-ascii seller, reward ceiling, escaped nonce",
            seed: [0x01; 32],
            seller: "merchant-ünïcode",
            reward_pct: 250.0,
            expires_at_ms: 1_800_000_000_999,
            nonce: "ab\"cd",
            expected_canonical: r#"{"v":1,"c":"aqy","s":"-ünïcode","i":1,"r":100,"e":1800000000,"n":"ab\"c"}"#,
        },
        GoldenVector {
            name: "half percent rounds up",
            seed: [0xFF; 32],
            seller: "0x1234567890abcdef1234567890abcdef",
            reward_pct: 12.5,
            expires_at_ms: 1_700_000_123_456,
            nonce: "zzzz",
            expected_canonical: r#"{"v":1,"c":"aqy","s":"90abcdef","i":1,"r":13,"e":1700000123,"n":"zzzz"}"#,
        },
    ]
}

/// Build the raw request a vector describes.
pub fn request_from_vector(vector: &GoldenVector) -> RawRequest {
    RawRequest {
        chain: f2c_core::ChainId::SuiMainnet,
        seller: vector.seller.to_string(),
        scheme: f2c_core::SchemeId::Default,
        reward_pct: vector.reward_pct,
        metadata: Default::default(),
        expires_at_ms: vector.expires_at_ms,
        nonce: vector.nonce.to_string(),
    }
}

/// Normalize and sign a vector with its seed.
pub fn envelope_from_vector(vector: &GoldenVector) -> Envelope {
    let keypair = Keypair::from_seed(&vector.seed);
    build_envelope(normalize(&request_from_vector(vector)), &keypair)
}

/// Check every vector's canonical form.
///
/// Returns `(name, matches, actual canonical string)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let envelope = envelope_from_vector(v);
            let actual = String::from_utf8_lossy(&envelope.payload.canonical_bytes()).into_owned();
            (v.name.to_string(), actual == v.expected_canonical, actual)
        })
        .collect()
}

/// RFC 8032 section 7.1, test 1: the empty message.
pub struct Rfc8032Vector {
    pub secret_key: &'static str,
    pub public_key: &'static str,
    pub message: &'static str,
    pub signature: &'static str,
}

pub const RFC8032_TEST1: Rfc8032Vector = Rfc8032Vector {
    secret_key: "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60",
    public_key: "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a",
    message: "",
    signature: "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e065\
                224901555fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b",
};

impl Rfc8032Vector {
    /// Decode the hex fields: `(secret, public, message, signature)`.
    pub fn decode(&self) -> (Vec<u8>, Vec<u8>, Vec<u8>, Vec<u8>) {
        let decode = |s: &str| hex::decode(s).unwrap_or_default();
        (
            decode(self.secret_key),
            decode(self.public_key),
            decode(self.message),
            decode(self.signature),
        )
    }
}
