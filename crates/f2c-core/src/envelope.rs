//! Signed claim envelope.
//!
//! An envelope binds a canonical payload to an Ed25519 signature and the
//! signer's public key, both text-encoded so the whole thing fits in a QR code.
//! Auxiliary data rides along unsigned.

use serde::{Deserialize, Serialize};
use serde_json::error::Category;

use crate::canonical::{canonical_aux, canonical_payload_string, write_string};
use crate::crypto::{Ed25519PublicKey, Ed25519Signature, Keypair};
use crate::encoding::{decode, encode_with, TextEncoding};
use crate::error::{CoreError, Result, SchemaError};
use crate::payload::{AuxData, CanonicalPayload};
use crate::types::ClaimId;
use crate::validation::validate_payload;

/// A signed claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Envelope {
    /// The signed payload.
    pub payload: CanonicalPayload,

    /// Text-encoded 64-byte signature over the payload's canonical bytes.
    pub sig: String,

    /// Text-encoded 32-byte signer public key.
    #[serde(rename = "pubKey")]
    pub pub_key: String,

    /// Unsigned auxiliary data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aux: Option<AuxData>,
}

impl Envelope {
    /// Attach unsigned auxiliary data. Empty data is dropped.
    pub fn with_aux(mut self, aux: AuxData) -> Self {
        self.aux = if aux.is_empty() { None } else { Some(aux) };
        self
    }

    /// Decode the embedded public key.
    pub fn public_key(&self) -> Result<Ed25519PublicKey> {
        Ed25519PublicKey::from_slice(&decode(&self.pub_key)?)
    }

    /// Decode the embedded signature.
    pub fn signature(&self) -> Result<Ed25519Signature> {
        Ed25519Signature::from_slice(&decode(&self.sig)?)
    }

    /// Identifier of this claim, derived from signer and payload.
    pub fn claim_id(&self) -> Result<ClaimId> {
        Ok(ClaimId::derive(&self.public_key()?, &self.payload))
    }

    /// Serialize to the canonical transport text.
    ///
    /// Keys are sorted (`aux`, `payload`, `pubKey`, `sig`); the payload keeps
    /// its fixed field order. Fractional numbers in aux data are written in
    /// serde_json's shortest round-trip form.
    pub fn to_transport(&self) -> String {
        let mut buf = String::with_capacity(256);
        buf.push('{');
        if let Some(aux) = &self.aux {
            buf.push_str("\"aux\":");
            buf.push_str(&canonical_aux(&aux.0));
            buf.push(',');
        }
        buf.push_str("\"payload\":");
        buf.push_str(&canonical_payload_string(&self.payload));
        buf.push_str(",\"pubKey\":");
        write_string(&mut buf, &self.pub_key);
        buf.push_str(",\"sig\":");
        write_string(&mut buf, &self.sig);
        buf.push('}');
        buf
    }

    /// Parse transport text.
    ///
    /// Malformed JSON is a `Decode` error; well-formed JSON with the wrong
    /// shape (missing fields, wrong types, unknown keys) is a `Schema` error.
    /// The result is not verified.
    pub fn from_transport(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| match e.classify() {
            Category::Data => CoreError::Schema(SchemaError::Malformed(e.to_string())),
            Category::Io | Category::Syntax | Category::Eof => CoreError::Decode(e.to_string()),
        })
    }
}

/// Build an envelope with base64 encoding.
pub fn build_envelope(payload: CanonicalPayload, keypair: &Keypair) -> Envelope {
    build_envelope_with(payload, keypair, TextEncoding::Base64)
}

/// Build an envelope with the given text encoding.
///
/// Signs exactly the payload's canonical bytes.
pub fn build_envelope_with(
    payload: CanonicalPayload,
    keypair: &Keypair,
    encoding: TextEncoding,
) -> Envelope {
    let message = payload.canonical_bytes();
    let signature = keypair.sign(&message);
    let public_key = keypair.public_key();

    Envelope {
        payload,
        sig: encode_with(signature.as_bytes(), encoding),
        pub_key: encode_with(public_key.as_bytes(), encoding),
        aux: None,
    }
}

/// Verify an envelope, reporting why it failed.
///
/// This performs:
/// - Payload schema validation
/// - Public key and signature decoding
/// - Re-serialization of the payload
/// - Ed25519 verification
///
/// Returns the signer's public key on success.
pub fn check_envelope(envelope: &Envelope) -> Result<Ed25519PublicKey> {
    validate_payload(&envelope.payload)?;

    let public_key = envelope.public_key()?;
    let signature = envelope.signature()?;
    let message = envelope.payload.canonical_bytes();

    public_key.verify(&message, &signature)?;
    Ok(public_key)
}

/// Verify an envelope. Any failure is `false`.
pub fn verify_envelope(envelope: &Envelope) -> bool {
    check_envelope(envelope).is_ok()
}

/// Parse and verify transport text. Any failure is `false`.
pub fn verify_transport(text: &str) -> bool {
    Envelope::from_transport(text)
        .map(|envelope| verify_envelope(&envelope))
        .unwrap_or(false)
}
