//! Payload schema validation.

use crate::error::SchemaError;
use crate::payload::{CanonicalPayload, NONCE_LEN, PROTOCOL_VERSION, SELLER_TAG_LEN};
use crate::registry::{ChainId, SchemeId};

/// Maximum reward percentage on the wire.
pub const MAX_WIRE_REWARD: u8 = 100;

/// Validate a payload against the compact schema.
///
/// This performs:
/// - Version check
/// - Chain and scheme tag lookup
/// - Reward range
/// - Seller tag and nonce lengths (in characters)
pub fn validate_payload(payload: &CanonicalPayload) -> Result<(), SchemaError> {
    if payload.v != PROTOCOL_VERSION {
        return Err(SchemaError::UnsupportedVersion(payload.v));
    }

    if ChainId::from_tag(&payload.c).is_none() {
        return Err(SchemaError::UnknownChainTag(payload.c.clone()));
    }

    if SchemeId::from_tag(payload.i).is_none() {
        return Err(SchemaError::UnknownSchemeTag(payload.i));
    }

    if payload.r > MAX_WIRE_REWARD {
        return Err(SchemaError::RewardOutOfRange(payload.r));
    }

    let seller_len = payload.s.chars().count();
    if seller_len > SELLER_TAG_LEN {
        return Err(SchemaError::SellerTagTooLong(seller_len));
    }

    let nonce_len = payload.n.chars().count();
    if nonce_len != NONCE_LEN {
        return Err(SchemaError::NonceLength(nonce_len));
    }

    Ok(())
}
