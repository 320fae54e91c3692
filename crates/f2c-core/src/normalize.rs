//! Field normalization: raw request → canonical payload.
//!
//! Every function here is total. Out-of-range input is clamped, truncated or
//! padded, never rejected.

use crate::payload::{
    CanonicalPayload, RawRequest, MAX_REWARD_PCT, MIN_REWARD_PCT, NONCE_LEN, NONCE_PAD,
    PROTOCOL_VERSION, SELLER_TAG_LEN,
};

/// Normalize a raw request into the compact signed schema.
///
/// Metadata is dropped here.
pub fn normalize(raw: &RawRequest) -> CanonicalPayload {
    CanonicalPayload {
        v: PROTOCOL_VERSION,
        c: raw.chain.tag().to_string(),
        s: seller_tag(&raw.seller),
        i: raw.scheme.tag(),
        r: reward_tag(raw.reward_pct),
        e: expiry_secs(raw.expires_at_ms),
        n: nonce_tag(&raw.nonce),
    }
}

/// Clamp a reward percentage to `[3, 100]` and round to 2 decimal places.
///
/// NaN is treated as 0 and therefore lands on the floor.
pub fn round_reward_pct(value: f64) -> f64 {
    let value = if value.is_nan() { 0.0 } else { value };
    let clamped = value.clamp(MIN_REWARD_PCT, MAX_REWARD_PCT);
    (clamped * 100.0).round() / 100.0
}

/// Integer reward percentage for the wire.
pub fn reward_tag(value: f64) -> u8 {
    // round_reward_pct bounds the value to [3, 100]
    round_reward_pct(value).round() as u8
}

/// Keep the last 8 characters of the seller identifier.
pub fn seller_tag(seller: &str) -> String {
    let count = seller.chars().count();
    seller.chars().skip(count.saturating_sub(SELLER_TAG_LEN)).collect()
}

/// Keep the first 4 characters of the nonce, right-padding short input.
pub fn nonce_tag(nonce: &str) -> String {
    nonce
        .chars()
        .chain(std::iter::repeat(NONCE_PAD))
        .take(NONCE_LEN)
        .collect()
}

/// Milliseconds to whole seconds, rounding down.
pub fn expiry_secs(expires_at_ms: u64) -> u64 {
    expires_at_ms / 1000
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ChainId, SchemeId};
    use proptest::prelude::*;

    fn request(seller: &str, reward_pct: f64, expires_at_ms: u64, nonce: &str) -> RawRequest {
        RawRequest::new("sui-mainnet", seller, "default", reward_pct, expires_at_ms, nonce)
            .unwrap()
    }

    #[test]
    fn test_reference_scenario() {
        let raw = request("0xABCDEF1234567890", 7.3, 1_700_000_000_000, "n0nce-value");
        let payload = normalize(&raw);

        assert_eq!(payload.v, 1);
        assert_eq!(payload.c, "aqy");
        assert_eq!(payload.s, "34567890");
        assert_eq!(payload.i, 1);
        assert_eq!(payload.r, 7);
        assert_eq!(payload.e, 1_700_000_000);
        assert_eq!(payload.n, "n0nc");
    }

    #[test]
    fn test_reward_clamping() {
        assert_eq!(round_reward_pct(0.0), 3.0);
        assert_eq!(round_reward_pct(-50.0), 3.0);
        assert_eq!(round_reward_pct(250.0), 100.0);
        assert_eq!(round_reward_pct(f64::NAN), 3.0);
        assert_eq!(round_reward_pct(f64::INFINITY), 100.0);
        assert_eq!(round_reward_pct(f64::NEG_INFINITY), 3.0);
        assert_eq!(round_reward_pct(12.345678), 12.35);
    }

    #[test]
    fn test_reward_tag_rounding() {
        assert_eq!(reward_tag(7.3), 7);
        assert_eq!(reward_tag(7.5), 8);
        assert_eq!(reward_tag(7.49), 7);
        assert_eq!(reward_tag(2.9), 3);
        assert_eq!(reward_tag(99.6), 100);
    }

    #[test]
    fn test_seller_tag_uses_suffix() {
        assert_eq!(seller_tag("0xABCDEF1234567890"), "34567890");
        assert_eq!(seller_tag("short"), "short");
        assert_eq!(seller_tag(""), "");
        assert_eq!(seller_tag("ééééééééé"), "éééééééé");
    }

    #[test]
    fn test_nonce_truncation_and_padding() {
        assert_eq!(nonce_tag("n0nce-value"), "n0nc");
        assert_eq!(nonce_tag("ab"), "ab00");
        assert_eq!(nonce_tag(""), "0000");
        assert_eq!(nonce_tag("abcd"), "abcd");
    }

    #[test]
    fn test_expiry_floor_division() {
        assert_eq!(expiry_secs(1_700_000_000_999), 1_700_000_000);
        assert_eq!(expiry_secs(999), 0);
    }

    #[test]
    fn test_metadata_is_dropped() {
        let mut raw = request("0xABCDEF1234567890", 7.3, 1_700_000_000_000, "n0nce");
        let before = normalize(&raw);
        raw.metadata.insert("note", serde_json::json!("thanks"));
        assert_eq!(normalize(&raw), before);
        assert_eq!(before.chain(), Some(ChainId::SuiMainnet));
        assert_eq!(before.scheme(), Some(SchemeId::Default));
    }

    proptest! {
        #[test]
        fn prop_normalize_satisfies_ranges(
            seller in ".{0,40}",
            reward in proptest::num::f64::ANY,
            expires in any::<u64>(),
            nonce in ".{0,12}",
        ) {
            let payload = normalize(&request(&seller, reward, expires, &nonce));
            prop_assert!((3..=100).contains(&payload.r));
            prop_assert_eq!(payload.n.chars().count(), NONCE_LEN);
            prop_assert!(payload.s.chars().count() <= SELLER_TAG_LEN);
            prop_assert_eq!(payload.v, PROTOCOL_VERSION);
        }

        #[test]
        fn prop_normalize_is_deterministic(
            seller in ".{0,40}",
            reward in -1000.0f64..1000.0,
            nonce in ".{0,12}",
        ) {
            let raw = request(&seller, reward, 1_700_000_000_000, &nonce);
            prop_assert_eq!(normalize(&raw), normalize(&raw));
        }
    }
}
