//! Compact binary-to-text encoding for QR transport.
//!
//! Base64 is the primary form. `hex:`-prefixed lowercase hex is the fallback
//! for environments without a base64 primitive. Decoding detects the form.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::error::{CoreError, Result};

/// Prefix marking the hex fallback form.
pub const HEX_PREFIX: &str = "hex:";

/// Which text form to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// Standard base64 with padding.
    #[default]
    Base64,
    /// `hex:` followed by lowercase hex.
    Hex,
}

/// Encode bytes in the primary (base64) form.
///
/// Base64 output made only of hex digits would be read back as hex by
/// [`decode`], so such output is emitted in the prefixed hex form instead.
pub fn encode(bytes: &[u8]) -> String {
    let text = BASE64.encode(bytes);
    if is_bare_hex(&text) {
        encode_hex(bytes)
    } else {
        text
    }
}

/// Encode bytes in the prefixed hex form.
pub fn encode_hex(bytes: &[u8]) -> String {
    format!("{}{}", HEX_PREFIX, hex::encode(bytes))
}

/// Encode bytes in the requested form.
pub fn encode_with(bytes: &[u8], encoding: TextEncoding) -> String {
    match encoding {
        TextEncoding::Base64 => encode(bytes),
        TextEncoding::Hex => encode_hex(bytes),
    }
}

/// Decode text produced by any supported form.
///
/// Detection order: `hex:` prefix, then bare hex digits, then base64.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    if let Some(rest) = text.strip_prefix(HEX_PREFIX) {
        return hex::decode(rest).map_err(|e| CoreError::Decode(format!("invalid hex: {}", e)));
    }
    if is_bare_hex(text) {
        return hex::decode(text).map_err(|e| CoreError::Decode(format!("invalid hex: {}", e)));
    }
    BASE64
        .decode(text)
        .map_err(|e| CoreError::Decode(format!("invalid base64: {}", e)))
}

fn is_bare_hex(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_base64_primary() {
        assert_eq!(encode(b"hello"), "aGVsbG8=");
        assert_eq!(decode("aGVsbG8=").unwrap(), b"hello");
    }

    #[test]
    fn test_hex_forms() {
        assert_eq!(encode_hex(&[0xde, 0xad]), "hex:dead");
        assert_eq!(decode("hex:dead").unwrap(), vec![0xde, 0xad]);
        assert_eq!(decode("hex:DEAD").unwrap(), vec![0xde, 0xad]);
        // Bare hex digits are read as hex.
        assert_eq!(decode("beef").unwrap(), vec![0xbe, 0xef]);
    }

    #[test]
    fn test_hex_looking_base64_falls_back() {
        // base64 of these bytes is "0000", which decode() would read as hex.
        let bytes = [0xd3, 0x4d, 0x34];
        assert_eq!(BASE64.encode(bytes), "0000");
        let text = encode(&bytes);
        assert_eq!(text, "hex:d34d34");
        assert_eq!(decode(&text).unwrap(), bytes);
    }

    #[test]
    fn test_empty() {
        assert_eq!(encode(&[]), "");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
        assert_eq!(decode("hex:").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_malformed_rejected() {
        assert!(matches!(decode("hex:abc"), Err(CoreError::Decode(_))));
        assert!(matches!(decode("hex:zz"), Err(CoreError::Decode(_))));
        assert!(matches!(decode("abc"), Err(CoreError::Decode(_))));
        assert!(matches!(decode("not base64!"), Err(CoreError::Decode(_))));
        assert!(matches!(decode("aGVsbG8"), Err(CoreError::Decode(_))));
    }

    #[test]
    fn test_encode_with() {
        assert_eq!(encode_with(b"hi", TextEncoding::Base64), "aGk=");
        assert_eq!(encode_with(b"hi", TextEncoding::Hex), "hex:6869");
    }

    proptest! {
        #[test]
        fn prop_roundtrip(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
            prop_assert_eq!(decode(&encode(&bytes)).unwrap(), bytes.clone());
            prop_assert_eq!(decode(&encode_hex(&bytes)).unwrap(), bytes);
        }
    }
}
