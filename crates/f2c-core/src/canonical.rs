//! Canonical JSON encoding for deterministic signing.
//!
//! Rules:
//! - The outermost object emits keys in the fixed order `v, c, s, i, r, e, n`,
//!   skipping absent keys
//! - Nested objects emit keys in ascending byte order
//! - Arrays keep element order
//! - Integers only, no fractions or exponents, in anything that gets signed
//! - Unsigned aux data may carry fractions, written in serde_json's shortest
//!   round-trip form
//! - One string escaping rule (below), no whitespace
//!
//! The canonical encoding is critical: the bytes produced here are exactly the
//! bytes that get signed, so every platform must produce the same output.

use serde_json::{Map, Value};

use crate::error::{CoreError, Result};
use crate::payload::CanonicalPayload;

/// How non-integer numbers are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Numbers {
    /// Reject fractions. Used for anything that gets signed.
    IntegersOnly,
    /// Write fractions in serde_json's shortest round-trip form.
    AllowFloats,
}

/// Key order of the outermost payload object.
pub const TOP_LEVEL_ORDER: [&str; 7] = ["v", "c", "s", "i", "r", "e", "n"];

/// Encode a typed payload to canonical bytes.
pub fn canonical_payload_bytes(payload: &CanonicalPayload) -> Vec<u8> {
    canonical_payload_string(payload).into_bytes()
}

/// Encode a typed payload to its canonical JSON text.
pub fn canonical_payload_string(payload: &CanonicalPayload) -> String {
    let mut buf = String::with_capacity(80);
    buf.push_str("{\"v\":");
    buf.push_str(&payload.v.to_string());
    buf.push_str(",\"c\":");
    write_string(&mut buf, &payload.c);
    buf.push_str(",\"s\":");
    write_string(&mut buf, &payload.s);
    buf.push_str(",\"i\":");
    buf.push_str(&payload.i.to_string());
    buf.push_str(",\"r\":");
    buf.push_str(&payload.r.to_string());
    buf.push_str(",\"e\":");
    buf.push_str(&payload.e.to_string());
    buf.push_str(",\"n\":");
    write_string(&mut buf, &payload.n);
    buf.push('}');
    buf
}

/// Encode an arbitrary JSON value as a payload root.
///
/// A root object uses [`TOP_LEVEL_ORDER`]; a root key outside that order is
/// rejected rather than dropped. Everything below the root is sorted.
pub fn canonical_payload_value(value: &Value) -> Result<String> {
    let mut buf = String::new();
    match value {
        Value::Object(map) => {
            if let Some(extra) = map.keys().find(|k| !TOP_LEVEL_ORDER.contains(&k.as_str())) {
                return Err(CoreError::NonCanonicalValue(format!(
                    "unexpected top-level key {:?}",
                    extra
                )));
            }
            buf.push('{');
            let mut first = true;
            for key in TOP_LEVEL_ORDER {
                if let Some(v) = map.get(key) {
                    if !first {
                        buf.push(',');
                    }
                    first = false;
                    write_string(&mut buf, key);
                    buf.push(':');
                    write_value(&mut buf, v, Numbers::IntegersOnly)?;
                }
            }
            buf.push('}');
        }
        other => write_value(&mut buf, other, Numbers::IntegersOnly)?,
    }
    Ok(buf)
}

/// Encode an arbitrary JSON value with sorted keys at every level.
///
/// Fractions are rejected.
pub fn canonical_value(value: &Value) -> Result<String> {
    let mut buf = String::new();
    write_value(&mut buf, value, Numbers::IntegersOnly)?;
    Ok(buf)
}

/// Encode unsigned aux data with sorted keys at every level.
///
/// Fractions are allowed here; the output never feeds a signature.
pub fn canonical_aux(map: &Map<String, Value>) -> String {
    let mut buf = String::new();
    // AllowFloats accepts every JSON value.
    let _ = write_sorted_object(&mut buf, map, Numbers::AllowFloats);
    buf
}

/// Recursively encode a value.
fn write_value(buf: &mut String, value: &Value, numbers: Numbers) -> Result<()> {
    match value {
        Value::Null => buf.push_str("null"),
        Value::Bool(b) => buf.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                buf.push_str(&u.to_string());
            } else if let Some(i) = n.as_i64() {
                buf.push_str(&i.to_string());
            } else if numbers == Numbers::AllowFloats {
                buf.push_str(&n.to_string());
            } else {
                return Err(CoreError::NonCanonicalValue(format!(
                    "non-integer number {}",
                    n
                )));
            }
        }
        Value::String(s) => write_string(buf, s),
        Value::Array(items) => {
            buf.push('[');
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    buf.push(',');
                }
                write_value(buf, item, numbers)?;
            }
            buf.push(']');
        }
        Value::Object(map) => write_sorted_object(buf, map, numbers)?,
    }
    Ok(())
}

/// Encode an object with keys in ascending byte order.
fn write_sorted_object(buf: &mut String, map: &Map<String, Value>, numbers: Numbers) -> Result<()> {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

    buf.push('{');
    for (idx, (key, value)) in entries.into_iter().enumerate() {
        if idx > 0 {
            buf.push(',');
        }
        write_string(buf, key);
        buf.push(':');
        write_value(buf, value, numbers)?;
    }
    buf.push('}');
    Ok(())
}

/// Quote and escape a string.
///
/// `"` and `\` are backslash-escaped; `\b \f \n \r \t` use their short forms;
/// other control characters below 0x20 use `\u00xx` with lowercase hex.
/// Everything else, including non-ASCII, is emitted as raw UTF-8.
pub(crate) fn write_string(buf: &mut String, s: &str) {
    buf.push('"');
    for ch in s.chars() {
        match ch {
            '"' => buf.push_str("\\\""),
            '\\' => buf.push_str("\\\\"),
            '\u{08}' => buf.push_str("\\b"),
            '\u{0c}' => buf.push_str("\\f"),
            '\n' => buf.push_str("\\n"),
            '\r' => buf.push_str("\\r"),
            '\t' => buf.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                buf.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => buf.push(c),
        }
    }
    buf.push('"');
}
