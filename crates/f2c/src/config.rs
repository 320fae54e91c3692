//! Service configuration.

use std::time::Duration;

use f2c_core::TextEncoding;

/// Configuration shared by [`Issuer`](crate::Issuer) and
/// [`Verifier`](crate::Verifier).
#[derive(Debug, Clone)]
pub struct F2cConfig {
    /// Text form for signatures and keys in issued envelopes.
    pub text_encoding: TextEncoding,
    /// Expiry offset applied by `Issuer::issue_now`.
    pub default_ttl: Duration,
    /// Whether the verifier rejects expired claims.
    pub enforce_expiry: bool,
    /// Whether the verifier rejects claims it has already accepted.
    pub replay_protection: bool,
    /// Number of accepted claims remembered for replay detection.
    pub replay_capacity: usize,
}

impl Default for F2cConfig {
    fn default() -> Self {
        Self {
            text_encoding: TextEncoding::Base64,
            default_ttl: Duration::from_secs(5 * 60),
            enforce_expiry: true,
            replay_protection: true,
            replay_capacity: 4096,
        }
    }
}
