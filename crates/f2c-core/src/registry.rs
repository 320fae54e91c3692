//! Chain and reward-scheme registry.
//!
//! Human-readable identifiers are mapped to compact wire tags. Lookups fail
//! closed: an identifier that is not listed here never maps to a default tag.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A chain known to the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainId {
    /// Sui mainnet, carried on the wire as `"aqy"`.
    SuiMainnet,
}

impl ChainId {
    /// Every registered chain.
    pub const ALL: &'static [ChainId] = &[ChainId::SuiMainnet];

    /// The human-readable identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            ChainId::SuiMainnet => "sui-mainnet",
        }
    }

    /// The compact wire tag.
    pub fn tag(self) -> &'static str {
        match self {
            ChainId::SuiMainnet => "aqy",
        }
    }

    /// Look up a chain by its wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.tag() == tag)
    }
}

impl FromStr for ChainId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::UnknownChain(s.to_string()))
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reward scheme known to the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeId {
    /// The default reward scheme, wire tag `1`.
    Default,
}

impl SchemeId {
    /// Every registered scheme.
    pub const ALL: &'static [SchemeId] = &[SchemeId::Default];

    /// The human-readable identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            SchemeId::Default => "default",
        }
    }

    /// The compact wire tag.
    pub fn tag(self) -> u32 {
        match self {
            SchemeId::Default => 1,
        }
    }

    /// Look up a scheme by its wire tag.
    pub fn from_tag(tag: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.tag() == tag)
    }
}

impl FromStr for SchemeId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|scheme| scheme.as_str() == s)
            .ok_or_else(|| CoreError::UnknownScheme(s.to_string()))
    }
}

impl fmt::Display for SchemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
