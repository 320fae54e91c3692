//! Wallet context: the signer's address and selected network.
//!
//! Passed explicitly to every service operation instead of living in a
//! process-wide wallet service.

use std::fmt;
use std::str::FromStr;

use f2c_core::ChainId;

use crate::error::F2cError;

/// A network the wallet can be pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
    Devnet,
}

/// Static endpoints for a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkConfig {
    pub network: Network,
    pub name: &'static str,
    pub display_name: &'static str,
    pub rpc_url: &'static str,
    pub explorer_url: &'static str,
}

const MAINNET: NetworkConfig = NetworkConfig {
    network: Network::Mainnet,
    name: "Mainnet",
    display_name: "Mainnet",
    rpc_url: "https://fullnode.mainnet.sui.io:443",
    explorer_url: "https://explorer.sui.io",
};

const TESTNET: NetworkConfig = NetworkConfig {
    network: Network::Testnet,
    name: "Testnet",
    display_name: "Testnet",
    rpc_url: "https://fullnode.testnet.sui.io:443",
    explorer_url: "https://explorer.sui.io/testnet",
};

const DEVNET: NetworkConfig = NetworkConfig {
    network: Network::Devnet,
    name: "Devnet",
    display_name: "Devnet",
    rpc_url: "https://fullnode.devnet.sui.io:443",
    explorer_url: "https://explorer.sui.io/devnet",
};

impl Network {
    /// Every known network, mainnet first.
    pub const ALL: &'static [Network] = &[Network::Mainnet, Network::Testnet, Network::Devnet];

    /// Short lowercase name, as accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
        }
    }

    /// Static endpoints for this network.
    pub fn config(self) -> &'static NetworkConfig {
        match self {
            Network::Mainnet => &MAINNET,
            Network::Testnet => &TESTNET,
            Network::Devnet => &DEVNET,
        }
    }

    /// The registered chain claims on this network are issued for.
    ///
    /// Only mainnet has one; claims cannot be issued on the others.
    pub fn chain(self) -> Option<ChainId> {
        match self {
            Network::Mainnet => Some(ChainId::SuiMainnet),
            Network::Testnet | Network::Devnet => None,
        }
    }
}

impl FromStr for Network {
    type Err = F2cError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|n| n.as_str() == s)
            .ok_or_else(|| F2cError::UnknownNetwork(s.to_string()))
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The current wallet address and network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletContext {
    pub address: String,
    pub network: Network,
}

impl WalletContext {
    /// Create a context for `address` on `network`.
    pub fn new(address: impl Into<String>, network: Network) -> Self {
        Self {
            address: address.into(),
            network,
        }
    }

    /// Endpoints for the context's network.
    pub fn network_config(&self) -> &'static NetworkConfig {
        self.network.config()
    }

    /// Explorer link for a transaction on this context's network.
    pub fn explorer_tx_url(&self, tx_id: &str) -> String {
        format!("{}/tx/{}", self.network_config().explorer_url, tx_id)
    }
}
