// Network selection and deployment configuration

mod config;

pub use config::Config;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::TransactionDigest;

/// Sui network the call plans are meant for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Devnet,
    Testnet,
    Mainnet,
    Localnet,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Devnet => "devnet",
            Network::Testnet => "testnet",
            Network::Mainnet => "mainnet",
            Network::Localnet => "localnet",
        }
    }

    /// JSON-RPC endpoint of the public full node
    pub fn fullnode_url(&self) -> String {
        match self {
            Network::Localnet => "http://127.0.0.1:9000".to_string(),
            _ => format!("https://fullnode.{}.sui.io:443", self.as_str()),
        }
    }

    /// Block explorer base URL, if the network has a public one
    pub fn explorer_url(&self) -> Option<&'static str> {
        match self {
            Network::Mainnet => Some("https://suivision.xyz"),
            Network::Testnet => Some("https://testnet.suivision.xyz"),
            Network::Devnet | Network::Localnet => None,
        }
    }

    /// Explorer page for a transaction
    pub fn explorer_tx_url(&self, digest: &TransactionDigest) -> Option<String> {
        self.explorer_url()
            .map(|base| format!("{}/txblock/{}", base, digest))
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "devnet" => Ok(Network::Devnet),
            "testnet" => Ok(Network::Testnet),
            "mainnet" => Ok(Network::Mainnet),
            "localnet" | "local" => Ok(Network::Localnet),
            other => Err(format!("Unknown network: {}", other)),
        }
    }
}
