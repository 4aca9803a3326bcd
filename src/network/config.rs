// Deployment configuration (JSON file)

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Network;
use crate::contracts::{Greeting, LendingPool, NftCollection};
use crate::core::ObjectId;

const GREETING_PACKAGE: &str = "0x90360482007f07a3e43cee6975ec1f23b8e9676c9b2fc9752c132b91888db018";
const GREETING_OBJECT: &str = "0x1efdab5881e176130813d2fdf36fd5206d9f5c01e72a01118ff232d51a7dd50b";
const NFT_PACKAGE: &str = "0x430f25df7e6d52c4f68798248ede62adfd16b73bea4496224a666c4be1ee4aa1";
const DEFI_PACKAGE: &str = "0xff458614c6a15f53e710e9a93ff2437a8d4afd724f527a9740233dad77759ed5";
const DEFI_POOL: &str = "0x8257dacc05b5c72cfe5725c73840dfe984fb826f4b1327cc10a1262e32611af6";

/// Active network plus the ids of the deployed packages and shared objects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: Network,
    pub greeting_package: ObjectId,
    pub greeting_object: ObjectId,
    pub nft_package: ObjectId,
    pub defi_package: ObjectId,
    pub defi_pool: ObjectId,
}

fn known_id(hex: &str) -> ObjectId {
    ObjectId::from_hex(hex).unwrap_or_default()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: Network::default(),
            greeting_package: known_id(GREETING_PACKAGE),
            greeting_object: known_id(GREETING_OBJECT),
            nft_package: known_id(NFT_PACKAGE),
            defi_package: known_id(DEFI_PACKAGE),
            defi_pool: known_id(DEFI_POOL),
        }
    }
}

impl Config {
    /// Load config from file; a missing file yields the defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No config at {}, using built-in deployments", path.display());
            return Ok(Self::default());
        }

        log::info!("Loading config from {}", path.display());
        let json = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        serde_json::from_str(&json)
            .map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Save config to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, json)
            .map_err(|e| format!("Failed to write config file: {}", e))
    }

    pub fn greeting(&self) -> Greeting {
        Greeting::new(self.greeting_package, self.greeting_object)
    }

    pub fn nft(&self) -> NftCollection {
        NftCollection::new(self.nft_package)
    }

    pub fn lending_pool(&self) -> LendingPool {
        LendingPool::new(self.defi_package, self.defi_pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("move-args-{}-{}.json", std::process::id(), name))
    }

    #[test]
    fn test_default_deployments() {
        let config = Config::default();
        assert_eq!(config.network, Network::Devnet);
        assert_eq!(config.greeting_package.to_hex(), GREETING_PACKAGE);
        assert_eq!(config.defi_pool.to_hex(), DEFI_POOL);
        assert_eq!(config.lending_pool().pool(), config.defi_pool);
        assert_eq!(config.greeting().object(), config.greeting_object);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load(temp_path("missing")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("roundtrip");
        let mut config = Config::default();
        config.network = Network::Testnet;
        config.nft_package = ObjectId::from_hex("0x5").unwrap();

        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = temp_path("partial");
        fs::write(&path, r#"{ "network": "mainnet" }"#).unwrap();
        let loaded = Config::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded.network, Network::Mainnet);
        assert_eq!(loaded.defi_package, Config::default().defi_package);
    }

    #[test]
    fn test_invalid_file() {
        let path = temp_path("invalid");
        fs::write(&path, r#"{ "defi_pool": "0xnothex" }"#).unwrap();
        let result = Config::load(&path);
        fs::remove_file(&path).ok();

        assert!(result.unwrap_err().contains("Failed to parse config file"));
    }
}
