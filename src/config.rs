//! App Configuration
//!
//! Network endpoints and the published module address. Built once at
//! startup and passed in explicitly; nothing here is ambient state.

/// Address the `todolist` module is published under (devnet deployment).
pub const MODULE_ADDRESS: &str =
    "c9946781d09715fccb12d9544ce87453921bca802ea3cfb6262fd758f3c43ac4";

const EXPLORER_BASE: &str = "https://explorer.aptoslabs.com";

/// Which chain the app talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Devnet,
    Testnet,
    Mainnet,
}

impl Network {
    pub fn fullnode_url(&self) -> &'static str {
        match self {
            Network::Devnet => "https://fullnode.devnet.aptoslabs.com",
            Network::Testnet => "https://fullnode.testnet.aptoslabs.com",
            Network::Mainnet => "https://fullnode.mainnet.aptoslabs.com",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub network: Network,
    pub module_address: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            network: Network::Devnet,
            module_address: MODULE_ADDRESS.to_string(),
        }
    }
}

impl AppConfig {
    /// Explorer page for an account.
    pub fn explorer_account_url(&self, address: &str) -> String {
        format!("{}/account/{}/", EXPLORER_BASE, address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explorer_url() {
        let config = AppConfig::default();
        assert_eq!(
            config.explorer_account_url("0x1a2b"),
            "https://explorer.aptoslabs.com/account/0x1a2b/"
        );
    }

    #[test]
    fn test_default_targets_devnet() {
        let config = AppConfig::default();
        assert_eq!(
            config.network.fullnode_url(),
            "https://fullnode.devnet.aptoslabs.com"
        );
        assert_eq!(config.module_address, MODULE_ADDRESS);
    }
}
