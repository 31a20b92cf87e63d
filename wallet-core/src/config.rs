// wallet-core/src/config.rs
//
// Wallet configuration from environment variables

use crate::chains::Network;
use crate::network::NetworkInfo;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_SOLANA_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
pub const DEFAULT_ETHEREUM_RPC_URL: &str = "https://eth.llamarpc.com";
pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletConfig {
    pub solana_rpc_url: String,
    pub ethereum_rpc_url: String,
    /// Per-request HTTP timeout
    pub rpc_timeout_secs: u64,
    /// Where the session store lives; `None` keeps it in memory
    pub session_file: Option<PathBuf>,
}

impl WalletConfig {
    /// Load configuration from environment variables
    ///
    /// - `SOLANA_RPC_URL`: Solana JSON-RPC endpoint
    /// - `ETHEREUM_RPC_URL`: Ethereum JSON-RPC endpoint
    /// - `RPC_TIMEOUT_SECS`: request timeout in seconds (default 30)
    /// - `WALLET_SESSION_FILE`: JSON file backing the session store (optional)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let rpc_timeout_secs = match non_empty("RPC_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    tracing::warn!(value = %raw, "invalid RPC_TIMEOUT_SECS, using default");
                    defaults.rpc_timeout_secs
                }
            },
            None => defaults.rpc_timeout_secs,
        };

        let config = Self {
            solana_rpc_url: non_empty("SOLANA_RPC_URL").unwrap_or(defaults.solana_rpc_url),
            ethereum_rpc_url: non_empty("ETHEREUM_RPC_URL").unwrap_or(defaults.ethereum_rpc_url),
            rpc_timeout_secs,
            session_file: non_empty("WALLET_SESSION_FILE").map(PathBuf::from),
        };

        tracing::debug!(
            solana = %config.solana_rpc_url,
            ethereum = %config.ethereum_rpc_url,
            timeout_secs = config.rpc_timeout_secs,
            "loaded wallet config"
        );
        config
    }

    pub fn rpc_timeout(&self) -> Duration {
        Duration::from_secs(self.rpc_timeout_secs)
    }

    pub fn rpc_url(&self, network: Network) -> &str {
        match network {
            Network::Solana => &self.solana_rpc_url,
            Network::Ethereum => &self.ethereum_rpc_url,
        }
    }

    pub fn network_info(&self, network: Network) -> NetworkInfo {
        NetworkInfo::new(network, self.rpc_url(network))
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            solana_rpc_url: DEFAULT_SOLANA_RPC_URL.to_string(),
            ethereum_rpc_url: DEFAULT_ETHEREUM_RPC_URL.to_string(),
            rpc_timeout_secs: DEFAULT_RPC_TIMEOUT_SECS,
            session_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = WalletConfig::from_lookup(lookup(&[]));
        assert_eq!(config, WalletConfig::default());
        assert_eq!(config.rpc_timeout(), Duration::from_secs(30));
        assert!(config.session_file.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = WalletConfig::from_lookup(lookup(&[
            ("SOLANA_RPC_URL", "http://localhost:8899"),
            ("ETHEREUM_RPC_URL", "http://localhost:8545"),
            ("RPC_TIMEOUT_SECS", "5"),
            ("WALLET_SESSION_FILE", "/tmp/session.json"),
        ]));
        assert_eq!(config.rpc_url(Network::Solana), "http://localhost:8899");
        assert_eq!(config.rpc_url(Network::Ethereum), "http://localhost:8545");
        assert_eq!(config.rpc_timeout_secs, 5);
        assert_eq!(config.session_file, Some(PathBuf::from("/tmp/session.json")));
    }

    #[test]
    fn test_bad_timeout_falls_back() {
        for raw in ["abc", "0", "-3"] {
            let config = WalletConfig::from_lookup(lookup(&[("RPC_TIMEOUT_SECS", raw)]));
            assert_eq!(config.rpc_timeout_secs, DEFAULT_RPC_TIMEOUT_SECS);
        }
    }

    #[test]
    fn test_empty_values_use_defaults() {
        let config = WalletConfig::from_lookup(lookup(&[("SOLANA_RPC_URL", "  ")]));
        assert_eq!(config.solana_rpc_url, DEFAULT_SOLANA_RPC_URL);
    }

    #[test]
    fn test_network_info() {
        let info = WalletConfig::default().network_info(Network::Ethereum);
        assert_eq!(info.rpc_url, DEFAULT_ETHEREUM_RPC_URL);
        assert_eq!(info.native_symbol, "ETH");
    }
}
