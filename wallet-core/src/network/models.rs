// wallet-core/src/network/models.rs
//
// Balance and endpoint descriptions shared by both networks.
//
// Amounts are carried as decimal strings of the smallest unit (lamports, wei)
// so that an 18-decimal balance never passes through a float before display.

use crate::chains::Network;
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

// =============================================================================
// ENDPOINT
// =============================================================================

/// One network's RPC endpoint as the fetcher sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInfo {
    pub network: Network,
    /// e.g. "Ethereum Mainnet"
    pub name: String,
    pub native_symbol: String,
    pub native_decimals: u8,
    pub rpc_url: String,
}

impl NetworkInfo {
    pub fn new(network: Network, rpc_url: impl Into<String>) -> Self {
        Self {
            network,
            name: format!("{} Mainnet", network.display_name()),
            native_symbol: network.symbol().to_string(),
            native_decimals: network.decimals(),
            rpc_url: rpc_url.into(),
        }
    }
}

// =============================================================================
// BALANCE
// =============================================================================

/// Native balance of one address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    /// Smallest unit, base-10 digits without leading zeros
    pub raw: String,
    /// Exact decimal rendering, e.g. "1.5"
    pub formatted: String,
    pub symbol: String,
    pub decimals: u8,
}

impl Balance {
    pub fn new(raw: &BigUint, decimals: u8, symbol: impl Into<String>) -> Self {
        let raw = raw.to_str_radix(10);
        let formatted = Self::format_balance(&raw, decimals);
        Self {
            raw,
            formatted,
            symbol: symbol.into(),
            decimals,
        }
    }

    /// Lamports → SOL balance
    pub fn from_lamports(lamports: u64) -> Self {
        Self::new(&BigUint::from(lamports), Network::Solana.decimals(), Network::Solana.symbol())
    }

    /// Wei → ETH balance
    pub fn from_wei(wei: &BigUint) -> Self {
        Self::new(wei, Network::Ethereum.decimals(), Network::Ethereum.symbol())
    }

    /// Whole-coin value. The integer and fractional parts are split in big
    /// integer arithmetic; only the final sum is a float.
    pub fn as_f64(&self) -> f64 {
        let raw = match BigUint::parse_bytes(self.raw.as_bytes(), 10) {
            Some(raw) => raw,
            None => return 0.0,
        };
        if raw.is_zero() {
            return 0.0;
        }

        let unit = BigUint::from(10u32).pow(self.decimals as u32);
        let whole = (&raw / &unit).to_f64().unwrap_or(f64::MAX);
        let frac = (&raw % &unit).to_f64().unwrap_or(0.0) / 10f64.powi(self.decimals as i32);
        whole + frac
    }

    fn format_balance(raw: &str, decimals: u8) -> String {
        if decimals == 0 || raw == "0" {
            return raw.to_string();
        }

        let raw_len = raw.len();
        let decimals = decimals as usize;

        if raw_len <= decimals {
            // below one coin
            let fraction = format!("{}{}", "0".repeat(decimals - raw_len), raw);
            let trimmed = fraction.trim_end_matches('0');
            if trimmed.is_empty() {
                "0".to_string()
            } else {
                format!("0.{}", trimmed)
            }
        } else {
            let (whole, fraction) = raw.split_at(raw_len - decimals);
            let trimmed = fraction.trim_end_matches('0');
            if trimmed.is_empty() {
                whole.to_string()
            } else {
                format!("{}.{}", whole, trimmed)
            }
        }
    }
}

impl std::fmt::Display for Balance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.formatted, self.symbol)
    }
}

// =============================================================================
// TESTS
// =============================================================================
