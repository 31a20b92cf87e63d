// wallet-core/src/chains/mod.rs

//! Supported networks and their key materializers.
//!
//! - [`evm`]: Ethereum addresses from secp256k1 keys
//! - [`solana`]: Solana keypairs and base58 addresses from ed25519 seeds

pub mod evm;
pub mod solana;

use crate::crypto::key_deriver::CurveType;
use crate::crypto::paths::{coin_type, DerivationPaths};
use crate::error::{WalletError, WalletResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Network selection; the string form is what the session store keeps under
/// `selectedNetwork`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Solana,
    Ethereum,
}

impl Network {
    /// Display order on the network selection screen
    pub const ALL: [Network; 2] = [Network::Solana, Network::Ethereum];

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Network::Solana => "solana",
            Network::Ethereum => "ethereum",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Network::Solana => "Solana",
            Network::Ethereum => "Ethereum",
        }
    }

    pub const fn tagline(self) -> &'static str {
        match self {
            Network::Solana => "Fast, scalable blockchain",
            Network::Ethereum => "Most widely used blockchain",
        }
    }

    /// SLIP-44 coin type
    #[inline]
    pub const fn coin_type(self) -> u32 {
        match self {
            Network::Solana => coin_type::SOLANA,
            Network::Ethereum => coin_type::ETHEREUM,
        }
    }

    #[inline]
    pub const fn curve(self) -> CurveType {
        match self {
            Network::Solana => CurveType::Ed25519,
            Network::Ethereum => CurveType::Secp256k1,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Network::Solana => "SOL",
            Network::Ethereum => "ETH",
        }
    }

    /// Lamports per SOL = 10^9, wei per ETH = 10^18
    pub const fn decimals(self) -> u8 {
        match self {
            Network::Solana => 9,
            Network::Ethereum => 18,
        }
    }

    /// Derivation path of account `index`
    pub fn derivation_path(self, index: u32) -> String {
        match self {
            Network::Solana => DerivationPaths::solana(index),
            Network::Ethereum => DerivationPaths::ethereum(index),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = WalletError;

    fn from_str(s: &str) -> WalletResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solana" | "sol" => Ok(Network::Solana),
            "ethereum" | "eth" => Ok(Network::Ethereum),
            other => Err(WalletError::Validation(format!(
                "Unknown network '{}', expected 'solana' or 'ethereum'",
                other
            ))),
        }
    }
}
