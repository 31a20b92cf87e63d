// wallet-core/src/api.rs
//
// One-call entry points for front ends that do not drive the wizard.

use crate::account::{self, Account};
use crate::chains::Network;
use crate::config::WalletConfig;
use crate::crypto::RecoveryPhrase;
use crate::error::WalletResult;
use crate::network::{Balance, BalanceFetcher, NetworkInfo};

// --- Key Management ---

pub fn create_wallet() -> RecoveryPhrase {
    RecoveryPhrase::generate()
}

pub fn restore_wallet(mnemonic: &str) -> WalletResult<RecoveryPhrase> {
    RecoveryPhrase::from_phrase(mnemonic)
}

/// Accounts `0..count` of `network` for `mnemonic`
pub fn derive_accounts(mnemonic: &str, network: Network, count: u32) -> WalletResult<Vec<Account>> {
    let phrase = restore_wallet(mnemonic)?;
    account::derive_accounts(&phrase, network, count)
}

// --- Chain Operations ---

pub async fn get_balance(config: &WalletConfig, address: &str, network: Network) -> WalletResult<Balance> {
    BalanceFetcher::from_config(config)?
        .fetch_balance(address, network)
        .await
}

// --- Config Helpers ---

pub fn default_networks(config: &WalletConfig) -> Vec<NetworkInfo> {
    Network::ALL
        .iter()
        .map(|network| config.network_info(*network))
        .collect()
}
