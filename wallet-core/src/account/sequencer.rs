// wallet-core/src/account/sequencer.rs
//
// Account Sequencer
//
//   phrase ──► seed ──► path(network, index) ──► child key ──► Account
//
// Each call appends exactly one account; the index is the number of accounts
// already derived for the network.

use super::{Account, AccountList};
use crate::chains::evm::EvmAddress;
use crate::chains::solana::SolanaKeypair;
use crate::chains::Network;
use crate::crypto::key_deriver::KeyDeriver;
use crate::crypto::paths::HARDENED_OFFSET;
use crate::crypto::RecoveryPhrase;
use crate::error::{CryptoError, WalletError, WalletResult};

/// Derive account `index` of `network`. Pure: the same inputs always give the
/// same address and key.
pub fn derive_account(phrase: &RecoveryPhrase, network: Network, index: u32) -> WalletResult<Account> {
    if index >= HARDENED_OFFSET {
        return Err(WalletError::Crypto(CryptoError::DerivationFailed(format!(
            "account index {} exceeds the hardened range",
            index
        ))));
    }

    let seed = phrase.to_seed(None)?;
    let path = network.derivation_path(index);
    let derived = KeyDeriver::derive(&seed[..], &path, network.curve())?;

    let account = match network {
        Network::Ethereum => Account::Ethereum {
            index,
            address: EvmAddress::derive(&derived.private_key[..])?,
            private_key_hex: EvmAddress::private_key_hex(&derived.private_key[..]),
        },
        Network::Solana => {
            let keypair = SolanaKeypair::from_seed(&derived.private_key);
            Account::Solana {
                index,
                address: keypair.address(),
                private_key_bytes: keypair.secret_key_bytes(),
            }
        }
    };

    tracing::debug!(%network, index, address = account.address(), "derived account");
    Ok(account)
}

/// Derive the account that follows `prior_count` existing ones.
///
/// A missing phrase is reported as [`WalletError::MissingRecoveryPhrase`];
/// no account is produced.
pub fn derive_next_account(
    phrase: Option<&RecoveryPhrase>,
    network: Network,
    prior_count: u32,
) -> WalletResult<Account> {
    let phrase = phrase.ok_or(WalletError::MissingRecoveryPhrase)?;
    derive_account(phrase, network, prior_count)
}

/// Stateful sequence for one network: owns the list and its next index.
#[derive(Debug, Clone)]
pub struct AccountSequencer {
    accounts: AccountList,
}

impl AccountSequencer {
    pub fn new(network: Network) -> Self {
        Self {
            accounts: AccountList::new(network),
        }
    }

    #[inline]
    pub fn network(&self) -> Network {
        self.accounts.network()
    }

    #[inline]
    pub fn accounts(&self) -> &AccountList {
        &self.accounts
    }

    #[inline]
    pub fn next_index(&self) -> u32 {
        self.accounts.next_index()
    }

    /// Derive and append the next account, returning it.
    pub fn derive_next(&mut self, phrase: Option<&RecoveryPhrase>) -> WalletResult<&Account> {
        let account = derive_next_account(phrase, self.network(), self.next_index())?;
        self.accounts.push(account)?;
        self.accounts
            .last()
            .ok_or_else(|| WalletError::Validation("account list is empty".to_string()))
    }
}

/// Accounts `0..count` in one go, as the sequencer would produce them.
pub fn derive_accounts(phrase: &RecoveryPhrase, network: Network, count: u32) -> WalletResult<Vec<Account>> {
    (0..count)
        .map(|index| derive_account(phrase, network, index))
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
