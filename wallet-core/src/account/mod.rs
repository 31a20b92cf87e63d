// wallet-core/src/account/mod.rs

//! Derived accounts and the per-network account sequence.
//!
//! An [`Account`] is created only by the sequencer, in index order, and never
//! changes afterwards. [`AccountList`] keeps the `[0, n)` index invariant.

pub mod sequencer;

pub use sequencer::{derive_account, derive_accounts, derive_next_account, AccountSequencer};

use crate::chains::Network;
use crate::error::{WalletError, WalletResult};
use zeroize::Zeroizing;

/// One derived account. The secret representation differs per network.
#[derive(Clone, PartialEq, Eq)]
pub enum Account {
    Ethereum {
        index: u32,
        /// EIP-55 checksummed
        address: String,
        /// `0x`-prefixed lowercase hex
        private_key_hex: Zeroizing<String>,
    },
    Solana {
        index: u32,
        /// base58 public key
        address: String,
        /// `seed || public_key`
        private_key_bytes: Zeroizing<[u8; 64]>,
    },
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("network", &self.network())
            .field("index", &self.index())
            .field("address", &self.address())
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

impl Account {
    #[inline]
    pub fn index(&self) -> u32 {
        match self {
            Account::Ethereum { index, .. } | Account::Solana { index, .. } => *index,
        }
    }

    #[inline]
    pub fn address(&self) -> &str {
        match self {
            Account::Ethereum { address, .. } | Account::Solana { address, .. } => address,
        }
    }

    #[inline]
    pub fn network(&self) -> Network {
        match self {
            Account::Ethereum { .. } => Network::Ethereum,
            Account::Solana { .. } => Network::Solana,
        }
    }

    pub fn derivation_path(&self) -> String {
        self.network().derivation_path(self.index())
    }

    /// Printable private key: the `0x` hex key for Ethereum, plain hex of the
    /// 64-byte keypair for Solana.
    pub fn private_key_hex(&self) -> Zeroizing<String> {
        match self {
            Account::Ethereum {
                private_key_hex, ..
            } => private_key_hex.clone(),
            Account::Solana {
                private_key_bytes, ..
            } => Zeroizing::new(hex::encode(&private_key_bytes[..])),
        }
    }

    /// Raw keypair bytes, Solana only
    pub fn private_key_bytes(&self) -> Option<&[u8; 64]> {
        match self {
            Account::Solana {
                private_key_bytes, ..
            } => Some(private_key_bytes),
            Account::Ethereum { .. } => None,
        }
    }
}

/// Accounts of a single network, in creation (= index) order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountList {
    network: Network,
    accounts: Vec<Account>,
}

impl AccountList {
    pub fn new(network: Network) -> Self {
        Self {
            network,
            accounts: Vec::new(),
        }
    }

    #[inline]
    pub fn network(&self) -> Network {
        self.network
    }

    /// Index the next account must carry
    #[inline]
    pub fn next_index(&self) -> u32 {
        self.accounts.len() as u32
    }

    /// Append an account; rejects gaps, duplicates and foreign networks.
    pub fn push(&mut self, account: Account) -> WalletResult<()> {
        if account.network() != self.network {
            return Err(WalletError::Validation(format!(
                "{} account cannot join the {} account list",
                account.network(),
                self.network
            )));
        }
        if account.index() != self.next_index() {
            return Err(WalletError::Validation(format!(
                "account index {} out of sequence, expected {}",
                account.index(),
                self.next_index()
            )));
        }
        self.accounts.push(account);
        Ok(())
    }

    pub fn get(&self, index: u32) -> Option<&Account> {
        self.accounts.get(index as usize)
    }

    pub fn last(&self) -> Option<&Account> {
        self.accounts.last()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Account> {
        self.accounts.iter()
    }
}

impl<'a> IntoIterator for &'a AccountList {
    type Item = &'a Account;
    type IntoIter = std::slice::Iter<'a, Account>;

    fn into_iter(self) -> Self::IntoIter {
        self.accounts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eth(index: u32) -> Account {
        Account::Ethereum {
            index,
            address: format!("0x{:040x}", index + 1),
            private_key_hex: Zeroizing::new(format!("0x{:064x}", index + 1)),
        }
    }

    fn sol(index: u32) -> Account {
        Account::Solana {
            index,
            address: "11111111111111111111111111111111".to_string(),
            private_key_bytes: Zeroizing::new([index as u8; 64]),
        }
    }

    #[test]
    fn test_push_in_order() {
        let mut list = AccountList::new(Network::Ethereum);
        for i in 0..3 {
            list.push(eth(i)).unwrap();
        }
        assert_eq!(list.len(), 3);
        assert_eq!(list.next_index(), 3);
        let indices: Vec<u32> = list.iter().map(Account::index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_push_rejects_gap_and_duplicate() {
        let mut list = AccountList::new(Network::Ethereum);
        assert!(list.push(eth(1)).is_err());
        list.push(eth(0)).unwrap();
        assert!(list.push(eth(0)).is_err());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_push_rejects_other_network() {
        let mut list = AccountList::new(Network::Ethereum);
        assert!(list.push(sol(0)).is_err());
        assert!(list.is_empty());
    }

    #[test]
    fn test_accessors() {
        let account = sol(0);
        assert_eq!(account.network(), Network::Solana);
        assert_eq!(account.derivation_path(), "m/44'/501'/0'/0'");
        assert_eq!(account.private_key_hex().len(), 128);
        assert!(account.private_key_bytes().is_some());
        assert!(eth(0).private_key_bytes().is_none());
        assert!(eth(0).private_key_hex().starts_with("0x"));
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let rendered = format!("{:?}", eth(0));
        assert!(rendered.contains("REDACTED"));
        assert!(!rendered.contains(&format!("{:064x}", 1)));
    }
}
