// wallet-core/src/lib.rs

//! Wallet onboarding core: recovery phrase, per-network account derivation,
//! native balance lookups and the three-screen setup wizard.
//!
//! - [`crypto`]: BIP-39 phrases, BIP-32 / SLIP-10 key derivation
//! - [`chains`]: Ethereum and Solana key materialization
//! - [`account`]: the account sequencer
//! - [`network`]: JSON-RPC balance fetcher
//! - [`session`]: key/value session with an explicit lifecycle
//! - [`wizard`]: `Setup → SelectNetwork → GenerateAccounts`

pub mod account;
pub mod api;
pub mod chains;
pub mod config;
pub mod crypto;
pub mod error;
pub mod network;
pub mod session;
pub mod wizard;

pub use account::{derive_next_account, Account, AccountList, AccountSequencer};
pub use chains::Network;
pub use config::WalletConfig;
pub use crypto::RecoveryPhrase;
pub use error::{WalletError, WalletResult};
pub use network::{Balance, BalanceFetcher};
pub use session::{FileStore, MemoryStore, Session, SessionStore};
pub use wizard::{Screen, Wizard};
