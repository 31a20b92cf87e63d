// wallet-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! - **Recovery Phrase**: 12-word BIP-39 phrases via [`RecoveryPhrase`].
//! - **Key Derivation**: secp256k1 (Ethereum) and ed25519 (Solana) via [`KeyDeriver`].
//! - **Derivation Paths**: per-network account paths via [`DerivationPaths`].

pub mod key_deriver;
pub mod mnemonic;
pub mod paths;

pub use key_deriver::{CurveType, DerivedKey, KeyDeriver};
pub use mnemonic::{RecoveryPhrase, PHRASE_WORDS};
pub use paths::DerivationPaths;
