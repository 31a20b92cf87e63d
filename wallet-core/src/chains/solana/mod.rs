// wallet-core/src/chains/solana/mod.rs

//! Solana support: ed25519 keypairs and base58 addresses via [`SolanaKeypair`].

pub mod keypair;

pub use keypair::SolanaKeypair;
