// wallet-core/src/chains/evm/mod.rs

//! Ethereum support: EIP-55 checksummed addresses via [`EvmAddress`].

pub mod address;

pub use address::EvmAddress;
