// wallet-core/src/crypto/paths.rs
//
// Derivation Paths Module - BIP-44 layout, SLIP-44 coin types
//
// Both supported networks put the per-account index in the *account* level
// and keep a hardened `0'` below it, so the same template serves both:
//
//     m/44'/{coin_type}'/{index}'/0'

// =============================================================================
// SLIP-44 COIN TYPES
// =============================================================================
/// SLIP-44 Registered Coin Types
/// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub mod coin_type {
    /// secp256k1, BIP-32
    pub const ETHEREUM: u32 = 60;
    /// ed25519, SLIP-0010
    pub const SOLANA: u32 = 501;
}

/// First index that would collide with the hardened flag bit.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

// =============================================================================
// DERIVATION PATHS
// =============================================================================
/// Derivation path builders for the wallet's account sequence
///
/// # Conventions
/// - Ethereum: `m/44'/60'/{index}'/0'` (account index at the third level,
///   derived with BIP-32)
/// - Solana: `m/44'/501'/{index}'/0'` (SLIP-0010, every level hardened)
pub struct DerivationPaths;

impl DerivationPaths {
    pub const ETHEREUM_0: &'static str = "m/44'/60'/0'/0'";
    pub const SOLANA_0: &'static str = "m/44'/501'/0'/0'";

    /// Ethereum path for account `index`
    #[inline]
    pub fn ethereum(index: u32) -> String {
        Self::hardened_path(coin_type::ETHEREUM, index, &[0])
    }

    /// Solana path for account `index`
    #[inline]
    pub fn solana(index: u32) -> String {
        Self::hardened_path(coin_type::SOLANA, index, &[0])
    }

    /// All-hardened path `m/44'/coin'/account'/sub'...`
    ///
    /// Required for ed25519 (SLIP-0010 has no public derivation) and valid for
    /// secp256k1 as well.
    ///
    /// - `hardened_path(501, 0, &[0])` -> `m/44'/501'/0'/0'`
    /// - `hardened_path(60, 3, &[0])`  -> `m/44'/60'/3'/0'`
    /// - `hardened_path(501, 0, &[])`  -> `m/44'/501'/0'`
    pub fn hardened_path(coin_type: u32, account: u32, sub_paths: &[u32]) -> String {
        let mut path = format!("m/44'/{}'/{}'", coin_type, account);
        for &idx in sub_paths {
            path.push_str(&format!("/{}'", idx));
        }
        path
    }
}

// =============================================================================
// TESTS
// =============================================================================
