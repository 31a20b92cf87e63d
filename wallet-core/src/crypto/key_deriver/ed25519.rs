// wallet-core/src/crypto/key_deriver/ed25519.rs
//
// Ed25519 Key Derivation (SLIP-0010)
//
// Used for: Solana
// Algorithm: HMAC-SHA512 chain, hardened children only
// Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md
//
// Every path segment MUST be hardened:
//     m/44'/501'/0'/0'  ok
//     m/44'/501'/0'/0   rejected

use super::hmac_sha512_split;
use crate::crypto::paths::HARDENED_OFFSET;
use crate::error::{CryptoError, WalletError, WalletResult};
use zeroize::{Zeroize, Zeroizing};

/// Ed25519 Key Deriver (SLIP-0010)
///
/// # Differences from BIP-32
/// - Master secret is `"ed25519 seed"` instead of `"Bitcoin seed"`
/// - Hardened derivation only
/// - No key range check, any 32 bytes is a valid ed25519 seed
pub struct Ed25519Deriver;

impl Ed25519Deriver {
    const MASTER_SECRET: &'static [u8] = b"ed25519 seed";

    /// Derive the 32-byte ed25519 private seed for `path`.
    ///
    /// # Arguments
    /// * `seed` - BIP-39 seed
    /// * `path` - all levels hardened, e.g. `"m/44'/501'/0'/0'"`
    pub fn derive(seed: &[u8], path: &str) -> WalletResult<Zeroizing<[u8; 32]>> {
        let indices = Self::parse_path(path)?;

        // I = HMAC-SHA512(Key = "ed25519 seed", Data = seed)
        let (mut key, mut chain_code) = hmac_sha512_split(Self::MASTER_SECRET, &[seed])?;

        // I = HMAC-SHA512(Key = chain_code, Data = 0x00 || key || ser32(index | 2^31))
        for index in indices {
            let hardened = (index | HARDENED_OFFSET).to_be_bytes();
            let (child_key, child_chain) =
                hmac_sha512_split(&chain_code, &[&[0x00u8][..], &key[..], &hardened[..]])?;
            key.zeroize();
            chain_code.zeroize();
            key = child_key;
            chain_code = child_chain;
        }

        chain_code.zeroize();
        Ok(Zeroizing::new(key))
    }

    /// `"m/44'/501'/0'/0'"` -> `[44, 501, 0, 0]`
    fn parse_path(path: &str) -> WalletResult<Vec<u32>> {
        let path = path.trim();

        let segments = path.strip_prefix("m/").ok_or_else(|| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Path must start with 'm/': {}",
                path
            )))
        })?;

        let mut indices = Vec::new();
        for segment in segments.split('/').map(str::trim).filter(|s| !s.is_empty()) {
            let number = segment
                .strip_suffix('\'')
                .or_else(|| segment.strip_suffix('h'))
                .ok_or_else(|| {
                    WalletError::Crypto(CryptoError::DerivationFailed(format!(
                        "SLIP-0010 ed25519 requires every level to be hardened, got '{}'",
                        segment
                    )))
                })?;

            let index: u32 = number.parse().map_err(|e| {
                WalletError::Crypto(CryptoError::DerivationFailed(format!(
                    "Invalid index '{}': {}",
                    number, e
                )))
            })?;

            if index >= HARDENED_OFFSET {
                return Err(WalletError::Crypto(CryptoError::DerivationFailed(format!(
                    "Index {} out of range",
                    index
                ))));
            }

            indices.push(index);
        }

        if indices.is_empty() {
            return Err(WalletError::Crypto(CryptoError::DerivationFailed(
                "Empty derivation path".to_string(),
            )));
        }

        Ok(indices)
    }
}

// =============================================================================
// TESTS
// =============================================================================
