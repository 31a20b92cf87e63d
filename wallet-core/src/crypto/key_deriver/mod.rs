// wallet-core/src/crypto/key_deriver/mod.rs
//
// Key Derivation Engine
//
// ┌─────────────────────────────────────────────────┐
// │  Seed (64 bytes from the recovery phrase)       │
// │                    │                            │
// │     ┌──────────────┴──────────────┐             │
// │     ▼                             ▼             │
// │  secp256k1 (BIP-32)        ed25519 (SLIP-0010)  │
// │  └─ Ethereum               └─ Solana            │
// └─────────────────────────────────────────────────┘

pub mod ed25519;
pub mod secp256k1;

pub use ed25519::Ed25519Deriver;
pub use secp256k1::Secp256k1Deriver;

use crate::error::{CryptoError, WalletError, WalletResult};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

type HmacSha512 = Hmac<Sha512>;

/// BIP-39 seeds are always 64 bytes.
pub const SEED_LEN: usize = 64;

// =============================================================================
// COMMON TYPES
// =============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveType {
    /// secp256k1, Ethereum
    Secp256k1,
    /// Ed25519, Solana
    Ed25519,
}

/// Derived private key plus the path that produced it
#[derive(Debug)]
pub struct DerivedKey {
    /// 32 bytes, zeroized on drop
    pub private_key: Zeroizing<[u8; 32]>,
    pub curve: CurveType,
    pub path: String,
}

// =============================================================================
// UNIFIED DERIVER
// =============================================================================
/// Entry point for key derivation; dispatches on the curve.
pub struct KeyDeriver;

impl KeyDeriver {
    /// # Arguments
    /// * `seed` - BIP-39 seed (64 bytes)
    /// * `path` - e.g. `"m/44'/60'/0'/0'"`
    /// * `curve` - which derivation scheme to run
    pub fn derive(seed: &[u8], path: &str, curve: CurveType) -> WalletResult<DerivedKey> {
        Self::validate_seed(seed)?;

        tracing::debug!(path, ?curve, "deriving child key");

        let private_key = match curve {
            CurveType::Secp256k1 => Secp256k1Deriver::derive(seed, path)?,
            CurveType::Ed25519 => Ed25519Deriver::derive(seed, path)?,
        };

        Ok(DerivedKey {
            private_key,
            curve,
            path: path.to_string(),
        })
    }

    #[inline]
    fn validate_seed(seed: &[u8]) -> WalletResult<()> {
        if seed.len() != SEED_LEN {
            return Err(WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Invalid seed length: expected {} bytes, got {}",
                SEED_LEN,
                seed.len()
            ))));
        }
        Ok(())
    }
}

/// HMAC-SHA512 over the concatenation of `parts`, split into (IL, IR).
pub(crate) fn hmac_sha512_split(
    key: &[u8],
    parts: &[&[u8]],
) -> WalletResult<([u8; 32], [u8; 32])> {
    let mut mac = HmacSha512::new_from_slice(key).map_err(|e| {
        WalletError::Crypto(CryptoError::DerivationFailed(format!(
            "HMAC init failed: {}",
            e
        )))
    })?;
    for part in parts {
        mac.update(part);
    }

    let mut buf = [0u8; 64];
    buf.copy_from_slice(&mac.finalize().into_bytes());

    let mut left = [0u8; 32];
    let mut right = [0u8; 32];
    left.copy_from_slice(&buf[..32]);
    right.copy_from_slice(&buf[32..]);
    buf.zeroize();

    Ok((left, right))
}

// =============================================================================
// TESTS
// =============================================================================
