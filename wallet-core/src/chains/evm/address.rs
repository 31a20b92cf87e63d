// wallet-core/src/chains/evm/address.rs
//
// EVM Address Module
// EIP-55 (Checksum), Keccak-256, secp256k1

use crate::error::{CryptoError, WalletError, WalletResult};
use alloy::primitives::Address;
use k256::{elliptic_curve::sec1::ToEncodedPoint, SecretKey};
use tiny_keccak::{Hasher, Keccak};
use zeroize::{Zeroize, Zeroizing};

/// EVM Address Generator
///
/// # Flow:  Private Key (32B) → Public Key (64B) → Keccak256 → Address (20B)
///
/// Intermediate hashes and encoded points are zeroized; nothing is stored.
pub struct EvmAddress;

impl EvmAddress {
    /// Derive the 20 address bytes for a private key.
    ///
    /// 1. `priv_key` (32B) → secp256k1 → uncompressed point (65B)
    /// 2. drop the `0x04` prefix (64B)
    /// 3. Keccak-256 → 32B
    /// 4. last 20 bytes
    pub fn derive_bytes(priv_key: &[u8]) -> WalletResult<[u8; 20]> {
        let secret_key = SecretKey::from_slice(priv_key).map_err(|e| {
            WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
                "Invalid secp256k1 private key: {}",
                e
            )))
        })?;

        let encoded = Zeroizing::new(secret_key.public_key().to_encoded_point(false));
        let pub_key_raw = &encoded.as_bytes()[1..];

        let mut hasher = Keccak::v256();
        let mut hash = [0u8; 32];
        hasher.update(pub_key_raw);
        hasher.finalize(&mut hash);

        let mut address = [0u8; 20];
        address.copy_from_slice(&hash[12..]);
        hash.zeroize();

        Ok(address)
    }

    /// EIP-55 checksummed address, e.g. `"0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"`
    #[inline]
    pub fn derive(priv_key: &[u8]) -> WalletResult<String> {
        let bytes = Self::derive_bytes(priv_key)?;
        Ok(Address::from_slice(&bytes).to_checksum(None))
    }

    /// `0x`-prefixed lowercase hex, the usual export form for EVM keys.
    pub fn private_key_hex(priv_key: &[u8]) -> Zeroizing<String> {
        Zeroizing::new(format!("0x{}", hex::encode(priv_key)))
    }

    // =========================================================================
    // UTILITIES
    // =========================================================================

    /// `0x` + 40 hex chars
    #[inline]
    pub fn is_valid(address: &str) -> bool {
        address.parse::<Address>().is_ok()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_PRIVATE_KEY: &str =
        "501c797c4b1fdfa88fb7efdf7c9871b8e0f46dbc44259e3e270e0d4c938165f5";
    const TEST_ADDRESS: &str = "0xb611C31e4284BF7A7daD3296e62880F14b3b15DD";

    // Anvil/Hardhat account #0
    const ANVIL_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const ANVIL_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    #[test]
    fn test_derive() {
        let priv_key = hex::decode(TEST_PRIVATE_KEY).unwrap();
        assert_eq!(EvmAddress::derive(&priv_key).unwrap(), TEST_ADDRESS);
    }

    #[test]
    fn test_derive_anvil() {
        let priv_key = hex::decode(ANVIL_PRIVATE_KEY).unwrap();
        assert_eq!(EvmAddress::derive(&priv_key).unwrap(), ANVIL_ADDRESS);
    }

    #[test]
    fn test_derive_bytes_matches_checksum_form() {
        let priv_key = hex::decode(TEST_PRIVATE_KEY).unwrap();
        let bytes = EvmAddress::derive_bytes(&priv_key).unwrap();
        let lower = format!("0x{}", hex::encode(bytes));
        assert_eq!(lower, TEST_ADDRESS.to_lowercase());
    }

    #[test]
    fn test_private_key_hex() {
        let priv_key = hex::decode(ANVIL_PRIVATE_KEY).unwrap();
        let rendered = EvmAddress::private_key_hex(&priv_key);
        assert_eq!(rendered.as_str(), format!("0x{}", ANVIL_PRIVATE_KEY));
    }

    #[test]
    fn test_is_valid() {
        assert!(EvmAddress::is_valid(TEST_ADDRESS));
        assert!(EvmAddress::is_valid(
            "0xdead000000000000000000000000000000000000"
        ));
        assert!(!EvmAddress::is_valid("0xinvalid"));
        assert!(!EvmAddress::is_valid("0x123"));
        assert!(!EvmAddress::is_valid(""));
    }

    #[test]
    fn test_invalid_private_key() {
        assert!(EvmAddress::derive(&[0u8; 31]).is_err());
        assert!(EvmAddress::derive(&[0u8; 33]).is_err());
        assert!(EvmAddress::derive(&[]).is_err());
        assert!(EvmAddress::derive(&[0u8; 32]).is_err());
    }
}
