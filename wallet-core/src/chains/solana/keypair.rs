// wallet-core/src/chains/solana/keypair.rs
//
// Solana Keypair Module
// ed25519 seed (32B) → signing key → verifying key (32B) → base58 address

use ed25519_dalek::{SigningKey, PUBLIC_KEY_LENGTH};
use zeroize::Zeroizing;

/// Solana keypair built from a SLIP-0010 derived seed
///
/// The secret form is the 64-byte `seed || public_key` keypair accepted by
/// Solana keypair files; the address is the base58 public key.
pub struct SolanaKeypair {
    signing_key: SigningKey,
}

impl std::fmt::Debug for SolanaKeypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolanaKeypair")
            .field("address", &self.address())
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl SolanaKeypair {
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    pub fn public_key_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Base58-encoded public key
    pub fn address(&self) -> String {
        bs58::encode(self.public_key_bytes()).into_string()
    }

    /// 64-byte `seed || public_key`, zeroized on drop
    pub fn secret_key_bytes(&self) -> Zeroizing<[u8; 64]> {
        Zeroizing::new(self.signing_key.to_keypair_bytes())
    }

    /// Whether `address` decodes to a 32-byte public key
    pub fn is_valid_address(address: &str) -> bool {
        matches!(
            bs58::decode(address).into_vec(),
            Ok(bytes) if bytes.len() == PUBLIC_KEY_LENGTH
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
