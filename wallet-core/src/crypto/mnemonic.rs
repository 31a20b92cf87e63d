// wallet-core/src/crypto/mnemonic.rs
//
// Recovery Phrase Module - BIP-39 (12 words, English wordlist)
// Seed derivation: PBKDF2-HMAC-SHA512 (delegated to the bip39 crate)

use crate::error::{MnemonicError, WalletError, WalletResult};
use bip39::{Language, Mnemonic};
use rand::{rngs::OsRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Number of words in every phrase this wallet accepts or produces.
pub const PHRASE_WORDS: usize = 12;

/// 12 words = 128 bits of entropy
const ENTROPY_BYTES: usize = 16;

/// Recovery Phrase - validated 12-word BIP-39 mnemonic
///
/// # Security Architecture
/// - **ZeroizeOnDrop**: the phrase is overwritten with zeros when dropped
/// - **CSPRNG**: new phrases use `OsRng`
/// - **No Debug Leak**: custom `Debug` never prints the words
///
/// A value of this type always holds 12 lowercase English BIP-39 words with a
/// valid checksum; every constructor enforces it.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RecoveryPhrase {
    phrase: String,
}

impl std::fmt::Debug for RecoveryPhrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecoveryPhrase")
            .field("word_count", &PHRASE_WORDS)
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl RecoveryPhrase {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Generate a fresh 12-word phrase from OS entropy.
    pub fn generate() -> Self {
        let mut entropy = [0u8; ENTROPY_BYTES];
        OsRng.fill_bytes(&mut entropy);

        let mnemonic = Mnemonic::from_entropy_in(Language::English, &entropy)
            .expect("16 bytes is a valid BIP-39 entropy length");

        entropy.zeroize();

        Self {
            phrase: mnemonic.to_string(),
        }
    }

    /// Restore a phrase from user input.
    ///
    /// # Validation
    /// - Whitespace is normalized and words are lowercased
    /// - Exactly 12 words
    /// - Every word in the BIP-39 English wordlist
    /// - Checksum
    pub fn from_phrase(phrase: &str) -> WalletResult<Self> {
        let words: Vec<String> = phrase
            .split_whitespace()
            .map(|w| w.to_lowercase())
            .collect();
        Self::from_words(&words)
    }

    /// Restore a phrase from individual words, in order.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> WalletResult<Self> {
        if words.len() != PHRASE_WORDS {
            return Err(WalletError::Mnemonic(MnemonicError::InvalidWordCount(
                words.len(),
            )));
        }

        let normalized = words
            .iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .collect::<Vec<_>>();

        if let Some(empty) = normalized.iter().position(|w| w.is_empty()) {
            return Err(WalletError::Validation(format!(
                "word {} of the recovery phrase is empty",
                empty + 1
            )));
        }

        let joined = normalized.join(" ");
        Mnemonic::parse_in(Language::English, &joined).map_err(|e| match e {
            bip39::Error::UnknownWord(idx) => WalletError::Mnemonic(MnemonicError::UnknownWord(
                normalized.get(idx).cloned().unwrap_or_default(),
            )),
            bip39::Error::InvalidChecksum => WalletError::Mnemonic(MnemonicError::ChecksumFailed),
            bip39::Error::BadWordCount(n) => {
                WalletError::Mnemonic(MnemonicError::InvalidWordCount(n))
            }
            other => WalletError::Mnemonic(MnemonicError::Bip39Error(other.to_string())),
        })?;

        Ok(Self { phrase: joined })
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// Space-joined phrase, the form kept in session storage.
    ///
    /// # Warning
    /// Never log this value.
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn words(&self) -> Vec<&str> {
        self.phrase.split_whitespace().collect()
    }

    // =========================================================================
    // SEED DERIVATION
    // =========================================================================

    /// Expand the phrase into the 64-byte BIP-39 seed.
    ///
    /// # Arguments
    /// * `passphrase` - Optional BIP-39 passphrase (the wizard always passes `None`)
    pub fn to_seed(&self, passphrase: Option<&str>) -> WalletResult<Zeroizing<[u8; 64]>> {
        let mnemonic = Mnemonic::parse_in(Language::English, &self.phrase)
            .map_err(|e| WalletError::Mnemonic(MnemonicError::Bip39Error(e.to_string())))?;
        Ok(Zeroizing::new(mnemonic.to_seed(passphrase.unwrap_or(""))))
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Full validation: word count, wordlist, checksum.
    #[inline]
    pub fn validate(phrase: &str) -> bool {
        Self::from_phrase(phrase).is_ok()
    }

    /// Whether a single word is part of the BIP-39 English wordlist.
    pub fn is_valid_word(word: &str) -> bool {
        Language::English.find_word(word).is_some()
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
