// wallet-core/src/wizard/setup.rs
//
// Setup screen: create a phrase, or import one word by word, by paste, or
// from a text file.

use crate::crypto::{RecoveryPhrase, PHRASE_WORDS};
use crate::error::{MnemonicError, WalletError, WalletResult};
use zeroize::Zeroize;

// =============================================================================
// IMPORT PARSING
// =============================================================================

/// Clipboard text → 12 words.
///
/// The text is lowercased and split on whitespace; tokens containing anything
/// but `a-z` are dropped. Exactly 12 tokens must remain.
pub fn parse_pasted(text: &str) -> WalletResult<Vec<String>> {
    let words: Vec<String> = text
        .to_lowercase()
        .split_whitespace()
        .filter(|w| w.chars().all(|c| c.is_ascii_lowercase()))
        .map(str::to_string)
        .collect();

    if words.len() != PHRASE_WORDS {
        return Err(WalletError::Validation(format!(
            "Please paste exactly {} words (found {})",
            PHRASE_WORDS,
            words.len()
        )));
    }
    Ok(words)
}

/// Text file → first 12 words.
///
/// Every character outside `a-z` (after lowercasing) separates words, so
/// numbering, punctuation and line breaks are ignored.
pub fn parse_import_file(content: &str) -> WalletResult<Vec<String>> {
    let lowered = content.to_lowercase();
    let words: Vec<String> = lowered
        .split(|c: char| !c.is_ascii_lowercase())
        .filter(|w| !w.is_empty())
        .take(PHRASE_WORDS)
        .map(str::to_string)
        .collect();

    if words.len() < PHRASE_WORDS {
        return Err(WalletError::Validation(format!(
            "File must contain at least {} words (found {})",
            PHRASE_WORDS,
            words.len()
        )));
    }
    Ok(words)
}

// =============================================================================
// IMPORT SLOTS
// =============================================================================

/// The 12 word inputs of the import panel
#[derive(Clone, PartialEq, Eq, Default)]
pub struct ImportSlots {
    slots: [String; PHRASE_WORDS],
}

impl std::fmt::Debug for ImportSlots {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImportSlots")
            .field("filled", &self.filled())
            .finish()
    }
}

impl Drop for ImportSlots {
    fn drop(&mut self) {
        self.clear();
    }
}

impl ImportSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` lowercased and trimmed in `slot` (0-based).
    pub fn set(&mut self, slot: usize, value: &str) -> WalletResult<()> {
        let target = self.slots.get_mut(slot).ok_or_else(|| {
            WalletError::Validation(format!("word slot {} out of range 1-{}", slot + 1, PHRASE_WORDS))
        })?;
        target.zeroize();
        *target = value.trim().to_lowercase();
        Ok(())
    }

    pub fn get(&self, slot: usize) -> Option<&str> {
        self.slots.get(slot).map(String::as_str)
    }

    /// Replace all slots. `words` must hold exactly 12 entries.
    pub fn fill<S: AsRef<str>>(&mut self, words: &[S]) -> WalletResult<()> {
        if words.len() != PHRASE_WORDS {
            return Err(MnemonicError::InvalidWordCount(words.len()).into());
        }
        for (slot, word) in words.iter().enumerate() {
            self.set(slot, word.as_ref())?;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.zeroize();
        }
    }

    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.filled() == PHRASE_WORDS
    }

    pub fn words(&self) -> &[String] {
        &self.slots
    }
}

// =============================================================================
// SCREEN STATE
// =============================================================================

/// Everything the setup screen holds before the phrase is committed
#[derive(Debug, Default)]
pub struct SetupState {
    phrase: Option<RecoveryPhrase>,
    revealed: bool,
    import_open: bool,
    slots: ImportSlots,
}

impl SetupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phrase(&self) -> Option<&RecoveryPhrase> {
        self.phrase.as_ref()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_import_open(&self) -> bool {
        self.import_open
    }

    pub fn slots(&self) -> &ImportSlots {
        &self.slots
    }

    pub(crate) fn restore(&mut self, phrase: RecoveryPhrase) {
        self.phrase = Some(phrase);
    }

    /// Fresh random phrase, shown immediately; closes the import panel.
    pub fn create_new_wallet(&mut self) -> &RecoveryPhrase {
        self.import_open = false;
        self.revealed = true;
        tracing::info!("new recovery phrase generated");
        self.phrase.insert(RecoveryPhrase::generate())
    }

    /// Open or close the import panel. Either way the current phrase is
    /// discarded.
    pub fn toggle_import(&mut self) {
        self.import_open = !self.import_open;
        self.phrase = None;
    }

    /// Store one word. Returns whether it is in the BIP-39 English list; an
    /// unknown word is kept so it can be corrected in place.
    pub fn set_import_word(&mut self, slot: usize, value: &str) -> WalletResult<bool> {
        self.slots.set(slot, value)?;
        Ok(self
            .slots
            .get(slot)
            .map_or(false, RecoveryPhrase::is_valid_word))
    }

    /// Fill all slots from clipboard text. Nothing changes on failure.
    pub fn paste_import(&mut self, text: &str) -> WalletResult<()> {
        let words = parse_pasted(text)?;
        self.slots.fill(&words)
    }

    /// Fill all slots from an uploaded file's text. Nothing changes on failure.
    pub fn load_import_file(&mut self, content: &str) -> WalletResult<()> {
        let words = parse_import_file(content)?;
        self.slots.fill(&words)?;
        tracing::info!("recovery phrase loaded from file");
        Ok(())
    }

    pub fn cancel_import(&mut self) {
        self.import_open = false;
        self.slots.clear();
    }

    /// Validate the slots as a BIP-39 phrase and adopt it.
    pub fn submit_import(&mut self) -> WalletResult<&RecoveryPhrase> {
        if !self.slots.is_complete() {
            return Err(WalletError::Validation(
                "Please enter all 12 words correctly".to_string(),
            ));
        }

        let phrase = RecoveryPhrase::from_words(self.slots.words())?;
        self.import_open = false;
        self.revealed = true;
        tracing::info!("recovery phrase imported");
        Ok(&*self.phrase.insert(phrase))
    }

    pub fn toggle_reveal(&mut self) -> bool {
        self.revealed = !self.revealed;
        self.revealed
    }
}

// =============================================================================
// TESTS
// =============================================================================
