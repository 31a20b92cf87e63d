// wallet-core/src/session/mod.rs

//! Wizard state shared between screens.
//!
//! Two keys are kept: [`MNEMONIC_KEY`] (the space-joined phrase) and
//! [`NETWORK_KEY`] (`"solana"` / `"ethereum"`). Values are re-read and
//! re-validated on every access, so a store edited underneath the session
//! surfaces as [`SessionError::CorruptValue`] rather than a bad phrase.

pub mod store;

pub use store::{FileStore, MemoryStore, SessionStore};

use crate::chains::Network;
use crate::crypto::RecoveryPhrase;
use crate::error::{SessionError, WalletError, WalletResult};
use zeroize::Zeroizing;

pub const MNEMONIC_KEY: &str = "mnemonic";
pub const NETWORK_KEY: &str = "selectedNetwork";

/// Explicit lifecycle over a [`SessionStore`]: `begin` → `commit_*` → `clear`
#[derive(Debug)]
pub struct Session<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> Session<S> {
    /// Start (or resume) a session on `store`. Existing keys are kept.
    pub fn begin(store: S) -> Self {
        tracing::info!("session started");
        Self { store }
    }

    pub fn phrase(&self) -> WalletResult<Option<RecoveryPhrase>> {
        let raw = match self.store.get(MNEMONIC_KEY)? {
            Some(raw) => Zeroizing::new(raw),
            None => return Ok(None),
        };
        RecoveryPhrase::from_phrase(&raw)
            .map(Some)
            .map_err(|e| corrupt(MNEMONIC_KEY, e))
    }

    pub fn network(&self) -> WalletResult<Option<Network>> {
        match self.store.get(NETWORK_KEY)? {
            Some(raw) => raw.parse().map(Some).map_err(|e| corrupt(NETWORK_KEY, e)),
            None => Ok(None),
        }
    }

    pub fn commit_phrase(&mut self, phrase: &RecoveryPhrase) -> WalletResult<()> {
        self.store.set(MNEMONIC_KEY, phrase.phrase())?;
        tracing::info!("recovery phrase committed");
        Ok(())
    }

    pub fn commit_network(&mut self, network: Network) -> WalletResult<()> {
        self.store.set(NETWORK_KEY, network.as_str())?;
        tracing::info!(%network, "network committed");
        Ok(())
    }

    /// Remove both keys. Safe to call more than once.
    pub fn clear(&mut self) -> WalletResult<()> {
        self.store.remove(MNEMONIC_KEY)?;
        self.store.remove(NETWORK_KEY)?;
        tracing::info!("session cleared");
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn corrupt(key: &str, e: WalletError) -> WalletError {
    SessionError::CorruptValue {
        key: key.to_string(),
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_PHRASE: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_empty_session() {
        let session = Session::begin(MemoryStore::new());
        assert_eq!(session.phrase().unwrap(), None);
        assert_eq!(session.network().unwrap(), None);
    }

    #[test]
    fn test_commit_and_read_back() {
        let mut session = Session::begin(MemoryStore::new());
        let phrase = RecoveryPhrase::from_phrase(TEST_PHRASE).unwrap();
        session.commit_phrase(&phrase).unwrap();
        session.commit_network(Network::Ethereum).unwrap();

        assert_eq!(session.phrase().unwrap(), Some(phrase));
        assert_eq!(session.network().unwrap(), Some(Network::Ethereum));
        assert_eq!(
            session.store().get(NETWORK_KEY).unwrap(),
            Some("ethereum".to_string())
        );
        assert_eq!(
            session.store().get(MNEMONIC_KEY).unwrap(),
            Some(TEST_PHRASE.to_string())
        );
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let mut session = Session::begin(MemoryStore::new());
        session
            .commit_phrase(&RecoveryPhrase::from_phrase(TEST_PHRASE).unwrap())
            .unwrap();
        session.commit_network(Network::Solana).unwrap();

        session.clear().unwrap();
        session.clear().unwrap();
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_corrupt_values() {
        let mut store = MemoryStore::new();
        store.set(MNEMONIC_KEY, "not a phrase").unwrap();
        store.set(NETWORK_KEY, "bitcoin").unwrap();
        let session = Session::begin(store);

        assert!(matches!(
            session.phrase(),
            Err(WalletError::Session(SessionError::CorruptValue { ref key, .. })) if key == MNEMONIC_KEY
        ));
        assert!(matches!(
            session.network(),
            Err(WalletError::Session(SessionError::CorruptValue { ref key, .. })) if key == NETWORK_KEY
        ));
    }

    #[test]
    fn test_failed_commit_is_not_visible() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone").join("session.json");

        let mut session = Session::begin(FileStore::open(&path).unwrap());
        let phrase = RecoveryPhrase::from_phrase(TEST_PHRASE).unwrap();
        assert!(session.commit_phrase(&phrase).is_err());
        assert_eq!(session.phrase().unwrap(), None);
    }

    #[test]
    fn test_resume_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut session = Session::begin(FileStore::open(&path).unwrap());
        session.commit_network(Network::Solana).unwrap();
        drop(session);

        let resumed = Session::begin(FileStore::open(&path).unwrap());
        assert_eq!(resumed.network().unwrap(), Some(Network::Solana));
    }
}
