// wallet-core/src/wizard/mod.rs

//! Onboarding wizard: `Setup → SelectNetwork → GenerateAccounts`.
//!
//! Screens hand state to each other only through the [`Session`]: `next()`
//! commits the current screen's value, and every screen re-reads what it
//! needs when opened. A screen whose prerequisites are missing from the
//! session redirects to [`Screen::Setup`].

pub mod accounts;
pub mod backup;
pub mod setup;
pub mod view;

pub use accounts::AccountsScreen;
pub use backup::{backup_file_name, render_backup, write_backup};
pub use setup::{parse_import_file, parse_pasted, ImportSlots, SetupState};
pub use view::{BalanceRequest, BalanceState, BalanceView};

use crate::chains::Network;
use crate::crypto::RecoveryPhrase;
use crate::error::{SessionError, WalletError, WalletResult};
use crate::session::{Session, SessionStore};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Setup,
    SelectNetwork,
    GenerateAccounts,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Screen::Setup => "setup",
            Screen::SelectNetwork => "select-network",
            Screen::GenerateAccounts => "generate-accounts",
        })
    }
}

#[derive(Debug)]
pub struct Wizard<S: SessionStore> {
    session: Session<S>,
    screen: Screen,
    setup: SetupState,
    chosen_network: Option<Network>,
    accounts: Option<AccountsScreen>,
}

impl<S: SessionStore> Wizard<S> {
    /// Begin a session on `store` and open the setup screen.
    pub fn start(store: S) -> WalletResult<Self> {
        let mut wizard = Self {
            session: Session::begin(store),
            screen: Screen::Setup,
            setup: SetupState::new(),
            chosen_network: None,
            accounts: None,
        };
        wizard.open(Screen::Setup)?;
        Ok(wizard)
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn setup(&self) -> &SetupState {
        &self.setup
    }

    pub fn setup_mut(&mut self) -> &mut SetupState {
        &mut self.setup
    }

    pub fn chosen_network(&self) -> Option<Network> {
        self.chosen_network
    }

    pub fn choose_network(&mut self, network: Network) {
        self.chosen_network = Some(network);
    }

    /// The generate-accounts screen, while it is open
    pub fn accounts(&self) -> Option<&AccountsScreen> {
        self.accounts.as_ref()
    }

    pub fn accounts_mut(&mut self) -> Option<&mut AccountsScreen> {
        self.accounts.as_mut()
    }

    // =========================================================================
    // NAVIGATION
    // =========================================================================

    /// Open `target`, redirecting to setup when its prerequisites are not in
    /// the session. Returns the screen actually shown.
    pub fn open(&mut self, target: Screen) -> WalletResult<Screen> {
        let landed = match target {
            Screen::Setup => {
                if self.setup.phrase().is_none() && !self.setup.is_import_open() {
                    if let Some(phrase) = self.stored_phrase()? {
                        self.setup.restore(phrase);
                    }
                }
                Screen::Setup
            }
            Screen::SelectNetwork => {
                if self.stored_phrase()?.is_none() {
                    Screen::Setup
                } else {
                    if self.chosen_network.is_none() {
                        self.chosen_network = self.stored_network()?;
                    }
                    Screen::SelectNetwork
                }
            }
            Screen::GenerateAccounts => match (self.stored_phrase()?, self.stored_network()?) {
                (Some(phrase), Some(network)) => {
                    let reuse = matches!(
                        &self.accounts,
                        Some(screen) if screen.network() == network && screen.phrase() == &phrase
                    );
                    if !reuse {
                        self.accounts = Some(AccountsScreen::new(phrase, network));
                    }
                    Screen::GenerateAccounts
                }
                _ => Screen::Setup,
            },
        };

        if landed != target {
            tracing::info!(%target, %landed, "navigation guard redirected");
        } else {
            tracing::info!(screen = %landed, "screen opened");
        }
        self.screen = landed;
        Ok(landed)
    }

    /// Commit the current screen and move forward.
    pub fn next(&mut self) -> WalletResult<Screen> {
        match self.screen {
            Screen::Setup => {
                let phrase = self.setup.phrase().ok_or_else(|| {
                    WalletError::Validation("Create or import a recovery phrase first".to_string())
                })?;
                self.session.commit_phrase(phrase)?;
                self.open(Screen::SelectNetwork)
            }
            Screen::SelectNetwork => {
                let network = self.chosen_network.ok_or_else(|| {
                    WalletError::Validation("Select a network first".to_string())
                })?;
                self.session.commit_network(network)?;
                self.open(Screen::GenerateAccounts)
            }
            Screen::GenerateAccounts => Err(WalletError::Validation(
                "Already on the last screen".to_string(),
            )),
        }
    }

    /// Go to the previous screen. Values entered on earlier screens stay.
    pub fn back(&mut self) -> WalletResult<Screen> {
        match self.screen {
            Screen::Setup => Ok(Screen::Setup),
            Screen::SelectNetwork => self.open(Screen::Setup),
            Screen::GenerateAccounts => self.change_network(),
        }
    }

    /// Leave the accounts screen for network selection. Accounts derived for
    /// the current network are dropped.
    pub fn change_network(&mut self) -> WalletResult<Screen> {
        self.accounts = None;
        self.open(Screen::SelectNetwork)
    }

    /// Onboarding done: clear the session and return the accounts generated.
    pub fn finish(&mut self) -> WalletResult<Option<AccountsScreen>> {
        let accounts = self.accounts.take();
        self.reset()?;
        tracing::info!("wizard finished");
        Ok(accounts)
    }

    /// Abandon onboarding: clear the session and all screen state.
    pub fn cancel(&mut self) -> WalletResult<()> {
        self.accounts = None;
        self.reset()?;
        tracing::info!("wizard cancelled");
        Ok(())
    }

    fn reset(&mut self) -> WalletResult<()> {
        self.session.clear()?;
        self.setup = SetupState::new();
        self.chosen_network = None;
        self.screen = Screen::Setup;
        Ok(())
    }

    // =========================================================================
    // SESSION READS
    // =========================================================================

    // Corrupt values are treated as absent so the guards send the user back
    // to setup; store failures still propagate.

    fn stored_phrase(&self) -> WalletResult<Option<RecoveryPhrase>> {
        tolerate_corrupt(self.session.phrase())
    }

    fn stored_network(&self) -> WalletResult<Option<Network>> {
        tolerate_corrupt(self.session.network())
    }
}

fn tolerate_corrupt<T>(value: WalletResult<Option<T>>) -> WalletResult<Option<T>> {
    match value {
        Err(WalletError::Session(SessionError::CorruptValue { key, reason })) => {
            tracing::warn!(%key, %reason, "ignoring corrupt session value");
            Ok(None)
        }
        other => other,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemoryStore, MNEMONIC_KEY, NETWORK_KEY};

    const TEST_PHRASE: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn wizard_with(entries: &[(&str, &str)]) -> Wizard<MemoryStore> {
        let mut store = MemoryStore::new();
        for (key, value) in entries {
            store.set(key, value).unwrap();
        }
        Wizard::start(store).unwrap()
    }

    #[test]
    fn test_full_forward_flow() {
        let mut wizard = wizard_with(&[]);
        assert_eq!(wizard.screen(), Screen::Setup);

        wizard.setup_mut().toggle_import();
        wizard.setup_mut().paste_import(TEST_PHRASE).unwrap();
        wizard.setup_mut().submit_import().unwrap();
        assert_eq!(wizard.next().unwrap(), Screen::SelectNetwork);
        assert_eq!(
            wizard.session().store().get(MNEMONIC_KEY).unwrap(),
            Some(TEST_PHRASE.to_string())
        );

        wizard.choose_network(Network::Solana);
        assert_eq!(wizard.next().unwrap(), Screen::GenerateAccounts);
        assert_eq!(
            wizard.session().store().get(NETWORK_KEY).unwrap(),
            Some("solana".to_string())
        );

        let screen = wizard.accounts_mut().unwrap();
        screen.generate_account().unwrap();
        screen.generate_account().unwrap();
        assert_eq!(wizard.accounts().unwrap().accounts().len(), 2);
    }

    #[test]
    fn test_next_requires_input() {
        let mut wizard = wizard_with(&[]);
        assert!(matches!(wizard.next(), Err(WalletError::Validation(_))));
        assert_eq!(wizard.screen(), Screen::Setup);

        wizard.setup_mut().create_new_wallet();
        wizard.next().unwrap();
        assert!(matches!(wizard.next(), Err(WalletError::Validation(_))));
        assert_eq!(wizard.screen(), Screen::SelectNetwork);
        assert_eq!(wizard.session().store().get(NETWORK_KEY).unwrap(), None);
    }

    #[test]
    fn test_accounts_guard_without_phrase() {
        let mut wizard = wizard_with(&[(NETWORK_KEY, "ethereum")]);
        assert_eq!(wizard.open(Screen::GenerateAccounts).unwrap(), Screen::Setup);
        assert_eq!(wizard.screen(), Screen::Setup);
        assert!(wizard.accounts().is_none());
    }

    #[test]
    fn test_accounts_guard_without_network() {
        let mut wizard = wizard_with(&[(MNEMONIC_KEY, TEST_PHRASE)]);
        assert_eq!(wizard.open(Screen::GenerateAccounts).unwrap(), Screen::Setup);
    }

    #[test]
    fn test_select_network_guard() {
        let mut wizard = wizard_with(&[]);
        assert_eq!(wizard.open(Screen::SelectNetwork).unwrap(), Screen::Setup);

        let mut wizard = wizard_with(&[(MNEMONIC_KEY, TEST_PHRASE)]);
        assert_eq!(wizard.open(Screen::SelectNetwork).unwrap(), Screen::SelectNetwork);
    }

    #[test]
    fn test_corrupt_phrase_redirects() {
        let mut wizard = wizard_with(&[(MNEMONIC_KEY, "garbage"), (NETWORK_KEY, "solana")]);
        assert_eq!(wizard.open(Screen::GenerateAccounts).unwrap(), Screen::Setup);
    }

    #[test]
    fn test_resume_restores_setup_phrase() {
        let wizard = wizard_with(&[(MNEMONIC_KEY, TEST_PHRASE)]);
        assert_eq!(wizard.setup().phrase().map(|p| p.phrase()), Some(TEST_PHRASE));
    }

    #[test]
    fn test_back_keeps_entered_values() {
        let mut wizard = wizard_with(&[]);
        wizard.setup_mut().create_new_wallet();
        let phrase = wizard.setup().phrase().cloned();
        wizard.next().unwrap();
        wizard.choose_network(Network::Ethereum);

        assert_eq!(wizard.back().unwrap(), Screen::Setup);
        assert_eq!(wizard.setup().phrase().cloned(), phrase);

        assert_eq!(wizard.next().unwrap(), Screen::SelectNetwork);
        assert_eq!(wizard.chosen_network(), Some(Network::Ethereum));
    }

    #[test]
    fn test_change_network_drops_accounts() {
        let mut wizard = wizard_with(&[(MNEMONIC_KEY, TEST_PHRASE), (NETWORK_KEY, "ethereum")]);
        wizard.open(Screen::GenerateAccounts).unwrap();
        wizard.accounts_mut().unwrap().generate_account().unwrap();

        assert_eq!(wizard.back().unwrap(), Screen::SelectNetwork);
        assert!(wizard.accounts().is_none());
        assert_eq!(wizard.chosen_network(), Some(Network::Ethereum));

        wizard.choose_network(Network::Solana);
        wizard.next().unwrap();
        let screen = wizard.accounts().unwrap();
        assert_eq!(screen.network(), Network::Solana);
        assert!(screen.accounts().is_empty());
    }

    #[test]
    fn test_reopen_same_network_keeps_accounts() {
        let mut wizard = wizard_with(&[(MNEMONIC_KEY, TEST_PHRASE), (NETWORK_KEY, "solana")]);
        wizard.open(Screen::GenerateAccounts).unwrap();
        wizard.accounts_mut().unwrap().generate_account().unwrap();

        wizard.open(Screen::GenerateAccounts).unwrap();
        assert_eq!(wizard.accounts().unwrap().accounts().len(), 1);
    }

    #[test]
    fn test_finish_clears_session() {
        let mut wizard = wizard_with(&[(MNEMONIC_KEY, TEST_PHRASE), (NETWORK_KEY, "solana")]);
        wizard.open(Screen::GenerateAccounts).unwrap();
        wizard.accounts_mut().unwrap().generate_account().unwrap();

        let done = wizard.finish().unwrap().unwrap();
        assert_eq!(done.accounts().len(), 1);
        assert!(wizard.session().store().is_empty());
        assert_eq!(wizard.screen(), Screen::Setup);
        assert!(wizard.setup().phrase().is_none());
    }

    #[test]
    fn test_cancel_clears_session() {
        let mut wizard = wizard_with(&[(MNEMONIC_KEY, TEST_PHRASE)]);
        wizard.cancel().unwrap();
        assert!(wizard.session().store().is_empty());
        assert_eq!(wizard.open(Screen::SelectNetwork).unwrap(), Screen::Setup);
    }
}
