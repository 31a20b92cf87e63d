// wallet-core/src/wizard/accounts.rs
//
// Generate-accounts screen: one network, a growing account list, per-account
// private key reveal and a single selected-balance view.

use super::view::{BalanceRequest, BalanceView};
use crate::account::{Account, AccountList, AccountSequencer};
use crate::chains::Network;
use crate::crypto::RecoveryPhrase;
use crate::error::{WalletError, WalletResult};
use crate::network::{Balance, BalanceFetcher};
use std::collections::BTreeSet;

#[derive(Debug)]
pub struct AccountsScreen {
    phrase: RecoveryPhrase,
    sequencer: AccountSequencer,
    revealed: BTreeSet<u32>,
    view: BalanceView,
}

impl AccountsScreen {
    pub fn new(phrase: RecoveryPhrase, network: Network) -> Self {
        Self {
            phrase,
            sequencer: AccountSequencer::new(network),
            revealed: BTreeSet::new(),
            view: BalanceView::new(),
        }
    }

    pub fn network(&self) -> Network {
        self.sequencer.network()
    }

    pub fn phrase(&self) -> &RecoveryPhrase {
        &self.phrase
    }

    pub fn accounts(&self) -> &AccountList {
        self.sequencer.accounts()
    }

    pub fn view(&self) -> &BalanceView {
        &self.view
    }

    /// Derive and append the next account of this screen's network.
    pub fn generate_account(&mut self) -> WalletResult<&Account> {
        let account = self.sequencer.derive_next(Some(&self.phrase))?;
        tracing::info!(
            network = %account.network(),
            index = account.index(),
            address = account.address(),
            "account generated"
        );
        Ok(account)
    }

    fn account(&self, index: u32) -> WalletResult<&Account> {
        self.accounts()
            .get(index)
            .ok_or_else(|| WalletError::Validation(format!("no account with index {}", index)))
    }

    /// Flip the private key visibility of account `index`; returns the new flag.
    pub fn toggle_private_key(&mut self, index: u32) -> WalletResult<bool> {
        self.account(index)?;
        if self.revealed.remove(&index) {
            Ok(false)
        } else {
            self.revealed.insert(index);
            Ok(true)
        }
    }

    pub fn is_private_key_revealed(&self, index: u32) -> bool {
        self.revealed.contains(&index)
    }

    /// Select account `index`; the view moves to loading and the returned
    /// request must be passed back to [`complete_balance`](Self::complete_balance).
    pub fn select_account(&mut self, index: u32) -> WalletResult<BalanceRequest> {
        let network = self.network();
        let address = self.account(index)?.address().to_string();
        Ok(self.view.begin(network, index, &address))
    }

    /// Apply a balance result; stale requests are ignored and return `false`.
    pub fn complete_balance(&mut self, request: &BalanceRequest, result: WalletResult<Balance>) -> bool {
        self.view.complete(request, result)
    }

    /// Re-select the current account and fetch its balance. Returns `false`
    /// when nothing is selected or a newer request won.
    pub async fn refresh_selected_balance(&mut self, fetcher: &BalanceFetcher) -> WalletResult<bool> {
        let index = match self.view.selected() {
            Some(index) => index,
            None => return Ok(false),
        };
        let request = self.select_account(index)?;
        let result = fetcher.fetch_balance(&request.address, request.network).await;
        Ok(self.complete_balance(&request, result))
    }
}
