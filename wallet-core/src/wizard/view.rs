// wallet-core/src/wizard/view.rs
//
// Selected-account balance view.
//
// Every selection issues a `BalanceRequest` carrying a fresh token. A result
// is applied only when its token is still the latest one, so a slow response
// for an earlier selection can never overwrite a newer one.

use crate::chains::Network;
use crate::error::WalletResult;
use crate::network::Balance;

/// One outstanding balance lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceRequest {
    token: u64,
    pub network: Network,
    pub index: u32,
    pub address: String,
}

impl BalanceRequest {
    pub fn token(&self) -> u64 {
        self.token
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BalanceState {
    Idle,
    Loading,
    Loaded(Balance),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct BalanceView {
    selected: Option<u32>,
    state: BalanceState,
    latest: u64,
}

impl Default for BalanceView {
    fn default() -> Self {
        Self {
            selected: None,
            state: BalanceState::Idle,
            latest: 0,
        }
    }
}

impl BalanceView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn state(&self) -> &BalanceState {
        &self.state
    }

    pub fn balance(&self) -> Option<&Balance> {
        match &self.state {
            BalanceState::Loaded(balance) => Some(balance),
            _ => None,
        }
    }

    /// Select account `index` and start loading its balance.
    pub fn begin(&mut self, network: Network, index: u32, address: &str) -> BalanceRequest {
        self.latest += 1;
        self.selected = Some(index);
        self.state = BalanceState::Loading;
        BalanceRequest {
            token: self.latest,
            network,
            index,
            address: address.to_string(),
        }
    }

    /// Apply `result` if `request` is the latest one. Returns whether the view
    /// changed.
    pub fn complete(&mut self, request: &BalanceRequest, result: WalletResult<Balance>) -> bool {
        if request.token != self.latest {
            tracing::debug!(
                token = request.token,
                latest = self.latest,
                "discarding stale balance response"
            );
            return false;
        }

        self.state = match result {
            Ok(balance) => BalanceState::Loaded(balance),
            Err(e) => BalanceState::Failed(e.to_string()),
        };
        true
    }

    /// Deselect; any response still in flight becomes stale.
    pub fn reset(&mut self) {
        self.latest += 1;
        self.selected = None;
        self.state = BalanceState::Idle;
    }
}
