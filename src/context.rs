//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::WalletAccount;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Connected wallet account, if any - read
    pub account: ReadSignal<Option<WalletAccount>>,
    set_account: WriteSignal<Option<WalletAccount>>,
    /// Generation counter for list refreshes - read
    refresh_epoch: ReadSignal<u64>,
    set_refresh_epoch: WriteSignal<u64>,
}

impl AppContext {
    pub fn new(
        account: (ReadSignal<Option<WalletAccount>>, WriteSignal<Option<WalletAccount>>),
        refresh_epoch: (ReadSignal<u64>, WriteSignal<u64>),
    ) -> Self {
        Self {
            account: account.0,
            set_account: account.1,
            refresh_epoch: refresh_epoch.0,
            set_refresh_epoch: refresh_epoch.1,
        }
    }

    /// Replace the connected account
    pub fn set_account(&self, account: Option<WalletAccount>) {
        self.set_account.set(account);
    }

    /// Address of the connected account, without tracking
    pub fn account_address(&self) -> Option<String> {
        self.account.get_untracked().map(|account| account.address)
    }

    /// Start a new refresh generation. A probe holds the returned ticket
    /// and may only apply its result while the ticket is still current.
    pub fn begin_refresh(&self) -> u64 {
        let epoch = self.refresh_epoch.get_untracked() + 1;
        self.set_refresh_epoch.set(epoch);
        epoch
    }

    /// Whether `epoch` is still the newest refresh
    pub fn is_current(&self, epoch: u64) -> bool {
        self.refresh_epoch.get_untracked() == epoch
    }
}
