//! Cross-route session state.
//!
//! Holds the selections the routes hand to each other: the customer opened
//! from the dashboard, the account opened from the customer detail, and the
//! shared loading flag. Constructed explicitly and passed where needed — no
//! ambient globals.

use sandbank_shared::types::AccountId;

use crate::customer::Customer;
use crate::state::Signal;

/// Session-scoped UI state.
#[derive(Debug, Default)]
pub struct SessionState {
    selected_customer: Signal<Option<Customer>>,
    selected_account_id: Signal<Option<AccountId>>,
    loading: Signal<bool>,
}

impl SessionState {
    /// Creates an empty session state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the currently selected customer, if any.
    #[must_use]
    pub fn selected_customer(&self) -> Option<Customer> {
        self.selected_customer.get()
    }

    /// Selects (or clears) the customer in focus.
    pub fn set_selected_customer(&self, customer: Option<Customer>) {
        self.selected_customer.set(customer);
    }

    /// Returns the currently selected account, if any.
    #[must_use]
    pub fn selected_account_id(&self) -> Option<AccountId> {
        self.selected_account_id.get()
    }

    /// Selects (or clears) the account in focus.
    pub fn set_selected_account_id(&self, account_id: Option<AccountId>) {
        self.selected_account_id.set(account_id);
    }

    /// Returns the shared loading flag.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading.get()
    }

    /// Sets the shared loading flag.
    pub fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    /// Resets every selection, e.g. on logout.
    pub fn clear(&self) {
        self.selected_customer.set(None);
        self.selected_account_id.set(None);
        self.loading.set(false);
    }
}
