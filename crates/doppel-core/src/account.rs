//! Connectable accounts and the registry that holds them.
//!
//! The registry is seeded once with a fixed set of identity providers.
//! Accounts are never added or removed afterwards; only their connection
//! status changes.

use serde::{Deserialize, Serialize};

/// Label written to [`Account::last_sync`] when an account is connected.
pub const JUST_NOW: &str = "Just now";

/// One external identity provider the user may connect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Stable key, unique within the registry
    pub id: String,
    /// Display label
    pub name: String,
    /// Symbolic icon key, rendered by the UI
    pub icon: String,
    /// Whether the account is currently connected
    pub connected: bool,
    /// Human-readable label of the last sync; `Some` only while connected
    pub last_sync: Option<String>,
}

impl Account {
    /// Create a disconnected account.
    pub fn new(id: impl Into<String>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            connected: false,
            last_sync: None,
        }
    }

    fn connect(&mut self) {
        self.connected = true;
        self.last_sync = Some(JUST_NOW.to_string());
    }

    fn disconnect(&mut self) {
        self.connected = false;
        self.last_sync = None;
    }
}

/// Ordered collection of accounts. Order is display order and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRegistry {
    accounts: Vec<Account>,
}

impl AccountRegistry {
    /// Build a registry from a fixed list.
    ///
    /// Later duplicates of an id are dropped so ids stay unique.
    pub fn from_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        let mut unique: Vec<Account> = Vec::new();
        for account in accounts {
            if unique.iter().any(|a| a.id == account.id) {
                tracing::warn!(id = %account.id, "Dropping duplicate account id");
                continue;
            }
            unique.push(account);
        }
        Self { accounts: unique }
    }

    /// The four providers the app ships with, all disconnected.
    pub fn seeded() -> Self {
        Self::from_accounts([
            Account::new("google", "Google", "mail"),
            Account::new("spotify", "Spotify", "music"),
            Account::new("youtube", "YouTube", "video"),
            Account::new("instagram", "Instagram", "camera"),
        ])
    }

    /// Mark an account connected. Returns `false` if the id is unknown.
    pub fn connect(&mut self, id: &str) -> bool {
        match self.get_mut(id) {
            Some(account) => {
                account.connect();
                true
            }
            None => false,
        }
    }

    /// Mark an account disconnected. Returns `false` if the id is unknown.
    pub fn disconnect(&mut self, id: &str) -> bool {
        match self.get_mut(id) {
            Some(account) => {
                account.disconnect();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.id == id)
    }

    /// Accounts in display order.
    pub fn as_slice(&self) -> &[Account] {
        &self.accounts
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Number of connected accounts.
    pub fn connected_count(&self) -> usize {
        self.accounts.iter().filter(|a| a.connected).count()
    }

    /// Share of connected accounts as a percentage in `[0, 100]`.
    ///
    /// An empty registry reports 0.
    pub fn connection_progress(&self) -> f64 {
        if self.accounts.is_empty() {
            return 0.0;
        }
        self.connected_count() as f64 / self.accounts.len() as f64 * 100.0
    }

    /// Whether the user may continue from the connect flow to the dashboard.
    pub fn can_continue(&self) -> bool {
        self.connected_count() > 0
    }
}

impl Default for AccountRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}
