//! Observable application state.
//!
//! [`Store`] is the single source of truth for state shared across pages:
//! the account registry, the sync flag, the sidebar flag and the mood shown
//! on the dashboard. It is an ordinary value owned by the composition root,
//! so tests build a fresh one per case.
//!
//! Every mutator notifies all current subscribers synchronously, before it
//! returns, with the state as it stands after the mutation. There is no
//! batching and no deferred dispatch.
//!
//! ```
//! use doppel_core::{Store, StoreEvent};
//!
//! let mut store = Store::new();
//! let id = store.subscribe(|state, event| {
//!     if let StoreEvent::AccountConnected { id } = event {
//!         assert!(state.accounts.get(id).unwrap().connected);
//!     }
//! });
//!
//! store.connect_account("spotify");
//! store.unsubscribe(id);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::account::{Account, AccountRegistry};

/// Mood shown on a fresh dashboard.
pub const DEFAULT_MOOD: f64 = 82.0;

/// Snapshot of everything the store holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreState {
    pub accounts: AccountRegistry,
    /// A single flag: overlapping sync requests collapse into one
    pub is_syncing: bool,
    pub sidebar_collapsed: bool,
    /// Nominally in `[0, 100]`; recorded exactly as given
    pub current_mood: f64,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            accounts: AccountRegistry::seeded(),
            is_syncing: false,
            sidebar_collapsed: false,
            current_mood: DEFAULT_MOOD,
        }
    }
}

/// What a mutation did, delivered to subscribers alongside the new state.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    AccountConnected { id: String },
    AccountDisconnected { id: String },
    /// A connect/disconnect named an id the registry doesn't hold; state is unchanged
    AccountNotFound { id: String },
    SyncingChanged(bool),
    SidebarToggled { collapsed: bool },
    MoodChanged(f64),
}

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreState, &StoreEvent)>;

/// Observable state container.
pub struct Store {
    state: StoreState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Store {
    /// Store with seeded accounts and default preferences.
    pub fn new() -> Self {
        Self::with_state(StoreState::default())
    }

    pub fn with_state(state: StoreState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    // ----- subscriptions -----

    /// Register a listener called after every mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreState, &StoreEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    #[cfg(test)]
    pub(crate) fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self, event: StoreEvent) {
        tracing::debug!(?event, subscribers = self.listeners.len(), "Store changed");
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state, &event);
        }
    }

    // ----- mutators -----

    /// Connect an account by id. Unknown ids leave the state untouched.
    ///
    /// Returns whether the id matched an account.
    pub fn connect_account(&mut self, id: &str) -> bool {
        let found = self.state.accounts.connect(id);
        self.notify(account_event(found, id, true));
        found
    }

    /// Disconnect an account by id. Unknown ids leave the state untouched.
    pub fn disconnect_account(&mut self, id: &str) -> bool {
        let found = self.state.accounts.disconnect(id);
        self.notify(account_event(found, id, false));
        found
    }

    /// Record the sync flag. Setting the current value again is harmless.
    pub fn set_syncing(&mut self, syncing: bool) {
        self.state.is_syncing = syncing;
        self.notify(StoreEvent::SyncingChanged(syncing));
    }

    pub fn toggle_sidebar(&mut self) {
        self.state.sidebar_collapsed = !self.state.sidebar_collapsed;
        let collapsed = self.state.sidebar_collapsed;
        self.notify(StoreEvent::SidebarToggled { collapsed });
    }

    /// Record the displayed mood. The value is stored as given; see
    /// [`clamp_mood`] for callers that need it bounded.
    pub fn set_current_mood(&mut self, mood: f64) {
        self.state.current_mood = mood;
        self.notify(StoreEvent::MoodChanged(mood));
    }

    // ----- reads -----

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn accounts(&self) -> &[Account] {
        self.state.accounts.as_slice()
    }

    pub fn registry(&self) -> &AccountRegistry {
        &self.state.accounts
    }

    pub fn account(&self, id: &str) -> Option<&Account> {
        self.state.accounts.get(id)
    }

    pub fn is_syncing(&self) -> bool {
        self.state.is_syncing
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.state.sidebar_collapsed
    }

    pub fn current_mood(&self) -> f64 {
        self.state.current_mood
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}

fn account_event(found: bool, id: &str, connected: bool) -> StoreEvent {
    let id = id.to_string();
    match (found, connected) {
        (false, _) => StoreEvent::AccountNotFound { id },
        (true, true) => StoreEvent::AccountConnected { id },
        (true, false) => StoreEvent::AccountDisconnected { id },
    }
}

/// Bound a mood value to `[0, 100]`. NaN maps to 0.
pub fn clamp_mood(mood: f64) -> f64 {
    if mood.is_nan() {
        0.0
    } else {
        mood.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_store() -> (Store, Rc<RefCell<Vec<StoreEvent>>>) {
        let mut store = Store::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        store.subscribe(move |_, event| sink.borrow_mut().push(event.clone()));
        (store, events)
    }

    #[test]
    fn test_initial_state() {
        let store = Store::new();
        assert_eq!(store.accounts().len(), 4);
        assert!(!store.is_syncing());
        assert!(!store.sidebar_collapsed());
        assert_eq!(store.current_mood(), 82.0);
    }

    #[test]
    fn test_connect_spotify_scenario() {
        let mut store = Store::new();
        assert!(store.connect_account("spotify"));

        let connected: Vec<&str> = store
            .accounts()
            .iter()
            .filter(|a| a.connected)
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(connected, vec!["spotify"]);
        assert_eq!(store.accounts().len(), 4);
    }

    #[test]
    fn test_unknown_id_notifies_without_change() {
        let (mut store, events) = recording_store();
        let before = store.state().clone();

        assert!(!store.connect_account("nonexistent"));
        assert_eq!(store.state(), &before);
        assert_eq!(
            events.borrow().as_slice(),
            &[StoreEvent::AccountNotFound {
                id: "nonexistent".to_string()
            }]
        );
    }

    #[test]
    fn test_toggle_sidebar_twice() {
        let mut store = Store::new();
        store.toggle_sidebar();
        assert!(store.sidebar_collapsed());
        store.toggle_sidebar();
        assert!(!store.sidebar_collapsed());
    }

    #[test]
    fn test_set_mood_not_clamped() {
        let mut store = Store::new();
        store.set_current_mood(55.0);
        assert_eq!(store.current_mood(), 55.0);

        store.set_current_mood(140.0);
        assert_eq!(store.current_mood(), 140.0);
    }

    #[test]
    fn test_listener_sees_post_mutation_state() {
        let mut store = Store::new();
        let seen = Rc::new(RefCell::new(None));
        let sink = seen.clone();
        store.subscribe(move |state, _| *sink.borrow_mut() = Some(state.is_syncing));

        store.set_syncing(true);
        assert_eq!(*seen.borrow(), Some(true));
        store.set_syncing(false);
        assert_eq!(*seen.borrow(), Some(false));
    }

    #[test]
    fn test_events_in_call_order() {
        let (mut store, events) = recording_store();

        store.connect_account("google");
        store.toggle_sidebar();
        store.set_current_mood(40.0);
        store.disconnect_account("google");

        assert_eq!(
            events.borrow().as_slice(),
            &[
                StoreEvent::AccountConnected {
                    id: "google".to_string()
                },
                StoreEvent::SidebarToggled { collapsed: true },
                StoreEvent::MoodChanged(40.0),
                StoreEvent::AccountDisconnected {
                    id: "google".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let (mut store, events) = recording_store();
        let extra = store.subscribe(|_, _| {});
        assert_eq!(store.subscriber_count(), 2);

        assert!(store.unsubscribe(extra));
        assert!(!store.unsubscribe(extra));
        assert_eq!(store.subscriber_count(), 1);

        store.toggle_sidebar();
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn test_clamp_mood() {
        assert_eq!(clamp_mood(-5.0), 0.0);
        assert_eq!(clamp_mood(55.5), 55.5);
        assert_eq!(clamp_mood(250.0), 100.0);
        assert_eq!(clamp_mood(f64::NAN), 0.0);
    }
}
