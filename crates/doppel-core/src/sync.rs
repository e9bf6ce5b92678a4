//! Simulated data sync.
//!
//! A sync does nothing but hold the store's sync flag up for a while. The
//! caller owns the timer: it calls [`SyncSimulation::begin`], waits the
//! configured delay (see [`crate::schedule::run_after`]) and then calls
//! [`SyncSimulation::finish`] with the ticket it was given.
//!
//! An announcing simulation hands back a toast for each end of the sync; a
//! [`quiet`](SyncSimulation::quiet) one only moves the flag.

use std::time::Duration;

use crate::notice::Notice;
use crate::store::Store;

/// Proof that this caller started the sync currently in flight.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a sync ticket must be handed back to finish()"]
pub struct SyncTicket {
    _private: (),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncSimulation {
    delay: Duration,
    announce: bool,
}

impl SyncSimulation {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            announce: true,
        }
    }

    /// Same delay, no notices.
    pub fn quiet(self) -> Self {
        Self {
            announce: false,
            ..self
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Raise the sync flag.
    ///
    /// Returns `None` while another sync is already showing, so overlapping
    /// requests collapse into the one in flight.
    pub fn begin(&self, store: &mut Store) -> Option<(SyncTicket, Option<Notice>)> {
        if store.is_syncing() {
            tracing::debug!("Sync already in flight, ignoring request");
            return None;
        }
        store.set_syncing(true);
        tracing::info!(delay_ms = self.delay.as_millis() as u64, "Sync started");
        Some((SyncTicket { _private: () }, self.notice(Notice::sync_started)))
    }

    /// Lower the sync flag.
    pub fn finish(&self, store: &mut Store, _ticket: SyncTicket) -> Option<Notice> {
        store.set_syncing(false);
        tracing::info!("Sync complete");
        self.notice(Notice::sync_complete)
    }

    fn notice(&self, make: fn() -> Notice) -> Option<Notice> {
        self.announce.then(make)
    }
}

impl Default for SyncSimulation {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_SYNC_DELAY_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_and_finish() {
        let mut store = Store::new();
        let sync = SyncSimulation::default();

        let (ticket, notice) = sync.begin(&mut store).expect("first sync starts");
        assert!(store.is_syncing());
        assert_eq!(notice, Some(Notice::sync_started()));

        let notice = sync.finish(&mut store, ticket);
        assert!(!store.is_syncing());
        assert_eq!(notice, Some(Notice::sync_complete()));
    }

    #[test]
    fn test_quiet_sync_moves_flag_only() {
        let mut store = Store::new();
        let sync = SyncSimulation::default().quiet();
        assert_eq!(sync.delay(), SyncSimulation::default().delay());

        let (ticket, started) = sync.begin(&mut store).unwrap();
        assert!(store.is_syncing());
        assert_eq!(started, None);

        assert_eq!(sync.finish(&mut store, ticket), None);
        assert!(!store.is_syncing());
    }

    #[test]
    fn test_overlapping_requests_collapse() {
        let mut store = Store::new();
        let sync = SyncSimulation::new(Duration::from_millis(10));

        let (ticket, _) = sync.begin(&mut store).unwrap();
        assert!(sync.begin(&mut store).is_none());
        assert!(sync.begin(&mut store).is_none());
        assert!(store.is_syncing());

        let _ = sync.finish(&mut store, ticket);
        assert!(!store.is_syncing());
        assert!(sync.begin(&mut store).is_some());
    }

    #[test]
    fn test_default_delay() {
        assert_eq!(SyncSimulation::default().delay(), Duration::from_millis(3000));
    }
}
