//! Doppel Core Library
//!
//! State, fixtures and simulated behaviour behind the Doppel digital twin
//! dashboard.
//!
//! ## Overview
//!
//! Doppel presents a fictional "digital twin" of the user: personality,
//! mood, interests and social graph, plus a chat with the twin. None of it
//! is real. Accounts connect without OAuth, syncs only raise a flag for a
//! few seconds, and every chart renders the same embedded [`MockDataset`].
//!
//! The pieces with actual behaviour are:
//!
//! - **[`Store`]**: observable state shared across pages (accounts, sync
//!   flag, sidebar flag, current mood)
//! - **[`SyncSimulation`]**: the timed sync flag on top of the store
//! - **[`chat::ChatSession`]**: the seeded transcript plus canned replies
//! - **[`schedule`]**: delayed callbacks cancelled with their view
//!
//! ## Quick Start
//!
//! ```
//! use doppel_core::{MockDataset, Store};
//!
//! let data = MockDataset::seed()?;
//! let mut store = Store::new();
//!
//! store.connect_account("spotify");
//! assert_eq!(store.registry().connected_count(), 1);
//! assert_eq!(data.highlights.top_artist.value, "Lofi Girl");
//! # Ok::<(), doppel_core::DoppelError>(())
//! ```

pub mod account;
pub mod chat;
pub mod config;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod notice;
pub mod schedule;
pub mod store;
pub mod sync;
pub mod views;

// Re-exports
pub use account::{Account, AccountRegistry, JUST_NOW};
pub use config::AppConfig;
pub use dataset::MockDataset;
pub use error::{DoppelError, DoppelResult};
pub use notice::{Notice, NoticeId, NoticeKind, NoticeQueue};
pub use schedule::{run_after, ViewScope};
pub use store::{clamp_mood, Store, StoreEvent, StoreState, SubscriptionId, DEFAULT_MOOD};
pub use sync::{SyncSimulation, SyncTicket};
pub use views::DashboardView;
