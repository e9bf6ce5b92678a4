//! Doppel UI Components
//!
//! Dioxus building blocks for the Doppel dashboard. Everything here is
//! presentational: components take plain props and raise events, the app
//! crate wires them to the store and the router.
//!
//! ## Visual Language
//!
//! Dark glass panels over a deep indigo background:
//! - **Violet (#8b5cf6)**: primary actions, active navigation
//! - **Cyan (#22d3ee)**: charts, live data, the "syncing" pulse
//! - **Rose (#f43f5e)**: destructive actions
//! - **Emerald (#34d399)**: connected accounts, positive trends

pub mod components;

pub use components::*;
