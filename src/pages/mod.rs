//! Page components for Doppel.

mod connect;
mod dashboard;
mod landing;
mod not_found;

pub use connect::Connect;
pub use dashboard::{Chat, DashboardHome, Interests, Mood, Personality, Settings, Social};
pub use landing::Landing;
pub use not_found::NotFound;
