//! App-level components: the dashboard shell, cards bound to core types,
//! inline SVG charts and the toast host.

mod charts;
mod chat_bubble;
mod dashboard_layout;
mod icons;
mod navbar;
mod notice_host;
mod oauth_card;
mod sidebar;

pub use charts::{ChartSeries, LineChart};
pub use chat_bubble::{ChatBubble, TypingBubble};
pub use dashboard_layout::DashboardLayout;
pub use icons::glyph;
pub use navbar::Navbar;
pub use notice_host::NoticeHost;
pub use oauth_card::OAuthCard;
pub use sidebar::Sidebar;
