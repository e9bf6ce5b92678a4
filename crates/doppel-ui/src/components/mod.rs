//! Reusable dashboard components

mod button;
mod glass_panel;
mod metric_card;
mod progress_bar;
mod spinner;
mod status_pill;
mod tag_pill;
mod text_input;

pub use button::*;
pub use glass_panel::*;
pub use metric_card::*;
pub use progress_bar::*;
pub use spinner::*;
pub use status_pill::*;
pub use tag_pill::*;
pub use text_input::*;
