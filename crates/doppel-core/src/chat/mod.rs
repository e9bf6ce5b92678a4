//! Twin chat
//!
//! There is no model behind the chat. The twin answers each user message
//! with one of a handful of canned replies, picked by a [`ResponsePicker`]
//! so tests can make the choice deterministic.
//!
//! # Usage
//!
//! ```
//! use doppel_core::chat::{ChatSession, FixedPicker};
//! use doppel_core::MockDataset;
//!
//! let data = MockDataset::seed().unwrap();
//! let mut session = ChatSession::seeded(&data.chat);
//!
//! session.submit("What kind of music do I like?");
//! assert!(session.is_typing());
//!
//! // after the reply delay
//! let reply = session.deliver_reply(&mut FixedPicker(0)).unwrap();
//! assert!(reply.is_from_ai());
//! ```

mod message;
mod picker;
mod session;

pub use message::{ChatMessage, Sender};
pub use picker::{FixedPicker, RandomPicker, ResponsePicker, SequencePicker};
pub use session::ChatSession;
