//! A single chat session with the twin.
//!
//! A [`ChatSession`] lives as long as the chat view that created it. It
//! starts from the seed transcript, appends what the user types and, once
//! the caller's reply delay has passed, one canned reply per message.

use super::message::{ChatMessage, Sender};
use super::picker::ResponsePicker;
use crate::dataset::ChatSeed;

#[derive(Debug, Clone)]
pub struct ChatSession {
    /// Oldest first
    messages: Vec<ChatMessage>,
    responses: Vec<String>,
    /// Replies owed to the user; the typing indicator shows while non-zero
    pending_replies: usize,
    next_id: u64,
}

impl ChatSession {
    /// Session seeded from the fixture, dated relative to the current time.
    pub fn seeded(seed: &ChatSeed) -> Self {
        Self::seeded_at(seed, chrono::Utc::now().timestamp_millis())
    }

    /// Session seeded from the fixture, dated relative to `now` (ms).
    pub fn seeded_at(seed: &ChatSeed, now: i64) -> Self {
        let mut session = Self {
            messages: Vec::with_capacity(seed.transcript.len()),
            responses: seed.responses.clone(),
            pending_replies: 0,
            next_id: 1,
        };
        for line in &seed.transcript {
            session.push(line.sender, line.body.clone(), now - line.seconds_ago * 1000);
        }
        session
    }

    fn push(&mut self, sender: Sender, body: String, timestamp: i64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage::new(id, sender, body, timestamp));
        id
    }

    /// Append a user message.
    ///
    /// Blank input is rejected and returns `None`. Otherwise the message id
    /// is returned and a reply becomes owed.
    pub fn submit(&mut self, input: &str) -> Option<u64> {
        self.submit_at(input, chrono::Utc::now().timestamp_millis())
    }

    pub fn submit_at(&mut self, input: &str, now: i64) -> Option<u64> {
        let body = input.trim();
        if body.is_empty() {
            return None;
        }
        let id = self.push(Sender::User, body.to_string(), now);
        self.pending_replies += 1;
        tracing::debug!(id, pending = self.pending_replies, "User message submitted");
        Some(id)
    }

    /// Append the twin's reply to the oldest unanswered message.
    ///
    /// Returns `None` when no reply is owed or there is nothing to say. An
    /// owed reply with nothing to say is still settled, so the typing
    /// indicator clears.
    pub fn deliver_reply(&mut self, picker: &mut dyn ResponsePicker) -> Option<&ChatMessage> {
        self.deliver_reply_at(picker, chrono::Utc::now().timestamp_millis())
    }

    pub fn deliver_reply_at(
        &mut self,
        picker: &mut dyn ResponsePicker,
        now: i64,
    ) -> Option<&ChatMessage> {
        if self.pending_replies == 0 {
            return None;
        }
        self.pending_replies -= 1;
        if self.responses.is_empty() {
            tracing::debug!("No canned responses, reply skipped");
            return None;
        }
        let index = picker.pick(self.responses.len()) % self.responses.len();
        let body = self.responses[index].clone();
        self.push(Sender::Ai, body, now);
        self.messages.last()
    }

    /// Whether the typing indicator should show.
    pub fn is_typing(&self) -> bool {
        self.pending_replies > 0
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
