//! Toast notices.
//!
//! Notices are cosmetic: they tell the user a simulated action started or
//! finished and never reflect a real backend outcome.

use std::collections::VecDeque;

/// Visual weight of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeKind {
    #[default]
    Info,
    Destructive,
}

impl NoticeKind {
    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::Info => "notice-info",
            NoticeKind::Destructive => "notice-destructive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NoticeKind::Info,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NoticeKind::Destructive,
        }
    }

    pub fn sync_started() -> Self {
        Self::info("Syncing data...", "Your digital footprint is being analyzed.")
    }

    pub fn sync_complete() -> Self {
        Self::info("Sync complete!", "Your Doppelgänger has been updated.")
    }

    pub fn deletion_requested() -> Self {
        Self::destructive(
            "Data deletion requested",
            "Your data will be permanently deleted within 24 hours.",
        )
    }
}

/// Identifier of a queued notice
pub type NoticeId = u64;

/// Bounded queue of the most recent notices; oldest are evicted first.
#[derive(Debug, Clone)]
pub struct NoticeQueue {
    entries: VecDeque<(NoticeId, Notice)>,
    limit: usize,
    next_id: NoticeId,
}

impl NoticeQueue {
    /// A limit of 0 is treated as 1.
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: limit.max(1),
            next_id: 0,
        }
    }

    pub fn push(&mut self, notice: Notice) -> NoticeId {
        let id = self.next_id;
        self.next_id += 1;
        tracing::info!(title = %notice.title, "Notice");
        self.entries.push_back((id, notice));
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
        id
    }

    /// Remove a notice. Returns `false` if it had already gone.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Notices, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &(NoticeId, Notice)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NoticeQueue {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_notices() {
        assert_eq!(Notice::sync_started().kind, NoticeKind::Info);
        assert_eq!(Notice::sync_complete().title, "Sync complete!");
        assert_eq!(Notice::deletion_requested().kind, NoticeKind::Destructive);
        assert_eq!(NoticeKind::Destructive.class(), "notice-destructive");
    }

    #[test]
    fn test_queue_evicts_oldest() {
        let mut queue = NoticeQueue::new(2);
        queue.push(Notice::info("one", ""));
        queue.push(Notice::info("two", ""));
        queue.push(Notice::info("three", ""));

        let titles: Vec<&str> = queue.iter().map(|(_, n)| n.title.as_str()).collect();
        assert_eq!(titles, vec!["two", "three"]);
    }

    #[test]
    fn test_dismiss() {
        let mut queue = NoticeQueue::default();
        let first = queue.push(Notice::sync_started());
        queue.push(Notice::sync_complete());

        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_zero_limit_keeps_one() {
        let mut queue = NoticeQueue::new(0);
        queue.push(Notice::info("a", ""));
        queue.push(Notice::info("b", ""));
        assert_eq!(queue.len(), 1);
    }
}
