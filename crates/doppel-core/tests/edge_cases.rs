//! Edge case tests across the store, fixture and chat session

use std::cell::RefCell;
use std::rc::Rc;

use doppel_core::chat::{ChatSession, FixedPicker, SequencePicker};
use doppel_core::dataset::{ChatSeed, TagSize};
use doppel_core::{
    clamp_mood, AccountRegistry, DoppelError, MockDataset, Notice, NoticeQueue, Store,
    StoreEvent, JUST_NOW,
};

// ============================================================================
// Store
// ============================================================================

#[test]
fn test_connect_twice_keeps_single_account() {
    let mut store = Store::new();
    assert!(store.connect_account("google"));
    assert!(store.connect_account("google"));

    assert_eq!(store.registry().connected_count(), 1);
    assert_eq!(store.account("google").unwrap().last_sync.as_deref(), Some(JUST_NOW));
}

#[test]
fn test_disconnect_never_connected() {
    let mut store = Store::new();
    assert!(store.disconnect_account("youtube"));

    let account = store.account("youtube").unwrap();
    assert!(!account.connected);
    assert!(account.last_sync.is_none());
}

#[test]
fn test_unknown_id_still_notifies() {
    let mut store = Store::new();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    store.subscribe(move |_, event| sink.borrow_mut().push(event.clone()));

    assert!(!store.connect_account("myspace"));
    assert!(!store.disconnect_account(""));

    assert_eq!(
        *events.borrow(),
        vec![
            StoreEvent::AccountNotFound { id: "myspace".to_string() },
            StoreEvent::AccountNotFound { id: String::new() },
        ]
    );
    assert_eq!(store.registry().connected_count(), 0);
}

#[test]
fn test_ids_are_case_sensitive() {
    let mut store = Store::new();
    assert!(!store.connect_account("Google"));
    assert!(!store.account("google").unwrap().connected);
}

#[test]
fn test_mood_is_not_clamped_by_store() {
    let mut store = Store::new();
    store.set_current_mood(140.0);
    assert_eq!(store.current_mood(), 140.0);

    store.set_current_mood(-3.5);
    assert_eq!(store.current_mood(), -3.5);
}

#[test]
fn test_clamp_mood_bounds() {
    assert_eq!(clamp_mood(140.0), 100.0);
    assert_eq!(clamp_mood(-1.0), 0.0);
    assert_eq!(clamp_mood(f64::NAN), 0.0);
    assert_eq!(clamp_mood(55.5), 55.5);
}

#[test]
fn test_unsubscribed_listener_is_silent() {
    let mut store = Store::new();
    let count = Rc::new(RefCell::new(0));
    let sink = count.clone();
    let id = store.subscribe(move |_, _| *sink.borrow_mut() += 1);

    store.toggle_sidebar();
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.toggle_sidebar();

    assert_eq!(*count.borrow(), 1);
}

// ============================================================================
// Account registry
// ============================================================================

#[test]
fn test_progress_over_empty_registry() {
    let registry = AccountRegistry::from_accounts(Vec::new());
    assert!(registry.is_empty());
    assert_eq!(registry.connection_progress(), 0.0);
    assert!(!registry.can_continue());
}

#[test]
fn test_progress_steps_by_quarter() {
    let mut registry = AccountRegistry::seeded();
    let mut expected = 0.0;
    for id in ["google", "spotify", "youtube", "instagram"] {
        assert_eq!(registry.connection_progress(), expected);
        registry.connect(id);
        expected += 25.0;
    }
    assert_eq!(registry.connection_progress(), 100.0);
    assert!(registry.can_continue());
}

// ============================================================================
// Dataset
// ============================================================================

#[test]
fn test_embedded_fixture_is_valid() {
    let data = MockDataset::seed().unwrap();
    assert!(data.validate().is_ok());
    assert_eq!(data.chat.responses.len(), 4);
    assert!(data.social.node("you").is_some());
}

#[test]
fn test_from_json_rejects_garbage() {
    let err = MockDataset::from_json("{ not json").unwrap_err();
    assert!(matches!(err, DoppelError::Dataset(_)));
}

#[test]
fn test_tag_size_boundaries() {
    assert_eq!(TagSize::from_value(86), TagSize::ExtraLarge);
    assert_eq!(TagSize::from_value(85), TagSize::Large);
    assert_eq!(TagSize::from_value(71), TagSize::Large);
    assert_eq!(TagSize::from_value(70), TagSize::Medium);
    assert_eq!(TagSize::from_value(56), TagSize::Medium);
    assert_eq!(TagSize::from_value(55), TagSize::Small);
    assert_eq!(TagSize::from_value(0), TagSize::Small);
}

#[test]
fn test_radial_layout_centres_self() {
    let data = MockDataset::seed().unwrap();
    let layout = data.social.radial_layout();
    assert_eq!(layout.len(), data.social.nodes.len());

    let centre = layout.iter().find(|p| p.id == "you").unwrap();
    assert_eq!((centre.x, centre.y), (0.0, 0.0));

    for position in layout.iter().filter(|p| p.id != "you") {
        let radius = (position.x * position.x + position.y * position.y).sqrt();
        assert!((100.0 - 1e-9..=260.0 + 1e-9).contains(&radius));
    }
}

// ============================================================================
// Chat
// ============================================================================

fn empty_seed() -> ChatSeed {
    ChatSeed {
        transcript: Vec::new(),
        responses: vec!["first".to_string(), "second".to_string()],
        style_markers: Vec::new(),
    }
}

#[test]
fn test_blank_input_is_rejected() {
    let mut session = ChatSession::seeded_at(&empty_seed(), 0);
    assert!(session.submit_at("", 0).is_none());
    assert!(session.submit_at("   \n\t", 0).is_none());
    assert!(session.is_empty());
    assert!(!session.is_typing());
}

#[test]
fn test_input_is_trimmed() {
    let mut session = ChatSession::seeded_at(&empty_seed(), 0);
    session.submit_at("  hello  ", 0).unwrap();
    assert_eq!(session.messages()[0].body, "hello");
}

#[test]
fn test_reply_without_pending_message() {
    let mut session = ChatSession::seeded_at(&empty_seed(), 0);
    assert!(session.deliver_reply_at(&mut FixedPicker(0), 0).is_none());
}

#[test]
fn test_rapid_messages_each_get_a_reply() {
    let mut session = ChatSession::seeded_at(&empty_seed(), 0);
    session.submit_at("one", 0);
    session.submit_at("two", 1);
    session.submit_at("three", 2);

    let mut picker = SequencePicker::default();
    let bodies: Vec<String> = (0..3)
        .map(|i| session.deliver_reply_at(&mut picker, 10 + i).unwrap().body.clone())
        .collect();

    assert_eq!(bodies, ["first", "second", "first"]);
    assert!(!session.is_typing());
    assert!(session.deliver_reply_at(&mut picker, 20).is_none());
    assert_eq!(session.len(), 6);
}

#[test]
fn test_picker_index_out_of_range_wraps() {
    let mut session = ChatSession::seeded_at(&empty_seed(), 0);
    session.submit_at("hi", 0);
    let reply = session.deliver_reply_at(&mut FixedPicker(7), 1).unwrap();
    assert_eq!(reply.body, "second");
}

#[test]
fn test_no_responses_settles_typing() {
    let seed = ChatSeed {
        responses: Vec::new(),
        ..empty_seed()
    };
    let mut session = ChatSession::seeded_at(&seed, 0);
    session.submit_at("hi", 0);
    session.submit_at("again", 0);
    assert!(session.is_typing());

    assert!(session.deliver_reply_at(&mut FixedPicker(0), 1).is_none());
    assert!(session.is_typing());
    assert!(session.deliver_reply_at(&mut FixedPicker(0), 2).is_none());
    assert!(!session.is_typing());
    assert_eq!(session.len(), 2);
}

#[test]
fn test_message_ids_are_unique() {
    let data = MockDataset::seed().unwrap();
    let mut session = ChatSession::seeded_at(&data.chat, 1_000_000);
    session.submit_at("a", 1_000_001);
    session.deliver_reply_at(&mut FixedPicker(0), 1_000_002);
    session.submit_at("b", 1_000_003);

    let mut ids: Vec<u64> = session.messages().iter().map(|m| m.id).collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

// ============================================================================
// Notices
// ============================================================================

#[test]
fn test_notice_queue_evicts_oldest() {
    let mut queue = NoticeQueue::new(2);
    let first = queue.push(Notice::sync_started());
    queue.push(Notice::sync_complete());
    queue.push(Notice::deletion_requested());

    assert_eq!(queue.len(), 2);
    assert!(!queue.dismiss(first));
    let titles: Vec<&str> = queue.iter().map(|(_, n)| n.title.as_str()).collect();
    assert_eq!(titles, [Notice::sync_complete().title, Notice::deletion_requested().title]);
}
