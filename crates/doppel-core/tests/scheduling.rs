//! Timed behaviour: sync simulation and chat replies under paused time

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use doppel_core::chat::{ChatSession, FixedPicker};
use doppel_core::{run_after, MockDataset, Notice, NoticeQueue, Store, SyncSimulation, ViewScope};
use tokio::time::Instant;

// ============================================================================
// Sync
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_sync_flag_drops_after_delay() {
    let store = Rc::new(RefCell::new(Store::new()));
    let notices = Rc::new(RefCell::new(NoticeQueue::default()));
    let sync = SyncSimulation::new(Duration::from_millis(3000));
    let scope = ViewScope::new();

    let (ticket, started) = sync.begin(&mut store.borrow_mut()).unwrap();
    notices.borrow_mut().push(started.unwrap());
    assert!(store.borrow().is_syncing());

    let start = Instant::now();
    let finished = run_after(sync.delay(), &scope.token(), || {
        if let Some(notice) = sync.finish(&mut store.borrow_mut(), ticket) {
            notices.borrow_mut().push(notice);
        }
    })
    .await;

    assert!(finished.is_some());
    assert!(start.elapsed() >= Duration::from_millis(3000));
    assert!(!store.borrow().is_syncing());

    let titles: Vec<String> = notices.borrow().iter().map(|(_, n)| n.title.clone()).collect();
    assert_eq!(titles, [Notice::sync_started().title, Notice::sync_complete().title]);
}

#[tokio::test(start_paused = true)]
async fn test_quiet_sync_leaves_notices_empty() {
    let store = Rc::new(RefCell::new(Store::new()));
    let notices = Rc::new(RefCell::new(NoticeQueue::default()));
    let sync = SyncSimulation::new(Duration::from_millis(3000)).quiet();
    let scope = ViewScope::new();

    let (ticket, started) = sync.begin(&mut store.borrow_mut()).unwrap();
    if let Some(notice) = started {
        notices.borrow_mut().push(notice);
    }
    run_after(sync.delay(), &scope.token(), || {
        if let Some(notice) = sync.finish(&mut store.borrow_mut(), ticket) {
            notices.borrow_mut().push(notice);
        }
    })
    .await;

    assert!(!store.borrow().is_syncing());
    assert!(notices.borrow().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_flag_still_up_midway() {
    let store = Rc::new(RefCell::new(Store::new()));
    let sync = SyncSimulation::new(Duration::from_millis(2000));
    let scope = ViewScope::new();
    let (ticket, _) = sync.begin(&mut store.borrow_mut()).unwrap();

    let token = scope.token();
    let completion = run_after(sync.delay(), &token, || {
        let _ = sync.finish(&mut store.borrow_mut(), ticket);
    });
    let check = async {
        tokio::time::sleep(Duration::from_millis(1000)).await;
        store.borrow().is_syncing()
    };

    let (done, midway) = tokio::join!(completion, check);
    assert!(midway);
    assert!(done.is_some());
    assert!(!store.borrow().is_syncing());
}

#[tokio::test(start_paused = true)]
async fn test_second_request_during_sync_is_ignored() {
    let store = Rc::new(RefCell::new(Store::new()));
    let sync = SyncSimulation::new(Duration::from_millis(3000));
    let scope = ViewScope::new();
    let (ticket, _) = sync.begin(&mut store.borrow_mut()).unwrap();

    let token = scope.token();
    let completion = run_after(sync.delay(), &token, || {
        let _ = sync.finish(&mut store.borrow_mut(), ticket);
    });
    let second = async {
        tokio::time::sleep(Duration::from_millis(500)).await;
        sync.begin(&mut store.borrow_mut()).is_none()
    };

    let (_, ignored) = tokio::join!(completion, second);
    assert!(ignored);
    assert!(!store.borrow().is_syncing());
}

#[tokio::test(start_paused = true)]
async fn test_unmount_leaves_flag_for_next_view() {
    let store = Rc::new(RefCell::new(Store::new()));
    let sync = SyncSimulation::new(Duration::from_millis(3000));
    let scope = ViewScope::new();
    let (ticket, _) = sync.begin(&mut store.borrow_mut()).unwrap();

    let token = scope.token();
    let completion = run_after(sync.delay(), &token, || {
        let _ = sync.finish(&mut store.borrow_mut(), ticket);
    });
    let unmount = async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        drop(scope);
    };

    let (done, _) = tokio::join!(completion, unmount);
    assert!(done.is_none());
    // The view that started the sync is gone; nothing lowers the flag.
    assert!(store.borrow().is_syncing());
}

// ============================================================================
// Chat
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_chat_reply_arrives_after_delay() {
    let data = MockDataset::seed().unwrap();
    let session = Rc::new(RefCell::new(ChatSession::seeded(&data.chat)));
    let scope = ViewScope::new();
    let seeded = session.borrow().len();

    session.borrow_mut().submit("How was my week?").unwrap();
    assert!(session.borrow().is_typing());

    let body = run_after(Duration::from_millis(2000), &scope.token(), || {
        session
            .borrow_mut()
            .deliver_reply(&mut FixedPicker(1))
            .map(|m| m.body.clone())
    })
    .await
    .flatten();

    assert_eq!(body.as_deref(), Some(data.chat.responses[1].as_str()));
    assert!(!session.borrow().is_typing());
    assert_eq!(session.borrow().len(), seeded + 2);
}

#[tokio::test(start_paused = true)]
async fn test_chat_reply_dropped_when_view_closes() {
    let data = MockDataset::seed().unwrap();
    let session = Rc::new(RefCell::new(ChatSession::seeded(&data.chat)));
    let scope = ViewScope::new();
    let seeded = session.borrow().len();

    session.borrow_mut().submit("Anyone there?").unwrap();
    let token = scope.token();
    scope.cancel();

    let delivered = run_after(Duration::from_millis(2000), &token, || {
        session.borrow_mut().deliver_reply(&mut FixedPicker(0)).is_some()
    })
    .await;

    assert!(delivered.is_none());
    assert_eq!(session.borrow().len(), seeded + 1);
}
