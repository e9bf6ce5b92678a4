//! Context hooks for the Doppel app.
//!
//! `App` provides the store, the notice queue and the app-wide scope; the
//! dataset and config are provided at launch. Pages reach them through the
//! hooks below instead of calling `use_context` directly.
//!
//! ```ignore
//! let mut store = use_store();
//! store.write().connect_account("spotify");
//! let connected = store.read().registry().connected_count();
//! ```

use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use doppel_core::{run_after, AppConfig, MockDataset, Notice, NoticeQueue, Store, SyncSimulation, ViewScope};

/// Scope for work that outlives any single view, such as a running sync.
#[derive(Clone)]
pub struct AppScope(pub Rc<ViewScope>);

/// Hook to access the shared store.
pub fn use_store() -> Signal<Store> {
    use_context::<Signal<Store>>()
}

/// Hook to access the mock dataset.
pub fn use_dataset() -> Arc<MockDataset> {
    use_context::<Arc<MockDataset>>()
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// Hook to access the toast queue.
pub fn use_notices() -> Signal<NoticeQueue> {
    use_context::<Signal<NoticeQueue>>()
}

/// Push a toast onto the shared queue.
pub fn push_notice(mut notices: Signal<NoticeQueue>, notice: Notice) {
    notices.write().push(notice);
}

/// Hook returning a callback that starts a simulated sync.
///
/// The completion runs on the root scope, so leaving the page that started
/// the sync still lowers the flag. Requests made while a sync is showing
/// are ignored. With `announce` off only the flag moves; no toasts.
pub fn use_start_sync(announce: bool) -> Callback<()> {
    let mut store = use_store();
    let notices = use_notices();
    let app_scope = use_context::<AppScope>();
    let sync = SyncSimulation::new(use_config().sync_delay());
    let sync = if announce { sync } else { sync.quiet() };

    use_callback(move |_: ()| {
        let Some((ticket, started)) = sync.begin(&mut store.write()) else {
            return;
        };
        if let Some(started) = started {
            push_notice(notices, started);
        }

        let token = app_scope.0.token();
        spawn_forever(async move {
            run_after(sync.delay(), &token, move || {
                if let Some(finished) = sync.finish(&mut store.write(), ticket) {
                    push_notice(notices, finished);
                }
            })
            .await;
        });
    })
}
