//! Delayed callbacks bound to a view's lifetime.
//!
//! Simulated work (sync completion, chat replies) finishes after a fixed
//! delay. Each view owns a [`ViewScope`]; work scheduled through
//! [`run_after`] with one of the scope's tokens is dropped instead of run
//! once the view has gone away.
//!
//! ```ignore
//! let scope = ViewScope::new();
//! let token = scope.token();
//! spawn(async move {
//!     if run_after(delay, &token, || reply()).await.is_none() {
//!         // the view unmounted first
//!     }
//! });
//! ```

use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Cancellation root for everything a single view schedules.
///
/// Dropping the scope cancels every token it handed out.
#[derive(Debug, Default)]
pub struct ViewScope {
    root: CancellationToken,
}

impl ViewScope {
    pub fn new() -> Self {
        Self {
            root: CancellationToken::new(),
        }
    }

    /// A token cancelled together with this scope.
    pub fn token(&self) -> CancellationToken {
        self.root.child_token()
    }

    pub fn cancel(&self) {
        self.root.cancel();
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.root.cancel();
    }
}

/// Wait for `delay`, then run `f`.
///
/// Returns `None` without running `f` if `token` is cancelled before the
/// delay elapses.
pub async fn run_after<F, T>(delay: Duration, token: &CancellationToken, f: F) -> Option<T>
where
    F: FnOnce() -> T,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            tracing::debug!("Delayed task cancelled");
            None
        }
        _ = tokio::time::sleep(delay) => Some(f()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_runs_after_delay() {
        let scope = ViewScope::new();
        let token = scope.token();

        let start = tokio::time::Instant::now();
        let result = run_after(Duration::from_millis(2000), &token, || 7).await;

        assert_eq!(result, Some(7));
        assert!(start.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_scope_skips_callback() {
        let scope = ViewScope::new();
        let token = scope.token();
        scope.cancel();

        let mut ran = false;
        let result = run_after(Duration::from_millis(10), &token, || ran = true).await;

        assert!(result.is_none());
        assert!(!ran);
    }

    #[test]
    fn test_drop_cancels_tokens() {
        let scope = ViewScope::new();
        let token = scope.token();
        assert!(!token.is_cancelled());

        drop(scope);
        assert!(token.is_cancelled());
    }
}
