//! Fire-and-forget deferred callbacks
//!
//! Callbacks are spawned onto the ambient tokio runtime. Outside a runtime
//! the callback is dropped with a warning instead of panicking. No handle is
//! returned, so a scheduled callback cannot be cancelled.

use crate::config::UtilsConfig;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{trace, warn};

/// Delay used by [`wait`]
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1);

/// Run `callback` after [`DEFAULT_DELAY`].
///
/// Returns whether the callback was scheduled; see [`wait_with_delay`].
pub fn wait<F>(callback: F) -> bool
where
    F: FnOnce() + Send + 'static,
{
    wait_with_delay(callback, DEFAULT_DELAY)
}

/// Run `callback` once at least `delay` has elapsed.
///
/// Returns `false`, without running the callback, when called outside a
/// tokio runtime.
pub fn wait_with_delay<F>(callback: F, delay: Duration) -> bool
where
    F: FnOnce() + Send + 'static,
{
    let handle = match Handle::try_current() {
        Ok(handle) => handle,
        Err(err) => {
            warn!("Dropping deferred callback, no tokio runtime: {}", err);
            return false;
        }
    };

    trace!(?delay, "Scheduling deferred callback");
    // Dropping the JoinHandle detaches the task
    handle.spawn(async move {
        tokio::time::sleep(delay).await;
        callback();
    });
    true
}

/// Run `callback` after the configured default delay
pub fn wait_with_config<F>(callback: F, config: &UtilsConfig) -> bool
where
    F: FnOnce() + Send + 'static,
{
    wait_with_delay(callback, config.default_delay)
}
