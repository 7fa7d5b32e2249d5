use std::future::Future;
use std::time;

use tokio::task::JoinHandle;

/// Delays a task until no newer task was scheduled for `delay`.
///
/// Holds a single pending slot: scheduling aborts whatever is pending and
/// starts over. Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct Debouncer {
    delay: time::Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub const fn new(delay: time::Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Cancel the pending task, if any, and schedule `task` after the delay
    pub fn schedule<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        }));
    }

    /// Drop the pending task without running it
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
