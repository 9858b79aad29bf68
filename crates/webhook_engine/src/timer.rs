use std::time::Duration;

use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

/// Holds at most one pending delayed callback. Scheduling a new one cancels
/// the previous; dropping the timer cancels whatever is pending.
#[derive(Debug, Default)]
pub struct RevertTimer {
    current: Option<CancellationToken>,
}

impl RevertTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|token| !token.is_cancelled())
    }

    pub fn schedule<F>(&mut self, runtime: &Handle, delay: Duration, on_elapsed: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let token = CancellationToken::new();
        let guard = token.clone();
        runtime.spawn(async move {
            tokio::select! {
                _ = guard.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    // Cancel the token so is_pending reports false.
                    guard.cancel();
                    on_elapsed();
                }
            }
        });
        self.current = Some(token);
    }

    /// Returns whether a pending callback was cancelled.
    pub fn cancel(&mut self) -> bool {
        match self.current.take() {
            Some(token) if !token.is_cancelled() => {
                token.cancel();
                true
            }
            _ => false,
        }
    }
}

impl Drop for RevertTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
