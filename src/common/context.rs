//! Cycle Context
//!
//! Carries the deadline and cancellation shared by every outbound call of one poll cycle.
//! Operations bound to a context return as soon as either the deadline passes or the context
//! is cancelled, whichever comes first.

use std::future::Future;

use getset::CopyGetters;
use tokio::time::{sleep, sleep_until, Duration, Instant};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::errors::ContextError;

#[derive(Debug, Clone, CopyGetters)]
pub struct CycleContext {
    #[getset(get_copy = "pub")]
    id: Uuid,
    #[getset(get_copy = "pub")]
    deadline: Instant,
    token: CancellationToken,
}

impl CycleContext {
    /// A context whose deadline is `budget` from now.
    pub fn new(budget: Duration) -> Self {
        Self::with_deadline(Instant::now() + budget)
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            id: Uuid::new_v4(),
            deadline,
            token: CancellationToken::new(),
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_done(&self) -> bool {
        self.token.is_cancelled() || Instant::now() >= self.deadline
    }

    /// Fails if the context has already ended.
    pub fn check(&self) -> Result<(), ContextError> {
        if self.token.is_cancelled() {
            Err(ContextError::Cancelled)
        } else if Instant::now() >= self.deadline {
            Err(ContextError::DeadlineExceeded)
        } else {
            Ok(())
        }
    }

    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    /// Waits for `duration`, unless the context ends first.
    pub async fn sleep(&self, duration: Duration) -> Result<(), ContextError> {
        tokio::select! {
            biased;

            _ = self.token.cancelled() => Err(ContextError::Cancelled),
            _ = sleep_until(self.deadline) => Err(ContextError::DeadlineExceeded),
            _ = sleep(duration) => Ok(()),
        }
    }

    /// Drives `future` to completion, unless the context ends first. The future is dropped
    /// on cancellation.
    pub async fn bound<F>(&self, future: F) -> Result<F::Output, ContextError>
    where
        F: Future,
    {
        tokio::select! {
            biased;

            _ = self.token.cancelled() => Err(ContextError::Cancelled),
            _ = sleep_until(self.deadline) => Err(ContextError::DeadlineExceeded),
            output = future => Ok(output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn sleep_completes_before_deadline() {
        let ctx = CycleContext::new(Duration::from_secs(10));
        let started = Instant::now();

        assert_eq!(ctx.sleep(Duration::from_secs(3)).await, Ok(()));
        assert_eq!(started.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn sleep_is_cut_short_by_deadline() {
        let ctx = CycleContext::new(Duration::from_secs(2));
        let started = Instant::now();

        assert_eq!(
            ctx.sleep(Duration::from_secs(30)).await,
            Err(ContextError::DeadlineExceeded)
        );
        assert_eq!(started.elapsed(), Duration::from_secs(2));
        assert!(ctx.is_done());
    }

    #[tokio::test(start_paused = true)]
    async fn bound_future_is_dropped_on_cancel() {
        let ctx = CycleContext::new(Duration::from_secs(60));
        let canceller = ctx.clone();
        tokio::spawn(async move {
            sleep(Duration::from_secs(1)).await;
            canceller.cancel();
        });

        let result = ctx.bound(sleep(Duration::from_secs(30))).await;
        assert_eq!(result, Err(ContextError::Cancelled));
    }

    #[tokio::test]
    async fn bound_returns_future_output() {
        let ctx = CycleContext::new(Duration::from_secs(5));
        assert_eq!(ctx.bound(async { 7 }).await, Ok(7));
    }
}
