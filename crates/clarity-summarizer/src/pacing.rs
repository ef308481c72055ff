//! Minimum-interval pacing of outbound requests

use crate::clock::{Clock, TokioClock};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};
use tracing::debug;

/// Enforces a minimum interval between consecutive sends
///
/// Holds the instant of the most recent send. Share one pacer (behind an
/// `Arc`) between every client that talks to the same provider. The lock is
/// never held across a sleep, so two concurrent callers can both wait and
/// then send; the worst case is an extra delay.
#[derive(Debug)]
pub struct RequestPacer<C = TokioClock> {
    clock: C,
    min_interval: Duration,
    last_sent: Mutex<Option<Instant>>,
}

impl RequestPacer<TokioClock> {
    /// Create a pacer on the tokio clock
    pub fn with_interval(min_interval: Duration) -> Self {
        Self::new(TokioClock, min_interval)
    }
}

impl<C: Clock> RequestPacer<C> {
    /// Create a pacer on the given clock
    pub fn new(clock: C, min_interval: Duration) -> Self {
        Self {
            clock,
            min_interval,
            last_sent: Mutex::new(None),
        }
    }

    /// The clock this pacer runs on
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The enforced minimum interval
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Instant of the most recent send, if any
    pub fn last_sent(&self) -> Option<Instant> {
        *self.last_sent.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Wait until a send is allowed, then record the send time
    ///
    /// Call immediately before every network attempt. Returns how long the
    /// caller was held back.
    pub async fn wait_turn(&self) -> Duration {
        let wait = match self.last_sent() {
            Some(last) => {
                let since = self.clock.now().saturating_duration_since(last);
                self.min_interval.saturating_sub(since)
            }
            None => Duration::ZERO,
        };

        if !wait.is_zero() {
            debug!(wait_ms = wait.as_millis() as u64, "Pacing request");
            self.clock.sleep(wait).await;
        }

        *self.last_sent.lock().unwrap_or_else(PoisonError::into_inner) = Some(self.clock.now());
        wait
    }
}
