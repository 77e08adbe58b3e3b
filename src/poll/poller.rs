// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Retry loop shared by every wait operation

use crate::error::{Result, TryError};
use crate::poll::{guarded, PollSpec};
use std::future::Future;
use tokio::time::{sleep, Instant};
use tracing::{debug, warn};

/// Repeatedly runs a check until it succeeds or the elapsed-time budget is spent.
#[derive(Debug, Clone)]
pub struct Poller {
    spec: PollSpec,
}

impl Poller {
    pub fn new(spec: PollSpec) -> Self {
        Self { spec }
    }

    /// Invoke `check` until it returns `Ok`, sleeping with exponential backoff
    /// between failed attempts.
    ///
    /// The check runs at least once. The sleep before the final attempt is cut
    /// short so that it lands on the deadline. Once the budget is spent, the last
    /// failure is returned inside `TryError::TimedOut` labelled with `operation`.
    pub async fn poll<T, F, Fut>(&self, operation: &str, mut check: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let start = Instant::now();
        let mut intervals = self.spec.intervals();
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;

            let err = match guarded(&mut check).await {
                Ok(value) => {
                    debug!("{} succeeded after {} attempt(s)", operation, attempts);
                    return Ok(value);
                }
                Err(e) => e,
            };

            let elapsed = start.elapsed();
            let remaining = self.spec.max_elapsed_time.saturating_sub(elapsed);
            if remaining.is_zero() {
                warn!(
                    "{} gave up after {} attempts in {:?}: {}",
                    operation, attempts, elapsed, err
                );
                return Err(TryError::TimedOut {
                    operation: operation.to_string(),
                    attempts,
                    elapsed,
                    last: Box::new(err),
                });
            }

            let delay = intervals
                .next()
                .unwrap_or(self.spec.max_interval)
                .min(remaining);
            debug!(
                "{}: attempt {} failed ({}), retrying in {:?}",
                operation, attempts, err, delay
            );

            sleep(delay).await;
        }
    }
}
