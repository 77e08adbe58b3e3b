// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Backoff parameters for a single poll operation

use crate::constants::backoff::{
    INITIAL_INTERVAL, MAX_INTERVAL, MULTIPLIER, RANDOMIZATION_FACTOR,
};
use backon::{BackoffBuilder, ExponentialBuilder};
use rand::Rng;
use std::time::Duration;

/// Parameters of one poll: how the delay grows and how long to keep trying.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollSpec {
    pub initial_interval: Duration,
    pub multiplier: f32,
    pub max_interval: Duration,
    /// Elapsed-time budget, after which the last failure is returned
    pub max_elapsed_time: Duration,
    /// Each delay is spread uniformly over `d * (1 ± randomization_factor)`
    pub randomization_factor: f64,
}

impl Default for PollSpec {
    fn default() -> Self {
        Self {
            initial_interval: INITIAL_INTERVAL,
            multiplier: MULTIPLIER,
            max_interval: MAX_INTERVAL,
            max_elapsed_time: Duration::ZERO,
            randomization_factor: RANDOMIZATION_FACTOR,
        }
    }
}

impl PollSpec {
    pub fn new(max_elapsed_time: Duration) -> Self {
        Self {
            max_elapsed_time,
            ..Default::default()
        }
    }

    pub fn with_initial_interval(mut self, interval: Duration) -> Self {
        self.initial_interval = interval;
        self
    }

    pub fn with_multiplier(mut self, multiplier: f32) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn with_max_interval(mut self, interval: Duration) -> Self {
        self.max_interval = interval;
        self
    }

    pub fn with_max_elapsed_time(mut self, budget: Duration) -> Self {
        self.max_elapsed_time = budget;
        self
    }

    pub fn with_randomization_factor(mut self, factor: f64) -> Self {
        self.randomization_factor = factor;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.randomization_factor = 0.0;
        self
    }

    /// Endless sequence of delays between attempts. The elapsed-time budget is
    /// enforced by the poller, not by the sequence.
    pub(crate) fn intervals(&self) -> impl Iterator<Item = Duration> {
        let factor = self.randomization_factor.clamp(0.0, 1.0);

        ExponentialBuilder::default()
            .with_min_delay(self.initial_interval)
            .with_factor(self.multiplier)
            .with_max_delay(self.max_interval)
            .without_max_times()
            .build()
            .map(move |delay| randomize(delay, factor))
    }
}

/// Spread a delay evenly around its nominal value so the mean stays unchanged
fn randomize(delay: Duration, factor: f64) -> Duration {
    if factor == 0.0 {
        return delay;
    }

    let spread = rand::thread_rng().gen_range(-factor..=factor);
    Duration::try_from_secs_f64(delay.as_secs_f64() * (1.0 + spread)).unwrap_or(delay)
}
