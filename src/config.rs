// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{env, DEFAULT_CI_TIMEOUT_MULTIPLIER};
use std::time::Duration;
use tracing::debug;

/// Timeout scaling loaded from environment variables
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeoutConfig {
    /// Running in CI, timeouts get multiplied
    pub ci: bool,
    pub multiplier: f64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            ci: false,
            multiplier: DEFAULT_CI_TIMEOUT_MULTIPLIER,
        }
    }
}

impl TimeoutConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let ci = lookup(env::CI).is_some_and(|v| !v.is_empty());
        let multiplier = lookup(env::CI_TIMEOUT_MULTIPLIER)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|m| m.is_finite() && *m > 0.0)
            .unwrap_or(DEFAULT_CI_TIMEOUT_MULTIPLIER);

        Self { ci, multiplier }
    }

    /// Apply the CI multiplier to a timeout
    pub fn scale(&self, timeout: Duration) -> Duration {
        if !self.ci {
            return timeout;
        }

        debug!("Applying CI timeout multiplier {}", self.multiplier);
        Duration::try_from_secs_f64(timeout.as_secs_f64() * self.multiplier)
            .unwrap_or(Duration::MAX)
    }
}
