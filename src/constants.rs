// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Environment variables consulted when scaling timeouts
pub mod env {
    /// When set to a non-empty value, timeouts are multiplied
    pub const CI: &str = "CI";
    /// Floating-point override for the CI multiplier
    pub const CI_TIMEOUT_MULTIPLIER: &str = "CI_TIMEOUT_MULTIPLIER";
}

/// Multiplier applied to every timeout in CI when no valid override is set
pub const DEFAULT_CI_TIMEOUT_MULTIPLIER: f64 = 3.0;

/// Exponential backoff defaults for polling
pub mod backoff {
    use std::time::Duration;

    /// Delay before the second attempt
    pub const INITIAL_INTERVAL: Duration = Duration::from_millis(500);
    /// Growth factor between consecutive delays
    pub const MULTIPLIER: f32 = 1.5;
    /// Cap on a single delay
    pub const MAX_INTERVAL: Duration = Duration::from_secs(60);
    /// Delays are spread uniformly over +/- this fraction of their nominal value
    pub const RANDOMIZATION_FACTOR: f64 = 0.5;
}

/// Bounded retry applied to deployment updates that hit a write conflict
pub mod conflict {
    use std::time::Duration;

    /// Fixed delay between update attempts
    pub const RETRY_DELAY: Duration = Duration::from_millis(10);
    /// Total number of update attempts, including the first one
    pub const MAX_ATTEMPTS: usize = 5;
}
