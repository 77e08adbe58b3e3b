// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod conditions;
pub mod config;
pub mod constants;
pub mod error;
pub mod kubernetes;
pub mod poll;
pub mod process;
pub mod waiter;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::TimeoutConfig;
pub use error::{Result, TryError};
pub use kubernetes::ClusterClient;
pub use poll::{PollSpec, Poller};
pub use waiter::Waiter;
