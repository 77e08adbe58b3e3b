// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Generic poll primitive: exponential backoff bounded by an elapsed-time budget.

pub mod guard;
pub mod poller;
pub mod spec;

pub use guard::guarded;
pub use poller::Poller;
pub use spec::PollSpec;
