// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Named condition builders. Each function is a single check attempt that
//! succeeds once the awaited state is reached.

pub mod client;
pub mod command;
pub mod deployment;
pub mod namespace;

pub use client::client_reachable;
pub use command::{command_output_contains, command_succeeds};
pub use deployment::{deployment_absent, deployment_ready, is_deployment_ready, update_deployment};
pub use namespace::namespace_absent;
