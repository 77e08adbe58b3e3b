// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes access: client construction, deployment and namespace lookups.

pub mod client;
pub mod deployments;
pub mod namespaces;

pub use client::ClusterClient;
