// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::{Result, TryError};
use crate::kubernetes::ClusterClient;

/// Succeeds when the namespace no longer exists
pub async fn namespace_absent(client: &ClusterClient, name: &str) -> Result<()> {
    match client.get_namespace(name).await? {
        Some(_) => Err(TryError::NamespaceExists(name.to_string())),
        None => Ok(()),
    }
}
