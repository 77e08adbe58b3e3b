// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::Result;
use crate::kubernetes::ClusterClient;
use tracing::info;

/// Succeeds when a client can be built and the API server answers
pub async fn client_reachable(url: &str, kubeconfig_path: &str) -> Result<ClusterClient> {
    let client = ClusterClient::new(url, kubeconfig_path).await?;
    let version = client.server_version().await?;
    info!("Connected to API server {}", version.git_version);

    Ok(client)
}
