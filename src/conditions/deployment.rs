// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deployment readiness, absence and conflict-tolerant updates

use crate::constants::conflict::{MAX_ATTEMPTS, RETRY_DELAY};
use crate::error::{Result, TryError};
use crate::kubernetes::ClusterClient;
use backon::{ConstantBuilder, Retryable};
use k8s_openapi::api::apps::v1::Deployment;
use kube::ResourceExt;
use std::time::Duration;
use tracing::{debug, warn};

/// Check that a deployment reports all of its replicas ready
pub fn is_deployment_ready(name: &str, deployment: &Deployment) -> Result<()> {
    let status = deployment.status.as_ref();
    let desired = status.and_then(|s| s.replicas).unwrap_or(0);
    let ready = status.and_then(|s| s.ready_replicas).unwrap_or(0);

    if desired == 0 {
        return Err(TryError::DeploymentNoReplicas(name.to_string()));
    }

    if ready != desired {
        return Err(TryError::DeploymentNotReady {
            name: name.to_string(),
            ready,
            desired,
        });
    }

    Ok(())
}

/// Succeeds when the deployment exists and is ready
pub async fn deployment_ready(client: &ClusterClient, namespace: &str, name: &str) -> Result<()> {
    let deployment = client
        .get_deployment(namespace, name)
        .await?
        .ok_or_else(|| TryError::DeploymentNotFound(name.to_string()))?;

    is_deployment_ready(name, &deployment)
}

/// Succeeds when the deployment no longer exists
pub async fn deployment_absent(client: &ClusterClient, namespace: &str, name: &str) -> Result<()> {
    match client.get_deployment(namespace, name).await? {
        Some(_) => Err(TryError::DeploymentExists(name.to_string())),
        None => Ok(()),
    }
}

/// Replace a deployment, retrying with a short fixed delay while the write
/// keeps conflicting. Any other error is returned at once.
pub async fn update_deployment(
    client: &ClusterClient,
    deployment: &Deployment,
) -> Result<Deployment> {
    let policy = ConstantBuilder::default()
        .with_delay(RETRY_DELAY)
        .with_max_times(MAX_ATTEMPTS - 1);

    (|| client.update_deployment(deployment))
        .retry(policy)
        .when(TryError::is_conflict)
        .notify(|err: &TryError, delay: Duration| {
            debug!(
                "Conflict updating deployment {}, retrying in {:?}: {}",
                deployment.name_any(),
                delay,
                err
            );
        })
        .await
        .map_err(|e| {
            warn!("Giving up on updating deployment {}: {}", deployment.name_any(), e);
            TryError::UpdateFailed {
                name: deployment.name_any(),
                source: Box::new(e),
            }
        })
}
