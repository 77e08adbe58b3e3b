// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deployment lookups and updates

use crate::error::Result;
use crate::kubernetes::ClusterClient;
use k8s_openapi::api::apps::v1::Deployment;
use kube::{api::PostParams, Api, ResourceExt};
use tracing::{debug, instrument};

impl ClusterClient {
    /// Fetch a deployment, `None` when it does not exist
    #[instrument(skip(self))]
    pub async fn get_deployment(&self, namespace: &str, name: &str) -> Result<Option<Deployment>> {
        let deployments: Api<Deployment> = Api::namespaced(self.client.clone(), namespace);
        Ok(deployments.get_opt(name).await?)
    }

    /// Replace a deployment with the given object
    #[instrument(skip(self, deployment), fields(deployment = %deployment.name_any()))]
    pub async fn update_deployment(&self, deployment: &Deployment) -> Result<Deployment> {
        let namespace = deployment
            .namespace()
            .unwrap_or_else(|| self.default_namespace().to_string());
        let deployments: Api<Deployment> = Api::namespaced(self.client.clone(), &namespace);

        debug!("Updating deployment {}/{}", namespace, deployment.name_any());
        Ok(deployments
            .replace(&deployment.name_any(), &PostParams::default(), deployment)
            .await?)
    }
}
