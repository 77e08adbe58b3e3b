// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace lookups

use crate::error::Result;
use crate::kubernetes::ClusterClient;
use k8s_openapi::api::core::v1::Namespace;
use kube::Api;
use tracing::instrument;

impl ClusterClient {
    /// Fetch a namespace, `None` when it does not exist
    #[instrument(skip(self))]
    pub async fn get_namespace(&self, name: &str) -> Result<Option<Namespace>> {
        let namespaces: Api<Namespace> = Api::all(self.client.clone());
        Ok(namespaces.get_opt(name).await?)
    }
}
