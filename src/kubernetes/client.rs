// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation and liveness probing

use crate::error::{Result, TryError};
use k8s_openapi::apimachinery::pkg::version::Info;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use tracing::{debug, instrument};

/// Thin wrapper over a `kube::Client` exposing the lookups the waits need.
#[derive(Clone)]
pub struct ClusterClient {
    pub(crate) client: Client,
}

impl From<Client> for ClusterClient {
    fn from(client: Client) -> Self {
        Self { client }
    }
}

impl ClusterClient {
    /// Create a client from an optional server URL and an optional kubeconfig path.
    ///
    /// An empty `kubeconfig_path` falls back to the inferred configuration
    /// (`KUBECONFIG`, `~/.kube/config` or in-cluster). A non-empty `url`
    /// replaces the server address found in the configuration.
    #[instrument]
    pub async fn new(url: &str, kubeconfig_path: &str) -> Result<Self> {
        let mut config = if kubeconfig_path.is_empty() {
            KConfig::infer()
                .await
                .map_err(|e| TryError::KubeconfigError(format!("Failed to infer config: {}", e)))?
        } else {
            load_kubeconfig(kubeconfig_path).await?
        };

        if !url.is_empty() {
            debug!("Overriding cluster URL {} with {}", config.cluster_url, url);
            config.cluster_url = url
                .parse()
                .map_err(|e| TryError::KubeconfigError(format!("Invalid URL {}: {}", url, e)))?;
        }

        let client = Client::try_from(config)
            .map_err(|e| TryError::KubeconfigError(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }

    /// Ask the API server for its version
    pub async fn server_version(&self) -> Result<Info> {
        Ok(self.client.apiserver_version().await?)
    }

    pub fn default_namespace(&self) -> &str {
        self.client.default_namespace()
    }
}

/// Load a client configuration from a kubeconfig file
async fn load_kubeconfig(path: &str) -> Result<KConfig> {
    let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
        TryError::KubeconfigError(format!("Failed to read kubeconfig {}: {}", path, e))
    })?;

    KConfig::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| TryError::KubeconfigError(format!("Failed to create config: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{version_json, MockService};
    use std::io::Write;

    const KUBECONFIG: &str = r#"
apiVersion: v1
kind: Config
clusters:
- name: test
  cluster:
    server: https://127.0.0.1:6443
    insecure-skip-tls-verify: true
contexts:
- name: test
  context:
    cluster: test
    user: test
    namespace: team-a
current-context: test
users:
- name: test
  user:
    token: abc123
"#;

    fn kubeconfig_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(KUBECONFIG.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_new_from_kubeconfig_file() {
        let file = kubeconfig_file();

        let client = ClusterClient::new("", file.path().to_str().unwrap())
            .await
            .unwrap();

        assert_eq!(client.default_namespace(), "team-a");
    }

    #[tokio::test]
    async fn test_new_with_url_override() {
        let file = kubeconfig_file();

        let client = ClusterClient::new("https://10.0.0.1:6443", file.path().to_str().unwrap())
            .await
            .unwrap();

        assert_eq!(client.default_namespace(), "team-a");
    }

    #[tokio::test]
    async fn test_new_with_invalid_url() {
        let file = kubeconfig_file();

        let result = ClusterClient::new("http://bad url", file.path().to_str().unwrap()).await;

        assert!(matches!(result, Err(TryError::KubeconfigError(msg)) if msg.starts_with("Invalid URL")));
    }

    #[tokio::test]
    async fn test_new_with_missing_kubeconfig() {
        let result = ClusterClient::new("", "/nonexistent/kubeconfig").await;

        assert!(matches!(result, Err(TryError::KubeconfigError(_))));
    }

    #[tokio::test]
    async fn test_server_version() {
        let client: ClusterClient = MockService::new()
            .on_get("/version", 200, &version_json("1", "30"))
            .into_client()
            .into();

        let info = client.server_version().await.unwrap();

        assert_eq!(info.major, "1");
        assert_eq!(info.minor, "30");
    }

    #[tokio::test]
    async fn test_server_version_error() {
        let client: ClusterClient = MockService::new().into_client().into();

        let result = client.server_version().await;

        assert!(matches!(result, Err(TryError::KubeError(_))));
    }
}
