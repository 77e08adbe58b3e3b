// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Wait operations used by integration tests: one poll loop per awaited condition.

use crate::conditions;
use crate::config::TimeoutConfig;
use crate::error::{Result, TryError};
use crate::kubernetes::ClusterClient;
use crate::poll::{PollSpec, Poller};
use crate::process::command_line;
use k8s_openapi::api::apps::v1::Deployment;
use kube::ResourceExt;
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tracing::{info, instrument};

/// Waits for eventually-consistent conditions, scaling timeouts in CI.
#[derive(Debug, Clone, Default)]
pub struct Waiter {
    /// Pinned timeout configuration; resolved from the environment per call when unset
    timeouts: Option<TimeoutConfig>,
    template: PollSpec,
}

impl Waiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this configuration instead of reading `CI` variables on every call
    pub fn with_timeout_config(mut self, timeouts: TimeoutConfig) -> Self {
        self.timeouts = Some(timeouts);
        self
    }

    /// Backoff parameters for every poll; the elapsed-time budget is replaced per call
    pub fn with_poll_spec(mut self, template: PollSpec) -> Self {
        self.template = template;
        self
    }

    fn poller(&self, timeout: Duration) -> Poller {
        let timeouts = self.timeouts.unwrap_or_else(TimeoutConfig::from_env);
        Poller::new(self.template.with_max_elapsed_time(timeouts.scale(timeout)))
    }

    /// Wait until the deployment exists and all its replicas are ready
    #[instrument(skip(self, client))]
    pub async fn wait_ready_deployment(
        &self,
        client: &ClusterClient,
        name: &str,
        namespace: &str,
        timeout: Duration,
    ) -> Result<()> {
        let operation = format!(
            "unable to get the deployment {:?} in namespace {:?}",
            name, namespace
        );

        self.poller(timeout)
            .poll(&operation, || conditions::deployment_ready(client, namespace, name))
            .await?;

        info!("Deployment {}/{} is ready", namespace, name);
        Ok(())
    }

    /// Update the deployment, then wait until it is ready
    #[instrument(skip(self, client, deployment), fields(deployment = %deployment.name_any()))]
    pub async fn wait_update_deployment(
        &self,
        client: &ClusterClient,
        deployment: &Deployment,
        timeout: Duration,
    ) -> Result<()> {
        let updated = conditions::update_deployment(client, deployment).await?;
        let namespace = updated
            .namespace()
            .or_else(|| deployment.namespace())
            .unwrap_or_else(|| client.default_namespace().to_string());

        self.wait_ready_deployment(client, &deployment.name_any(), &namespace, timeout)
            .await
    }

    /// Wait until the deployment is gone
    #[instrument(skip(self, client))]
    pub async fn wait_delete_deployment(
        &self,
        client: &ClusterClient,
        name: &str,
        namespace: &str,
        timeout: Duration,
    ) -> Result<()> {
        let operation = format!(
            "unable to get the deployment {:?} in namespace {:?}",
            name, namespace
        );

        self.poller(timeout)
            .poll(&operation, || conditions::deployment_absent(client, namespace, name))
            .await?;

        info!("Deployment {}/{} is deleted", namespace, name);
        Ok(())
    }

    /// Wait until the namespace is gone
    #[instrument(skip(self, client))]
    pub async fn wait_delete_namespace(
        &self,
        client: &ClusterClient,
        name: &str,
        timeout: Duration,
    ) -> Result<()> {
        let operation = format!("unable to get the namespace {:?}", name);

        self.poller(timeout)
            .poll(&operation, || conditions::namespace_absent(client, name))
            .await?;

        info!("Namespace {} is deleted", name);
        Ok(())
    }

    /// Wait until the command succeeds and its combined output contains `expected`
    ///
    /// Output is stdout followed by stderr, not interleaved, so a substring
    /// spanning both streams won't match.
    #[instrument(skip(self, args), fields(cmd = %command_line(command, args)))]
    pub async fn wait_command_execute<A: AsRef<str>>(
        &self,
        command: &str,
        args: &[A],
        expected: &str,
        timeout: Duration,
    ) -> Result<()> {
        let operation = format!("unable to execute command {}", command_line(command, args));

        self.poller(timeout)
            .poll(&operation, || {
                conditions::command_output_contains(command, args, expected)
            })
            .await?;

        Ok(())
    }

    /// Wait until the command succeeds and return its combined output
    #[instrument(skip(self, args), fields(cmd = %command_line(command, args)))]
    pub async fn wait_command_execute_return<A: AsRef<str>>(
        &self,
        command: &str,
        args: &[A],
        timeout: Duration,
    ) -> Result<String> {
        let operation = format!("unable to execute command {}", command_line(command, args));

        self.poller(timeout)
            .poll(&operation, || conditions::command_succeeds(command, args))
            .await
    }

    /// Wait until `f` succeeds and return its value. Errors of `f` are kept as text.
    #[instrument(skip(self, f))]
    pub async fn wait_function<T, E, F, Fut>(&self, mut f: F, timeout: Duration) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = std::result::Result<T, E>>,
        E: Display,
    {
        self.poller(timeout)
            .poll("unable to execute function", || {
                let attempt = f();
                async move { attempt.await.map_err(|e| TryError::Check(e.to_string())) }
            })
            .await
    }

    /// Wait until a client can be created and the API server answers
    #[instrument(skip(self))]
    pub async fn wait_client_created(
        &self,
        url: &str,
        kubeconfig_path: &str,
        timeout: Duration,
    ) -> Result<ClusterClient> {
        let client = self
            .poller(timeout)
            .poll("unable to create clients", || {
                conditions::client_reachable(url, kubeconfig_path)
            })
            .await?;

        info!("Cluster client created");
        Ok(client)
    }
}
