// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TryError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("deployment {0:?} has not been yet created")]
    DeploymentNotFound(String),

    #[error("deployment {0:?} has no replicas")]
    DeploymentNoReplicas(String),

    #[error("deployment {name:?} not ready: {ready}/{desired} replicas ready")]
    DeploymentNotReady {
        name: String,
        ready: i32,
        desired: i32,
    },

    #[error("deployment {0:?} exist")]
    DeploymentExists(String),

    #[error("namespace {0:?} exist")]
    NamespaceExists(String),

    #[error("unable to update deployment {name:?}: {source}")]
    UpdateFailed {
        name: String,
        #[source]
        source: Box<TryError>,
    },

    #[error("command {command} failed ({reason}), output: {output}")]
    CommandFailed {
        command: String,
        output: String,
        reason: String,
    },

    #[error("output {output:?} does not contain {expected:?}")]
    UnexpectedOutput { output: String, expected: String },

    #[error("check panicked: {0}")]
    CheckPanicked(String),

    #[error("{0}")]
    Check(String),

    #[error("{operation}: gave up after {attempts} attempts in {elapsed:?}: {last}")]
    TimedOut {
        operation: String,
        attempts: u32,
        elapsed: Duration,
        #[source]
        last: Box<TryError>,
    },
}

impl TryError {
    /// A write rejected because the object changed since it was read
    pub fn is_conflict(&self) -> bool {
        matches!(self, TryError::KubeError(kube::Error::Api(err)) if err.code == 409)
    }

    /// The failure observed by the last attempt, looking through a timeout.
    pub fn last_failure(&self) -> &TryError {
        match self {
            TryError::TimedOut { last, .. } => last,
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, TryError>;
