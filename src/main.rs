// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use kube_try::{ClusterClient, Waiter};

/// Wait for eventually-consistent cluster conditions
#[derive(Parser)]
#[command(name = "kube-try", version)]
struct Cli {
    /// Timeout in seconds, multiplied by CI_TIMEOUT_MULTIPLIER when CI is set
    #[arg(long, global = true, default_value_t = 60)]
    timeout: u64,

    /// Kubeconfig file; inferred from the environment when empty
    #[arg(long, global = true, default_value = "")]
    kubeconfig: String,

    /// API server URL overriding the one from the kubeconfig
    #[arg(long, global = true, default_value = "")]
    server: String,

    #[command(subcommand)]
    wait: Wait,
}

#[derive(Subcommand)]
enum Wait {
    /// Until all replicas of a deployment are ready
    DeploymentReady {
        name: String,
        #[arg(short, long, default_value = "default")]
        namespace: String,
    },
    /// Until a deployment no longer exists
    DeploymentDeleted {
        name: String,
        #[arg(short, long, default_value = "default")]
        namespace: String,
    },
    /// Until a namespace no longer exists
    NamespaceDeleted { name: String },
    /// Until a command succeeds and its output contains a string
    Command {
        /// Substring the combined stdout and stderr must contain
        expected: String,
        #[arg(trailing_var_arg = true, required = true, num_args = 1..)]
        argv: Vec<String>,
    },
    /// Until a command succeeds, then print its output
    CommandReturn {
        #[arg(trailing_var_arg = true, required = true, num_args = 1..)]
        argv: Vec<String>,
    },
    /// Until the API server answers
    Client,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr, stdout carries command output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let timeout = Duration::from_secs(cli.timeout);
    let waiter = Waiter::new();

    match cli.wait {
        Wait::DeploymentReady { name, namespace } => {
            let client = ClusterClient::new(&cli.server, &cli.kubeconfig).await?;
            waiter
                .wait_ready_deployment(&client, &name, &namespace, timeout)
                .await?;
        }
        Wait::DeploymentDeleted { name, namespace } => {
            let client = ClusterClient::new(&cli.server, &cli.kubeconfig).await?;
            waiter
                .wait_delete_deployment(&client, &name, &namespace, timeout)
                .await?;
        }
        Wait::NamespaceDeleted { name } => {
            let client = ClusterClient::new(&cli.server, &cli.kubeconfig).await?;
            waiter.wait_delete_namespace(&client, &name, timeout).await?;
        }
        Wait::Command { expected, argv } => {
            let (command, args) = split_argv(&argv);
            waiter
                .wait_command_execute(command, args, &expected, timeout)
                .await?;
        }
        Wait::CommandReturn { argv } => {
            let (command, args) = split_argv(&argv);
            let output = waiter
                .wait_command_execute_return(command, args, timeout)
                .await?;
            print!("{}", output);
        }
        Wait::Client => {
            waiter
                .wait_client_created(&cli.server, &cli.kubeconfig, timeout)
                .await?;
        }
    }

    Ok(())
}

/// clap guarantees at least one element
fn split_argv(argv: &[String]) -> (&str, &[String]) {
    match argv.split_first() {
        Some((command, args)) => (command.as_str(), args),
        None => ("", &[]),
    }
}
