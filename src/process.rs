// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! External command execution with combined output capture

use crate::error::{Result, TryError};
use tokio::process::Command;
use tracing::{debug, instrument};

/// Render a command and its arguments the way a shell user would type them
pub fn command_line<A: AsRef<str>>(command: &str, args: &[A]) -> String {
    std::iter::once(command)
        .chain(args.iter().map(|a| a.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run a command to completion with the current environment.
///
/// Returns stdout followed by stderr. A spawn failure or a non-zero exit is
/// reported as `TryError::CommandFailed` carrying whatever output was produced.
#[instrument(skip(args), fields(arg_count = args.len()))]
pub async fn run_combined<A: AsRef<str>>(command: &str, args: &[A]) -> Result<String> {
    let line = command_line(command, args);
    debug!("Running {}", line);

    let output = Command::new(command)
        .args(args.iter().map(|a| a.as_ref()))
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|e| TryError::CommandFailed {
            command: line.clone(),
            output: String::new(),
            reason: e.to_string(),
        })?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    if !output.status.success() {
        return Err(TryError::CommandFailed {
            command: line,
            output: combined,
            reason: output.status.to_string(),
        });
    }

    Ok(combined)
}
