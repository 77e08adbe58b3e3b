// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::{Result, TryError};
use crate::process::run_combined;

/// Succeeds when the command exits cleanly, yielding its combined output
pub async fn command_succeeds<A: AsRef<str>>(command: &str, args: &[A]) -> Result<String> {
    run_combined(command, args).await
}

/// Succeeds when the command exits cleanly and its output contains `expected`
pub async fn command_output_contains<A: AsRef<str>>(
    command: &str,
    args: &[A],
    expected: &str,
) -> Result<String> {
    let output = run_combined(command, args).await?;

    if !output.contains(expected) {
        return Err(TryError::UnexpectedOutput {
            output,
            expected: expected.to_string(),
        });
    }

    Ok(output)
}
