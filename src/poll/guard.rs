// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Turns a panicking check into an ordinary failed attempt.

use crate::error::{Result, TryError};
use futures::FutureExt;
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

/// Run one invocation of `check`, converting any panic into `TryError::CheckPanicked`.
///
/// The closure itself is called inside the guarded future, so a panic raised
/// before the check returns its future is caught as well.
pub async fn guarded<T, F, Fut>(check: &mut F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    match AssertUnwindSafe(async { check().await })
        .catch_unwind()
        .await
    {
        Ok(result) => result,
        Err(payload) => Err(TryError::CheckPanicked(panic_message(&*payload))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
