// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Exit waiter.
//!
//! ```text
//! tick (immediately, then every interval)
//!   is_running? ── true  ──> keep polling
//!               ── false ──> done (poll count)
//!               ── error ──> warn, keep polling
//! optional timeout ──> ProcessError::WaitTimeout
//! ```

use std::time::Duration;

use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info, warn};

use super::control::ProcessControl;
use crate::error::{LauncherResult, ProcessError};

/// Polls the process list until `image` is no longer running.
///
/// The first query runs immediately. Without a `timeout` this may poll
/// forever. Returns the number of queries made.
///
/// # Errors
///
/// Returns `ProcessError::WaitTimeout` if `timeout` elapses first.
pub async fn wait_for_exit<C>(
    control: &C,
    image: &str,
    poll_interval: Duration,
    timeout: Option<Duration>,
) -> LauncherResult<u64>
where
    C: ProcessControl + ?Sized,
{
    let polling = poll_until_gone(control, image, poll_interval);

    let polls = match timeout {
        Some(limit) => tokio::time::timeout(limit, polling).await.map_err(|_| {
            ProcessError::WaitTimeout {
                name: image.to_string(),
                timeout_secs: limit.as_secs(),
            }
        })?,
        None => polling.await,
    };

    info!(process = %image, polls, "game process has exited");
    Ok(polls)
}

async fn poll_until_gone<C>(control: &C, image: &str, poll_interval: Duration) -> u64
where
    C: ProcessControl + ?Sized,
{
    let mut ticker = interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut polls = 0_u64;

    loop {
        ticker.tick().await;
        polls += 1;

        match control.is_running(image).await {
            Ok(false) => return polls,
            Ok(true) => debug!(process = %image, polls, "still running"),
            Err(e) => warn!(process = %image, error = %e, "process list query failed"),
        }
    }
}
