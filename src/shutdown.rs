/*  Copyright 2026 the Conwayste Developers.
 *
 *  This file is part of lifeterm.
 *
 *  lifeterm is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  lifeterm is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with lifeterm.  If not, see <http://www.gnu.org/licenses/>. */

//! Turns SIGINT/SIGTERM into a cancelled `CancellationToken`.

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::*;

use crate::error::LifeResult;

/// Waits for the first termination signal and returns its name.
#[cfg(unix)]
pub async fn wait_for_signal() -> LifeResult<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    // SIGKILL is not listed as there is no opportunity to clean up
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    let name = tokio::select! {
        _ = sigint.recv() => "SIGINT",
        _ = sigterm.recv() => "SIGTERM",
    };
    Ok(name)
}

#[cfg(not(unix))]
pub async fn wait_for_signal() -> LifeResult<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("ctrl-c")
}

/// Spawns a task that cancels `token` when a termination signal arrives. The task's output is the
/// signal name, or `None` if the handlers could not be installed.
pub fn spawn_signal_listener(token: CancellationToken) -> JoinHandle<Option<&'static str>> {
    tokio::spawn(async move {
        tokio::select! {
            res = wait_for_signal() => match res {
                Ok(name) => {
                    info!("{} received, cleaning up", name);
                    token.cancel();
                    Some(name)
                }
                Err(e) => {
                    error!("Failed to install signal handlers: {}", e);
                    None
                }
            },
            _ = token.cancelled() => None,
        }
    })
}
