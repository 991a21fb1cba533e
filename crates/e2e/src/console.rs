//! Console readiness probing
//!
//! The console is an external deployment; nothing is spawned here. Before a
//! suite runs, the console URL is polled until it answers, bounding the
//! wait so an unreachable target fails fast with the attempt count.

use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

use console_common::Env;

use crate::error::{E2eError, E2eResult};

/// Poll the console until it responds to HTTP or the timeout elapses.
pub async fn wait_until_ready(env: &Env, timeout: Duration) -> E2eResult<()> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()?;

    let start = std::time::Instant::now();
    let mut attempts = 0;

    while start.elapsed() < timeout {
        attempts += 1;

        match client.get(&env.console_url).send().await {
            Ok(resp) if resp.status().is_success() => {
                info!("console is reachable at {}", env.console_url);
                return Ok(());
            }
            Ok(resp) => {
                warn!("console readiness probe returned {}", resp.status());
            }
            Err(e) => {
                if attempts == 1 {
                    info!("waiting for console at {}...", env.console_url);
                }
                // Connection refused is expected while the deployment rolls out.
                if !e.is_connect() {
                    warn!("console readiness probe error: {e}");
                }
            }
        }

        sleep(Duration::from_millis(100)).await;
    }

    Err(E2eError::ConsoleNotReady(attempts))
}
