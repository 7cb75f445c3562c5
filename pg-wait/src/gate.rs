//! Readiness wait loop
//!
//! Probes the target until it accepts connections, sleeping a constant
//! interval between attempts. There is no retry cap or timeout: the loop only
//! ends when the probe succeeds or the process is killed.

use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

/// A check that reports whether a database host currently accepts connections.
pub trait ReadinessProbe {
    fn is_ready(&self, host: &str) -> impl Future<Output = bool>;
}

/// Wait until `probe` reports `host` as ready.
///
/// Returns the number of failed attempts before the successful one. Probes
/// run one at a time, and no probe runs after the first success.
pub async fn wait_until_ready<P: ReadinessProbe>(probe: &P, host: &str, interval: Duration) -> u32 {
    let mut failures = 0u32;

    while !probe.is_ready(host).await {
        failures = failures.saturating_add(1);
        warn!(host, failures, retry_in = ?interval, "Postgres is unavailable - sleeping");
        sleep(interval).await;
    }

    info!(host, failures, "Postgres is up - executing command");
    failures
}
