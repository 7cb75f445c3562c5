//! Gate configuration from the command line and environment variables

use crate::error::GateError;
use crate::probe::ProbeKind;
use std::time::Duration;

/// Database role used by every readiness probe.
pub const PROBE_ROLE: &str = "postgres";

/// Delay between readiness probes. Constant: no growth, no jitter.
pub const RETRY_INTERVAL: Duration = Duration::from_secs(2);

/// Configuration for the readiness gate
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub probe: ProbeKind,
    pub role: String,
    pub interval: Duration,
}

impl Config {
    /// Build the configuration for `host`, reading the probe kind from `PG_WAIT_PROBE`
    pub fn from_env(host: &str) -> Result<Self, GateError> {
        Ok(Self {
            host: host.to_string(),
            probe: ProbeKind::from_env()?,
            role: PROBE_ROLE.to_string(),
            interval: RETRY_INTERVAL,
        })
    }
}
