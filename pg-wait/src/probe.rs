//! PostgreSQL readiness probes backed by external client utilities

use crate::error::GateError;
use crate::gate::ReadinessProbe;
use common::{probe, ConfigExt};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// External utility used to test readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeKind {
    /// `pg_isready -h <host> -U <role>`
    #[default]
    PgIsReady,
    /// `psql -h <host> -U <role> -c \q`
    Psql,
}

impl ProbeKind {
    /// Read `PG_WAIT_PROBE`, defaulting to `pg_isready`.
    pub fn from_env() -> Result<Self, GateError> {
        String::env_or("PG_WAIT_PROBE", "pg_isready").parse()
    }

    pub fn program(&self) -> &'static str {
        match self {
            Self::PgIsReady => "pg_isready",
            Self::Psql => "psql",
        }
    }
}

impl FromStr for ProbeKind {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pg_isready" => Ok(Self::PgIsReady),
            "psql" => Ok(Self::Psql),
            other => Err(GateError::UnknownProbe(other.to_string())),
        }
    }
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// Probe that shells out to `pg_isready` or `psql` against a fixed role.
#[derive(Debug, Clone)]
pub struct PgProbe {
    kind: ProbeKind,
    role: String,
}

impl PgProbe {
    pub fn new(kind: ProbeKind, role: impl Into<String>) -> Self {
        Self {
            kind,
            role: role.into(),
        }
    }

    /// Arguments passed to the utility for `host`.
    pub fn args<'a>(&'a self, host: &'a str) -> Vec<&'a str> {
        let mut args = vec!["-h", host, "-U", self.role.as_str()];
        if self.kind == ProbeKind::Psql {
            args.extend(["-c", "\\q"]);
        }
        args
    }
}

impl ReadinessProbe for PgProbe {
    async fn is_ready(&self, host: &str) -> bool {
        match probe(self.kind.program(), &self.args(host)).await {
            Ok(ready) => ready,
            Err(e) => {
                // A missing utility counts as "not ready"; the loop keeps waiting.
                warn!(
                    probe = %self.kind,
                    error = %format!("{:#}", e),
                    "Readiness probe could not run"
                );
                false
            }
        }
    }
}
