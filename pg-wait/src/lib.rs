//! PostgreSQL readiness gate
//!
//! Blocks until a PostgreSQL server accepts connections, then replaces the
//! current process with a caller-supplied command.

pub mod cli;
pub mod config;
pub mod error;
pub mod gate;
pub mod handoff;
pub mod probe;

pub use cli::{parse_args, DownstreamCommand, Invocation};
pub use config::{Config, PROBE_ROLE, RETRY_INTERVAL};
pub use error::GateError;
pub use gate::{wait_until_ready, ReadinessProbe};
pub use handoff::hand_off;
pub use probe::{PgProbe, ProbeKind};
