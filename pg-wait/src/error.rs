//! Errors that stop the gate before or after the readiness wait

use std::io;
use thiserror::Error;

/// Exit code for bad arguments or configuration.
pub const EXIT_USAGE: i32 = 2;
/// Exit code when the command could not be executed.
pub const EXIT_NOT_EXECUTABLE: i32 = 126;
/// Exit code when the command was not found.
pub const EXIT_NOT_FOUND: i32 = 127;

#[derive(Debug, Error)]
pub enum GateError {
    #[error("usage: pg-wait <host> <command...>: {0}")]
    Usage(String),

    #[error("unknown probe {0:?}, expected \"pg_isready\" or \"psql\"")]
    UnknownProbe(String),

    #[error("failed to exec {program}: {source}")]
    Exec {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl GateError {
    /// Process exit code for this error, following shell conventions.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) | Self::UnknownProbe(_) => EXIT_USAGE,
            Self::Exec { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                EXIT_NOT_FOUND
            }
            Self::Exec { .. } => EXIT_NOT_EXECUTABLE,
        }
    }
}
