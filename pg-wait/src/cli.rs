//! Command line parsing
//!
//! `pg-wait <host> <command...>`: everything after the host is the command to
//! hand off to, kept verbatim. Flags are not interpreted so that the command's
//! own options (`ls -la`) pass through untouched.

use crate::error::GateError;

/// The command to run once the database is ready.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownstreamCommand {
    pub program: String,
    pub args: Vec<String>,
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub host: String,
    /// `None` when only a host was given.
    pub command: Option<DownstreamCommand>,
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<Invocation, GateError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();

    let host = args
        .next()
        .ok_or_else(|| GateError::Usage("missing host".to_string()))?;
    if host.is_empty() {
        return Err(GateError::Usage("host must not be empty".to_string()));
    }

    let command = args.next().map(|program| DownstreamCommand {
        program,
        args: args.collect(),
    });

    Ok(Invocation { host, command })
}
