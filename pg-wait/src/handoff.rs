//! Process handoff
//!
//! Replaces the current process image with the downstream command. The
//! command keeps this PID, inherits stdin/stdout/stderr and the environment,
//! and its exit status becomes the final one.

use crate::cli::DownstreamCommand;
use crate::error::GateError;
use std::os::unix::process::CommandExt;
use std::process::Command;
use tracing::info;

/// Exec `command`. Only returns if exec itself failed.
pub fn hand_off(command: &DownstreamCommand) -> GateError {
    info!(program = %command.program, args = ?command.args, "Handing off");

    let source = Command::new(&command.program).args(&command.args).exec();

    GateError::Exec {
        program: command.program.clone(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_returns_error() {
        let err = hand_off(&DownstreamCommand {
            program: "/nonexistent/definitely-not-here".to_string(),
            args: vec![],
        });
        assert!(matches!(err, GateError::Exec { .. }));
        assert_eq!(err.exit_code(), crate::error::EXIT_NOT_FOUND);
    }
}
