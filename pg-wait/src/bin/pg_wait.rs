//! pg-wait - Wait for PostgreSQL, then exec a command
//!
//! Usage: pg-wait <host> <command...>
//!
//! Probes <host> with pg_isready as the postgres role every 2 seconds until it
//! accepts connections, then execs <command...> in place of this process.

use common::init_logging;
use pg_wait::{hand_off, parse_args, wait_until_ready, Config, GateError, PgProbe};
use std::env;
use std::process::ExitCode;
use tracing::{error, info};

async fn run() -> Result<(), GateError> {
    let invocation = parse_args(env::args().skip(1))?;
    let config = Config::from_env(&invocation.host)?;

    info!(
        host = %config.host,
        probe = %config.probe,
        role = %config.role,
        "Waiting for PostgreSQL"
    );

    let probe = PgProbe::new(config.probe, config.role.as_str());
    wait_until_ready(&probe, &config.host, config.interval).await;

    match invocation.command {
        Some(command) => Err(hand_off(&command)),
        None => {
            info!("No command given, exiting");
            Ok(())
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _guard = init_logging("pg-wait");

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "pg-wait failed");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
