//! Circles Launcher - Main Entry Point
//! Finds Node.js, assembles the environment and runs `npm run dev`

mod config;
mod console;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};

use circles_launcher_core::application::{LaunchConfig, LaunchService};
use circles_launcher_core::domain::launch::EXIT_CODE_FAILURE;
use circles_launcher_core::domain::LaunchOutcome;
use circles_launcher_core::VERSION;
use circles_launcher_infra_system::{CommandRuntimeProbe, CtrlCSignal, SubprocessRunner};

use config::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.log_format) {
        eprintln!("Failed to initialize logging: {:#}", e);
    }

    let code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            error!(error = %format!("{:#}", e), "Launcher failed");
            console::print_error(&e);
            EXIT_CODE_FAILURE
        }
    };

    std::process::exit(code);
}

fn run(cli: &Cli) -> Result<i32> {
    let config = cli.launch_config()?;

    // Single-threaded: the only suspension point is the wait on the child
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    runtime.block_on(launch(config, cli.dry_run))
}

async fn launch(config: LaunchConfig, dry_run: bool) -> Result<i32> {
    info!("Circles launcher v{} starting...", VERSION);
    console::print_banner();

    let working_dir = std::env::current_dir().context("Failed to read current directory")?;

    // DI wiring
    let service = LaunchService::new(
        Arc::new(CommandRuntimeProbe::new()),
        Arc::new(SubprocessRunner::default()),
        config,
    );

    let spec = match service.prepare(std::env::vars_os(), working_dir).await {
        Ok(spec) => spec,
        Err(e) => {
            error!(error = %e, "Launch preparation failed");
            let outcome = LaunchOutcome::from(e);
            console::print_outcome(&outcome);
            return Ok(outcome.exit_code());
        }
    };

    if dry_run {
        console::print_dry_run(&spec);
        return Ok(0);
    }

    console::print_summary(&spec);
    info!("Press Ctrl+C to stop the server");

    let outcome = service.execute(&spec, &CtrlCSignal).await;
    console::print_outcome(&outcome);

    Ok(outcome.exit_code())
}
