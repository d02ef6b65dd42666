//! User-facing console output (banner, summary, final status)

use circles_launcher_core::domain::environment::{DATABASE_URL_VAR, NODE_ENV_VAR, PATH_VAR};
use circles_launcher_core::domain::{CommandSpec, LaunchOutcome};
use colored::Colorize;

const BANNER: &str = "🚀 Starting Circles - Food Experience Sharing Platform";
const RULE_WIDTH: usize = 50;

pub fn print_banner() {
    println!("{}", BANNER.cyan().bold());
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// Database and mode lines shown before the server starts
pub fn print_summary(spec: &CommandSpec) {
    println!("  {} {}", "📊 Database:".bold(), env_or_unset(spec, DATABASE_URL_VAR));
    println!("  {} {}", "🌐 Environment:".bold(), env_or_unset(spec, NODE_ENV_VAR));
    println!();
}

/// Everything that would be spawned, without spawning it
pub fn print_dry_run(spec: &CommandSpec) {
    println!("{}", "Dry run: server not started".yellow().bold());
    println!();
    println!("  {} {}", "Command:".bold(), spec.display_line());
    println!("  {} {}", "Working dir:".bold(), spec.working_dir.display());
    println!("  {} {}", "PATH:".bold(), env_or_unset(spec, PATH_VAR));
    print_summary(spec);
}

pub fn print_outcome(outcome: &LaunchOutcome) {
    match outcome {
        LaunchOutcome::Exited(0) => println!("{}", "✓ Server exited cleanly".green()),
        LaunchOutcome::Exited(code) => {
            println!("{}", format!("✗ Server exited with status {}", code).red())
        }
        // Already reported by the launch service log
        LaunchOutcome::Interrupted => println!(),
        LaunchOutcome::RuntimeNotFound => {
            eprintln!("{}", "❌ Node.js not found in system".red().bold())
        }
        LaunchOutcome::Failed(reason) => {
            eprintln!("{}", format!("❌ Error starting server: {}", reason).red().bold())
        }
    }
}

/// Launcher-level failure (bad flags, no working directory, runtime setup)
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{}", format!("❌ {:#}", err).red().bold());
}

fn env_or_unset(spec: &CommandSpec, key: &str) -> String {
    spec.env
        .get_lossy(key)
        .unwrap_or_else(|| "Not set".to_string())
}
