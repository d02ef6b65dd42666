//! Command-line / environment configuration
//!
//! Every flag is optional: `start-server` with no arguments reproduces the
//! fixed launch (`npm run dev` with the built-in Node.js candidates).

use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

use circles_launcher_core::application::constants::{DEFAULT_NPM_SCRIPT, DEFAULT_STORE_ROOT};
use circles_launcher_core::application::LaunchConfig;

use crate::logging::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "start-server")]
#[command(about = "Start the Circles development server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Node.js binary to try before the built-in candidates
    #[arg(long, env = "CIRCLES_NODE_BIN")]
    pub node: Option<String>,

    /// Store directory scanned when no candidate works
    #[arg(long, env = "CIRCLES_NIX_STORE", default_value = DEFAULT_STORE_ROOT)]
    pub store_root: String,

    /// npm script to run
    #[arg(long, env = "CIRCLES_NPM_SCRIPT", default_value = DEFAULT_NPM_SCRIPT)]
    pub script: String,

    /// Log output format
    #[arg(long, env = "CIRCLES_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Resolve runtime and environment, print them, and exit without starting the server
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Map the parsed flags onto the core launch configuration
    pub fn launch_config(&self) -> Result<LaunchConfig> {
        if self.script.trim().is_empty() {
            bail!("npm script name must not be empty");
        }

        let mut config = LaunchConfig {
            store_root: expand(&self.store_root),
            script: self.script.clone(),
            ..Default::default()
        };

        if let Some(node) = &self.node {
            config = config.with_preferred_candidate(expand(node));
        }

        Ok(config)
    }
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}
