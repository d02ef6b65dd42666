// Launch configuration
// Defaults reproduce the fixed behavior; the binary may override a few fields.

use super::constants::{
    DEFAULT_LAUNCH_PROGRAM, DEFAULT_NPM_SCRIPT, DEFAULT_RUNTIME_CANDIDATES, DEFAULT_STORE_PATTERN,
    DEFAULT_STORE_ROOT, RUNTIME_BINARY_NAME,
};
use crate::domain::EnvironmentDefaults;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    /// Runtime binaries tried in order
    pub candidates: Vec<PathBuf>,
    /// Directory scanned when every candidate fails
    pub store_root: PathBuf,
    /// Substring a store entry name must contain
    pub store_pattern: String,
    /// Executable name inside `<store entry>/bin`
    pub runtime_binary: String,
    /// Program spawned to start the application
    pub program: String,
    /// npm script passed to `<program> run`
    pub script: String,
    pub env_defaults: EnvironmentDefaults,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            candidates: DEFAULT_RUNTIME_CANDIDATES
                .iter()
                .map(|c| PathBuf::from(*c))
                .collect(),
            store_root: PathBuf::from(DEFAULT_STORE_ROOT),
            store_pattern: DEFAULT_STORE_PATTERN.to_string(),
            runtime_binary: RUNTIME_BINARY_NAME.to_string(),
            program: DEFAULT_LAUNCH_PROGRAM.to_string(),
            script: DEFAULT_NPM_SCRIPT.to_string(),
            env_defaults: EnvironmentDefaults::default(),
        }
    }
}

impl LaunchConfig {
    /// Try `path` before every other candidate
    pub fn with_preferred_candidate(mut self, path: impl Into<PathBuf>) -> Self {
        self.candidates.insert(0, path.into());
        self
    }

    /// Arguments for the launch program: `run <script>`
    pub fn launch_args(&self) -> Vec<String> {
        vec!["run".to_string(), self.script.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_launch() {
        let config = LaunchConfig::default();
        assert_eq!(config.candidates.len(), 4);
        assert_eq!(config.candidates[3], PathBuf::from("node"));
        assert_eq!(config.store_root, PathBuf::from("/nix/store"));
        assert_eq!(config.program, "npm");
        assert_eq!(config.launch_args(), vec!["run", "dev"]);
    }

    #[test]
    fn test_preferred_candidate_goes_first() {
        let config = LaunchConfig::default().with_preferred_candidate("/opt/node/bin/node");
        assert_eq!(config.candidates[0], PathBuf::from("/opt/node/bin/node"));
        assert_eq!(config.candidates.len(), 5);
    }
}
