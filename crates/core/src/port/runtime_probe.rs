// Runtime Probe Port
// Abstraction over the host: version checks, PATH lookup, store scans

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Probe errors
///
/// All of these are non-fatal to the locator: a failed candidate is skipped.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Binary not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Version check for {} exited with status {code:?}", .binary.display())]
    VersionCheckFailed { binary: PathBuf, code: Option<i32> },

    #[error("Failed to run {}: {message}", .binary.display())]
    Io { binary: PathBuf, message: String },

    #[error("Failed to scan {}: {message}", .root.display())]
    ScanFailed { root: PathBuf, message: String },
}

/// Runtime probe port
///
/// Used by the RuntimeLocator to decide which binary is usable
#[async_trait]
pub trait RuntimeProbe: Send + Sync {
    /// Run `<binary> --version` and return its trimmed stdout
    ///
    /// # Errors
    /// - ProbeError::NotFound if the binary does not exist
    /// - ProbeError::VersionCheckFailed on a non-zero exit
    /// - ProbeError::Io for any other spawn failure (e.g. permission denied)
    async fn version(&self, binary: &Path) -> Result<String, ProbeError>;

    /// Resolve a bare command name against the inherited PATH
    fn resolve(&self, name: &Path) -> Option<PathBuf>;

    /// Whether the store root exists at all
    fn store_exists(&self, root: &Path) -> bool;

    /// List store entries whose file name contains `pattern`, sorted
    ///
    /// # Errors
    /// - ProbeError::ScanFailed if the directory cannot be read
    fn scan_store(&self, root: &Path, pattern: &str) -> Result<Vec<PathBuf>, ProbeError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Mock RuntimeProbe for testing
    ///
    /// Only binaries registered with `with_binary` pass the version check.
    #[derive(Default)]
    pub struct MockRuntimeProbe {
        binaries: HashMap<PathBuf, String>,
        failing: HashMap<PathBuf, i32>,
        on_path: HashMap<PathBuf, PathBuf>,
        store: Option<Result<Vec<PathBuf>, String>>,
        checked: Mutex<Vec<PathBuf>>,
    }

    impl MockRuntimeProbe {
        pub fn new() -> Self {
            Self::default()
        }

        /// Register a binary that answers `--version` with `version`
        pub fn with_binary(mut self, path: impl Into<PathBuf>, version: &str) -> Self {
            self.binaries.insert(path.into(), version.to_string());
            self
        }

        /// Register a binary that exists but exits non-zero
        pub fn with_failing_binary(mut self, path: impl Into<PathBuf>, code: i32) -> Self {
            self.failing.insert(path.into(), code);
            self
        }

        /// Make a bare name resolvable through PATH
        pub fn with_path_entry(mut self, name: &str, resolved: impl Into<PathBuf>) -> Self {
            self.on_path.insert(PathBuf::from(name), resolved.into());
            self
        }

        /// Store root exists and contains these entries
        pub fn with_store(mut self, entries: Vec<PathBuf>) -> Self {
            self.store = Some(Ok(entries));
            self
        }

        /// Store root exists but cannot be read
        pub fn with_unreadable_store(mut self, message: &str) -> Self {
            self.store = Some(Err(message.to_string()));
            self
        }

        /// Binaries the locator asked to version-check, in order
        pub fn checked(&self) -> Vec<PathBuf> {
            self.checked.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RuntimeProbe for MockRuntimeProbe {
        async fn version(&self, binary: &Path) -> Result<String, ProbeError> {
            self.checked.lock().unwrap().push(binary.to_path_buf());

            if let Some(version) = self.binaries.get(binary) {
                return Ok(version.clone());
            }
            if let Some(code) = self.failing.get(binary) {
                return Err(ProbeError::VersionCheckFailed {
                    binary: binary.to_path_buf(),
                    code: Some(*code),
                });
            }
            Err(ProbeError::NotFound(binary.to_path_buf()))
        }

        fn resolve(&self, name: &Path) -> Option<PathBuf> {
            self.on_path.get(name).cloned()
        }

        fn store_exists(&self, _root: &Path) -> bool {
            self.store.is_some()
        }

        fn scan_store(&self, root: &Path, pattern: &str) -> Result<Vec<PathBuf>, ProbeError> {
            match &self.store {
                Some(Ok(entries)) => {
                    let mut matched: Vec<PathBuf> = entries
                        .iter()
                        .filter(|e| {
                            e.file_name()
                                .map(|n| n.to_string_lossy().contains(pattern))
                                .unwrap_or(false)
                        })
                        .cloned()
                        .collect();
                    matched.sort();
                    Ok(matched)
                }
                Some(Err(message)) => Err(ProbeError::ScanFailed {
                    root: root.to_path_buf(),
                    message: message.clone(),
                }),
                None => Ok(Vec::new()),
            }
        }
    }
}
