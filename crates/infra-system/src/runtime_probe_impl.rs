// Runtime probe implementation
// reason: tokio::process for the version check, `which` for PATH lookup
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use circles_launcher_core::port::runtime_probe::{ProbeError, RuntimeProbe};

/// Flag passed to the runtime to prove it is usable
const VERSION_FLAG: &str = "--version";

/// Runtime probe that talks to the real host
///
/// # Example
/// ```ignore
/// let probe = CommandRuntimeProbe::new();
/// let version = probe.version(Path::new("/usr/bin/node")).await?;
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct CommandRuntimeProbe;

impl CommandRuntimeProbe {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RuntimeProbe for CommandRuntimeProbe {
    async fn version(&self, binary: &Path) -> Result<String, ProbeError> {
        let output = Command::new(binary)
            .arg(VERSION_FLAG)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ProbeError::NotFound(binary.to_path_buf()),
                _ => ProbeError::Io {
                    binary: binary.to_path_buf(),
                    message: e.to_string(),
                },
            })?;

        if !output.status.success() {
            return Err(ProbeError::VersionCheckFailed {
                binary: binary.to_path_buf(),
                code: output.status.code(),
            });
        }

        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!(binary = %binary.display(), version = %version, "Version check passed");
        Ok(version)
    }

    fn resolve(&self, name: &Path) -> Option<PathBuf> {
        which::which(name).ok()
    }

    fn store_exists(&self, root: &Path) -> bool {
        root.is_dir()
    }

    fn scan_store(&self, root: &Path, pattern: &str) -> Result<Vec<PathBuf>, ProbeError> {
        let scan_failed = |e: std::io::Error| ProbeError::ScanFailed {
            root: root.to_path_buf(),
            message: e.to_string(),
        };

        let mut matched = Vec::new();
        for entry in std::fs::read_dir(root).map_err(scan_failed)? {
            let entry = entry.map_err(scan_failed)?;
            if entry.file_name().to_string_lossy().contains(pattern) {
                matched.push(entry.path());
            }
        }

        // Directory order is arbitrary; keep discovery deterministic
        matched.sort();
        Ok(matched)
    }
}
