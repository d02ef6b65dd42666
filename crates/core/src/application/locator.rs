// Runtime Locator
// Ordered candidate search, falling through to a store scan.
// A failing candidate never aborts the search.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::config::LaunchConfig;
use crate::domain::{DiscoverySource, RuntimeLocation};
use crate::port::runtime_probe::{ProbeError, RuntimeProbe};

pub struct RuntimeLocator {
    probe: Arc<dyn RuntimeProbe>,
    candidates: Vec<PathBuf>,
    store_root: PathBuf,
    store_pattern: String,
    runtime_binary: String,
}

impl RuntimeLocator {
    pub fn new(probe: Arc<dyn RuntimeProbe>, config: &LaunchConfig) -> Self {
        Self {
            probe,
            candidates: config.candidates.clone(),
            store_root: config.store_root.clone(),
            store_pattern: config.store_pattern.clone(),
            runtime_binary: config.runtime_binary.clone(),
        }
    }

    /// Find the first runtime that answers the version check
    ///
    /// Returns `None` when neither a candidate nor a store entry works.
    pub async fn locate(&self) -> Option<RuntimeLocation> {
        for candidate in &self.candidates {
            if let Some(location) = self.try_candidate(candidate).await {
                return Some(location);
            }
        }

        self.search_store().await
    }

    async fn try_candidate(&self, candidate: &Path) -> Option<RuntimeLocation> {
        let binary = if is_bare_name(candidate) {
            match self.probe.resolve(candidate) {
                Some(resolved) => resolved,
                None => {
                    debug!(candidate = %candidate.display(), "Not found on PATH");
                    return None;
                }
            }
        } else {
            candidate.to_path_buf()
        };

        self.verify(&binary, DiscoverySource::Candidate).await
    }

    async fn search_store(&self) -> Option<RuntimeLocation> {
        if !self.probe.store_exists(&self.store_root) {
            debug!(root = %self.store_root.display(), "Store not present, skipping scan");
            return None;
        }

        let entries = match self.probe.scan_store(&self.store_root, &self.store_pattern) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "⚠️ Error searching store");
                return None;
            }
        };

        debug!(
            root = %self.store_root.display(),
            pattern = %self.store_pattern,
            matches = entries.len(),
            "Scanning store"
        );

        for entry in entries {
            let binary = entry.join("bin").join(&self.runtime_binary);
            if let Some(location) = self.verify(&binary, DiscoverySource::Store).await {
                return Some(location);
            }
        }

        None
    }

    async fn verify(&self, binary: &Path, source: DiscoverySource) -> Option<RuntimeLocation> {
        match self.probe.version(binary).await {
            Ok(version) => match RuntimeLocation::new(binary, version, source) {
                Ok(location) => {
                    info!(
                        binary = %location.binary.display(),
                        version = %location.version,
                        source = %location.source,
                        "✅ Found Node.js"
                    );
                    Some(location)
                }
                Err(e) => {
                    warn!(error = %e, "Discarding runtime candidate");
                    None
                }
            },
            Err(ProbeError::NotFound(path)) => {
                debug!(binary = %path.display(), "Candidate missing");
                None
            }
            Err(e) => {
                warn!(error = %e, "Candidate failed version check");
                None
            }
        }
    }
}

/// `node` is bare; `./node`, `bin/node` and `/usr/bin/node` are not
fn is_bare_name(path: &Path) -> bool {
    let mut components = path.components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
