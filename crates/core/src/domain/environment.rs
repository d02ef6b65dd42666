// Child Environment Assembly
// Derives the child's environment from the inherited one: PATH is extended,
// NODE_ENV is forced, DATABASE_URL is defaulted only when absent.

use super::error::{DomainError, Result};
use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Platform separator between PATH entries
#[cfg(windows)]
pub const PATH_SEPARATOR: char = ';';
#[cfg(not(windows))]
pub const PATH_SEPARATOR: char = ':';

pub const PATH_VAR: &str = "PATH";
pub const NODE_ENV_VAR: &str = "NODE_ENV";
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Development-mode flag forced on the child
pub const DEFAULT_NODE_ENV: &str = "development";

/// Connection string used when the parent has no DATABASE_URL
pub const DEFAULT_DATABASE_URL: &str = "postgresql://localhost:5432/circles";

/// Values the assembler writes into the child environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentDefaults {
    pub node_env: String,
    pub database_url: String,
}

impl Default for EnvironmentDefaults {
    fn default() -> Self {
        Self {
            node_env: DEFAULT_NODE_ENV.to_string(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

/// Environment handed to the child process
///
/// Keys and values are `OsString` so inherited variables that are not valid
/// UTF-8 are carried over untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildEnvironment {
    vars: BTreeMap<OsString, OsString>,
    database_url_defaulted: bool,
}

impl ChildEnvironment {
    /// Assemble the child environment from the parent's.
    ///
    /// # Arguments
    /// * `inherited` - The parent environment (usually `std::env::vars_os()`)
    /// * `bin_dir` - Directory of the discovered runtime, prepended to PATH
    /// * `defaults` - NODE_ENV value and fallback DATABASE_URL
    ///
    /// # Errors
    /// - `DomainError::InvalidPathEntry` if `bin_dir` contains the PATH separator
    pub fn assemble<I, K, V>(
        inherited: I,
        bin_dir: &Path,
        defaults: &EnvironmentDefaults,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        let mut vars: BTreeMap<OsString, OsString> = inherited
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let path = prepend_path(bin_dir, vars.get(OsStr::new(PATH_VAR)).map(OsString::as_os_str))?;
        vars.insert(PATH_VAR.into(), path);
        vars.insert(NODE_ENV_VAR.into(), defaults.node_env.clone().into());

        // Present-but-empty counts as present
        let database_url_defaulted = !vars.contains_key(OsStr::new(DATABASE_URL_VAR));
        if database_url_defaulted {
            vars.insert(DATABASE_URL_VAR.into(), defaults.database_url.clone().into());
        }

        Ok(Self {
            vars,
            database_url_defaulted,
        })
    }

    pub fn get(&self, key: &str) -> Option<&OsStr> {
        self.vars.get(OsStr::new(key)).map(OsString::as_os_str)
    }

    /// Lossy UTF-8 view of a variable, for display
    pub fn get_lossy(&self, key: &str) -> Option<String> {
        self.get(key).map(|v| v.to_string_lossy().into_owned())
    }

    /// True when DATABASE_URL was absent from the parent and filled in
    pub fn database_url_defaulted(&self) -> bool {
        self.database_url_defaulted
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// `bin_dir` + separator + current PATH, or `bin_dir` alone when PATH is unset/empty
fn prepend_path(bin_dir: &Path, current: Option<&OsStr>) -> Result<OsString> {
    if bin_dir.to_string_lossy().contains(PATH_SEPARATOR) {
        return Err(DomainError::InvalidPathEntry {
            entry: bin_dir.to_path_buf(),
            separator: PATH_SEPARATOR,
        });
    }

    let mut path = bin_dir.as_os_str().to_os_string();
    if let Some(current) = current.filter(|c| !c.is_empty()) {
        let mut sep = [0u8; 4];
        path.push(PATH_SEPARATOR.encode_utf8(&mut sep));
        path.push(current);
    }
    Ok(path)
}
