//! Fake Node.js / npm installations for end-to-end launches
#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

pub const FAKE_NODE_VERSION: &str = "v20.11.1";

/// Write an executable `/bin/sh` script
pub fn write_script(path: &Path, body: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

/// `<root>/bin/node` answering `--version`; returns the bin directory
pub fn install_node(root: &Path) -> PathBuf {
    let bin = root.join("bin");
    write_script(&bin.join("node"), &format!("echo {}", FAKE_NODE_VERSION));
    bin
}

/// `<bin>/npm` that dumps its environment to `env_dump` and exits with `code`
pub fn install_npm(bin: &Path, env_dump: &Path, code: i32) {
    write_script(
        &bin.join("npm"),
        &format!(
            "echo \"$@\" > '{dump}.args'\nenv > '{dump}'\nexit {code}",
            dump = env_dump.display(),
            code = code
        ),
    );
}

/// Parent environment with a minimal PATH so `sh`, `env` and `sleep` resolve
pub fn parent_env(extra: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut env = vec![("PATH".to_string(), "/usr/bin:/bin".to_string())];
    env.extend(extra.iter().map(|(k, v)| (k.to_string(), v.to_string())));
    env
}

/// Read a `KEY=value` line back from an env dump
pub fn dumped_var(env_dump: &Path, key: &str) -> Option<String> {
    let content = fs::read_to_string(env_dump).ok()?;
    let prefix = format!("{}=", key);
    content
        .lines()
        .find_map(|line| line.strip_prefix(&prefix).map(str::to_string))
}
