//! Binary Tests
//!
//! Runs the built `start-server` against fake Node.js / npm scripts.
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_start-server");

fn write_script(path: &Path, body: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

/// Fake `node` plus an `npm` that leaves a marker and exits with `code`
fn install(dir: &Path, code: i32) -> (PathBuf, PathBuf) {
    let bin = dir.join("node-20/bin");
    let marker = dir.join("npm-ran");
    write_script(&bin.join("node"), "echo v20.11.1");
    write_script(
        &bin.join("npm"),
        &format!("touch '{}'\nexit {}", marker.display(), code),
    );
    (bin, marker)
}

fn start_server(dir: &Path, args: &[&str], extra_env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(BIN);
    cmd.args(args)
        .current_dir(dir)
        .env_clear()
        .env("PATH", "/usr/bin:/bin")
        .env("HOME", dir)
        .env("NO_COLOR", "1");
    for (k, v) in extra_env {
        cmd.env(k, v);
    }
    cmd.output().unwrap()
}

#[test]
fn test_dry_run_prints_command_without_spawning() {
    let dir = TempDir::new().unwrap();
    let (bin, marker) = install(dir.path(), 0);
    let node = bin.join("node").display().to_string();
    let store = dir.path().join("no-store").display().to_string();

    let output = start_server(
        dir.path(),
        &["--node", &node, "--store-root", &store, "--dry-run"],
        &[],
    );
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("npm run dev"), "stdout: {}", stdout);
    assert!(stdout.contains("postgresql://localhost:5432/circles"));
    assert!(stdout.contains(&format!("{}:/usr/bin:/bin", bin.display())));
    assert!(!marker.exists());
}

#[test]
fn test_dry_run_keeps_database_url() {
    let dir = TempDir::new().unwrap();
    let (bin, _) = install(dir.path(), 0);
    let node = bin.join("node").display().to_string();
    let store = dir.path().join("no-store").display().to_string();

    let output = start_server(
        dir.path(),
        &["--node", &node, "--store-root", &store, "--dry-run"],
        &[("DATABASE_URL", "postgres://db.internal:6543/circles_dev")],
    );
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("postgres://db.internal:6543/circles_dev"));
    assert!(!stdout.contains("postgresql://localhost:5432/circles"));
}

#[test]
fn test_child_exit_status_becomes_launcher_status() {
    let dir = TempDir::new().unwrap();
    let (bin, marker) = install(dir.path(), 4);
    let node = bin.join("node").display().to_string();
    let store = dir.path().join("no-store").display().to_string();

    let output = start_server(dir.path(), &["--node", &node, "--store-root", &store], &[]);

    assert_eq!(output.status.code(), Some(4));
    assert!(marker.exists());
}

#[test]
fn test_config_error_is_reported() {
    let dir = TempDir::new().unwrap();

    let output = start_server(dir.path(), &["--script", " "], &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr.contains("npm script name must not be empty"),
        "stderr: {}",
        stderr
    );
}
