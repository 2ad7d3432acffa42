#![allow(clippy::unwrap_used)]
#![cfg(unix)]
// Integration tests for `HostapdCli` against a stand-in shell script.

use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use apdash_api::{Error, HostapdCli};

/// Write an executable script that mimics `hostapd_cli` for the tests.
fn fake_cli(dir: &tempfile::TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("hostapd_cli");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

#[tokio::test]
async fn test_passes_ctrl_dir_and_command() {
    let dir = tempfile::tempdir().unwrap();
    let program = fake_cli(&dir, r#"echo "$@""#);
    let cli = HostapdCli::new(program, "/run/hostapd");

    let out = cli.sta("aa:bb:cc:00:00:01").await.unwrap();
    assert_eq!(out.trim(), "-p /run/hostapd sta aa:bb:cc:00:00:01");

    let out = cli.list_sta().await.unwrap();
    assert_eq!(out.trim(), "-p /run/hostapd list_sta");

    let out = cli.deauthenticate("aa:bb:cc:00:00:01").await.unwrap();
    assert_eq!(out.trim(), "-p /run/hostapd deauthenticate aa:bb:cc:00:00:01");
}

#[tokio::test]
async fn test_nonzero_exit_is_command_failed() {
    let dir = tempfile::tempdir().unwrap();
    let program = fake_cli(&dir, "echo 'no socket' >&2\nexit 3");
    let cli = HostapdCli::new(program, "/run/hostapd");

    let result = cli.list_sta().await;
    match result {
        Err(Error::CommandFailed { stderr, args, .. }) => {
            assert_eq!(stderr, "no socket");
            assert_eq!(args, "list_sta");
        }
        other => panic!("expected CommandFailed, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_program_is_spawn_error() {
    let cli = HostapdCli::new("/nonexistent/hostapd_cli", "/run/hostapd");
    let result = cli.list_sta().await;
    assert!(
        matches!(result, Err(Error::Spawn { .. })),
        "expected Spawn error, got: {result:?}"
    );
}
