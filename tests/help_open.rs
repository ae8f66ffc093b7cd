//! `Resource::open` runs the platform launcher to completion.
//!
//! Lives in its own test binary because it rewrites PATH for the process.

#![cfg(target_os = "linux")]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use talib_facade::HelpCatalog;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn install_viewer(dir: &Path, body: &str) {
    let script = dir.join("xdg-open");
    fs::write(&script, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    let path = std::env::var("PATH").unwrap_or_default();
    std::env::set_var("PATH", format!("{}:{path}", dir.display()));
}

#[test]
fn test_open_waits_for_viewer() {
    let dir = scratch_dir("talib-facade-open");
    let marker = dir.join("opened");
    install_viewer(
        &dir,
        &format!("sleep 2\nprintf '%s' \"$1\" > '{}'", marker.display()),
    );

    let resource = HelpCatalog::bundled().unwrap().resource("sma").unwrap();
    let started = Instant::now();
    let returned = resource.open();

    assert!(started.elapsed() >= Duration::from_secs(2));
    assert_eq!(returned.key(), "sma");
    let opened = fs::read_to_string(&marker).expect("viewer finished before open returned");
    assert_eq!(opened, resource.url());

    fs::remove_dir_all(&dir).unwrap();
}
