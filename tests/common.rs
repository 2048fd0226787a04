#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wl() -> Command {
    cargo_bin_cmd!("waterlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_waterlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a unique settings file path inside the system temp dir
pub fn setup_test_settings(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_waterlog_settings.yml", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str, settings_path: &str) {
    // init DB (creates tables)
    wl().args(["--db", db_path, "--settings", settings_path, "--test", "init"])
        .assert()
        .success();

    wl().args([
        "--db",
        db_path,
        "--settings",
        settings_path,
        "add",
        "500",
        "--date",
        "2024-01-01",
        "--time",
        "09:00",
    ])
    .assert()
    .success();

    wl().args([
        "--db",
        db_path,
        "--settings",
        settings_path,
        "add",
        "300",
        "--date",
        "2024-01-01",
        "--time",
        "12:30",
    ])
    .assert()
    .success();
}
