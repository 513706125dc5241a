#![allow(dead_code)]
use assert_cmd::{cargo_bin_cmd, Command};
use std::env;
use std::path::PathBuf;

pub fn tc() -> Command {
    cargo_bin_cmd!("timeclock")
}

/// Create a unique record-file path inside the system temp dir and remove any
/// existing file
pub fn setup_data_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timeclock.json", name));
    let data_path = path.to_string_lossy().to_string();
    std::fs::remove_file(&data_path).ok();
    data_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    std::fs::remove_file(&p).ok();
    p
}

/// Add a complete session via the CLI
pub fn add_session(data_path: &str, date: &str, start: &str, end: &str) {
    tc()
        .args([
            "--data", data_path, "--test", "add", date, "--in", start, "--out", end,
        ])
        .assert()
        .success();
}
