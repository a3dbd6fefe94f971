#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rcampaign::core::persistence;
use rcampaign::db::pool::DbPool;
use rcampaign::models::{AppState, Event};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rti() -> Command {
    cargo_bin_cmd!("rcampaign")
}

/// Create a unique test store path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcampaign.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a fresh store in test mode
pub fn init_db(db_path: &str) {
    rti()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Run a command against the store and expect success
pub fn run_ok(db_path: &str, args: &[&str]) {
    let mut full = vec!["--db", db_path];
    full.extend_from_slice(args);
    rti().args(full).assert().success();
}

/// Read back the persisted campaign state through the library
pub fn load_state(db_path: &str) -> AppState {
    let pool = DbPool::new(db_path).expect("open store");
    persistence::load_or_initial(&pool)
}

/// Event with the given title in the persisted state
pub fn event_by_title(db_path: &str, title: &str) -> Event {
    load_state(db_path)
        .events
        .iter()
        .find(|e| e.title == title)
        .cloned()
        .unwrap_or_else(|| panic!("event '{title}' not found"))
}

/// Store initialized with a small timeline:
/// - "Met the baron" at 0h, untimed
/// - "Accepted the contract" at 4h, 48h countdown
/// - clock at 10h
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    run_ok(db_path, &["add", "Met the baron", "--desc", "He wants the amulet"]);
    run_ok(db_path, &["advance", "--rest", "watch"]);
    run_ok(db_path, &["add", "Accepted the contract", "--remaining", "48"]);
    run_ok(db_path, &["advance", "6"]);
}
