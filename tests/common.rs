#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rta() -> Command {
    cargo_bin_cmd!("rtally")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtally.sqlite", name));
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

/// Initialize an empty DB (schema + migrations) at the given path
pub fn init_test_db(db_path: &str) {
    rta()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add one session via the CLI
pub fn add_session(db_path: &str, date: &str, location: &str, stake: &str, hands: &str, net: &str) {
    rta()
        .args([
            "--db", db_path, "--test", "add", "--date", date, "--location", location, "--stake",
            stake, "--hands", hands, "--net", net,
        ])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    init_test_db(db_path);

    add_session(db_path, "2025-09-01", "Club", "30/10", "4", "500");
    add_session(db_path, "2025-09-15", "Club", "30/10", "6", "-150");
}

/// Open the store directly through the library, for tests that bypass the CLI
pub fn open_store(db_path: &str) -> rtally::db::store::SessionStore {
    rtally::db::store::SessionStore::open(db_path).expect("open store")
}
