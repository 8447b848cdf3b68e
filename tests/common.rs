#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dl() -> Command {
    cargo_bin_cmd!("didledger")
}

/// Command with a private (non-existent) config file, so tests never touch
/// the user's ~/.didledger.
pub fn dl_isolated(name: &str) -> Command {
    let mut cmd = dl();
    cmd.args(["--config", &temp_path(&format!("{name}_cfg"), "conf")]);
    cmd
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("didledger_{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a CSV fixture and return its path.
pub fn write_csv(name: &str, content: &str) -> String {
    let p = temp_path(name, "csv");
    fs::write(&p, content).expect("write fixture");
    p
}

pub const HEADER: &str = "Date,City,KM,Working Payment,Extra Payment,Total Payment";

/// Small ledger with one malformed payment and one negative KM.
pub fn sample_csv() -> String {
    format!(
        "{HEADER}\n\
         1,Milano,10,100,20,0\n\
         2,Torino,-5,abc,5,0\n\
         3,,0,12.5,0,0\n"
    )
}
