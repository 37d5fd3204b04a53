//! Runs the `snippets` binary in a scratch home directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Sandbox {
    home: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            home: TempDir::new().unwrap(),
        }
    }

    fn db_path(&self) -> PathBuf {
        self.home.path().join("store.db")
    }

    fn cmd(&self) -> Command {
        let home = self.home.path();
        let mut cmd = Command::cargo_bin("snippets").unwrap();
        cmd.env("HOME", home)
            .env("XDG_CONFIG_HOME", home.join("config"))
            .env("XDG_DATA_HOME", home.join("data"))
            .env("SNIPPETS_DB", self.db_path())
            .env_remove("RUST_LOG");
        cmd
    }

    fn log(&self) -> String {
        let path = find_file(self.home.path(), "snippets.log").expect("log file written");
        fs::read_to_string(path).unwrap()
    }
}

fn find_file(dir: &Path, name: &str) -> Option<PathBuf> {
    for entry in fs::read_dir(dir).ok()?.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if let Some(found) = find_file(&path, name) {
                return Some(found);
            }
        } else if path.file_name().is_some_and(|n| n == name) {
            return Some(path);
        }
    }
    None
}

#[test]
fn put_and_get_exit_zero_and_log_only_to_file() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["put", "greeting", "hello world"])
        .assert()
        .success()
        .stdout("Stored \"hello world\" as \"greeting\"\n")
        .stderr("");

    sandbox
        .cmd()
        .args(["get", "greeting"])
        .assert()
        .success()
        .stdout("Retrieved snippet: \"hello world\"\n")
        .stderr("");

    let log = sandbox.log();
    assert!(log.contains("Storing snippet"));
    assert!(log.contains("Retrieving snippet"));
}

#[test]
fn not_found_exits_three() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["get", "missing"])
        .assert()
        .code(3)
        .stdout("Retrieved snippet: 404: Snippet Not Found\n");

    sandbox
        .cmd()
        .args(["search", "nope"])
        .assert()
        .code(3)
        .stdout("404: string not found in any message\n");
}

#[test]
fn empty_catalog_is_success() {
    let sandbox = Sandbox::new();

    sandbox.cmd().arg("catalog").assert().success().stdout("[]\n");
}

#[test]
fn usage_errors_exit_two_without_touching_storage() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .arg("get")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("Usage"));

    sandbox.cmd().args(["delete", "x"]).assert().code(2);

    assert!(!sandbox.db_path().exists());
    assert!(fs::read_dir(sandbox.home.path()).unwrap().next().is_none());
}

#[test]
fn unreachable_database_exits_one() {
    let sandbox = Sandbox::new();
    let missing = sandbox.home.path().join("no").join("such").join("store.db");

    sandbox
        .cmd()
        .env("SNIPPETS_DB", &missing)
        .arg("catalog")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Failed to open database"));
}
