//! # CLI Tests
//!
//! Runs the `pwo` binary against temporary home directories.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use std::fs;

use common::TestEnv;
use predicates::prelude::*;

// =============================================================================
// List
// =============================================================================

#[test]
fn test_list_without_config_is_empty() {
    let env = TestEnv::new();
    env.pwo()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No passwords stored."));
}

#[test]
fn test_list_reads_default_store() {
    let env = TestEnv::new();
    env.write_secrets(&env.default_store_path(), &[("mail", "pw1")]);

    env.pwo()
        .arg("list")
        .assert()
        .success()
        .stdout("mail\n");
}

#[test]
fn test_list_store_flag_prints_keys_only() {
    let env = TestEnv::new();
    let store = env.home_dir.path().join("team.toml");
    env.write_secrets(&store, &[("web", "letmein"), ("db", "hunter2")]);

    env.pwo()
        .args(["list", "--store"])
        .arg(&store)
        .assert()
        .success()
        .stdout("db\nweb\n")
        .stdout(predicate::str::contains("hunter2").not());
}

#[test]
fn test_list_follows_every_page() {
    let env = TestEnv::new();
    let store = env.home_dir.path().join("team.toml");
    env.write_secrets(&store, &[("a", "1"), ("b", "2"), ("c", "3")]);

    env.pwo()
        .args(["--page-size", "1", "list", "--store"])
        .arg(&store)
        .assert()
        .success()
        .stdout("a\nb\nc\n");
}

#[test]
fn test_zero_page_size_is_rejected() {
    let env = TestEnv::new();
    env.pwo()
        .args(["list", "--page-size", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("page size must be at least 1"));
}

#[test]
fn test_list_rejects_memory_backend() {
    let env = TestEnv::new();
    env.write_config("backend = \"memory\"\n");

    env.pwo()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("memory backend starts empty"));

    // --store switches back to the file backend
    let store = env.home_dir.path().join("team.toml");
    env.write_secrets(&store, &[("db", "hunter2")]);
    env.pwo()
        .args(["list", "--store"])
        .arg(&store)
        .assert()
        .success()
        .stdout("db\n");
}

// =============================================================================
// Config
// =============================================================================

#[test]
fn test_malformed_config_fails() {
    let env = TestEnv::new();
    env.write_config("page_size = \"many\"\n");

    env.pwo()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn test_config_page_size_zero_fails() {
    let env = TestEnv::new();
    env.write_config("page_size = 0\n");

    env.pwo()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("page_size must be at least 1"));
}

#[test]
fn test_malformed_store_fails() {
    let env = TestEnv::new();
    let store = env.home_dir.path().join("broken.toml");
    fs::write(&store, "secrets = 42\n").unwrap();

    env.pwo()
        .args(["list", "--store"])
        .arg(&store)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open secrets file"));
}

// =============================================================================
// Menu
// =============================================================================

#[test]
fn test_menu_requires_terminal() {
    let env = TestEnv::new();
    env.pwo()
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}

// =============================================================================
// Setup / Completions
// =============================================================================

#[test]
fn test_completions_name_the_binary() {
    let env = TestEnv::new();
    env.pwo()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pwo"));
}

#[test]
fn test_setup_creates_config_and_completions() {
    let env = TestEnv::new();
    env.pwo().args(["setup", "--shell", "fish"]).assert().success();

    assert!(env.config_path().exists());
    let completions = env
        .home_dir
        .path()
        .join(".config/fish/completions/pwo.fish");
    assert!(completions.exists());

    // The generated config parses and lists the (empty) default store
    env.pwo()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No passwords stored."));
}

#[test]
fn test_setup_keeps_existing_config() {
    let env = TestEnv::new();
    env.write_config("page_size = 3\n");

    env.pwo()
        .args(["setup", "--shell", "elvish"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Config already exists"))
        .stderr(predicate::str::contains("Manual setup required for elvish"));

    assert_eq!(
        fs::read_to_string(env.config_path()).unwrap(),
        "page_size = 3\n"
    );
}
