//! # Test Harness
//!
//! Utilities for integration testing password-organizer without touching the
//! user's configuration or terminal.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;
use password_organizer::{
    menu::{MenuNavigator, Page},
    store::{MemoryStore, SecretStore, StoreResult},
    tui::ScriptedFrontend,
    StoreError,
};
use tempfile::TempDir;

/// Temporary home directory for running the `pwo` binary.
pub struct TestEnv {
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home_dir: TempDir::new().expect("Failed to create temp home dir"),
        }
    }

    /// Returns the path where the config would be stored.
    pub fn config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("password-organizer")
            .join("config")
    }

    /// Returns the default secrets file path.
    pub fn default_store_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("password-organizer")
            .join("secrets.toml")
    }

    pub fn write_config(&self, content: &str) {
        let path = self.config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create config directory");
        }
        fs::write(path, content).expect("Failed to write config");
    }

    /// Writes a secrets file holding `secrets` at `path`.
    pub fn write_secrets(&self, path: &Path, secrets: &[(&str, &str)]) {
        let mut content = String::new();
        for (key, value) in secrets {
            content.push_str(&format!(
                "[secrets.\"{key}\"]\nvalue = \"{value}\"\n\
                 created_at = \"2025-01-09T10:00:00Z\"\nupdated_at = \"2025-01-09T10:00:00Z\"\n\n"
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create store directory");
        }
        fs::write(path, content).expect("Failed to write secrets file");
    }

    /// A `pwo` command isolated in this environment.
    pub fn pwo(&self) -> Command {
        let mut cmd = Command::cargo_bin("pwo").unwrap();
        cmd.current_dir(self.home_dir.path());
        cmd.env("HOME", self.home_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd
    }
}

/// Memory store with failures injected per operation.
#[derive(Debug, Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub fail_list: Option<StoreError>,
    pub fail_get: Option<StoreError>,
    pub fail_delete: Option<StoreError>,
    pub delete_calls: usize,
}

impl FlakyStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }
}

impl SecretStore for FlakyStore {
    fn description(&self) -> String {
        self.inner.description()
    }

    fn list_keys(&self) -> StoreResult<Page<'_, String>> {
        match &self.fail_list {
            Some(err) => Err(err.clone()),
            None => self.inner.list_keys(),
        }
    }

    fn get(&self, key: &str) -> StoreResult<String> {
        match &self.fail_get {
            Some(err) => Err(err.clone()),
            None => self.inner.get(key),
        }
    }

    fn create(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.inner.create(key, value)
    }

    fn update(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.inner.update(key, value)
    }

    fn delete(&mut self, key: &str) -> StoreResult<()> {
        self.delete_calls += 1;
        match &self.fail_delete {
            Some(err) => Err(err.clone()),
            None => self.inner.delete(key),
        }
    }
}

/// Store holding `db` and `web`.
pub fn sample_store() -> FlakyStore {
    FlakyStore::new(MemoryStore::default().with_secrets([("db", "hunter2"), ("web", "letmein")]))
}

pub fn navigator<S: SecretStore>(
    store: S,
    frontend: ScriptedFrontend,
) -> MenuNavigator<S, ScriptedFrontend> {
    MenuNavigator::new(store, frontend)
}
