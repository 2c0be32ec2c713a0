//! TOML file secret store.
//!
//! Every secret is stored with its creation and last-update time:
//!
//! ```toml
//! [secrets."db/password"]
//! value = "hunter2"
//! created_at = "2025-01-09T10:00:00Z"
//! updated_at = "2025-01-09T10:00:00Z"
//! ```
//!
//! Each change is written to a temporary file beside the store, which then
//! replaces it. On Unix both are only readable by their owner. A change is
//! kept in memory only once it is on disk.

use std::{
    collections::BTreeMap,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::{
    error::StoreError,
    menu::Page,
    store::{page_after, SecretStore, StoreResult},
};

/// Owner read/write only.
#[cfg(unix)]
const FILE_MODE: u32 = 0o600;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretRecord {
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SecretFile {
    #[serde(default)]
    secrets: BTreeMap<String, SecretRecord>,
}

/// Secrets persisted in a TOML file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    secrets: BTreeMap<String, SecretRecord>,
    page_size: usize,
}

fn backend_error(path: &Path, err: impl std::fmt::Display) -> StoreError {
    StoreError::Backend(format!("{}: {err}", path.display()))
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store; it is
    /// created on the first change.
    pub fn open(path: impl Into<PathBuf>, page_size: usize) -> StoreResult<Self> {
        let path = path.into();
        let secrets = match fs::read_to_string(&path) {
            Ok(content) => {
                toml::from_str::<SecretFile>(&content)
                    .map_err(|e| backend_error(&path, e))?
                    .secrets
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(backend_error(&path, err)),
        };

        info!("opened file store {} ({} secrets)", path.display(), secrets.len());
        Ok(Self {
            path,
            secrets,
            page_size,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full record for `key`, timestamps included.
    pub fn record(&self, key: &str) -> Option<&SecretRecord> {
        self.secrets.get(key)
    }

    /// Persist `secrets` and adopt them as the current state.
    fn commit(&mut self, secrets: BTreeMap<String, SecretRecord>) -> StoreResult<()> {
        let file = SecretFile { secrets };
        let content = toml::to_string_pretty(&file).map_err(|e| backend_error(&self.path, e))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| backend_error(dir, e))?;
        write_private(dir, &self.path, content.as_bytes())
            .map_err(|e| backend_error(&self.path, e))?;

        debug!("saved {} secrets to {}", file.secrets.len(), self.path.display());
        self.secrets = file.secrets;
        Ok(())
    }
}

/// Replace `path` with `content`, written to an owner-only file in `dir` first.
fn write_private(dir: &Path, path: &Path, content: &[u8]) -> io::Result<()> {
    let mut file = NamedTempFile::new_in(dir)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(fs::Permissions::from_mode(FILE_MODE))?;
    }

    file.write_all(content)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

impl SecretStore for FileStore {
    fn description(&self) -> String {
        format!(
            "File backend\n\nPasswords are stored unencrypted in {}",
            self.path.display()
        )
    }

    fn list_keys(&self) -> StoreResult<Page<'_, String>> {
        Ok(page_after(&self.secrets, None, self.page_size))
    }

    fn get(&self, key: &str) -> StoreResult<String> {
        self.secrets
            .get(key)
            .map(|record| record.value.clone())
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    fn create(&mut self, key: &str, value: &str) -> StoreResult<()> {
        if self.secrets.contains_key(key) {
            return Err(StoreError::AlreadyExists(key.to_string()));
        }
        let now = Utc::now();
        let mut secrets = self.secrets.clone();
        secrets.insert(
            key.to_string(),
            SecretRecord {
                value: value.to_string(),
                created_at: now,
                updated_at: now,
            },
        );
        self.commit(secrets)
    }

    fn update(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let mut secrets = self.secrets.clone();
        let record = secrets
            .get_mut(key)
            .ok_or_else(|| StoreError::NotFound(key.to_string()))?;
        value.clone_into(&mut record.value);
        record.updated_at = Utc::now();
        self.commit(secrets)
    }

    fn delete(&mut self, key: &str) -> StoreResult<()> {
        let mut secrets = self.secrets.clone();
        if secrets.remove(key).is_none() {
            return Err(StoreError::NotFound(key.to_string()));
        }
        self.commit(secrets)
    }
}
