//! In-process secret store.

use std::collections::BTreeMap;

use log::debug;

use crate::{
    constants::DEFAULT_PAGE_SIZE,
    error::StoreError,
    menu::Page,
    store::{page_after, SecretStore, StoreResult},
};

/// Secrets kept in memory and dropped with the store.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    secrets: BTreeMap<String, String>,
    page_size: usize,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl MemoryStore {
    pub fn new(page_size: usize) -> Self {
        Self {
            secrets: BTreeMap::new(),
            page_size,
        }
    }

    /// Seed the store with `(key, value)` pairs.
    #[must_use]
    pub fn with_secrets<I, K, V>(mut self, secrets: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.secrets
            .extend(secrets.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.secrets.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }
}

impl SecretStore for MemoryStore {
    fn description(&self) -> String {
        "In-memory backend\n\nPasswords are kept in this process only and are lost on exit."
            .to_string()
    }

    fn list_keys(&self) -> StoreResult<Page<'_, String>> {
        Ok(page_after(&self.secrets, None, self.page_size))
    }

    fn get(&self, key: &str) -> StoreResult<String> {
        self.secrets
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    fn create(&mut self, key: &str, value: &str) -> StoreResult<()> {
        if self.secrets.contains_key(key) {
            return Err(StoreError::AlreadyExists(key.to_string()));
        }
        debug!("memory store: create {key}");
        self.secrets.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn update(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let slot = self
            .secrets
            .get_mut(key)
            .ok_or_else(|| StoreError::NotFound(key.to_string()))?;
        debug!("memory store: update {key}");
        value.clone_into(slot);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> StoreResult<()> {
        debug!("memory store: delete {key}");
        self.secrets
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crud() {
        let mut store = MemoryStore::default();
        store.create("db", "hunter2").unwrap();
        assert_eq!(store.get("db").unwrap(), "hunter2");

        store.update("db", "correct horse").unwrap();
        assert_eq!(store.get("db").unwrap(), "correct horse");

        store.delete("db").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_error_cases() {
        let mut store = MemoryStore::default().with_secrets([("db", "x")]);
        assert_eq!(
            store.create("db", "y"),
            Err(StoreError::AlreadyExists("db".to_string()))
        );
        assert_eq!(
            store.get("web"),
            Err(StoreError::NotFound("web".to_string()))
        );
        assert_eq!(
            store.update("web", "y"),
            Err(StoreError::NotFound("web".to_string()))
        );
        assert_eq!(
            store.delete("web"),
            Err(StoreError::NotFound("web".to_string()))
        );
        assert_eq!(store.get("db").unwrap(), "x");
    }

    #[test]
    fn test_keys_are_paged_in_order() {
        let store = MemoryStore::new(2).with_secrets([("c", "3"), ("a", "1"), ("b", "2")]);
        let page = store.list_keys().unwrap();
        assert_eq!(page.items, vec!["a", "b"]);
        assert_eq!(page.collect_all().unwrap(), vec!["a", "b", "c"]);
    }
}
