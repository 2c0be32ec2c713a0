//! # Secret Store
//!
//! Key/value backends holding the passwords the menu works on. A key is the
//! password's name; the value is the password itself.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod file;
pub mod memory;

use std::{collections::BTreeMap, ops::Bound};

use crate::{error::StoreError, menu::Page};

pub use self::{file::FileStore, memory::MemoryStore};

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Operations the menu needs from a backend.
pub trait SecretStore {
    /// Text shown above the main menu.
    fn description(&self) -> String;

    /// First page of keys. Later pages come from the page's continuation.
    fn list_keys(&self) -> StoreResult<Page<'_, String>>;

    /// Fails with [`StoreError::NotFound`] for an unknown key.
    fn get(&self, key: &str) -> StoreResult<String>;

    /// Fails with [`StoreError::AlreadyExists`] if the key is taken.
    fn create(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Fails with [`StoreError::NotFound`] for an unknown key.
    fn update(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Fails with [`StoreError::NotFound`] for an unknown key.
    fn delete(&mut self, key: &str) -> StoreResult<()>;
}

/// Page of at most `size` keys following `after`, in key order.
///
/// The continuation resumes after the last key handed out, like a
/// `NextToken`, so it sees the map as it is when invoked.
pub(crate) fn page_after<'a, V>(
    entries: &'a BTreeMap<String, V>,
    after: Option<&str>,
    size: usize,
) -> Page<'a, String> {
    let size = size.max(1);
    let lower = after.map_or(Bound::Unbounded, Bound::Excluded);
    let mut keys = entries
        .range::<str, _>((lower, Bound::Unbounded))
        .map(|(key, _)| key.clone());

    let items: Vec<String> = keys.by_ref().take(size).collect();
    match (keys.next(), items.last().cloned()) {
        (Some(_), Some(last)) => Page::with_next(items, move || {
            Ok(page_after(entries, Some(&last), size))
        }),
        _ => Page::last(items),
    }
}
