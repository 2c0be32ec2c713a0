//! Chaining of selection sessions over paged data sources.
//!
//! A data source hands out one [`Page`] at a time. When a page carries a
//! continuation, the menu offers a "Next Page" entry; picking it fetches the
//! next page and starts a fresh session on it. Only the current page is kept.

use std::fmt::Debug;

use log::debug;

use crate::{
    constants::NEXT_PAGE_LABEL,
    error::{Result, StoreError},
    menu::{list_choice_menu, Choice, MenuOptions, Selection},
    tui::Frontend,
};

/// Fetches the page following the one it was handed out with.
pub type Continuation<'a, T> = Box<dyn FnOnce() -> std::result::Result<Page<'a, T>, StoreError> + 'a>;

/// One page of items plus an optional way to fetch the next one.
pub struct Page<'a, T> {
    pub items: Vec<T>,
    pub next: Option<Continuation<'a, T>>,
}

impl<'a, T> Page<'a, T> {
    /// A page with nothing after it.
    pub fn last(items: Vec<T>) -> Self {
        Self { items, next: None }
    }

    /// A page followed by whatever `next` fetches.
    pub fn with_next<N>(items: Vec<T>, next: N) -> Self
    where
        N: FnOnce() -> std::result::Result<Page<'a, T>, StoreError> + 'a,
    {
        Self {
            items,
            next: Some(Box::new(next)),
        }
    }

    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Collect every remaining item by following continuations.
    pub fn collect_all(self) -> std::result::Result<Vec<T>, StoreError> {
        let mut items = self.items;
        let mut next = self.next;
        while let Some(fetch) = next {
            let page = fetch()?;
            items.extend(page.items);
            next = page.next;
        }
        Ok(items)
    }
}

impl<T: Debug> Debug for Page<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("items", &self.items)
            .field("has_next", &self.has_next())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
enum PageEntry<T> {
    Item(T),
    NextPage,
}

/// Let the user pick an item from a paged source.
///
/// Each page is its own selection session. Back and Exit behave as in
/// [`list_choice_menu`]; a failing continuation surfaces as an error.
pub fn select_paginated<'a, T>(
    frontend: &mut impl Frontend,
    prompt: &str,
    header: Option<&str>,
    first: Page<'a, T>,
    options: &MenuOptions,
) -> Result<Selection<T>>
where
    T: Clone + PartialEq + Debug,
    Choice<T>: From<T>,
{
    let mut page = first;
    let mut number = 1;

    loop {
        let Page { items, next } = page;
        let mut choices: Vec<Choice<PageEntry<T>>> = items
            .into_iter()
            .map(|item| Choice::from(item).map(PageEntry::Item))
            .collect();
        if next.is_some() {
            choices.push(Choice::separator());
            choices.push(Choice::new(NEXT_PAGE_LABEL, PageEntry::NextPage));
        }

        let selection = list_choice_menu(frontend, prompt, header, choices, options, None)?;
        let fetch = match (selection, next) {
            (Selection::Item(PageEntry::Item(value)), _) => return Ok(Selection::Item(value)),
            (Selection::Item(PageEntry::NextPage), Some(fetch)) => fetch,
            // Next Page is only offered with a continuation
            (Selection::Back | Selection::Item(PageEntry::NextPage), _) => {
                return Ok(Selection::Back)
            }
        };
        number += 1;
        debug!("fetching page {number}");
        page = fetch()?;
    }
}
