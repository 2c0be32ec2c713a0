//! # password-organizer
//!
//! An interactive terminal menu for organizing passwords kept in a secret store.
//!
//! The core is a single-selection menu engine with incremental search,
//! disabled entries and separators, chained pagination, and a navigation
//! stack with Back and Exit semantics.
//!
//! ## Features
//!
//! - **Incremental Search**: Typing narrows a menu to entries starting with the input
//! - **Pagination**: Long key lists are fetched and shown one page at a time
//! - **Navigation Stack**: Back returns one level; Exit unwinds the whole menu
//! - **Pluggable Stores**: Anything implementing [`store::SecretStore`]
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod menu;
pub mod store;
pub mod tui;
pub mod ui;

pub use config::{set_home_override, Config};
pub use error::{ConstructionError, Error, Result, StoreError};
