//! # Menu
//!
//! The selection-menu core: choice normalization, the single-select engine,
//! Back/Exit decoration, page chaining and the navigation stack.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod choice;
pub mod engine;
pub mod list_menu;
pub mod navigator;
pub mod pagination;

pub use self::{
    choice::{normalize, Choice, ChoiceRecord},
    engine::{visible_indices, MenuEvent, MenuView, Outcome, Phase, SelectionEngine, ViewLine},
    list_menu::{list_choice_menu, MenuOptions, Selection},
    navigator::{ItemAction, MenuFrame, MenuNavigator, RootAction},
    pagination::{select_paginated, Continuation, Page},
};
