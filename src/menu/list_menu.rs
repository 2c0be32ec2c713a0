//! Selection menus decorated with Back and Exit entries.

use std::fmt::Debug;

use crate::{
    constants::{BACK_LABEL, QUIT_LABEL},
    error::{Error, Result},
    menu::{Choice, SelectionEngine},
    tui::{screens, Frontend},
};

/// Which navigation entries are appended below the menu's own choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOptions {
    /// Offer a "Back..." entry
    pub back: bool,
    /// Label of the quit entry, `None` for no quit entry
    pub quit: Option<String>,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self::root()
    }
}

impl MenuOptions {
    /// Top-level menu: nowhere to go back to.
    pub fn root() -> Self {
        Self {
            back: false,
            quit: Some(QUIT_LABEL.to_string()),
        }
    }

    /// Sub-menu: can go back to its parent.
    pub fn nested() -> Self {
        Self {
            back: true,
            quit: Some(QUIT_LABEL.to_string()),
        }
    }

    #[must_use]
    pub fn without_quit(mut self) -> Self {
        self.quit = None;
        self
    }
}

/// What the user picked in a decorated menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    Item(T),
    Back,
}

#[derive(Debug, Clone, PartialEq)]
enum MenuEntry<T> {
    Item(T),
    Back,
    Quit,
}

/// Show `choices` followed by the navigation entries from `options`.
///
/// Back and Exit each get a separator above them. Picking Exit, or cancelling
/// the session, fails with [`Error::Cancelled`].
pub fn list_choice_menu<T: Clone + PartialEq + Debug>(
    frontend: &mut impl Frontend,
    prompt: &str,
    header: Option<&str>,
    choices: Vec<Choice<T>>,
    options: &MenuOptions,
    default: Option<&T>,
) -> Result<Selection<T>> {
    let mut entries: Vec<Choice<MenuEntry<T>>> =
        choices.into_iter().map(|c| c.map(MenuEntry::Item)).collect();
    if options.back {
        entries.push(Choice::separator());
        entries.push(Choice::new(BACK_LABEL, MenuEntry::Back));
    }
    if let Some(quit) = &options.quit {
        entries.push(Choice::separator());
        entries.push(Choice::new(quit.as_str(), MenuEntry::Quit));
    }

    let default = default.cloned().map(MenuEntry::Item);
    let engine = SelectionEngine::new(entries, default.as_ref())?;

    match screens::select(frontend, prompt, header, engine)? {
        MenuEntry::Item(value) => Ok(Selection::Item(value)),
        MenuEntry::Back => Ok(Selection::Back),
        MenuEntry::Quit => Err(Error::Cancelled),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ConstructionError, menu::normalize, tui::ScriptedFrontend};

    fn fruits() -> Vec<Choice<String>> {
        normalize(["apple", "banana"])
    }

    #[test]
    fn test_item_is_returned() {
        let mut frontend = ScriptedFrontend::new().down().enter();
        let selection =
            list_choice_menu(&mut frontend, "Pick", None, fruits(), &MenuOptions::root(), None)
                .unwrap();
        assert_eq!(selection, Selection::Item("banana".to_string()));
    }

    #[test]
    fn test_back_entry() {
        // apple, banana, sep, Back..., sep, Exit
        let mut frontend = ScriptedFrontend::new().down().down().enter();
        let selection =
            list_choice_menu(&mut frontend, "Pick", None, fruits(), &MenuOptions::nested(), None)
                .unwrap();
        assert_eq!(selection, Selection::Back);
    }

    #[test]
    fn test_exit_entry_cancels() {
        let mut frontend = ScriptedFrontend::new().text("Ex").enter();
        let err =
            list_choice_menu(&mut frontend, "Pick", None, fruits(), &MenuOptions::nested(), None)
                .unwrap_err();
        assert!(err.is_cancelled());
    }

    #[test]
    fn test_escape_cancels() {
        let mut frontend = ScriptedFrontend::new().esc();
        let err = list_choice_menu(&mut frontend, "Pick", None, fruits(), &MenuOptions::root(), None)
            .unwrap_err();
        assert!(err.is_cancelled());
    }

    #[test]
    fn test_default_is_preselected() {
        let mut frontend = ScriptedFrontend::new().enter();
        let default = "banana".to_string();
        let selection = list_choice_menu(
            &mut frontend,
            "Pick",
            None,
            fruits(),
            &MenuOptions::root(),
            Some(&default),
        )
        .unwrap();
        assert_eq!(selection, Selection::Item("banana".to_string()));
    }

    #[test]
    fn test_navigation_entries_are_rendered() {
        let mut frontend = ScriptedFrontend::new().enter();
        list_choice_menu(&mut frontend, "Pick", None, fruits(), &MenuOptions::nested(), None)
            .unwrap();
        let screen = frontend.last_screen().unwrap();
        assert!(screen.contains("Back..."));
        assert!(screen.contains("Exit"));
        assert!(screen.contains("---------------"));
    }

    #[test]
    fn test_empty_menu_without_navigation_is_rejected() {
        let mut frontend = ScriptedFrontend::new();
        let options = MenuOptions::root().without_quit();
        let err = list_choice_menu::<String>(&mut frontend, "Pick", None, Vec::new(), &options, None)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Construction(ConstructionError::NoChoices)
        ));
        assert_eq!(frontend.sessions(), 0);
    }
}
