//! Single-selection state machine with incremental search.
//!
//! The engine is terminal-agnostic: it consumes [`MenuEvent`]s one at a time
//! and exposes a [`MenuView`] projection that is recomputed from scratch after
//! every transition.

use std::fmt::Debug;

use crate::{
    constants::SEPARATOR_RULE,
    error::ConstructionError,
    menu::choice::Choice,
};

/// Input consumed by a selection session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    NavigateNext,
    NavigatePrevious,
    PrintableChar(char),
    Backspace,
    Confirm,
    Cancel,
}

/// Lifecycle of a selection session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No search buffer.
    Browsing,
    /// A search buffer is present (possibly matching nothing).
    Searching,
    /// Terminal: a value was confirmed.
    Answered,
    /// Terminal: the user cancelled.
    Cancelled,
}

impl Phase {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Answered | Self::Cancelled)
    }
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Session continues.
    Pending,
    Answered(T),
    Cancelled,
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLine {
    pub text: String,
    pub highlighted: bool,
    pub disabled: bool,
    pub separator: bool,
}

/// Render projection of the engine state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuView {
    pub lines: Vec<ViewLine>,
    /// The active search buffer, if any.
    pub search_echo: Option<String>,
}

/// Indices of the non-separator choices matching `search`.
///
/// With no search every non-separator entry is visible. Disabled entries stay
/// visible; they are skipped by navigation, not hidden.
pub fn visible_indices<T>(choices: &[Choice<T>], search: Option<&str>) -> Vec<usize> {
    choices
        .iter()
        .enumerate()
        .filter(|(_, choice)| !choice.is_separator())
        .filter(|(_, choice)| search.map_or(true, |s| choice.matches(s)))
        .map(|(i, _)| i)
        .collect()
}

/// Stateful single-select controller.
#[derive(Debug, Clone)]
pub struct SelectionEngine<T> {
    choices: Vec<Choice<T>>,
    search: Option<String>,
    /// Indices into `choices`, recomputed on every search change
    visible: Vec<usize>,
    /// Index into `choices`
    selected: Option<usize>,
    phase: Phase,
    answer: Option<T>,
    /// Selection (before, after) for each appended search character
    relocations: Vec<(Option<usize>, Option<usize>)>,
}

impl<T: Clone + PartialEq + Debug> SelectionEngine<T> {
    /// Build a session over `choices`.
    ///
    /// With no default the first enabled entry is selected. A default that
    /// lands on a disabled entry moves forward (wrapping) to the nearest
    /// enabled one. A default matching no entry is rejected.
    pub fn new(choices: Vec<Choice<T>>, default: Option<&T>) -> Result<Self, ConstructionError> {
        if choices.iter().all(Choice::is_separator) {
            return Err(ConstructionError::NoChoices);
        }

        let visible = visible_indices(&choices, None);
        let start = match default {
            Some(wanted) => choices
                .iter()
                .position(|c| c.value() == Some(wanted))
                .ok_or_else(|| ConstructionError::UnknownDefault(format!("{wanted:?}")))?,
            None => 0,
        };

        let mut engine = Self {
            choices,
            search: None,
            visible,
            selected: None,
            phase: Phase::Browsing,
            answer: None,
            relocations: Vec::new(),
        };
        engine.selected = engine.forward_from(start);
        Ok(engine)
    }

    /// Apply one event and report whether the session ended.
    ///
    /// Events arriving after a terminal phase are ignored.
    pub fn apply(&mut self, event: MenuEvent) -> Outcome<T> {
        if self.phase.is_terminal() {
            return Outcome::Pending;
        }

        match event {
            MenuEvent::NavigateNext => self.step(true),
            MenuEvent::NavigatePrevious => self.step(false),
            MenuEvent::PrintableChar(c) => self.push_search(c),
            MenuEvent::Backspace => self.pop_search(),
            MenuEvent::Confirm => return self.confirm(),
            MenuEvent::Cancel => {
                self.phase = Phase::Cancelled;
                return Outcome::Cancelled;
            }
        }
        Outcome::Pending
    }

    fn confirm(&mut self) -> Outcome<T> {
        let Some(value) = self
            .selected
            .and_then(|i| self.choices[i].value())
            .cloned()
        else {
            return Outcome::Pending;
        };

        self.phase = Phase::Answered;
        self.search = None;
        self.relocations.clear();
        self.answer = Some(value.clone());
        Outcome::Answered(value)
    }
}

impl<T> SelectionEngine<T> {
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn choices(&self) -> &[Choice<T>] {
        &self.choices
    }

    /// The confirmed value, once answered.
    pub const fn answer(&self) -> Option<&T> {
        self.answer.as_ref()
    }

    /// Position of the selection within the visible set.
    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.selected?;
        self.visible.iter().position(|&i| i == selected)
    }

    pub fn selected_value(&self) -> Option<&T> {
        self.selected.and_then(|i| self.choices[i].value())
    }

    pub fn selected_text(&self) -> Option<&str> {
        self.selected.and_then(|i| self.choices[i].text())
    }

    /// Display texts of the visible set, in order.
    pub fn visible_texts(&self) -> Vec<&str> {
        self.visible
            .iter()
            .filter_map(|&i| self.choices[i].text())
            .collect()
    }

    /// First selectable visible entry at or after choice index `start`, wrapping.
    fn forward_from(&self, start: usize) -> Option<usize> {
        let len = self.visible.len();
        let first = self.visible.iter().position(|&i| i >= start).unwrap_or(0);
        (0..len)
            .map(|offset| self.visible[(first + offset) % len])
            .find(|&i| self.choices[i].is_selectable())
    }

    fn step(&mut self, forward: bool) {
        let Some(current) = self.selected_index() else {
            return;
        };
        let len = self.visible.len();

        for offset in 1..=len {
            let pos = if forward {
                (current + offset) % len
            } else {
                (current + len - offset % len) % len
            };
            let index = self.visible[pos];
            if self.choices[index].is_selectable() {
                self.selected = Some(index);
                return;
            }
        }
    }

    fn push_search(&mut self, c: char) {
        let before = self.selected;
        self.search.get_or_insert_with(String::new).push(c);
        self.phase = Phase::Searching;
        self.refilter();

        if !self.selected.is_some_and(|i| self.visible.contains(&i)) {
            self.selected = self.forward_from(before.unwrap_or(0));
        }
        self.relocations.push((before, self.selected));
    }

    fn pop_search(&mut self) {
        let Some(search) = self.search.as_mut() else {
            return;
        };
        if search.chars().count() <= 1 {
            self.search = None;
            self.phase = Phase::Browsing;
        } else {
            search.pop();
        }
        self.refilter();

        match self.relocations.pop() {
            Some((before, after)) if after == self.selected => self.selected = before,
            _ => {
                if !self.selected.is_some_and(|i| self.visible.contains(&i)) {
                    self.selected = self.forward_from(self.selected.unwrap_or(0));
                }
            }
        }
    }

    fn refilter(&mut self) {
        self.visible = visible_indices(&self.choices, self.search.as_deref());
    }

    /// Project the current state into renderable rows.
    pub fn view(&self) -> MenuView {
        let line = |index: usize| {
            let choice = &self.choices[index];
            match choice {
                Choice::Separator => ViewLine {
                    text: SEPARATOR_RULE.to_string(),
                    highlighted: false,
                    disabled: true,
                    separator: true,
                },
                Choice::Item { text, disabled, .. } => ViewLine {
                    text: disabled
                        .as_ref()
                        .map_or_else(|| text.clone(), |reason| format!("{text} ({reason})")),
                    highlighted: self.selected == Some(index),
                    disabled: disabled.is_some(),
                    separator: false,
                },
            }
        };

        let lines = if self.search.is_some() {
            self.visible.iter().map(|&i| line(i)).collect()
        } else {
            (0..self.choices.len()).map(line).collect()
        };

        MenuView {
            lines,
            search_echo: self.search.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::choice::normalize;

    fn engine(items: &[&str], default: Option<&str>) -> SelectionEngine<String> {
        let default = default.map(ToString::to_string);
        SelectionEngine::new(normalize(items.iter().copied()), default.as_ref()).unwrap()
    }

    fn type_str(engine: &mut SelectionEngine<String>, text: &str) {
        for c in text.chars() {
            engine.apply(MenuEvent::PrintableChar(c));
        }
    }

    #[test]
    fn test_default_then_search_then_confirm() {
        let mut e = engine(&["alpha", "beta", "gamma"], Some("beta"));
        assert_eq!(e.selected_text(), Some("beta"));

        e.apply(MenuEvent::PrintableChar('g'));
        assert_eq!(e.visible_texts(), vec!["gamma"]);
        assert_eq!(e.phase(), Phase::Searching);

        let outcome = e.apply(MenuEvent::Confirm);
        assert_eq!(outcome, Outcome::Answered("gamma".to_string()));
        assert_eq!(e.phase(), Phase::Answered);
        assert_eq!(e.search(), None);
        assert_eq!(e.answer().map(String::as_str), Some("gamma"));
    }

    #[test]
    fn test_initial_selection_skips_disabled() {
        let choices = vec![Choice::disabled("x", 'x', "locked"), Choice::new("y", 'y')];
        let e = SelectionEngine::new(choices, None).unwrap();
        assert_eq!(e.selected_value(), Some(&'y'));
    }

    #[test]
    fn test_initial_selection_skips_separator() {
        let choices = vec![Choice::separator(), Choice::new("a", 1), Choice::new("b", 2)];
        let e = SelectionEngine::new(choices, None).unwrap();
        assert_eq!(e.selected_value(), Some(&1));
    }

    #[test]
    fn test_disabled_default_resolves_forward() {
        let choices = vec![
            Choice::new("a", 1),
            Choice::disabled("b", 2, "busy"),
            Choice::new("c", 3),
        ];
        let e = SelectionEngine::new(choices, Some(&2)).unwrap();
        assert_eq!(e.selected_value(), Some(&3));
    }

    #[test]
    fn test_disabled_default_at_end_wraps() {
        let choices = vec![Choice::new("a", 1), Choice::disabled("b", 2, "busy")];
        let e = SelectionEngine::new(choices, Some(&2)).unwrap();
        assert_eq!(e.selected_value(), Some(&1));
    }

    #[test]
    fn test_unknown_default_is_rejected() {
        let result = SelectionEngine::new(vec![Choice::new("a", 1)], Some(&9));
        assert_eq!(
            result.unwrap_err(),
            ConstructionError::UnknownDefault("9".to_string())
        );
    }

    #[test]
    fn test_separator_only_is_rejected() {
        let result = SelectionEngine::<u8>::new(vec![Choice::separator()], None);
        assert_eq!(result.unwrap_err(), ConstructionError::NoChoices);
        let result = SelectionEngine::<u8>::new(Vec::new(), None);
        assert_eq!(result.unwrap_err(), ConstructionError::NoChoices);
    }

    #[test]
    fn test_next_then_previous_restores_index() {
        let mut e = engine(&["a", "b", "c", "d"], None);
        for start in 0..4 {
            while e.selected_index() != Some(start) {
                e.apply(MenuEvent::NavigateNext);
            }
            e.apply(MenuEvent::NavigateNext);
            e.apply(MenuEvent::NavigatePrevious);
            assert_eq!(e.selected_index(), Some(start));
        }
    }

    #[test]
    fn test_navigation_wraps_both_ways() {
        let mut e = engine(&["a", "b", "c"], None);
        e.apply(MenuEvent::NavigatePrevious);
        assert_eq!(e.selected_text(), Some("c"));
        e.apply(MenuEvent::NavigateNext);
        assert_eq!(e.selected_text(), Some("a"));
    }

    #[test]
    fn test_navigation_skips_disabled_and_separators() {
        let choices = vec![
            Choice::new("a", 1),
            Choice::separator(),
            Choice::disabled("b", 2, "busy"),
            Choice::new("c", 3),
        ];
        let mut e = SelectionEngine::new(choices, None).unwrap();
        e.apply(MenuEvent::NavigateNext);
        assert_eq!(e.selected_value(), Some(&3));
        e.apply(MenuEvent::NavigateNext);
        assert_eq!(e.selected_value(), Some(&1));
        e.apply(MenuEvent::NavigatePrevious);
        assert_eq!(e.selected_value(), Some(&3));
    }

    #[test]
    fn test_single_enabled_entry_stays_put() {
        let choices = vec![
            Choice::disabled("a", 1, "no"),
            Choice::new("b", 2),
            Choice::disabled("c", 3, "no"),
        ];
        let mut e = SelectionEngine::new(choices, None).unwrap();
        e.apply(MenuEvent::NavigateNext);
        assert_eq!(e.selected_value(), Some(&2));
        e.apply(MenuEvent::NavigatePrevious);
        assert_eq!(e.selected_value(), Some(&2));
    }

    #[test]
    fn test_all_disabled_never_confirms() {
        let choices = vec![Choice::disabled("a", 1, "no"), Choice::disabled("b", 2, "no")];
        let mut e = SelectionEngine::new(choices, None).unwrap();
        assert_eq!(e.selected_index(), None);

        for _ in 0..3 {
            e.apply(MenuEvent::NavigateNext);
            assert_eq!(e.apply(MenuEvent::Confirm), Outcome::Pending);
            assert_eq!(e.phase(), Phase::Browsing);
        }

        assert_eq!(e.apply(MenuEvent::Cancel), Outcome::Cancelled);
        assert_eq!(e.phase(), Phase::Cancelled);
    }

    #[test]
    fn test_search_to_empty_blocks_confirm() {
        let mut e = engine(&["alpha", "beta"], None);
        type_str(&mut e, "z");
        assert!(e.visible_texts().is_empty());
        assert_eq!(e.selected_index(), None);
        assert_eq!(e.apply(MenuEvent::Confirm), Outcome::Pending);
        assert_eq!(e.phase(), Phase::Searching);

        e.apply(MenuEvent::Backspace);
        assert_eq!(e.phase(), Phase::Browsing);
        assert_eq!(e.selected_text(), Some("alpha"));
    }

    #[test]
    fn test_search_is_case_sensitive_prefix() {
        let mut e = engine(&["Alpha", "alpine", "balance"], None);
        type_str(&mut e, "al");
        assert_eq!(e.visible_texts(), vec!["alpine"]);
    }

    #[test]
    fn test_search_narrows_monotonically() {
        let mut e = engine(&["ab", "abc", "abd", "b"], None);
        let mut previous = e.visible_texts().len();
        for c in "abc".chars() {
            e.apply(MenuEvent::PrintableChar(c));
            let now = e.visible_texts().len();
            assert!(now <= previous);
            previous = now;
        }
    }

    #[test]
    fn test_backspace_restores_visible_set_and_selection() {
        let mut e = engine(&["alpha", "beta", "gamma", "gecko"], Some("beta"));
        let snapshots: Vec<_> = "ge"
            .chars()
            .map(|c| {
                let snapshot = (e.visible_texts().len(), e.selected_index());
                e.apply(MenuEvent::PrintableChar(c));
                snapshot
            })
            .collect();

        for (len, index) in snapshots.into_iter().rev() {
            e.apply(MenuEvent::Backspace);
            assert_eq!(e.visible_texts().len(), len);
            assert_eq!(e.selected_index(), index);
        }
        assert_eq!(e.selected_text(), Some("beta"));
        assert_eq!(e.search(), None);
    }

    #[test]
    fn test_backspace_keeps_user_navigation() {
        let mut e = engine(&["alpha", "gamma", "gecko"], None);
        type_str(&mut e, "g");
        assert_eq!(e.selected_text(), Some("gamma"));
        e.apply(MenuEvent::NavigateNext);
        assert_eq!(e.selected_text(), Some("gecko"));

        e.apply(MenuEvent::Backspace);
        assert_eq!(e.selected_text(), Some("gecko"));
    }

    #[test]
    fn test_relocation_moves_forward_and_wraps() {
        let mut e = engine(&["ant", "bee", "cat", "bug"], Some("cat"));
        type_str(&mut e, "b");
        // "cat" filtered out; next visible after it in list order is "bug"
        assert_eq!(e.selected_text(), Some("bug"));

        let mut e = engine(&["bee", "ant", "cat"], Some("cat"));
        type_str(&mut e, "b");
        assert_eq!(e.selected_text(), Some("bee"));
    }

    #[test]
    fn test_relocation_skips_disabled_matches() {
        let choices = vec![
            Choice::new("apple", 1),
            Choice::disabled("banana", 2, "sold out"),
            Choice::new("blueberry", 3),
        ];
        let mut e = SelectionEngine::new(choices, None).unwrap();
        e.apply(MenuEvent::PrintableChar('b'));
        assert_eq!(e.selected_value(), Some(&3));

        e.apply(MenuEvent::PrintableChar('a'));
        assert_eq!(e.visible_texts(), vec!["banana"]);
        assert_eq!(e.selected_index(), None);
    }

    #[test]
    fn test_events_after_answer_are_ignored() {
        let mut e = engine(&["a", "b"], None);
        e.apply(MenuEvent::Confirm);
        assert_eq!(e.apply(MenuEvent::NavigateNext), Outcome::Pending);
        assert_eq!(e.apply(MenuEvent::Cancel), Outcome::Pending);
        assert_eq!(e.phase(), Phase::Answered);
        assert_eq!(e.selected_text(), Some("a"));
    }

    #[test]
    fn test_view_shows_separators_only_without_search() {
        let choices = vec![
            Choice::new("alpha", 1),
            Choice::separator(),
            Choice::disabled("beta", 2, "locked"),
        ];
        let mut e = SelectionEngine::new(choices, None).unwrap();

        let view = e.view();
        assert_eq!(view.lines.len(), 3);
        assert!(view.lines[0].highlighted);
        assert!(view.lines[1].separator);
        assert_eq!(view.lines[2].text, "beta (locked)");
        assert!(view.lines[2].disabled);
        assert_eq!(view.search_echo, None);

        e.apply(MenuEvent::PrintableChar('b'));
        let view = e.view();
        assert_eq!(view.lines.len(), 1);
        assert!(!view.lines[0].highlighted);
        assert_eq!(view.search_echo.as_deref(), Some("b"));
    }
}
