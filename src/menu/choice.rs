//! Menu entries and their normalization.

/// One entry of a selection menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice<T> {
    /// A selectable (or disabled) entry.
    Item {
        text: String,
        value: T,
        /// Presence marks the entry as disabled; the reason is shown next to it.
        disabled: Option<String>,
    },
    /// A visual rule. Never selectable, never matches a search.
    Separator,
}

impl<T> Choice<T> {
    /// Create an enabled entry.
    pub fn new(text: impl Into<String>, value: T) -> Self {
        Self::Item {
            text: text.into(),
            value,
            disabled: None,
        }
    }

    /// Create a disabled entry with the reason shown beside it.
    pub fn disabled(text: impl Into<String>, value: T, reason: impl Into<String>) -> Self {
        Self::Item {
            text: text.into(),
            value,
            disabled: Some(reason.into()),
        }
    }

    pub const fn separator() -> Self {
        Self::Separator
    }

    pub const fn is_separator(&self) -> bool {
        matches!(self, Self::Separator)
    }

    pub const fn is_disabled(&self) -> bool {
        matches!(self, Self::Item { disabled: Some(_), .. })
    }

    /// Whether navigation may rest on this entry.
    pub const fn is_selectable(&self) -> bool {
        matches!(self, Self::Item { disabled: None, .. })
    }

    /// Display text, `None` for separators.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Item { text, .. } => Some(text),
            Self::Separator => None,
        }
    }

    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Item { value, .. } => Some(value),
            Self::Separator => None,
        }
    }

    pub fn disabled_reason(&self) -> Option<&str> {
        match self {
            Self::Item { disabled, .. } => disabled.as_deref(),
            Self::Separator => None,
        }
    }

    /// Case-sensitive prefix match. Separators never match.
    pub fn matches(&self, search: &str) -> bool {
        self.text().is_some_and(|text| text.starts_with(search))
    }

    /// Transform the value, keeping text and disabled state.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Choice<U> {
        match self {
            Self::Item {
                text,
                value,
                disabled,
            } => Choice::Item {
                text,
                value: f(value),
                disabled,
            },
            Self::Separator => Choice::Separator,
        }
    }
}

/// A `{name, value, disabled?}` record describing one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceRecord<T> {
    pub name: String,
    pub value: T,
    pub disabled: Option<String>,
}

impl<T> ChoiceRecord<T> {
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
            disabled: None,
        }
    }

    #[must_use]
    pub fn with_disabled(mut self, reason: impl Into<String>) -> Self {
        self.disabled = Some(reason.into());
        self
    }
}

impl<T> From<ChoiceRecord<T>> for Choice<T> {
    fn from(record: ChoiceRecord<T>) -> Self {
        Self::Item {
            text: record.name,
            value: record.value,
            disabled: record.disabled,
        }
    }
}

impl From<String> for Choice<String> {
    fn from(text: String) -> Self {
        Self::new(text.clone(), text)
    }
}

impl From<&str> for Choice<String> {
    fn from(text: &str) -> Self {
        Self::new(text, text.to_string())
    }
}

/// Normalize heterogeneous input into choices, preserving order.
///
/// Accepts anything convertible into a [`Choice`]: plain strings (value equals
/// text), [`ChoiceRecord`]s, pre-built choices and separators.
pub fn normalize<T, I>(inputs: I) -> Vec<Choice<T>>
where
    I: IntoIterator,
    I::Item: Into<Choice<T>>,
{
    inputs.into_iter().map(Into::into).collect()
}
