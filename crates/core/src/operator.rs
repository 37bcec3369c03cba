//! Expression operators and their expansion properties.

use std::fmt::{Display, Formatter};

/// The operator of an expression, selected by its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operator {
    /// Simple string expansion, `{var}`.
    #[default]
    None,
    /// Reserved expansion, `{+var}`.
    Plus,
    /// Fragment expansion, `{#var}`.
    Hash,
    /// Label expansion, `{.var}`.
    Dot,
    /// Path segment expansion, `{/var}`.
    Slash,
    /// Path-style parameter expansion, `{;var}`.
    Semicolon,
    /// Form-style query expansion, `{?var}`.
    Question,
    /// Form-style query continuation, `{&var}`.
    Ampersand,
}

impl Operator {
    /// Maps an expression's leading character to its operator, if it is one.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '#' => Some(Self::Hash),
            '.' => Some(Self::Dot),
            '/' => Some(Self::Slash),
            ';' => Some(Self::Semicolon),
            '?' => Some(Self::Question),
            '&' => Some(Self::Ampersand),
            _ => None,
        }
    }

    /// The character that selects this operator.
    #[must_use]
    pub fn as_char(self) -> Option<char> {
        match self {
            Self::None => None,
            Self::Plus => Some('+'),
            Self::Hash => Some('#'),
            Self::Dot => Some('.'),
            Self::Slash => Some('/'),
            Self::Semicolon => Some(';'),
            Self::Question => Some('?'),
            Self::Ampersand => Some('&'),
        }
    }

    /// Emitted once before the first defined variable.
    #[must_use]
    pub fn first(self) -> &'static str {
        match self {
            Self::None | Self::Plus => "",
            Self::Hash => "#",
            Self::Dot => ".",
            Self::Slash => "/",
            Self::Semicolon => ";",
            Self::Question => "?",
            Self::Ampersand => "&",
        }
    }

    /// Placed between consecutive defined renderings.
    #[must_use]
    pub fn separator(self) -> &'static str {
        match self {
            Self::None | Self::Plus | Self::Hash => ",",
            Self::Dot => ".",
            Self::Slash => "/",
            Self::Semicolon => ";",
            Self::Question | Self::Ampersand => "&",
        }
    }

    /// Whether values are rendered as `name=value` pairs.
    #[must_use]
    pub fn named(self) -> bool {
        matches!(self, Self::Semicolon | Self::Question | Self::Ampersand)
    }

    /// Appended to the name of a named variable whose value is empty.
    #[must_use]
    pub fn if_empty(self) -> &'static str {
        match self {
            Self::Question | Self::Ampersand => "=",
            _ => "",
        }
    }

    /// Whether reserved characters pass through substituted values unencoded.
    #[must_use]
    pub fn allow_reserved(self) -> bool {
        matches!(self, Self::Plus | Self::Hash)
    }
}

impl Display for Operator {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self.as_char() {
            Some(c) => write!(formatter, "{c}"),
            None => Ok(()),
        }
    }
}
