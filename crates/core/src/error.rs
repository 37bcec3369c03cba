use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Syntax errors raised while parsing a URI template.
///
/// Every variant carries the byte offset in the template text where the
/// problem was detected. Expansion itself never fails, so these are the only
/// errors the engine produces.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unterminated expression starting at position {}", .0)]
    UnterminatedExpression(usize),

    #[error("Nested expression at position {}", .0)]
    NestedExpression(usize),

    #[error("Empty expression at position {}", .0)]
    EmptyExpression(usize),

    #[error("Empty variable name at position {}", .0)]
    EmptyVariableName(usize),

    #[error("Invalid variable name `{}` at position {}", .0, .1)]
    InvalidVariableName(String, usize),

    #[error("Invalid prefix length `{}` at position {}", .0, .1)]
    InvalidPrefix(String, usize),

    #[error("Prefix length must be positive at position {}", .0)]
    NonPositivePrefix(usize),

    #[error("Prefix length `{}` exceeds the maximum of {} at position {}", .0, crate::template::MAX_PREFIX_LENGTH, .1)]
    PrefixTooLong(String, usize),
}

impl Error {
    /// Byte offset in the template text at which the error was detected.
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Self::UnterminatedExpression(position)
            | Self::NestedExpression(position)
            | Self::EmptyExpression(position)
            | Self::EmptyVariableName(position)
            | Self::NonPositivePrefix(position)
            | Self::InvalidVariableName(_, position)
            | Self::InvalidPrefix(_, position)
            | Self::PrefixTooLong(_, position) => *position,
        }
    }
}
