//! Parsed representation of a URI template.
//!
//! A [`Template`] is built once by the parser and never changes afterwards,
//! so a single instance can be expanded any number of times, from any number
//! of threads, against independent [`Bindings`].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use indexmap::IndexSet;

use crate::error::{Error, Result};
use crate::operator::Operator;
use crate::value::Bindings;
use crate::{expander, parser};

/// Largest accepted prefix length, `{var:10000}`.
pub const MAX_PREFIX_LENGTH: usize = 10_000;

/// Modifier applied to a single variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Modifier {
    #[default]
    None,
    /// Keep at most this many code points of a scalar value, `{var:3}`.
    Prefix(usize),
    /// Expand composite values item by item, `{var*}`.
    Explode,
}

/// A variable reference inside an expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VarSpec {
    pub name: String,
    pub modifier: Modifier,
}

impl VarSpec {
    pub fn new(name: impl Into<String>, modifier: Modifier) -> Self {
        Self {
            name: name.into(),
            modifier,
        }
    }
}

impl Display for VarSpec {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.name)?;

        match self.modifier {
            Modifier::None => Ok(()),
            Modifier::Prefix(length) => write!(formatter, ":{length}"),
            Modifier::Explode => formatter.write_str("*"),
        }
    }
}

/// One piece of a template: literal text or a `{...}` expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Component {
    /// Raw text as written in the template. Encoding happens on expansion.
    Literal(String),
    Expression {
        operator: Operator,
        varspecs: Vec<VarSpec>,
    },
}

impl Display for Component {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(text) => formatter.write_str(text),
            Self::Expression { operator, varspecs } => {
                write!(formatter, "{{{operator}")?;
                for (index, varspec) in varspecs.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(",")?;
                    }
                    write!(formatter, "{varspec}")?;
                }
                formatter.write_str("}")
            }
        }
    }
}

/// A parsed URI template.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use uri_template_core::{Template, Value};
///
/// let template = Template::parse("http://example.com/search{?q,lang}")?;
///
/// let mut bindings = HashMap::new();
/// bindings.insert("q".to_string(), Value::from("rust lang"));
///
/// assert_eq!(template.expand(&bindings), "http://example.com/search?q=rust%20lang");
/// # Ok::<(), uri_template_core::error::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Template {
    source: String,
    components: Vec<Component>,
}

impl Template {
    pub(crate) fn new(source: String, components: Vec<Component>) -> Self {
        Self { source, components }
    }

    /// Parses template text.
    ///
    /// # Errors
    ///
    /// Returns a syntax [`Error`] if the text is not a valid level 4 template.
    pub fn parse(text: &str) -> Result<Self> {
        parser::parse(text)
    }

    /// Expands the template against `bindings`. Never fails.
    #[must_use]
    pub fn expand<B: Bindings + ?Sized>(&self, bindings: &B) -> String {
        expander::expand(self, bindings)
    }

    /// The components in template order.
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// The template text this was parsed from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Variable names in order of first appearance, without duplicates.
    #[must_use]
    pub fn variables(&self) -> IndexSet<String> {
        self.components
            .iter()
            .filter_map(|component| match component {
                Component::Expression { varspecs, .. } => Some(varspecs),
                Component::Literal(_) => None,
            })
            .flatten()
            .map(|varspec| varspec.name.clone())
            .collect()
    }
}

impl Display for Template {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.source)
    }
}

impl FromStr for Template {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse(text)
    }
}
