//! URI Template Core Library
//!
//! This crate implements RFC 6570 URI Templates up to level 4: a parser that
//! turns template text into a [`Template`], and an expander that substitutes
//! [`Value`]s into it and produces the final URI string.
//!
//! # Key Features
//!
//! - **Parse once, expand many**: a [`Template`] is immutable and can be shared
//!   between threads and expanded against any number of bindings
//! - **All operators**: `+`, `#`, `.`, `/`, `;`, `?` and `&`, plus the prefix
//!   (`:N`) and explode (`*`) modifiers
//! - **Three value shapes**: strings, lists and associative lists
//! - **Positioned errors**: every syntax error reports its byte offset
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use uri_template_core::{expand, parse, Value};
//!
//! let template = parse("http://example.org/~{username}/{term:1}/{term}{?q*,lang}")?;
//!
//! let mut bindings = HashMap::new();
//! bindings.insert("username".to_string(), Value::from("scarlett"));
//! bindings.insert("term".to_string(), Value::from("black widow"));
//! bindings.insert("q".to_string(), Value::from(vec![("a", "mars"), ("b", "jupiter")]));
//! bindings.insert("lang".to_string(), Value::from("en"));
//!
//! assert_eq!(
//!     expand(&template, &bindings),
//!     "http://example.org/~scarlett/b/black%20widow?a=mars&b=jupiter&lang=en"
//! );
//! # Ok::<(), uri_template_core::error::Error>(())
//! ```

pub mod encoding;
pub mod error;
pub mod expander;
pub mod operator;
pub mod parser;
pub mod template;
pub mod value;

pub use error::{Error, Result};
pub use expander::expand;
pub use operator::Operator;
pub use parser::parse;
pub use template::{Component, Modifier, Template, VarSpec, MAX_PREFIX_LENGTH};
pub use value::{Bindings, Value};
