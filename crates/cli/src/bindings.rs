//! Decoding of the JSON values document into template bindings.
//!
//! The document is a JSON object mapping variable names to values. Members
//! are coerced into the shapes the engine expands:
//!
//! - `null` is undefined
//! - strings, numbers and booleans become scalars
//! - arrays become lists and objects become associative lists, in document
//!   order; their members must themselves be scalars (or `null`, which is
//!   dropped)

use indexmap::IndexMap;
use log::trace;
use serde_json::Value as Json;
use uri_template_core::Value;

use crate::error::Error::{NotAnObject, UnsupportedValue};
use crate::error::{Error, Result};

/// Variable bindings in the order they appear in the document.
pub type ValueMap = IndexMap<String, Value>;

/// Decodes a values document.
///
/// Empty or whitespace-only documents decode to no bindings.
///
/// # Arguments
///
/// * `document` - The document as text or raw bytes
/// * `source` - How the document is named in diagnostics
///
/// # Returns
///
/// The bindings in document order
///
/// # Errors
///
/// Returns an error if:
/// - The document is not valid UTF-8 JSON
/// - The top-level value is not an object
/// - A list or object member is itself an array or object
///
/// # Examples
///
/// ```
/// use uri_template_cli::bindings::decode_bindings;
/// use uri_template_core::Value;
///
/// let bindings = decode_bindings(r#"{"q": ["a", "b"], "page": 2}"#, "example")?;
/// assert_eq!(bindings["q"], Value::from(vec!["a", "b"]));
/// assert_eq!(bindings["page"], Value::from("2"));
/// # Ok::<(), uri_template_cli::error::Error>(())
/// ```
pub fn decode_bindings<D: AsRef<[u8]>>(document: D, source: &str) -> Result<ValueMap> {
    let document = document.as_ref();
    if document.iter().all(u8::is_ascii_whitespace) {
        return Ok(ValueMap::new());
    }

    let json: Json = serde_json::from_slice(document)
        .map_err(|e| Error::json_error(source.to_string(), e))?;

    let members = match json {
        Json::Object(members) => members,
        other => return Err(NotAnObject(json_kind(&other))),
    };

    let mut bindings = ValueMap::with_capacity(members.len());
    for (name, member) in members {
        let value = coerce_member(&name, member)?;
        trace!("Bound `{}` to {:?}", name, value);
        bindings.insert(name, value);
    }

    Ok(bindings)
}

fn coerce_member(name: &str, member: Json) -> Result<Value> {
    match member {
        Json::Array(items) => {
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                if let Some(item) = coerce_scalar(name, item)? {
                    list.push(item);
                }
            }
            Ok(Value::List(list))
        }
        Json::Object(pairs) => {
            let mut assoc = Vec::with_capacity(pairs.len());
            for (key, value) in pairs {
                if let Some(value) = coerce_scalar(name, value)? {
                    assoc.push((key, value));
                }
            }
            Ok(Value::AssocList(assoc))
        }
        scalar => Ok(Value::from(coerce_scalar(name, scalar)?)),
    }
}

/// String form of a scalar JSON value; None for `null`.
fn coerce_scalar(name: &str, value: Json) -> Result<Option<String>> {
    match value {
        Json::Null => Ok(None),
        Json::String(text) => Ok(Some(text)),
        Json::Number(number) => Ok(Some(number.to_string())),
        Json::Bool(flag) => Ok(Some(flag.to_string())),
        Json::Array(_) | Json::Object(_) => Err(UnsupportedValue(name.to_string())),
    }
}

fn json_kind(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "an object",
    }
}
