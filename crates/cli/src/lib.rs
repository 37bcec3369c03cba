//! URI Template CLI Library
//!
//! This crate provides the `uri` command-line tool: it reads variable values
//! from a JSON document and expands an RFC 6570 URI template with them.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`config`]: Input defaults and path resolution
//! - [`input`]: Reading the values document from a file or standard input
//! - [`bindings`]: Decoding the JSON document into template bindings
//!
//! # Examples
//!
//! ```bash
//! # Values from a file
//! uri -i data.json 'http://example.org/~{username}/{term:1}/{term}{?q*,lang}'
//!
//! # Values from standard input, with a trailing newline
//! echo '{"q": "rust"}' | uri -n 'https://example.com/search{?q}'
//! ```

use itertools::Itertools;
use log::{debug, warn};
use uri_template_core::Template;

use crate::cli_args::Args;
use crate::config::STDIN_DESCRIPTION;
use crate::error::Result;

pub mod bindings;
pub mod cli_args;
pub mod config;
pub mod error;
pub mod input;

/// Expands `template` with the values in the JSON `document`, given as text
/// or raw bytes. `source` names the document in diagnostics.
///
/// # Errors
///
/// Returns an error if the document does not decode.
///
/// # Examples
///
/// ```
/// use uri_template_cli::expand_document;
/// use uri_template_core::Template;
///
/// let template = Template::parse("/users/{id}{?fields*}")?;
/// let uri = expand_document(&template, r#"{"id": 7, "fields": ["a", "b"]}"#, "example")?;
/// assert_eq!(uri, "/users/7?fields=a&fields=b");
/// # Ok::<(), uri_template_cli::error::Error>(())
/// ```
pub fn expand_document<D: AsRef<[u8]>>(
    template: &Template,
    document: D,
    source: &str,
) -> Result<String> {
    let values = bindings::decode_bindings(document, source)?;

    let variables = template.variables();
    debug!("Template variables: {}", variables.iter().join(", "));

    let missing = variables
        .iter()
        .filter(|name| !values.contains_key(name.as_str()))
        .join(", ");
    if !missing.is_empty() {
        warn!("No values given for: {}", missing);
    }

    Ok(template.expand(&values))
}

/// Runs the tool for parsed arguments and returns the expanded URI.
///
/// The template is parsed before any values are read, so a malformed
/// template fails without waiting on standard input.
///
/// # Errors
///
/// Returns an error if the template is malformed, or the values document
/// cannot be read or decoded.
pub fn run(args: &Args) -> Result<String> {
    let template = Template::parse(&args.template)?;

    let input_path = config::resolve_input_path(&args.input);
    let source = input_path.as_deref().unwrap_or(STDIN_DESCRIPTION);
    debug!("Reading values from `{}`", source);

    let document = input::read_values_document(input_path.as_deref())?;

    expand_document(&template, document, source)
}
