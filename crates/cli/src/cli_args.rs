//! Command-line argument parsing.
//!
//! This module defines the command-line interface of the `uri` binary using
//! the `clap` crate.

use clap::{ArgAction, Parser};

const LONG_ABOUT: &str = "\
URI Template is a way to specify a URL that includes parameters that must be
substituted before the URL is resolved; e.g.: http://example.org/{userid}.

This tool supports up to Level 4 template expressions. See RFC 6570 for more
information.";

const EXAMPLES: &str = "\
EXAMPLES:
  uri -i data.json 'http://example.org/~{username}/{term:1}/{term}{?q*,lang}'
  cat data.json | uri 'http://example.org/~{username}/{term:1}/{term}{?q*,lang}'

  where data.json content is:
  {\"username\":\"scarlett\",\"term\":\"black widow\",\"q\":{\"a\":\"mars\",\"b\":\"jupiter\"},\"lang\":\"en\"}";

/// Command-line arguments for the `uri` tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use uri_template_cli::cli_args::Args;
///
/// let args = Args::parse_from(["uri", "-n", "http://example.org/{user}"]);
/// assert!(args.newline);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(
    name = "uri",
    version,
    about = "URI builder through variable expansion as specified in RFC 6570.",
    long_about = LONG_ABOUT,
    after_help = EXAMPLES,
    disable_version_flag = true,
    term_width = 0
)]
pub struct Args {
    /// JSON input file containing the values of the variables.
    ///
    /// If not provided, the values are read from standard input.
    #[arg(long, short = 'i')]
    pub input: Option<String>,

    /// Append a new line character to the output.
    #[arg(long, short = 'n', action)]
    pub newline: bool,

    /// Print version.
    #[arg(long, short = 'v', action = ArgAction::Version)]
    pub version: Option<bool>,

    /// The URI template to expand.
    pub template: String,
}
