//! Input defaults and path resolution for the `uri` tool.

/// At most this many bytes of the values document are read.
pub const MAX_INPUT_BYTES: u64 = 512 * 1024;

/// How standard input is named in diagnostics.
pub const STDIN_DESCRIPTION: &str = "standard input";

/// Resolves the values file path, expanding a leading `~`.
///
/// # Arguments
///
/// * `input_arg` - The `-i` path as given on the command line
///
/// # Returns
///
/// The expanded path, or None when no path was given and values are read
/// from standard input
///
/// # Examples
///
/// ```
/// use uri_template_cli::config::resolve_input_path;
///
/// let expanded = resolve_input_path(&Some("~/data.json".to_string()));
/// assert!(!expanded.unwrap().starts_with('~'));
///
/// assert!(resolve_input_path(&None).is_none());
/// ```
pub fn resolve_input_path(input_arg: &Option<String>) -> Option<String> {
    input_arg
        .as_ref()
        .map(|input_path| shellexpand::tilde(input_path).to_string())
}
