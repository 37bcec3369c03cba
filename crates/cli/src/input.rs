//! Reading the values document.

use std::fs::File;
use std::io::{self, Read};

use log::debug;

use crate::config::{MAX_INPUT_BYTES, STDIN_DESCRIPTION};
use crate::error::{Error, Result};

/// Reads at most [`MAX_INPUT_BYTES`] from `reader`.
///
/// The bytes are returned undecoded, so a cut that lands inside a multi-byte
/// character is reported by the JSON decoder rather than as a read failure.
///
/// # Arguments
///
/// * `reader` - Source of the values document
/// * `source` - How the reader is named in diagnostics
///
/// # Returns
///
/// The raw document bytes, truncated to the input limit
///
/// # Errors
///
/// Returns an error if reading fails.
pub fn read_limited<R: Read>(reader: R, source: &str) -> Result<Vec<u8>> {
    let mut document = Vec::new();

    reader
        .take(MAX_INPUT_BYTES)
        .read_to_end(&mut document)
        .map_err(|e| Error::io_error("values document".to_string(), source.to_string(), e))?;

    debug!("Read {} bytes from {}", document.len(), source);

    Ok(document)
}

/// Reads the values document from a file or standard input.
///
/// # Arguments
///
/// * `input_path` - Path of the values file, or None to read standard input
///
/// # Returns
///
/// The raw document bytes, truncated to [`MAX_INPUT_BYTES`]
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn read_values_document(input_path: Option<&str>) -> Result<Vec<u8>> {
    let Some(input_path) = input_path else {
        return read_limited(io::stdin().lock(), STDIN_DESCRIPTION);
    };

    let file = File::open(input_path).map_err(|e| {
        Error::io_error("values file".to_string(), input_path.to_string(), e)
    })?;

    read_limited(file, input_path)
}
