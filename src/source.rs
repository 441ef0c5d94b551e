//! Reading grammar source into the line sequence the tokenizer consumes.

use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Reads a UTF-8 grammar file and splits it into lines.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let lines = lines_from_str(&content);
    debug!(path = %path.display(), lines = lines.len(), "source loaded");
    Ok(lines)
}

/// Splits text on `\n`, dropping a `\r` that ends a line.
///
/// A final line terminator does not produce an extra empty line.
///
/// ```
/// # use yantlr::source::lines_from_str;
/// assert_eq!(lines_from_str("a = b;\r\nc = d;\n"), vec!["a = b;", "c = d;"]);
/// ```
pub fn lines_from_str(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}
