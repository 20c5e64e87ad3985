pub mod file;

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::io::{self, Read};

/// Read a typed input from `--input <file>` if given, else from piped stdin.
/// Returns `None` when neither source supplies data.
pub fn read_typed<T: DeserializeOwned>(
    path: &Option<String>,
) -> Result<Option<T>, Box<dyn std::error::Error>> {
    if let Some(ref p) = path {
        return Ok(Some(file::read_structured(p)?));
    }
    match read_stdin()? {
        Some(data) => Ok(Some(serde_json::from_value(data)?)),
        None => Ok(None),
    }
}

/// JSON piped on stdin, or None for a TTY or empty input.
fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    Ok(Some(serde_json::from_str(trimmed)?))
}
