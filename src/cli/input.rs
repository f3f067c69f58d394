use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Input bytes from the argument, else the file, else stdin.
pub fn read(text: Option<String>, file: Option<&Path>) -> Result<Vec<u8>> {
    if let Some(text) = text {
        return Ok(text.into_bytes());
    }
    if let Some(path) = file {
        return std::fs::read(path).with_context(|| format!("failed to read {}", path.display()));
    }

    let mut buf = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buf)
        .context("failed to read stdin")?;
    Ok(buf)
}

/// Like [`read`], for commands that need a `&str` up front.
pub fn read_text(text: Option<String>, file: Option<&Path>) -> Result<String> {
    let bytes = read(text, file)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => bail!(
            "input is not valid UTF-8 (first invalid byte at offset {})",
            e.utf8_error().valid_up_to()
        ),
    }
}
