//! User interface module - prompts, progress and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - `progress` - Spinner shown while scanning
//! - This module - Interactive prompts and user input handling

use std::io::{self, BufRead, Write};

use anyhow::Result;

pub mod formatter;
pub mod progress;

pub use formatter::{
    display_catalog, display_error, display_scan_report, display_status, display_success,
};
pub use progress::ScanSpinner;

/// Prompts the user for a single field value.
///
/// Shows `default` in brackets and returns it when the user just presses
/// Enter.
///
/// # Arguments
/// * `label` - Field name shown to the user (e.g. "Commit hash")
/// * `default` - Value used on empty input
///
/// # Returns
/// * `Ok(String)` - Trimmed input, or the default
/// * `Err` - If input error occurs or stdin is closed without a default
pub fn prompt_value(label: &str, default: Option<&str>) -> Result<String> {
    let stdin = io::stdin();
    read_value(&mut stdin.lock(), &mut io::stdout(), label, default)
}

fn read_value<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    default: Option<&str>,
) -> Result<String> {
    match default {
        Some(value) if !value.is_empty() => write!(output, "{} [{}]: ", label, value)?,
        _ => write!(output, "{}: ", label)?,
    }
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    let value = line.trim();

    if !value.is_empty() {
        return Ok(value.to_string());
    }
    match default {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ if read == 0 => Err(anyhow::anyhow!("No value given for {}", label)),
        _ => Ok(String::new()),
    }
}
