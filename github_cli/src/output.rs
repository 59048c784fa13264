use std::error::Error as _;

use anyhow::Result;
use github_api::Error;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_error(err: &Error, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => eprintln!("{}", format_error_text(err)),
        OutputFormat::Json => println!("{}", err.to_json()?),
    }
    Ok(())
}

/// `Kind: message`, followed by one `caused by:` line per source.
pub fn format_error_text(err: &Error) -> String {
    let mut out = format!("{}: {}", err.kind(), err.message());
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(&format!("\n  caused by: {}", cause));
        source = cause.source();
    }
    out
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
