//! Report generation
//!
//! Renders decoded lines as concatenated text reports or as a JSON array.

use crate::config::OutputFormat;
use anyhow::Result;
use modbus_log_decoder::{format_report, DecodedMessage};
use serde::Serialize;

/// A successfully decoded input line
#[derive(Debug, Serialize)]
pub struct DecodedLine {
    pub line: usize,
    pub message: DecodedMessage,
}

/// Render all decoded lines in the requested format
pub fn render(lines: &[DecodedLine], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(lines)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(lines)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn render_text(lines: &[DecodedLine]) -> String {
    lines
        .iter()
        .map(|decoded| format!("Line {}\n{}", decoded.line, format_report(&decoded.message)))
        .collect::<Vec<_>>()
        .join("\n")
}
