//! Batch decoding of a monitor log
//!
//! Lines are independent, so they are decoded on the rayon pool and collected
//! back in input order.

use modbus_log_decoder::{decode_line, DecodedMessage, DecoderConfig, DecoderError};
use rayon::prelude::*;

/// Decode outcome for one non-blank input line
#[derive(Debug)]
pub struct LineResult {
    /// 1-based line number in the input
    pub line: usize,
    pub result: Result<DecodedMessage, DecoderError>,
}

/// Decode every non-blank line of `input`
pub fn decode_lines(input: &str, config: &DecoderConfig) -> Vec<LineResult> {
    let lines: Vec<(usize, &str)> = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
        .collect();

    log::debug!("Decoding {} line(s)", lines.len());

    lines
        .par_iter()
        .map(|&(line, text)| LineResult {
            line,
            result: decode_line(text, config),
        })
        .collect()
}
