//! Line tokenizer
//!
//! Splits a monitor line into hex byte tokens after stripping an optional
//! `RX`/`TX` direction marker. Tokens are not validated here; bad hex surfaces
//! where a token is converted to a number.

use crate::types::{DecoderError, MessageDirection, Result};

/// A monitor line split into its direction and byte tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedLine<'a> {
    pub direction: MessageDirection,
    pub tokens: Vec<&'a str>,
}

/// Tokenize a single monitor line
///
/// Fails with [`DecoderError::MalformedInput`] when the trimmed line contains no
/// whitespace at all. The direction marker must sit at the very start of the
/// trimmed line and is case-sensitive.
pub fn tokenize(line: &str) -> Result<TokenizedLine<'_>> {
    let trimmed = line.trim();

    if !trimmed.contains(char::is_whitespace) {
        return Err(DecoderError::MalformedInput(trimmed.to_string()));
    }

    let (direction, rest) = if let Some(rest) = trimmed.strip_prefix("RX") {
        (MessageDirection::Receive, rest)
    } else if let Some(rest) = trimmed.strip_prefix("TX") {
        (MessageDirection::Transmit, rest)
    } else {
        (MessageDirection::Unknown, trimmed)
    };

    Ok(TokenizedLine {
        direction,
        tokens: rest.split_whitespace().collect(),
    })
}
