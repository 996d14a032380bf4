//! Main decoder API
//!
//! Runs the pipeline for one monitor line: tokenize, decode the header, decode
//! the float registers, then assemble the immutable [`DecodedMessage`]. Nothing
//! is retained between calls, so lines can be decoded from any number of threads.

use crate::config::DecoderConfig;
use crate::header::decode_header;
use crate::registers::decode_values;
use crate::tokenizer::tokenize;
use crate::types::{DecodedMessage, Result};

/// Decode a single monitor line
///
/// # Arguments
/// * `line` - One captured frame as whitespace-separated hex tokens, optionally
///   prefixed with `RX` or `TX`
/// * `config` - Decoder configuration (word order of the float registers)
///
/// # Returns
/// * `Result<DecodedMessage>` - The decoded frame, or the first error hit. No
///   partial message is returned on error.
///
/// # Example
/// ```
/// use modbus_log_decoder::{decode_line, DecoderConfig};
///
/// let line = "01 03 04 60 3A 46 33 C4 8E";
/// let message = decode_line(line, &DecoderConfig::new()).unwrap();
/// assert_eq!(message.header.function_code, 3);
/// assert_eq!(message.values[0].reordered_hex, "4633603A");
/// ```
pub fn decode_line(line: &str, config: &DecoderConfig) -> Result<DecodedMessage> {
    let tokenized = tokenize(line)?;
    let header = decode_header(&tokenized.tokens, tokenized.direction)?;
    let values = decode_values(&tokenized.tokens, &header, config.word_order())?;

    log::debug!(
        "Decoded slave {} function {} with {} value(s)",
        header.slave_id,
        header.function_code,
        values.len()
    );

    Ok(DecodedMessage { header, values })
}
