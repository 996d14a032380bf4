//! Float register decoding
//!
//! Consumes the data region four tokens at a time. Each group holds one
//! IEEE-754 single-precision value spread across two 16-bit registers, ordered
//! according to the configured [`WordOrder`].

use crate::config::WordOrder;
use crate::header::hex_byte;
use crate::types::{DecodedHeader, DecodedValue, DecoderError, Result};
use byteorder::{BigEndian, ByteOrder};

/// Number of tokens per float (two registers)
const GROUP_LEN: usize = 4;

/// Trailing checksum tokens excluded from the data region
const CHECKSUM_LEN: usize = 2;

/// Reinterpret a 32-bit register pair as a float, bit for bit
///
/// NaN and infinity patterns are kept as-is.
pub fn word_to_f32(word: u32) -> f32 {
    f32::from_bits(word)
}

/// Decode the float values that follow the header
///
/// Scanning stops once `byte_count` tokens have been consumed or fewer than four
/// tokens remain ahead of the checksum, whichever comes first. A byte count that
/// promises more data than the line holds is not an error.
pub fn decode_values(
    tokens: &[&str],
    header: &DecodedHeader,
    order: WordOrder,
) -> Result<Vec<DecodedValue>> {
    let data_end = tokens.len().saturating_sub(CHECKSUM_LEN);
    let byte_count = usize::from(header.byte_count);
    let mut values = Vec::new();
    let mut pos = header.data_start;

    while pos - header.data_start < byte_count && pos + GROUP_LEN <= data_end {
        let group = &tokens[pos..pos + GROUP_LEN];
        values.push(decode_group(group, values.len() + 1, order)?);
        pos += GROUP_LEN;
    }

    if pos - header.data_start < byte_count {
        log::debug!(
            "Byte count {} exceeds available data, decoded {} value(s)",
            byte_count,
            values.len()
        );
    }

    Ok(values)
}

/// Decode one group of four tokens into a value
fn decode_group(group: &[&str], ordinal: usize, order: WordOrder) -> Result<DecodedValue> {
    let positions = order.byte_positions();

    let mut bytes = [0u8; GROUP_LEN];
    let mut reordered_hex = String::with_capacity(GROUP_LEN * 2);
    for (slot, &index) in bytes.iter_mut().zip(positions.iter()) {
        let token = group[index];
        *slot = hex_byte(token)
            .ok_or_else(|| DecoderError::invalid_hex(format!("value #{}", ordinal), token))?;
        reordered_hex.push_str(token);
    }

    Ok(DecodedValue {
        raw_tokens: group.join(" "),
        reordered_hex,
        value: word_to_f32(BigEndian::read_u32(&bytes)),
    })
}
