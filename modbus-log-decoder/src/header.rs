//! Header decoding
//!
//! The position of every header field depends on the function code. Positions
//! live in a static table of [`FrameLayout`] descriptors so new function codes
//! can be added without touching the decode path.

use crate::types::{DecodedHeader, DecoderError, MessageDirection, Result};
use byteorder::{BigEndian, ByteOrder};

/// Token positions of the header fields for one family of function codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    /// Index of the byte count token
    pub byte_count: Option<usize>,
    /// Index of the high byte of the start address (low byte follows)
    pub start_address: Option<usize>,
    /// Index of the high byte of the register count (low byte follows)
    pub register_count: Option<usize>,
    /// Index of the first data token
    pub data_start: usize,
}

/// Read holding registers (0x03) and read input registers (0x04) responses
const READ_REGISTERS: FrameLayout = FrameLayout {
    byte_count: Some(2),
    start_address: None,
    register_count: None,
    data_start: 3,
};

/// Write multiple holding registers (0x10) requests
const WRITE_MULTIPLE_REGISTERS: FrameLayout = FrameLayout {
    byte_count: Some(6),
    start_address: Some(2),
    register_count: Some(4),
    data_start: 7,
};

/// Any function code without an entry below
const DEFAULT_LAYOUT: FrameLayout = FrameLayout {
    byte_count: None,
    start_address: None,
    register_count: None,
    data_start: 3,
};

static LAYOUTS: &[(u8, FrameLayout)] = &[
    (0x03, READ_REGISTERS),
    (0x04, READ_REGISTERS),
    (0x10, WRITE_MULTIPLE_REGISTERS),
];

/// Look up the header layout for a function code
pub fn layout_for(function_code: u8) -> &'static FrameLayout {
    LAYOUTS
        .iter()
        .find(|(code, _)| *code == function_code)
        .map(|(_, layout)| layout)
        .unwrap_or(&DEFAULT_LAYOUT)
}

/// Parse a token of exactly two ASCII hex digits
///
/// `from_str_radix` alone would accept `+4` or `1`.
pub(crate) fn hex_byte(token: &str) -> Option<u8> {
    if token.len() != 2 || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(token, 16).ok()
}

fn parse_byte(field: &str, token: &str) -> Result<u8> {
    hex_byte(token).ok_or_else(|| DecoderError::invalid_hex(field, token))
}

/// A field ending at `last` is only read when at least one token follows it.
fn has_field(tokens: &[&str], last: usize) -> bool {
    tokens.len() >= last + 2
}

fn read_byte(tokens: &[&str], index: usize, field: &str) -> Result<Option<u8>> {
    if !has_field(tokens, index) {
        return Ok(None);
    }
    parse_byte(field, tokens[index]).map(Some)
}

/// Big-endian 16-bit value from `tokens[high]` and `tokens[high + 1]`
fn read_word(tokens: &[&str], high: usize, field: &str) -> Result<Option<u16>> {
    if !has_field(tokens, high + 1) {
        return Ok(None);
    }
    let bytes = [
        parse_byte(field, tokens[high])?,
        parse_byte(field, tokens[high + 1])?,
    ];
    Ok(Some(BigEndian::read_u16(&bytes)))
}

/// Decode the header fields of a tokenized frame
pub fn decode_header(tokens: &[&str], direction: MessageDirection) -> Result<DecodedHeader> {
    let slave_id = read_byte(tokens, 0, "slave id")?.unwrap_or(0);
    let function_code = read_byte(tokens, 1, "function code")?.unwrap_or(0);

    let layout = layout_for(function_code);
    log::trace!("Function code {} uses layout {:?}", function_code, layout);

    let byte_count = match layout.byte_count {
        Some(index) => read_byte(tokens, index, "byte count")?.unwrap_or(0),
        None => 0,
    };
    let start_address = match layout.start_address {
        Some(high) => read_word(tokens, high, "start address")?,
        None => None,
    };
    let register_count = match layout.register_count {
        Some(high) => read_word(tokens, high, "register count")?,
        None => None,
    };

    let checksum = match tokens {
        [.., hi, lo] => format!("{}{}", hi, lo),
        _ => String::new(),
    };

    Ok(DecodedHeader {
        direction,
        slave_id,
        function_code,
        start_address,
        register_count,
        byte_count,
        checksum,
        data_start: layout.data_start,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(line: &str) -> Vec<&str> {
        line.split_whitespace().collect()
    }

    #[test]
    fn test_read_holding_registers_header() {
        let t = tokens("01 03 10 60 3A 46 33 C4 8E");
        let header = decode_header(&t, MessageDirection::Unknown).unwrap();
        assert_eq!(header.slave_id, 1);
        assert_eq!(header.function_code, 3);
        assert_eq!(header.byte_count, 16);
        assert_eq!(header.start_address, None);
        assert_eq!(header.register_count, None);
        assert_eq!(header.checksum, "C48E");
        assert_eq!(header.data_start, 3);
    }

    #[test]
    fn test_write_multiple_registers_header() {
        let t = tokens("01 10 00 64 00 32 64 48 9C 1C B6 9D A4");
        let header = decode_header(&t, MessageDirection::Transmit).unwrap();
        assert_eq!(header.direction, MessageDirection::Transmit);
        assert_eq!(header.function_code, 16);
        assert_eq!(header.start_address, Some(100));
        assert_eq!(header.register_count, Some(50));
        assert_eq!(header.byte_count, 100);
        assert_eq!(header.data_start, 7);
    }

    #[test]
    fn test_zero_start_address_is_present() {
        let t = tokens("01 10 00 00 00 02 04 00 00 00 00 AA BB");
        let header = decode_header(&t, MessageDirection::Unknown).unwrap();
        assert_eq!(header.start_address, Some(0));
        assert_eq!(header.register_count, Some(2));
    }

    #[test]
    fn test_short_write_frame_leaves_fields_absent() {
        // 5 tokens: start address readable, register count and byte count not
        let t = tokens("01 10 00 64 00");
        let header = decode_header(&t, MessageDirection::Unknown).unwrap();
        assert_eq!(header.start_address, Some(100));
        assert_eq!(header.register_count, None);
        assert_eq!(header.byte_count, 0);

        let t = tokens("01 10 00 64");
        let header = decode_header(&t, MessageDirection::Unknown).unwrap();
        assert_eq!(header.start_address, None);
    }

    #[test]
    fn test_unknown_function_code_uses_default_layout() {
        let t = tokens("11 2B 0E 01 00 AA BB");
        let header = decode_header(&t, MessageDirection::Unknown).unwrap();
        assert_eq!(header.function_code, 0x2B);
        assert_eq!(header.byte_count, 0);
        assert_eq!(header.start_address, None);
        assert_eq!(header.data_start, 3);
        assert_eq!(header.checksum, "AABB");
    }

    #[test]
    fn test_minimal_lines() {
        let header = decode_header(&tokens("01 03"), MessageDirection::Unknown).unwrap();
        assert_eq!(header.slave_id, 1);
        assert_eq!(header.function_code, 0);
        assert_eq!(header.checksum, "0103");

        let header = decode_header(&tokens("01"), MessageDirection::Unknown).unwrap();
        assert_eq!(header.slave_id, 0);
        assert_eq!(header.checksum, "");
    }

    #[test]
    fn test_invalid_function_code_token() {
        let t = tokens("01 GZ 10 60 3A");
        match decode_header(&t, MessageDirection::Unknown) {
            Err(DecoderError::InvalidHex { field, token, .. }) => {
                assert_eq!(field, "function code");
                assert_eq!(token, "GZ");
            }
            other => panic!("expected InvalidHex, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_tokens_that_are_not_two_hex_digits() {
        let cases = [
            ("01 +3 04 60 3A 46 33 C4 8E", "function code", "+3"),
            ("1 03 04 60 3A 46 33 C4 8E", "slave id", "1"),
            ("01 03 +4 60 3A 46 33 C4 8E", "byte count", "+4"),
            ("01 10 00 1 00 02 04 00 00 3F 80 9D A4", "start address", "1"),
            ("01 10 00 64 00 123 04 00 00 3F 80 9D A4", "register count", "123"),
        ];
        for (line, expected_field, expected_token) in cases {
            match decode_header(&tokens(line), MessageDirection::Unknown) {
                Err(DecoderError::InvalidHex { field, token }) => {
                    assert_eq!(field, expected_field);
                    assert_eq!(token, expected_token);
                }
                other => panic!("expected InvalidHex for {:?}, got {:?}", line, other),
            }
        }
    }

    #[test]
    fn test_hex_byte() {
        assert_eq!(hex_byte("0a"), Some(0x0A));
        assert_eq!(hex_byte("FF"), Some(0xFF));
        assert_eq!(hex_byte("+4"), None);
        assert_eq!(hex_byte("1"), None);
        assert_eq!(hex_byte("-1"), None);
        assert_eq!(hex_byte("100"), None);
    }

    #[test]
    fn test_layout_table() {
        assert_eq!(layout_for(3), layout_for(4));
        assert_eq!(layout_for(16).data_start, 7);
        assert_eq!(layout_for(1), &DEFAULT_LAYOUT);
    }
}
