//! Core types for the Modbus log decoder library
//!
//! This module defines the structures the decoder emits for a single monitor
//! line. Every value is built once per decode call and never mutated afterwards;
//! ownership passes to the caller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for decoder operations
pub type Result<T> = std::result::Result<T, DecoderError>;

/// Errors that can occur while decoding a monitor line
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecoderError {
    /// The trimmed line has no whitespace separator (e.g. a concatenated hex blob)
    #[error("Malformed input: expected whitespace-separated hex tokens, got {0:?}")]
    MalformedInput(String),

    /// A token is not exactly two hexadecimal digits
    #[error("Invalid hex token {token:?} in {field}: expected two hex digits")]
    InvalidHex {
        /// Field being decoded when the token was rejected
        field: String,
        /// Offending token, verbatim
        token: String,
    },
}

impl DecoderError {
    pub(crate) fn invalid_hex(field: impl Into<String>, token: &str) -> Self {
        DecoderError::InvalidHex {
            field: field.into(),
            token: token.to_string(),
        }
    }
}

/// Direction marker found at the start of a captured line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageDirection {
    /// No marker present
    #[default]
    Unknown,
    /// `RX` marker
    Receive,
    /// `TX` marker
    Transmit,
}

impl fmt::Display for MessageDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageDirection::Unknown => write!(f, "Unknown"),
            MessageDirection::Receive => write!(f, "Receive"),
            MessageDirection::Transmit => write!(f, "Transmit"),
        }
    }
}

/// Header fields extracted from a captured frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedHeader {
    pub direction: MessageDirection,
    /// Addressed device (0 when the line is too short to carry one)
    pub slave_id: u8,
    /// Modbus function code (0 when the line is too short to carry one)
    pub function_code: u8,
    /// Only present for layouts that carry a start address (write multiple registers)
    pub start_address: Option<u16>,
    /// Only present for layouts that carry a register count
    pub register_count: Option<u16>,
    /// Declared payload length, 0 when the layout has no byte count field
    pub byte_count: u8,
    /// Last two tokens concatenated verbatim, never verified
    pub checksum: String,
    /// Token index where the float-bearing region begins
    pub data_start: usize,
}

/// One 32-bit float spread across two consecutive registers
///
/// JSON has no NaN or infinity, so those values serialize as `null`;
/// `reordered_hex` is the exact representation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedValue {
    /// The four tokens as captured, joined by single spaces
    pub raw_tokens: String,
    /// The same four tokens concatenated in decode order
    pub reordered_hex: String,
    /// IEEE-754 reinterpretation of `reordered_hex`
    pub value: f32,
}

/// Complete decode result for one monitor line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedMessage {
    pub header: DecodedHeader,
    pub values: Vec<DecodedValue>,
}

impl DecodedMessage {
    /// Register address of every decoded value, in order
    ///
    /// The first value sits at `base + start_address`; each further value is two
    /// registers on. Returns `None` when the frame carries no start address or the
    /// function code has no conventional base address.
    pub fn register_addresses(&self) -> Option<Vec<u32>> {
        let start = self.header.start_address?;
        let base = crate::function::function_info(self.header.function_code).base_address?;
        let first = base + u32::from(start);

        Some(
            (0..self.values.len() as u32)
                .map(|i| first + 2 * i)
                .collect(),
        )
    }
}
