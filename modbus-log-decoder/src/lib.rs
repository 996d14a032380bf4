//! Modbus Log Decoder Library
//!
//! A stateless library for decoding lines captured by a serial-bus traffic
//! monitor into structured Modbus messages.
//!
//! # Architecture
//!
//! Each line goes through four pure stages:
//! - Tokenizer: strips an optional `RX`/`TX` marker and splits hex tokens
//! - Header decoder: picks a frame layout from the function code
//! - Float register decoder: reads 32-bit floats spread over two registers
//! - Report formatter: renders the result, with register addresses if known
//!
//! The library does NOT:
//! - Read log files or streams
//! - Verify frame checksums
//! - Initialise logging
//!
//! File handling and output are in the application layer (modbus-log-cli).
//!
//! # Example Usage
//!
//! ```
//! use modbus_log_decoder::{decode_line, format_report, DecoderConfig};
//!
//! let config = DecoderConfig::new().with_swapped_word_order(true);
//! let line = "TX 01 10 00 64 00 02 04 48 9C 1C B6 9D A4";
//!
//! let message = decode_line(line, &config).unwrap();
//! assert_eq!(message.header.start_address, Some(100));
//! assert_eq!(message.register_addresses(), Some(vec![40101]));
//!
//! println!("{}", format_report(&message));
//! ```

// Public modules
pub mod config;
pub mod decoder;
pub mod function;
pub mod header;
pub mod report;
pub mod types;

// Re-export main types for convenience
pub use config::{DecoderConfig, WordOrder};
pub use decoder::decode_line;
pub use function::{function_info, FunctionInfo};
pub use header::{layout_for, FrameLayout};
pub use registers::word_to_f32;
pub use report::format_report;
pub use types::{
    DecodedHeader, DecodedMessage, DecodedValue, DecoderError, MessageDirection, Result,
};

// Internal modules (not exposed in public API)
mod registers;
mod tokenizer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
