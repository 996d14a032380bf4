//! Decoder configuration types
//!
//! The decoder needs a single option: how the two 16-bit registers of a float
//! are ordered on the wire. It is never auto-detected.

use serde::{Deserialize, Serialize};

/// Configuration for the decoder library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Whether the less-significant register of each float is transmitted first
    #[serde(default = "default_true")]
    pub swapped_word_order: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            swapped_word_order: default_true(),
        }
    }
}

/// Ordering of the four bytes that make up one float
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordOrder {
    /// Low word first: `b0 b1 b2 b3` decodes as `b2 b3 b0 b1` (CDAB)
    Swapped,
    /// Natural big-endian: `b0 b1 b2 b3` decodes as-is (ABCD)
    Natural,
}

impl WordOrder {
    /// Positions of the captured bytes in decode order
    pub fn byte_positions(self) -> [usize; 4] {
        match self {
            WordOrder::Swapped => [2, 3, 0, 1],
            WordOrder::Natural => [0, 1, 2, 3],
        }
    }
}

impl DecoderConfig {
    /// Create a new decoder configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: select swapped (true) or natural (false) word order
    pub fn with_swapped_word_order(mut self, swapped: bool) -> Self {
        self.swapped_word_order = swapped;
        self
    }

    /// Word order implied by this configuration
    pub fn word_order(&self) -> WordOrder {
        if self.swapped_word_order {
            WordOrder::Swapped
        } else {
            WordOrder::Natural
        }
    }
}
