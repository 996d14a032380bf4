//! Text report for a decoded message
//!
//! Layout: a title naming the function, a 40-dash rule, the header fields that
//! carry information, then a numbered list of values. Values are prefixed with
//! their register address when the frame carries a start address.

use crate::function::function_info;
use crate::types::{DecodedMessage, MessageDirection};
use std::fmt;

const RULE_WIDTH: usize = 40;

/// Render a decoded message as a multi-line text report
pub fn format_report(message: &DecodedMessage) -> String {
    message.to_string()
}

impl fmt::Display for DecodedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = &self.header;
        let info = function_info(header.function_code);

        writeln!(f, "{}", info.label)?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;

        if header.direction != MessageDirection::Unknown {
            writeln!(f, "Direction:      {}", header.direction)?;
        }
        writeln!(f, "Slave ID:       {}", header.slave_id)?;
        writeln!(
            f,
            "Function Code:  {} (0x{:02X})",
            header.function_code, header.function_code
        )?;
        if let Some(start) = header.start_address {
            writeln!(f, "Start Address:  {}", start)?;
        }
        if let Some(count) = header.register_count {
            writeln!(f, "Register Count: {}", count)?;
        }
        if header.byte_count != 0 {
            writeln!(f, "Byte Count:     {}", header.byte_count)?;
        }
        if !header.checksum.is_empty() {
            writeln!(f, "Checksum:       {}", header.checksum)?;
        }

        if self.values.is_empty() {
            return writeln!(f, "Values:         none");
        }

        writeln!(f, "Values:")?;
        let addresses = self.register_addresses();
        for (i, value) in self.values.iter().enumerate() {
            write!(f, "  {:>3}. ", i + 1)?;
            if let Some(address) = addresses.as_ref().map(|a| a[i]) {
                write!(f, "[{}] ", address)?;
            }
            // Debug formatting switches to exponent notation for tiny/huge values
            writeln!(
                f,
                "{} -> {} = {:?}",
                value.raw_tokens, value.reordered_hex, value.value
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DecodedHeader, DecodedValue};

    fn value(raw: &str, hex: &str, v: f32) -> DecodedValue {
        DecodedValue {
            raw_tokens: raw.to_string(),
            reordered_hex: hex.to_string(),
            value: v,
        }
    }

    fn write_message() -> DecodedMessage {
        DecodedMessage {
            header: DecodedHeader {
                direction: MessageDirection::Transmit,
                slave_id: 1,
                function_code: 16,
                start_address: Some(100),
                register_count: Some(50),
                byte_count: 100,
                checksum: "9DA4".to_string(),
                data_start: 7,
            },
            values: vec![
                value("00 00 3F 80", "3F800000", 1.0),
                value("00 00 40 00", "40000000", 2.0),
            ],
        }
    }

    #[test]
    fn test_write_report_layout() {
        let expected = "\
Write Multiple Holding Registers
----------------------------------------
Direction:      Transmit
Slave ID:       1
Function Code:  16 (0x10)
Start Address:  100
Register Count: 50
Byte Count:     100
Checksum:       9DA4
Values:
    1. [40101] 00 00 3F 80 -> 3F800000 = 1.0
    2. [40103] 00 00 40 00 -> 40000000 = 2.0
";
        assert_eq!(format_report(&write_message()), expected);
    }

    #[test]
    fn test_report_without_start_address_has_no_addresses() {
        let mut message = write_message();
        message.header.direction = MessageDirection::Unknown;
        message.header.function_code = 3;
        message.header.start_address = None;
        message.header.register_count = None;

        let report = format_report(&message);
        assert!(report.starts_with("Read Holding Registers\n"));
        assert!(!report.contains("Direction"));
        assert!(!report.contains("Start Address"));
        assert!(!report.contains('['));
        assert!(report.contains("    1. 00 00 3F 80 -> 3F800000 = 1.0\n"));
    }

    #[test]
    fn test_report_omits_zero_byte_count() {
        let mut message = write_message();
        message.header.function_code = 0x2B;
        message.header.byte_count = 0;
        message.values.clear();

        let report = format_report(&message);
        assert!(report.starts_with("Unknown Function Code\n"));
        assert!(!report.contains("Byte Count"));
        assert!(report.ends_with("Values:         none\n"));
    }

    #[test]
    fn test_report_is_idempotent() {
        let message = write_message();
        assert_eq!(format_report(&message), format_report(&message));
    }
}
