//! Function code catalog
//!
//! Display labels and conventional base addresses, used only for reporting.
//! Header layouts are defined separately in `header`.

/// Label and address space of a function code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionInfo {
    pub label: &'static str,
    /// Added to a zero-based start address to get the conventional address
    pub base_address: Option<u32>,
}

const UNKNOWN: FunctionInfo = FunctionInfo {
    label: "Unknown Function Code",
    base_address: None,
};

static FUNCTIONS: &[(u8, FunctionInfo)] = &[
    (0x01, FunctionInfo { label: "Read Coils", base_address: Some(1) }),
    (0x03, FunctionInfo { label: "Read Holding Registers", base_address: Some(40001) }),
    (0x04, FunctionInfo { label: "Read Input Registers", base_address: Some(30001) }),
    (0x08, FunctionInfo { label: "Diagnostic", base_address: None }),
    (0x0F, FunctionInfo { label: "Write Multiple Coils", base_address: Some(1) }),
    (0x10, FunctionInfo { label: "Write Multiple Holding Registers", base_address: Some(40001) }),
];

/// Look up a function code, falling back to "Unknown Function Code"
pub fn function_info(function_code: u8) -> FunctionInfo {
    FUNCTIONS
        .iter()
        .find(|(code, _)| *code == function_code)
        .map(|(_, info)| *info)
        .unwrap_or(UNKNOWN)
}
