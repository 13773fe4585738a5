//! Plain text format
//!
//! Preview and clipboard copy only; relies entirely on the shared rendering.

use crate::format::Format;

/// Format implementation for plain text
pub struct PlainTextFormat;

impl Format for PlainTextFormat {
    fn name(&self) -> &str {
        "Plain Text"
    }

    fn description(&self) -> &str {
        "Simple text format without formatting"
    }
}
