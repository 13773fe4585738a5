//! Formatter settings
//!
//! Every formatting call receives its settings explicitly. Callers that keep
//! settings on disk are expected to reload them before an export and hand the
//! fresh values in; formatters never read ambient state.

use serde::{Deserialize, Serialize};

/// Where the last-section symbol is placed relative to the section body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolLocation {
    #[default]
    None,
    Start,
    End,
    Both,
}

impl SymbolLocation {
    pub fn at_start(self) -> bool {
        matches!(self, SymbolLocation::Start | SymbolLocation::Both)
    }

    pub fn at_end(self) -> bool {
        matches!(self, SymbolLocation::End | SymbolLocation::Both)
    }

    /// Parses the lowercase names accepted in config files and on the CLI.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "none" => Some(SymbolLocation::None),
            "start" => Some(SymbolLocation::Start),
            "end" => Some(SymbolLocation::End),
            "both" => Some(SymbolLocation::Both),
            _ => None,
        }
    }
}

/// Knobs consumed by the preview, copy and export formatters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSettings {
    pub last_section_symbol: String,
    pub last_section_symbol_location: SymbolLocation,
    pub lines_per_slide: usize,
}

impl Default for FormatSettings {
    fn default() -> Self {
        FormatSettings {
            last_section_symbol: "Ω".to_string(),
            last_section_symbol_location: SymbolLocation::None,
            lines_per_slide: 2,
        }
    }
}

impl FormatSettings {
    /// True when exports should carry the last-section symbol at all.
    pub fn has_end_symbol(&self) -> bool {
        self.last_section_symbol_location != SymbolLocation::None
            && !self.last_section_symbol.trim().is_empty()
    }

    /// Page size for slide pagination; never zero.
    pub fn page_size(&self) -> usize {
        self.lines_per_slide.max(1)
    }
}
