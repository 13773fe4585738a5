//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats are registered under their display name and looked up
//! case-insensitively, ignoring spaces and punctuation, so "Plain Text",
//! "plain-text" and "plaintext" all find the same format.

use crate::error::FormatError;
use crate::format::Format;
use crate::inline::Inline;
use crate::settings::FormatSettings;
use crate::song::{OrderItem, Song};
use std::collections::HashMap;
use std::path::Path;

/// Registry of output formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let format = registry.get("freeshow")?;
/// let text = format.format_for_copy(Some(&song), &order, &settings);
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

/// Lowercased alphanumerics of a format name.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(normalize_name(format.name()), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(&normalize_name(name))
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(&normalize_name(name))
    }

    /// List all available format display names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.values().map(|f| f.name().to_string()).collect();
        names.sort();
        names
    }

    /// Formats that can write export files, sorted by name
    pub fn exporters(&self) -> Vec<&dyn Format> {
        let mut formats: Vec<&dyn Format> = self
            .formats
            .values()
            .filter(|f| f.supports_export())
            .map(|f| f.as_ref())
            .collect();
        formats.sort_by(|a, b| a.name().cmp(b.name()));
        formats
    }

    /// Detect the exporting format for a filename based on its extension
    ///
    /// Returns the format name if a matching extension is found, or None otherwise.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{ext}"))?;

        self.exporters()
            .into_iter()
            .find(|format| {
                format
                    .file_extensions()
                    .iter()
                    .any(|candidate| candidate.eq_ignore_ascii_case(&extension))
            })
            .map(|format| format.name().to_string())
    }

    /// Preview a song using the specified format
    pub fn preview(
        &self,
        format: &str,
        song: Option<&Song>,
        order: &[OrderItem],
        settings: &FormatSettings,
    ) -> Result<Vec<Inline>, FormatError> {
        Ok(self.get(format)?.format_preview(song, order, settings))
    }

    /// Clipboard text for a song using the specified format
    pub fn copy_text(
        &self,
        format: &str,
        song: Option<&Song>,
        order: &[OrderItem],
        settings: &FormatSettings,
    ) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_copy() {
            return Err(FormatError::Unsupported(format!(
                "{} format does not support copying.",
                fmt.name()
            )));
        }
        Ok(fmt.format_for_copy(song, order, settings))
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::PlainTextFormat);
        registry.register(crate::formats::FreeShowFormat::default());
        registry.register(crate::formats::ProPresenterFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
