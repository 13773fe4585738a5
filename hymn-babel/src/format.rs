//! Format trait definition
//!
//! This module defines the core Format trait that all output formats implement.
//! The trait provides a uniform interface for previewing, copying and exporting
//! a song's ordered sections.

use crate::base;
use crate::error::FormatError;
use crate::inline::Inline;
use crate::settings::FormatSettings;
use crate::song::{OrderItem, Song};
use std::path::Path;

/// Trait for output formats
///
/// Every method has a default built on the helpers in [`crate::base`], so a
/// format that only previews and copies needs nothing beyond a name. Formats
/// that write files override [`Format::supports_export`],
/// [`Format::file_extensions`] and [`Format::render_export`].
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "My Format"
///     }
///
///     fn supports_export(&self) -> bool {
///         true
///     }
///
///     fn file_extensions(&self) -> &[&str] {
///         &[".my"]
///     }
///
///     fn render_export(
///         &self,
///         song: &Song,
///         order: &[OrderItem],
///         settings: &FormatSettings,
///     ) -> Result<String, FormatError> {
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// Display name of this format (e.g., "Plain Text", "FreeShow")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Whether this format can write export files
    fn supports_export(&self) -> bool {
        false
    }

    /// Whether this format can produce clipboard text
    fn supports_copy(&self) -> bool {
        true
    }

    /// File extensions accepted for export, including the leading dot (e.g. `[".show"]`).
    ///
    /// Empty when the format does not support export.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Styled inline sequence for on-screen display.
    fn format_preview(
        &self,
        song: Option<&Song>,
        order: &[OrderItem],
        settings: &FormatSettings,
    ) -> Vec<Inline> {
        base::format_preview(song, order, settings)
    }

    /// Plain text for the clipboard, derived from [`Format::format_preview`].
    fn format_for_copy(
        &self,
        song: Option<&Song>,
        order: &[OrderItem],
        settings: &FormatSettings,
    ) -> String {
        base::format_for_copy(&self.format_preview(song, order, settings))
    }

    /// Produce the full contents of an export file.
    ///
    /// Default implementation returns an Unsupported error.
    fn render_export(
        &self,
        _song: &Song,
        _order: &[OrderItem],
        _settings: &FormatSettings,
    ) -> Result<String, FormatError> {
        Err(base::export_unsupported(self.name()))
    }

    /// Check that `path` may be used as an export target for this format.
    fn validate_file_extension(&self, path: &Path) -> Result<(), FormatError> {
        base::validate_file_extension(self, path)
    }

    /// File name offered to the user when exporting `song`.
    fn suggested_file_name(&self, song: &Song) -> String {
        base::suggested_file_name(self, song)
    }
}
