//! Song publishing pipeline.
//!
//! Provides a high-level API for turning a song into clipboard text or an
//! export file. This module bridges the gap between the format registry and
//! file I/O.
//!
//! Use this for editor commands like "Export to FreeShow" or "Copy lyrics"
//! where you want a single call that handles format selection, extension
//! checks, rendering and writing.
//!
//! For more control over the conversion process, use [`FormatRegistry`] or a
//! [`Format`] directly.

use crate::error::FormatError;
use crate::format::Format;
use crate::registry::FormatRegistry;
use crate::settings::FormatSettings;
use crate::song::{OrderItem, Song};
use std::path::{Path, PathBuf};

/// Specifies how to publish a song.
///
/// ```ignore
/// let spec = PublishSpec::new(&song, &order, "freeshow")
///     .with_settings(settings)
///     .with_output_path("123 - Song.show");
/// ```
///
/// Without an output path the format's clipboard text is returned in memory.
#[derive(Debug)]
pub struct PublishSpec<'a> {
    pub song: &'a Song,
    pub order: &'a [OrderItem],
    /// Target format name (e.g., "freeshow", "plain text").
    pub format: &'a str,
    /// Optional file path for writing an export.
    pub output: Option<PathBuf>,
    pub settings: FormatSettings,
}

impl<'a> PublishSpec<'a> {
    pub fn new(song: &'a Song, order: &'a [OrderItem], format: &'a str) -> Self {
        Self {
            song,
            order,
            format,
            output: None,
            settings: FormatSettings::default(),
        }
    }

    /// Sets the output file path. If provided, an export file is written.
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_settings(mut self, settings: FormatSettings) -> Self {
        self.settings = settings;
        self
    }
}

/// The output from a successful publish operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    /// Clipboard text (no output path given).
    InMemory(String),
    /// Path to the written export file.
    File(PathBuf),
}

/// Publishes a song according to the specification, using the default registry.
///
/// # Errors
///
/// Returns [`FormatError`] if:
/// - The format is not registered
/// - The format cannot export, or the output extension is not one it accepts
/// - Writing the file fails
pub async fn publish(spec: PublishSpec<'_>) -> Result<PublishArtifact, FormatError> {
    let registry = FormatRegistry::with_defaults();
    match spec.output {
        Some(path) => registry
            .export_to_file(spec.format, spec.song, spec.order, &spec.settings, path)
            .await
            .map(PublishArtifact::File),
        None => registry
            .copy_text(spec.format, Some(spec.song), spec.order, &spec.settings)
            .map(PublishArtifact::InMemory),
    }
}

/// Validate the target, render the export and write it as the whole file.
///
/// The extension is checked before anything is generated. Write failures are
/// returned as [`FormatError::Io`] with the original error inside.
pub async fn export_to_file(
    format: &dyn Format,
    song: &Song,
    order: &[OrderItem],
    settings: &FormatSettings,
    path: impl AsRef<Path>,
) -> Result<PathBuf, FormatError> {
    let path = path.as_ref();
    format.validate_file_extension(path)?;

    let contents = format.render_export(song, order, settings)?;
    tokio::fs::write(path, contents).await?;

    tracing::debug!(
        format = format.name(),
        path = %path.display(),
        "exported song {}",
        song.number
    );
    Ok(path.to_path_buf())
}

impl FormatRegistry {
    /// Export through the format registered under `format`.
    pub async fn export_to_file(
        &self,
        format: &str,
        song: &Song,
        order: &[OrderItem],
        settings: &FormatSettings,
        path: impl AsRef<Path>,
    ) -> Result<PathBuf, FormatError> {
        let fmt = self.get(format)?;
        export_to_file(fmt, song, order, settings, path).await
    }
}
