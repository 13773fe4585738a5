//! Shared configuration loader for the hymn toolchain.
//!
//! `defaults/hymn.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`HymnConfig`].
//! [`SettingsStore`] remembers how it was loaded so exports can re-read the
//! files right before they run.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat};
use hymn_babel::{FormatSettings, SymbolLocation};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use config::{ConfigError, ValueKind};

const DEFAULT_TOML: &str = include_str!("../defaults/hymn.default.toml");

/// Top-level configuration consumed by hymn applications.
#[derive(Debug, Clone, Deserialize)]
pub struct HymnConfig {
    pub last_section: LastSectionConfig,
    pub slides: SlidesConfig,
    pub preview: PreviewConfig,
}

/// Marker for the final section of a song.
#[derive(Debug, Clone, Deserialize)]
pub struct LastSectionConfig {
    pub symbol: String,
    pub location: SymbolLocation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlidesConfig {
    pub lines_per_slide: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PreviewConfig {
    pub format: String,
}

impl HymnConfig {
    pub fn format_settings(&self) -> FormatSettings {
        FormatSettings::from(self)
    }
}

impl From<&HymnConfig> for FormatSettings {
    fn from(config: &HymnConfig) -> Self {
        FormatSettings {
            last_section_symbol: config.last_section.symbol.clone(),
            last_section_symbol_location: config.last_section.location,
            lines_per_slide: config.slides.lines_per_slide,
        }
    }
}

impl From<HymnConfig> for FormatSettings {
    fn from(config: HymnConfig) -> Self {
        FormatSettings {
            last_section_symbol: config.last_section.symbol,
            last_section_symbol_location: config.last_section.location,
            lines_per_slide: config.slides.lines_per_slide,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<HymnConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<HymnConfig, ConfigError> {
    Loader::new().build()
}

/// A file layered over the defaults by a [`SettingsStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    OptionalFile(PathBuf),
}

/// Loaded configuration plus the recipe used to load it.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    sources: Vec<Source>,
    overrides: Vec<(String, ValueKind)>,
    current: HymnConfig,
}

impl SettingsStore {
    /// Load the defaults, then `sources` in order, then `overrides`.
    pub fn open(
        sources: Vec<Source>,
        overrides: Vec<(String, ValueKind)>,
    ) -> Result<Self, ConfigError> {
        let current = Self::load(&sources, &overrides)?;
        Ok(SettingsStore {
            sources,
            overrides,
            current,
        })
    }

    fn load(sources: &[Source], overrides: &[(String, ValueKind)]) -> Result<HymnConfig, ConfigError> {
        let mut loader = Loader::new();
        for source in sources {
            loader = match source {
                Source::File(path) => loader.with_file(path),
                Source::OptionalFile(path) => loader.with_optional_file(path),
            };
        }
        for (key, value) in overrides {
            loader = loader.set_override(key, value.clone())?;
        }
        loader.build()
    }

    pub fn config(&self) -> &HymnConfig {
        &self.current
    }

    /// Formatter settings from the last successful load.
    pub fn settings(&self) -> FormatSettings {
        self.current.format_settings()
    }

    /// Re-read every source. On failure the previous values are kept.
    pub fn reload(&mut self) -> Result<FormatSettings, ConfigError> {
        let fresh = Self::load(&self.sources, &self.overrides)?;
        tracing::debug!(
            sources = self.sources.len(),
            overrides = self.overrides.len(),
            lines_per_slide = fresh.slides.lines_per_slide,
            "reloaded settings"
        );
        self.current = fresh;
        Ok(self.settings())
    }
}
