//! Output formats for hymn lyrics
//!
//!     This crate turns a song and the ordered sequence of its sections into the
//!     representations a worship team needs: an annotated on-screen preview, plain
//!     clipboard text, and slide-deck files for presentation software.
//!
//!     This is a pure lib, that is, it powers the hymn CLI but is shell agnostic: no
//!     code here prints, reads env vars or loads settings files. Settings are passed
//!     into every call.
//!
//! Architecture
//!
//!     Every output format implements the [`Format`] trait. The trait's default
//!     methods delegate to the shared helpers in ./base.rs (song header, section
//!     name normalization, preview, copy, extension checks), so a preview-only
//!     format is little more than a name. Formats that export override the
//!     capability flags and `render_export`.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── base.rs                 # Shared preview/copy/export helpers
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── publish.rs              # Async export to files
//!     ├── song.rs                 # Song, Section, OrderItem
//!     ├── hymnal.rs               # Read-only hymn database loader
//!     ├── settings.rs             # FormatSettings
//!     ├── inline.rs               # Styled inline sequences
//!     ├── uid.rs                  # Short hex id generator
//!     └── formats
//!         ├── plain_text.rs
//!         ├── pro_presenter.rs    # Placeholder, export unsupported
//!         └── free_show           # FreeShow .show export
//!
//! Core Algorithm
//!
//!     The FreeShow exporter (./formats/free_show/builder.rs) is where the work is:
//!     it paginates section bodies into slides, hangs overflow pages off their
//!     section slide as children, decorates the last section with the configured
//!     symbol and builds the playback layout from the tagged slides only.
//!
//! Ordering
//!
//!     "Last section" always means the last position of the order sequence. A
//!     section that is reused in several order slots is only decorated in the
//!     final slot.

pub mod base;
pub mod error;
pub mod format;
pub mod formats;
pub mod hymnal;
pub mod inline;
pub mod publish;
pub mod registry;
pub mod settings;
pub mod song;
pub mod uid;

pub use error::FormatError;
pub use format::Format;
pub use hymnal::Hymnal;
pub use inline::{Inline, RunStyle};
pub use registry::FormatRegistry;
pub use settings::{FormatSettings, SymbolLocation};
pub use song::{OrderEntry, OrderItem, Section, SectionKind, Song};
