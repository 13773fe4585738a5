//! Format implementations
//!
//! This module contains all output formats that render a song's ordered
//! sections for preview, clipboard copy or file export.

pub mod free_show;
pub mod plain_text;
pub mod pro_presenter;

pub use free_show::FreeShowFormat;
pub use plain_text::PlainTextFormat;
pub use pro_presenter::ProPresenterFormat;
