//! Shared preview and copy logic
//!
//! Helpers used by the default methods of [`Format`]. Formats that need a
//! different behavior override the trait method and may still call back into
//! these functions for the parts they keep.

use crate::error::FormatError;
use crate::format::Format;
use crate::inline::{to_plain_text, Inline};
use crate::settings::FormatSettings;
use crate::song::{OrderItem, SectionKind, Song};
use std::path::Path;

/// `"{number} - {title}"`
pub fn build_song_header(song: &Song) -> String {
    format!("{} - {}", song.number, song.title)
}

/// Display name of a section: "Refrain" in any casing becomes "Chorus".
pub fn format_section_name(name: &str) -> &str {
    match SectionKind::from_name(name) {
        SectionKind::Chorus => "Chorus",
        SectionKind::Verse => name,
    }
}

/// Annotated preview of a song in order-sequence order.
///
/// Returns an empty sequence when there is no song.
pub fn format_preview(
    song: Option<&Song>,
    order: &[OrderItem],
    settings: &FormatSettings,
) -> Vec<Inline> {
    let mut inlines = Vec::new();
    let Some(song) = song else {
        return inlines;
    };

    inlines.push(Inline::bold(build_song_header(song)));
    inlines.push(Inline::LineBreak);

    let symbol = settings.last_section_symbol.as_str();
    let location = settings.last_section_symbol_location;
    let last_index = order.len().saturating_sub(1);

    for (index, item) in order.iter().enumerate() {
        let is_last = index == last_index;

        if !inlines.is_empty() {
            inlines.push(Inline::LineBreak);
        }

        inlines.push(Inline::bold(format_section_name(&item.section.name)));
        inlines.push(Inline::LineBreak);

        if is_last && location.at_start() && !symbol.is_empty() {
            inlines.push(Inline::italic(symbol));
            inlines.push(Inline::LineBreak);
        }

        inlines.push(Inline::plain(item.section.text.as_str()));

        if is_last && location.at_end() && !symbol.is_empty() {
            inlines.push(Inline::italic(symbol));
        }
    }

    inlines
}

/// Clipboard text for a preview sequence.
pub fn format_for_copy(preview: &[Inline]) -> String {
    to_plain_text(preview)
}

pub(crate) fn export_unsupported(name: &str) -> FormatError {
    FormatError::Unsupported(format!("{name} format does not support file export."))
}

/// Rejects formats without export support, then extensions outside the
/// format's declared set (compared case-insensitively).
pub fn validate_file_extension<F: Format + ?Sized>(
    format: &F,
    path: &Path,
) -> Result<(), FormatError> {
    if !format.supports_export() {
        return Err(export_unsupported(format.name()));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();

    let supported = format.file_extensions();
    if supported
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(&extension))
    {
        Ok(())
    } else {
        Err(FormatError::InvalidArgument(format!(
            "Invalid file extension. Supported extensions are: {}",
            supported.join(", ")
        )))
    }
}

/// `"{number} - {title}{extension}"` for exporting formats, otherwise the bare header.
pub fn suggested_file_name<F: Format + ?Sized>(format: &F, song: &Song) -> String {
    let header = build_song_header(song);
    match format.file_extensions().first() {
        Some(extension) if format.supports_export() => format!("{header}{extension}"),
        _ => header,
    }
}
