//! FreeShow format implementation
//!
//! Exports a song as a FreeShow `.show` file: a JSON array `[showId, show]`
//! whose show object holds a title slide, one tagged slide per order item and
//! untagged continuation slides for sections longer than one page.
//!
//! # Slide Mapping
//!
//! | Song element        | FreeShow element                                   |
//! |---------------------|----------------------------------------------------|
//! | Header              | Slide with group `Tag`, one line                   |
//! | Section "Refrain"   | Slide with group `Chorus`                          |
//! | Any other section   | Slide with group `Verse`                           |
//! | Lines past page one | Child slides listed in the parent's `children`     |
//! | Last-section symbol | Extra right-aligned item on the last section's slides |
//!
//! Preview and copy use the shared text rendering.

pub mod builder;
pub mod show;

use crate::error::FormatError;
use crate::format::Format;
use crate::settings::FormatSettings;
use crate::song::{OrderItem, Song};
use crate::uid::{self, UidGenerator};
use builder::ShowBuilder;
use std::sync::Arc;

pub use show::ShowFile;

/// Format implementation for FreeShow
pub struct FreeShowFormat {
    ids: Arc<UidGenerator>,
}

impl FreeShowFormat {
    /// Use a dedicated id generator, e.g. a seeded one in tests.
    pub fn with_ids(ids: Arc<UidGenerator>) -> Self {
        FreeShowFormat { ids }
    }

    /// Build the show document without serializing it.
    pub fn build_show(
        &self,
        song: &Song,
        order: &[OrderItem],
        settings: &FormatSettings,
    ) -> ShowFile {
        ShowBuilder::new(settings, &self.ids).build(song, order)
    }
}

impl Default for FreeShowFormat {
    fn default() -> Self {
        FreeShowFormat {
            ids: uid::shared(),
        }
    }
}

impl Format for FreeShowFormat {
    fn name(&self) -> &str {
        "FreeShow"
    }

    fn description(&self) -> &str {
        "Export to FreeShow format"
    }

    fn supports_export(&self) -> bool {
        true
    }

    fn file_extensions(&self) -> &[&str] {
        &[".show"]
    }

    fn render_export(
        &self,
        song: &Song,
        order: &[OrderItem],
        settings: &FormatSettings,
    ) -> Result<String, FormatError> {
        Ok(self.build_show(song, order, settings).to_json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SymbolLocation;
    use crate::song::Section;
    use serde_json::Value;

    fn order() -> Vec<OrderItem> {
        vec![
            OrderItem::new(
                Section::new(1, 1, "Verse 1", "This is verse 1\nSecond line of verse 1"),
                0,
            ),
            OrderItem::new(
                Section::new(1, 2, "Refrain", "This is the refrain\nSecond line of refrain"),
                1,
            ),
        ]
    }

    #[test]
    fn declares_show_export() {
        let format = FreeShowFormat::default();
        assert_eq!(format.name(), "FreeShow");
        assert_eq!(format.description(), "Export to FreeShow format");
        assert!(format.supports_export());
        assert!(format.supports_copy());
        assert_eq!(format.file_extensions(), &[".show"]);
        assert_eq!(
            format.suggested_file_name(&Song::new(1, 123, "Test Song")),
            "123 - Test Song.show"
        );
    }

    #[test]
    fn rendered_export_is_a_two_element_array() {
        let format = FreeShowFormat::with_ids(Arc::new(UidGenerator::seeded(3)));
        let settings = FormatSettings {
            last_section_symbol_location: SymbolLocation::Both,
            ..Default::default()
        };
        let json = format
            .render_export(&Song::new(1, 123, "Test Song"), &order(), &settings)
            .unwrap();

        let value: Value = serde_json::from_str(&json).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert!(array[0].is_string());

        let show = &array[1];
        assert_eq!(show["name"], "123 - Test Song");
        assert_eq!(show["category"], "song");
        assert_eq!(show["private"], false);
        assert!(show["settings"]["activeLayout"].is_string());
        assert_eq!(show["timestamps"]["created"], show["timestamps"]["used"]);
        assert!(show["quickAccess"].is_object());
        assert!(show["media"].is_object());
        assert!(!json.contains("\"children\":[]"));
        assert!(!json.contains("\"children\":null"));
    }

    #[test]
    fn rendered_export_round_trips_through_show_file() {
        let format = FreeShowFormat::default();
        let json = format
            .render_export(
                &Song::new(1, 9, "Nine"),
                &order(),
                &FormatSettings::default(),
            )
            .unwrap();
        let file = ShowFile::from_json(&json).unwrap();
        assert_eq!(file.show.slides.len(), 3);
        assert_eq!(file.active_layout().unwrap().slides.len(), 3);
    }

    #[test]
    fn default_format_draws_ids_from_the_shared_generator() {
        assert!(Arc::ptr_eq(&FreeShowFormat::default().ids, &uid::shared()));
    }
}
