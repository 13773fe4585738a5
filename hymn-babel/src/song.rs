//! Hymn data model
//!
//! These types mirror the rows of the hymn database. Formatters treat them as
//! read-only input: a [`Song`] plus the ordered sequence of [`OrderItem`]s that
//! defines the playback order of its sections.

/// A song row: identity, display number, title and licensing metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Song {
    pub song_id: i32,
    pub folder_id: i32,
    pub number: i32,
    pub title: String,
    pub comments: String,
    pub words_author: String,
    pub words_public_domain: bool,
    pub words_copyright_info: String,
    pub words_license_covered: bool,
    pub words_copyright_code: i32,
    pub music_author: String,
    pub music_public_domain: bool,
    pub music_copyright_info: String,
    pub music_license_covered: bool,
    pub music_copyright_code: i32,
    pub ext_song_code: String,
}

impl Song {
    /// Convenience constructor for the fields formatters actually read.
    pub fn new(song_id: i32, number: i32, title: impl Into<String>) -> Self {
        Song {
            song_id,
            number,
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Kind of a section, inferred from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Verse,
    Chorus,
}

impl SectionKind {
    /// "Refrain" (any casing) is a chorus; every other name is a verse.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("refrain") {
            SectionKind::Chorus
        } else {
            SectionKind::Verse
        }
    }

    /// Group tag used by slide-deck exports.
    pub fn tag(self) -> &'static str {
        match self {
            SectionKind::Verse => "Verse",
            SectionKind::Chorus => "Chorus",
        }
    }
}

/// A lyric section of a song ("Verse 1", "Refrain", ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub song_id: i32,
    pub section_id: i32,
    pub name: String,
    pub text: String,
    pub comments: String,
}

impl Section {
    pub fn new(
        song_id: i32,
        section_id: i32,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Section {
            song_id,
            section_id,
            name: name.into(),
            text: text.into(),
            comments: String::new(),
        }
    }

    pub fn kind(&self) -> SectionKind {
        SectionKind::from_name(&self.name)
    }

    /// Non-empty body lines, accepting both `\n` and `\r\n` separators.
    pub fn lines(&self) -> Vec<&str> {
        self.text.lines().filter(|line| !line.is_empty()).collect()
    }
}

/// One slot of a song's section order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderEntry {
    pub song_id: i32,
    pub section_id: i32,
    pub order: i32,
}

/// A section paired with the order slot it fills.
///
/// The same section may fill several slots; positional comparisons over a
/// slice of `OrderItem`s are the only notion of "last" formatters use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub section: Section,
    pub entry: OrderEntry,
}

impl OrderItem {
    pub fn new(section: Section, order: i32) -> Self {
        let entry = OrderEntry {
            song_id: section.song_id,
            section_id: section.section_id,
            order,
        };
        OrderItem { section, entry }
    }
}

/// A folder row grouping songs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Folder {
    pub folder_id: i32,
    pub name: String,
    pub folder_type: String,
    pub info: String,
    pub version_no: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refrain_is_chorus_in_any_casing() {
        assert_eq!(SectionKind::from_name("Refrain"), SectionKind::Chorus);
        assert_eq!(SectionKind::from_name("REFRAIN"), SectionKind::Chorus);
        assert_eq!(SectionKind::from_name("refrain"), SectionKind::Chorus);
        assert_eq!(SectionKind::from_name("Verse 1"), SectionKind::Verse);
        assert_eq!(SectionKind::from_name("Refrain 2"), SectionKind::Verse);
    }

    #[test]
    fn lines_skip_blank_entries_and_handle_crlf() {
        let section = Section::new(1, 1, "Verse 1", "one\r\ntwo\n\nthree\n");
        assert_eq!(section.lines(), vec!["one", "two", "three"]);
    }

    #[test]
    fn order_item_copies_section_identity() {
        let item = OrderItem::new(Section::new(7, 3, "Refrain", ""), 2);
        assert_eq!(item.entry.song_id, 7);
        assert_eq!(item.entry.section_id, 3);
        assert_eq!(item.entry.order, 2);
    }
}
