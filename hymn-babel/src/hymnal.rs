//! Read-only access to a hymn database file.
//!
//! The database is an XML data packet whose rows store every value in
//! attributes:
//!
//! ```text
//! <DATAPACKET Version="2.0">
//!   <ROWDATA>
//!     <ROW>
//!       <FOLDERS><ROWFOLDERS FOLDER_ID="1" FOLDER_NAME="Hymns" .../></FOLDERS>
//!       <SONGS><ROWSONGS SONG_ID="1" SONG_NUMBER="123" SONG_TITLE="..." .../></SONGS>
//!       <SONG_SECTIONS><ROWSONG_SECTIONS SONG_ID="1" SECTION_ID="1" SECTION_NAME="Verse 1" SECTION_TEXT="..."/></SONG_SECTIONS>
//!       <SONG_SECTION_ORDER><ROWSONG_SECTION_ORDER SONG_ID="1" SECTION_ID="1" ORDER="0"/></SONG_SECTION_ORDER>
//!     </ROW>
//!   </ROWDATA>
//! </DATAPACKET>
//! ```
//!
//! Only reading is supported; [`Hymnal::ordered_sections`] is what formatters
//! consume.

use crate::error::FormatError;
use crate::song::{Folder, OrderEntry, OrderItem, Section, Song};
use roxmltree::Node;
use std::fs;
use std::path::Path;

/// In-memory contents of a hymn database.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hymnal {
    pub version: String,
    pub folders: Vec<Folder>,
    songs: Vec<Song>,
    sections: Vec<Section>,
    order: Vec<OrderEntry>,
}

impl Hymnal {
    /// Read and parse a database file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FormatError> {
        let source = fs::read_to_string(path.as_ref())?;
        Self::parse(&source)
    }

    pub fn parse(source: &str) -> Result<Self, FormatError> {
        let doc = roxmltree::Document::parse(source)
            .map_err(|e| FormatError::Parse(format!("XML parsing error: {e}")))?;

        let root = doc.root_element();
        if root.tag_name().name() != "DATAPACKET" {
            return Err(FormatError::Parse(format!(
                "Root element is <{}>, expected <DATAPACKET>",
                root.tag_name().name()
            )));
        }

        let mut hymnal = Hymnal {
            version: root.attribute("Version").unwrap_or("2.0").to_string(),
            ..Default::default()
        };

        let Some(row) = child(root, "ROWDATA").and_then(|data| child(data, "ROW")) else {
            return Ok(hymnal);
        };

        hymnal.folders = rows(row, "FOLDERS", "ROWFOLDERS")
            .map(|node| Folder {
                folder_id: int(node, "FOLDER_ID"),
                name: text(node, "FOLDER_NAME"),
                folder_type: text(node, "FOLDER_TYPE"),
                info: text(node, "FOLDER_INFO"),
                version_no: node.attribute("VERSION_NO").map(str::to_string),
            })
            .collect();

        hymnal.songs = rows(row, "SONGS", "ROWSONGS").map(parse_song).collect();

        hymnal.sections = rows(row, "SONG_SECTIONS", "ROWSONG_SECTIONS")
            .map(|node| Section {
                song_id: int(node, "SONG_ID"),
                section_id: int(node, "SECTION_ID"),
                name: text(node, "SECTION_NAME"),
                text: text(node, "SECTION_TEXT"),
                comments: text(node, "SECTION_COMMENTS"),
            })
            .collect();

        hymnal.order = rows(row, "SONG_SECTION_ORDER", "ROWSONG_SECTION_ORDER")
            .map(|node| OrderEntry {
                song_id: int(node, "SONG_ID"),
                section_id: int(node, "SECTION_ID"),
                order: int(node, "ORDER"),
            })
            .collect();

        tracing::debug!(
            songs = hymnal.songs.len(),
            sections = hymnal.sections.len(),
            "loaded hymnal"
        );

        Ok(hymnal)
    }

    /// All songs, sorted by number.
    pub fn songs(&self) -> Vec<&Song> {
        let mut songs: Vec<&Song> = self.songs.iter().collect();
        songs.sort_by_key(|song| song.number);
        songs
    }

    pub fn find_song(&self, number: i32) -> Option<&Song> {
        self.songs.iter().find(|song| song.number == number)
    }

    /// Songs whose title contains `query` (ignoring case) or whose number
    /// contains it as a substring. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Song> {
        let query = query.trim();
        if query.is_empty() {
            return self.songs();
        }
        let needle = query.to_lowercase();
        self.songs()
            .into_iter()
            .filter(|song| {
                song.title.to_lowercase().contains(&needle)
                    || song.number.to_string().contains(query)
            })
            .collect()
    }

    /// Sections of a song in file order.
    pub fn sections(&self, song_id: i32) -> Vec<&Section> {
        self.sections
            .iter()
            .filter(|section| section.song_id == song_id)
            .collect()
    }

    /// Order entries of a song, ascending by order.
    pub fn order(&self, song_id: i32) -> Vec<&OrderEntry> {
        let mut entries: Vec<&OrderEntry> = self
            .order
            .iter()
            .filter(|entry| entry.song_id == song_id)
            .collect();
        entries.sort_by_key(|entry| entry.order);
        entries
    }

    /// The playback sequence of a song: each order entry joined with its section.
    pub fn ordered_sections(&self, song_id: i32) -> Vec<OrderItem> {
        self.order(song_id)
            .into_iter()
            .filter_map(|entry| {
                let section = self.sections.iter().find(|section| {
                    section.song_id == entry.song_id && section.section_id == entry.section_id
                });
                if section.is_none() {
                    tracing::warn!(
                        song_id,
                        section_id = entry.section_id,
                        "order entry refers to a missing section"
                    );
                }
                section.map(|section| OrderItem {
                    section: section.clone(),
                    entry: *entry,
                })
            })
            .collect()
    }

    /// Id a newly added section would receive.
    pub fn next_section_id(&self) -> i32 {
        self.sections
            .iter()
            .map(|section| section.section_id)
            .max()
            .map_or(1, |max| max + 1)
    }
}

fn parse_song(node: Node) -> Song {
    Song {
        song_id: int(node, "SONG_ID"),
        folder_id: int(node, "FOLDER_ID"),
        number: int(node, "SONG_NUMBER"),
        title: text(node, "SONG_TITLE"),
        comments: text(node, "SONG_COMMENTS"),
        words_author: text(node, "WORDS_AUTHOR"),
        words_public_domain: flag(node, "WORDS_PUBLIC_DOMAIN"),
        words_copyright_info: text(node, "WORDS_COPYRIGHT_INFO"),
        words_license_covered: flag(node, "WORDS_LICENSE_COVERED"),
        words_copyright_code: int(node, "WORDS_COPYRIGHT_CODE"),
        music_author: text(node, "MUSIC_AUTHOR"),
        music_public_domain: flag(node, "MUSIC_PUBLIC_DOMAIN"),
        music_copyright_info: text(node, "MUSIC_COPYRIGHT_INFO"),
        music_license_covered: flag(node, "MUSIC_LICENSE_COVERED"),
        music_copyright_code: int(node, "MUSIC_COPYRIGHT_CODE"),
        ext_song_code: text(node, "EXT_SONG_CODE"),
    }
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.tag_name().name() == name)
}

fn rows<'a, 'input: 'a>(
    row: Node<'a, 'input>,
    table: &'a str,
    record: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    child(row, table)
        .into_iter()
        .flat_map(|node| node.children())
        .filter(move |n| n.tag_name().name() == record)
}

fn text(node: Node, name: &str) -> String {
    node.attribute(name).unwrap_or_default().to_string()
}

fn int(node: Node, name: &str) -> i32 {
    node.attribute(name)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or_default()
}

fn flag(node: Node, name: &str) -> bool {
    node.attribute(name) == Some("Y")
}
