//! Shared fixtures for integration tests.

use hymn_babel::{FormatSettings, Hymnal, OrderItem, Section, Song, SymbolLocation};
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_hymnal() -> Hymnal {
    Hymnal::load(fixture_path("hymnal.xml")).expect("fixture hymnal to load")
}

/// Song 123 from the fixture with its order sequence:
/// Verse 1, Refrain, Verse 2 (five lines), Refrain.
pub fn test_song() -> (Song, Vec<OrderItem>) {
    let hymnal = load_hymnal();
    let song = hymnal.find_song(123).expect("song 123").clone();
    let order = hymnal.ordered_sections(song.song_id);
    (song, order)
}

/// The two-section example used throughout the docs.
pub fn example_song() -> (Song, Vec<OrderItem>) {
    let song = Song::new(1, 123, "Test Song");
    let order = vec![
        OrderItem::new(
            Section::new(1, 1, "Verse 1", "This is verse 1\nSecond line of verse 1"),
            0,
        ),
        OrderItem::new(
            Section::new(1, 2, "Refrain", "This is the refrain\nSecond line of refrain"),
            1,
        ),
    ];
    (song, order)
}

pub fn symbol_settings(location: SymbolLocation) -> FormatSettings {
    FormatSettings {
        last_section_symbol: "§".to_string(),
        last_section_symbol_location: location,
        lines_per_slide: 2,
    }
}

#[test]
fn fixture_hymnal_loads() {
    let (song, order) = test_song();
    assert_eq!(song.title, "Test Song");
    assert_eq!(song.ext_song_code, "TS-123");
    assert!(song.words_license_covered);
    let names: Vec<&str> = order.iter().map(|item| item.section.name.as_str()).collect();
    assert_eq!(names, vec!["Verse 1", "Refrain", "Verse 2", "Refrain"]);
}
