//! Preview and copy tests for the text formats.

use crate::common::{example_song, load_hymnal, symbol_settings, test_song};
use hymn_babel::base::build_song_header;
use hymn_babel::format::Format;
use hymn_babel::formats::{PlainTextFormat, ProPresenterFormat};
use hymn_babel::{FormatSettings, Inline, SymbolLocation};
use insta::assert_snapshot;

#[test]
fn copy_of_example_song_with_symbol_at_both_ends() {
    let (song, order) = example_song();
    let text =
        PlainTextFormat.format_for_copy(Some(&song), &order, &symbol_settings(SymbolLocation::Both));

    assert!(text.contains("123 - Test Song"));
    assert!(text.contains("Verse 1"));
    assert!(text.contains("This is verse 1"));
    assert!(text.contains("Chorus"));
    assert!(text.contains("This is the refrain"));
    assert!(text.ends_with('§'));

    assert_snapshot!(text, @r"
    123 - Test Song

    Verse 1
    This is verse 1
    Second line of verse 1
    Chorus
    §
    This is the refrain
    Second line of refrain§
    ");
}

#[test]
fn copy_without_symbol() {
    let (song, order) = example_song();
    let text = PlainTextFormat.format_for_copy(Some(&song), &order, &FormatSettings::default());
    assert!(!text.contains('Ω'));
    assert!(text.ends_with("Second line of refrain"));
}

#[test]
fn copy_of_fixture_song_contains_every_slot() {
    let (song, order) = test_song();
    let text = PlainTextFormat.format_for_copy(Some(&song), &order, &FormatSettings::default());

    assert!(text.starts_with(&build_song_header(&song)));
    assert_eq!(text.matches("Chorus").count(), 2);
    assert!(text.contains("Verse 2"));
    assert!(text.contains("Line five"));
    assert!(!text.contains("Refrain"));
}

#[test]
fn preview_marks_only_the_final_slot() {
    let (song, order) = test_song();
    let preview =
        PlainTextFormat.format_preview(Some(&song), &order, &symbol_settings(SymbolLocation::Start));
    let symbols = preview
        .iter()
        .filter(|inline| **inline == Inline::italic("§"))
        .count();
    assert_eq!(symbols, 1);
}

#[test]
fn placeholder_format_previews_like_plain_text() {
    let hymnal = load_hymnal();
    let song = hymnal.find_song(45).unwrap();
    let order = hymnal.ordered_sections(song.song_id);
    let settings = FormatSettings::default();

    assert_eq!(
        ProPresenterFormat.format_for_copy(Some(song), &order, &settings),
        PlainTextFormat.format_for_copy(Some(song), &order, &settings)
    );
}

#[test]
fn copy_with_empty_order_is_just_the_header() {
    let (song, _) = example_song();
    let text = PlainTextFormat.format_for_copy(Some(&song), &[], &FormatSettings::default());
    assert_eq!(text, "123 - Test Song");
}
