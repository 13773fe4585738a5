//! Structural properties of generated shows.

use crate::common::{symbol_settings, test_song};
use hymn_babel::formats::free_show::show::{Item, ShowFile, Slide};
use hymn_babel::formats::FreeShowFormat;
use hymn_babel::{FormatSettings, SymbolLocation};

fn texts(item: &Item) -> Vec<&str> {
    item.lines
        .iter()
        .flat_map(|line| line.text.iter().map(|segment| segment.value.as_str()))
        .collect()
}

fn tagged(file: &ShowFile) -> Vec<&Slide> {
    file.show
        .slides
        .values()
        .filter(|slide| slide.group.is_some())
        .collect()
}

#[test]
fn exactly_one_title_slide() {
    let (song, order) = test_song();
    let file = FreeShowFormat::default().build_show(&song, &order, &FormatSettings::default());
    let titles = file
        .show
        .slides
        .values()
        .filter(|slide| slide.group.as_deref() == Some("Tag"))
        .count();
    assert_eq!(titles, 1);
}

#[test]
fn one_tagged_slide_per_order_item() {
    let (song, order) = test_song();
    let file = FreeShowFormat::default().build_show(&song, &order, &FormatSettings::default());
    let groups: Vec<&str> = tagged(&file)
        .iter()
        .skip(1)
        .filter_map(|slide| slide.group.as_deref())
        .collect();
    assert_eq!(groups, vec!["Verse", "Chorus", "Verse", "Chorus"]);
    assert!(groups.len() >= order.len());
}

#[test]
fn layout_matches_tagged_slides_exactly() {
    let (song, order) = test_song();
    let file = FreeShowFormat::default().build_show(&song, &order, &FormatSettings::default());
    let layout = file.active_layout().expect("active layout");

    for entry in &layout.slides {
        let slide = file.show.slides.get(&entry.id).expect("layout id exists");
        assert!(slide.group.is_some());
    }
    for (id, slide) in &file.show.slides {
        let listed = layout.slides.iter().any(|entry| &entry.id == id);
        assert_eq!(listed, slide.group.is_some(), "slide {id}");
    }
}

#[test]
fn long_sections_overflow_into_children() {
    let (song, order) = test_song();
    let file = FreeShowFormat::default().build_show(&song, &order, &FormatSettings::default());
    let verse_two = tagged(&file)[3];

    assert_eq!(texts(&verse_two.items[0]), vec!["Line one", "Line two"]);
    let pages: Vec<Vec<&str>> = verse_two
        .children
        .iter()
        .map(|id| texts(&file.show.slides[id].items[0]))
        .collect();
    assert_eq!(
        pages,
        vec![vec!["Line three", "Line four"], vec!["Line five"]]
    );
}

#[test]
fn crlf_bodies_split_cleanly() {
    let (song, order) = test_song();
    let file = FreeShowFormat::default().build_show(&song, &order, &FormatSettings::default());
    let verse_one = tagged(&file)[1];
    assert_eq!(
        texts(&verse_one.items[0]),
        vec!["This is verse 1", "Second line of verse 1"]
    );
}

#[test]
fn last_slot_carries_the_symbol() {
    let (song, order) = test_song();
    let file = FreeShowFormat::default().build_show(
        &song,
        &order,
        &symbol_settings(SymbolLocation::End),
    );
    let slides = tagged(&file);

    let last = slides.last().unwrap();
    assert!(last.items.len() > 1);
    let symbol = last.items.last().unwrap();
    assert_eq!(texts(symbol), vec!["§"]);
    assert_eq!(symbol.lines[0].align, "text-align: right");

    // The same Refrain section in slot two is not the last slot.
    assert_eq!(slides[2].items.len(), 1);
}

#[test]
fn larger_pages_remove_children() {
    let (song, order) = test_song();
    let settings = FormatSettings {
        lines_per_slide: 5,
        ..Default::default()
    };
    let file = FreeShowFormat::default().build_show(&song, &order, &settings);
    assert!(file.show.slides.values().all(|slide| slide.children.is_empty()));
    assert_eq!(file.show.slides.len(), order.len() + 1);
}
