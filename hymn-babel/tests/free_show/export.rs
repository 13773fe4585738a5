//! File export tests for FreeShow (song → .show file).

use crate::common::{example_song, symbol_settings, test_song};
use hymn_babel::formats::free_show::show::ShowFile;
use hymn_babel::formats::FreeShowFormat;
use hymn_babel::publish::export_to_file;
use hymn_babel::{FormatError, FormatSettings, SymbolLocation};
use regex::Regex;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

#[tokio::test]
async fn export_writes_id_and_show_array() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("123 - Test Song.show");
    let (song, order) = example_song();

    let written = export_to_file(
        &FreeShowFormat::default(),
        &song,
        &order,
        &symbol_settings(SymbolLocation::Start),
        &path,
    )
    .await
    .expect("export");
    assert_eq!(written, path);

    let contents = fs::read_to_string(&path).unwrap();
    let value: Value = serde_json::from_str(&contents).unwrap();
    let array = value.as_array().expect("top-level array");
    assert_eq!(array.len(), 2);

    let id = Regex::new("^[0-9a-f]{11}$").unwrap();
    assert!(id.is_match(array[0].as_str().unwrap()));

    let show = &array[1];
    assert_eq!(show["name"], "123 - Test Song");
    assert_eq!(show["settings"]["template"], "default");

    let color = Regex::new("^#[0-9A-F]{6}$").unwrap();
    for (key, slide) in show["slides"].as_object().unwrap() {
        assert!(id.is_match(key));
        if let Some(value) = slide["color"].as_str() {
            assert!(color.is_match(value));
        }
        if let Some(children) = slide.get("children") {
            assert!(!children.as_array().unwrap().is_empty());
        }
    }
}

#[tokio::test]
async fn uppercase_extension_is_accepted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("song.SHOW");
    let (song, order) = example_song();
    export_to_file(
        &FreeShowFormat::default(),
        &song,
        &order,
        &FormatSettings::default(),
        &path,
    )
    .await
    .expect("export");
    assert!(path.exists());
}

#[tokio::test]
async fn wrong_extension_is_an_invalid_argument() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("song.txt");
    let (song, order) = example_song();
    let err = export_to_file(
        &FreeShowFormat::default(),
        &song,
        &order,
        &FormatSettings::default(),
        &path,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, FormatError::InvalidArgument(_)));
    assert_eq!(
        err.to_string(),
        "Invalid file extension. Supported extensions are: .show"
    );
    assert!(!path.exists());
}

#[tokio::test]
async fn repeated_exports_differ_only_in_ids_and_colors() {
    let dir = tempdir().unwrap();
    let (song, order) = test_song();
    let settings = symbol_settings(SymbolLocation::Both);
    let format = FreeShowFormat::default();

    let mut files = Vec::new();
    for name in ["first.show", "second.show"] {
        let path = dir.path().join(name);
        export_to_file(&format, &song, &order, &settings, &path)
            .await
            .expect("export");
        files.push(ShowFile::from_json(&fs::read_to_string(path).unwrap()).unwrap());
    }

    let texts = |file: &ShowFile| -> Vec<String> {
        file.show
            .slides
            .values()
            .flat_map(|slide| slide.items.iter())
            .flat_map(|item| item.lines.iter())
            .flat_map(|line| line.text.iter())
            .map(|segment| segment.value.clone())
            .collect()
    };

    assert_ne!(files[0].id, files[1].id);
    assert_eq!(files[0].show.slides.len(), files[1].show.slides.len());
    assert_eq!(texts(&files[0]), texts(&files[1]));
}
