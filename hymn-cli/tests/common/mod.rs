use std::path::PathBuf;

pub fn fixture_hymnal() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("hymn-babel")
        .join("tests")
        .join("fixtures")
        .join("hymnal.xml")
}
