//! Shared fixtures for integration tests
#![allow(dead_code)]

use std::path::PathBuf;

#[path = "../../src/font/test_font.rs"]
mod test_font;

pub use test_font::{build_font, TestFont};

/// PostScript name of the checked-in DejaVu fixture
pub const FIXTURE_POSTSCRIPT_NAME: &str = "DejaVuSansMono-Oblique";

/// Real font that font-kit can load
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("DejaVuSansMono-Oblique.ttf")
}

pub fn fixture_source() -> fontprof::FontSource {
    fontprof::FontSource::from(fixture_path())
}

pub fn font_source(file: &str, family: &str, style: &str, postscript: &str) -> fontprof::FontSource {
    fontprof::FontSource::from_bytes(file, build_font(&TestFont::new(family, style, postscript)))
}
