//! Font metadata extraction

pub mod metadata;

#[cfg(test)]
pub(crate) mod test_font;

pub use metadata::{extract_metadata, has_font_magic, inspect_all, load_metadata};
