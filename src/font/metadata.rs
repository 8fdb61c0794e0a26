use log::{debug, warn};
use rayon::prelude::*;
use ttf_parser::{name_id, Face, PlatformId};
use crate::error::{Error, Result};
use crate::models::{FontMetadata, FontSource};

/// Windows language ID for US English
const ENGLISH_US: u16 = 0x0409;

/// Check for a TrueType, OpenType or collection header
pub fn has_font_magic(data: &[u8]) -> bool {
    matches!(
        data.get(0..4),
        Some([0x00, 0x01, 0x00, 0x00]) | Some(b"OTTO") | Some(b"true") | Some(b"ttcf")
    )
}

/// Extract metadata from font bytes
///
/// `file_name` names the source in errors and stands in for the display
/// name when the font carries no full name.
pub fn extract_metadata(data: &[u8], file_name: &str) -> Result<FontMetadata> {
    if !has_font_magic(data) {
        return Err(Error::ParseFailed {
            source_name: file_name.to_string(),
            reason: "not a TrueType or OpenType file".to_string(),
        });
    }

    let face = Face::parse(data, 0).map_err(|e| Error::ParseFailed {
        source_name: file_name.to_string(),
        reason: e.to_string(),
    })?;

    let postscript_name = find_name(&face, name_id::POST_SCRIPT_NAME).unwrap_or_default();
    let family_name = find_name(&face, name_id::TYPOGRAPHIC_FAMILY)
        .or_else(|| find_name(&face, name_id::FAMILY))
        .unwrap_or_default();
    let display_name = find_name(&face, name_id::FULL_NAME)
        .unwrap_or_else(|| file_name.to_string());

    debug!(
        "Metadata extracted from {} - Display: {}, Family: {}, PostScript: {}",
        file_name, display_name, family_name, postscript_name
    );

    Ok(FontMetadata {
        display_name,
        family_name,
        postscript_name,
    })
}

/// Read a source and extract its metadata
pub fn load_metadata(source: &FontSource) -> Result<FontMetadata> {
    let file_name = source.file_name();
    let data = source.read().map_err(|e| Error::ReadFailed {
        source_name: file_name.clone(),
        source: e,
    })?;
    extract_metadata(&data, &file_name)
}

/// Extract metadata for many sources in parallel, keeping input order
pub fn inspect_all(sources: &[FontSource]) -> Vec<Result<FontMetadata>> {
    sources
        .par_iter()
        .map(|source| {
            let result = load_metadata(source);
            if let Err(e) = &result {
                warn!("Skipping {}: {}", source, e);
            }
            result
        })
        .collect()
}

/// Find the best decodable entry for a name ID, preferring US English
fn find_name(face: &Face<'_>, id: u16) -> Option<String> {
    let mut fallback = None;

    for name in face.names() {
        if name.name_id != id {
            continue;
        }
        let value = match name.to_string() {
            Some(value) if !value.trim().is_empty() => value.trim().to_string(),
            _ => continue,
        };
        let preferred = name.platform_id == PlatformId::Unicode
            || (name.platform_id == PlatformId::Windows && name.language_id == ENGLISH_US);
        if preferred {
            return Some(value);
        }
        fallback.get_or_insert(value);
    }

    fallback
}
