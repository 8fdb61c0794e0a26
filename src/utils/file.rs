use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, info};
use crate::error::Result;

/// File extension of configuration profiles
pub const PROFILE_EXTENSION: &str = "mobileconfig";

/// Create a directory if it doesn't exist
pub fn ensure_directory_exists(dir: &Path) -> Result<()> {
    if !dir.exists() {
        debug!("Directory {} does not exist. Creating it now.", dir.display());
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Clean a name for use as a file stem
pub fn clean_file_stem(name: &str) -> String {
    let invalid_chars = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];
    let mut cleaned = name.to_string();

    for c in invalid_chars {
        cleaned = cleaned.replace(c, "_");
    }

    // Leading dots would hide the file
    cleaned = cleaned.trim().trim_matches('.').to_string();

    if cleaned.is_empty() {
        cleaned = "Fonts".to_string();
    }

    cleaned
}

/// Persist serialized profile bytes as `<dir>/<stem>.mobileconfig`
///
/// An existing file with the same name is replaced.
pub fn write_profile(bytes: &[u8], dir: &Path, stem: &str) -> Result<PathBuf> {
    ensure_directory_exists(dir)?;
    let path = dir.join(format!("{}.{}", clean_file_stem(stem), PROFILE_EXTENSION));
    fs::write(&path, bytes)?;
    info!("Wrote profile to {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}
