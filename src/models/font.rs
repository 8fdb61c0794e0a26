use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// A local, byte-readable font resource
#[derive(Debug, Clone)]
pub enum FontSource {
    /// Font file on disk
    Path(PathBuf),
    /// Font already loaded into memory, with the file name it came from
    Memory { name: String, bytes: Arc<Vec<u8>> },
}

impl FontSource {
    /// Create an in-memory source
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        FontSource::Memory {
            name: name.into(),
            bytes: Arc::new(bytes),
        }
    }

    /// Last path component, or the in-memory name
    pub fn file_name(&self) -> String {
        match self {
            FontSource::Path(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            FontSource::Memory { name, .. } => name.clone(),
        }
    }

    /// Read the full byte content
    pub fn read(&self) -> io::Result<Arc<Vec<u8>>> {
        match self {
            FontSource::Path(path) => fs::read(path).map(Arc::new),
            FontSource::Memory { bytes, .. } => Ok(Arc::clone(bytes)),
        }
    }
}

impl From<PathBuf> for FontSource {
    fn from(path: PathBuf) -> Self {
        FontSource::Path(path)
    }
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::Path(path) => write!(f, "{}", path.display()),
            FontSource::Memory { name, .. } => write!(f, "{} (in memory)", name),
        }
    }
}

/// Names extracted from a font's binary metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontMetadata {
    /// Full font name, or the file name when the font has none
    pub display_name: String,
    /// Font family name
    pub family_name: String,
    /// Unique name used to address the font once registered
    pub postscript_name: String,
}

impl FontMetadata {
    /// Degraded metadata for a font that could not be parsed
    pub fn fallback(file_name: &str) -> Self {
        Self {
            display_name: file_name.to_string(),
            family_name: String::new(),
            postscript_name: String::new(),
        }
    }

    /// Whether the font can be referenced by name after registration
    pub fn is_addressable(&self) -> bool {
        !self.postscript_name.is_empty()
    }
}
