use std::io;
use thiserror::Error;

/// Error type for FontProf operations
#[derive(Debug, Error)]
pub enum Error {
    /// A profile was requested for zero fonts
    #[error("Cannot build a profile from an empty font list")]
    EmptySourceList,
    /// The font source could not be read
    #[error("Failed to read font '{source_name}': {source}")]
    ReadFailed {
        source_name: String,
        #[source]
        source: io::Error,
    },
    /// The bytes are not a recognizable font
    #[error("Failed to parse font '{source_name}': {reason}")]
    ParseFailed { source_name: String, reason: String },
    /// The profile could not be encoded as a property list
    #[error("Failed to serialize profile: {0}")]
    SerializationFailed(String),
    /// The font could neither be registered nor referenced by name
    #[error("Failed to register font '{font_name}': {reason}")]
    RegistrationFailed {
        /// PostScript name, or the file name when the font has none
        font_name: String,
        reason: String,
    },
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
    /// IO errors outside of font reads (e.g. writing the profile)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<plist::Error> for Error {
    fn from(err: plist::Error) -> Self {
        Error::SerializationFailed(err.to_string())
    }
}

/// Result type alias for FontProf operations
pub type Result<T> = std::result::Result<T, Error>;
