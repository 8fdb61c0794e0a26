//! FontProf packages font files into `.mobileconfig` configuration profiles
//! and loads them into short-lived preview sessions.

pub mod error;
pub mod cli;
pub mod font;
pub mod models;
pub mod preview;
pub mod profile;
pub mod utils;

pub use error::{Error, Result};
pub use models::{ConfigurationProfile, FontMetadata, FontPayload, FontSource, ProfileConfig};
pub use preview::{FontRegistry, PreviewLoader, PreviewSession, ProcessFontRegistry};
pub use profile::ProfileBuilder;
