//! Data model shared by the profile builder and the preview loader

pub mod config;
pub mod font;
pub mod profile;

pub use config::ProfileConfig;
pub use font::{FontMetadata, FontSource};
pub use profile::{ConfigurationProfile, FontPayload};
