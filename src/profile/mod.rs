//! Configuration profile generation

pub mod builder;
pub mod identifier;

pub use builder::{install_summary, ProfileBuilder};
