use std::path::PathBuf;
use clap::{Args, Parser, Subcommand};
use crate::models::config::{DEFAULT_IDENTIFIER_PREFIX, DEFAULT_ORGANIZATION};

/// FontProf command-line arguments
///
/// Examples:
///   fontprof build Foo.ttf Bar.otf -o ~/Desktop     # Write Fonts.mobileconfig
///   fontprof inspect ~/Fonts/*.otf                  # Print font names
///   fontprof preview Foo.ttf                        # Register for this process only
#[derive(Parser, Debug)]
#[clap(
    name = "fontprof",
    version,
    about = "Package fonts into configuration profiles and preview them"
)]
pub struct CliArgs {
    /// Enable debug output
    #[clap(long, global = true)]
    pub debug: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a .mobileconfig profile installing the given fonts
    Build(BuildArgs),
    /// Print names extracted from each font
    Inspect {
        /// Font files (OTF/TTF)
        #[clap(required = true)]
        files: Vec<PathBuf>,
    },
    /// Register a font for this process and print its metadata
    Preview {
        /// Font file (OTF/TTF)
        file: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Font files (OTF/TTF), in installation order
    #[clap(required = true)]
    pub files: Vec<PathBuf>,

    /// Directory the profile is written to
    #[clap(long, short = 'o', default_value = ".")]
    pub output_dir: PathBuf,

    /// File name of the profile, without extension
    #[clap(long, default_value = "Fonts")]
    pub name: String,

    /// Value of PayloadOrganization
    #[clap(long, default_value = DEFAULT_ORGANIZATION)]
    pub organization: String,

    /// Reverse-DNS prefix for payload identifiers
    #[clap(long, default_value = DEFAULT_IDENTIFIER_PREFIX)]
    pub identifier_prefix: String,
}
