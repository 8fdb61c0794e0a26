//! Command-line interface over the profile builder and preview loader

mod args;

pub use args::{BuildArgs, CliArgs, Command};

use std::path::PathBuf;
use crate::error::Result;
use crate::font::inspect_all;
use crate::models::{FontSource, ProfileConfig};
use crate::preview::{PreviewLoader, ProcessFontRegistry};
use crate::profile::ProfileBuilder;
use crate::utils::write_profile;

/// Run a parsed command
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Build(args) => {
            let path = build(&args)?;
            println!("{}", path.display());
        }
        Command::Inspect { files } => inspect(files),
        Command::Preview { file } => preview(file)?,
    }
    Ok(())
}

/// Build and persist a profile, returning its path
pub fn build(args: &BuildArgs) -> Result<PathBuf> {
    let config = ProfileConfig::new(args.organization.clone(), args.identifier_prefix.clone())?;
    let sources: Vec<FontSource> = args.files.iter().cloned().map(FontSource::from).collect();
    let bytes = ProfileBuilder::new(config)?.export(&sources)?;
    write_profile(&bytes, &args.output_dir, &args.name)
}

fn inspect(files: Vec<PathBuf>) {
    let sources: Vec<FontSource> = files.into_iter().map(FontSource::from).collect();
    for (source, result) in sources.iter().zip(inspect_all(&sources)) {
        match result {
            Ok(metadata) => println!(
                "{}\n  Display:    {}\n  Family:     {}\n  PostScript: {}",
                source, metadata.display_name, metadata.family_name, metadata.postscript_name
            ),
            Err(e) => println!("{}\n  Error: {}", source, e),
        }
    }
}

fn preview(file: PathBuf) -> Result<()> {
    let loader = PreviewLoader::new(ProcessFontRegistry::global());
    let session = loader.load(&FontSource::from(file))?;
    let metadata = session.metadata();
    println!("Display:    {}", metadata.display_name);
    println!("Family:     {}", metadata.family_name);
    println!("PostScript: {}", metadata.postscript_name);

    let font = session.font().load_font()?;
    println!("Glyphs:     {}", font.glyph_count());
    session.release();
    Ok(())
}
