pub mod build;
pub mod completions;
pub mod list;
pub mod palette;

use clap::{Parser, Subcommand};

/// huffer - Procedural pixel-art sprites for Gas Huffer
#[derive(Parser, Debug)]
#[command(name = "huffer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate every sprite and write both output roots
    Build(build::BuildArgs),

    /// List the sprites a build would generate
    List(list::ListArgs),

    /// Print the colour palettes
    Palette(palette::PaletteArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
