use clap::Parser;
use huffer::cli::{Cli, Commands};
use huffer::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => huffer::cli::build::run(args, &printer)?,
        Commands::List(args) => huffer::cli::list::run(args, &printer)?,
        Commands::Palette(args) => huffer::cli::palette::run(args, &printer)?,
        Commands::Completions(args) => huffer::cli::completions::run(args)?,
    }

    Ok(())
}
