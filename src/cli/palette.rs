use std::io::Write;

use clap::Args;

use crate::error::{HufferError, Result};
use crate::output::{plural, Printer};
use crate::types::{PaletteEntries, Palettes};

/// Print the colour palettes
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Palette to print (e.g. "ghost", "wall"); all palettes if omitted
    pub domain: Option<String>,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let palettes = select(&Palettes::STANDARD, args.domain.as_deref())?;

    let mut stdout = std::io::stdout().lock();
    for palette in &palettes {
        printer.info(
            palette.name,
            &plural(palette.len(), "colour", "colours"),
        );
        write_entries(palette, palettes.len() > 1, &mut stdout)?;
    }

    Ok(())
}

/// Pick one palette by name, or all of them.
pub fn select(palettes: &Palettes, domain: Option<&str>) -> Result<Vec<PaletteEntries>> {
    match domain {
        None => Ok(palettes.all()),
        Some(name) => palettes.find(name).map(|p| vec![p]).ok_or_else(|| {
            let known: Vec<&str> = palettes.all().iter().map(|p| p.name).collect();
            HufferError::InvalidParameter {
                message: format!("Unknown palette '{}'", name),
                help: Some(format!("Available palettes: {}", known.join(", "))),
            }
        }),
    }
}

/// Write `$name: #RRGGBB[AA]` lines, prefixed with the palette name when
/// several palettes are printed together.
pub fn write_entries(palette: &PaletteEntries, qualified: bool, out: &mut impl Write) -> Result<()> {
    for (name, colour) in &palette.entries {
        if qualified {
            writeln!(out, "${}-{}: {}", palette.name, name, colour)?;
        } else {
            writeln!(out, "${}: {}", name, colour)?;
        }
    }
    Ok(())
}
