//! List command implementation.
//!
//! Generates the catalogue in memory and prints an inventory without
//! writing any files.

use std::io::Write;

use clap::Args;
use serde::Serialize;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::pipeline::generate;
use crate::sprites::{Catalogue, SpriteCollection};
use crate::types::Palettes;

/// List the sprites a build would generate
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print JSON to stdout instead of a status listing
    #[arg(long)]
    pub json: bool,
}

/// Machine-readable inventory.
#[derive(Debug, Serialize)]
pub struct Inventory {
    pub total: usize,
    pub sprites: Vec<InventoryEntry>,
}

/// One generated sprite.
#[derive(Debug, Serialize)]
pub struct InventoryEntry {
    pub domain: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub name: String,
    /// Path relative to a sink root.
    pub file: String,
    pub width: u32,
    pub height: u32,
}

impl Inventory {
    pub fn from_catalogue(catalogue: &Catalogue) -> Self {
        let sprites = catalogue
            .files()
            .into_iter()
            .map(|file| InventoryEntry {
                domain: file.domain.dir_name(),
                category: file.category.map(str::to_string),
                name: file.name.to_string(),
                file: format!("{}/{}", file.domain.dir_name(), file.file_name()),
                width: file.canvas.width(),
                height: file.canvas.height(),
            })
            .collect();

        Self {
            total: catalogue.sprite_count(),
            sprites,
        }
    }
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let catalogue = generate(&Palettes::STANDARD)?;

    if args.json {
        let inventory = Inventory::from_catalogue(&catalogue);
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &inventory).map_err(std::io::Error::from)?;
        writeln!(stdout)?;
    } else {
        print_inventory(&catalogue, printer);
    }

    Ok(())
}

fn print_inventory(catalogue: &Catalogue, printer: &Printer) {
    let names: Vec<&str> = catalogue.characters.names().collect();
    printer.info("characters", &names.join(", "));

    print_collection(&catalogue.monsters, printer);
    print_collection(&catalogue.environment, printer);

    printer.success(
        "Total",
        &plural(catalogue.sprite_count(), "sprite", "sprites"),
    );
}

fn print_collection(collection: &SpriteCollection, printer: &Printer) {
    for (category, set) in collection.iter() {
        if set.is_empty() {
            printer.info(category, &printer.dim("(empty)"));
        } else {
            let names: Vec<&str> = set.names().collect();
            printer.info(category, &names.join(", "));
        }
    }
}
