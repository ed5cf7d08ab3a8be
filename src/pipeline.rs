//! The sprite generation pipeline.
//!
//! A run generates the whole catalogue in memory, creates every output
//! directory for both sinks, and only then writes PNGs: first the archive,
//! then the game assets. A generation or directory failure aborts before any
//! file is written.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::error::Result;
use crate::export::Sink;
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};
use crate::sprites::{character, environment, monster, Catalogue, SpriteCollection};
use crate::types::Palettes;

/// Settings for one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfig {
    pub output: PathBuf,
    pub assets: PathBuf,
    pub target: Duration,
    pub palettes: Palettes,
}

impl BuildConfig {
    /// Build settings from a manifest with the standard palettes.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self {
            output: manifest.output.clone(),
            assets: manifest.assets.clone(),
            target: manifest.target(),
            palettes: Palettes::STANDARD,
        }
    }

    /// Archive first, then game assets.
    pub fn sinks(&self) -> [Sink; 2] {
        [Sink::archive(&self.output), Sink::game_assets(&self.assets)]
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::from_manifest(&Manifest::default())
    }
}

/// Run every generator and collect the results.
pub fn generate(palettes: &Palettes) -> Result<Catalogue> {
    Ok(Catalogue {
        characters: character::generate(&palettes.character)?,
        monsters: monster::generate(palettes)?,
        environment: environment::generate(palettes)?,
    })
}

/// Sprite counts and timing for a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub characters: usize,
    pub monsters: BTreeMap<String, usize>,
    pub environment: BTreeMap<String, usize>,
    pub elapsed: Duration,
}

impl RunReport {
    /// Count the sprites in a catalogue.
    pub fn new(catalogue: &Catalogue, elapsed: Duration) -> Self {
        Self {
            characters: catalogue.characters.len(),
            monsters: category_counts(&catalogue.monsters),
            environment: category_counts(&catalogue.environment),
            elapsed,
        }
    }

    pub fn monster_count(&self) -> usize {
        self.monsters.values().sum()
    }

    pub fn environment_count(&self) -> usize {
        self.environment.values().sum()
    }

    /// Total sprites generated.
    pub fn total(&self) -> usize {
        self.characters + self.monster_count() + self.environment_count()
    }

    /// Throughput, or `None` if the run took no measurable time.
    pub fn sprites_per_second(&self) -> Option<f64> {
        let secs = self.elapsed.as_secs_f64();
        (secs > 0.0).then(|| self.total() as f64 / secs)
    }

    /// Check the run against a soft time target.
    pub fn within_target(&self, target: Duration) -> bool {
        self.elapsed < target
    }
}

fn category_counts(collection: &SpriteCollection) -> BTreeMap<String, usize> {
    collection
        .iter()
        .map(|(name, set)| (name.to_string(), set.len()))
        .collect()
}

/// Generate everything, write both sinks, and report.
pub fn run(config: &BuildConfig, printer: &Printer) -> Result<RunReport> {
    let start = Instant::now();

    printer.status("Generating", "character, monster and environment sprites");
    let catalogue = generate(&config.palettes)?;
    printer.status(
        "Generated",
        &plural(catalogue.sprite_count(), "sprite", "sprites"),
    );

    let sinks = config.sinks();
    for sink in &sinks {
        sink.prepare()?;
    }

    for sink in &sinks {
        let written = sink.write(&catalogue)?;
        printer.status(
            "Writing",
            &format!(
                "{} to {} ({})",
                plural(written.len(), "sprite", "sprites"),
                printer.cyan(&display_path(&sink.root)),
                sink.label
            ),
        );
    }

    let report = RunReport::new(&catalogue, start.elapsed());
    print_report(&report, config.target, printer);

    Ok(report)
}

/// Summary lines for a finished run, as (verb, message) pairs.
pub fn report_lines(report: &RunReport, target: Duration) -> Vec<(String, String)> {
    let sprites = |n| plural(n, "sprite", "sprites");
    let mut lines = vec![("characters".to_string(), sprites(report.characters))];

    for counts in [&report.monsters, &report.environment] {
        for (category, &count) in counts {
            lines.push((category.clone(), sprites(count)));
        }
    }

    let rate = match report.sprites_per_second() {
        Some(rate) => format!("{:.1} sprites/s", rate),
        None => "- sprites/s".to_string(),
    };
    lines.push((
        "Finished".to_string(),
        format!(
            "{} in {:.2}s ({})",
            sprites(report.total()),
            report.elapsed.as_secs_f64(),
            rate
        ),
    ));

    let target_secs = target.as_secs_f64();
    if report.within_target(target) {
        lines.push(("Target".to_string(), format!("under {:.1}s", target_secs)));
    } else {
        lines.push(("Target".to_string(), format!("missed: over {:.1}s", target_secs)));
    }

    lines
}

/// Print the end-of-run summary: per-category counts, total, and the
/// time target check.
pub fn print_report(report: &RunReport, target: Duration, printer: &Printer) {
    let within = report.within_target(target);
    for (verb, message) in report_lines(report, target) {
        match verb.as_str() {
            "Finished" => printer.success(&verb, &message),
            "Target" if within => printer.success(&verb, &message),
            "Target" => printer.warning(&verb, &message),
            _ => printer.info(&verb, &message),
        }
    }
}
