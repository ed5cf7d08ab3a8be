//! PNG sinks.
//!
//! A sink is one output root holding a `characters/`, `monsters/` and
//! `environment/` subdirectory. The archive sink keeps default PNG
//! encoding; the game-asset sink writes the same pixels with maximum
//! compression.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HufferError, Result};
use crate::render::{write_png, PngCompression};
use crate::sprites::{Catalogue, Domain};

/// One output root and how to encode into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sink {
    /// Short label for status output ("archive", "assets").
    pub label: &'static str,
    pub root: PathBuf,
    pub compression: PngCompression,
}

impl Sink {
    /// The archive copy under `root`.
    pub fn archive(root: impl Into<PathBuf>) -> Self {
        Self {
            label: "archive",
            root: root.into(),
            compression: PngCompression::Standard,
        }
    }

    /// The game-asset copy under `root`, with optimized PNGs.
    pub fn game_assets(root: impl Into<PathBuf>) -> Self {
        Self {
            label: "assets",
            root: root.into(),
            compression: PngCompression::Optimized,
        }
    }

    /// Directory for one domain.
    pub fn domain_dir(&self, domain: Domain) -> PathBuf {
        self.root.join(domain.dir_name())
    }

    /// Create the root and its domain subdirectories. Idempotent.
    pub fn prepare(&self) -> Result<()> {
        for domain in Domain::ALL {
            create_dir(&self.domain_dir(domain))?;
        }
        Ok(())
    }

    /// Write every sprite in the catalogue. Returns the paths written.
    ///
    /// Stops at the first failure.
    pub fn write(&self, catalogue: &Catalogue) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(catalogue.sprite_count());

        for file in catalogue.files() {
            let path = self.domain_dir(file.domain).join(file.file_name());
            write_png(file.canvas, &path, self.compression)?;
            written.push(path);
        }

        Ok(written)
    }
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| HufferError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })
}
