//! Sprite generators and the collections they produce.
//!
//! Each generator is a pure function returning one finished `Canvas`.
//! The per-domain `generate_*` functions gather them into named sets.

pub mod character;
pub mod environment;
pub mod monster;

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use crate::error::{HufferError, Result};
use crate::render::Canvas;

/// Side length of character and monster sprites.
pub const SPRITE_SIZE: u32 = 32;

/// Side length of environment tiles.
pub const TILE_SIZE: u32 = 16;

/// Named canvases from one generator family.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpriteSet {
    sprites: BTreeMap<String, Canvas>,
}

impl SpriteSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sprite. Names must be unique within the set.
    pub fn insert(&mut self, name: impl Into<String>, canvas: Canvas) -> Result<()> {
        match self.sprites.entry(name.into()) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(canvas);
                Ok(())
            }
            btree_map::Entry::Occupied(slot) => Err(HufferError::InvalidParameter {
                message: format!("Duplicate sprite name: {}", slot.key()),
                help: None,
            }),
        }
    }

    /// Get a sprite by name.
    pub fn get(&self, name: &str) -> Option<&Canvas> {
        self.sprites.get(name)
    }

    /// Sprite names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sprites.keys().map(|s| s.as_str())
    }

    /// Iterate over (name, canvas) pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Canvas)> {
        self.sprites.iter().map(|(name, canvas)| (name.as_str(), canvas))
    }

    /// Number of sprites.
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Check if the set has no sprites.
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

/// Sprite sets keyed by category (monster type or tile family).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpriteCollection {
    sets: BTreeMap<String, SpriteSet>,
}

impl SpriteCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category. An empty set still registers the category.
    pub fn insert(&mut self, category: impl Into<String>, set: SpriteSet) {
        self.sets.insert(category.into(), set);
    }

    /// Get a category's sprites.
    pub fn get(&self, category: &str) -> Option<&SpriteSet> {
        self.sets.get(category)
    }

    /// Category names in order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(|s| s.as_str())
    }

    /// Iterate over (category, set) pairs in category order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpriteSet)> {
        self.sets.iter().map(|(name, set)| (name.as_str(), set))
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Check if there are no categories.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Total sprites across every category.
    pub fn sprite_count(&self) -> usize {
        self.sets.values().map(SpriteSet::len).sum()
    }
}

/// Top-level output domain. Each gets its own subdirectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Domain {
    Characters,
    Monsters,
    Environment,
}

impl Domain {
    /// All domains in output order.
    pub const ALL: [Domain; 3] = [Domain::Characters, Domain::Monsters, Domain::Environment];

    /// Subdirectory name.
    pub fn dir_name(self) -> &'static str {
        match self {
            Domain::Characters => "characters",
            Domain::Monsters => "monsters",
            Domain::Environment => "environment",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// One sprite's place in the output tree.
#[derive(Debug, Clone, Copy)]
pub struct SpriteFile<'a> {
    pub domain: Domain,
    /// Category for monsters/environment, `None` for characters.
    pub category: Option<&'a str>,
    pub name: &'a str,
    pub canvas: &'a Canvas,
}

impl SpriteFile<'_> {
    /// `<name>.png` or `<category>_<name>.png`.
    pub fn file_name(&self) -> String {
        match self.category {
            Some(category) => format!("{}_{}.png", category, self.name),
            None => format!("{}.png", self.name),
        }
    }
}

/// Everything one run generates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    pub characters: SpriteSet,
    pub monsters: SpriteCollection,
    pub environment: SpriteCollection,
}

impl Catalogue {
    /// Total sprite count.
    pub fn sprite_count(&self) -> usize {
        self.characters.len() + self.monsters.sprite_count() + self.environment.sprite_count()
    }

    /// Every sprite with its domain and file name, in output order.
    pub fn files(&self) -> Vec<SpriteFile<'_>> {
        let mut files = Vec::with_capacity(self.sprite_count());

        for (name, canvas) in self.characters.iter() {
            files.push(SpriteFile {
                domain: Domain::Characters,
                category: None,
                name,
                canvas,
            });
        }

        for (domain, collection) in [
            (Domain::Monsters, &self.monsters),
            (Domain::Environment, &self.environment),
        ] {
            for (category, set) in collection.iter() {
                for (name, canvas) in set.iter() {
                    files.push(SpriteFile {
                        domain,
                        category: Some(category),
                        name,
                        canvas,
                    });
                }
            }
        }

        files
    }
}
