//! Haunted manor environment tiles.
//!
//! All tiles are 16x16 and fully opaque. Textures come from modulo banding
//! and checkerboards, so every tile is deterministic and seamless enough to
//! repeat across a room.

use std::fmt;

use crate::error::{HufferError, Result};
use crate::render::primitives::{checker, on_period, paint, Region};
use crate::render::Canvas;
use crate::types::{FloorPalette, Palettes, WallPalette};

use super::{SpriteCollection, SpriteSet, TILE_SIZE};

/// Environment sprite categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvironmentCategory {
    Floors,
    Walls,
    Furniture,
    Interactive,
    Decorative,
}

impl EnvironmentCategory {
    pub const ALL: [EnvironmentCategory; 5] = [
        EnvironmentCategory::Floors,
        EnvironmentCategory::Walls,
        EnvironmentCategory::Furniture,
        EnvironmentCategory::Interactive,
        EnvironmentCategory::Decorative,
    ];

    /// Key used in the sprite collection and in file names.
    pub fn name(self) -> &'static str {
        match self {
            EnvironmentCategory::Floors => "floors",
            EnvironmentCategory::Walls => "walls",
            EnvironmentCategory::Furniture => "furniture",
            EnvironmentCategory::Interactive => "interactive",
            EnvironmentCategory::Decorative => "decorative",
        }
    }

    /// Generate this category's tiles.
    ///
    /// Furniture, interactive objects and decorations have no artwork yet
    /// and yield an empty set.
    pub fn generate(self, palettes: &Palettes) -> Result<SpriteSet> {
        match self {
            EnvironmentCategory::Floors => generate_floors(&palettes.floor),
            EnvironmentCategory::Walls => generate_walls(&palettes.wall),
            EnvironmentCategory::Furniture
            | EnvironmentCategory::Interactive
            | EnvironmentCategory::Decorative => Ok(SpriteSet::new()),
        }
    }
}

impl fmt::Display for EnvironmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Generate every environment category, empty ones included.
pub fn generate(palettes: &Palettes) -> Result<SpriteCollection> {
    let mut environment = SpriteCollection::new();
    for category in EnvironmentCategory::ALL {
        environment.insert(category.name(), category.generate(palettes)?);
    }
    Ok(environment)
}

fn whole_tile() -> Region {
    Region::full(TILE_SIZE, TILE_SIZE)
}

fn check_variation(tile: &str, variation: u32) -> Result<()> {
    if variation > 1 {
        return Err(HufferError::InvalidParameter {
            message: format!("Unknown {} variation: {}", tile, variation),
            help: Some("Use variation 0 or 1".to_string()),
        });
    }
    Ok(())
}

// -- Floors --

/// Wood planks, stone and carpet, two variants each.
pub fn generate_floors(palette: &FloorPalette) -> Result<SpriteSet> {
    let mut tiles = SpriteSet::new();
    tiles.insert("wood_plank", wood_plank_tile(palette, 0)?)?;
    tiles.insert("wood_plank_alt", wood_plank_tile(palette, 1)?)?;
    tiles.insert("stone_tile", stone_tile(palette, 0)?)?;
    tiles.insert("stone_tile_alt", stone_tile(palette, 1)?)?;
    tiles.insert("carpet_red", carpet_tile(palette, false)?)?;
    tiles.insert("carpet_pattern", carpet_tile(palette, true)?)?;
    Ok(tiles)
}

/// Horizontal planks four rows tall with grain marks every third column.
///
/// Variation 1 shifts the planks down by two rows.
pub fn wood_plank_tile(palette: &FloorPalette, variation: u32) -> Result<Canvas> {
    check_variation("wood plank", variation)?;
    let mut canvas = Canvas::square(TILE_SIZE)?;
    let shift = variation as i32 * 2;

    paint(&mut canvas, whole_tile(), |x, y| {
        let plank = if ((y + shift) / 4) % 2 == 0 {
            palette.wood_dark
        } else {
            palette.wood_light
        };
        if x % 3 == 0 && y % 4 != 0 {
            Some(palette.wood_outline)
        } else {
            Some(plank)
        }
    });

    // Gaps between planks
    paint(&mut canvas, whole_tile(), |_, y| {
        on_period(y, 4, 1).then_some(palette.wood_outline)
    });

    Ok(canvas)
}

/// Stone flag with a dark border.
///
/// Variation 0 is one large stone flecked on diagonals; variation 1 is four
/// smaller stones with a dotted texture on alternate quadrants.
pub fn stone_tile(palette: &FloorPalette, variation: u32) -> Result<Canvas> {
    check_variation("stone tile", variation)?;
    let mut canvas = Canvas::square(TILE_SIZE)?;

    canvas.fill_rect(0, 0, 15, 15, palette.stone_dark);

    if variation == 0 {
        paint(&mut canvas, Region::new(1, 1, 14, 14), |x, y| {
            on_period(x + y, 3, 0).then_some(palette.stone_light)
        });
    } else {
        paint(&mut canvas, whole_tile(), |x, y| {
            (checker(x, y, 8) && on_period(x + y, 2, 0)).then_some(palette.stone_light)
        });
    }

    canvas.fill_rect(0, 0, 15, 0, palette.wood_outline);
    canvas.fill_rect(0, 15, 15, 15, palette.wood_outline);
    canvas.fill_rect(0, 0, 0, 15, palette.wood_outline);
    canvas.fill_rect(15, 0, 15, 15, palette.wood_outline);

    Ok(canvas)
}

/// Plain red carpet, or with a lighter diagonal lattice.
pub fn carpet_tile(palette: &FloorPalette, patterned: bool) -> Result<Canvas> {
    let mut canvas = Canvas::square(TILE_SIZE)?;
    canvas.fill_rect(0, 0, 15, 15, palette.carpet_red);

    if patterned {
        paint(&mut canvas, whole_tile(), |x, y| {
            (on_period(x + y, 4, 0) || on_period(x - y, 4, 0)).then_some(palette.carpet_pattern)
        });
    }

    Ok(canvas)
}

// -- Walls --

/// Wallpaper, stone and wood panelling, two variants each.
pub fn generate_walls(palette: &WallPalette) -> Result<SpriteSet> {
    let mut tiles = SpriteSet::new();
    tiles.insert("wallpaper_green", wallpaper_tile(palette, false)?)?;
    tiles.insert("wallpaper_pattern", wallpaper_tile(palette, true)?)?;
    tiles.insert("stone_wall", stone_wall_tile(palette, false)?)?;
    tiles.insert("stone_wall_mossy", stone_wall_tile(palette, true)?)?;
    tiles.insert("wood_panel", wood_panel_tile(palette, false)?)?;
    tiles.insert("wood_panel_dark", wood_panel_tile(palette, true)?)?;
    Ok(tiles)
}

/// Green wallpaper: vertical pinstripes, or a damask-style dot grid.
pub fn wallpaper_tile(palette: &WallPalette, patterned: bool) -> Result<Canvas> {
    let mut canvas = Canvas::square(TILE_SIZE)?;
    canvas.fill_rect(0, 0, 15, 15, palette.wallpaper_dark);

    if patterned {
        paint(&mut canvas, whole_tile(), |x, y| {
            let motif = x % 8 == 4 && y % 8 == 4;
            let dot = x % 4 == 0 && y % 4 == 0;
            (motif || dot).then_some(palette.wallpaper_pattern)
        });
    } else {
        paint(&mut canvas, whole_tile(), |x, _| {
            (x % 2 == 0).then_some(palette.wallpaper_light)
        });
    }

    Ok(canvas)
}

/// Four 8x8 stone blocks in two shades, split by mortar lines.
pub fn stone_wall_tile(palette: &WallPalette, mossy: bool) -> Result<Canvas> {
    let mut canvas = Canvas::square(TILE_SIZE)?;
    let darker = palette.stone_wall.offset(-10);

    paint(&mut canvas, whole_tile(), |x, y| {
        Some(if checker(x, y, 8) {
            palette.stone_wall
        } else {
            darker
        })
    });

    if mossy {
        paint(&mut canvas, whole_tile(), |x, y| {
            on_period(x + y * 3, 7, 0).then_some(palette.moss)
        });
    }

    canvas.fill_rect(0, 7, 15, 7, palette.mortar);
    canvas.fill_rect(7, 0, 7, 15, palette.mortar);

    Ok(canvas)
}

/// Vertical boards four pixels wide with seams and grain.
pub fn wood_panel_tile(palette: &WallPalette, dark: bool) -> Result<Canvas> {
    let mut canvas = Canvas::square(TILE_SIZE)?;
    let base = if dark {
        palette.wood_panel.offset(-15)
    } else {
        palette.wood_panel
    };
    let lighter = base.offset(10);
    let grain = base.offset(-5);

    paint(&mut canvas, whole_tile(), |x, _| {
        Some(if (x / 4) % 2 == 0 { base } else { lighter })
    });

    // Seams on the last column of each board
    paint(&mut canvas, whole_tile(), |x, _| {
        on_period(x, 4, 1).then_some(palette.panel_seam)
    });

    paint(&mut canvas, whole_tile(), |x, y| {
        (y % 3 == 0 && x % 2 == 0).then_some(grain)
    });

    Ok(canvas)
}
