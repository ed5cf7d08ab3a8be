//! Core domain types for huffer.
//!
//! - `Colour` - RGBA colour values
//! - Palettes - one immutable named-colour table per thematic domain

mod colour;
mod palette;

pub use colour::Colour;
pub use palette::{
    CharacterPalette, FloorPalette, FurniturePalette, GhostPalette, InteractivePalette,
    PaletteEntries, Palettes, PoltergeistPalette, ShadowPalette, WallPalette, WraithPalette,
};
