//! huffer - Procedural pixel-art sprites for Gas Huffer
//!
//! Draws the player character, four monster types, and the haunted-manor
//! environment tiles from code, then writes every sprite as a PNG into an
//! archive root and a game-asset root.

pub mod cli;
pub mod error;
pub mod export;
pub mod manifest;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod sprites;
pub mod types;

pub use error::{HufferError, Result};
pub use export::Sink;
pub use manifest::Manifest;
pub use pipeline::{generate, run, BuildConfig, RunReport};
pub use render::{write_png, Canvas, Mask, PngCompression, Region};
pub use sprites::{Catalogue, Domain, SpriteCollection, SpriteSet};
pub use types::{Colour, Palettes};
