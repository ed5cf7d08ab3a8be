//! Rendering module for huffer.
//!
//! The canvas every sprite is drawn into, the shape primitives used to draw
//! it, and PNG encoding of the result.

mod canvas;
mod png;
pub mod primitives;

pub use canvas::Canvas;
pub use png::{write_png, PngCompression};
pub use primitives::{Mask, Region};
