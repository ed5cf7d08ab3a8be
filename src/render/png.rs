//! PNG output for finished canvases.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};

use crate::error::{HufferError, Result};

use super::Canvas;

/// PNG encoder settings for a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PngCompression {
    /// The encoder's default trade-off.
    #[default]
    Standard,

    /// Smallest files: best compression with adaptive row filters.
    Optimized,
}

impl PngCompression {
    fn settings(self) -> (CompressionType, FilterType) {
        match self {
            PngCompression::Standard => (CompressionType::Default, FilterType::Adaptive),
            PngCompression::Optimized => (CompressionType::Best, FilterType::Adaptive),
        }
    }
}

/// Write a canvas to a PNG file.
pub fn write_png(canvas: &Canvas, path: &Path, compression: PngCompression) -> Result<()> {
    let io_error = |message: String| HufferError::Io {
        path: path.to_path_buf(),
        message,
    };

    let file = File::create(path).map_err(|e| io_error(format!("Failed to create PNG: {}", e)))?;

    let (compression, filter) = compression.settings();
    let mut writer = BufWriter::new(file);

    PngEncoder::new_with_quality(&mut writer, compression, filter)
        .write_image(
            &canvas.to_rgba_buffer(),
            canvas.width(),
            canvas.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| io_error(format!("Failed to write PNG: {}", e)))?;

    writer
        .flush()
        .map_err(|e| io_error(format!("Failed to write PNG: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use tempfile::tempdir;

    fn sample() -> Canvas {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.set_pixel(0, 0, Colour::BLACK);
        canvas.set_pixel(1, 0, Colour::WHITE);
        canvas.set_pixel(0, 1, Colour::new(255, 0, 0, 128));
        canvas
    }

    #[test]
    fn test_write_png_simple() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");

        write_png(&sample(), &path, PngCompression::Standard).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(0, 1).0, [255, 0, 0, 128]);
        assert_eq!(img.get_pixel(1, 1).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_optimized_png_has_same_pixels() {
        let dir = tempdir().unwrap();
        let standard = dir.path().join("standard.png");
        let optimized = dir.path().join("optimized.png");

        write_png(&sample(), &standard, PngCompression::Standard).unwrap();
        write_png(&sample(), &optimized, PngCompression::Optimized).unwrap();

        let a = image::open(&standard).unwrap().to_rgba8();
        let b = image::open(&optimized).unwrap().to_rgba8();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_write_png_missing_dir_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("x.png");

        let err = write_png(&sample(), &path, PngCompression::Standard).unwrap_err();
        match err {
            HufferError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
