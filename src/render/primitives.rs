//! Shape primitives.
//!
//! Everything here writes straight into a `Canvas` with last-write-wins
//! semantics. There is no randomness: the same calls always produce the
//! same pixels.

use crate::types::Colour;

use super::Canvas;

/// An inclusive rectangular scan window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Region {
    /// Create a region from inclusive corners.
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// The whole of a `width` x `height` canvas.
    pub const fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width as i32 - 1, height as i32 - 1)
    }

    /// Square window of `radius` around (cx, cy).
    pub const fn around(cx: i32, cy: i32, radius: i32) -> Self {
        Self::new(cx - radius, cy - radius, cx + radius, cy + radius)
    }

    /// Iterate row by row, left to right.
    pub fn points(self) -> impl Iterator<Item = (i32, i32)> {
        (self.y0..=self.y1).flat_map(move |y| (self.x0..=self.x1).map(move |x| (x, y)))
    }
}

/// A closed-form pixel selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mask {
    /// `(x-cx)²/rx² + (y-cy)²/ry² < 1`.
    Ellipse { cx: i32, cy: i32, rx: i32, ry: i32 },

    /// `(x-cx)² + (y-cy)² < radius_sq`.
    Radial { cx: i32, cy: i32, radius_sq: i32 },
}

impl Mask {
    /// Check whether (x, y) is selected.
    pub fn contains(self, x: i32, y: i32) -> bool {
        match self {
            Mask::Ellipse { cx, cy, rx, ry } => {
                if rx == 0 || ry == 0 {
                    return false;
                }
                let (dx, dy) = ((x - cx) as i64, (y - cy) as i64);
                let (rx2, ry2) = ((rx as i64).pow(2), (ry as i64).pow(2));
                dx * dx * ry2 + dy * dy * rx2 < rx2 * ry2
            }
            Mask::Radial { cx, cy, radius_sq } => {
                let (dx, dy) = (x - cx, y - cy);
                dx * dx + dy * dy < radius_sq
            }
        }
    }
}

/// Set each listed point.
pub fn plot(canvas: &mut Canvas, points: &[(i32, i32)], colour: Colour) {
    for &(x, y) in points {
        canvas.set_pixel(x, y, colour);
    }
}

/// Set every pixel in `region` that `mask` selects.
pub fn fill_mask(canvas: &mut Canvas, region: Region, mask: Mask, colour: Colour) {
    for (x, y) in region.points() {
        if mask.contains(x, y) {
            canvas.set_pixel(x, y, colour);
        }
    }
}

/// Run a per-pixel rule over `region`.
///
/// `None` leaves the pixel untouched.
pub fn paint<F>(canvas: &mut Canvas, region: Region, rule: F)
where
    F: Fn(i32, i32) -> Option<Colour>,
{
    for (x, y) in region.points() {
        if let Some(colour) = rule(x, y) {
            canvas.set_pixel(x, y, colour);
        }
    }
}

/// Checkerboard of `block`-sized squares: true on the (0, 0) squares.
pub fn checker(x: i32, y: i32, block: i32) -> bool {
    (x.div_euclid(block) + y.div_euclid(block)).rem_euclid(2) == 0
}

/// Check whether `v` lands on a `period` boundary, shifted by `phase`.
pub fn on_period(v: i32, period: i32, phase: i32) -> bool {
    (v + phase).rem_euclid(period) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_points_order() {
        let points: Vec<_> = Region::new(0, 0, 1, 1).points().collect();
        assert_eq!(points, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_region_full_and_around() {
        assert_eq!(Region::full(16, 16), Region::new(0, 0, 15, 15));
        assert_eq!(Region::around(16, 16, 6), Region::new(10, 10, 22, 22));
        assert_eq!(Region::full(4, 2).points().count(), 8);
    }

    #[test]
    fn test_ellipse_mask() {
        let mask = Mask::Ellipse { cx: 16, cy: 16, rx: 6, ry: 8 };
        assert!(mask.contains(16, 16));
        assert!(mask.contains(21, 16));
        // on the boundary is excluded
        assert!(!mask.contains(22, 16));
        assert!(!mask.contains(16, 8));
        assert!(mask.contains(16, 9));
    }

    #[test]
    fn test_degenerate_ellipse_selects_nothing() {
        let mask = Mask::Ellipse { cx: 0, cy: 0, rx: 0, ry: 3 };
        assert!(!mask.contains(0, 0));
    }

    #[test]
    fn test_radial_mask() {
        let mask = Mask::Radial { cx: 0, cy: 0, radius_sq: 25 };
        assert!(mask.contains(3, 3));
        assert!(mask.contains(4, 2));
        assert!(!mask.contains(5, 0));
        assert!(!mask.contains(4, 3));
    }

    #[test]
    fn test_fill_mask_respects_region() {
        let mut canvas = Canvas::square(8).unwrap();
        let mask = Mask::Radial { cx: 4, cy: 4, radius_sq: 100 };
        fill_mask(&mut canvas, Region::new(0, 0, 1, 1), mask, Colour::WHITE);
        assert_eq!(canvas.painted_pixel_count(), 4);
    }

    #[test]
    fn test_plot_points() {
        let mut canvas = Canvas::square(4).unwrap();
        plot(&mut canvas, &[(0, 0), (3, 3), (9, 9)], Colour::BLACK);
        assert_eq!(canvas.painted_pixel_count(), 2);
    }

    #[test]
    fn test_paint_rule() {
        let mut canvas = Canvas::square(4).unwrap();
        paint(&mut canvas, Region::full(4, 4), |x, _| {
            on_period(x, 2, 0).then_some(Colour::WHITE)
        });
        assert_eq!(canvas.get(0, 3), Some(Colour::WHITE));
        assert_eq!(canvas.get(1, 3), Some(Colour::TRANSPARENT));
        assert_eq!(canvas.painted_pixel_count(), 8);
    }

    #[test]
    fn test_checker() {
        assert!(checker(0, 0, 8));
        assert!(!checker(8, 0, 8));
        assert!(checker(8, 8, 8));
        assert!(!checker(7, 15, 8));
    }

    #[test]
    fn test_on_period_negative_phase() {
        assert!(!on_period(9, 3, -1));
        assert!(on_period(10, 3, -1));
        assert!(on_period(0, 4, 0));
    }
}
