//! Colour type.

use std::fmt;

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Shift the red, green and blue channels by the same amount.
    ///
    /// Channels saturate at 0 and 255; alpha is left untouched.
    pub const fn offset(self, delta: i16) -> Self {
        Self {
            r: shift(self.r, delta),
            g: shift(self.g, delta),
            b: shift(self.b, delta),
            a: self.a,
        }
    }

    /// Same colour with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

const fn shift(channel: u8, delta: i16) -> u8 {
    let v = channel as i16 + delta;
    if v < 0 {
        0
    } else if v > 255 {
        255
    } else {
        v as u8
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_lighter_and_darker() {
        let base = Colour::rgb(80, 30, 30);
        assert_eq!(base.offset(20), Colour::rgb(100, 50, 50));
        assert_eq!(base.offset(-10), Colour::rgb(70, 20, 20));
    }

    #[test]
    fn test_offset_saturates() {
        assert_eq!(Colour::rgb(250, 5, 128).offset(10), Colour::rgb(255, 15, 138));
        assert_eq!(Colour::rgb(250, 5, 128).offset(-10), Colour::rgb(240, 0, 118));
    }

    #[test]
    fn test_offset_keeps_alpha() {
        let c = Colour::new(100, 100, 100, 60).offset(5);
        assert_eq!(c.a, 60);
    }

    #[test]
    fn test_with_alpha() {
        let c = Colour::new(200, 200, 255, 180).with_alpha(60);
        assert_eq!(c, Colour::new(200, 200, 255, 60));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::rgb(255, 0, 0)), "#FF0000");
        assert_eq!(format!("{}", Colour::new(255, 0, 0, 128)), "#FF000080");
    }

    #[test]
    fn test_constants() {
        assert_eq!(Colour::BLACK, Colour::rgb(0, 0, 0));
        assert_eq!(Colour::WHITE, Colour::rgb(255, 255, 255));
        assert!(Colour::TRANSPARENT.is_transparent());
        assert!(Colour::BLACK.is_opaque());
    }
}
