use rand::Rng;
use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// An sRGB color, only consumed by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_hex(0xffffff);
    pub const SUN: Color = Color::from_hex(0xffc83d);
    pub const ANCHOR: Color = Color::from_hex(0x8a8f98);

    /// Colors handed out to randomly generated bodies
    pub const PALETTE: [Color; 8] = [
        Color::from_hex(0xe94560),
        Color::from_hex(0x4ecca3),
        Color::from_hex(0x3fa7d6),
        Color::from_hex(0xfac05e),
        Color::from_hex(0xa66cff),
        Color::from_hex(0xf79d84),
        Color::from_hex(0x59cd90),
        Color::from_hex(0xee6352),
    ];

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a `0xRRGGBB` value
    #[inline]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Returns the color as a `0xRRGGBB` value
    #[inline]
    pub fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Picks a random palette color
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::PALETTE[rng.gen_range(0..Self::PALETTE.len())]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::PALETTE[0]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:06x}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip_and_display() {
        let c = Color::from_hex(0x12ab9f);
        assert_eq!(c, Color::new(0x12, 0xab, 0x9f));
        assert_eq!(c.to_hex(), 0x12ab9f);
        assert_eq!(c.to_string(), "#12ab9f");
    }
}
