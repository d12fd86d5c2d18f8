#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 8-bit RGBA fill color.
///
/// Phases own the alpha channel: whatever alpha a color is created with, a
/// phase overwrites it with its own transparency when the color is assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from `0xRRGGBB`.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
            a: 255,
        }
    }

    /// The RGB channels packed as `0xRRGGBB`; alpha is dropped.
    pub const fn to_hex(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex(0xff00ff), Color::MAGENTA);
        assert_eq!(Color::from_hex(0x123456), Color::rgb(0x12, 0x34, 0x56));
        assert_eq!(Color::from_hex(0x123456).to_hex(), 0x123456);
    }

    #[test]
    fn test_with_alpha_keeps_rgb() {
        let c = Color::CYAN.with_alpha(50);
        assert_eq!((c.r, c.g, c.b, c.a), (0, 255, 255, 50));
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::YELLOW.to_string(), "#ffff00");
        assert_eq!(Color::rgba(1, 2, 3, 0).to_string(), "#010203");
    }
}
