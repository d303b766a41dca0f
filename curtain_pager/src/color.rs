// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Opaque sRGB colors and the page palette.

use crate::PageIndex;

/// An opaque 8-bit sRGB color.
///
/// The presentation layer owns color interpolation; this type only names the endpoints.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Create a color from its channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a `0xRRGGBB` literal. Bits above the low 24 are ignored.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: (hex >> 16) as u8,
            g: (hex >> 8) as u8,
            b: hex as u8,
        }
    }

    /// The color as `0xRRGGBB`.
    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// Page palette, indexed by [`PageIndex::get`].
const PALETTE: [Color; PageIndex::COUNT] = [
    // cyan
    Color::from_hex(0x06BBF7),
    // indigo
    Color::from_hex(0x5865F2),
    // pink
    Color::from_hex(0xFB7299),
    // red
    Color::from_hex(0xFF4D4D),
];

/// Background color painted behind `index`.
pub const fn page_color(index: PageIndex) -> Color {
    PALETTE[index.get() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_matches_pages() {
        let hexes = [0x06BBF7, 0x5865F2, 0xFB7299, 0xFF4D4D];
        for (raw, hex) in (0_u8..).zip(hexes) {
            let index = PageIndex::new(raw).unwrap();
            assert_eq!(page_color(index).to_hex(), hex);
        }
    }

    #[test]
    fn hex_round_trips_channels() {
        let color = Color::from_hex(0x001E4A);
        assert_eq!(color, Color::from_rgb8(0x00, 0x1E, 0x4A));
    }
}
