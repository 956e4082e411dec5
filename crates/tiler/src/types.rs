use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A single freehand input sample in canvas coordinates.
///
/// Produced continuously while the user drags; insertion order is
/// drawing order. The stream is not assumed to be clean - samples with
/// non-finite coordinates are filtered out before resampling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPoint {
    pub x: f32,
    pub y: f32,
}

impl RawPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Vec2> for RawPoint {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<RawPoint> for Vec2 {
    fn from(p: RawPoint) -> Self {
        Vec2::new(p.x, p.y)
    }
}

/// One of the five game colors a tile can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ColorKey {
    Red = 0,
    Blue = 1,
    Green = 2,
    Yellow = 3,
    Purple = 4,
}

/// The fixed game palette, in assignment order.
pub const PALETTE: [ColorKey; 5] = [
    ColorKey::Red,
    ColorKey::Blue,
    ColorKey::Green,
    ColorKey::Yellow,
    ColorKey::Purple,
];

impl ColorKey {
    /// Packed 0xRRGGBB color value for rendering.
    pub fn hex(&self) -> u32 {
        match self {
            ColorKey::Red => 0xff4444,
            ColorKey::Blue => 0x4444ff,
            ColorKey::Green => 0x44ff44,
            ColorKey::Yellow => 0xffff44,
            ColorKey::Purple => 0xff44ff,
        }
    }

    /// Human-readable color name.
    pub fn name(&self) -> &'static str {
        match self {
            ColorKey::Red => "Red",
            ColorKey::Blue => "Blue",
            ColorKey::Green => "Green",
            ColorKey::Yellow => "Yellow",
            ColorKey::Purple => "Purple",
        }
    }

    /// Color as linear RGBA components in 0.0..=1.0, alpha 1.
    pub fn rgba(&self) -> [f32; 4] {
        let hex = self.hex();
        [
            ((hex >> 16) & 0xff) as f32 / 255.0,
            ((hex >> 8) & 0xff) as f32 / 255.0,
            (hex & 0xff) as f32 / 255.0,
            1.0,
        ]
    }
}

/// One discrete, colored position along the generated game path.
///
/// Immutable once created. Indices are contiguous from 0 and match
/// sequence position; the final tile is pinned to the last valid input
/// sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Sequence position, 0-based.
    pub index: u32,
    /// Canvas-space position.
    pub position: Vec2,
    /// Assigned palette color.
    pub color: ColorKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_point_finite() {
        assert!(RawPoint::new(1.0, 2.0).is_finite());
        assert!(!RawPoint::new(f32::NAN, 2.0).is_finite());
        assert!(!RawPoint::new(1.0, f32::INFINITY).is_finite());
    }

    #[test]
    fn test_palette_distinct() {
        for (i, a) in PALETTE.iter().enumerate() {
            for b in &PALETTE[i + 1..] {
                assert_ne!(a, b);
                assert_ne!(a.hex(), b.hex());
            }
        }
    }

    #[test]
    fn test_rgba_matches_hex() {
        let rgba = ColorKey::Red.rgba();
        assert!((rgba[0] - 1.0).abs() < 0.01);
        assert!((rgba[1] - 0x44 as f32 / 255.0).abs() < 0.001);
        assert_eq!(rgba[3], 1.0);
    }
}
