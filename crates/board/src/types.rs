use glam::Vec3;
use serde::{Deserialize, Serialize};
use tiler::ColorKey;

/// Gameplay role of a board tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum TileKind {
    /// Ordinary palette-colored tile.
    #[default]
    Colored = 0,
    /// Wildcard tile, matches any color.
    Wild = 1,
    /// Gate tile, blocks passage until answered.
    Gate = 2,
    /// Rainbow goal tile at the end of the path.
    Rainbow = 3,
}

impl TileKind {
    /// Packed 0xRRGGBB override color for special tiles; `None` for
    /// ordinary tiles, which render their palette color.
    pub fn hex(&self) -> Option<u32> {
        match self {
            TileKind::Colored => None,
            TileKind::Wild => Some(0xfbbf24),
            TileKind::Gate => Some(0x8b5cf6),
            TileKind::Rainbow => Some(0xffffff),
        }
    }
}

/// A tile placed in board space, ready for a renderer to consume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardTile {
    /// Sequence position, 0-based.
    pub id: u32,
    /// World-space position (canvas y becomes world z).
    pub position: Vec3,
    /// Gameplay role.
    pub kind: TileKind,
    /// Underlying palette color (meaningful for `Colored`, kept for
    /// the others so gameplay can still reference the sequence).
    pub color: ColorKey,
    pub is_start: bool,
    pub is_end: bool,
}

impl BoardTile {
    /// Effective render color as linear RGBA, special kinds taking
    /// precedence over the palette color.
    pub fn rgba(&self) -> [f32; 4] {
        match self.kind.hex() {
            Some(hex) => [
                ((hex >> 16) & 0xff) as f32 / 255.0,
                ((hex >> 8) & 0xff) as f32 / 255.0,
                (hex & 0xff) as f32 / 255.0,
                1.0,
            ],
            None => self.color.rgba(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colored_tile_uses_palette_color() {
        let tile = BoardTile {
            id: 0,
            position: Vec3::ZERO,
            kind: TileKind::Colored,
            color: ColorKey::Red,
            is_start: true,
            is_end: false,
        };
        assert_eq!(tile.rgba(), ColorKey::Red.rgba());
    }

    #[test]
    fn test_special_tile_overrides_color() {
        let tile = BoardTile {
            id: 5,
            position: Vec3::ZERO,
            kind: TileKind::Rainbow,
            color: ColorKey::Blue,
            is_start: false,
            is_end: true,
        };
        assert_eq!(tile.rgba(), [1.0, 1.0, 1.0, 1.0]);
    }
}
