//! Structural checks over generated tile sequences
//!
//! Used by tests and debug assertions. Like color validation, these
//! report violations rather than correcting them.

use glam::Vec2;

use crate::types::Tile;

/// Check that consecutive positions are `spacing` apart within a
/// relative `epsilon`, excluding the final pair (the last tile is
/// pinned to the drawn endpoint regardless of spacing).
pub fn validate_spacing(positions: &[Vec2], spacing: f32, epsilon: f32) -> bool {
    if positions.len() < 3 {
        return true;
    }

    positions[..positions.len() - 1]
        .windows(2)
        .all(|pair| (pair[0].distance(pair[1]) - spacing).abs() <= spacing * epsilon)
}

/// Check that tile indices are contiguous starting at 0.
pub fn validate_indices(tiles: &[Tile]) -> bool {
    tiles
        .iter()
        .enumerate()
        .all(|(i, tile)| tile.index as usize == i)
}
