//! Board layout: 2D tile sequence to 3D world positions
//!
//! Takes the canvas-space tile sequence from the tiler and places it in
//! world space: the footprint is centered around the origin, canvas y
//! becomes world z, and an optional height profile makes the path rise
//! toward the goal. Mesh and material construction stay with the
//! renderer; this module only produces data.

use std::f32::consts::PI;

use glam::Vec3;
use rand::Rng;
use tracing::debug;

use tiler::Tile;

use crate::types::{BoardTile, TileKind};

/// Total rise of the path from start to goal when height variation is
/// enabled.
const HEIGHT_RISE: f32 = 8.0;

/// Amplitude of the sine wave layered on the rise.
const WAVE_AMPLITUDE: f32 = 1.5;

/// Full sine periods over the length of the path.
const WAVE_PERIODS: f32 = 2.0;

/// Peak-to-peak random height jitter per tile.
const HEIGHT_JITTER: f32 = 0.5;

/// Gate tiles only appear after this index, with this probability.
const GATE_MIN_INDEX: u32 = 10;
const GATE_CHANCE: f64 = 0.05;

/// Wild tiles only appear after this index, with this probability.
const WILD_MIN_INDEX: u32 = 5;
const WILD_CHANCE: f64 = 0.08;

/// Board layout parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Uniform scale applied to the centered footprint.
    pub scale: f32,
    /// Apply the rise-plus-wave height profile.
    pub height_variation: bool,
    /// Roll wild/gate tiles and make the goal tile a rainbow.
    pub special_tiles: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            scale: 0.9,
            height_variation: true,
            special_tiles: false,
        }
    }
}

/// Place a tile sequence on the 3D board.
///
/// Empty input yields an empty board. Degenerate footprints (all tiles
/// on one vertical or horizontal line) are centered without dividing by
/// zero.
pub fn layout_board(tiles: &[Tile], options: LayoutOptions, rng: &mut impl Rng) -> Vec<BoardTile> {
    if tiles.is_empty() {
        return Vec::new();
    }

    let mut min = tiles[0].position;
    let mut max = tiles[0].position;
    for tile in &tiles[1..] {
        min = min.min(tile.position);
        max = max.max(tile.position);
    }

    // A zero range collapses that axis onto the origin.
    let range = (max - min).max(glam::Vec2::splat(f32::EPSILON));

    debug!(
        "layout_board: {} tiles, footprint {:.1}x{:.1}",
        tiles.len(),
        range.x,
        range.y
    );

    let len = tiles.len();
    let mut board = Vec::with_capacity(len);

    for tile in tiles {
        let x = (tile.position.x - min.x - range.x / 2.0) * options.scale;
        let z = (tile.position.y - min.y - range.y / 2.0) * options.scale;

        let mut y = 0.0;
        if options.height_variation {
            let progress = tile.index as f32 / len as f32;
            y += progress * HEIGHT_RISE;
            y += (progress * WAVE_PERIODS * 2.0 * PI).sin() * WAVE_AMPLITUDE;
            y += (rng.random::<f32>() - 0.5) * HEIGHT_JITTER;
        }

        let is_start = tile.index == 0;
        let is_end = tile.index as usize == len - 1;

        let mut kind = TileKind::Colored;
        if options.special_tiles {
            if is_end {
                kind = TileKind::Rainbow;
            } else if tile.index > GATE_MIN_INDEX && rng.random_bool(GATE_CHANCE) {
                kind = TileKind::Gate;
            } else if tile.index > WILD_MIN_INDEX && rng.random_bool(WILD_CHANCE) {
                kind = TileKind::Wild;
            }
        }

        board.push(BoardTile {
            id: tile.index,
            position: Vec3::new(x, y, z),
            kind,
            color: tile.color,
            is_start,
            is_end,
        });
    }

    board
}
