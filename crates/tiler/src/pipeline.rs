//! Complete path tiling pipeline
//!
//! Connects the two stages:
//! 1. Resampling (raw drag samples to evenly spaced positions)
//! 2. Color assignment (positions to colored tiles)
//!
//! The tiler holds configuration only; every call is a pure function of
//! its inputs plus the caller's random source, so it is safe to rerun
//! on each input event and from independent call sites.

use glam::Vec2;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use crate::color::assign_colors_checked;
use crate::constants::{MAX_TILES, MIN_TILES, TILE_SPACING};
use crate::resample::resample;
use crate::types::{PALETTE, RawPoint, Tile};

/// Error type for tiler configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("spacing must be positive and finite, got {0}")]
    InvalidSpacing(f32),
    #[error("max_tiles must be non-zero")]
    ZeroMaxTiles,
    #[error("min_tiles {min} exceeds max_tiles {max}")]
    InvertedRange { min: usize, max: usize },
}

/// Tiling parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilerConfig {
    /// Distance between adjacent tile centers.
    pub spacing: f32,
    /// Minimum tile count for a path to count as complete.
    pub min_tiles: usize,
    /// Hard cap on tile count.
    pub max_tiles: usize,
}

impl Default for TilerConfig {
    fn default() -> Self {
        Self {
            spacing: TILE_SPACING,
            min_tiles: MIN_TILES,
            max_tiles: MAX_TILES,
        }
    }
}

impl TilerConfig {
    /// Create a validated configuration.
    pub fn new(spacing: f32, min_tiles: usize, max_tiles: usize) -> Result<Self, ConfigError> {
        if !(spacing > 0.0 && spacing.is_finite()) {
            return Err(ConfigError::InvalidSpacing(spacing));
        }
        if max_tiles == 0 {
            return Err(ConfigError::ZeroMaxTiles);
        }
        if min_tiles > max_tiles {
            return Err(ConfigError::InvertedRange {
                min: min_tiles,
                max: max_tiles,
            });
        }
        Ok(Self {
            spacing,
            min_tiles,
            max_tiles,
        })
    }
}

/// Path tiler: freehand stroke in, colored tile sequence out.
///
/// Stateless between calls. [`preview`](Self::preview) is meant to run
/// on every new drag sample for live feedback; [`build`](Self::build)
/// produces the final frozen sequence once the caller accepts the path.
#[derive(Debug, Clone, Default)]
pub struct PathTiler {
    config: TilerConfig,
}

impl PathTiler {
    pub fn new(config: TilerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TilerConfig {
        &self.config
    }

    /// Resample the stroke drawn so far, without assigning colors.
    ///
    /// Cheap enough to run per input event; the caller compares the
    /// returned length against [`is_complete`](Self::is_complete) to
    /// decide whether the path can be accepted yet.
    pub fn preview(&self, points: &[RawPoint]) -> Vec<Vec2> {
        resample(points, self.config.spacing, self.config.max_tiles)
    }

    /// Whether a sequence of `tile_count` tiles is acceptable as a
    /// finished path.
    pub fn is_complete(&self, tile_count: usize) -> bool {
        tile_count >= self.config.min_tiles && tile_count <= self.config.max_tiles
    }

    /// Build the final tile sequence for a completed stroke.
    ///
    /// Degrades to an empty sequence on insufficient input; callers
    /// gate acceptance via [`is_complete`](Self::is_complete), so an
    /// empty or short result simply means "keep drawing".
    pub fn build(&self, points: &[RawPoint], rng: &mut impl Rng) -> Vec<Tile> {
        let positions = self.preview(points);
        if positions.is_empty() {
            debug!("build: no tiles from {} raw samples", points.len());
            return Vec::new();
        }

        let colors = assign_colors_checked(positions.len(), &PALETTE, rng);

        let tiles: Vec<Tile> = positions
            .into_iter()
            .zip(colors)
            .enumerate()
            .map(|(i, (position, color))| Tile {
                index: i as u32,
                position,
                color,
            })
            .collect();

        info!(
            "build: {} raw samples -> {} tiles (complete: {})",
            points.len(),
            tiles.len(),
            self.is_complete(tiles.len())
        );

        tiles
    }
}

/// Convenience wrapper: resample and color a stroke in one call with
/// explicit parameters.
pub fn build_tile_sequence(
    points: &[RawPoint],
    spacing: f32,
    max_tiles: usize,
    rng: &mut impl Rng,
) -> Vec<Tile> {
    let positions = resample(points, spacing, max_tiles);
    let colors = assign_colors_checked(positions.len(), &PALETTE, rng);
    positions
        .into_iter()
        .zip(colors)
        .enumerate()
        .map(|(i, (position, color))| Tile {
            index: i as u32,
            position,
            color,
        })
        .collect()
}
