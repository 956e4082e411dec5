/// Distance in canvas pixels between adjacent tile centers.
pub const TILE_SPACING: f32 = 12.0;

/// Minimum tile count for a path to be accepted as complete.
pub const MIN_TILES: usize = 40;

/// Hard cap on tile count. Emission stops at exactly this many.
pub const MAX_TILES: usize = 120;

/// Window size for the color fairness rule.
pub const COLOR_WINDOW: usize = 7;

/// Number of preceding tiles inspected when picking the next color.
pub const COLOR_LOOKBACK: usize = 6;

/// Full regeneration attempts before falling back to palette cycling.
pub const MAX_COLOR_RETRIES: usize = 3;

/// Relative tolerance for the spacing invariant.
pub const SPACING_EPSILON: f32 = 1e-3;
