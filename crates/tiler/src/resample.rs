//! Freehand stroke resampling
//!
//! Converts a raw sequence of drag samples into evenly spaced tile
//! positions along the drawn curve. The input stream is dirty by
//! assumption: non-finite samples are dropped, zero-length segments are
//! skipped, and anything that cannot produce at least two distinct
//! points degrades to an empty result rather than an error.

use glam::Vec2;
use tracing::{debug, warn};

use crate::types::RawPoint;

/// Drop samples with non-finite coordinates, preserving order.
pub fn filter_points(points: &[RawPoint]) -> Vec<Vec2> {
    let mut valid = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        if p.is_finite() {
            valid.push(Vec2::from(*p));
        } else {
            debug!("filter_points: dropping invalid sample {} ({:?})", i, p);
        }
    }
    valid
}

/// Resample a freehand stroke into evenly spaced positions.
///
/// The first valid sample is always emitted as tile 0. Positions are
/// then placed every `spacing` units of arc length by linear
/// interpolation within the bracketing input segment, up to a hard cap
/// of `max_tiles`. The last valid sample is appended as the final
/// position unless it coincides exactly with the last emitted one or
/// the cap has been reached.
///
/// Returns an empty sequence when fewer than two valid samples remain
/// after filtering or the stroke has zero total length. Never panics.
pub fn resample(points: &[RawPoint], spacing: f32, max_tiles: usize) -> Vec<Vec2> {
    if !(spacing > 0.0 && spacing.is_finite()) {
        warn!("resample: invalid spacing {}, returning empty", spacing);
        return Vec::new();
    }
    if max_tiles == 0 {
        return Vec::new();
    }

    let pts = filter_points(points);
    if pts.len() < 2 {
        return Vec::new();
    }

    let total: f32 = pts.windows(2).map(|s| s[0].distance(s[1])).sum();
    if total <= 0.0 {
        // All samples identical; rejected, not a crash.
        debug!("resample: zero-length stroke, returning empty");
        return Vec::new();
    }

    let mut out = vec![pts[0]];
    let mut target = spacing;
    let mut start_dist = 0.0;

    'segments: for seg in pts.windows(2) {
        let (a, b) = (seg[0], seg[1]);
        let seg_len = a.distance(b);
        if seg_len <= 0.0 {
            continue;
        }

        while target <= start_dist + seg_len {
            if out.len() >= max_tiles {
                break 'segments;
            }
            let t = (target - start_dist) / seg_len;
            out.push(a.lerp(b, t));
            target += spacing;
        }

        start_dist += seg_len;
    }

    // Pin the final tile to the drawn endpoint. The cap stays hard:
    // once max_tiles positions exist nothing more is emitted.
    let last = pts[pts.len() - 1];
    if out.len() < max_tiles && *out.last().unwrap() != last {
        out.push(last);
    }

    debug!(
        "resample: {} raw -> {} valid -> {} tiles (arc length {:.1})",
        points.len(),
        pts.len(),
        out.len(),
        total
    );

    out
}
