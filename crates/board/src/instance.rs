//! GPU-ready tile instance records
//!
//! Flat, tightly packed per-tile data for instanced rendering. The
//! renderer uploads these as a single buffer; bytemuck gives the safe
//! byte view.

use bytemuck::{Pod, Zeroable};

use crate::types::BoardTile;

/// Per-tile instance data for renderer upload.
///
/// Field layout is `repr(C)` with no padding: 3 position floats
/// followed by 4 color floats.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct TileInstance {
    /// World-space position.
    pub position: [f32; 3],
    /// Linear RGBA color.
    pub color: [f32; 4],
}

/// Flatten a laid-out board into instance records, in tile order.
pub fn instances(board: &[BoardTile]) -> Vec<TileInstance> {
    board
        .iter()
        .map(|tile| TileInstance {
            position: tile.position.to_array(),
            color: tile.rgba(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TileKind;
    use glam::Vec3;
    use tiler::ColorKey;

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<TileInstance>(), 7 * 4);
    }

    #[test]
    fn test_instances_match_board() {
        let board = vec![
            BoardTile {
                id: 0,
                position: Vec3::new(1.0, 2.0, 3.0),
                kind: TileKind::Colored,
                color: ColorKey::Green,
                is_start: true,
                is_end: false,
            },
            BoardTile {
                id: 1,
                position: Vec3::new(4.0, 5.0, 6.0),
                kind: TileKind::Wild,
                color: ColorKey::Red,
                is_start: false,
                is_end: true,
            },
        ];

        let inst = instances(&board);
        assert_eq!(inst.len(), 2);
        assert_eq!(inst[0].position, [1.0, 2.0, 3.0]);
        assert_eq!(inst[0].color, ColorKey::Green.rgba());
        // Wild override, not the palette color.
        assert_eq!(inst[1].color, board[1].rgba());
        assert_ne!(inst[1].color, ColorKey::Red.rgba());
    }

    #[test]
    fn test_instances_are_pod() {
        let inst = instances(&[]);
        let bytes: &[u8] = bytemuck::cast_slice(&inst);
        assert!(bytes.is_empty());
    }
}
