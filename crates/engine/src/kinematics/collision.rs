//! Axis-separated tile collision.
//!
//! Each axis looks at the pixel step the body intends to take this frame and
//! probes three points along the leading edge at the destination. A solid hit
//! snaps the body flush against the tile and kills motion on that axis.
//! Horizontal runs first; vertical then sees the corrected x.

use std::cmp::Ordering;

use crate::tilemap::{pixel_to_grid, tile_floor, TileMap, TILE_SIZE};

use super::body::KinematicBody;
use super::fixed::intended_step;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blocked {
    pub horizontal: bool,
    pub vertical: bool,
}

pub fn resolve(body: &mut KinematicBody, map: &TileMap, dt_seconds: f32) -> Blocked {
    let horizontal = resolve_horizontal(body, map, dt_seconds);
    let vertical = resolve_vertical(body, map, dt_seconds);
    Blocked {
        horizontal,
        vertical,
    }
}

/// Returns `true` when the body was stopped by a wall.
pub fn resolve_horizontal(body: &mut KinematicBody, map: &TileMap, dt_seconds: f32) -> bool {
    let xsp = intended_step(body.velocity.x, body.residue_x, dt_seconds);
    let edge = match xsp.cmp(&0) {
        Ordering::Greater => body.width / 2 - 1,
        Ordering::Less => -(body.width / 2),
        Ordering::Equal => return false,
    };

    let (x, y) = body.pixel_position();
    let destination = x + edge + xsp;
    let column = pixel_to_grid(destination);
    let probe_rows = [y, y - body.height / 2, y - body.height + 1];
    let hit = probe_rows
        .into_iter()
        .any(|probe_y| map.tile_at(column, pixel_to_grid(probe_y)).is_solid());
    if !hit {
        return false;
    }

    let snapped = if xsp > 0 {
        tile_floor(destination) - 1 - edge
    } else {
        tile_floor(destination) + TILE_SIZE - edge
    };
    body.position.x = snapped as f32;
    body.velocity.x = 0.0;
    body.residue_x = 0.0;
    true
}

/// Returns `true` when the body hit a floor or a ceiling.
pub fn resolve_vertical(body: &mut KinematicBody, map: &TileMap, dt_seconds: f32) -> bool {
    let ysp = intended_step(body.velocity.y, body.residue_y, dt_seconds);
    let edge = match ysp.cmp(&0) {
        Ordering::Greater => 0,
        Ordering::Less => -body.height + 1,
        Ordering::Equal => return false,
    };

    let (x, y) = body.pixel_position();
    let destination = y + edge + ysp;
    let row = pixel_to_grid(destination);
    let probe_columns = [x, x - body.width / 2, x + body.width / 2 - 1];
    let hit = probe_columns
        .into_iter()
        .any(|probe_x| map.tile_at(pixel_to_grid(probe_x), row).is_solid());
    if !hit {
        return false;
    }

    let snapped = if ysp > 0 {
        tile_floor(destination) - 1 - edge
    } else {
        tile_floor(destination) + TILE_SIZE - edge
    };
    body.position.y = snapped as f32;
    body.velocity.y = 0.0;
    body.residue_y = 0.0;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics::MotionParams;
    use crate::math::Vec2;
    use crate::tilemap::TileKind;

    const DT: f32 = 1.0 / 60.0;

    fn room() -> TileMap {
        TileMap::bordered(20, 12, TileKind::Block, TileKind::Empty)
    }

    fn body_at(x: f32, y: f32) -> KinematicBody {
        KinematicBody::new(8, 16, Vec2::new(x, y), MotionParams::default())
    }

    #[test]
    fn zero_intended_step_is_a_no_op() {
        let map = room();
        let mut body = body_at(300.0, 175.0);
        body.residue_x = 4000.0;
        assert!(!resolve_horizontal(&mut body, &map, DT));
        assert_eq!(body.position, Vec2::new(300.0, 175.0));
        assert_eq!(body.residue_x, 4000.0);
    }

    #[test]
    fn moving_right_into_wall_snaps_flush_against_it() {
        let map = room();
        let mut body = body_at(300.0, 175.0);
        body.velocity.x = body.params.max_speed;

        assert!(resolve_horizontal(&mut body, &map, DT));
        assert_eq!(body.position.x, 300.0);
        assert_eq!(body.velocity.x, 0.0);
        assert_eq!(body.residue_x, 0.0);
    }

    #[test]
    fn moving_left_into_wall_snaps_flush_against_it() {
        let map = room();
        let mut body = body_at(20.0, 175.0);
        body.velocity.x = -body.params.max_speed;

        assert!(resolve_horizontal(&mut body, &map, DT));
        assert_eq!(body.position.x, 20.0);
        assert_eq!(body.velocity.x, 0.0);
    }

    #[test]
    fn open_column_does_not_block() {
        let map = room();
        let mut body = body_at(100.0, 175.0);
        body.velocity.x = body.params.max_speed;
        assert!(!resolve_horizontal(&mut body, &map, DT));
        assert_eq!(body.velocity.x, body.params.max_speed);
    }

    #[test]
    fn top_probe_catches_a_block_at_head_height() {
        let map = room().with_cells(TileKind::Block, &[(10, 9)]).expect("map");
        let mut body = body_at(155.0, 170.0);
        body.velocity.x = body.params.max_speed;
        body.residue_x = 4095.0;

        assert!(resolve_horizontal(&mut body, &map, DT));
        assert_eq!(body.position.x, 156.0);
    }

    #[test]
    fn falling_onto_floor_lands_on_surface() {
        let map = room();
        let mut body = body_at(100.0, 170.0);
        body.velocity.y = body.params.terminal_velocity();

        assert!(resolve_vertical(&mut body, &map, DT));
        assert_eq!(body.position.y, 175.0);
        assert_eq!(body.velocity.y, 0.0);
        assert_eq!(body.residue_y, 0.0);
    }

    #[test]
    fn rising_into_block_stops_below_it() {
        let map = room().with_cells(TileKind::Block, &[(3, 3)]).expect("map");
        let mut body = body_at(56.0, 80.0);
        body.velocity.y = body.params.jump_impulse;

        assert!(resolve_vertical(&mut body, &map, DT));
        assert_eq!(body.position.y, 79.0);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn edge_columns_catch_a_ledge_under_one_foot() {
        let map = TileMap::bordered(20, 12, TileKind::Empty, TileKind::Empty)
            .with_cells(TileKind::Block, &[(4, 5)])
            .expect("map");
        let mut body = body_at(83.0, 78.0);
        body.velocity.y = body.params.terminal_velocity();

        assert!(resolve_vertical(&mut body, &map, DT));
        assert_eq!(body.position.y, 79.0);
    }

    #[test]
    fn resolved_state_is_stable_on_the_next_frame() {
        let map = room();
        let mut body = body_at(300.0, 175.0);
        body.velocity.x = body.params.max_speed;
        body.velocity.y = body.params.terminal_velocity();

        let first = resolve(&mut body, &map, DT);
        assert_eq!(
            first,
            Blocked {
                horizontal: true,
                vertical: true
            }
        );
        let settled = body.position;

        let second = resolve(&mut body, &map, DT);
        assert_eq!(second, Blocked::default());
        assert_eq!(body.position, settled);
    }
}
