use crate::tilemap::{pixel_to_grid, TileMap};

use super::body::KinematicBody;
use super::collision::{self, Blocked};
use super::fixed::split_step;

/// What happened to a body during one [`step_body`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub jumped: bool,
    pub landed: bool,
    pub blocked: Blocked,
    pub moved_x: i32,
    pub moved_y: i32,
}

/// Advances one body by one frame: ground probe, steering, jump/gravity,
/// collision, then the fixed-point commit.
pub fn step_body(body: &mut KinematicBody, map: &TileMap, dt_seconds: f32) -> StepReport {
    let was_grounded = body.is_grounded;
    ground_check(body, map);
    let landed = body.is_grounded && !was_grounded;

    update_direction(body);
    apply_horizontal(body, dt_seconds);
    let jumped = apply_jump_and_gravity(body, dt_seconds);
    let blocked = collision::resolve(body, map, dt_seconds);
    let (moved_x, moved_y) = commit_displacement(body, map, dt_seconds);

    StepReport {
        jumped,
        landed,
        blocked,
        moved_x,
        moved_y,
    }
}

/// Probes one pixel below the feet at center, left edge, then right edge.
pub fn ground_check(body: &mut KinematicBody, map: &TileMap) {
    let (x, y) = body.pixel_position();
    let probe_y = y + 1;
    let probe_columns = [x, x - body.width / 2, x + body.width / 2 - 1];
    body.is_grounded = probe_columns
        .into_iter()
        .any(|probe_x| stands_on(map, probe_x, probe_y));
}

fn stands_on(map: &TileMap, probe_x: i32, probe_y: i32) -> bool {
    let tile = map.tile_at(pixel_to_grid(probe_x), pixel_to_grid(probe_y));
    if !tile.is_solid() {
        return false;
    }
    map.surface_height(probe_x, probe_y, tile)
        .is_some_and(|surface| probe_y >= surface)
}

pub fn update_direction(body: &mut KinematicBody) {
    body.direction = body.controls.direction();
}

pub fn apply_horizontal(body: &mut KinematicBody, dt_seconds: f32) {
    let params = body.params;
    if body.direction != 0 {
        body.velocity.x += body.direction as f32 * params.accel * dt_seconds;
        body.velocity.x = body.velocity.x.clamp(-params.max_speed, params.max_speed);
        return;
    }

    let decel_step = params.decel * dt_seconds;
    if body.velocity.x.abs() < decel_step {
        body.velocity.x = 0.0;
    } else if body.velocity.x > 0.0 {
        body.velocity.x -= decel_step;
    } else {
        body.velocity.x += decel_step;
    }
}

/// Runs the jump state machine and applies gravity. Returns `true` on the
/// frame a jump starts.
pub fn apply_jump_and_gravity(body: &mut KinematicBody, dt_seconds: f32) -> bool {
    let mut jumped = false;
    if body.is_grounded {
        if body.is_jumping {
            body.is_jumping = false;
            body.controls.jump = false;
        } else if body.controls.jump {
            jump(body);
            jumped = true;
        }
    } else if body.is_jumping && !body.controls.jump {
        body.is_jumping = false;
        if body.velocity.y < body.params.jump_release {
            body.velocity.y = body.params.jump_release;
        }
    }

    body.velocity.y += body.params.gravity * dt_seconds;
    let terminal = body.params.terminal_velocity();
    if body.velocity.y > terminal {
        body.velocity.y = terminal;
    }
    jumped
}

pub fn jump(body: &mut KinematicBody) {
    body.velocity.y = body.params.jump_impulse;
    body.is_jumping = true;
    body.is_grounded = false;
}

/// Moves the body by whole pixels, carries the remainders, and clamps the
/// result to the map's pixel bounds. Returns the pixels moved on each axis.
pub fn commit_displacement(body: &mut KinematicBody, map: &TileMap, dt_seconds: f32) -> (i32, i32) {
    let step_x = split_step(body.velocity.x, body.residue_x, dt_seconds);
    body.residue_x = step_x.residue;
    let step_y = split_step(body.velocity.y, body.residue_y, dt_seconds);
    body.residue_y = step_y.residue;

    body.position.x += step_x.pixels as f32;
    body.position.y += step_y.pixels as f32;

    body.position.x = body.position.x.clamp(0.0, map.width_px() as f32);
    body.position.y = body.position.y.clamp(0.0, map.height_px() as f32);
    (step_x.pixels, step_y.pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics::{ControlFrame, MotionParams};
    use crate::math::Vec2;
    use crate::tilemap::TileKind;

    const DT: f32 = 1.0 / 60.0;

    fn room() -> TileMap {
        TileMap::bordered(20, 12, TileKind::Block, TileKind::Empty)
    }

    fn standing_body(x: f32) -> KinematicBody {
        KinematicBody::new(8, 16, Vec2::new(x, 175.0), MotionParams::default())
    }

    #[test]
    fn ground_check_detects_floor_one_pixel_below() {
        let map = room();
        let mut body = standing_body(160.0);
        ground_check(&mut body, &map);
        assert!(body.is_grounded);

        body.position.y = 170.0;
        ground_check(&mut body, &map);
        assert!(!body.is_grounded);
    }

    #[test]
    fn ground_check_uses_edge_probes_over_a_gap() {
        let map = TileMap::bordered(20, 12, TileKind::Empty, TileKind::Empty)
            .with_cells(TileKind::Block, &[(4, 5)])
            .expect("map");

        let mut left_foot_on_ledge = KinematicBody::new(
            8,
            16,
            Vec2::new(83.0, 79.0),
            MotionParams::default(),
        );
        ground_check(&mut left_foot_on_ledge, &map);
        assert!(left_foot_on_ledge.is_grounded);

        let mut right_foot_on_ledge = KinematicBody::new(
            8,
            16,
            Vec2::new(61.0, 79.0),
            MotionParams::default(),
        );
        ground_check(&mut right_foot_on_ledge, &map);
        assert!(right_foot_on_ledge.is_grounded);

        let mut clear_of_ledge = KinematicBody::new(
            8,
            16,
            Vec2::new(84.0, 79.0),
            MotionParams::default(),
        );
        ground_check(&mut clear_of_ledge, &map);
        assert!(!clear_of_ledge.is_grounded);
    }

    #[test]
    fn acceleration_is_clamped_to_max_speed() {
        let mut body = standing_body(160.0);
        body.direction = 1;
        for _ in 0..120 {
            apply_horizontal(&mut body, DT);
            assert!(body.velocity.x <= body.params.max_speed);
        }
        assert_eq!(body.velocity.x, body.params.max_speed);

        body.direction = -1;
        for _ in 0..240 {
            apply_horizontal(&mut body, DT);
        }
        assert_eq!(body.velocity.x, -body.params.max_speed);
    }

    #[test]
    fn deceleration_snaps_to_zero_without_crossing_it() {
        let params = MotionParams::default();
        for start in [
            params.max_speed,
            -params.max_speed,
            12_345.0,
            -27_000.5,
            params.decel * DT * 3.0,
            1.0,
        ] {
            let mut body = standing_body(160.0);
            body.velocity.x = start;
            let start_sign = start.signum();
            for _ in 0..600 {
                apply_horizontal(&mut body, DT);
                let vx = body.velocity.x;
                assert!(
                    vx == 0.0 || vx.signum() == start_sign,
                    "start {start}: crossed zero to {vx}"
                );
            }
            assert_eq!(body.velocity.x, 0.0, "start {start}");
            for _ in 0..10 {
                apply_horizontal(&mut body, DT);
                assert_eq!(body.velocity.x, 0.0);
            }
        }
    }

    #[test]
    fn freefall_never_exceeds_terminal_velocity() {
        let mut body = standing_body(160.0);
        body.is_grounded = false;
        let terminal = body.params.terminal_velocity();
        for _ in 0..600 {
            apply_jump_and_gravity(&mut body, DT);
            assert!(body.velocity.y <= terminal);
        }
        assert_eq!(body.velocity.y, terminal);
    }

    #[test]
    fn jump_sets_launch_velocity_and_flags() {
        let mut body = standing_body(160.0);
        body.is_grounded = true;
        jump(&mut body);
        assert_eq!(body.velocity.y, body.params.jump_impulse);
        assert!(body.is_jumping);
        assert!(!body.is_grounded);
    }

    #[test]
    fn landing_while_jumping_consumes_the_latch() {
        let mut body = standing_body(160.0);
        body.is_grounded = true;
        body.is_jumping = true;
        body.controls.jump = true;

        let jumped = apply_jump_and_gravity(&mut body, DT);
        assert!(!jumped);
        assert!(!body.is_jumping);
        assert!(!body.controls.jump);
    }

    #[test]
    fn early_release_cuts_upward_velocity() {
        let mut body = standing_body(160.0);
        body.is_grounded = false;
        body.is_jumping = true;
        body.velocity.y = body.params.jump_impulse;
        body.controls.jump = false;

        apply_jump_and_gravity(&mut body, DT);
        let expected = body.params.jump_release + body.params.gravity * DT;
        assert!((body.velocity.y - expected).abs() < 1.0);
        assert!(!body.is_jumping);
    }

    #[test]
    fn tapping_jump_on_the_ground_launches_then_rises_monotonically() {
        let map = room();
        let mut body = standing_body(160.0);
        step_body(&mut body, &map, DT);
        assert!(body.is_grounded);

        body.controls.apply(ControlFrame {
            jump_pressed: true,
            ..ControlFrame::default()
        });
        let report = step_body(&mut body, &map, DT);
        assert!(report.jumped);
        assert!(!body.is_grounded);
        assert!(body.is_jumping);
        let launch = body.params.jump_impulse + body.params.gravity * DT;
        assert!((body.velocity.y - launch).abs() < 1.0);
        assert!(report.moved_y < 0);

        body.controls.apply(ControlFrame {
            jump_released: true,
            ..ControlFrame::default()
        });
        let mut previous = body.velocity.y;
        for _ in 0..120 {
            let report = step_body(&mut body, &map, DT);
            if report.blocked.vertical {
                break;
            }
            assert!(body.velocity.y >= previous);
            assert!(body.velocity.y <= body.params.terminal_velocity());
            previous = body.velocity.y;
        }
        assert!(!body.is_jumping);
    }

    #[test]
    fn held_jump_through_landing_needs_a_fresh_press() {
        let map = room();
        let mut body = standing_body(160.0);
        step_body(&mut body, &map, DT);
        body.controls.apply(ControlFrame {
            jump_pressed: true,
            ..ControlFrame::default()
        });

        let mut jumps = 0;
        for _ in 0..240 {
            let report = step_body(&mut body, &map, DT);
            jumps += report.jumped as u32;
            body.controls.apply(ControlFrame::default());
        }
        assert_eq!(jumps, 1);
        assert!(body.is_grounded);
        assert!(!body.controls.jump);
    }

    #[test]
    fn running_into_wall_ends_flush_with_zero_velocity() {
        let map = room();
        let mut body = standing_body(284.0);
        body.velocity.x = body.params.max_speed;
        body.controls.right = true;

        let mut hit = false;
        for _ in 0..60 {
            let report = step_body(&mut body, &map, DT);
            if report.blocked.horizontal {
                assert_eq!(body.position.x, 300.0);
                assert_eq!(body.velocity.x, 0.0);
                assert_eq!(report.moved_x, 0);
                hit = true;
                break;
            }
        }
        assert!(hit, "wall was never reached");
    }

    #[test]
    fn resting_body_stays_put() {
        let map = room();
        let mut body = standing_body(160.0);
        for _ in 0..300 {
            step_body(&mut body, &map, DT);
            assert_eq!(body.position, Vec2::new(160.0, 175.0));
            assert!(body.is_grounded);
        }
    }

    #[test]
    fn commit_clamps_to_map_bounds() {
        let map = TileMap::bordered(4, 4, TileKind::Empty, TileKind::Empty);
        let mut body = KinematicBody::new(
            8,
            16,
            Vec2::new(62.0, 63.0),
            MotionParams::default(),
        );
        body.velocity = Vec2::new(body.params.max_speed, body.params.terminal_velocity());
        body.residue_x = 4095.0;
        commit_displacement(&mut body, &map, DT);
        assert_eq!(body.position, Vec2::new(64.0, 64.0));
    }

    #[test]
    fn landing_is_reported_once() {
        let map = room();
        let mut body = KinematicBody::new(
            8,
            16,
            Vec2::new(160.0, 120.0),
            MotionParams::default(),
        );
        let mut landings = 0;
        for _ in 0..120 {
            landings += step_body(&mut body, &map, DT).landed as u32;
        }
        assert_eq!(landings, 1);
        assert_eq!(body.position.y, 175.0);
    }
}
