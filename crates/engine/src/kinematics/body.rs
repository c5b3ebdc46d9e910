use serde::Serialize;

use crate::math::Vec2;

use super::fixed::FIXED_ONE;

/// NES tuning values are authored per frame at 60 Hz.
const AUTHORED_FRAME_RATE: f32 = 60.0;
const JUMP_RELEASE_FRACTION: f32 = 0.2;

/// Motion constants in fixed-point units per second (pixels × 4096 × 60).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MotionParams {
    pub max_speed: f32,
    pub accel: f32,
    pub decel: f32,
    pub gravity: f32,
    /// Negative: up is -y.
    pub jump_impulse: f32,
    pub jump_release: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        let jump_impulse = -(0x6900 as f32) * AUTHORED_FRAME_RATE;
        Self {
            max_speed: 0x1900 as f32 * AUTHORED_FRAME_RATE,
            accel: 0x01e4 as f32 * AUTHORED_FRAME_RATE * AUTHORED_FRAME_RATE,
            decel: 0x01d0 as f32 * AUTHORED_FRAME_RATE * AUTHORED_FRAME_RATE,
            gravity: 0x05d0 as f32 * AUTHORED_FRAME_RATE * AUTHORED_FRAME_RATE,
            jump_impulse,
            jump_release: jump_impulse * JUMP_RELEASE_FRACTION,
        }
    }
}

impl MotionParams {
    /// Fall speed cap; equal to the launch speed of a jump.
    pub fn terminal_velocity(&self) -> f32 {
        -self.jump_impulse
    }

    pub fn max_speed_px_per_second(&self) -> f32 {
        self.max_speed / FIXED_ONE as f32
    }
}

/// One tick of control edges and levels, as delivered by the input adapter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlFrame {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump_pressed: bool,
    pub jump_released: bool,
}

/// Control levels the integrator reads.
///
/// `jump` is a latch: set on a press edge, cleared on a release edge, and
/// cleared by the integrator when a landing consumes it. Holding the button
/// through a landing therefore does not jump again.
///
/// A frame that carries both edges is a tap shorter than one tick: the press
/// lands now and the release is held over to the next `apply`, so the tap
/// still produces a short hop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump: bool,
    #[serde(skip)]
    release_pending: bool,
}

impl Controls {
    pub fn apply(&mut self, frame: ControlFrame) {
        self.left = frame.left;
        self.right = frame.right;
        self.up = frame.up;
        self.down = frame.down;
        let carried_release = std::mem::take(&mut self.release_pending);
        if frame.jump_pressed {
            self.jump = true;
            self.release_pending = frame.jump_released;
        } else if frame.jump_released || carried_release {
            self.jump = false;
        }
    }

    pub fn direction(&self) -> i32 {
        self.right as i32 - self.left as i32
    }
}

/// Kinematic and control state of one actor.
///
/// `position` is the bottom-center pixel of the bounding box (y down). The box
/// spans `x - width/2 ..= x + width/2 - 1` and `y - height + 1 ..= y`.
#[derive(Debug, Clone, PartialEq)]
pub struct KinematicBody {
    pub width: i32,
    pub height: i32,
    pub position: Vec2,
    pub velocity: Vec2,
    pub residue_x: f32,
    pub residue_y: f32,
    pub direction: i32,
    pub params: MotionParams,
    pub is_grounded: bool,
    pub is_jumping: bool,
    pub controls: Controls,
}

impl KinematicBody {
    pub fn new(width: i32, height: i32, position: Vec2, params: MotionParams) -> Self {
        Self {
            width,
            height,
            position,
            velocity: Vec2::ZERO,
            residue_x: 0.0,
            residue_y: 0.0,
            direction: 0,
            params,
            is_grounded: false,
            is_jumping: false,
            controls: Controls::default(),
        }
    }

    /// Position truncated to whole pixels, the frame the tile probes work in.
    pub fn pixel_position(&self) -> (i32, i32) {
        (self.position.x as i32, self.position.y as i32)
    }

    /// Top-left corner and size of the bounding box.
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        let half_width = (self.width / 2) as f32;
        (
            self.position.x - half_width,
            self.position.y - self.height as f32 + 1.0,
            self.width as f32,
            self.height as f32,
        )
    }

    pub fn snapshot(&self) -> BodySnapshot {
        BodySnapshot {
            position: self.position,
            velocity: self.velocity,
            residue_x: self.residue_x,
            residue_y: self.residue_y,
            direction: self.direction,
            is_grounded: self.is_grounded,
            is_jumping: self.is_jumping,
            controls: self.controls,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodySnapshot {
    pub position: Vec2,
    pub velocity: Vec2,
    pub residue_x: f32,
    pub residue_y: f32,
    pub direction: i32,
    pub is_grounded: bool,
    pub is_jumping: bool,
    pub controls: Controls,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_match_nes_tuning() {
        let params = MotionParams::default();
        assert_eq!(params.max_speed, 384_000.0);
        assert_eq!(params.accel, 1_742_400.0);
        assert_eq!(params.decel, 1_670_400.0);
        assert_eq!(params.gravity, 5_356_800.0);
        assert_eq!(params.jump_impulse, -1_612_800.0);
        assert!((params.jump_release + 322_560.0).abs() < 0.5);
        assert_eq!(params.terminal_velocity(), 1_612_800.0);
        assert!((params.max_speed_px_per_second() - 93.75).abs() < 0.001);
    }

    #[test]
    fn jump_latch_follows_edges() {
        let mut controls = Controls::default();
        controls.apply(ControlFrame {
            jump_pressed: true,
            ..ControlFrame::default()
        });
        assert!(controls.jump);

        controls.apply(ControlFrame::default());
        assert!(controls.jump, "latch holds without a release edge");

        controls.apply(ControlFrame {
            jump_released: true,
            ..ControlFrame::default()
        });
        assert!(!controls.jump);
    }

    #[test]
    fn same_frame_tap_releases_on_the_next_apply() {
        let mut controls = Controls::default();
        controls.apply(ControlFrame {
            jump_pressed: true,
            jump_released: true,
            ..ControlFrame::default()
        });
        assert!(controls.jump, "press is seen first");

        controls.apply(ControlFrame::default());
        assert!(!controls.jump);

        controls.apply(ControlFrame::default());
        assert!(!controls.jump);
    }

    #[test]
    fn new_press_drops_a_carried_release() {
        let mut controls = Controls::default();
        controls.apply(ControlFrame {
            jump_pressed: true,
            jump_released: true,
            ..ControlFrame::default()
        });
        controls.apply(ControlFrame {
            jump_pressed: true,
            ..ControlFrame::default()
        });
        assert!(controls.jump);

        controls.apply(ControlFrame::default());
        assert!(controls.jump, "held press keeps the latch");
    }

    #[test]
    fn direction_is_right_minus_left() {
        let mut controls = Controls::default();
        assert_eq!(controls.direction(), 0);
        controls.right = true;
        assert_eq!(controls.direction(), 1);
        controls.left = true;
        assert_eq!(controls.direction(), 0);
        controls.right = false;
        assert_eq!(controls.direction(), -1);
    }

    #[test]
    fn bounds_are_anchored_at_bottom_center() {
        let body = KinematicBody::new(
            8,
            16,
            Vec2::new(160.0, 175.0),
            MotionParams::default(),
        );
        assert_eq!(body.bounds(), (156.0, 160.0, 8.0, 16.0));
        assert_eq!(body.pixel_position(), (160, 175));
    }
}
