mod body;
mod collision;
mod fixed;
mod integrator;

pub use body::{BodySnapshot, ControlFrame, Controls, KinematicBody, MotionParams};
pub use collision::{resolve, resolve_horizontal, resolve_vertical, Blocked};
pub use fixed::{intended_step, pixel_step, sign, split_step, AxisStep, FIXED_ONE, FIXED_SHIFT};
pub use integrator::{
    apply_horizontal, apply_jump_and_gravity, commit_displacement, ground_check, jump, step_body,
    update_direction, StepReport,
};
