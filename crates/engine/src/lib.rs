//! Tile platformer engine: tile grid, fixed-point kinematics with
//! axis-separated tile collision, and a winit/pixels frame loop.

pub mod app;
pub mod kinematics;
pub mod math;
pub mod tilemap;

pub use app::{
    run_app, AppError, Camera2D, Canvas, FrameDriver, InputAction, InputSnapshot, LoopConfig,
    LoopMetricsSnapshot, Renderer, Rgba, Scene, SceneCommand, Viewport, SLOW_FRAME_ENV_VAR,
};
pub use kinematics::{
    step_body, Blocked, BodySnapshot, ControlFrame, Controls, KinematicBody, MotionParams,
    StepReport, FIXED_ONE,
};
pub use math::Vec2;
pub use tilemap::{pixel_to_grid, TileKind, TileMap, TileMapError, TILE_SIZE};
