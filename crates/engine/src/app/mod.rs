mod input;
mod loop_runner;
mod metrics;
mod overlay;
mod rendering;
mod scene;

pub use input::InputAction;
pub use loop_runner::{run_app, AppError, LoopConfig, SLOW_FRAME_ENV_VAR};
pub use metrics::LoopMetricsSnapshot;
pub use rendering::{Camera2D, Canvas, Renderer, Rgba, Viewport};
pub use scene::{FrameDriver, InputSnapshot, Scene, SceneCommand};
