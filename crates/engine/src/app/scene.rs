use tracing::info;

use super::input::{ActionStates, InputAction};
use super::rendering::Canvas;
use crate::kinematics::ControlFrame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    None,
    Quit,
}

/// Input for one simulation tick. Edges are true for exactly one tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    quit_requested: bool,
    actions: ActionStates,
    jump_pressed: bool,
    jump_released: bool,
    confirm_pressed: bool,
    pause_pressed: bool,
    dump_pressed: bool,
}

impl InputSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(
        quit_requested: bool,
        actions: ActionStates,
        jump_pressed: bool,
        jump_released: bool,
        confirm_pressed: bool,
        pause_pressed: bool,
        dump_pressed: bool,
    ) -> Self {
        Self {
            quit_requested,
            actions,
            jump_pressed,
            jump_released,
            confirm_pressed,
            pause_pressed,
            dump_pressed,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn is_down(&self, action: InputAction) -> bool {
        self.actions.is_down(action)
    }

    pub fn jump_pressed(&self) -> bool {
        self.jump_pressed
    }

    pub fn jump_released(&self) -> bool {
        self.jump_released
    }

    pub fn confirm_pressed(&self) -> bool {
        self.confirm_pressed
    }

    pub fn pause_pressed(&self) -> bool {
        self.pause_pressed
    }

    pub fn dump_pressed(&self) -> bool {
        self.dump_pressed
    }

    /// Control levels and jump edges in the form the integrator consumes.
    pub fn control_frame(&self) -> ControlFrame {
        ControlFrame {
            left: self.is_down(InputAction::MoveLeft),
            right: self.is_down(InputAction::MoveRight),
            up: self.is_down(InputAction::MoveUp),
            down: self.is_down(InputAction::MoveDown),
            jump_pressed: self.jump_pressed,
            jump_released: self.jump_released,
        }
    }

    pub fn with_action_down(mut self, action: InputAction, is_down: bool) -> Self {
        self.actions.set(action, is_down);
        self
    }

    pub fn with_jump_pressed(mut self, jump_pressed: bool) -> Self {
        self.jump_pressed = jump_pressed;
        if jump_pressed {
            self.actions.set(InputAction::Jump, true);
        }
        self
    }

    pub fn with_jump_released(mut self, jump_released: bool) -> Self {
        self.jump_released = jump_released;
        if jump_released {
            self.actions.set(InputAction::Jump, false);
        }
        self
    }

    pub fn with_confirm_pressed(mut self, confirm_pressed: bool) -> Self {
        self.confirm_pressed = confirm_pressed;
        self
    }

    pub fn with_pause_pressed(mut self, pause_pressed: bool) -> Self {
        self.pause_pressed = pause_pressed;
        self
    }

    pub fn with_dump_pressed(mut self, dump_pressed: bool) -> Self {
        self.dump_pressed = dump_pressed;
        self
    }
}

pub trait Scene {
    fn load(&mut self);
    fn update(&mut self, fixed_dt_seconds: f32, input: &InputSnapshot) -> SceneCommand;
    fn render(&self, canvas: &mut Canvas<'_>);
    fn unload(&mut self);
    fn debug_title(&self) -> Option<String> {
        None
    }
    /// Extra lines for the metrics overlay.
    fn debug_lines(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Owns one scene and drives it one tick or one frame at a time.
///
/// The winit loop in [`super::run_app`] is one caller; anything that can
/// produce a `dt`, an [`InputSnapshot`] and a pixel buffer can drive a
/// scene through the same two calls.
pub struct FrameDriver {
    scene: Box<dyn Scene>,
    is_loaded: bool,
    tick_count: u64,
}

impl FrameDriver {
    pub fn new(scene: Box<dyn Scene>) -> Self {
        Self {
            scene,
            is_loaded: false,
            tick_count: 0,
        }
    }

    pub fn load(&mut self) {
        if self.is_loaded {
            return;
        }
        self.scene.load();
        self.is_loaded = true;
        info!("scene_loaded");
    }

    /// Runs one simulation step. Loads the scene first if needed.
    pub fn tick(&mut self, fixed_dt_seconds: f32, input: &InputSnapshot) -> SceneCommand {
        self.load();
        self.tick_count = self.tick_count.saturating_add(1);
        if input.quit_requested() {
            return SceneCommand::Quit;
        }
        self.scene.update(fixed_dt_seconds, input)
    }

    pub fn render(&self, canvas: &mut Canvas<'_>) {
        if !self.is_loaded {
            return;
        }
        self.scene.render(canvas);
    }

    pub fn shutdown(&mut self) {
        if self.is_loaded {
            self.scene.unload();
            self.is_loaded = false;
        }
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn debug_title(&self) -> Option<String> {
        self.scene.debug_title()
    }

    pub fn debug_lines(&self) -> Vec<String> {
        self.scene.debug_lines()
    }
}
