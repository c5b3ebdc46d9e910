use platformer_engine::{Canvas, InputSnapshot, Scene, SceneCommand, FIXED_ONE};
use tracing::{info, warn};

use super::world::{GamePhase, GameWorld};
use super::WINDOW_TITLE;

pub(crate) struct PlatformerScene {
    world: GameWorld,
}

impl PlatformerScene {
    pub(crate) fn new(world: GameWorld) -> Self {
        Self { world }
    }

    #[cfg(test)]
    pub(crate) fn world(&self) -> &GameWorld {
        &self.world
    }

    fn dump_state(&self) {
        match serde_json::to_string(&self.world.state_dump()) {
            Ok(state) => info!(state = %state, "player_state_dump"),
            Err(error) => warn!(error = %error, "player_state_dump_failed"),
        }
    }
}

impl Scene for PlatformerScene {
    fn load(&mut self) {
        self.world.restart();
        let map = self.world.tilemap();
        info!(
            width = map.width(),
            height = map.height(),
            solid_tiles = map.solid_cells().count(),
            "level_loaded"
        );
    }

    fn update(&mut self, fixed_dt_seconds: f32, input: &InputSnapshot) -> SceneCommand {
        if input.dump_pressed() {
            self.dump_state();
        }
        self.world.update(fixed_dt_seconds, input);
        SceneCommand::None
    }

    fn render(&self, canvas: &mut Canvas<'_>) {
        self.world.draw(canvas);
    }

    fn unload(&mut self) {
        info!(phase = ?self.world.phase(), "scene_unload");
    }

    fn debug_title(&self) -> Option<String> {
        match self.world.phase() {
            GamePhase::Playing => None,
            GamePhase::Paused => Some(format!("{WINDOW_TITLE} [paused]")),
            GamePhase::GameOver => Some(format!("{WINDOW_TITLE} [game over]")),
        }
    }

    fn debug_lines(&self) -> Vec<String> {
        let player = self.world.player();
        vec![
            format!("POS: {:.0},{:.0}", player.position.x, player.position.y),
            format!("RES: {:.0},{:.0}", player.residue_x, player.residue_y),
            format!(
                "SPD: {:.1}/{:.1} PX/S",
                player.velocity.x.abs() / FIXED_ONE as f32,
                player.params.max_speed_px_per_second()
            ),
            format!(
                "GND: {} JMP: {}",
                u8::from(player.is_grounded),
                u8::from(player.is_jumping)
            ),
        ]
    }
}
