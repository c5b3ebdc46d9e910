use platformer_engine::kinematics::intended_step;
use platformer_engine::{
    step_body, BodySnapshot, Camera2D, Canvas, InputSnapshot, KinematicBody, Rgba, StepReport,
    TileMap, TileMapError, TILE_SIZE,
};
use serde::Serialize;
use tracing::{debug, info};

use super::hud::{
    draw_banner, draw_hud, HudReadout, GAME_OVER_LIFT, GAME_OVER_SCALE, GAME_OVER_TEXT, GRAY,
    PAUSED_LIFT, PAUSED_SCALE, PAUSED_TEXT,
};
use super::level::Level;

const RAYWHITE: Rgba = [245, 245, 245, 255];
const TILE_COLOR: Rgba = GRAY;
const PLAYER_COLOR: Rgba = [230, 41, 55, 255];
const DEFAULT_FRAME_SECONDS: f32 = 1.0 / 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum GamePhase {
    Playing,
    Paused,
    GameOver,
}

/// Everything one play session owns: the room, the player, the camera and
/// the phase. Restart rebuilds the player and camera from the level.
#[derive(Debug, Clone)]
pub(crate) struct GameWorld {
    level: Level,
    tilemap: TileMap,
    player: KinematicBody,
    camera: Camera2D,
    screen_scale: f32,
    phase: GamePhase,
    last_dt_seconds: f32,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct StateDump {
    pub phase: GamePhase,
    pub tile_under_feet: i32,
    pub player: BodySnapshot,
}

impl GameWorld {
    pub(crate) fn new(level: Level, screen_scale: f32) -> Result<Self, TileMapError> {
        let tilemap = level.build_map()?;
        let player = level.spawn_player();
        Ok(Self {
            level,
            tilemap,
            player,
            camera: Camera2D::with_zoom(screen_scale),
            screen_scale,
            phase: GamePhase::Playing,
            last_dt_seconds: DEFAULT_FRAME_SECONDS,
        })
    }

    pub(crate) fn phase(&self) -> GamePhase {
        self.phase
    }

    pub(crate) fn player(&self) -> &KinematicBody {
        &self.player
    }

    pub(crate) fn tilemap(&self) -> &TileMap {
        &self.tilemap
    }

    #[cfg(test)]
    pub(crate) fn camera(&self) -> Camera2D {
        self.camera
    }

    pub(crate) fn update(&mut self, dt_seconds: f32, input: &InputSnapshot) {
        match self.phase {
            GamePhase::GameOver => {
                if input.confirm_pressed() {
                    self.restart();
                    info!("game_restarted");
                }
                return;
            }
            GamePhase::Playing | GamePhase::Paused => {
                if input.pause_pressed() {
                    self.toggle_pause();
                }
            }
        }

        let mut controls = input.control_frame();
        if self.phase == GamePhase::Paused {
            // Releases still land so the jump latch cannot stick while frozen.
            controls.jump_pressed = false;
            self.player.controls.apply(controls);
            return;
        }
        self.player.controls.apply(controls);

        self.last_dt_seconds = dt_seconds;
        let report = step_body(&mut self.player, &self.tilemap, dt_seconds);
        self.log_step(&report);

        if self.fell_out_of_map() {
            self.phase = GamePhase::GameOver;
            info!(
                x = self.player.position.x,
                y = self.player.position.y,
                "game_over"
            );
        }
    }

    /// Re-initializes the session: fresh player at the spawn, default
    /// camera, playing.
    pub(crate) fn restart(&mut self) {
        self.player = self.level.spawn_player();
        self.camera = Camera2D::with_zoom(self.screen_scale);
        self.phase = GamePhase::Playing;
        self.last_dt_seconds = DEFAULT_FRAME_SECONDS;
    }

    fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::Playing => {
                self.phase = GamePhase::Paused;
                info!("game_paused");
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Playing;
                info!("game_resumed");
            }
            GamePhase::GameOver => {}
        }
    }

    fn log_step(&self, report: &StepReport) {
        if report.jumped {
            debug!(
                x = self.player.position.x,
                y = self.player.position.y,
                vy = self.player.velocity.y,
                "player_jumped"
            );
        }
        if report.landed {
            debug!(
                x = self.player.position.x,
                y = self.player.position.y,
                "player_landed"
            );
        }
        if report.blocked.horizontal || report.blocked.vertical {
            debug!(
                horizontal = report.blocked.horizontal,
                vertical = report.blocked.vertical,
                x = self.player.position.x,
                y = self.player.position.y,
                "player_blocked"
            );
        }
    }

    /// Clamped to the bottom edge with nothing underfoot. A room with a solid
    /// floor ring, like the sample room, never triggers this; only rooms with
    /// a gap in the bottom row can end the game.
    fn fell_out_of_map(&self) -> bool {
        self.player.position.y >= self.tilemap.height_px() as f32 && !self.player.is_grounded
    }

    pub(crate) fn tile_under_feet(&self) -> i32 {
        let (x, y) = self.player.pixel_position();
        self.tilemap.tile_at_pixel(x, y + 1).code()
    }

    pub(crate) fn hud_readout(&self) -> HudReadout {
        HudReadout {
            step_x: intended_step(
                self.player.velocity.x,
                self.player.residue_x,
                self.last_dt_seconds,
            ),
            step_y: intended_step(
                self.player.velocity.y,
                self.player.residue_y,
                self.last_dt_seconds,
            ),
            tile_code: self.tile_under_feet(),
        }
    }

    pub(crate) fn state_dump(&self) -> StateDump {
        StateDump {
            phase: self.phase,
            tile_under_feet: self.tile_under_feet(),
            player: self.player.snapshot(),
        }
    }

    pub(crate) fn draw(&self, canvas: &mut Canvas<'_>) {
        canvas.set_camera(self.camera);
        canvas.clear(RAYWHITE);

        if self.phase == GamePhase::GameOver {
            draw_banner(canvas, GAME_OVER_TEXT, GAME_OVER_SCALE, GAME_OVER_LIFT, GRAY);
            return;
        }

        let tile_size = TILE_SIZE as f32;
        for (x, y, _) in self.tilemap.solid_cells() {
            canvas.fill_rect(
                x as f32 * tile_size,
                y as f32 * tile_size,
                tile_size,
                tile_size,
                TILE_COLOR,
            );
        }

        let (left, top, width, height) = self.player.bounds();
        canvas.fill_rect(left, top, width, height, PLAYER_COLOR);
        draw_hud(canvas, &self.hud_readout());

        if self.phase == GamePhase::Paused {
            draw_banner(canvas, PAUSED_TEXT, PAUSED_SCALE, PAUSED_LIFT, GRAY);
        }
    }
}
