use platformer_engine::{Canvas, Rgba};

pub(crate) const BLACK: Rgba = [0, 0, 0, 255];
pub(crate) const GRAY: Rgba = [130, 130, 130, 255];

const HUD_ORIGIN_X: f32 = 16.0;
const HUD_ORIGIN_Y: f32 = 16.0;
const HUD_LINE_STEP: f32 = 8.0;
const HUD_CELL_SIZE: f32 = 1.0;

pub(crate) const PAUSED_TEXT: &str = "GAME PAUSED";
pub(crate) const PAUSED_SCALE: i32 = 8;
pub(crate) const PAUSED_LIFT: i32 = 40;
pub(crate) const GAME_OVER_TEXT: &str = "PRESS [ENTER] TO PLAY AGAIN";
pub(crate) const GAME_OVER_SCALE: i32 = 4;
pub(crate) const GAME_OVER_LIFT: i32 = 50;

/// Debug readout: this frame's intended pixel steps and the tile code
/// under the player's feet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HudReadout {
    pub step_x: i32,
    pub step_y: i32,
    pub tile_code: i32,
}

impl HudReadout {
    pub(crate) fn lines(&self) -> [String; 3] {
        [
            format!("VEL.X: {}", self.step_x),
            format!("VEL.Y: {}", self.step_y),
            format!("TILE: {}", self.tile_code),
        ]
    }
}

/// Draws the readout in world space, top-left of the room.
pub(crate) fn draw_hud(canvas: &mut Canvas<'_>, readout: &HudReadout) {
    for (index, line) in readout.lines().iter().enumerate() {
        canvas.text(
            line,
            HUD_ORIGIN_X,
            HUD_ORIGIN_Y + index as f32 * HUD_LINE_STEP,
            HUD_CELL_SIZE,
            BLACK,
        );
    }
}

/// Centers `text` horizontally in screen space, `lift` pixels above the
/// vertical middle.
pub(crate) fn draw_banner(canvas: &mut Canvas<'_>, text: &str, scale: i32, lift: i32, color: Rgba) {
    let (width, height) = canvas.size();
    let text_width = Canvas::text_width_screen(text, scale);
    let x = width as i32 / 2 - text_width / 2;
    let y = height as i32 / 2 - lift;
    canvas.text_screen(text, x, y, scale, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readout_lines_show_signed_values() {
        let readout = HudReadout {
            step_x: -2,
            step_y: 6,
            tile_code: -1,
        };
        assert_eq!(
            readout.lines(),
            [
                "VEL.X: -2".to_string(),
                "VEL.Y: 6".to_string(),
                "TILE: -1".to_string()
            ]
        );
    }

    #[test]
    fn banner_is_centered() {
        let mut frame = vec![0u8; 200 * 100 * 4];
        let mut canvas = Canvas::new(&mut frame, 200, 100);
        draw_banner(&mut canvas, "I", 2, 10, GRAY);

        // "I" is 6px wide at scale 2: x = 100 - 3 = 97, y = 50 - 10 = 40.
        assert_eq!(canvas.pixel(97, 40), Some(GRAY));
        assert_eq!(canvas.pixel(102, 41), Some(GRAY));
        assert_eq!(canvas.pixel(96, 40), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(103, 40), Some([0, 0, 0, 0]));
    }
}
