use crate::math::Vec2;

/// 2D camera: `screen = (world - target) * zoom + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2D {
    pub offset: Vec2,
    pub target: Vec2,
    pub zoom: f32,
}

impl Default for Camera2D {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            target: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl Camera2D {
    pub fn with_zoom(zoom: f32) -> Self {
        Self {
            zoom,
            ..Self::default()
        }
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        Vec2::new(
            (world.x - self.target.x) * self.zoom + self.offset.x,
            (world.y - self.target.y) * self.zoom + self.offset.y,
        )
    }

    /// Screen pixel containing `world`, floored so edges shared by
    /// neighbouring tiles land on the same pixel.
    pub fn world_to_screen_px(&self, world: Vec2) -> (i32, i32) {
        let screen = self.world_to_screen(world);
        (screen.x.floor() as i32, screen.y.floor() as i32)
    }
}
