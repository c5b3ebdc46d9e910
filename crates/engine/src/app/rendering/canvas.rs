use crate::math::Vec2;

use super::font::{glyph_rows, text_width_px, GLYPH_ADVANCE_CELLS, GLYPH_WIDTH};
use super::transform::Camera2D;

pub type Rgba = [u8; 4];

/// Draw target over an RGBA8 frame buffer.
///
/// Plain methods take world coordinates and go through the current
/// [`Camera2D`]; `*_screen` methods take frame pixels. Everything is clipped
/// to the frame, so callers never need to bounds-check.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
    camera: Camera2D,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        Self {
            frame,
            width,
            height,
            camera: Camera2D::default(),
        }
    }

    pub fn set_camera(&mut self, camera: Camera2D) {
        self.camera = camera;
    }

    pub fn camera(&self) -> Camera2D {
        self.camera
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn clear(&mut self, color: Rgba) {
        let pixel_count = self.width as usize * self.height as usize;
        for chunk in self.frame.chunks_exact_mut(4).take(pixel_count) {
            chunk.copy_from_slice(&color);
        }
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
        let (left, top) = self.camera.world_to_screen_px(Vec2::new(x, y));
        let (right, bottom) = self
            .camera
            .world_to_screen_px(Vec2::new(x + width, y + height));
        self.fill_rect_screen(left, top, right - left, bottom - top, color);
    }

    /// `cell_size` is the world size of one font cell; a glyph is 3x5 cells.
    pub fn text(&mut self, text: &str, x: f32, y: f32, cell_size: f32, color: Rgba) {
        let (screen_x, screen_y) = self.camera.world_to_screen_px(Vec2::new(x, y));
        let scale = (cell_size * self.camera.zoom).round().max(1.0) as i32;
        self.text_screen(text, screen_x, screen_y, scale, color);
    }

    pub fn fill_rect_screen(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgba) {
        let start_x = x.max(0);
        let start_y = y.max(0);
        let end_x = x.saturating_add(width).min(self.width as i32);
        let end_y = y.saturating_add(height).min(self.height as i32);
        if end_x <= start_x || end_y <= start_y {
            return;
        }
        for py in start_y..end_y {
            for px in start_x..end_x {
                self.put_pixel(px, py, color);
            }
        }
    }

    pub fn outline_rect_screen(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgba) {
        if width <= 1 || height <= 1 {
            return;
        }
        self.fill_rect_screen(x, y, width, 1, color);
        self.fill_rect_screen(x, y + height - 1, width, 1, color);
        self.fill_rect_screen(x, y, 1, height, color);
        self.fill_rect_screen(x + width - 1, y, 1, height, color);
    }

    /// `scale` is the pixel size of one font cell.
    pub fn text_screen(&mut self, text: &str, x: i32, y: i32, scale: i32, color: Rgba) {
        let scale = scale.max(1);
        let mut pen_x = x;
        for ch in text.chars() {
            for (row_index, row_bits) in glyph_rows(ch).iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if row_bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                        continue;
                    }
                    self.fill_rect_screen(
                        pen_x + col * scale,
                        y + row_index as i32 * scale,
                        scale,
                        scale,
                        color,
                    );
                }
            }
            pen_x += GLYPH_ADVANCE_CELLS * scale;
        }
    }

    pub fn text_width_screen(text: &str, scale: i32) -> i32 {
        text_width_px(text, scale.max(1))
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        let offset = self.byte_offset(x, y)?;
        let bytes = self.frame.get(offset..offset + 4)?;
        Some([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    fn put_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        let Some(offset) = self.byte_offset(x, y) else {
            return;
        };
        let Some(dst) = self.frame.get_mut(offset..offset + 4) else {
            return;
        };
        match color[3] {
            255 => dst.copy_from_slice(&color),
            0 => {}
            alpha => {
                let alpha = alpha as u32;
                for channel in 0..3 {
                    let blended =
                        (color[channel] as u32 * alpha + dst[channel] as u32 * (255 - alpha)) / 255;
                    dst[channel] = blended as u8;
                }
                dst[3] = 255;
            }
        }
    }

    fn byte_offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        let pixel = (y as usize).checked_mul(self.width as usize)?.checked_add(x as usize)?;
        pixel.checked_mul(4)
    }
}
