mod canvas;
mod font;
mod renderer;
mod transform;

pub use canvas::{Canvas, Rgba};
pub use renderer::{Renderer, Viewport};
pub use transform::Camera2D;
