mod hud;
mod level;
mod scene_impl;
mod world;

use platformer_engine::{Scene, TileMapError};

pub(crate) use level::Level;
pub(crate) use world::GameWorld;

use scene_impl::PlatformerScene;

pub(crate) const WINDOW_TITLE: &str = "sample game: platformer";

pub(crate) fn build_scene(level: Level, screen_scale: f32) -> Result<Box<dyn Scene>, TileMapError> {
    let world = GameWorld::new(level, screen_scale)?;
    Ok(Box::new(PlatformerScene::new(world)))
}
