use platformer_engine::{LoopConfig, Scene, TileMapError};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use super::gameplay::{self, Level, WINDOW_TITLE};

const SCALE_ENV_VAR: &str = "PLATFORMER_SCALE";
const DEFAULT_SCREEN_SCALE: u32 = 3;
const MAX_SCREEN_SCALE: u32 = 8;

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) scene: Box<dyn Scene>,
}

pub(crate) fn build_app() -> Result<AppWiring, TileMapError> {
    init_tracing();
    info!("=== Platformer Startup ===");

    let screen_scale = resolve_screen_scale(std::env::var(SCALE_ENV_VAR).ok().as_deref());
    let level = Level::sample();
    let config = LoopConfig {
        window_title: WINDOW_TITLE.to_string(),
        window_width: level.width_px() as u32 * screen_scale,
        window_height: level.height_px() as u32 * screen_scale,
        ..LoopConfig::default()
    };
    let scene = gameplay::build_scene(level, screen_scale as f32)?;

    Ok(AppWiring { config, scene })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}

fn resolve_screen_scale(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return DEFAULT_SCREEN_SCALE;
    };
    match parse_screen_scale(raw) {
        Some(scale) => {
            info!(scale, "screen_scale_override");
            scale
        }
        None => {
            warn!(
                var = SCALE_ENV_VAR,
                value = raw,
                default = DEFAULT_SCREEN_SCALE,
                "invalid_screen_scale"
            );
            DEFAULT_SCREEN_SCALE
        }
    }
}

fn parse_screen_scale(raw: &str) -> Option<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|scale| (1..=MAX_SCREEN_SCALE).contains(scale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_screen_scale_accepts_small_integers() {
        assert_eq!(parse_screen_scale("1"), Some(1));
        assert_eq!(parse_screen_scale(" 4 "), Some(4));
        assert_eq!(parse_screen_scale("8"), Some(8));
    }

    #[test]
    fn parse_screen_scale_rejects_out_of_range_and_garbage() {
        assert_eq!(parse_screen_scale("0"), None);
        assert_eq!(parse_screen_scale("9"), None);
        assert_eq!(parse_screen_scale("-2"), None);
        assert_eq!(parse_screen_scale("2.5"), None);
        assert_eq!(parse_screen_scale("big"), None);
    }

    #[test]
    fn resolve_screen_scale_falls_back_to_default() {
        assert_eq!(resolve_screen_scale(None), DEFAULT_SCREEN_SCALE);
        assert_eq!(resolve_screen_scale(Some("nope")), DEFAULT_SCREEN_SCALE);
        assert_eq!(resolve_screen_scale(Some("2")), 2);
    }

    #[test]
    fn default_window_matches_sample_room_at_default_scale() {
        let level = Level::sample();
        let defaults = LoopConfig::default();
        assert_eq!(
            level.width_px() as u32 * DEFAULT_SCREEN_SCALE,
            defaults.window_width
        );
        assert_eq!(
            level.height_px() as u32 * DEFAULT_SCREEN_SCALE,
            defaults.window_height
        );
    }
}
