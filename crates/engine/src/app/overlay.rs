use super::metrics::LoopMetricsSnapshot;
use super::rendering::{Canvas, Rgba};

const TEXT_SCALE: i32 = 2;
const LINE_ADVANCE: i32 = 7 * TEXT_SCALE;
const PANEL_MARGIN: i32 = 8;
const PANEL_INSET: i32 = 3 * TEXT_SCALE;
const TEXT_COLOR: Rgba = [244, 248, 252, 255];
const PANEL_BG_COLOR: Rgba = [10, 12, 16, 210];
const PANEL_BORDER_COLOR: Rgba = [92, 106, 126, 255];

#[derive(Debug, Clone, Default)]
pub(crate) struct OverlayData {
    pub metrics: LoopMetricsSnapshot,
    pub slow_frame_delay_ms: u64,
    pub tick_count: u64,
    pub scene_lines: Vec<String>,
}

/// Metrics panel anchored to the top-right corner of the frame.
pub(crate) fn draw_overlay(canvas: &mut Canvas<'_>, data: &OverlayData) {
    let (width, height) = canvas.size();
    if width == 0 || height == 0 {
        return;
    }

    let lines = build_overlay_lines(data);
    let text_width = lines
        .iter()
        .map(|line| Canvas::text_width_screen(line, TEXT_SCALE))
        .max()
        .unwrap_or(0);
    let panel_width = text_width + PANEL_INSET * 2;
    let panel_height = lines.len() as i32 * LINE_ADVANCE + PANEL_INSET * 2;
    let panel_left = width as i32 - PANEL_MARGIN - panel_width;
    let panel_top = PANEL_MARGIN;

    canvas.fill_rect_screen(panel_left, panel_top, panel_width, panel_height, PANEL_BG_COLOR);
    canvas.outline_rect_screen(
        panel_left,
        panel_top,
        panel_width,
        panel_height,
        PANEL_BORDER_COLOR,
    );

    let mut y = panel_top + PANEL_INSET;
    for line in &lines {
        canvas.text_screen(line, panel_left + PANEL_INSET, y, TEXT_SCALE, TEXT_COLOR);
        y += LINE_ADVANCE;
    }
}

fn build_overlay_lines(data: &OverlayData) -> Vec<String> {
    let mut lines = vec![
        format!("FPS: {:.0} DBG+{}MS", data.metrics.fps, data.slow_frame_delay_ms),
        format!("TPS: {:.1}", data.metrics.tps),
        format!(
            "FRAME: {:.2}/{:.2} MS",
            data.metrics.frame_time_ms, data.metrics.max_frame_time_ms
        ),
        format!("DROP: {:.0} MS", data.metrics.dropped_backlog_ms),
        format!("TICK: {}", data.tick_count),
    ];
    lines.extend(data.scene_lines.iter().cloned());
    lines
}
