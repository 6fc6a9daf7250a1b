//! Metric tiles and list rows for the dashboard pages.
//!
//! Each overview tile displays a single derived metric:
//! - Label at the top (e.g., "TOTAL GEN", "BATTERY")
//! - Main value in the center (large font), highlighted briefly on a new peak
//! - Trend arrow next to the value when the metric is moving
//! - Mini sparkline at the bottom showing recent history
//!
//! Tiles always redraw their background: telemetry animates every tick, and
//! painting over the old surface is what erases stale digits.
//!
//! Status rows and key-value rows are the building blocks of the side
//! panels (system status, weather, energy balance, summary).

use core::fmt::Write;

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;

use crate::{
    colors::{PANEL_BG, YELLOW},
    state::MetricHistory,
    styles::{CENTERED, LABEL_FONT, LABEL_STYLE_BLACK, LABEL_STYLE_DIM, LABEL_STYLE_WHITE, LEFT_ALIGNED, RIGHT_ALIGNED, VALUE_FONT, VALUE_STYLE_WHITE},
    widgets::primitives::{draw_sparkline, draw_trend_arrow},
};

/// Width of the accent strip on the left edge of a tile.
const ACCENT_WIDTH: u32 = 3;

/// Draw a tile's background rectangle with 2px inset.
///
/// The inset creates visual separation between tiles without explicit
/// borders: the display clears to black, and the 2px gaps read as thin
/// dividing lines.
///
/// Returns early if dimensions are too small (w or h < 4) to prevent u32
/// underflow in the size calculation.
fn draw_tile_background(
    display: &mut SimulatorDisplay<Rgb565>,
    x: u32,
    y: u32,
    w: u32,
    h: u32,
) {
    if w < 4 || h < 4 {
        return;
    }
    Rectangle::new(Point::new(x as i32 + 2, y as i32 + 2), Size::new(w - 4, h - 4))
        .into_styled(PrimitiveStyle::with_fill(PANEL_BG))
        .draw(display)
        .ok();
}

/// Draw one overview metric tile.
///
/// # Parameters
/// - `x`, `y`, `w`, `h`: tile boundary (the content is inset 2px)
/// - `label`: caption at the top (kept short, e.g., "TOTAL GEN")
/// - `value_text`: pre-formatted value string (callers own the formatting)
/// - `accent`: series color for the left strip and the sparkline
/// - `history`: drives the trend arrow, peak highlight, and sparkline
#[allow(clippy::too_many_arguments)]
pub fn draw_metric_tile(
    display: &mut SimulatorDisplay<Rgb565>,
    x: u32,
    y: u32,
    w: u32,
    h: u32,
    label: &str,
    value_text: &str,
    accent: Rgb565,
    history: &MetricHistory,
) {
    draw_tile_background(display, x, y, w, h);

    // Accent strip along the left edge
    Rectangle::new(Point::new(x as i32 + 2, y as i32 + 2), Size::new(ACCENT_WIDTH, h - 4))
        .into_styled(PrimitiveStyle::with_fill(accent))
        .draw(display)
        .ok();

    let center_x = (x + w / 2) as i32;

    Text::with_text_style(label, Point::new(center_x, y as i32 + 12), LABEL_STYLE_DIM, CENTERED)
        .draw(display)
        .ok();

    // Peak readout since the last reset, tucked into the top-right corner
    if let Some(max) = history.max() {
        let mut peak: String<12> = String::new();
        let _ = write!(peak, "PK {max:.0}");
        Text::with_text_style(&peak, Point::new((x + w - 6) as i32, y as i32 + 12), LABEL_STYLE_DIM, RIGHT_ALIGNED)
            .draw(display)
            .ok();
    }

    // New peaks flash the value yellow for the hold window
    let value_style = if history.is_new_peak {
        MonoTextStyle::new(VALUE_FONT, YELLOW)
    } else {
        VALUE_STYLE_WHITE
    };
    Text::with_text_style(value_text, Point::new(center_x, y as i32 + 33), value_style, CENTERED)
        .draw(display)
        .ok();

    if let Some(rising) = history.trend() {
        draw_trend_arrow(display, (x + w - 12) as i32, y as i32 + 28, rising, accent);
    }

    let (buffer, start_idx, count, data_min, data_max) = history.graph_data();
    draw_sparkline(
        display,
        x as i32 + 8,
        y as i32 + 38,
        w - 16,
        h - 42,
        buffer,
        start_idx,
        count,
        data_min,
        data_max,
        accent,
    );
}

/// Draw a status row: asset name, detail line, and a colored badge.
///
/// Used by the system-status panel (solar array / wind turbine / battery).
#[allow(clippy::too_many_arguments)]
pub fn draw_status_row(
    display: &mut SimulatorDisplay<Rgb565>,
    x: i32,
    y: i32,
    w: u32,
    name: &str,
    detail: &str,
    badge_label: &str,
    badge_color: Rgb565,
) {
    Text::with_text_style(name, Point::new(x, y), LABEL_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();
    Text::with_text_style(detail, Point::new(x, y + 12), LABEL_STYLE_DIM, LEFT_ALIGNED)
        .draw(display)
        .ok();

    draw_badge(display, x + w as i32, y, badge_label, badge_color);
}

/// Draw a small right-aligned badge: filled pill with black label.
///
/// `right_x` is the badge's right edge; width follows the label length.
pub fn draw_badge(
    display: &mut SimulatorDisplay<Rgb565>,
    right_x: i32,
    y: i32,
    label: &str,
    color: Rgb565,
) {
    let badge_w = label.len() as u32 * 6 + 8;
    Rectangle::new(Point::new(right_x - badge_w as i32, y - 9), Size::new(badge_w, 12))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
    Text::with_text_style(
        label,
        Point::new(right_x - badge_w as i32 / 2, y),
        LABEL_STYLE_BLACK,
        CENTERED,
    )
    .draw(display)
    .ok();
}

/// Draw a key-value row: dim label on the left, colored value on the right.
///
/// Used by the weather, energy-balance, and summary panels.
pub fn draw_kv_row(
    display: &mut SimulatorDisplay<Rgb565>,
    x: i32,
    y: i32,
    w: u32,
    label: &str,
    value: &str,
    value_color: Rgb565,
) {
    Text::with_text_style(label, Point::new(x, y), LABEL_STYLE_DIM, LEFT_ALIGNED)
        .draw(display)
        .ok();
    Text::with_text_style(
        value,
        Point::new(x + w as i32, y),
        MonoTextStyle::new(LABEL_FONT, value_color),
        RIGHT_ALIGNED,
    )
    .draw(display)
    .ok();
}
