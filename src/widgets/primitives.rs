//! Low-level drawing primitives shared across widgets.
//!
//! # Panel Frames
//!
//! Every page composes from panels: a dark surface with a 1px outline and a
//! dim caption. Panels are drawn full-bleed each frame because the values
//! inside them animate; repainting the surface is what erases stale text.
//!
//! # Sparklines
//!
//! `draw_sparkline` renders a compact line graph of metric history. The
//! graph auto-scales to the local min/max of the data so the shape stays
//! readable regardless of the absolute values. X-axis scaling uses the
//! actual sample count, not the buffer capacity, so sparse data (early in a
//! session) spreads across the full width instead of clustering left.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics_simulator::SimulatorDisplay;

use crate::colors::{GRAY, PANEL_BG};
use crate::state::GRAPH_HISTORY_SIZE;
use crate::styles::{LABEL_STYLE_DIM, LEFT_ALIGNED};

/// Draw a panel surface with a 1px outline and an optional caption.
///
/// The caption sits inside the top-left corner. Returns nothing; callers
/// lay out their own content inside the panel.
pub fn draw_panel(
    display: &mut SimulatorDisplay<Rgb565>,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    caption: Option<&str>,
) {
    Rectangle::new(Point::new(x, y), Size::new(w, h))
        .into_styled(
            embedded_graphics::primitives::PrimitiveStyleBuilder::new()
                .fill_color(PANEL_BG)
                .stroke_color(GRAY)
                .stroke_width(1)
                .build(),
        )
        .draw(display)
        .ok();

    if let Some(caption) = caption {
        embedded_graphics::text::Text::with_text_style(
            caption,
            Point::new(x + 5, y + 11),
            LABEL_STYLE_DIM,
            LEFT_ALIGNED,
        )
        .draw(display)
        .ok();
    }
}

/// Draw a trend arrow indicator (up or down).
///
/// Three line segments: a vertical shaft and two diagonals forming the
/// head. 8px tall, 6px wide, centered on (`x`, `y`).
pub fn draw_trend_arrow(
    display: &mut SimulatorDisplay<Rgb565>,
    x: i32,
    y: i32,
    rising: bool,
    color: Rgb565,
) {
    let arrow_style = PrimitiveStyle::with_stroke(color, 1);
    // Shaft endpoints flip with direction; the head always points at `tip`.
    let (tail, tip) = if rising {
        (Point::new(x, y + 4), Point::new(x, y - 4))
    } else {
        (Point::new(x, y - 4), Point::new(x, y + 4))
    };
    let barb_y = if rising { y - 1 } else { y + 1 };

    Line::new(tail, tip).into_styled(arrow_style).draw(display).ok();
    Line::new(Point::new(x - 3, barb_y), tip)
        .into_styled(arrow_style)
        .draw(display)
        .ok();
    Line::new(Point::new(x + 3, barb_y), tip)
        .into_styled(arrow_style)
        .draw(display)
        .ok();
}

/// Draw a horizontal progress bar: outline track plus proportional fill.
///
/// `fraction` is clamped to [0, 1]. A zero fraction draws only the track.
pub fn draw_progress_bar(
    display: &mut SimulatorDisplay<Rgb565>,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    fraction: f32,
    color: Rgb565,
) {
    Rectangle::new(Point::new(x, y), Size::new(w, h))
        .into_styled(PrimitiveStyle::with_stroke(GRAY, 1))
        .draw(display)
        .ok();

    let fill_w = (fraction.clamp(0.0, 1.0) * (w.saturating_sub(2)) as f32) as u32;
    if fill_w > 0 {
        Rectangle::new(Point::new(x + 1, y + 1), Size::new(fill_w, h.saturating_sub(2)))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(display)
            .ok();
    }
}

/// Draw a mini sparkline of metric history.
///
/// # Parameters
/// - `x`, `y`: top-left corner of the graph area
/// - `w`, `h`: dimensions of the graph area
/// - `buffer`, `start_idx`, `count`, `data_min`, `data_max`: as returned by
///   [`MetricHistory::graph_data`](crate::state::MetricHistory::graph_data)
/// - `color`: line color
///
/// # Behavior
/// - X-axis: time, oldest left, spread across the full width
/// - Y-axis: auto-scaled to local min/max; a flat range draws a centerline
/// - Fewer than 2 samples, or an area smaller than 5x5, draws nothing
#[allow(clippy::too_many_arguments)]
pub fn draw_sparkline(
    display: &mut SimulatorDisplay<Rgb565>,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    buffer: &[f32],
    start_idx: usize,
    count: usize,
    data_min: f32,
    data_max: f32,
    color: Rgb565,
) {
    if count < 2 {
        return;
    }
    if w < 5 || h < 5 {
        return;
    }

    // Drawable area with 2px padding; inclusive pixel bounds
    let graph_width = w as i32 - 4;
    let graph_height = h as i32 - 4;
    let graph_x = x + 2;
    let graph_y = y + 2;
    let max_x = graph_x + graph_width - 1;
    let max_y = graph_y + graph_height - 1;

    // Y scaling; (graph_height - 1) so the max value maps onto max_y
    let data_range = data_max - data_min;
    let y_scale = if data_range > 0.1 {
        (graph_height - 1) as f32 / data_range
    } else {
        0.0
    };

    // X step spreads the actual sample count across the full width
    let x_step = (graph_width - 1) as f32 / (count - 1).max(1) as f32;

    let line_style = PrimitiveStyle::with_stroke(color, 1);
    let mut prev = Point::zero();

    for i in 0..count {
        let buffer_idx = (start_idx + i) % GRAPH_HISTORY_SIZE;
        let value = buffer[buffer_idx];

        let screen_x = (graph_x + (i as f32 * x_step) as i32).min(max_x);
        let screen_y = if y_scale > 0.0 {
            // Screen Y grows downward; higher values sit at the top
            (graph_y + graph_height - 1 - ((value - data_min) * y_scale) as i32).clamp(graph_y, max_y)
        } else {
            graph_y + (graph_height - 1) / 2
        };

        let point = Point::new(screen_x, screen_y);
        if i > 0 {
            Line::new(prev, point).into_styled(line_style).draw(display).ok();
        }
        prev = point;
    }
}
