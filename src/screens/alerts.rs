//! Alerts page: severity-filtered notification list.
//!
//! The counts band at the top summarizes the whole log; the list below it
//! shows only the alerts passing the active filter. Unacknowledged critical
//! alerts blink their title to demand attention. The A key cycles the
//! filter, the B key acknowledges everything currently visible.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;

use crate::alerts::{AlertLog, Severity};
use crate::colors::{GREEN, INFO_CYAN, RED, WHITE, YELLOW};
use crate::styles::{CENTERED, LABEL_FONT, LABEL_STYLE_DIM, LABEL_STYLE_WHITE, LEFT_ALIGNED, RIGHT_ALIGNED};
use crate::widgets::primitives::draw_panel;
use crate::widgets::tiles::draw_badge;

// =============================================================================
// Page Layout Constants
// =============================================================================

const PANEL_X: i32 = 4;
const PANEL_W: u32 = 472;

/// Counts band.
const COUNTS_Y: i32 = 40;
const COUNTS_H: u32 = 28;

/// Alert list panel.
const LIST_Y: i32 = 72;
const LIST_H: u32 = 244;

/// Height of one alert row.
const ROW_H: i32 = 34;

/// Y of the first row inside the list panel.
const FIRST_ROW_Y: i32 = LIST_Y + 28;

/// Maximum rows that fit the list panel.
const MAX_VISIBLE_ROWS: usize = 6;

/// Stripe color for a severity.
const fn severity_color(severity: Severity) -> Rgb565 {
    match severity {
        Severity::Critical => RED,
        Severity::Warning => YELLOW,
        Severity::Info => INFO_CYAN,
        Severity::Success => GREEN,
    }
}

// =============================================================================
// Page Rendering
// =============================================================================

/// Draw the alerts page.
///
/// `blink_on` drives the attention blink for unacknowledged critical
/// alerts (the main loop toggles it at ~4 Hz).
pub fn draw_alerts_page(
    display: &mut SimulatorDisplay<Rgb565>,
    log: &AlertLog,
    blink_on: bool,
) {
    draw_counts_band(display, log);
    draw_alert_list(display, log, blink_on);
}

/// Draw the per-severity counts band.
fn draw_counts_band(
    display: &mut SimulatorDisplay<Rgb565>,
    log: &AlertLog,
) {
    draw_panel(display, PANEL_X, COUNTS_Y, PANEL_W, COUNTS_H, None);

    let counts = log.counts();
    let y = COUNTS_Y + 18;

    let segments: [(&str, usize, Rgb565); 5] = [
        ("TOTAL", counts.total, WHITE),
        ("CRIT", counts.critical, RED),
        ("WARN", counts.warning, YELLOW),
        ("INFO", counts.info, INFO_CYAN),
        ("OK", counts.success, GREEN),
    ];

    let mut x = PANEL_X + 10;
    for (label, count, color) in segments {
        let mut text: String<16> = String::new();
        let _ = write!(text, "{label} {count}");
        Text::with_text_style(&text, Point::new(x, y), MonoTextStyle::new(LABEL_FONT, color), LEFT_ALIGNED)
            .draw(display)
            .ok();
        x += text.len() as i32 * 6 + 18;
    }

    // Unacked count + key hints, right-aligned; red while a critical alert
    // is still waiting
    let mut unacked: String<40> = String::new();
    let _ = write!(unacked, "{} unacked | A: filter  B: ack", counts.unacknowledged);
    let unacked_style = if log.has_unacked_critical() {
        MonoTextStyle::new(LABEL_FONT, RED)
    } else {
        LABEL_STYLE_DIM
    };
    Text::with_text_style(&unacked, Point::new(PANEL_X + PANEL_W as i32 - 10, y), unacked_style, RIGHT_ALIGNED)
        .draw(display)
        .ok();
}

/// Draw the filtered alert list.
fn draw_alert_list(
    display: &mut SimulatorDisplay<Rgb565>,
    log: &AlertLog,
    blink_on: bool,
) {
    let mut caption: String<32> = String::new();
    let _ = write!(caption, "ALERTS - FILTER: {}", log.filter.label());
    draw_panel(display, PANEL_X, LIST_Y, PANEL_W, LIST_H, Some(&caption));

    let mut drawn = 0usize;
    for alert in log.visible().take(MAX_VISIBLE_ROWS) {
        let y = FIRST_ROW_Y + drawn as i32 * ROW_H;

        // Severity stripe
        Rectangle::new(Point::new(PANEL_X + 6, y - 8), Size::new(3, (ROW_H - 8) as u32))
            .into_styled(PrimitiveStyle::with_fill(severity_color(alert.severity)))
            .draw(display)
            .ok();

        // Unacked critical alerts blink their title red
        let title_style = if alert.severity == Severity::Critical && !alert.acknowledged && blink_on {
            MonoTextStyle::new(LABEL_FONT, RED)
        } else {
            LABEL_STYLE_WHITE
        };
        Text::with_text_style(alert.title, Point::new(PANEL_X + 16, y), title_style, LEFT_ALIGNED)
            .draw(display)
            .ok();

        Text::with_text_style(alert.message, Point::new(PANEL_X + 16, y + 12), LABEL_STYLE_DIM, LEFT_ALIGNED)
            .draw(display)
            .ok();

        // Timestamp and source, right-aligned on the detail line
        let mut origin: String<40> = String::new();
        let _ = write!(origin, "{} | {}", alert.source, alert.timestamp);
        Text::with_text_style(
            &origin,
            Point::new(PANEL_X + PANEL_W as i32 - 70, y + 12),
            LABEL_STYLE_DIM,
            RIGHT_ALIGNED,
        )
        .draw(display)
        .ok();

        draw_badge(
            display,
            PANEL_X + PANEL_W as i32 - 8,
            y,
            alert.severity.label(),
            severity_color(alert.severity),
        );
        if !alert.acknowledged {
            draw_badge(display, PANEL_X + PANEL_W as i32 - 48, y, "NEW", WHITE);
        }

        drawn += 1;
    }

    // Empty state for filters with no matches
    if drawn == 0 {
        Text::with_text_style(
            "No alerts match this filter",
            Point::new(PANEL_X + PANEL_W as i32 / 2, LIST_Y + LIST_H as i32 / 2),
            LABEL_STYLE_DIM,
            CENTERED,
        )
        .draw(display)
        .ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_colors_are_distinct() {
        let colors = [
            severity_color(Severity::Critical),
            severity_color(Severity::Warning),
            severity_color(Severity::Info),
            severity_color(Severity::Success),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b, "severity colors must be distinguishable");
            }
        }
    }

    #[test]
    fn test_seed_log_fits_without_scrolling() {
        let log = AlertLog::seeded();
        assert!(
            log.visible().count() <= MAX_VISIBLE_ROWS,
            "the seeded backlog must fit the list panel"
        );
        let last_row_end = FIRST_ROW_Y + MAX_VISIBLE_ROWS as i32 * ROW_H;
        assert!(last_row_end <= LIST_Y + LIST_H as i32, "all rows must fit inside the panel");
    }
}
