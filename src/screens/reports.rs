//! Reports page: generated report catalog and latest key metrics.
//!
//! Presents the static catalog (there is no generation pipeline): one row
//! per report with its date, format, size, and lifecycle badge, plus a
//! panel of headline metrics from the most recent monthly report.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;

use crate::colors::{GRAY, GREEN, INFO_CYAN, USAGE_RED, WIND_BLUE};
use crate::reports::{self, ReportStatus};
use crate::styles::{LABEL_STYLE_DIM, LABEL_STYLE_WHITE, LEFT_ALIGNED, RIGHT_ALIGNED};
use crate::widgets::primitives::draw_panel;
use crate::widgets::tiles::{draw_badge, draw_kv_row};

// =============================================================================
// Page Layout Constants
// =============================================================================

const PANEL_X: i32 = 4;
const PANEL_W: u32 = 472;

/// Catalog panel.
const CATALOG_Y: i32 = 40;
const CATALOG_H: u32 = 190;

/// Height of one catalog row.
const ROW_H: i32 = 30;

/// Y of the first row inside the catalog panel.
const FIRST_ROW_Y: i32 = CATALOG_Y + 30;

/// Latest-metrics panel.
const METRICS_Y: i32 = 234;
const METRICS_H: u32 = 82;

/// Badge color for a report lifecycle state.
const fn status_color(status: ReportStatus) -> Rgb565 {
    match status {
        ReportStatus::Ready => GREEN,
        ReportStatus::Archived => GRAY,
    }
}

// =============================================================================
// Page Rendering
// =============================================================================

/// Draw the reports page.
pub fn draw_reports_page(display: &mut SimulatorDisplay<Rgb565>) {
    draw_catalog(display);
    draw_latest_metrics(display);
}

/// Draw the report catalog panel.
fn draw_catalog(display: &mut SimulatorDisplay<Rgb565>) {
    let (ready, archived, total_mb) = reports::catalog_summary();
    let mut caption: String<48> = String::new();
    let _ = write!(caption, "REPORT CATALOG - {ready} READY, {archived} ARCHIVED, {total_mb:.1} MB");
    draw_panel(display, PANEL_X, CATALOG_Y, PANEL_W, CATALOG_H, Some(&caption));

    for (i, report) in reports::REPORTS.iter().enumerate() {
        let y = FIRST_ROW_Y + i as i32 * ROW_H;

        Text::with_text_style(report.name, Point::new(PANEL_X + 12, y), LABEL_STYLE_WHITE, LEFT_ALIGNED)
            .draw(display)
            .ok();

        let mut detail: String<40> = String::new();
        let _ = write!(detail, "{} | {} | {:.1} MB", report.generated, report.format, report.size_mb());
        Text::with_text_style(&detail, Point::new(PANEL_X + 12, y + 12), LABEL_STYLE_DIM, LEFT_ALIGNED)
            .draw(display)
            .ok();

        draw_badge(
            display,
            PANEL_X + PANEL_W as i32 - 8,
            y,
            report.status.label(),
            status_color(report.status),
        );

        // Separator below every row but the last
        if i + 1 < reports::REPORTS.len() {
            Rectangle::new(Point::new(PANEL_X + 8, y + 18), Size::new(PANEL_W - 16, 1))
                .into_styled(PrimitiveStyle::with_fill(GRAY))
                .draw(display)
                .ok();
        }
    }
}

/// Draw headline metrics from the latest monthly report.
fn draw_latest_metrics(display: &mut SimulatorDisplay<Rgb565>) {
    draw_panel(
        display,
        PANEL_X,
        METRICS_Y,
        PANEL_W,
        METRICS_H,
        Some("LATEST MONTHLY REPORT"),
    );

    // Two columns of key-value rows
    let left_x = PANEL_X + 10;
    let right_x = PANEL_X + PANEL_W as i32 / 2 + 10;
    let col_w = PANEL_W / 2 - 20;

    draw_kv_row(display, left_x, METRICS_Y + 30, col_w, "Energy Generated", "34890 kWh", GREEN);
    draw_kv_row(display, left_x, METRICS_Y + 44, col_w, "Carbon Avoided", "24967 kg", GREEN);
    draw_kv_row(display, left_x, METRICS_Y + 58, col_w, "Renewable Share", "82.1%", WIND_BLUE);
    draw_kv_row(display, right_x, METRICS_Y + 30, col_w, "System Efficiency", "82.1%", INFO_CYAN);
    draw_kv_row(display, right_x, METRICS_Y + 44, col_w, "Uptime", "99.2%", GREEN);
    draw_kv_row(display, right_x, METRICS_Y + 58, col_w, "Peak Demand", "95.2 kW", USAGE_RED);

    Text::with_text_style(
        "Full reports available from the operations console",
        Point::new(PANEL_X + PANEL_W as i32 - 10, METRICS_Y + METRICS_H as i32 - 8),
        LABEL_STYLE_DIM,
        RIGHT_ALIGNED,
    )
    .draw(display)
    .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_rows_fit_the_panel() {
        let last_row_end = FIRST_ROW_Y + reports::REPORTS.len() as i32 * ROW_H;
        assert!(
            last_row_end <= CATALOG_Y + CATALOG_H as i32,
            "all catalog rows must fit inside the panel"
        );
    }

    #[test]
    fn test_metrics_panel_fits_the_screen() {
        assert!(
            (METRICS_Y + METRICS_H as i32) as u32 <= crate::config::SCREEN_HEIGHT,
            "metrics panel must not overflow the display"
        );
    }

    #[test]
    fn test_status_colors() {
        assert_ne!(status_color(ReportStatus::Ready), status_color(ReportStatus::Archived));
    }
}
