//! Predictive analytics page: forecast strips and operational advice.
//!
//! Three horizontal strips show the solar, wind, and demand forecasts for
//! the selected horizon as mini bar charts, all scaled to the horizon's
//! common maximum so the series are directly comparable. Below them, the
//! advice panel lists the operational recommendations derived from the
//! projected surplus. The A key cycles the horizon.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;

use crate::colors::{GREEN, INFO_CYAN, RED, SOLAR_AMBER, USAGE_RED, WIND_BLUE, YELLOW};
use crate::forecast::{self, AdviceKind, ForecastRange};
use crate::styles::{LABEL_STYLE_DIM, LABEL_STYLE_WHITE, LEFT_ALIGNED, RIGHT_ALIGNED};
use crate::widgets::primitives::draw_panel;

// =============================================================================
// Page Layout Constants
// =============================================================================

/// Full-width panel geometry.
const PANEL_X: i32 = 4;
const PANEL_W: u32 = 472;

/// Forecast strip geometry (three strips stacked).
const STRIP_H: u32 = 56;
const STRIP_YS: [i32; 3] = [40, 100, 160];

/// Advice panel geometry.
const ADVICE_Y: i32 = 220;
const ADVICE_H: u32 = 96;

/// Inset of the bar area inside a strip.
const BARS_INSET_X: i32 = 6;
const BARS_TOP: i32 = 16;
const BARS_BOTTOM_PAD: i32 = 6;

/// Marker square size in the advice list.
const MARKER_SIZE: u32 = 8;

/// Badge color for an advice tone.
const fn advice_color(kind: AdviceKind) -> Rgb565 {
    match kind {
        AdviceKind::Success => GREEN,
        AdviceKind::Info => INFO_CYAN,
        AdviceKind::Warning => YELLOW,
        AdviceKind::Error => RED,
    }
}

/// Draw the complete analytics page for the selected horizon.
pub fn draw_analytics_page(
    display: &mut SimulatorDisplay<Rgb565>,
    range: ForecastRange,
) {
    let set = forecast::dataset(range);
    let max_value = set.max_value();

    let series = [
        ("SOLAR FORECAST", set.solar, SOLAR_AMBER),
        ("WIND FORECAST", set.wind, WIND_BLUE),
        ("DEMAND FORECAST", set.demand, USAGE_RED),
    ];

    for ((caption, data, color), y) in series.into_iter().zip(STRIP_YS) {
        draw_forecast_strip(display, y, caption, range, data, max_value, color);
    }

    draw_advice_panel(display, range, &set);
}

/// Draw one forecast strip: caption, horizon label, and a bar per entry.
fn draw_forecast_strip(
    display: &mut SimulatorDisplay<Rgb565>,
    y: i32,
    caption: &str,
    range: ForecastRange,
    data: &[u32],
    max_value: u32,
    color: Rgb565,
) {
    draw_panel(display, PANEL_X, y, PANEL_W, STRIP_H, Some(caption));

    // Horizon + unit, right-aligned in the caption row
    let mut horizon: String<24> = String::new();
    let _ = write!(horizon, "{} ({})", range.label(), range.unit());
    Text::with_text_style(
        &horizon,
        Point::new(PANEL_X + PANEL_W as i32 - 6, y + 11),
        LABEL_STYLE_DIM,
        RIGHT_ALIGNED,
    )
    .draw(display)
    .ok();

    // Bars fill the remaining strip area, bottom-up, common scale
    let bars_x = PANEL_X + BARS_INSET_X;
    let bars_w = PANEL_W as i32 - BARS_INSET_X * 2;
    let bars_h = STRIP_H as i32 - BARS_TOP - BARS_BOTTOM_PAD;
    let floor_y = y + BARS_TOP + bars_h;
    let slot_w = bars_w as f32 / data.len() as f32;

    let fill = PrimitiveStyle::with_fill(color);
    for (i, &value) in data.iter().enumerate() {
        let bar_h = (value as f32 / max_value as f32 * bars_h as f32) as i32;
        if bar_h == 0 {
            continue;
        }
        let x = bars_x + (slot_w * i as f32) as i32;
        // 1px gap between bars; very narrow slots keep at least 1px
        let bar_w = ((slot_w as i32) - 1).max(1) as u32;
        Rectangle::new(Point::new(x, floor_y - bar_h), Size::new(bar_w, bar_h as u32))
            .into_styled(fill)
            .draw(display)
            .ok();
    }
}

/// Draw the operational advice panel.
fn draw_advice_panel(
    display: &mut SimulatorDisplay<Rgb565>,
    range: ForecastRange,
    set: &forecast::ForecastSet,
) {
    draw_panel(display, PANEL_X, ADVICE_Y, PANEL_W, ADVICE_H, Some("OPERATIONAL ADVICE"));

    // Projected surplus headline, colored by sign
    let surplus = set.leading_surplus();
    let mut headline: String<40> = String::new();
    let _ = write!(headline, "Projected surplus: {surplus:+} {}", range.unit());
    let headline_color = if surplus >= 0 { GREEN } else { RED };
    Text::with_text_style(
        &headline,
        Point::new(PANEL_X + PANEL_W as i32 - 6, ADVICE_Y + 11),
        embedded_graphics::mono_font::MonoTextStyle::new(crate::styles::LABEL_FONT, headline_color),
        RIGHT_ALIGNED,
    )
    .draw(display)
    .ok();

    for (i, advice) in forecast::recommendations(set).iter().enumerate() {
        let row_y = ADVICE_Y + 28 + i as i32 * 20;
        Rectangle::new(
            Point::new(PANEL_X + 8, row_y - 7),
            Size::new(MARKER_SIZE, MARKER_SIZE),
        )
        .into_styled(PrimitiveStyle::with_fill(advice_color(advice.kind)))
        .draw(display)
        .ok();
        Text::with_text_style(
            advice.message,
            Point::new(PANEL_X + 24, row_y),
            LABEL_STYLE_WHITE,
            LEFT_ALIGNED,
        )
        .draw(display)
        .ok();
    }

    Text::with_text_style(
        "A: cycle range",
        Point::new(PANEL_X + 8, ADVICE_Y + ADVICE_H as i32 - 6),
        LABEL_STYLE_DIM,
        LEFT_ALIGNED,
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
    fn test_advice_colors_cover_all_kinds() {
        assert_eq!(advice_color(AdviceKind::Success), GREEN);
        assert_eq!(advice_color(AdviceKind::Info), INFO_CYAN);
        assert_eq!(advice_color(AdviceKind::Warning), YELLOW);
        assert_eq!(advice_color(AdviceKind::Error), RED);
    }

    #[test]
    fn test_strips_and_advice_fit_the_screen() {
        let last_strip_end = STRIP_YS[2] + STRIP_H as i32;
        assert!(last_strip_end <= ADVICE_Y, "strips must not overlap the advice panel");
        assert!(
            (ADVICE_Y + ADVICE_H as i32) as u32 <= crate::config::SCREEN_HEIGHT,
            "advice panel must not overflow the display"
        );
    }
}
