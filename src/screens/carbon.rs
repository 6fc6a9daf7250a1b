//! Carbon tracker page: avoidance ledger, certification milestones,
//! environmental equivalents, and the annual trend chart.
//!
//! The A key cycles the reporting range (today / month / year); milestone
//! achievement always derives from the year-to-date total, so the ladder
//! reads the same regardless of the selected range.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;

use crate::carbon::{self, TimeRange};
use crate::colors::{BATTERY_PURPLE, GREEN, LIGHT_GRAY, SOLAR_AMBER, WIND_BLUE};
use crate::styles::{CENTERED, LABEL_STYLE_DIM, LABEL_STYLE_WHITE, LEFT_ALIGNED, RIGHT_ALIGNED};
use crate::widgets::primitives::{draw_panel, draw_progress_bar};
use crate::widgets::tiles::draw_kv_row;

// =============================================================================
// Page Layout Constants
// =============================================================================

/// Stat panel band: four panels across the top.
const STAT_Y: i32 = 40;
const STAT_H: u32 = 64;
const STAT_W: u32 = 114;
const STAT_XS: [i32; 4] = [4, 122, 240, 358];

/// Milestones panel (left) and equivalents panel (right).
const LADDER_Y: i32 = 108;
const LADDER_H: u32 = 76;
const MILESTONES_X: i32 = 4;
const MILESTONES_W: u32 = 280;
const EQUIV_X: i32 = 288;
const EQUIV_W: u32 = 188;

/// Annual trend panel.
const TREND_Y: i32 = 188;
const TREND_H: u32 = 128;
const TREND_X: i32 = 4;
const TREND_W: u32 = 472;

/// Bar area inside the trend panel.
const TREND_BARS_TOP: i32 = 18;
const TREND_LABEL_BAND: i32 = 14;

// =============================================================================
// Page Rendering
// =============================================================================

/// Draw the complete carbon tracker page for the selected range.
pub fn draw_carbon_page(
    display: &mut SimulatorDisplay<Rgb565>,
    range: TimeRange,
) {
    let ledger = carbon::ledger(range);

    draw_stat_panels(display, range, &ledger);
    draw_milestone_ladder(display);
    draw_equivalents_panel(display, &ledger);
    draw_trend_chart(display);
}

/// Draw the four stat panels across the top.
fn draw_stat_panels(
    display: &mut SimulatorDisplay<Rgb565>,
    range: TimeRange,
    ledger: &carbon::CarbonLedger,
) {
    // CO2 avoided, with progress toward the range target
    draw_panel(display, STAT_XS[0], STAT_Y, STAT_W, STAT_H, Some("CO2 AVOIDED"));
    let mut avoided: String<16> = String::new();
    let _ = write!(avoided, "{} kg", ledger.avoided_kg);
    Text::with_text_style(&avoided, Point::new(STAT_XS[0] + 6, STAT_Y + 28), LABEL_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();
    let mut progress: String<20> = String::new();
    let _ = write!(progress, "{:.0}% of target", ledger.progress_pct());
    Text::with_text_style(&progress, Point::new(STAT_XS[0] + 6, STAT_Y + 42), LABEL_STYLE_DIM, LEFT_ALIGNED)
        .draw(display)
        .ok();
    draw_progress_bar(
        display,
        STAT_XS[0] + 6,
        STAT_Y + 48,
        STAT_W - 12,
        8,
        ledger.progress_pct() / 100.0,
        GREEN,
    );

    // Renewable share
    draw_panel(display, STAT_XS[1], STAT_Y, STAT_W, STAT_H, Some("RENEWABLE"));
    let mut renewable: String<12> = String::new();
    let _ = write!(renewable, "{:.1}%", ledger.renewable_pct);
    Text::with_text_style(&renewable, Point::new(STAT_XS[1] + 6, STAT_Y + 28), LABEL_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();
    Text::with_text_style("of consumption", Point::new(STAT_XS[1] + 6, STAT_Y + 42), LABEL_STYLE_DIM, LEFT_ALIGNED)
        .draw(display)
        .ok();

    // Grid offset
    draw_panel(display, STAT_XS[2], STAT_Y, STAT_W, STAT_H, Some("GRID OFFSET"));
    let mut offset: String<16> = String::new();
    let _ = write!(offset, "{} kWh", ledger.grid_offset_kwh);
    Text::with_text_style(&offset, Point::new(STAT_XS[2] + 6, STAT_Y + 28), LABEL_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();
    let mut homes: String<16> = String::new();
    let _ = write!(homes, "~{} homes", ledger.homes_equivalent());
    Text::with_text_style(&homes, Point::new(STAT_XS[2] + 6, STAT_Y + 42), LABEL_STYLE_DIM, LEFT_ALIGNED)
        .draw(display)
        .ok();

    // Generated energy for the range
    draw_panel(display, STAT_XS[3], STAT_Y, STAT_W, STAT_H, Some("GENERATED"));
    let mut generated: String<16> = String::new();
    let _ = write!(generated, "{} kWh", ledger.generated_kwh);
    Text::with_text_style(&generated, Point::new(STAT_XS[3] + 6, STAT_Y + 28), LABEL_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();
    Text::with_text_style(range.label(), Point::new(STAT_XS[3] + 6, STAT_Y + 42), LABEL_STYLE_DIM, LEFT_ALIGNED)
        .draw(display)
        .ok();
}

/// Draw the certification ladder. Achievement derives from the
/// year-to-date total.
fn draw_milestone_ladder(display: &mut SimulatorDisplay<Rgb565>) {
    draw_panel(display, MILESTONES_X, LADDER_Y, MILESTONES_W, LADDER_H, Some("MILESTONES"));

    let year_avoided = carbon::ledger(TimeRange::Year).avoided_kg;
    for (i, milestone) in carbon::MILESTONES.iter().enumerate() {
        let y = LADDER_Y + 26 + i as i32 * 12;
        let achieved = milestone.achieved(year_avoided);

        let (marker, style) = if achieved {
            ("[OK]", embedded_graphics::mono_font::MonoTextStyle::new(crate::styles::LABEL_FONT, GREEN))
        } else {
            ("[--]", LABEL_STYLE_DIM)
        };
        Text::with_text_style(marker, Point::new(MILESTONES_X + 6, y), style, LEFT_ALIGNED)
            .draw(display)
            .ok();
        Text::with_text_style(milestone.label, Point::new(MILESTONES_X + 36, y), LABEL_STYLE_WHITE, LEFT_ALIGNED)
            .draw(display)
            .ok();

        let mut target: String<20> = String::new();
        let _ = write!(target, "{} kg", milestone.target_kg);
        Text::with_text_style(&target, Point::new(MILESTONES_X + 164, y), LABEL_STYLE_DIM, LEFT_ALIGNED)
            .draw(display)
            .ok();
        Text::with_text_style(
            milestone.date,
            Point::new(MILESTONES_X + MILESTONES_W as i32 - 6, y),
            LABEL_STYLE_DIM,
            RIGHT_ALIGNED,
        )
        .draw(display)
        .ok();
    }
}

/// Draw the environmental equivalents panel.
fn draw_equivalents_panel(
    display: &mut SimulatorDisplay<Rgb565>,
    ledger: &carbon::CarbonLedger,
) {
    draw_panel(display, EQUIV_X, LADDER_Y, EQUIV_W, LADDER_H, Some("EQUIVALENT TO"));

    let x = EQUIV_X + 6;
    let w = EQUIV_W - 12;

    let mut trees: String<16> = String::new();
    let _ = write!(trees, "{}", ledger.trees_equivalent());
    draw_kv_row(display, x, LADDER_Y + 28, w, "Trees planted", &trees, GREEN);

    let mut cars: String<16> = String::new();
    let _ = write!(cars, "{}/yr", ledger.cars_equivalent());
    draw_kv_row(display, x, LADDER_Y + 42, w, "Cars off road", &cars, WIND_BLUE);

    let mut coal: String<16> = String::new();
    let _ = write!(coal, "{} t", ledger.coal_tonnes_equivalent());
    draw_kv_row(display, x, LADDER_Y + 56, w, "Coal avoided", &coal, BATTERY_PURPLE);
}

/// Draw the 12-month avoidance trend bar chart.
fn draw_trend_chart(display: &mut SimulatorDisplay<Rgb565>) {
    draw_panel(display, TREND_X, TREND_Y, TREND_W, TREND_H, Some("ANNUAL CO2 AVOIDANCE (kg)"));

    let max_avoided = carbon::monthly_trend_max();
    let bars_h = TREND_H as i32 - TREND_BARS_TOP - TREND_LABEL_BAND - 6;
    let floor_y = TREND_Y + TREND_BARS_TOP + bars_h;
    let slot_w = (TREND_W as i32 - 12) as f32 / carbon::MONTHLY_TREND.len() as f32;

    let fill = PrimitiveStyle::with_fill(SOLAR_AMBER);
    for (i, month) in carbon::MONTHLY_TREND.iter().enumerate() {
        let x = TREND_X + 6 + (slot_w * i as f32) as i32;
        let bar_h = (month.avoided_kg as f32 / max_avoided as f32 * bars_h as f32) as i32;
        let bar_w = (slot_w * 0.75) as u32;

        Rectangle::new(
            Point::new(x + (slot_w as i32 - bar_w as i32) / 2, floor_y - bar_h),
            Size::new(bar_w, bar_h as u32),
        )
        .into_styled(fill)
        .draw(display)
        .ok();

        Text::with_text_style(
            month.month,
            Point::new(x + slot_w as i32 / 2, floor_y + 12),
            LABEL_STYLE_DIM,
            CENTERED,
        )
        .draw(display)
        .ok();
    }

    // Reference line at the top of the tallest bar
    let mut peak_label: String<16> = String::new();
    let _ = write!(peak_label, "peak {max_avoided}");
    Text::with_text_style(
        &peak_label,
        Point::new(TREND_X + TREND_W as i32 - 6, TREND_Y + 11),
        embedded_graphics::mono_font::MonoTextStyle::new(crate::styles::LABEL_FONT, LIGHT_GRAY),
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
    fn test_stat_panels_tile_the_width() {
        for pair in STAT_XS.windows(2) {
            assert_eq!(pair[1] - pair[0], STAT_W as i32 + 4, "stat panels must be evenly spaced");
        }
        assert_eq!(STAT_XS[3] + STAT_W as i32, 472, "last stat panel must end at the right margin");
    }

    #[test]
    fn test_trend_panel_fits_the_screen() {
        assert!(
            (TREND_Y + TREND_H as i32) as u32 <= crate::config::SCREEN_HEIGHT,
            "trend panel must not overflow the display"
        );
    }
}
