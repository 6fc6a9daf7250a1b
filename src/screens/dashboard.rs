//! Live dashboard page: overview tiles, the energy chart, and the status,
//! weather, balance, and summary panels.
//!
//! ```text
//! ┌──────────┬──────────┬──────────┬──────────┐
//! │ TOTAL GEN│ SELF USE │ BATTERY  │ GRID DEP │  64px tiles
//! ├──────────┴───────┬──┴──────────┴──────────┤
//! │  GEN VS USAGE    │     SYSTEM STATUS      │
//! │  (bar chart)     │  Solar Array   [OPTIMAL]│ 152px
//! │                  │  Wind Turbine  [GOOD]   │
//! │                  │  Battery Storage [CHRG] │
//! ├──────────┬───────┴───────┬────────────────┤
//! │ WEATHER  │ ENERGY BALANCE│ TODAY          │  56px
//! └──────────┴───────────────┴────────────────┘
//! ```
//!
//! Every element redraws each frame; telemetry animates continuously, so
//! repainting panel surfaces is what erases stale values.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;

use crate::chart::{self, ChartInput};
use crate::colors::{BATTERY_PURPLE, GREEN, INFO_CYAN, ORANGE, SOLAR_AMBER, USAGE_RED, WHITE, WIND_BLUE, YELLOW};
use crate::config::{CONTENT_Y, TILE_HEIGHT, TILE_WIDTH};
use crate::state::MetricHistory;
use crate::telemetry::{AssetStatus, Telemetry};
use crate::widgets::primitives::draw_panel;
use crate::widgets::tiles::{draw_kv_row, draw_metric_tile, draw_status_row};

// =============================================================================
// Page Layout Constants
// =============================================================================

/// Y coordinate of the middle band (chart + status panels).
const MID_Y: i32 = (CONTENT_Y + TILE_HEIGHT) as i32 + 4;

/// Height of the middle band.
const MID_H: u32 = 152;

/// Chart panel geometry. The chart surface sits 1px inside the outline.
const CHART_PANEL_X: i32 = 4;
const CHART_PANEL_W: u32 = 272;
const CHART_ORIGIN: Point = Point::new(CHART_PANEL_X + 1, MID_Y + 1);
const CHART_SIZE: Size = Size::new(CHART_PANEL_W - 2, MID_H - 2);

/// Status panel geometry.
const STATUS_X: i32 = 280;
const STATUS_W: u32 = 196;

/// Y coordinate of the bottom band (weather / balance / summary panels).
const BOTTOM_Y: i32 = MID_Y + MID_H as i32 + 4;

/// Height of the bottom band.
const BOTTOM_H: u32 = 56;

// =============================================================================
// Metric Histories
// =============================================================================

/// Histories behind the four overview tiles. Fed once per telemetry tick.
#[derive(Default)]
pub struct DashboardHistories {
    pub generation: MetricHistory,
    pub self_use: MetricHistory,
    pub battery: MetricHistory,
    pub grid: MetricHistory,
}

impl DashboardHistories {
    /// Record one telemetry tick across all four tiles.
    pub fn update(
        &mut self,
        telemetry: &Telemetry,
    ) {
        let energy = &telemetry.energy;
        self.generation.update(energy.total_generation());
        self.self_use.update(energy.self_consumption());
        self.battery.update(energy.battery.charge_pct);
        self.grid.update(energy.grid_dependence());
    }

    /// Forget trends, peaks, and sparklines (reset key).
    pub fn reset(&mut self) {
        self.generation.reset();
        self.self_use.reset();
        self.battery.reset();
        self.grid.reset();
    }
}

// =============================================================================
// Page Rendering
// =============================================================================

/// Draw the complete live dashboard page.
pub fn draw_dashboard_page(
    display: &mut SimulatorDisplay<Rgb565>,
    telemetry: &Telemetry,
    histories: &DashboardHistories,
) {
    let energy = &telemetry.energy;

    draw_overview_tiles(display, telemetry, histories);

    // Energy chart: generation vs consumption vs battery
    draw_panel(display, CHART_PANEL_X, MID_Y, CHART_PANEL_W, MID_H, None);
    let input = ChartInput {
        solar: energy.solar.output_kw,
        wind: energy.wind.output_kw,
        consumption: energy.consumption.demand_kw,
        battery: energy.battery.charge_pct,
    };
    chart::draw(display, CHART_ORIGIN, CHART_SIZE, &input);
    // Caption painted after the chart cleared its surface; it lives in the
    // chart's top margin
    embedded_graphics::text::Text::with_text_style(
        "GEN VS USAGE",
        Point::new(CHART_PANEL_X + 6, MID_Y + 12),
        crate::styles::LABEL_STYLE_DIM,
        crate::styles::LEFT_ALIGNED,
    )
    .draw(display)
    .ok();

    draw_status_panel(display, telemetry);
    draw_weather_panel(display, telemetry);
    draw_balance_panel(display, telemetry);
    draw_summary_panel(display, telemetry);
}

/// Draw the four overview tiles across the top of the page.
fn draw_overview_tiles(
    display: &mut SimulatorDisplay<Rgb565>,
    telemetry: &Telemetry,
    histories: &DashboardHistories,
) {
    let energy = &telemetry.energy;

    let mut gen_text: String<16> = String::new();
    let _ = write!(gen_text, "{:.1}kW", energy.total_generation());
    draw_metric_tile(
        display,
        0,
        CONTENT_Y,
        TILE_WIDTH,
        TILE_HEIGHT,
        "TOTAL GEN",
        &gen_text,
        SOLAR_AMBER,
        &histories.generation,
    );

    let mut self_text: String<16> = String::new();
    let _ = write!(self_text, "{:.1}kW", energy.self_consumption());
    draw_metric_tile(
        display,
        TILE_WIDTH,
        CONTENT_Y,
        TILE_WIDTH,
        TILE_HEIGHT,
        "SELF USE",
        &self_text,
        WIND_BLUE,
        &histories.self_use,
    );

    let mut batt_text: String<16> = String::new();
    let _ = write!(batt_text, "{:.0}%", energy.battery.charge_pct);
    draw_metric_tile(
        display,
        TILE_WIDTH * 2,
        CONTENT_Y,
        TILE_WIDTH,
        TILE_HEIGHT,
        "BATTERY",
        &batt_text,
        BATTERY_PURPLE,
        &histories.battery,
    );

    let mut grid_text: String<16> = String::new();
    let _ = write!(grid_text, "{:.1}kW", energy.grid_dependence());
    draw_metric_tile(
        display,
        TILE_WIDTH * 3,
        CONTENT_Y,
        TILE_WIDTH,
        TILE_HEIGHT,
        "GRID DEP",
        &grid_text,
        USAGE_RED,
        &histories.grid,
    );
}

/// Badge color for an asset status.
const fn status_color(status: AssetStatus) -> Rgb565 {
    match status {
        AssetStatus::Optimal => GREEN,
        AssetStatus::Good => INFO_CYAN,
        AssetStatus::Warning => YELLOW,
    }
}

/// Draw the system status panel: one row per asset with a badge.
fn draw_status_panel(
    display: &mut SimulatorDisplay<Rgb565>,
    telemetry: &Telemetry,
) {
    let energy = &telemetry.energy;
    draw_panel(display, STATUS_X, MID_Y, STATUS_W, MID_H, Some("SYSTEM STATUS"));

    let row_x = STATUS_X + 6;
    let row_w = STATUS_W - 12;

    let solar_status = AssetStatus::from_efficiency(energy.solar.efficiency_pct);
    let mut solar_detail: String<32> = String::new();
    let _ = write!(
        solar_detail,
        "{:.1} kW | {:.0}% eff",
        energy.solar.output_kw, energy.solar.efficiency_pct
    );
    draw_status_row(
        display,
        row_x,
        MID_Y + 34,
        row_w,
        "Solar Array",
        &solar_detail,
        solar_status.label(),
        status_color(solar_status),
    );

    let wind_status = AssetStatus::from_efficiency(energy.wind.efficiency_pct);
    let mut wind_detail: String<32> = String::new();
    let _ = write!(
        wind_detail,
        "{:.1} kW | {:.0}% eff",
        energy.wind.output_kw, energy.wind.efficiency_pct
    );
    draw_status_row(
        display,
        row_x,
        MID_Y + 76,
        row_w,
        "Wind Turbine",
        &wind_detail,
        wind_status.label(),
        status_color(wind_status),
    );

    let mut batt_detail: String<32> = String::new();
    let _ = write!(
        batt_detail,
        "{:.0}% | {:.0} kWh cap",
        energy.battery.charge_pct, energy.battery.capacity_kwh
    );
    let (batt_label, batt_color) = if energy.battery_charging() {
        ("CHARGING", GREEN)
    } else {
        ("DISCHARGE", ORANGE)
    };
    draw_status_row(
        display,
        row_x,
        MID_Y + 118,
        row_w,
        "Battery Storage",
        &batt_detail,
        batt_label,
        batt_color,
    );
}

/// Draw the current weather panel.
fn draw_weather_panel(
    display: &mut SimulatorDisplay<Rgb565>,
    telemetry: &Telemetry,
) {
    let weather = &telemetry.weather;
    draw_panel(display, 4, BOTTOM_Y, 152, BOTTOM_H, Some("WEATHER"));

    let x = 10;
    let w = 140;

    let mut irradiance: String<16> = String::new();
    let _ = write!(irradiance, "{:.0} W/m2", weather.irradiance_wm2);
    draw_kv_row(display, x, BOTTOM_Y + 24, w, "Irradiance", &irradiance, SOLAR_AMBER);

    let mut wind_speed: String<16> = String::new();
    let _ = write!(wind_speed, "{:.1} m/s", weather.wind_speed_ms);
    draw_kv_row(display, x, BOTTOM_Y + 36, w, "Wind", &wind_speed, WIND_BLUE);

    let mut temperature: String<16> = String::new();
    let _ = write!(temperature, "{:.1} C", weather.temperature_c);
    draw_kv_row(display, x, BOTTOM_Y + 48, w, weather.forecast, &temperature, WHITE);
}

/// Draw the energy balance panel. The surplus row only appears while
/// exporting.
fn draw_balance_panel(
    display: &mut SimulatorDisplay<Rgb565>,
    telemetry: &Telemetry,
) {
    let energy = &telemetry.energy;
    draw_panel(display, 160, BOTTOM_Y, 156, BOTTOM_H, Some("ENERGY BALANCE"));

    let x = 166;
    let w = 144;

    let mut generation: String<16> = String::new();
    let _ = write!(generation, "{:.1} kW", energy.total_generation());
    draw_kv_row(display, x, BOTTOM_Y + 22, w, "Generation", &generation, GREEN);

    let mut self_use: String<16> = String::new();
    let _ = write!(self_use, "{:.1} kW", energy.self_consumption());
    draw_kv_row(display, x, BOTTOM_Y + 33, w, "Self Use", &self_use, WIND_BLUE);

    let mut import: String<16> = String::new();
    let _ = write!(import, "{:.1} kW", energy.grid_dependence());
    draw_kv_row(display, x, BOTTOM_Y + 44, w, "Grid Import", &import, USAGE_RED);

    if energy.surplus() > 0.0 {
        let mut surplus: String<16> = String::new();
        let _ = write!(surplus, "{:.1} kW", energy.surplus());
        draw_kv_row(display, x, BOTTOM_Y + 55, w, "Surplus", &surplus, BATTERY_PURPLE);
    }
}

/// Draw the today's summary panel.
fn draw_summary_panel(
    display: &mut SimulatorDisplay<Rgb565>,
    telemetry: &Telemetry,
) {
    let energy = &telemetry.energy;
    draw_panel(display, 320, BOTTOM_Y, 156, BOTTOM_H, Some("TODAY"));

    let x = 326;
    let w = 144;

    draw_kv_row(display, x, BOTTOM_Y + 22, w, "Generated", "1245 kWh", GREEN);

    let mut peak: String<16> = String::new();
    let _ = write!(peak, "{:.1} kW", energy.consumption.peak_kw);
    draw_kv_row(display, x, BOTTOM_Y + 33, w, "Peak Load", &peak, USAGE_RED);

    draw_kv_row(display, x, BOTTOM_Y + 44, w, "CO2 Avoided", "892 kg", GREEN);

    let mut renewable: String<16> = String::new();
    let _ = write!(renewable, "{:.1}%", energy.renewable_share_pct());
    draw_kv_row(display, x, BOTTOM_Y + 55, w, "Renewable", &renewable, BATTERY_PURPLE);
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::{SimulatedTelemetry, TelemetrySource};

    #[test]
    fn test_histories_follow_derived_metrics() {
        let mut source = SimulatedTelemetry::seeded(9);
        let mut histories = DashboardHistories::default();

        for _ in 0..10 {
            let t = source.sample();
            histories.update(&t);
        }

        let t = source.current();
        assert!(histories.generation.max().is_some(), "generation history should have samples");
        // The last recorded battery sample equals the current charge
        let (buffer, start, count, _, _) = histories.battery.graph_data();
        let last = buffer[(start + count - 1) % crate::state::GRAPH_HISTORY_SIZE];
        assert_eq!(last, t.energy.battery.charge_pct);
    }

    #[test]
    fn test_histories_reset_clears_all() {
        let mut source = SimulatedTelemetry::seeded(2);
        let mut histories = DashboardHistories::default();
        for _ in 0..5 {
            histories.update(&source.sample());
        }
        histories.reset();

        assert!(histories.generation.max().is_none());
        assert!(histories.self_use.max().is_none());
        assert!(histories.battery.max().is_none());
        assert!(histories.grid.max().is_none());
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(status_color(AssetStatus::Optimal), GREEN);
        assert_eq!(status_color(AssetStatus::Good), INFO_CYAN);
        assert_eq!(status_color(AssetStatus::Warning), YELLOW);
    }

    #[test]
    fn test_middle_band_fits_the_screen() {
        assert!(
            BOTTOM_Y as u32 + BOTTOM_H <= crate::config::SCREEN_HEIGHT,
            "bottom band must not overflow the display"
        );
    }
}
