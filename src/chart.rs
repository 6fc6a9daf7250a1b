//! Energy bar chart: generation vs consumption vs battery.
//!
//! The chart maps four scalar metrics (solar kW, wind kW, consumption kW,
//! battery %) to four vertical bars with gridlines, category labels, in-bar
//! value annotations, and a Y-axis scale.
//!
//! # Two-Phase Rendering
//!
//! Geometry is computed by [`layout`], a pure function from a [`ChartInput`]
//! and a surface size to a [`ChartLayout`] - plain lists of line segments,
//! bar rectangles, and positioned text. [`draw`] then clears the chart
//! surface and replays the layout onto the display. All coordinate math
//! lives in the pure phase, so it is unit-tested without a window.
//!
//! # Scaling
//!
//! The first three bars share one denominator:
//! `scale = max(solar + wind, consumption, 100)`. The floor of 100 prevents
//! division by zero and keeps bars visibly small when all inputs are near
//! zero. The battery bar always normalizes to its own 0-100 range, not the
//! shared scale.
//!
//! # Contract
//!
//! Inputs are pre-clamped by the telemetry layer; the chart does not
//! validate. Rendering is idempotent: the same input and surface size
//! produce the same pixels. The only guard is an early `None` when the
//! margin box leaves no drawable plot area.

use core::fmt::Write;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::Text,
};
use heapless::String;

use crate::colors::{BATTERY_PURPLE, LIGHT_GRAY, PANEL_BG, SOLAR_AMBER, USAGE_RED, WIND_BLUE};
use crate::styles::{CENTERED, LABEL_STYLE_DIM, LABEL_STYLE_WHITE, RIGHT_ALIGNED};

// =============================================================================
// Chart Geometry Constants
// =============================================================================

/// Top inset of the margin box.
pub const MARGIN_TOP: i32 = 20;

/// Right inset of the margin box.
pub const MARGIN_RIGHT: i32 = 20;

/// Bottom inset of the margin box (leaves room for category labels).
pub const MARGIN_BOTTOM: i32 = 40;

/// Left inset of the margin box (leaves room for Y-axis tick labels).
pub const MARGIN_LEFT: i32 = 60;

/// Number of horizontal gridlines (5 equal intervals).
pub const GRIDLINE_COUNT: usize = 6;

/// Lower bound of the shared scale. Keeps the denominator positive and the
/// Y axis readable when every input is near zero.
pub const SCALE_FLOOR: f32 = 100.0;

/// Minimum bar height (px) before the numeric value is overlaid on the bar.
/// Shorter bars cannot fit legible text.
pub const VALUE_LABEL_MIN_HEIGHT: f32 = 20.0;

/// Fraction of each slot reserved as horizontal inset around its bar.
const SLOT_INSET_RATIO: f32 = 0.2;

// =============================================================================
// Input & Series
// =============================================================================

/// One render pass worth of chart data. Produced fresh per frame and
/// discarded after the draw that consumes it.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ChartInput {
    /// Solar generation in kW (non-negative).
    pub solar: f32,
    /// Wind generation in kW (non-negative).
    pub wind: f32,
    /// Campus consumption in kW (non-negative).
    pub consumption: f32,
    /// Battery state of charge in percent (0-100).
    pub battery: f32,
}

impl ChartInput {
    /// Shared denominator for the three kW bars.
    pub fn scale(&self) -> f32 {
        (self.solar + self.wind).max(self.consumption).max(SCALE_FLOOR)
    }
}

/// Chart categories in slot order (left to right).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Series {
    Solar,
    Wind,
    Consumption,
    Battery,
}

/// All series in slot order.
pub const ALL_SERIES: [Series; 4] = [Series::Solar, Series::Wind, Series::Consumption, Series::Battery];

impl Series {
    /// Category label drawn beneath the bar.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Solar => "Solar",
            Self::Wind => "Wind",
            Self::Consumption => "Usage",
            Self::Battery => "Battery",
        }
    }

    /// Bar fill color.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Solar => SOLAR_AMBER,
            Self::Wind => WIND_BLUE,
            Self::Consumption => USAGE_RED,
            Self::Battery => BATTERY_PURPLE,
        }
    }

    /// Pick this series' value out of a [`ChartInput`].
    const fn value(self, input: &ChartInput) -> f32 {
        match self {
            Self::Solar => input.solar,
            Self::Wind => input.wind,
            Self::Consumption => input.consumption,
            Self::Battery => input.battery,
        }
    }
}

// =============================================================================
// Layout Output
// =============================================================================

/// A horizontal gridline segment.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Gridline {
    pub start: Point,
    pub end: Point,
}

/// The in-bar numeric annotation, present only when the bar is tall enough.
#[derive(Clone, PartialEq, Debug)]
pub struct ValueLabel {
    /// Formatted value: one decimal + "kW" for kW series, whole "%" for battery.
    pub text: String<12>,
    /// Centered anchor just below the bar's top edge.
    pub pos: Point,
}

/// One bar slot: rectangle, category label anchor, optional value label.
#[derive(Clone, PartialEq, Debug)]
pub struct Bar {
    pub series: Series,
    /// The raw input value for this series.
    pub value: f32,
    /// Bar height as a fraction of the plot height (0.0-1.0 for in-range input).
    pub frac: f32,
    /// Pixel rectangle, bottom edge on the plot floor.
    pub rect: Rectangle,
    /// Centered anchor for the category label beneath the slot.
    pub label_pos: Point,
    pub value_label: Option<ValueLabel>,
}

/// A Y-axis tick label, right-aligned into the left margin.
#[derive(Clone, PartialEq, Debug)]
pub struct Tick {
    pub text: String<8>,
    pub pos: Point,
}

/// Complete chart geometry for one render pass, in surface-local coordinates.
#[derive(Clone, PartialEq, Debug)]
pub struct ChartLayout {
    pub scale: f32,
    pub gridlines: [Gridline; GRIDLINE_COUNT],
    pub bars: [Bar; 4],
    pub ticks: [Tick; GRIDLINE_COUNT],
}

// =============================================================================
// Pure Layout
// =============================================================================

/// Compute the full chart geometry for `input` on a surface of `size`.
///
/// Returns `None` when the margin box leaves no drawable plot area (the
/// surface is smaller than the insets); callers skip the draw in that case.
pub fn layout(
    input: &ChartInput,
    size: Size,
) -> Option<ChartLayout> {
    let plot_w = size.width as i32 - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = size.height as i32 - MARGIN_TOP - MARGIN_BOTTOM;
    if plot_w < ALL_SERIES.len() as i32 || plot_h < GRIDLINE_COUNT as i32 {
        return None;
    }

    let scale = input.scale();
    let plot_hf = plot_h as f32;
    let interval = plot_hf / (GRIDLINE_COUNT - 1) as f32;

    // Gridlines: 6 equally spaced horizontal lines across the plot width.
    // Endpoints are inclusive, so the right end is plot_w - 1 from the left.
    let gridlines = core::array::from_fn(|i| {
        let y = MARGIN_TOP + (interval * i as f32) as i32;
        Gridline {
            start: Point::new(MARGIN_LEFT, y),
            end: Point::new(MARGIN_LEFT + plot_w - 1, y),
        }
    });

    // Bars: the plot width splits into 4 equal slots, each bar inset inside
    // its slot so neighbours stay visually separated.
    let slot_w = plot_w as f32 / ALL_SERIES.len() as f32;
    let inset = slot_w * SLOT_INSET_RATIO;
    let bar_w = slot_w - inset;
    let floor_y = MARGIN_TOP + plot_h;

    let bars = core::array::from_fn(|i| {
        let series = ALL_SERIES[i];
        let value = series.value(input);
        // Battery always normalizes against its own 0-100 range; the kW
        // series share the dynamic scale.
        let frac = match series {
            Series::Battery => value / 100.0,
            _ => value / scale,
        };
        let height = frac * plot_hf;
        let x = MARGIN_LEFT as f32 + slot_w * i as f32 + inset / 2.0;
        let slot_center = MARGIN_LEFT + (slot_w * i as f32 + slot_w / 2.0) as i32;

        let value_label = if height > VALUE_LABEL_MIN_HEIGHT {
            let mut text: String<12> = String::new();
            match series {
                Series::Battery => {
                    let _ = write!(text, "{value:.0}%");
                }
                _ => {
                    let _ = write!(text, "{value:.1}kW");
                }
            }
            Some(ValueLabel {
                text,
                pos: Point::new(slot_center, floor_y - height as i32 + 15),
            })
        } else {
            None
        };

        Bar {
            series,
            value,
            frac,
            rect: Rectangle::new(
                Point::new(x as i32, floor_y - height as i32),
                Size::new(bar_w as u32, height as u32),
            ),
            label_pos: Point::new(slot_center, size.height as i32 - 10),
            value_label,
        }
    });

    // Y-axis ticks: scale at the top gridline down to 0 at the plot floor,
    // rounded to whole units.
    let ticks = core::array::from_fn(|i| {
        let value = scale / (GRIDLINE_COUNT - 1) as f32 * (GRIDLINE_COUNT - 1 - i) as f32;
        let mut text: String<8> = String::new();
        let _ = write!(text, "{value:.0}");
        Tick {
            text,
            pos: Point::new(MARGIN_LEFT - 10, MARGIN_TOP + (interval * i as f32) as i32 + 4),
        }
    });

    Some(ChartLayout {
        scale,
        gridlines,
        bars,
        ticks,
    })
}

// =============================================================================
// Painter
// =============================================================================

/// Clear the chart surface and redraw it for `input`.
///
/// `origin` is the surface's top-left corner on the display; `size` is the
/// caller-owned surface size. A degenerate surface is silently skipped.
pub fn draw<D>(
    display: &mut D,
    origin: Point,
    size: Size,
    input: &ChartInput,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let Some(chart) = layout(input, size) else {
        return;
    };

    // Clear, then replay the layout.
    Rectangle::new(origin, size)
        .into_styled(PrimitiveStyle::with_fill(PANEL_BG))
        .draw(display)
        .ok();
    paint(display, origin, &chart);
}

/// Replay a computed [`ChartLayout`] onto the display at `origin`.
pub fn paint<D>(
    display: &mut D,
    origin: Point,
    chart: &ChartLayout,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let grid_style = PrimitiveStyle::with_stroke(LIGHT_GRAY, 1);
    for line in &chart.gridlines {
        Line::new(origin + line.start, origin + line.end)
            .into_styled(grid_style)
            .draw(display)
            .ok();
    }

    for bar in &chart.bars {
        if bar.rect.size.height > 0 {
            Rectangle::new(origin + bar.rect.top_left, bar.rect.size)
                .into_styled(PrimitiveStyle::with_fill(bar.series.color()))
                .draw(display)
                .ok();
        }
        Text::with_text_style(bar.series.label(), origin + bar.label_pos, LABEL_STYLE_WHITE, CENTERED)
            .draw(display)
            .ok();
        if let Some(value_label) = &bar.value_label {
            Text::with_text_style(&value_label.text, origin + value_label.pos, LABEL_STYLE_WHITE, CENTERED)
                .draw(display)
                .ok();
        }
    }

    for tick in &chart.ticks {
        Text::with_text_style(&tick.text, origin + tick.pos, LABEL_STYLE_DIM, RIGHT_ALIGNED)
            .draw(display)
            .ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::framebuffer::{Framebuffer, buffer_size};
    use embedded_graphics::pixelcolor::raw::{LittleEndian, RawU16};

    use super::*;

    const SURFACE: Size = Size::new(480, 260);

    fn input(
        solar: f32,
        wind: f32,
        consumption: f32,
        battery: f32,
    ) -> ChartInput {
        ChartInput {
            solar,
            wind,
            consumption,
            battery,
        }
    }

    // -------------------------------------------------------------------------
    // Scale Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_scale_floor() {
        // scale = max(solar + wind, consumption, 100) never drops below 100
        assert_eq!(input(0.0, 0.0, 0.0, 0.0).scale(), 100.0, "all-zero input should hit the floor");
        assert_eq!(input(30.0, 20.0, 40.0, 50.0).scale(), 100.0, "small inputs should hit the floor");
    }

    #[test]
    fn test_scale_tracks_generation() {
        assert_eq!(input(90.0, 40.0, 60.0, 50.0).scale(), 130.0, "scale should be solar + wind when dominant");
    }

    #[test]
    fn test_scale_tracks_consumption() {
        assert_eq!(input(10.0, 20.0, 150.0, 50.0).scale(), 150.0, "scale should be consumption when dominant");
    }

    // -------------------------------------------------------------------------
    // Layout Geometry Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_layout_reference_scenario() {
        // solar 45.2, wind 23.8, consumption 67.3, battery 78
        // scale = max(69.0, 67.3, 100) = 100
        let chart = layout(&input(45.2, 23.8, 67.3, 78.0), SURFACE).unwrap();
        assert_eq!(chart.scale, 100.0);

        assert!((chart.bars[0].frac - 0.452).abs() < 1e-5, "solar fraction should be 0.452");
        assert!((chart.bars[1].frac - 0.238).abs() < 1e-5, "wind fraction should be 0.238");
        assert!((chart.bars[2].frac - 0.673).abs() < 1e-5, "usage fraction should be 0.673");
        assert!((chart.bars[3].frac - 0.78).abs() < 1e-5, "battery fraction should be 0.78");
    }

    #[test]
    fn test_bar_height_monotonic_in_value() {
        // Raising one value (others fixed) must never shrink its bar
        let mut prev = -1.0f32;
        for solar in [0.0, 10.0, 40.0, 80.0, 120.0, 200.0] {
            let chart = layout(&input(solar, 30.0, 60.0, 50.0), SURFACE).unwrap();
            let frac = chart.bars[0].frac;
            assert!(frac > prev, "solar bar must grow with solar value ({solar} kW)");
            prev = frac;
        }
    }

    #[test]
    fn test_battery_bar_independent_of_kw_series() {
        // Battery height depends only on battery and plot height
        let a = layout(&input(10.0, 5.0, 50.0, 64.0), SURFACE).unwrap();
        let b = layout(&input(300.0, 90.0, 250.0, 64.0), SURFACE).unwrap();
        assert_eq!(a.bars[3].rect, b.bars[3].rect, "battery bar must ignore the shared scale");
        assert_eq!(a.bars[3].frac, 0.64, "battery fraction is battery / 100");
    }

    #[test]
    fn test_zero_input_keeps_axis_and_gridlines() {
        let chart = layout(&input(0.0, 0.0, 0.0, 0.0), SURFACE).unwrap();

        assert_eq!(chart.scale, 100.0, "floor prevents division by zero");
        for bar in &chart.bars {
            assert_eq!(bar.rect.size.height, 0, "all bars should be flat at zero");
            assert!(bar.value_label.is_none(), "no value label on a flat bar");
        }
        // Gridlines and ticks are still produced for an empty chart
        assert_eq!(chart.gridlines.len(), GRIDLINE_COUNT);
        assert_eq!(chart.ticks[0].text.as_str(), "100");
        assert_eq!(chart.ticks[GRIDLINE_COUNT - 1].text.as_str(), "0");
    }

    #[test]
    fn test_gridlines_evenly_spaced() {
        let chart = layout(&input(45.2, 23.8, 67.3, 78.0), SURFACE).unwrap();
        let plot_h = SURFACE.height as i32 - MARGIN_TOP - MARGIN_BOTTOM;

        assert_eq!(chart.gridlines[0].start.y, MARGIN_TOP, "first gridline sits on the plot top");
        assert_eq!(
            chart.gridlines[GRIDLINE_COUNT - 1].start.y,
            MARGIN_TOP + plot_h,
            "last gridline sits on the plot floor"
        );
        for pair in chart.gridlines.windows(2) {
            let step = pair[1].start.y - pair[0].start.y;
            // Integer truncation may make intervals differ by at most 1px
            assert!((step - plot_h / 5).abs() <= 1, "gridline spacing should be plot_h / 5");
        }
    }

    #[test]
    fn test_bars_stay_inside_their_slots() {
        let chart = layout(&input(80.0, 40.0, 90.0, 95.0), SURFACE).unwrap();
        let plot_w = SURFACE.width as i32 - MARGIN_LEFT - MARGIN_RIGHT;
        let slot_w = plot_w as f32 / 4.0;

        for (i, bar) in chart.bars.iter().enumerate() {
            let slot_left = MARGIN_LEFT as f32 + slot_w * i as f32;
            let left = bar.rect.top_left.x as f32;
            let right = left + bar.rect.size.width as f32;
            assert!(left >= slot_left, "bar {i} must not spill left of its slot");
            assert!(right <= slot_left + slot_w + 1.0, "bar {i} must not spill right of its slot");
        }
    }

    #[test]
    fn test_value_label_threshold() {
        // plot height 200: battery 5% -> 10px bar, below the 20px threshold
        let chart = layout(&input(45.2, 23.8, 67.3, 5.0), SURFACE).unwrap();
        assert!(chart.bars[3].value_label.is_none(), "10px bar must not carry a label");
        assert_eq!(
            chart.bars[0].value_label.as_ref().unwrap().text.as_str(),
            "45.2kW",
            "kW series labels use one decimal + kW"
        );
    }

    #[test]
    fn test_battery_label_is_whole_percent() {
        let chart = layout(&input(45.2, 23.8, 67.3, 78.4), SURFACE).unwrap();
        assert_eq!(
            chart.bars[3].value_label.as_ref().unwrap().text.as_str(),
            "78%",
            "battery label uses whole percent"
        );
    }

    #[test]
    fn test_tick_values_descend_from_scale() {
        let chart = layout(&input(90.0, 60.0, 80.0, 50.0), SURFACE).unwrap();
        // scale = 150 -> ticks 150, 120, 90, 60, 30, 0
        let expected = ["150", "120", "90", "60", "30", "0"];
        for (tick, want) in chart.ticks.iter().zip(expected) {
            assert_eq!(tick.text.as_str(), want);
        }
    }

    #[test]
    fn test_degenerate_surface_skipped() {
        // Margin box (60 left + 20 right, 20 top + 40 bottom) swallows the surface
        assert!(layout(&input(1.0, 2.0, 3.0, 4.0), Size::new(80, 60)).is_none());
        assert!(layout(&input(1.0, 2.0, 3.0, 4.0), Size::new(0, 0)).is_none());
    }

    #[test]
    fn test_layout_is_deterministic() {
        let data = input(45.2, 23.8, 67.3, 78.0);
        assert_eq!(layout(&data, SURFACE), layout(&data, SURFACE), "same input must yield the same geometry");
    }

    // -------------------------------------------------------------------------
    // Pixel-Level Tests (framebuffer, no window required)
    // -------------------------------------------------------------------------

    const FB_W: usize = 160;
    const FB_H: usize = 120;
    type TestFrame = Framebuffer<Rgb565, RawU16, LittleEndian, FB_W, FB_H, { buffer_size::<Rgb565>(FB_W, FB_H) }>;

    fn fb_size() -> Size {
        Size::new(FB_W as u32, FB_H as u32)
    }

    #[test]
    fn test_draw_is_idempotent() {
        let data = input(45.2, 23.8, 67.3, 78.0);

        let mut once = TestFrame::new();
        draw(&mut once, Point::zero(), fb_size(), &data);

        let mut twice = TestFrame::new();
        draw(&mut twice, Point::zero(), fb_size(), &data);
        draw(&mut twice, Point::zero(), fb_size(), &data);

        assert_eq!(once.data(), twice.data(), "drawing twice must not change a single pixel");
    }

    #[test]
    fn test_draw_overwrites_previous_frame() {
        let mut stale = TestFrame::new();
        draw(&mut stale, Point::zero(), fb_size(), &input(90.0, 45.0, 80.0, 95.0));
        draw(&mut stale, Point::zero(), fb_size(), &input(45.2, 23.8, 67.3, 78.0));

        let mut fresh = TestFrame::new();
        draw(&mut fresh, Point::zero(), fb_size(), &input(45.2, 23.8, 67.3, 78.0));

        assert_eq!(stale.data(), fresh.data(), "the clear must remove every stale pixel");
    }

    #[test]
    fn test_zero_input_still_draws_chrome() {
        let mut frame = TestFrame::new();
        draw(&mut frame, Point::zero(), fb_size(), &input(0.0, 0.0, 0.0, 0.0));

        let blank = TestFrame::new();
        assert_ne!(frame.data(), blank.data(), "gridlines and labels must appear even with zero bars");
    }
}
