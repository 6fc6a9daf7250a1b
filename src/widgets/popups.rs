//! Non-modal popup overlays for status messages.
//!
//! Popups appear centered on screen with a white border and teal background.
//! Only one popup displays at a time (most recent wins). These are non-modal
//! overlays: key input is still processed while a popup is visible, so users
//! can keep switching pages or trigger other actions without waiting.
//!
//! All popup geometry (sizes, centering, text anchors) is `const`, computed
//! at compile time from the screen dimensions; the fill styles are const
//! `PrimitiveStyle`s.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;

use crate::colors::{HEADER_TEAL, WHITE};
use crate::config::{CENTER_X, CENTER_Y, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::styles::{CENTERED, TITLE_STYLE_WHITE};
use heapless::String;

// =============================================================================
// Reset Popup Layout Constants
// =============================================================================

/// Width of the "HISTORY RESET" popup.
const RESET_POPUP_WIDTH: u32 = 200;
/// Height of the "HISTORY RESET" popup.
const RESET_POPUP_HEIGHT: u32 = 60;
const RESET_POPUP_X: i32 = (SCREEN_WIDTH - RESET_POPUP_WIDTH) as i32 / 2;
const RESET_POPUP_Y: i32 = (SCREEN_HEIGHT - RESET_POPUP_HEIGHT) as i32 / 2;

// =============================================================================
// Single-Line Popup Layout Constants (FPS / filter / range)
// =============================================================================

/// Width of the single-line popups.
const LINE_POPUP_WIDTH: u32 = 220;
/// Height of the single-line popups.
const LINE_POPUP_HEIGHT: u32 = 50;
const LINE_POPUP_X: i32 = (SCREEN_WIDTH - LINE_POPUP_WIDTH) as i32 / 2;
const LINE_POPUP_Y: i32 = (SCREEN_HEIGHT - LINE_POPUP_HEIGHT) as i32 / 2;

// =============================================================================
// Pre-computed Text Positions
// =============================================================================

/// First line of the reset popup.
const RESET_TEXT1_POS: Point = Point::new(CENTER_X, CENTER_Y - 5);
/// Second line of the reset popup.
const RESET_TEXT2_POS: Point = Point::new(CENTER_X, CENTER_Y + 15);
/// Single-line popup text (vertically centered).
const LINE_TEXT_POS: Point = Point::new(CENTER_X, CENTER_Y + 5);

// =============================================================================
// Pre-computed Primitive Styles
// =============================================================================

/// White fill style for popup borders.
const WHITE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);

/// Teal fill style for popup backgrounds.
const TEAL_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(HEADER_TEAL);

// =============================================================================
// Pre-computed Rectangle Geometry
// =============================================================================

/// Reset popup border rectangle (outer white rectangle).
const RESET_BORDER_POS: Point = Point::new(RESET_POPUP_X - 3, RESET_POPUP_Y - 3);
const RESET_BORDER_SIZE: Size = Size::new(RESET_POPUP_WIDTH + 6, RESET_POPUP_HEIGHT + 6);

/// Reset popup background rectangle (inner teal rectangle).
const RESET_BG_POS: Point = Point::new(RESET_POPUP_X, RESET_POPUP_Y);
const RESET_BG_SIZE: Size = Size::new(RESET_POPUP_WIDTH, RESET_POPUP_HEIGHT);

/// Single-line popup border rectangle.
const LINE_BORDER_POS: Point = Point::new(LINE_POPUP_X - 3, LINE_POPUP_Y - 3);
const LINE_BORDER_SIZE: Size = Size::new(LINE_POPUP_WIDTH + 6, LINE_POPUP_HEIGHT + 6);

/// Single-line popup background rectangle.
const LINE_BG_POS: Point = Point::new(LINE_POPUP_X, LINE_POPUP_Y);
const LINE_BG_SIZE: Size = Size::new(LINE_POPUP_WIDTH, LINE_POPUP_HEIGHT);

// =============================================================================
// Drawing Functions
// =============================================================================

/// Draw the "TELEMETRY HISTORY RESET" popup.
///
/// Displayed when peak values, trends, and sparklines are reset (B key).
/// White 3px border around a teal background, two lines of text.
pub fn draw_reset_popup(display: &mut SimulatorDisplay<Rgb565>) {
    Rectangle::new(RESET_BORDER_POS, RESET_BORDER_SIZE)
        .into_styled(WHITE_FILL)
        .draw(display)
        .ok();
    Rectangle::new(RESET_BG_POS, RESET_BG_SIZE)
        .into_styled(TEAL_FILL)
        .draw(display)
        .ok();

    Text::with_text_style("TELEMETRY", RESET_TEXT1_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style("HISTORY RESET", RESET_TEXT2_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}

/// Draw a single-line popup frame with `text` centered inside it.
fn draw_line_popup(
    display: &mut SimulatorDisplay<Rgb565>,
    text: &str,
) {
    Rectangle::new(LINE_BORDER_POS, LINE_BORDER_SIZE)
        .into_styled(WHITE_FILL)
        .draw(display)
        .ok();
    Rectangle::new(LINE_BG_POS, LINE_BG_SIZE)
        .into_styled(TEAL_FILL)
        .draw(display)
        .ok();
    Text::with_text_style(text, LINE_TEXT_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}

/// Draw the "FPS ON/OFF" popup (X key).
pub fn draw_fps_toggle_popup(
    display: &mut SimulatorDisplay<Rgb565>,
    fps_enabled: bool,
) {
    // Static string selection, no allocation
    let status = if fps_enabled { "FPS ON" } else { "FPS OFF" };
    draw_line_popup(display, status);
}

/// Draw the alert severity filter popup (A key on the alerts page).
pub fn draw_filter_popup(
    display: &mut SimulatorDisplay<Rgb565>,
    filter_label: &str,
) {
    let mut text: String<24> = String::new();
    let _ = write!(text, "FILTER: {filter_label}");
    draw_line_popup(display, &text);
}

/// Draw the time/forecast range popup (A key on the carbon and analytics
/// pages).
pub fn draw_range_popup(
    display: &mut SimulatorDisplay<Rgb565>,
    range_label: &str,
) {
    let mut text: String<24> = String::new();
    let _ = write!(text, "RANGE: {range_label}");
    draw_line_popup(display, &text);
}
