//! Title bar and tab strip rendering.
//!
//! The title bar spans the top of the screen: product name on the left,
//! wall clock and optional FPS readout on the right. The tab strip sits
//! directly beneath it, one slot per page, with the active page inverted.
//!
//! Fixed positions are `const Point`s and the fill/stroke styles are const
//! `PrimitiveStyle`s, so nothing is recomputed per redraw (and the header
//! only redraws when the clock second, FPS value, or page changes).

use core::fmt::Write;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;

use crate::{
    colors::{GREEN, HEADER_TEAL, PANEL_BG},
    config::{HEADER_HEIGHT, SCREEN_WIDTH, TAB_HEIGHT},
    pages::{ALL_PAGES, Page},
    styles::{CENTERED, LABEL_STYLE_BLACK, LABEL_STYLE_DIM, LABEL_STYLE_WHITE, LEFT_ALIGNED, RIGHT_ALIGNED, TITLE_STYLE_WHITE},
};

// =============================================================================
// Header Layout Constants (computed at compile time)
// =============================================================================

/// Product name anchor (left-aligned, vertically centered in the bar).
const TITLE_POS: Point = Point::new(6, 15);

/// Clock anchor (right-aligned, 6px from the edge).
const CLOCK_POS: Point = Point::new((SCREEN_WIDTH - 6) as i32, 13);

/// FPS anchor (right-aligned, left of the clock).
const FPS_POS: Point = Point::new((SCREEN_WIDTH - 70) as i32, 13);

/// Header rectangle.
const HEADER_RECT_POS: Point = Point::new(0, 0);
const HEADER_RECT_SIZE: Size = Size::new(SCREEN_WIDTH, HEADER_HEIGHT);

/// Tab strip rectangle.
const TAB_STRIP_POS: Point = Point::new(0, HEADER_HEIGHT as i32);
const TAB_STRIP_SIZE: Size = Size::new(SCREEN_WIDTH, TAB_HEIGHT);

/// Width of each tab slot (strip divided evenly across all pages).
const TAB_WIDTH: u32 = SCREEN_WIDTH / ALL_PAGES.len() as u32;

/// Tab label baseline inside the strip.
const TAB_TEXT_Y: i32 = (HEADER_HEIGHT + TAB_HEIGHT) as i32 - 5;

// Tabs must tile the strip exactly
const _: () = assert!(TAB_WIDTH * ALL_PAGES.len() as u32 == SCREEN_WIDTH);

// =============================================================================
// Pre-computed Primitive Styles
// =============================================================================

/// Teal fill for the title bar.
const HEADER_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(HEADER_TEAL);

/// Dark fill for inactive tab slots.
const TAB_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(PANEL_BG);

/// Green fill for the active tab slot.
const TAB_ACTIVE_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(GREEN);

// =============================================================================
// Drawing Functions
// =============================================================================

/// Draw the title bar with the product name, wall clock, and optional FPS.
pub fn draw_header(
    display: &mut SimulatorDisplay<Rgb565>,
    clock: &str,
    show_fps: bool,
    fps: f32,
) {
    Rectangle::new(HEADER_RECT_POS, HEADER_RECT_SIZE)
        .into_styled(HEADER_FILL_STYLE)
        .draw(display)
        .ok();

    Text::with_text_style("PureGrid", TITLE_POS, TITLE_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    Text::with_text_style(clock, CLOCK_POS, LABEL_STYLE_WHITE, RIGHT_ALIGNED)
        .draw(display)
        .ok();

    if show_fps {
        // heapless::String avoids a format! heap allocation
        let mut fps_str: String<16> = String::new();
        let _ = write!(fps_str, "{fps:.0} FPS");
        Text::with_text_style(&fps_str, FPS_POS, LABEL_STYLE_DIM, RIGHT_ALIGNED)
            .draw(display)
            .ok();
    }
}

/// Draw the tab strip with the active page inverted.
pub fn draw_tab_strip(
    display: &mut SimulatorDisplay<Rgb565>,
    active: Page,
) {
    Rectangle::new(TAB_STRIP_POS, TAB_STRIP_SIZE)
        .into_styled(TAB_FILL_STYLE)
        .draw(display)
        .ok();

    for (i, page) in ALL_PAGES.iter().enumerate() {
        let x = TAB_WIDTH as i32 * i as i32;
        let center = Point::new(x + TAB_WIDTH as i32 / 2, TAB_TEXT_Y);

        if *page == active {
            Rectangle::new(Point::new(x, HEADER_HEIGHT as i32), Size::new(TAB_WIDTH, TAB_HEIGHT))
                .into_styled(TAB_ACTIVE_STYLE)
                .draw(display)
                .ok();
            Text::with_text_style(page.label(), center, LABEL_STYLE_BLACK, CENTERED)
                .draw(display)
                .ok();
        } else {
            Text::with_text_style(page.label(), center, LABEL_STYLE_DIM, CENTERED)
                .draw(display)
                .ok();
        }
    }
}
