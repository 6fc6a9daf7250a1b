// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in graphics calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive
#![allow(clippy::too_many_lines)] // main() is long but well-structured

//! PureGrid campus energy dashboard.
//!
//! A desktop simulator visualizing renewable-energy metrics for a hybrid
//! campus installation:
//! - Solar array output and efficiency
//! - Wind turbine output and efficiency
//! - Battery storage charge and charge direction
//! - Grid import and campus consumption
//!
//! There is no backend: telemetry is generated in-process by a bounded
//! random walk and every other dataset (alerts, forecasts, carbon figures,
//! reports) is static. The centerpiece is the generation-vs-consumption
//! bar chart, computed as pure geometry and replayed onto the display.
//!
//! # Controls (Simulator Mode)
//!
//! | Button | Key | Action |
//! |--------|-----|--------|
//! | Y | `Y` | Cycle to the next page |
//! | X | `X` | Toggle FPS display on/off |
//! | A | `A` | Page action: cycle alert filter / carbon range / forecast range |
//! | B | `B` | Page action: acknowledge visible alerts / reset telemetry history |
//!
//! Key repeat is ignored to prevent toggle spam when holding keys.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │  PureGrid              12:45:03     50 FPS    │  20px title bar
//! ├───────┬────────┬────────┬───────┬──────┬──────┤
//! │ LIVE  │FORECAST│OPTIMIZE│CARBON │ALERTS│REPORT│  16px tab strip
//! ├───────┴────────┴────────┴───────┴──────┴──────┤
//! │                                               │
//! │            active page content                │  284px
//! │                                               │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! The main loop is single-threaded and event-driven: window events, a
//! 3-second telemetry tick, and a ~50 FPS frame cadence, all serialized on
//! one thread. The renderer never mutates telemetry; it consumes the
//! snapshot the loop hands it.

mod alerts;
mod carbon;
mod chart;
mod colors;
mod config;
mod forecast;
mod pages;
mod render;
mod reports;
mod screens;
mod state;
mod styles;
mod telemetry;
mod widgets;

use core::fmt::Write as _;
use std::thread;
use std::time::Instant;

use chrono::Local;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;

use crate::alerts::AlertLog;
use crate::carbon::TimeRange;
use crate::colors::BLACK;
use crate::config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH, TELEMETRY_INTERVAL};
use crate::forecast::ForecastRange;
use crate::pages::Page;
use crate::render::{Popup, RenderState};
use crate::screens::dashboard::DashboardHistories;
use crate::screens::{
    alerts::draw_alerts_page, analytics::draw_analytics_page, carbon::draw_carbon_page,
    dashboard::draw_dashboard_page, loading::run_loading_screen, recommendations::draw_recommendations_page,
    reports::draw_reports_page,
};
use crate::telemetry::{SimulatedTelemetry, TelemetrySource};
use crate::widgets::header::{draw_header, draw_tab_strip};
use crate::widgets::popups::{draw_filter_popup, draw_fps_toggle_popup, draw_range_popup, draw_reset_popup};

fn main() {
    env_logger::init();
    log::info!("PureGrid dashboard starting");

    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("PureGrid Energy Dashboard", &output_settings);

    // Initial clear before boot sequence
    display.clear(BLACK).ok();
    window.update(&display);

    // Boot screen; returns false if the user closes the window during boot
    if !run_loading_screen(&mut display, &mut window) {
        return;
    }

    // ==========================================================================
    // Main Loop State
    // ==========================================================================

    // Telemetry simulation and the snapshot currently on screen
    let mut source = SimulatedTelemetry::new();
    let mut snapshot = source.current();
    let mut last_tick = Instant::now();

    // Histories behind the overview tiles (seeded with the first sample)
    let mut histories = DashboardHistories::default();
    histories.update(&snapshot);

    // Interactive page state
    let mut alert_log = AlertLog::seeded();
    let mut carbon_range = TimeRange::default();
    let mut forecast_range = ForecastRange::default();
    let mut current_page = Page::default();
    let mut page_just_switched = false;

    // Active popup (only one at a time, most recent wins)
    let mut active_popup: Option<Popup> = None;

    // FPS counter state (X button toggles)
    let mut show_fps = true;
    let mut last_fps_calc = Instant::now();
    let mut fps_frame_count = 0u32;
    let mut current_fps = 0.0f32;

    // Frame counter for blink timing (wraps to avoid overflow)
    let mut frame_count = 0u32;

    // Dirty tracking for the header and popup cleanup
    let mut render_state = RenderState::new();

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        // Handle window events (close, button presses)
        // Button mapping:
        //   Y - Cycle page
        //   X - Toggle FPS display
        //   A - Page action (filter / range cycling)
        //   B - Page action (acknowledge / reset history)
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent toggle spam
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Y => {
                            current_page = current_page.next();
                            page_just_switched = true;
                            active_popup = None; // Cancel popup when switching pages
                            log::info!("page: {}", current_page.title());
                        }
                        Keycode::X => {
                            show_fps = !show_fps;
                            active_popup = Some(Popup::Fps(Instant::now()));
                            log::debug!("fps display: {}", if show_fps { "on" } else { "off" });
                        }
                        Keycode::A => match current_page {
                            Page::Alerts => {
                                alert_log.cycle_filter();
                                active_popup = Some(Popup::Filter(Instant::now()));
                                log::debug!("alert filter: {}", alert_log.filter.label());
                            }
                            Page::Carbon => {
                                carbon_range = carbon_range.next();
                                active_popup = Some(Popup::Range(Instant::now()));
                                log::debug!("carbon range: {}", carbon_range.label());
                            }
                            Page::Analytics => {
                                forecast_range = forecast_range.next();
                                active_popup = Some(Popup::Range(Instant::now()));
                                log::debug!("forecast range: {}", forecast_range.label());
                            }
                            _ => {}
                        },
                        Keycode::B => match current_page {
                            Page::Alerts => {
                                let acked = alert_log.acknowledge_visible();
                                log::info!("acknowledged {acked} alerts");
                            }
                            _ => {
                                source.reset_peaks();
                                histories.reset();
                                snapshot = source.current();
                                // Re-seed from the current snapshot so the
                                // next comparison starts fresh instead of
                                // instantly re-flagging a peak
                                histories.update(&snapshot);
                                active_popup = Some(Popup::Reset(Instant::now()));
                                log::info!("telemetry history reset");
                            }
                        },
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Check if the popup has expired BEFORE updating render state, so
        // cleanup happens in the same frame the popup disappears
        if let Some(ref popup) = active_popup
            && popup.is_expired()
        {
            active_popup = None;
        }

        render_state.update_popup(active_popup.as_ref());

        // Clear on first frame, when a popup just closed, or on page switch.
        // Popup remnants (especially the white border) span panels and need
        // a full clear; page switches leave the previous page's content.
        if render_state.is_first_frame() || render_state.popup_just_closed() || page_just_switched {
            display.clear(BLACK).ok();
            if page_just_switched {
                render_state.mark_display_cleared();
            }
        }

        // ======================================================================
        // Telemetry Tick (every 3 seconds)
        // ======================================================================

        if last_tick.elapsed() >= TELEMETRY_INTERVAL {
            snapshot = source.sample();
            histories.update(&snapshot);
            last_tick = Instant::now();
        }

        // ======================================================================
        // FPS Calculation (updated once per second)
        // ======================================================================

        fps_frame_count += 1;
        if last_fps_calc.elapsed().as_secs() >= 1 {
            current_fps = fps_frame_count as f32 / last_fps_calc.elapsed().as_secs_f32();
            fps_frame_count = 0;
            last_fps_calc = Instant::now();
        }

        // ======================================================================
        // Header + Tab Strip (conditional redraw)
        // ======================================================================

        let now = Local::now();
        if render_state.check_header_dirty(show_fps, current_fps, now.timestamp()) {
            let mut clock: String<12> = String::new();
            let _ = write!(clock, "{}", now.format("%H:%M:%S"));
            draw_header(&mut display, &clock, show_fps, current_fps);
            draw_tab_strip(&mut display, current_page);
        }

        // ======================================================================
        // Page Rendering
        // ======================================================================

        // Blink state for unacked critical alerts (~4Hz toggle at 50 FPS)
        let blink_on = (frame_count / 6).is_multiple_of(2);

        match current_page {
            Page::Dashboard => draw_dashboard_page(&mut display, &snapshot, &histories),
            Page::Analytics => draw_analytics_page(&mut display, forecast_range),
            Page::Recommendations => draw_recommendations_page(&mut display),
            Page::Carbon => draw_carbon_page(&mut display, carbon_range),
            Page::Alerts => draw_alerts_page(&mut display, &alert_log, blink_on),
            Page::Reports => draw_reports_page(&mut display),
        }

        // ======================================================================
        // Popups (drawn last so they sit on top)
        // ======================================================================

        if let Some(ref popup) = active_popup {
            match popup {
                Popup::Reset(_) => draw_reset_popup(&mut display),
                Popup::Fps(_) => draw_fps_toggle_popup(&mut display, show_fps),
                Popup::Filter(_) => draw_filter_popup(&mut display, alert_log.filter.label()),
                Popup::Range(_) => {
                    let label = match current_page {
                        Page::Analytics => forecast_range.label(),
                        _ => carbon_range.label(),
                    };
                    draw_range_popup(&mut display, label);
                }
            }
        }

        // ======================================================================
        // Frame Pacing
        // ======================================================================

        render_state.end_frame();
        page_just_switched = false;

        window.update(&display);
        frame_count = frame_count.wrapping_add(1);

        // Sleep out the remainder of the frame budget (~50 FPS)
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}
