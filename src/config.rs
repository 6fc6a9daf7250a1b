//! Application configuration constants.
//!
//! # Optimization: Pre-computed Layout Constants
//!
//! Layout calculations like `SCREEN_WIDTH / 4` are computed at compile time as
//! `const`, avoiding per-frame arithmetic. These constants are used throughout
//! the rendering code instead of recalculating positions every frame.
//!
//! # Compile-Time Validation
//!
//! Layout invariants (tiles tile the full width, content area is non-empty)
//! are checked with `const` assertions so a bad configuration fails the build
//! instead of producing a garbled screen.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (simulator window, before SDL scaling).
pub const SCREEN_WIDTH: u32 = 480;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 320;

// =============================================================================
// Metric History Configuration
// =============================================================================

/// Number of telemetry samples kept for trend detection.
/// At one sample per telemetry tick (3s), 20 samples ≈ 1 minute.
pub const HISTORY_SIZE: usize = 20;

/// Minimum difference (kW or %, per channel) between recent and older
/// averages to show a trend arrow. Below this, the tile shows no arrow.
pub const TREND_THRESHOLD: f32 = 0.5;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Interval between simulated telemetry updates. Every tick perturbs each
/// channel with a bounded random delta.
pub const TELEMETRY_INTERVAL: Duration = Duration::from_secs(3);

/// Duration that popups remain visible on screen.
pub const POPUP_DURATION: Duration = Duration::from_secs(3);

// =============================================================================
// Pre-computed Layout Constants (Optimization)
// =============================================================================

/// Title bar height in pixels.
pub const HEADER_HEIGHT: u32 = 20;

/// Tab strip height in pixels (directly below the title bar).
pub const TAB_HEIGHT: u32 = 16;

/// Y coordinate where page content starts (below title bar + tab strip).
pub const CONTENT_Y: u32 = HEADER_HEIGHT + TAB_HEIGHT;

/// Height of the page content area.
pub const CONTENT_HEIGHT: u32 = SCREEN_HEIGHT - CONTENT_Y;

/// Width of each overview tile on the dashboard (screen divided into 4).
/// Pre-computed to avoid division every frame.
pub const TILE_WIDTH: u32 = SCREEN_WIDTH / 4;

/// Height of the overview tile row on the dashboard.
pub const TILE_HEIGHT: u32 = 64;

/// Screen center X coordinate. Used for centering popups and text.
/// Pre-computed as i32 to avoid casts in drawing code.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate. Used for centering popups and text.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// Compile-time validation: tiles must span the full width exactly, and the
// chrome must leave room for content below it.
const _: () = assert!(TILE_WIDTH * 4 == SCREEN_WIDTH);
const _: () = assert!(CONTENT_Y < SCREEN_HEIGHT);
const _: () = assert!(CONTENT_HEIGHT > TILE_HEIGHT);
