//! Color constants for the energy dashboard.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! Standard colors come from the `RgbColor` trait constants; series and
//! status colors are custom values quantized from the product palette.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait - guaranteed optimal values)
// =============================================================================

/// Pure black (0, 0, 0). Used for backgrounds and dark text.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Used for text on dark backgrounds.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). Used for critical alerts and deficit values.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green (0, 63, 0). Used for optimal status and surplus values.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure yellow (31, 63, 0). Used for warning badges.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Series Colors (one per chart category)
// =============================================================================

/// Amber for the solar series and solar status rows.
pub const SOLAR_AMBER: Rgb565 = Rgb565::new(31, 47, 4);

/// Medium blue for the wind series and wind status rows.
pub const WIND_BLUE: Rgb565 = Rgb565::new(7, 32, 30);

/// Soft red for the consumption ("Usage") series and grid-dependence tile.
pub const USAGE_RED: Rgb565 = Rgb565::new(29, 17, 8);

/// Violet for the battery series and battery status rows.
pub const BATTERY_PURPLE: Rgb565 = Rgb565::new(17, 23, 30);

// =============================================================================
// Chrome & Status Colors (application-specific)
// =============================================================================

/// Dark teal header fill.
pub const HEADER_TEAL: Rgb565 = Rgb565::new(1, 22, 12);

/// Dark gray for panel outlines and divider lines. Subtle enough to not
/// distract from data.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Light neutral gray for chart gridlines and secondary text.
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(18, 38, 18);

/// Very dark gray panel background, one step above black so panels read as
/// distinct surfaces.
pub const PANEL_BG: Rgb565 = Rgb565::new(3, 6, 3);

/// Orange for warnings and discharging indicators.
/// RGB565: (31, 32, 0) - slightly darker than yellow.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Muted cyan for informational alert badges.
pub const INFO_CYAN: Rgb565 = Rgb565::new(4, 40, 25);
