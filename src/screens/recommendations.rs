//! Optimization recommendations page.
//!
//! A static list of site-optimization recommendations (there is no live
//! optimizer): each entry names its category, priority, expected impact,
//! and execution window. Priorities map to badge colors so the high-value
//! items stand out.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;

use crate::colors::{GREEN, RED, YELLOW};
use crate::styles::{LABEL_STYLE_DIM, LABEL_STYLE_WHITE, LEFT_ALIGNED};
use crate::widgets::primitives::draw_panel;
use crate::widgets::tiles::draw_badge;

// =============================================================================
// Recommendation Model & Dataset
// =============================================================================

/// Recommendation priority, highest urgency first.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MED",
            Self::Low => "LOW",
        }
    }

    pub const fn color(self) -> Rgb565 {
        match self {
            Self::High => RED,
            Self::Medium => YELLOW,
            Self::Low => GREEN,
        }
    }
}

/// One optimization recommendation.
#[derive(Clone, Copy, Debug)]
pub struct Recommendation {
    pub priority: Priority,
    pub category: &'static str,
    pub title: &'static str,
    pub impact: &'static str,
    pub window: &'static str,
}

/// Current recommendation backlog, highest priority first.
pub const RECOMMENDATIONS: [Recommendation; 6] = [
    Recommendation {
        priority: Priority::High,
        category: "Battery",
        title: "Optimize battery charging window",
        impact: "Capture the midday generation peak",
        window: "9:30 - 14:00",
    },
    Recommendation {
        priority: Priority::High,
        category: "Load Mgmt",
        title: "Optimize lab equipment schedule",
        impact: "Raise renewable utilization 34%",
        window: "Mon / Wed / Fri",
    },
    Recommendation {
        priority: Priority::Medium,
        category: "Load Sched",
        title: "Reschedule HVAC operations",
        impact: "Cut grid dependence 23%",
        window: "11:00 - 13:00",
    },
    Recommendation {
        priority: Priority::Medium,
        category: "Maintenance",
        title: "Schedule preventive maintenance",
        impact: "Prevent 15% efficiency loss",
        window: "Thursday morning",
    },
    Recommendation {
        priority: Priority::Low,
        category: "Grid Export",
        title: "Export surplus energy",
        impact: "Monetize the midday surplus",
        window: "12:30 - 13:30",
    },
    Recommendation {
        priority: Priority::Low,
        category: "Upgrade",
        title: "Battery capacity expansion study",
        impact: "Extra 100 kWh improves ROI 23%",
        window: "Next quarter",
    },
];

// =============================================================================
// Page Layout Constants
// =============================================================================

const PANEL_X: i32 = 4;
const PANEL_W: u32 = 472;
const PANEL_Y: i32 = 40;
const PANEL_H: u32 = 276;

/// Height of one recommendation row.
const ROW_H: i32 = 40;

/// Y of the first row inside the panel.
const FIRST_ROW_Y: i32 = PANEL_Y + 30;

// =============================================================================
// Page Rendering
// =============================================================================

/// Draw the recommendations page.
pub fn draw_recommendations_page(display: &mut SimulatorDisplay<Rgb565>) {
    draw_panel(
        display,
        PANEL_X,
        PANEL_Y,
        PANEL_W,
        PANEL_H,
        Some("OPTIMIZATION RECOMMENDATIONS"),
    );

    for (i, rec) in RECOMMENDATIONS.iter().enumerate() {
        let y = FIRST_ROW_Y + i as i32 * ROW_H;

        // Priority-colored stripe down the row's left edge
        Rectangle::new(Point::new(PANEL_X + 6, y - 8), Size::new(3, (ROW_H - 8) as u32))
            .into_styled(PrimitiveStyle::with_fill(rec.priority.color()))
            .draw(display)
            .ok();

        Text::with_text_style(rec.title, Point::new(PANEL_X + 16, y), LABEL_STYLE_WHITE, LEFT_ALIGNED)
            .draw(display)
            .ok();

        // "category | window" detail line, impact on the line below
        let detail_y = y + 12;
        Text::with_text_style(rec.category, Point::new(PANEL_X + 16, detail_y), LABEL_STYLE_DIM, LEFT_ALIGNED)
            .draw(display)
            .ok();
        Text::with_text_style(rec.window, Point::new(PANEL_X + 120, detail_y), LABEL_STYLE_DIM, LEFT_ALIGNED)
            .draw(display)
            .ok();
        Text::with_text_style(
            rec.impact,
            Point::new(PANEL_X + 240, detail_y),
            embedded_graphics::mono_font::MonoTextStyle::new(crate::styles::LABEL_FONT, GREEN),
            LEFT_ALIGNED,
        )
        .draw(display)
        .ok();

        draw_badge(display, PANEL_X + PANEL_W as i32 - 8, y, rec.priority.label(), rec.priority.color());
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_colors() {
        assert_eq!(Priority::High.color(), RED);
        assert_eq!(Priority::Medium.color(), YELLOW);
        assert_eq!(Priority::Low.color(), GREEN);
    }

    #[test]
    fn test_backlog_sorted_by_priority() {
        fn rank(p: Priority) -> u8 {
            match p {
                Priority::High => 0,
                Priority::Medium => 1,
                Priority::Low => 2,
            }
        }
        for pair in RECOMMENDATIONS.windows(2) {
            assert!(
                rank(pair[0].priority) <= rank(pair[1].priority),
                "recommendations must list highest priority first"
            );
        }
    }

    #[test]
    fn test_rows_fit_the_panel() {
        let last_row_end = FIRST_ROW_Y + RECOMMENDATIONS.len() as i32 * ROW_H;
        assert!(
            last_row_end <= PANEL_Y + PANEL_H as i32,
            "all recommendation rows must fit inside the panel"
        );
    }
}
