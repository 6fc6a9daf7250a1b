//! Page navigation for the multi-tab dashboard.
//!
//! Supports cycling through the six dashboard views with the page key.
//! The tab strip under the header shows every page and highlights the
//! active one.
//!
//! # Pages
//!
//! - [`Page::Dashboard`]: live metrics, energy chart, system status
//! - [`Page::Analytics`]: generation/demand forecasts with operational advice
//! - [`Page::Recommendations`]: optimization recommendation list
//! - [`Page::Carbon`]: carbon avoidance ledger, milestones, annual trend
//! - [`Page::Alerts`]: system alerts with severity filter
//! - [`Page::Reports`]: generated report catalog

/// Available pages in the dashboard application.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// Live dashboard: overview tiles, energy chart, status and summary panels.
    #[default]
    Dashboard,

    /// Predictive analytics: forecast datasets and recommendations.
    Analytics,

    /// Optimization recommendations list.
    Recommendations,

    /// Carbon footprint tracker.
    Carbon,

    /// System alerts and notifications.
    Alerts,

    /// Report catalog.
    Reports,
}

/// All pages in tab-strip order.
pub const ALL_PAGES: [Page; 6] = [
    Page::Dashboard,
    Page::Analytics,
    Page::Recommendations,
    Page::Carbon,
    Page::Alerts,
    Page::Reports,
];

impl Page {
    /// Advance to the next page, wrapping from Reports back to Dashboard.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Dashboard => Self::Analytics,
            Self::Analytics => Self::Recommendations,
            Self::Recommendations => Self::Carbon,
            Self::Carbon => Self::Alerts,
            Self::Alerts => Self::Reports,
            Self::Reports => Self::Dashboard,
        }
    }

    /// Short label shown in the tab strip.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "LIVE",
            Self::Analytics => "FORECAST",
            Self::Recommendations => "OPTIMIZE",
            Self::Carbon => "CARBON",
            Self::Alerts => "ALERTS",
            Self::Reports => "REPORTS",
        }
    }

    /// Full page title shown in the log when switching.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Live Dashboard",
            Self::Analytics => "Predictive Analytics",
            Self::Recommendations => "Recommendations",
            Self::Carbon => "Carbon Tracker",
            Self::Alerts => "Alerts",
            Self::Reports => "Reports",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_default() {
        assert_eq!(Page::default(), Page::Dashboard);
    }

    #[test]
    fn test_page_next_order_matches_tab_strip() {
        let mut page = Page::Dashboard;
        for expected in ALL_PAGES.iter().skip(1) {
            page = page.next();
            assert_eq!(page, *expected, "next() must follow tab-strip order");
        }
    }

    #[test]
    fn test_page_next_wraps_around() {
        let mut page = Page::default();
        for _ in 0..ALL_PAGES.len() {
            page = page.next();
        }
        assert_eq!(page, Page::Dashboard, "full cycle should return to start");
    }

    #[test]
    fn test_page_labels_are_unique() {
        for (i, a) in ALL_PAGES.iter().enumerate() {
            for b in ALL_PAGES.iter().skip(i + 1) {
                assert_ne!(a.label(), b.label(), "tab labels must be distinct");
            }
        }
    }
}
