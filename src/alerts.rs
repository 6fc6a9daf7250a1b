//! System alerts: seeded notification list with severity filtering.
//!
//! Alerts are a static dataset (there is no live alerting pipeline); the
//! interactive state is which severity filter is active and which alerts
//! have been acknowledged. The alerts page key cycles the filter; the
//! acknowledge key marks everything currently visible as read.

/// Alert severity, in badge order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Severity {
    Critical,
    Warning,
    Info,
    Success,
}

impl Severity {
    /// Badge text.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "CRIT",
            Self::Warning => "WARN",
            Self::Info => "INFO",
            Self::Success => "OK",
        }
    }
}

/// One alert entry.
#[derive(Clone, Copy, Debug)]
pub struct Alert {
    pub severity: Severity,
    pub title: &'static str,
    pub message: &'static str,
    pub timestamp: &'static str,
    pub source: &'static str,
    pub acknowledged: bool,
}

/// Severity filter cycled by the alerts-page key.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum SeverityFilter {
    #[default]
    All,
    Critical,
    Warning,
    Info,
    Success,
}

impl SeverityFilter {
    /// Advance to the next filter, wrapping back to All.
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Critical,
            Self::Critical => Self::Warning,
            Self::Warning => Self::Info,
            Self::Info => Self::Success,
            Self::Success => Self::All,
        }
    }

    /// Filter label for the popup and the page caption.
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Critical => "CRITICAL",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Success => "SUCCESS",
        }
    }

    /// Whether an alert of `severity` passes this filter.
    pub const fn matches(
        self,
        severity: Severity,
    ) -> bool {
        match self {
            Self::All => true,
            Self::Critical => matches!(severity, Severity::Critical),
            Self::Warning => matches!(severity, Severity::Warning),
            Self::Info => matches!(severity, Severity::Info),
            Self::Success => matches!(severity, Severity::Success),
        }
    }
}

/// Per-severity counts for the statistics row.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct AlertCounts {
    pub total: usize,
    pub critical: usize,
    pub warning: usize,
    pub info: usize,
    pub success: usize,
    pub unacknowledged: usize,
}

/// The seeded alert list plus its interactive state.
pub struct AlertLog {
    alerts: Vec<Alert>,
    pub filter: SeverityFilter,
}

impl AlertLog {
    /// Log seeded with the campus's current notification backlog.
    pub fn seeded() -> Self {
        Self {
            alerts: SEED_ALERTS.to_vec(),
            filter: SeverityFilter::All,
        }
    }

    /// Alerts passing the active filter, newest first (seed order).
    pub fn visible(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter().filter(|a| self.filter.matches(a.severity))
    }

    /// Cycle the severity filter.
    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
    }

    /// Mark every alert passing the active filter as acknowledged.
    /// Returns how many alerts changed state.
    pub fn acknowledge_visible(&mut self) -> usize {
        let filter = self.filter;
        let mut changed = 0;
        for alert in &mut self.alerts {
            if filter.matches(alert.severity) && !alert.acknowledged {
                alert.acknowledged = true;
                changed += 1;
            }
        }
        changed
    }

    /// Counts across the whole log (filter-independent).
    pub fn counts(&self) -> AlertCounts {
        let mut counts = AlertCounts {
            total: self.alerts.len(),
            ..AlertCounts::default()
        };
        for alert in &self.alerts {
            match alert.severity {
                Severity::Critical => counts.critical += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Info => counts.info += 1,
                Severity::Success => counts.success += 1,
            }
            if !alert.acknowledged {
                counts.unacknowledged += 1;
            }
        }
        counts
    }

    /// Whether any critical alert is still unacknowledged (drives the
    /// blinking badge).
    pub fn has_unacked_critical(&self) -> bool {
        self.alerts
            .iter()
            .any(|a| a.severity == Severity::Critical && !a.acknowledged)
    }
}

/// Notification backlog the log starts with.
const SEED_ALERTS: [Alert; 6] = [
    Alert {
        severity: Severity::Critical,
        title: "Wind Turbine Efficiency Drop",
        message: "Turbine efficiency at 62%, below the 70% threshold",
        timestamp: "2025-01-15 14:32",
        source: "Wind Generation",
        acknowledged: false,
    },
    Alert {
        severity: Severity::Warning,
        title: "Battery Charge Level Low",
        message: "Storage at 25% capacity, review charging schedule",
        timestamp: "2025-01-15 13:45",
        source: "Battery Mgmt",
        acknowledged: false,
    },
    Alert {
        severity: Severity::Info,
        title: "Peak Generation Opportunity",
        message: "Optimal solar conditions, defer grid import 3h",
        timestamp: "2025-01-15 12:15",
        source: "Optimizer",
        acknowledged: true,
    },
    Alert {
        severity: Severity::Warning,
        title: "Grid Export Limit Reached",
        message: "Export capacity at 95%, curtailment possible",
        timestamp: "2025-01-15 11:28",
        source: "Grid Interface",
        acknowledged: false,
    },
    Alert {
        severity: Severity::Critical,
        title: "Communication Error",
        message: "Lost solar inverter #3, running degraded",
        timestamp: "2025-01-15 10:47",
        source: "Solar Generation",
        acknowledged: false,
    },
    Alert {
        severity: Severity::Success,
        title: "Maintenance Completed",
        message: "Battery Bank A scheduled maintenance done",
        timestamp: "2025-01-15 09:15",
        source: "Maintenance",
        acknowledged: true,
    },
];

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_counts() {
        let log = AlertLog::seeded();
        let counts = log.counts();
        assert_eq!(counts.total, 6);
        assert_eq!(counts.critical, 2);
        assert_eq!(counts.warning, 2);
        assert_eq!(counts.info, 1);
        assert_eq!(counts.success, 1);
        assert_eq!(counts.unacknowledged, 4, "two seed alerts start acknowledged");
    }

    #[test]
    fn test_filter_cycle_returns_to_all() {
        let mut filter = SeverityFilter::default();
        for _ in 0..5 {
            filter = filter.next();
        }
        assert_eq!(filter, SeverityFilter::All, "filter cycle has 5 positions");
    }

    #[test]
    fn test_filter_matches() {
        assert!(SeverityFilter::All.matches(Severity::Info));
        assert!(SeverityFilter::Critical.matches(Severity::Critical));
        assert!(!SeverityFilter::Critical.matches(Severity::Warning));
    }

    #[test]
    fn test_visible_respects_filter() {
        let mut log = AlertLog::seeded();
        log.filter = SeverityFilter::Critical;
        let titles: Vec<_> = log.visible().map(|a| a.title).collect();
        assert_eq!(titles.len(), 2);
        assert!(titles.contains(&"Wind Turbine Efficiency Drop"));
        assert!(titles.contains(&"Communication Error"));
    }

    #[test]
    fn test_acknowledge_visible_all() {
        let mut log = AlertLog::seeded();
        let changed = log.acknowledge_visible();
        assert_eq!(changed, 4, "the four unacknowledged alerts change state");
        assert_eq!(log.counts().unacknowledged, 0);
        assert!(!log.has_unacked_critical());
    }

    #[test]
    fn test_acknowledge_visible_respects_filter() {
        let mut log = AlertLog::seeded();
        log.filter = SeverityFilter::Warning;
        let changed = log.acknowledge_visible();
        assert_eq!(changed, 2, "only the two warnings are visible");
        assert!(log.has_unacked_critical(), "critical alerts were filtered out, still unacked");
        assert_eq!(log.counts().unacknowledged, 2);
    }

    #[test]
    fn test_acknowledge_is_idempotent() {
        let mut log = AlertLog::seeded();
        log.acknowledge_visible();
        assert_eq!(log.acknowledge_visible(), 0, "second pass changes nothing");
    }

    #[test]
    fn test_unacked_critical_badge() {
        let log = AlertLog::seeded();
        assert!(log.has_unacked_critical(), "seed data contains unacked critical alerts");
    }
}
