//! Carbon footprint ledger: avoidance totals, certification milestones, and
//! the annual trend dataset.
//!
//! All figures are a static dataset per time range (there is no metering
//! backend); the interactive state is the selected range. Milestone
//! achievement is derived from the year-to-date avoidance total rather than
//! stored, so the Gold milestone flips automatically once the total crosses
//! its target.

/// Reporting range cycled by the carbon-page key.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum TimeRange {
    #[default]
    Today,
    Month,
    Year,
}

impl TimeRange {
    /// Advance to the next range, wrapping back to Today.
    pub const fn next(self) -> Self {
        match self {
            Self::Today => Self::Month,
            Self::Month => Self::Year,
            Self::Year => Self::Today,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Today => "TODAY",
            Self::Month => "MONTH",
            Self::Year => "YEAR",
        }
    }
}

/// Carbon figures for one reporting range.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CarbonLedger {
    /// CO2 avoided in kg.
    pub avoided_kg: u32,
    /// Renewable energy generated in kWh.
    pub generated_kwh: u32,
    /// Avoidance target for the range in kg.
    pub target_kg: u32,
    /// Share of consumption covered by renewables.
    pub renewable_pct: f32,
    /// Grid energy displaced in kWh.
    pub grid_offset_kwh: u32,
}

impl CarbonLedger {
    /// Progress toward the range target, capped at 100%.
    pub fn progress_pct(&self) -> f32 {
        (self.avoided_kg as f32 / self.target_kg as f32 * 100.0).min(100.0)
    }

    /// Tree-planting equivalent (22 kg CO2 absorbed per tree per year).
    pub const fn trees_equivalent(&self) -> u32 {
        self.avoided_kg / 22
    }

    /// Cars-off-the-road equivalent (4600 kg CO2 per car per year).
    pub const fn cars_equivalent(&self) -> u32 {
        self.avoided_kg / 4600
    }

    /// Coal-burning equivalent in tonnes (2200 kg CO2 per tonne of coal).
    pub const fn coal_tonnes_equivalent(&self) -> u32 {
        self.avoided_kg / 2200
    }

    /// Homes-powered equivalent of the grid offset (30 kWh per home).
    pub const fn homes_equivalent(&self) -> u32 {
        self.grid_offset_kwh / 30
    }
}

/// Ledger for the selected range.
pub const fn ledger(range: TimeRange) -> CarbonLedger {
    match range {
        TimeRange::Today => CarbonLedger {
            avoided_kg: 892,
            generated_kwh: 1247,
            target_kg: 1000,
            renewable_pct: 78.3,
            grid_offset_kwh: 567,
        },
        TimeRange::Month => CarbonLedger {
            avoided_kg: 24_567,
            generated_kwh: 34_890,
            target_kg: 28_000,
            renewable_pct: 82.1,
            grid_offset_kwh: 15_600,
        },
        TimeRange::Year => CarbonLedger {
            avoided_kg: 298_450,
            generated_kwh: 425_600,
            target_kg: 350_000,
            renewable_pct: 79.8,
            grid_offset_kwh: 189_200,
        },
    }
}

/// A sustainability certification tier.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Milestone {
    /// Avoidance total (kg CO2) required for the certificate.
    pub target_kg: u32,
    pub label: &'static str,
    /// Award date for achieved tiers, target date otherwise.
    pub date: &'static str,
}

impl Milestone {
    /// A milestone is achieved once the year-to-date avoidance reaches it.
    pub const fn achieved(
        &self,
        avoided_kg: u32,
    ) -> bool {
        avoided_kg >= self.target_kg
    }
}

/// Certification ladder, lowest tier first.
pub const MILESTONES: [Milestone; 4] = [
    Milestone {
        target_kg: 50_000,
        label: "Bronze Certificate",
        date: "2024-03-15",
    },
    Milestone {
        target_kg: 150_000,
        label: "Silver Certificate",
        date: "2024-08-22",
    },
    Milestone {
        target_kg: 300_000,
        label: "Gold Certificate",
        date: "In Progress",
    },
    Milestone {
        target_kg: 500_000,
        label: "Platinum Certificate",
        date: "Target 2025",
    },
];

/// One month of the annual avoidance trend.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MonthEntry {
    pub month: &'static str,
    pub avoided_kg: u32,
    pub generated_kwh: u32,
}

/// Twelve months of carbon avoidance, drawn as the trend bar chart.
pub const MONTHLY_TREND: [MonthEntry; 12] = [
    MonthEntry { month: "Jan", avoided_kg: 18_450, generated_kwh: 26_800 },
    MonthEntry { month: "Feb", avoided_kg: 21_200, generated_kwh: 30_500 },
    MonthEntry { month: "Mar", avoided_kg: 25_600, generated_kwh: 36_200 },
    MonthEntry { month: "Apr", avoided_kg: 28_900, generated_kwh: 41_200 },
    MonthEntry { month: "May", avoided_kg: 31_200, generated_kwh: 44_800 },
    MonthEntry { month: "Jun", avoided_kg: 29_800, generated_kwh: 42_600 },
    MonthEntry { month: "Jul", avoided_kg: 27_400, generated_kwh: 39_100 },
    MonthEntry { month: "Aug", avoided_kg: 30_100, generated_kwh: 43_200 },
    MonthEntry { month: "Sep", avoided_kg: 32_500, generated_kwh: 46_500 },
    MonthEntry { month: "Oct", avoided_kg: 28_700, generated_kwh: 41_000 },
    MonthEntry { month: "Nov", avoided_kg: 26_900, generated_kwh: 38_400 },
    MonthEntry { month: "Dec", avoided_kg: 24_600, generated_kwh: 35_200 },
];

/// Largest monthly avoidance value (denominator for the trend bars).
pub fn monthly_trend_max() -> u32 {
    MONTHLY_TREND.iter().map(|m| m.avoided_kg).max().unwrap_or(1)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_cycle() {
        let mut range = TimeRange::default();
        range = range.next();
        assert_eq!(range, TimeRange::Month);
        range = range.next();
        assert_eq!(range, TimeRange::Year);
        range = range.next();
        assert_eq!(range, TimeRange::Today, "range cycle wraps");
    }

    #[test]
    fn test_progress_caps_at_100() {
        let over = CarbonLedger {
            avoided_kg: 1500,
            generated_kwh: 0,
            target_kg: 1000,
            renewable_pct: 0.0,
            grid_offset_kwh: 0,
        };
        assert_eq!(over.progress_pct(), 100.0, "progress must cap at 100%");
    }

    #[test]
    fn test_today_progress() {
        let today = ledger(TimeRange::Today);
        assert!((today.progress_pct() - 89.2).abs() < 0.05, "892 of 1000 kg is 89.2%");
    }

    #[test]
    fn test_equivalents() {
        let year = ledger(TimeRange::Year);
        assert_eq!(year.trees_equivalent(), 298_450 / 22);
        assert_eq!(year.cars_equivalent(), 64);
        assert_eq!(year.coal_tonnes_equivalent(), 135);
        assert_eq!(year.homes_equivalent(), 189_200 / 30);
    }

    #[test]
    fn test_milestone_achievement_derived_from_year_total() {
        let avoided = ledger(TimeRange::Year).avoided_kg;
        let achieved: Vec<bool> = MILESTONES.iter().map(|m| m.achieved(avoided)).collect();
        assert_eq!(
            achieved,
            vec![true, true, false, false],
            "Bronze and Silver achieved, Gold and Platinum pending at 298,450 kg"
        );
    }

    #[test]
    fn test_milestones_ascend() {
        for pair in MILESTONES.windows(2) {
            assert!(pair[0].target_kg < pair[1].target_kg, "milestone targets must ascend");
        }
    }

    #[test]
    fn test_monthly_trend_max() {
        assert_eq!(monthly_trend_max(), 32_500, "September holds the annual maximum");
    }

    #[test]
    fn test_monthly_trend_covers_a_year() {
        assert_eq!(MONTHLY_TREND.len(), 12);
        assert_eq!(MONTHLY_TREND[0].month, "Jan");
        assert_eq!(MONTHLY_TREND[11].month, "Dec");
    }
}
