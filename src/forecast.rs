//! Forecast datasets and the operational advice they drive.
//!
//! Three static forecast horizons (24 hours, 7 days, 30 days) of solar,
//! wind, and demand figures feed the analytics page's grouped mini-charts.
//! The advice rules compare the leading forecast entries: a comfortable
//! surplus suggests charging and exporting, a deficit suggests discharging
//! and deferring load, anything in between reads as balanced.

/// Forecast horizon cycled by the analytics-page key.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ForecastRange {
    #[default]
    Hours24,
    Days7,
    Days30,
}

impl ForecastRange {
    /// Advance to the next horizon, wrapping back to 24 hours.
    pub const fn next(self) -> Self {
        match self {
            Self::Hours24 => Self::Days7,
            Self::Days7 => Self::Days30,
            Self::Days30 => Self::Hours24,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Hours24 => "24 HOURS",
            Self::Days7 => "7 DAYS",
            Self::Days30 => "30 DAYS",
        }
    }

    /// Unit of the X axis for this horizon.
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Hours24 => "kW",
            Self::Days7 | Self::Days30 => "kWh",
        }
    }
}

/// Forecast series for one horizon. Slices share one length per horizon.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ForecastSet {
    pub solar: &'static [u32],
    pub wind: &'static [u32],
    pub demand: &'static [u32],
}

impl ForecastSet {
    /// Largest value across all three series (denominator for mini-charts).
    pub fn max_value(&self) -> u32 {
        self.solar
            .iter()
            .chain(self.wind)
            .chain(self.demand)
            .copied()
            .max()
            .unwrap_or(1)
    }

    /// Projected surplus at the front of the horizon: generation minus
    /// demand of the leading entries. Negative means a deficit.
    pub fn leading_surplus(&self) -> i64 {
        let generation = i64::from(self.solar[0]) + i64::from(self.wind[0]);
        generation - i64::from(self.demand[0])
    }
}

/// Hourly forecast for the next 24 hours (kW).
const FORECAST_24H: ForecastSet = ForecastSet {
    solar: &[
        65, 78, 89, 95, 88, 72, 45, 12, 0, 0, 0, 0, 0, 0, 0, 0, 0, 15, 45, 72, 85, 92, 87, 65,
    ],
    wind: &[
        25, 28, 32, 35, 38, 42, 45, 48, 35, 28, 22, 18, 15, 12, 18, 25, 32, 38, 42, 45, 38, 32, 28, 25,
    ],
    demand: &[
        55, 52, 48, 45, 42, 45, 52, 68, 85, 92, 95, 88, 85, 82, 78, 85, 92, 98, 95, 88, 78, 68, 62, 58,
    ],
};

/// Daily forecast for the next 7 days (kWh).
const FORECAST_7D: ForecastSet = ForecastSet {
    solar: &[450, 520, 380, 290, 480, 510, 470],
    wind: &[280, 320, 450, 380, 290, 260, 310],
    demand: &[680, 720, 650, 580, 690, 740, 710],
};

/// Daily forecast for the next 30 days (kWh).
const FORECAST_30D: ForecastSet = ForecastSet {
    solar: &[
        12_500, 13_800, 11_200, 9_800, 14_200, 13_500, 12_800, 15_200, 14_100, 13_600, 12_900, 11_800, 10_500, 9_200,
        11_800, 13_400, 14_700, 15_100, 13_900, 12_600, 11_300, 10_800, 12_400, 13_800, 14_500, 13_200, 11_900, 10_600,
        12_100, 13_700,
    ],
    wind: &[
        8_900, 9_500, 11_200, 10_800, 9_200, 8_600, 9_800, 10_400, 11_800, 10_200, 9_600, 8_800, 7_900, 8_500, 9_300,
        10_100, 10_900, 11_500, 10_700, 9_800, 9_100, 8_700, 9_400, 10_200, 10_800, 9_900, 9_300, 8_600, 9_200, 9_800,
    ],
    demand: &[
        18_500, 19_200, 17_800, 16_900, 18_800, 19_500, 18_200, 20_100, 19_800, 18_600, 17_900, 17_200, 16_500,
        15_800, 17_100, 18_400, 19_300, 20_200, 19_600, 18_300, 17_600, 16_900, 17_800, 18_700, 19_400, 18_900,
        18_100, 17_400, 17_900, 18_600,
    ],
};

/// The dataset for a horizon.
pub const fn dataset(range: ForecastRange) -> ForecastSet {
    match range {
        ForecastRange::Hours24 => FORECAST_24H,
        ForecastRange::Days7 => FORECAST_7D,
        ForecastRange::Days30 => FORECAST_30D,
    }
}

// =============================================================================
// Operational Advice
// =============================================================================

/// Tone of one piece of advice (maps to a badge color on screen).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AdviceKind {
    Success,
    Info,
    Warning,
    Error,
}

/// One line of operational advice.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Advice {
    pub kind: AdviceKind,
    pub message: &'static str,
}

/// Surplus above which charge/export advice kicks in.
const SURPLUS_COMFORTABLE: i64 = 20;

/// Deficit below which discharge/defer advice kicks in.
const DEFICIT_CONCERNING: i64 = -10;

const _: () = assert!(DEFICIT_CONCERNING < SURPLUS_COMFORTABLE);

/// Advice for the projected surplus at the front of a forecast horizon.
pub fn recommendations(set: &ForecastSet) -> &'static [Advice] {
    let surplus = set.leading_surplus();
    if surplus > SURPLUS_COMFORTABLE {
        &[
            Advice {
                kind: AdviceKind::Success,
                message: "Excess generation: charge batteries to 90%",
            },
            Advice {
                kind: AdviceKind::Info,
                message: "Schedule energy-intensive operations now",
            },
            Advice {
                kind: AdviceKind::Info,
                message: "Export surplus to grid for revenue",
            },
        ]
    } else if surplus < DEFICIT_CONCERNING {
        &[
            Advice {
                kind: AdviceKind::Warning,
                message: "Shortfall predicted: discharge batteries",
            },
            Advice {
                kind: AdviceKind::Warning,
                message: "Defer non-critical loads to peak hours",
            },
            Advice {
                kind: AdviceKind::Error,
                message: "Grid import required to meet demand",
            },
        ]
    } else {
        &[
            Advice {
                kind: AdviceKind::Success,
                message: "Generation and demand well balanced",
            },
            Advice {
                kind: AdviceKind::Info,
                message: "Maintain current battery charge levels",
            },
        ]
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_lengths_match_per_horizon() {
        for range in [ForecastRange::Hours24, ForecastRange::Days7, ForecastRange::Days30] {
            let set = dataset(range);
            assert_eq!(set.solar.len(), set.wind.len(), "{range:?}: solar/wind length mismatch");
            assert_eq!(set.solar.len(), set.demand.len(), "{range:?}: solar/demand length mismatch");
        }
        assert_eq!(dataset(ForecastRange::Hours24).solar.len(), 24);
        assert_eq!(dataset(ForecastRange::Days7).solar.len(), 7);
        assert_eq!(dataset(ForecastRange::Days30).solar.len(), 30);
    }

    #[test]
    fn test_range_cycle_wraps() {
        let mut range = ForecastRange::default();
        for _ in 0..3 {
            range = range.next();
        }
        assert_eq!(range, ForecastRange::Hours24);
    }

    #[test]
    fn test_max_value() {
        assert_eq!(dataset(ForecastRange::Hours24).max_value(), 98, "demand peaks the 24h horizon");
        assert_eq!(dataset(ForecastRange::Days7).max_value(), 740);
        assert_eq!(dataset(ForecastRange::Days30).max_value(), 20_200);
    }

    #[test]
    fn test_leading_surplus() {
        // 24h: 65 + 25 - 55 = 35
        assert_eq!(dataset(ForecastRange::Hours24).leading_surplus(), 35);
        // 7d: 450 + 280 - 680 = 50
        assert_eq!(dataset(ForecastRange::Days7).leading_surplus(), 50);
        // 30d: 12500 + 8900 - 18500 = 2900
        assert_eq!(dataset(ForecastRange::Days30).leading_surplus(), 2900);
    }

    #[test]
    fn test_recommendations_surplus() {
        let advice = recommendations(&dataset(ForecastRange::Hours24));
        assert_eq!(advice.len(), 3);
        assert_eq!(advice[0].kind, AdviceKind::Success, "surplus leads with charge advice");
    }

    #[test]
    fn test_recommendations_deficit() {
        let deficit = ForecastSet {
            solar: &[10],
            wind: &[5],
            demand: &[80],
        };
        let advice = recommendations(&deficit);
        assert_eq!(advice.len(), 3);
        assert_eq!(advice[2].kind, AdviceKind::Error, "a deficit ends with the grid-import warning");
    }

    #[test]
    fn test_recommendations_balanced() {
        let balanced = ForecastSet {
            solar: &[40],
            wind: &[20],
            demand: &[55],
        };
        let advice = recommendations(&balanced);
        assert_eq!(advice.len(), 2);
        assert_eq!(advice[0].kind, AdviceKind::Success);
    }
}
