//! Simulated campus telemetry: bounded random walks over the energy channels.
//!
//! There is no real ingestion pipeline. A [`TelemetrySource`] produces a
//! fresh [`Telemetry`] snapshot per tick, and the bundled
//! [`SimulatedTelemetry`] implementation perturbs every channel with a small
//! random delta, clamped to fixed per-channel bounds, so the dashboard
//! animates like a live site without a backend.
//!
//! # Why a Trait
//!
//! The rendering code never mutates telemetry and never sees the walk - it
//! consumes snapshots handed to it by the main loop. Keeping the generation
//! policy behind [`TelemetrySource`] keeps the chart and the widgets pure
//! and testable with hand-built snapshots.
//!
//! # Clamping
//!
//! Every channel clamps to `[min, max]` before anything downstream sees the
//! value, so the renderer needs no validation. Bounds sit a little above
//! recorded peaks so the walk can brush against them without sticking.
//!
//! # Determinism
//!
//! The walk is generic over `rand::Rng`; [`SimulatedTelemetry::seeded`]
//! fixes the RNG for reproducible tests.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

// =============================================================================
// Random Walk Bounds (per channel: delta, min, max)
// =============================================================================

/// Solar output walk: ±1.0 kW per tick, clamped to array capacity.
const SOLAR_DELTA: f32 = 1.0;
const SOLAR_MIN: f32 = 0.0;
const SOLAR_MAX: f32 = 100.0;

/// Wind output walk: ±1.5 kW per tick, clamped to turbine capacity.
const WIND_DELTA: f32 = 1.5;
const WIND_MIN: f32 = 0.0;
const WIND_MAX: f32 = 50.0;

/// Battery charge walk: ±0.5 %-points per tick inside the protective band.
const BATTERY_DELTA: f32 = 0.5;
const BATTERY_MIN: f32 = 20.0;
const BATTERY_MAX: f32 = 95.0;

/// Grid import walk: ±1.0 kW per tick.
const GRID_DELTA: f32 = 1.0;
const GRID_MIN: f32 = 0.0;
const GRID_MAX: f32 = 40.0;

/// Consumption walk: ±1.5 kW per tick. The campus base load never drops
/// below 40 kW; the ceiling sits 25% above the recorded peak.
const CONSUMPTION_DELTA: f32 = 1.5;
const CONSUMPTION_MIN: f32 = 40.0;
const CONSUMPTION_MAX: f32 = 120.0;

/// Generator efficiency walks: ±1.0 %-point per tick.
const EFFICIENCY_DELTA: f32 = 1.0;
const SOLAR_EFF_MIN: f32 = 75.0;
const SOLAR_EFF_MAX: f32 = 95.0;
const WIND_EFF_MIN: f32 = 65.0;
const WIND_EFF_MAX: f32 = 85.0;

/// Weather walks.
const IRRADIANCE_DELTA: f32 = 10.0;
const IRRADIANCE_MIN: f32 = 300.0;
const IRRADIANCE_MAX: f32 = 1000.0;
const WIND_SPEED_DELTA: f32 = 0.25;
const WIND_SPEED_MIN: f32 = 0.0;
const WIND_SPEED_MAX: f32 = 12.0;
const TEMPERATURE_DELTA: f32 = 0.25;
const TEMPERATURE_MIN: f32 = 20.0;
const TEMPERATURE_MAX: f32 = 40.0;

// Compile-time validation: every band must be non-empty
const _: () = assert!(SOLAR_MIN < SOLAR_MAX);
const _: () = assert!(WIND_MIN < WIND_MAX);
const _: () = assert!(BATTERY_MIN < BATTERY_MAX);
const _: () = assert!(GRID_MIN < GRID_MAX);
const _: () = assert!(CONSUMPTION_MIN < CONSUMPTION_MAX);
const _: () = assert!(SOLAR_EFF_MIN < SOLAR_EFF_MAX);
const _: () = assert!(WIND_EFF_MIN < WIND_EFF_MAX);

// =============================================================================
// Snapshot Types
// =============================================================================

/// Operational status of a generation asset, derived from its efficiency.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AssetStatus {
    /// Efficiency at or above 85%.
    Optimal,
    /// Efficiency at or above 70%.
    Good,
    /// Efficiency below 70%.
    Warning,
}

impl AssetStatus {
    /// Badge text for status rows.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Optimal => "OPTIMAL",
            Self::Good => "GOOD",
            Self::Warning => "WARNING",
        }
    }

    /// Derive the status band for an efficiency percentage.
    pub fn from_efficiency(efficiency_pct: f32) -> Self {
        if efficiency_pct >= 85.0 {
            Self::Optimal
        } else if efficiency_pct >= 70.0 {
            Self::Good
        } else {
            Self::Warning
        }
    }
}

/// Solar array channel.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SolarChannel {
    /// Current output in kW.
    pub output_kw: f32,
    /// Nameplate capacity in kW.
    pub capacity_kw: f32,
    /// Conversion efficiency in percent.
    pub efficiency_pct: f32,
}

/// Wind turbine channel.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct WindChannel {
    pub output_kw: f32,
    pub capacity_kw: f32,
    pub efficiency_pct: f32,
}

/// Battery storage channel.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BatteryChannel {
    /// State of charge in percent (held inside the protective 20-95 band).
    pub charge_pct: f32,
    /// Usable capacity in kWh.
    pub capacity_kwh: f32,
}

/// Grid interconnect channel.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GridChannel {
    /// Current import from the grid in kW.
    pub import_kw: f32,
}

/// Campus consumption channel.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ConsumptionChannel {
    /// Current demand in kW.
    pub demand_kw: f32,
    /// Highest demand observed since the last reset.
    pub peak_kw: f32,
}

/// Weather conditions feeding the generation forecast panels.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct WeatherSnapshot {
    pub irradiance_wm2: f32,
    pub wind_speed_ms: f32,
    pub temperature_c: f32,
    pub cloud_cover_pct: f32,
    pub forecast: &'static str,
}

/// One tick's worth of energy metrics.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct EnergySnapshot {
    pub solar: SolarChannel,
    pub wind: WindChannel,
    pub battery: BatteryChannel,
    pub grid: GridChannel,
    pub consumption: ConsumptionChannel,
}

impl EnergySnapshot {
    /// Combined solar + wind output in kW.
    pub fn total_generation(&self) -> f32 {
        self.solar.output_kw + self.wind.output_kw
    }

    /// Portion of demand covered by on-site generation.
    pub fn self_consumption(&self) -> f32 {
        self.total_generation().min(self.consumption.demand_kw)
    }

    /// Demand not covered by on-site generation (imported from the grid).
    pub fn grid_dependence(&self) -> f32 {
        (self.consumption.demand_kw - self.total_generation()).max(0.0)
    }

    /// Generation beyond current demand (available for charge/export).
    pub fn surplus(&self) -> f32 {
        (self.total_generation() - self.consumption.demand_kw).max(0.0)
    }

    /// The battery charges whenever generation exceeds demand.
    pub fn battery_charging(&self) -> bool {
        self.surplus() > 0.0
    }

    /// Share of demand met by renewables, in percent.
    pub fn renewable_share_pct(&self) -> f32 {
        if self.consumption.demand_kw <= 0.0 {
            return 0.0;
        }
        self.self_consumption() / self.consumption.demand_kw * 100.0
    }
}

/// Complete per-tick telemetry handed to the view layer.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Telemetry {
    pub energy: EnergySnapshot,
    pub weather: WeatherSnapshot,
}

// =============================================================================
// Source Abstraction
// =============================================================================

/// A producer of telemetry snapshots, polled by the main loop once per tick.
pub trait TelemetrySource {
    /// Advance the source and return the new snapshot.
    fn sample(&mut self) -> Telemetry;

    /// Forget accumulated extremes (consumption peak). Triggered by the
    /// reset key.
    fn reset_peaks(&mut self);
}

/// Bounded random-walk telemetry generator.
///
/// Each [`sample`](TelemetrySource::sample) nudges every channel by a random
/// delta inside its band and clamps the result, so consecutive snapshots
/// drift plausibly instead of jumping.
pub struct SimulatedTelemetry<R: Rng = SmallRng> {
    state: Telemetry,
    rng: R,
}

/// Baseline snapshot the simulation starts from (a sunny campus afternoon).
fn baseline() -> Telemetry {
    Telemetry {
        energy: EnergySnapshot {
            solar: SolarChannel {
                output_kw: 45.2,
                capacity_kw: 100.0,
                efficiency_pct: 89.0,
            },
            wind: WindChannel {
                output_kw: 23.8,
                capacity_kw: 50.0,
                efficiency_pct: 76.0,
            },
            battery: BatteryChannel {
                charge_pct: 78.0,
                capacity_kwh: 200.0,
            },
            grid: GridChannel { import_kw: 12.5 },
            consumption: ConsumptionChannel {
                demand_kw: 67.3,
                peak_kw: 95.2,
            },
        },
        weather: WeatherSnapshot {
            irradiance_wm2: 850.0,
            wind_speed_ms: 4.2,
            temperature_c: 28.0,
            cloud_cover_pct: 25.0,
            forecast: "Partly Cloudy",
        },
    }
}

impl SimulatedTelemetry<SmallRng> {
    /// Simulation with an OS-seeded RNG (normal operation).
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_os_rng())
    }

    /// Simulation with a fixed seed (deterministic).
    #[allow(dead_code)] // Available for deterministic replay; exercised by tests
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl Default for SimulatedTelemetry<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SimulatedTelemetry<R> {
    /// Simulation driven by an arbitrary RNG.
    pub fn with_rng(rng: R) -> Self {
        Self {
            state: baseline(),
            rng,
        }
    }

    /// Read the current snapshot without advancing the walk.
    pub fn current(&self) -> Telemetry {
        self.state
    }

    /// Nudge `value` by a random delta in `±delta` and clamp to the band.
    fn walk(
        rng: &mut R,
        value: f32,
        delta: f32,
        min: f32,
        max: f32,
    ) -> f32 {
        (value + rng.random_range(-delta..=delta)).clamp(min, max)
    }
}

impl<R: Rng> TelemetrySource for SimulatedTelemetry<R> {
    fn sample(&mut self) -> Telemetry {
        let rng = &mut self.rng;
        let energy = &mut self.state.energy;

        energy.solar.output_kw = Self::walk(rng, energy.solar.output_kw, SOLAR_DELTA, SOLAR_MIN, SOLAR_MAX);
        energy.solar.efficiency_pct =
            Self::walk(rng, energy.solar.efficiency_pct, EFFICIENCY_DELTA, SOLAR_EFF_MIN, SOLAR_EFF_MAX);
        energy.wind.output_kw = Self::walk(rng, energy.wind.output_kw, WIND_DELTA, WIND_MIN, WIND_MAX);
        energy.wind.efficiency_pct =
            Self::walk(rng, energy.wind.efficiency_pct, EFFICIENCY_DELTA, WIND_EFF_MIN, WIND_EFF_MAX);
        energy.battery.charge_pct =
            Self::walk(rng, energy.battery.charge_pct, BATTERY_DELTA, BATTERY_MIN, BATTERY_MAX);
        energy.grid.import_kw = Self::walk(rng, energy.grid.import_kw, GRID_DELTA, GRID_MIN, GRID_MAX);
        energy.consumption.demand_kw = Self::walk(
            rng,
            energy.consumption.demand_kw,
            CONSUMPTION_DELTA,
            CONSUMPTION_MIN,
            CONSUMPTION_MAX,
        );
        energy.consumption.peak_kw = energy.consumption.peak_kw.max(energy.consumption.demand_kw);

        let weather = &mut self.state.weather;
        weather.irradiance_wm2 =
            Self::walk(rng, weather.irradiance_wm2, IRRADIANCE_DELTA, IRRADIANCE_MIN, IRRADIANCE_MAX);
        weather.wind_speed_ms =
            Self::walk(rng, weather.wind_speed_ms, WIND_SPEED_DELTA, WIND_SPEED_MIN, WIND_SPEED_MAX);
        weather.temperature_c =
            Self::walk(rng, weather.temperature_c, TEMPERATURE_DELTA, TEMPERATURE_MIN, TEMPERATURE_MAX);

        self.state
    }

    fn reset_peaks(&mut self) {
        // Re-anchor the peak to the current demand so the next comparison
        // starts fresh instead of instantly re-flagging the old extreme.
        self.state.energy.consumption.peak_kw = self.state.energy.consumption.demand_kw;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(
        solar: f32,
        wind: f32,
        demand: f32,
    ) -> EnergySnapshot {
        let mut energy = baseline().energy;
        energy.solar.output_kw = solar;
        energy.wind.output_kw = wind;
        energy.consumption.demand_kw = demand;
        energy
    }

    // -------------------------------------------------------------------------
    // Derived Metrics Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_total_generation() {
        assert_eq!(snapshot(45.2, 23.8, 67.3).total_generation(), 69.0);
    }

    #[test]
    fn test_self_consumption_capped_by_demand() {
        let s = snapshot(60.0, 30.0, 67.3);
        assert_eq!(s.self_consumption(), 67.3, "self consumption cannot exceed demand");
    }

    #[test]
    fn test_grid_dependence_deficit() {
        let s = snapshot(30.0, 10.0, 67.3);
        assert!((s.grid_dependence() - 27.3).abs() < 1e-4);
        assert_eq!(s.surplus(), 0.0, "no surplus while importing");
        assert!(!s.battery_charging(), "battery discharges during a deficit");
    }

    #[test]
    fn test_surplus_and_charging() {
        let s = snapshot(60.0, 30.0, 67.3);
        assert!((s.surplus() - 22.7).abs() < 1e-4);
        assert_eq!(s.grid_dependence(), 0.0, "no import while in surplus");
        assert!(s.battery_charging(), "battery charges on surplus");
    }

    #[test]
    fn test_renewable_share() {
        let s = snapshot(30.0, 10.0, 80.0);
        assert!((s.renewable_share_pct() - 50.0).abs() < 1e-4, "40 of 80 kW is a 50% share");

        let zero_demand = snapshot(30.0, 10.0, 0.0);
        assert_eq!(zero_demand.renewable_share_pct(), 0.0, "zero demand must not divide by zero");
    }

    // -------------------------------------------------------------------------
    // Asset Status Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_asset_status_bands() {
        assert_eq!(AssetStatus::from_efficiency(89.0), AssetStatus::Optimal);
        assert_eq!(AssetStatus::from_efficiency(85.0), AssetStatus::Optimal);
        assert_eq!(AssetStatus::from_efficiency(76.0), AssetStatus::Good);
        assert_eq!(AssetStatus::from_efficiency(69.9), AssetStatus::Warning);
    }

    // -------------------------------------------------------------------------
    // Random Walk Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_walk_stays_inside_bounds() {
        let mut source = SimulatedTelemetry::seeded(7);
        for _ in 0..2000 {
            let t = source.sample();
            let e = &t.energy;
            assert!((SOLAR_MIN..=SOLAR_MAX).contains(&e.solar.output_kw));
            assert!((WIND_MIN..=WIND_MAX).contains(&e.wind.output_kw));
            assert!((BATTERY_MIN..=BATTERY_MAX).contains(&e.battery.charge_pct));
            assert!((GRID_MIN..=GRID_MAX).contains(&e.grid.import_kw));
            assert!((CONSUMPTION_MIN..=CONSUMPTION_MAX).contains(&e.consumption.demand_kw));
            assert!((SOLAR_EFF_MIN..=SOLAR_EFF_MAX).contains(&e.solar.efficiency_pct));
            assert!((WIND_EFF_MIN..=WIND_EFF_MAX).contains(&e.wind.efficiency_pct));
            assert!((IRRADIANCE_MIN..=IRRADIANCE_MAX).contains(&t.weather.irradiance_wm2));
            assert!((WIND_SPEED_MIN..=WIND_SPEED_MAX).contains(&t.weather.wind_speed_ms));
            assert!((TEMPERATURE_MIN..=TEMPERATURE_MAX).contains(&t.weather.temperature_c));
        }
    }

    #[test]
    fn test_walk_step_is_bounded() {
        let mut source = SimulatedTelemetry::seeded(11);
        let mut prev = source.current();
        for _ in 0..500 {
            let next = source.sample();
            let step = (next.energy.solar.output_kw - prev.energy.solar.output_kw).abs();
            assert!(step <= SOLAR_DELTA + 1e-4, "solar walk step must stay within ±{SOLAR_DELTA}");
            prev = next;
        }
    }

    #[test]
    fn test_seeded_walk_is_deterministic() {
        let mut a = SimulatedTelemetry::seeded(42);
        let mut b = SimulatedTelemetry::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.sample(), b.sample(), "same seed must replay the same walk");
        }
    }

    #[test]
    fn test_peak_tracks_maximum_demand() {
        let mut source = SimulatedTelemetry::seeded(3);
        let mut highest = source.current().energy.consumption.demand_kw;
        for _ in 0..300 {
            let t = source.sample();
            highest = highest.max(t.energy.consumption.demand_kw);
            assert!(
                t.energy.consumption.peak_kw >= t.energy.consumption.demand_kw,
                "peak can never be below current demand"
            );
        }
        // Baseline peak (95.2) may still dominate if the walk never beat it
        let final_peak = source.current().energy.consumption.peak_kw;
        assert!(final_peak >= highest.min(95.2));
    }

    #[test]
    fn test_reset_peaks() {
        let mut source = SimulatedTelemetry::seeded(5);
        source.sample();
        source.reset_peaks();
        let t = source.current();
        assert_eq!(
            t.energy.consumption.peak_kw, t.energy.consumption.demand_kw,
            "reset should re-anchor the peak to current demand"
        );
    }

    #[test]
    fn test_baseline_matches_reference_numbers() {
        let t = baseline();
        assert_eq!(t.energy.solar.output_kw, 45.2);
        assert_eq!(t.energy.wind.output_kw, 23.8);
        assert_eq!(t.energy.consumption.demand_kw, 67.3);
        assert_eq!(t.energy.battery.charge_pct, 78.0);
    }
}
