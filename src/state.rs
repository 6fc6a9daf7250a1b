//! Per-metric history tracking for trend arrows, sparklines, and peak holds.
//!
//! Each dashboard tile owns one [`MetricHistory`] and feeds it a sample on
//! every telemetry tick (every 3 seconds, not every frame - the underlying
//! data only changes on ticks, so sampling faster would just duplicate
//! values).
//!
//! # Trend Detection
//!
//! Trends compare the average of the most recent 5 samples against the
//! average of the oldest 5 samples in the history window. If the difference
//! exceeds `TREND_THRESHOLD` (from [`crate::config`]), a rising or falling
//! arrow is shown. The smoothing prevents walk noise from causing arrow
//! flicker.
//!
//! # Peak Hold
//!
//! When a sample sets a new maximum, `is_new_peak` becomes `true` and stays
//! true for 6 seconds (two ticks), letting the tile briefly highlight the
//! value.
//!
//! # Sparkline History
//!
//! A circular buffer of 48 samples (~2.4 minutes at 3-second ticks) drives
//! the mini graph at the bottom of each tile, auto-scaled to its own local
//! min/max.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::config::{HISTORY_SIZE, TREND_THRESHOLD};

/// Number of samples in the sparkline buffer (~2.4 min at 3-second ticks).
pub const GRAPH_HISTORY_SIZE: usize = 48;

/// Number of samples averaged on each side of the trend comparison.
const TREND_WINDOW: usize = 5;

/// How long a new peak stays highlighted.
const PEAK_HOLD: Duration = Duration::from_secs(6);

/// History for one displayed metric. Create one per tile and call
/// [`update`](Self::update) once per telemetry tick.
pub struct MetricHistory {
    /// Recent samples for trend calculation (capped at `HISTORY_SIZE`).
    history: VecDeque<f32>,

    /// Highest sample seen since the last reset.
    max_value: f32,

    /// When the last new maximum was recorded.
    peak_hold_time: Option<Instant>,

    /// True while a fresh maximum is inside its hold window.
    pub is_new_peak: bool,

    /// Circular buffer backing the sparkline.
    graph_buffer: [f32; GRAPH_HISTORY_SIZE],

    /// Current write position in the sparkline buffer.
    graph_index: usize,

    /// Number of valid samples in the sparkline buffer.
    graph_count: usize,

    /// Local minimum across valid sparkline samples (for Y scaling).
    graph_min: f32,

    /// Local maximum across valid sparkline samples (for Y scaling).
    graph_max: f32,
}

impl MetricHistory {
    pub fn new() -> Self {
        Self {
            history: VecDeque::with_capacity(HISTORY_SIZE),
            max_value: f32::MIN,
            peak_hold_time: None,
            is_new_peak: false,
            graph_buffer: [0.0; GRAPH_HISTORY_SIZE],
            graph_index: 0,
            graph_count: 0,
            graph_min: f32::MAX,
            graph_max: f32::MIN,
        }
    }

    /// Record one telemetry tick's value.
    pub fn update(
        &mut self,
        value: f32,
    ) {
        if self.history.len() >= HISTORY_SIZE {
            self.history.pop_front();
        }
        self.history.push_back(value);

        // Peak hold: highlight a new maximum for PEAK_HOLD
        if value > self.max_value {
            self.max_value = value;
            self.peak_hold_time = Some(Instant::now());
            self.is_new_peak = true;
        } else if let Some(peak_time) = self.peak_hold_time
            && peak_time.elapsed() > PEAK_HOLD
        {
            self.is_new_peak = false;
            self.peak_hold_time = None;
        }

        self.push_graph_sample(value);
    }

    /// Highest value recorded since the last reset, if any samples exist.
    pub fn max(&self) -> Option<f32> {
        if self.history.is_empty() && self.graph_count == 0 {
            None
        } else {
            Some(self.max_value)
        }
    }

    /// Current trend direction, if significant.
    ///
    /// # Returns
    /// - `Some(true)`: rising (recent average above older by `TREND_THRESHOLD`)
    /// - `Some(false)`: falling
    /// - `None`: not enough data, or the change is below threshold (stable)
    pub fn trend(&self) -> Option<bool> {
        if self.history.len() < TREND_WINDOW * 2 {
            return None;
        }

        let recent_avg: f32 = self.history.iter().rev().take(TREND_WINDOW).sum::<f32>() / TREND_WINDOW as f32;
        let older_avg: f32 = self.history.iter().take(TREND_WINDOW).sum::<f32>() / TREND_WINDOW as f32;

        let diff = recent_avg - older_avg;
        if diff.abs() < TREND_THRESHOLD {
            None
        } else {
            Some(diff > 0.0)
        }
    }

    /// Sparkline data: (buffer, oldest index, count, local min, local max).
    pub const fn graph_data(&self) -> (&[f32], usize, usize, f32, f32) {
        let start_idx = if self.graph_count < GRAPH_HISTORY_SIZE {
            0
        } else {
            self.graph_index
        };
        (
            &self.graph_buffer,
            start_idx,
            self.graph_count,
            self.graph_min,
            self.graph_max,
        )
    }

    /// Forget everything: history, sparkline, and the tracked maximum.
    pub fn reset(&mut self) {
        self.history.clear();
        self.max_value = f32::MIN;
        self.peak_hold_time = None;
        self.is_new_peak = false;
        self.graph_buffer = [0.0; GRAPH_HISTORY_SIZE];
        self.graph_index = 0;
        self.graph_count = 0;
        self.graph_min = f32::MAX;
        self.graph_max = f32::MIN;
    }

    fn push_graph_sample(
        &mut self,
        value: f32,
    ) {
        self.graph_buffer[self.graph_index] = value;
        self.graph_index = (self.graph_index + 1) % GRAPH_HISTORY_SIZE;
        if self.graph_count < GRAPH_HISTORY_SIZE {
            self.graph_count += 1;
        }
        self.recalculate_graph_minmax();
    }

    /// Rescan valid samples for the local min/max after each push. The
    /// buffer is 48 entries, so a full scan per tick is cheap.
    fn recalculate_graph_minmax(&mut self) {
        if self.graph_count == 0 {
            self.graph_min = f32::MAX;
            self.graph_max = f32::MIN;
            return;
        }

        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for &val in self.graph_buffer.iter().take(self.graph_count) {
            if val < min {
                min = val;
            }
            if val > max {
                max = val;
            }
        }
        self.graph_min = min;
        self.graph_max = max;
    }
}

impl Default for MetricHistory {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history_is_empty() {
        let state = MetricHistory::new();
        assert!(state.max().is_none(), "no max before any sample");
        assert!(state.trend().is_none(), "no trend before any sample");
        let (_, _, count, min, max) = state.graph_data();
        assert_eq!(count, 0);
        assert_eq!(min, f32::MAX);
        assert_eq!(max, f32::MIN);
    }

    #[test]
    fn test_trend_insufficient_data() {
        let mut state = MetricHistory::new();
        for i in 0..(TREND_WINDOW * 2 - 1) {
            state.update(i as f32);
        }
        assert!(state.trend().is_none(), "need a full double window for a trend");
    }

    #[test]
    fn test_trend_rising() {
        let mut state = MetricHistory::new();
        for i in 0..HISTORY_SIZE {
            state.update(i as f32);
        }
        assert_eq!(state.trend(), Some(true), "steadily increasing samples should trend up");
    }

    #[test]
    fn test_trend_falling() {
        let mut state = MetricHistory::new();
        for i in (0..HISTORY_SIZE).rev() {
            state.update(i as f32);
        }
        assert_eq!(state.trend(), Some(false), "steadily decreasing samples should trend down");
    }

    #[test]
    fn test_trend_stable_below_threshold() {
        let mut state = MetricHistory::new();
        for i in 0..HISTORY_SIZE {
            // Total drift across the window stays below TREND_THRESHOLD
            state.update((i as f32).mul_add(0.01, 50.0));
        }
        assert!(state.trend().is_none(), "sub-threshold drift should read as stable");
    }

    #[test]
    fn test_peak_detection() {
        let mut state = MetricHistory::new();
        state.update(10.0);
        assert!(state.is_new_peak, "first sample is a new maximum");
        assert_eq!(state.max(), Some(10.0));

        state.update(25.0);
        assert!(state.is_new_peak);
        assert_eq!(state.max(), Some(25.0));

        state.update(5.0);
        // Hold window has not elapsed, so the highlight persists
        assert!(state.is_new_peak, "peak highlight should persist inside the hold window");
        assert_eq!(state.max(), Some(25.0), "max must not decrease");
    }

    #[test]
    fn test_history_bounded() {
        let mut state = MetricHistory::new();
        for i in 0..(HISTORY_SIZE + 50) {
            state.update(i as f32);
        }
        assert_eq!(state.history.len(), HISTORY_SIZE, "trend history must not exceed HISTORY_SIZE");
    }

    #[test]
    fn test_graph_circular_overwrite() {
        let mut state = MetricHistory::new();
        for i in 0..GRAPH_HISTORY_SIZE {
            state.update(i as f32);
        }
        let (_, _, count, min, max) = state.graph_data();
        assert_eq!(count, GRAPH_HISTORY_SIZE);
        assert_eq!(min, 0.0);
        assert_eq!(max, (GRAPH_HISTORY_SIZE - 1) as f32);

        // One more sample overwrites the oldest (0.0)
        state.update(100.0);
        let (_, start, count, min, max) = state.graph_data();
        assert_eq!(count, GRAPH_HISTORY_SIZE);
        assert_eq!(start, 1, "oldest sample now lives at index 1");
        assert_eq!(min, 1.0, "0.0 was overwritten");
        assert_eq!(max, 100.0);
    }

    #[test]
    fn test_reset() {
        let mut state = MetricHistory::new();
        for i in 0..30 {
            state.update(i as f32);
        }
        state.reset();

        assert!(state.max().is_none(), "max should be cleared by reset");
        assert!(!state.is_new_peak, "peak highlight should be cleared by reset");
        assert!(state.trend().is_none(), "trend should be cleared by reset");
        let (_, _, count, _, _) = state.graph_data();
        assert_eq!(count, 0, "sparkline should be cleared by reset");
    }
}
