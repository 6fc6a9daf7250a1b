//! Render state tracking for optimized display updates.
//!
//! This module tracks display state for:
//! - Header conditional redraw (clock second rollover, FPS change, popup
//!   close, or page switch)
//! - Popup cleanup (clear display when a popup disappears or switches kind)
//! - Page switch cleanup (clear display when moving between tabs)
//!
//! # Update Strategy
//!
//! | Element | Update Frequency | Strategy |
//! |---------|-----------------|----------|
//! | Header + tab strip | On clock tick / FPS change / popup close / page switch | Conditional redraw |
//! | Page content | Every frame | Always redraw (values animate) |
//! | Popups | On show/hide | Full clear on close |
//!
//! Page content always redraws because telemetry-driven values animate;
//! without clearing panel backgrounds, old text would remain visible.
//!
//! When a popup closes (or switches to a differently sized popup), the
//! display is fully cleared to remove remnants, and the header is marked
//! dirty since the clear removed it too.

use std::time::Instant;

use crate::config::POPUP_DURATION;

/// Active popup with its start time.
///
/// Each variant holds the `Instant` when the popup was triggered, making
/// expiration checks straightforward and mutual exclusion (one popup at a
/// time) impossible to violate.
#[derive(Clone, Copy, Debug)]
pub enum Popup {
    /// "HISTORY RESET" confirmation.
    Reset(Instant),
    /// "FPS ON/OFF" toggle confirmation.
    Fps(Instant),
    /// Alert severity filter change.
    Filter(Instant),
    /// Carbon/forecast time range change.
    Range(Instant),
}

impl Popup {
    /// Get the start time of this popup.
    #[inline]
    pub const fn start_time(&self) -> Instant {
        match self {
            Self::Reset(t) | Self::Fps(t) | Self::Filter(t) | Self::Range(t) => *t,
        }
    }

    /// Check if this popup has expired.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.start_time().elapsed() >= POPUP_DURATION
    }

    /// Get the popup kind (discriminant only, for comparison).
    #[inline]
    const fn kind(&self) -> u8 {
        match self {
            Self::Reset(_) => 0,
            Self::Fps(_) => 1,
            Self::Filter(_) => 2,
            Self::Range(_) => 3,
        }
    }
}

/// Tracks render state for optimized display updates.
pub struct RenderState {
    /// Previous FPS display state.
    prev_show_fps: bool,

    /// Previous FPS value (rounded to match the on-screen formatting).
    prev_fps_rounded: u32,

    /// Previous header clock second (Unix timestamp), so the header only
    /// repaints when the displayed time actually changes.
    prev_clock_sec: i64,

    /// Previous popup kind (discriminant only, for detecting switches).
    prev_popup_kind: Option<u8>,

    /// Whether a popup just closed or switched this frame.
    popup_just_closed: bool,

    /// Whether this is the first frame (need full redraw).
    first_frame: bool,

    /// Whether the display was cleared externally (e.g., page switch).
    display_cleared: bool,
}

impl RenderState {
    /// Create a new render state for the first frame.
    pub const fn new() -> Self {
        Self {
            prev_show_fps: true,
            prev_fps_rounded: 0,
            prev_clock_sec: 0,
            prev_popup_kind: None,
            popup_just_closed: false,
            first_frame: true,
            display_cleared: false,
        }
    }

    /// Check if the header (title bar + tab strip) needs redrawing.
    ///
    /// Uses `fps.round()` to match the `{:.0}` display formatting, so the
    /// dirty check never disagrees with what would be drawn.
    pub const fn check_header_dirty(
        &mut self,
        show_fps: bool,
        fps: f32,
        clock_sec: i64,
    ) -> bool {
        let fps_rounded = fps.round() as u32;
        let dirty = self.first_frame
            || self.popup_just_closed
            || self.display_cleared
            || clock_sec != self.prev_clock_sec
            || show_fps != self.prev_show_fps
            || (show_fps && fps_rounded != self.prev_fps_rounded);

        self.prev_show_fps = show_fps;
        self.prev_fps_rounded = fps_rounded;
        self.prev_clock_sec = clock_sec;
        dirty
    }

    /// Update popup state with the current active popup.
    ///
    /// Detects both popup close (becomes None) and popup switch (kind
    /// changes). Both require a display clear: popup sizes differ, so a
    /// switch leaves remnants of the larger one behind.
    pub fn update_popup(
        &mut self,
        popup: Option<&Popup>,
    ) {
        let current_kind = popup.map(Popup::kind);
        let changed = current_kind != self.prev_popup_kind;
        let was_visible = self.prev_popup_kind.is_some();
        self.prev_popup_kind = current_kind;

        if changed && was_visible {
            self.popup_just_closed = true;
        }
    }

    /// Check if a popup just closed this frame (need to clear remnants).
    #[inline]
    pub const fn popup_just_closed(&self) -> bool {
        self.popup_just_closed
    }

    /// Check if this is the first frame.
    #[inline]
    pub const fn is_first_frame(&self) -> bool {
        self.first_frame
    }

    /// Mark that the display was cleared externally (page switch). Ensures
    /// the header is redrawn on the next frame.
    pub const fn mark_display_cleared(&mut self) {
        self.display_cleared = true;
    }

    /// Call at end of frame to reset per-frame state.
    pub const fn end_frame(&mut self) {
        self.first_frame = false;
        self.popup_just_closed = false;
        self.display_cleared = false;
    }
}

impl Default for RenderState {
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
    fn test_render_state_new() {
        let state = RenderState::new();
        assert!(state.is_first_frame(), "is_first_frame should be true initially");
        assert!(!state.popup_just_closed(), "popup_just_closed should be false initially");
    }

    #[test]
    fn test_header_dirty_first_frame() {
        let mut state = RenderState::new();
        assert!(state.check_header_dirty(true, 50.0, 100), "header should be dirty on first frame");
    }

    #[test]
    fn test_header_dirty_clock_tick() {
        let mut state = RenderState::new();
        state.first_frame = false;
        state.check_header_dirty(true, 50.0, 100);

        assert!(
            !state.check_header_dirty(true, 50.0, 100),
            "header should be clean inside the same second"
        );
        assert!(
            state.check_header_dirty(true, 50.0, 101),
            "header should be dirty when the clock second rolls over"
        );
    }

    #[test]
    fn test_header_dirty_fps_change() {
        let mut state = RenderState::new();
        state.first_frame = false;
        state.check_header_dirty(true, 50.0, 100);

        assert!(
            !state.check_header_dirty(true, 50.4, 100),
            "50.4 rounds to 50, no redraw"
        );
        assert!(
            state.check_header_dirty(true, 50.6, 100),
            "50.6 rounds to 51, redraw"
        );
    }

    #[test]
    fn test_header_dirty_show_fps_toggle() {
        let mut state = RenderState::new();
        state.first_frame = false;
        state.check_header_dirty(true, 50.0, 100);

        assert!(state.check_header_dirty(false, 50.0, 100), "toggling FPS off dirties the header");
        assert!(state.check_header_dirty(true, 50.0, 100), "toggling FPS on dirties the header");
    }

    #[test]
    fn test_header_clean_when_fps_hidden() {
        let mut state = RenderState::new();
        state.first_frame = false;
        state.check_header_dirty(false, 50.0, 100);

        assert!(
            !state.check_header_dirty(false, 60.0, 100),
            "FPS changes must not dirty a header that hides FPS"
        );
    }

    #[test]
    fn test_popup_close_triggers_cleanup() {
        let mut state = RenderState::new();
        state.update_popup(Some(&Popup::Reset(Instant::now())));
        assert!(!state.popup_just_closed(), "no cleanup while the popup shows");

        state.update_popup(None);
        assert!(state.popup_just_closed(), "cleanup after the popup closes");
    }

    #[test]
    fn test_popup_switch_triggers_cleanup() {
        let mut state = RenderState::new();
        state.update_popup(Some(&Popup::Reset(Instant::now())));
        state.update_popup(Some(&Popup::Fps(Instant::now())));
        assert!(state.popup_just_closed(), "switching popup kinds should trigger cleanup");
    }

    #[test]
    fn test_popup_same_kind_no_cleanup() {
        let mut state = RenderState::new();
        state.update_popup(Some(&Popup::Filter(Instant::now())));
        state.end_frame();
        state.update_popup(Some(&Popup::Filter(Instant::now())));
        assert!(!state.popup_just_closed(), "same popup kind should not trigger cleanup");
    }

    #[test]
    fn test_popup_close_dirties_header() {
        let mut state = RenderState::new();
        state.first_frame = false;
        state.check_header_dirty(true, 50.0, 100);

        state.update_popup(Some(&Popup::Range(Instant::now())));
        state.update_popup(None);
        assert!(
            state.check_header_dirty(true, 50.0, 100),
            "header should be dirty after popup cleanup cleared the display"
        );
    }

    #[test]
    fn test_display_cleared_dirties_header() {
        let mut state = RenderState::new();
        state.first_frame = false;
        state.check_header_dirty(true, 50.0, 100);

        state.mark_display_cleared();
        assert!(
            state.check_header_dirty(true, 50.0, 100),
            "header should be dirty after an external clear"
        );
    }

    #[test]
    fn test_end_frame_resets_flags() {
        let mut state = RenderState::new();
        state.update_popup(Some(&Popup::Fps(Instant::now())));
        state.update_popup(None);
        state.mark_display_cleared();

        state.end_frame();

        assert!(!state.is_first_frame());
        assert!(!state.popup_just_closed());
        assert!(
            !state.check_header_dirty(true, 0.0, 0),
            "no residual dirty flags after end_frame"
        );
    }

    #[test]
    fn test_popup_expiry() {
        let popup = Popup::Reset(Instant::now());
        assert!(!popup.is_expired(), "a fresh popup must not be expired");
    }
}
