//! Full-page views for the dashboard application.
//!
//! # Boot Sequence
//!
//! 1. **Loading Screen** ([`loading`]): console-style init messages with
//!    spinner, then the main loop takes over.
//!
//! # Runtime Pages
//!
//! One module per tab, each exposing a single `draw_*_page` entry point
//! called by the main loop every frame while that tab is active:
//!
//! - [`dashboard`]: overview tiles, energy chart, status/summary panels
//! - [`analytics`]: forecast mini-charts and operational advice
//! - [`recommendations`]: optimization recommendation list
//! - [`carbon`]: avoidance ledger, milestones, annual trend
//! - [`alerts`]: alert list with severity filter
//! - [`reports`]: report catalog
//!
//! # Event Handling
//!
//! The boot screen returns `false` if the window is closed during boot,
//! letting the application exit cleanly without entering the main loop.

pub mod alerts;
pub mod analytics;
pub mod carbon;
pub mod dashboard;
pub mod loading;
pub mod recommendations;
pub mod reports;
