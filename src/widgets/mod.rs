//! Widget components for the energy dashboard display.
//!
//! This module organizes the reusable visual components:
//!
//! - [`primitives`]: shared low-level drawing utilities (panels, arrows,
//!   sparklines, progress bars)
//! - [`header`]: title bar and tab strip
//! - [`tiles`]: overview metric tiles, status rows, key-value rows
//! - [`popups`]: overlay popup dialogs (reset/FPS/filter/range confirmations)
//!
//! # Architecture
//!
//! Widgets follow a compositional pattern: each draws its background first
//! (values animate every frame, so stale text must be painted over), then
//! its label, value, and secondary content. Dynamic text goes through
//! `heapless::String` + `core::fmt::Write`; fixed chrome uses the const
//! styles from [`crate::styles`].

pub mod header;
pub mod popups;
pub mod primitives;
pub mod tiles;
