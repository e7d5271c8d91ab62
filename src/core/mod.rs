//! Core logic: geometry, snapping, colors, time parsing, export, snapshots.
//!
//! Everything here is UI-free and unit-tested; the components in `grid/` and
//! `components/` call into these modules instead of re-deriving geometry.

pub mod color;
pub mod compensation;
pub mod export;
pub mod geometry;
pub mod grid_snap;
pub mod snapshot;
pub mod timegrid;
