//! State management module
//!
//! This module contains the core data structures for the application:
//! - Schedule: The top-level container for all buildings and blocks
//! - Building: A named grid instance with per-day room columns
//! - ActivityBlock: Draggable blocks placed on a building's grid
//! - GridSettings: Pixel metrics and time range of the grid
//! - SelectionState: The current block selection

mod schedule;
mod selection;

pub use schedule::*;
pub use selection::*;
