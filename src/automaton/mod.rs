//! Core automaton logic and grid operations.
//!
//! This module contains the packed grid, the B3/S23 stepping engine, brush
//! edits and frame rendering. The FFI layer in `ffi/` calls into these
//! through [`crate::state::State`].

pub mod grid;
pub mod playback;
pub mod region;
pub mod render;
pub mod stepping;

pub use grid::{count_neighbors, BitGrid, NEIGHBOR_CAP};
pub use playback::{Mode, Playback};
pub use region::set_region;
pub use render::{
    frame_len, render, render_into, render_rgba, render_rgba_into, Palette, DEAD_LUMA, LIVE_LUMA,
};
pub use stepping::{next_state, StepEngine};
