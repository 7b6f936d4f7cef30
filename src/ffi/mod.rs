//! C FFI layer for host integration.
//!
//! This module exports C ABI functions for a host that owns the window,
//! input and texture upload. All functions are marked with `#[no_mangle]`
//! and use `extern "C"`.
//!
//! The actual logic is in the `automaton` module. These functions are thin wrappers
//! that handle null checks, pointer safety, and C-to-Rust conversions.

pub mod grid;
pub mod lifecycle;
pub mod playback;
pub mod region;
pub mod render;

pub use grid::{life_clear, life_get_cell, life_population, life_set_cell, life_step};
pub use lifecycle::{life_create, life_destroy, life_generation, life_height, life_width};
pub use playback::{
    life_advance_frame, life_is_running, life_set_frames_per_step, life_toggle_running,
};
pub use region::life_set_region;
pub use render::{life_frame, life_render, life_render_rgba};
