//! Life Engine - Conway's Game of Life core
//!
//! A bit-packed grid, a double-buffered B3/S23 stepping engine, brush edits
//! and frame rendering, with a C ABI for an interactive host that owns the
//! window, input and texture upload.

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod state;


pub use automaton::{BitGrid, Mode, Palette, Playback, StepEngine};
pub use config::EngineConfig;
pub use error::GridError;
pub use state::State;
