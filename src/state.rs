//! Host-facing handle bundling the engine, cadence and frame buffer.

use crate::automaton::{self, Palette, Playback, StepEngine};
use crate::config::EngineConfig;
use crate::error::GridError;

/// One simulation as seen by a host.
pub struct State {
    pub engine: StepEngine,
    pub playback: Playback,
    pub palette: Palette,
    frame: Vec<u8>,
}

impl State {
    /// Build a handle from `config` as given; use [`EngineConfig::aligned`]
    /// first to round awkward sizes instead of rejecting them.
    pub fn new(config: &EngineConfig) -> Result<Self, GridError> {
        let engine = StepEngine::new(config.width, config.height)?;
        log::debug!(
            "created {}x{} simulation, {} frames per step",
            config.width,
            config.height,
            config.frames_per_step
        );
        Ok(Self {
            engine,
            playback: Playback::new(config.frames_per_step),
            palette: Palette::default(),
            frame: Vec::new(),
        })
    }

    /// Called once per host frame; steps when the cadence says so.
    ///
    /// # Returns
    /// Whether a generation was stepped.
    pub fn advance_frame(&mut self) -> bool {
        let due = self.playback.tick();
        if due {
            self.engine.step();
        }
        due
    }

    /// Step once regardless of mode.
    pub fn single_step(&mut self) {
        self.engine.step();
    }

    /// Brush edit on the visible generation; see [`automaton::set_region`].
    pub fn set_region(&mut self, alive: bool, diameter: u32, x: i32, y: i32) {
        automaton::set_region(self.engine.grid_mut(), alive, diameter, x, y);
    }

    /// Render the current generation into the reusable RGBA frame.
    pub fn render_frame(&mut self) -> &[u8] {
        let grid = self.engine.grid();
        self.frame.resize(automaton::frame_len(grid) * 4, 0);
        automaton::render_rgba_into(grid, &self.palette, &mut self.frame);
        &self.frame
    }
}
