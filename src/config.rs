//! Engine configuration and dimension alignment.

/// Grid widths must be a multiple of this many cells (one packed byte).
pub const CELL_ALIGNMENT: u32 = 8;
/// Default width and height in cells.
pub const DEFAULT_GRID_SIZE: u32 = 96;
/// Frames the host waits between generations while running.
pub const DEFAULT_FRAMES_PER_STEP: u32 = 5;

/// Grid size and running cadence for a new simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub width: u32,
    pub height: u32,
    pub frames_per_step: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_SIZE,
            height: DEFAULT_GRID_SIZE,
            frames_per_step: DEFAULT_FRAMES_PER_STEP,
        }
    }
}

impl EngineConfig {
    /// A `width` x `height` grid with the default cadence.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// A `size` x `size` grid with the default cadence.
    pub fn square(size: u32) -> Self {
        Self::new(size, size)
    }

    /// Override the frames skipped between generations.
    pub fn with_frames_per_step(mut self, frames_per_step: u32) -> Self {
        self.frames_per_step = frames_per_step;
        self
    }

    /// Round both dimensions up to the next multiple of [`CELL_ALIGNMENT`].
    ///
    /// Zero stays zero so that grid creation still rejects it.
    pub fn aligned(self) -> Self {
        let width = align_dimension(self.width);
        let height = align_dimension(self.height);
        if width != self.width || height != self.height {
            log::warn!(
                "grid size {}x{} is not divisible by {}, using {}x{}",
                self.width,
                self.height,
                CELL_ALIGNMENT,
                width,
                height
            );
        }
        Self {
            width,
            height,
            ..self
        }
    }
}

/// Round `value` up to a multiple of [`CELL_ALIGNMENT`], saturating at the
/// largest representable multiple.
pub fn align_dimension(value: u32) -> u32 {
    value
        .checked_next_multiple_of(CELL_ALIGNMENT)
        .unwrap_or(u32::MAX / CELL_ALIGNMENT * CELL_ALIGNMENT)
}
