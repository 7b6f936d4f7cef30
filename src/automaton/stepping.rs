//! Double-buffered B3/S23 stepping.

use super::grid::{count_neighbors, BitGrid};
use crate::error::GridError;

/// B3/S23: birth on 3, survival on 2 or 3.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match neighbors {
        3 => true,
        2 => alive,
        _ => false,
    }
}

/// Owns a generation pair and advances it one generation at a time.
///
/// Both buffers are allocated up front with identical dimensions. `current`
/// selects the visible one; stepping reads it, writes the other, then flips
/// the index.
pub struct StepEngine {
    buffers: [BitGrid; 2],
    current: usize,
    generation: u64,
}

impl StepEngine {
    /// Create an engine over an all-dead grid; see [`BitGrid::new`].
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        Ok(Self::from_grid(BitGrid::new(width, height)?))
    }

    /// Take ownership of an existing grid as generation 0.
    pub fn from_grid(grid: BitGrid) -> Self {
        let mut next = grid.clone();
        next.clear();
        Self {
            buffers: [grid, next],
            current: 0,
            generation: 0,
        }
    }

    /// The visible generation.
    #[inline]
    pub fn grid(&self) -> &BitGrid {
        &self.buffers[self.current]
    }

    /// Mutable access to the visible generation, for edits between steps.
    #[inline]
    pub fn grid_mut(&mut self) -> &mut BitGrid {
        &mut self.buffers[self.current]
    }

    /// Number of steps taken since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance by one generation.
    ///
    /// # Panics
    /// If the two buffers disagree on dimensions, which only a construction
    /// bug can cause.
    pub fn step(&mut self) {
        let [a, b] = &mut self.buffers;
        let (current, next) = if self.current == 0 { (&*a, b) } else { (&*b, a) };
        assert!(
            current.same_dimensions(next),
            "generation buffers disagree: {}x{} vs {}x{}",
            current.width(),
            current.height(),
            next.width(),
            next.height()
        );

        // Dimensions fit in i32, checked by BitGrid::new
        let (width, height) = (current.width() as i32, current.height() as i32);
        for y in 0..height {
            for x in 0..width {
                let neighbors = count_neighbors(current, x, y);
                next.set(x, y, next_state(current.get(x, y), neighbors));
            }
        }

        self.current ^= 1;
        self.generation += 1;
        log::trace!("advanced to generation {}", self.generation);
    }
}
