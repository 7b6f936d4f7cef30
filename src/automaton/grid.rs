//! Packed cell storage and neighbor counting.

use crate::error::GridError;

/// Neighbor counts stop here; the rule treats every count of 4 or more alike.
pub const NEIGHBOR_CAP: u8 = 4;

/// A fixed-size 2D grid of cells, packed eight to a byte.
///
/// Cell `(x, y)` lives in byte `x / 8 + y * (width / 8)` at bit `x % 8`.
/// Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitGrid {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl BitGrid {
    /// Create an all-dead grid.
    ///
    /// `width` must be a non-zero multiple of 8 and both dimensions must fit
    /// in an `i32` coordinate.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroDimension { width, height });
        }
        if width % 8 != 0 {
            return Err(GridError::InvalidDimension { width });
        }
        if width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(GridError::Oversized { width, height });
        }

        let size = (width as usize / 8)
            .checked_mul(height as usize)
            .ok_or(GridError::Oversized { width, height })?;

        log::debug!("allocated {}x{} grid ({} bytes)", width, height, size);
        Ok(Self {
            width,
            height,
            bytes: vec![0; size],
        })
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The packed storage, row by row.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize / 8
    }

    /// Check if two grids have the same width and height.
    #[inline]
    pub fn same_dimensions(&self, other: &BitGrid) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Check if coordinates are within grid bounds.
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Byte index and bit mask for an in-bounds cell.
    #[inline]
    fn locate(&self, x: i32, y: i32) -> (usize, u8) {
        let (x, y) = (x as usize, y as usize);
        (x / 8 + y * self.stride(), 1 << (x % 8))
    }

    /// Off-grid cells read as dead.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let (idx, mask) = self.locate(x, y);
        self.bytes[idx] & mask != 0
    }

    /// Off-grid writes, negative coordinates included, are dropped.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, alive: bool) {
        if !self.in_bounds(x, y) {
            return;
        }
        let (idx, mask) = self.locate(x, y);
        if alive {
            self.bytes[idx] |= mask;
        } else {
            self.bytes[idx] &= !mask;
        }
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }
}

/// Count live cells in the Moore neighborhood (8 neighbors) of `(x, y)`.
///
/// Returns as soon as the count reaches [`NEIGHBOR_CAP`], so the result is
/// exact for 0..=3 and 4 for anything higher.
pub fn count_neighbors(grid: &BitGrid, x: i32, y: i32) -> u8 {
    let mut count = 0;

    for dy in -1..=1 {
        for dx in -1..=1 {
            // Skip the center cell
            if dx == 0 && dy == 0 {
                continue;
            }

            let (Some(nx), Some(ny)) = (x.checked_add(dx), y.checked_add(dy)) else {
                continue;
            };

            if grid.get(nx, ny) {
                count += 1;
                if count == NEIGHBOR_CAP {
                    return count;
                }
            }
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_grid() {
        let grid = BitGrid::new(16, 8).unwrap();
        assert_eq!(grid.width(), 16);
        assert_eq!(grid.height(), 8);
        assert_eq!(grid.stride(), 2);
        assert_eq!(grid.as_bytes().len(), 16);
        assert!(grid.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_create_grid_rejects_bad_dimensions() {
        assert_eq!(
            BitGrid::new(12, 8),
            Err(GridError::InvalidDimension { width: 12 })
        );
        assert_eq!(
            BitGrid::new(0, 8),
            Err(GridError::ZeroDimension {
                width: 0,
                height: 8
            })
        );
        assert_eq!(
            BitGrid::new(8, 0),
            Err(GridError::ZeroDimension {
                width: 8,
                height: 0
            })
        );
        assert!(matches!(
            BitGrid::new(8, u32::MAX),
            Err(GridError::Oversized { .. })
        ));
    }

    #[test]
    fn test_bit_layout() {
        let mut grid = BitGrid::new(16, 4).unwrap();

        grid.set(0, 0, true);
        assert_eq!(grid.as_bytes()[0], 0b0000_0001);

        grid.set(7, 0, true);
        assert_eq!(grid.as_bytes()[0], 0b1000_0001);

        // Second byte of row 2
        grid.set(9, 2, true);
        assert_eq!(grid.as_bytes()[1 + 2 * 2], 0b0000_0010);
    }

    #[test]
    fn test_set_and_get_cell() {
        let mut grid = BitGrid::new(8, 8).unwrap();

        grid.set(3, 4, true);
        assert!(grid.get(3, 4));
        assert!(!grid.get(4, 3));

        grid.set(3, 4, false);
        assert!(!grid.get(3, 4));
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = BitGrid::new(8, 8).unwrap();

        assert!(!grid.get(-1, 0));
        assert!(!grid.get(0, -1));
        assert!(!grid.get(8, 0));
        assert!(!grid.get(0, 8));
        assert!(!grid.get(i32::MIN, i32::MAX));

        // Dropped silently
        grid.set(-1, 0, true);
        grid.set(0, -1, true);
        grid.set(8, 0, true);
        grid.set(0, 8, true);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_in_bounds() {
        let grid = BitGrid::new(8, 4).unwrap();

        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(7, 3));

        assert!(!grid.in_bounds(-1, 0));
        assert!(!grid.in_bounds(8, 0));
        assert!(!grid.in_bounds(0, 4));
    }

    #[test]
    fn test_clear_and_population() {
        let mut grid = BitGrid::new(16, 16).unwrap();
        for i in 0..16 {
            grid.set(i, i, true);
        }
        grid.set(3, 9, true);
        assert_eq!(grid.population(), 17);

        grid.clear();
        assert_eq!(grid.population(), 0);
        for y in 0..16 {
            for x in 0..16 {
                assert!(!grid.get(x, y));
            }
        }
    }

    #[test]
    fn test_count_neighbors() {
        let mut grid = BitGrid::new(8, 8).unwrap();

        // Plus shape: center + 4 orthogonal neighbors
        grid.set(4, 4, true);
        grid.set(3, 4, true);
        grid.set(5, 4, true);
        grid.set(4, 3, true);
        grid.set(4, 5, true);

        // Center does not count itself
        assert_eq!(count_neighbors(&grid, 4, 4), 4);
        assert_eq!(count_neighbors(&grid, 3, 4), 3); // center, top, bottom
        assert_eq!(count_neighbors(&grid, 3, 3), 3); // left, center, top
        assert_eq!(count_neighbors(&grid, 2, 4), 1);
        assert_eq!(count_neighbors(&grid, 0, 0), 0);
    }

    #[test]
    fn test_count_neighbors_is_capped() {
        let mut grid = BitGrid::new(8, 8).unwrap();
        for y in 0..3 {
            for x in 0..3 {
                grid.set(x, y, true);
            }
        }

        assert_eq!(count_neighbors(&grid, 1, 1), NEIGHBOR_CAP);
    }

    #[test]
    fn test_count_neighbors_at_edges() {
        let mut grid = BitGrid::new(8, 8).unwrap();
        grid.set(0, 1, true);
        grid.set(1, 0, true);
        grid.set(1, 1, true);

        // Off-grid neighbors count as dead
        assert_eq!(count_neighbors(&grid, 0, 0), 3);
        assert_eq!(count_neighbors(&grid, -1, -1), 0);
        assert_eq!(count_neighbors(&grid, -1, 0), 1);
        assert_eq!(count_neighbors(&grid, i32::MAX, i32::MIN), 0);
    }
}
