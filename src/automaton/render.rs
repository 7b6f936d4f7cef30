//! Frame rendering for texture upload.
//!
//! Every call is a full snapshot of the grid in raster order (row by row,
//! x changing fastest). Because widths are multiples of 8, packed byte `i`
//! covers exactly output cells `8 * i .. 8 * i + 8`.

use super::grid::BitGrid;

/// Luma value written for a live cell.
pub const LIVE_LUMA: u8 = 0;
/// Luma value written for a dead cell.
pub const DEAD_LUMA: u8 = 255;

/// Colors used by [`render_rgba`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub live: [u8; 4],
    pub dead: [u8; 4],
}

impl Default for Palette {
    /// Opaque black on white.
    fn default() -> Self {
        Self {
            live: [0, 0, 0, 255],
            dead: [255, 255, 255, 255],
        }
    }
}

/// Bytes needed for a single-channel frame.
pub fn frame_len(grid: &BitGrid) -> usize {
    grid.width() as usize * grid.height() as usize
}

/// Render one byte per cell: [`LIVE_LUMA`] or [`DEAD_LUMA`].
pub fn render(grid: &BitGrid) -> Vec<u8> {
    let mut out = vec![0; frame_len(grid)];
    render_into(grid, &mut out);
    out
}

/// Render into a caller-owned buffer.
///
/// # Returns
/// Number of bytes written, or 0 if `out` is too small.
pub fn render_into(grid: &BitGrid, out: &mut [u8]) -> usize {
    let len = frame_len(grid);
    if out.len() < len {
        return 0;
    }

    for (&packed, cells) in grid.as_bytes().iter().zip(out[..len].chunks_exact_mut(8)) {
        for (bit, cell) in cells.iter_mut().enumerate() {
            *cell = if packed & (1 << bit) != 0 {
                LIVE_LUMA
            } else {
                DEAD_LUMA
            };
        }
    }

    len
}

/// Render four bytes (RGBA) per cell using `palette`.
pub fn render_rgba(grid: &BitGrid, palette: &Palette) -> Vec<u8> {
    let mut out = vec![0; frame_len(grid) * 4];
    render_rgba_into(grid, palette, &mut out);
    out
}

/// RGBA variant of [`render_into`].
///
/// # Returns
/// Number of bytes written, or 0 if `out` is too small.
pub fn render_rgba_into(grid: &BitGrid, palette: &Palette, out: &mut [u8]) -> usize {
    let len = frame_len(grid) * 4;
    if out.len() < len {
        return 0;
    }

    for (&packed, pixels) in grid.as_bytes().iter().zip(out[..len].chunks_exact_mut(32)) {
        for (bit, pixel) in pixels.chunks_exact_mut(4).enumerate() {
            let color = if packed & (1 << bit) != 0 {
                &palette.live
            } else {
                &palette.dead
            };
            pixel.copy_from_slice(color);
        }
    }

    len
}
