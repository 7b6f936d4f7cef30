//! Square brush edits.

use super::grid::BitGrid;

/// Set every cell in a `diameter`-wide square around `(center_x, center_y)`.
///
/// The square spans `center - floor((d-1)/2) ..= center + floor(d/2)` on
/// both axes, so even diameters extend one cell further toward positive
/// coordinates. Cells past the grid edge are skipped. A diameter of 0 does
/// nothing.
pub fn set_region(grid: &mut BitGrid, alive: bool, diameter: u32, center_x: i32, center_y: i32) {
    if diameter == 0 {
        return;
    }

    let (min_x, max_x) = clip_span(center_x, diameter, grid.width());
    let (min_y, max_y) = clip_span(center_y, diameter, grid.height());

    for y in min_y..max_y {
        for x in min_x..max_x {
            grid.set(x, y, alive);
        }
    }
}

/// Half-open span of the brush along one axis, clamped to `0..len`.
fn clip_span(center: i32, diameter: u32, len: u32) -> (i32, i32) {
    let start = center as i64 - ((diameter - 1) / 2) as i64;
    let end = center as i64 + (diameter / 2) as i64 + 1;

    // len fits in i32, so both clamped ends do too
    let start = start.clamp(0, len as i64) as i32;
    let end = end.clamp(0, len as i64) as i32;
    (start, end.max(start))
}
