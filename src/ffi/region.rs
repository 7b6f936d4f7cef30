//! Brush edits over a square region.

use crate::state::State;

/// Sets (non-zero) or clears (0) a `diameter`-wide square of cells centered
/// on `(x, y)`.
///
/// Even diameters extend one cell further toward positive coordinates.
/// Cells outside the grid are skipped; a diameter of 0 does nothing.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
#[no_mangle]
pub unsafe extern "C" fn life_set_region(
    ptr: *mut State,
    alive: u8,
    diameter: u32,
    x: i32,
    y: i32,
) {
    if ptr.is_null() {
        return;
    }

    let state = &mut *ptr;
    state.set_region(alive != 0, diameter, x, y);
}
