//! Cell access, clearing, and stepping.

use crate::state::State;

/// Sets a cell to alive (non-zero) or dead (0).
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// Out-of-bounds coordinates, negative ones included, are silently ignored.
#[no_mangle]
pub unsafe extern "C" fn life_set_cell(ptr: *mut State, x: i32, y: i32, alive: u8) {
    if ptr.is_null() {
        return;
    }

    let state = &mut *ptr;
    state.engine.grid_mut().set(x, y, alive != 0);
}

/// Gets the state of a cell (0 = dead, 1 = alive).
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// 0 if out of bounds, null pointer, or dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn life_get_cell(ptr: *const State, x: i32, y: i32) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    let state = &*ptr;
    state.engine.grid().get(x, y) as u8
}

/// Kills every cell. The generation counter is left alone.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
#[no_mangle]
pub unsafe extern "C" fn life_clear(ptr: *mut State) {
    if ptr.is_null() {
        return;
    }

    let state = &mut *ptr;
    state.engine.grid_mut().clear();
}

/// Advances the simulation by one generation (B3/S23).
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
#[no_mangle]
pub unsafe extern "C" fn life_step(ptr: *mut State) {
    if ptr.is_null() {
        return;
    }

    let state = &mut *ptr;
    state.single_step();
}

/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// Number of live cells, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn life_population(ptr: *const State) -> u64 {
    if ptr.is_null() {
        return 0;
    }

    let state = &*ptr;
    state.engine.grid().population() as u64
}
