//! Play/pause and frame cadence.

use crate::state::State;

/// Switches between paused and running.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
#[no_mangle]
pub unsafe extern "C" fn life_toggle_running(ptr: *mut State) {
    if ptr.is_null() {
        return;
    }

    let state = &mut *ptr;
    state.playback.toggle();
}

/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// 1 if running, 0 if paused or ptr is null.
#[no_mangle]
pub unsafe extern "C" fn life_is_running(ptr: *const State) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    let state = &*ptr;
    state.playback.is_running() as u8
}

/// Sets how many host frames to skip between generations while running.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
#[no_mangle]
pub unsafe extern "C" fn life_set_frames_per_step(ptr: *mut State, frames_per_step: u32) {
    if ptr.is_null() {
        return;
    }

    let state = &mut *ptr;
    state.playback.set_frames_per_step(frames_per_step);
}

/// Call once per host frame. Steps a generation when running and due.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// 1 if a generation was stepped, 0 otherwise.
#[no_mangle]
pub unsafe extern "C" fn life_advance_frame(ptr: *mut State) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    let state = &mut *ptr;
    state.advance_frame() as u8
}
