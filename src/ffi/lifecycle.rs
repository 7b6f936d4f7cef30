//! Handle creation, destruction, and dimension/generation queries.

use crate::config::EngineConfig;
use crate::state::State;

/// Creates a new simulation with an all-dead `width` x `height` grid.
///
/// # Returns
/// A pointer to a new State, or null if the dimensions are invalid
/// (zero, or a width that is not a multiple of 8).
///
/// # Safety
/// The returned pointer must eventually be freed with `life_destroy()`.
#[no_mangle]
pub extern "C" fn life_create(width: u32, height: u32) -> *mut State {
    match State::new(&EngineConfig::new(width, height)) {
        Ok(state) => Box::into_raw(Box::new(state)),
        Err(err) => {
            log::warn!("life_create failed: {}", err);
            std::ptr::null_mut()
        }
    }
}

/// Destroys a simulation and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `life_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn life_destroy(ptr: *mut State) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// Grid width in cells, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn life_width(ptr: *const State) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).engine.grid().width()
}

/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// Grid height in cells, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn life_height(ptr: *const State) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).engine.grid().height()
}

/// Gets the number of generations stepped so far.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn life_generation(ptr: *const State) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).engine.generation()
}
