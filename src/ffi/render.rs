//! Frame rendering into host-owned buffers.

use crate::automaton;
use crate::state::State;

/// Renders one byte per cell (0 = alive, 255 = dead) in raster order.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
/// - `out_buf` must point to at least `len` writable bytes, or be null
///
/// # Returns
/// Number of bytes written (`width * height`), or 0 on error
/// (null pointer or `len` too small).
#[no_mangle]
pub unsafe extern "C" fn life_render(ptr: *const State, out_buf: *mut u8, len: usize) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let state = &*ptr;
    let buf_slice = std::slice::from_raw_parts_mut(out_buf, len);
    automaton::render_into(state.engine.grid(), buf_slice) as u64
}

/// Renders four bytes (RGBA) per cell in raster order, using the handle's
/// palette (opaque black on white).
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
/// - `out_buf` must point to at least `len` writable bytes, or be null
///
/// # Returns
/// Number of bytes written (`width * height * 4`), or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn life_render_rgba(
    ptr: *const State,
    out_buf: *mut u8,
    len: usize,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let state = &*ptr;
    let buf_slice = std::slice::from_raw_parts_mut(out_buf, len);
    automaton::render_rgba_into(state.engine.grid(), &state.palette, buf_slice) as u64
}

/// Renders the current generation into the handle's own RGBA frame and
/// returns a pointer to it, so the host can upload without owning a buffer.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
/// - `out_len` must point to a writable `usize`, or be null
/// - The returned pointer is valid until the next call that takes `ptr`
///   mutably, or `life_destroy()`
///
/// # Returns
/// The frame (`width * height * 4` bytes, length stored in `*out_len`), or
/// null if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn life_frame(ptr: *mut State, out_len: *mut usize) -> *const u8 {
    if ptr.is_null() {
        if !out_len.is_null() {
            *out_len = 0;
        }
        return std::ptr::null();
    }

    let state = &mut *ptr;
    let frame = state.render_frame();
    if !out_len.is_null() {
        *out_len = frame.len();
    }
    frame.as_ptr()
}
