//! One-shot browser timers.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Run `f` once after `delay_ms`. Returns the timer handle, or `None` when
/// there is no window to schedule on.
///
/// The callback is handed to the browser with `forget()`. A timer cleared
/// through [`cancel`] never runs it, so its closure stays allocated; that is
/// one small closure per cancelled debounce.
pub fn schedule(delay_ms: u32, f: impl FnOnce() + 'static) -> Option<i32> {
    let window = web_sys::window()?;
    let callback = Closure::once(f);
    let id = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            i32::try_from(delay_ms).unwrap_or(i32::MAX),
        )
        .ok();
    callback.forget();
    id
}

pub fn cancel(id: i32) {
    if let Some(window) = web_sys::window() {
        window.clear_timeout_with_handle(id);
    }
}

/// Run `f` before the next repaint, after pending DOM updates.
pub fn next_frame(f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once(f);
    let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    callback.forget();
}
