//! Clipboard utilities for copying text to clipboard
//!
//! Wraps the async Web Clipboard API. The write never blocks the UI; the
//! outcome is reported through a callback so callers can drive their own
//! feedback state.

use wasm_bindgen_futures::spawn_local;

/// Copy text to the system clipboard and report the outcome.
///
/// `on_done` receives `true` on success and `false` when the clipboard is
/// denied or unavailable.
pub fn copy_to_clipboard<F>(text: &str, on_done: F)
where
    F: FnOnce(bool) + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            on_done(false);
            return;
        };
        let clipboard = window.navigator().clipboard();
        let ok = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
            .await
            .is_ok();
        on_done(ok);
    });
}
