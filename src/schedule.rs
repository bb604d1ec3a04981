//! One-shot cancellable timers behind a port trait.
//!
//! The copy acknowledgement reset is the only timed behavior in the app.
//! It is modeled as an explicitly cancellable scheduled task: a new copy
//! cancels the previous reset before scheduling its own, so overlapping
//! copies never flicker the acknowledgement off early.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Handle to a scheduled one-shot task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerId(pub i32);

/// Environment capability: run a callback once after a delay, unless
/// cancelled first.
pub trait ResetScheduler {
    fn schedule(&self, delay_ms: i32, callback: Box<dyn FnOnce()>) -> TimerId;
    fn cancel(&self, timer: TimerId);
}

/// `ResetScheduler` backed by `window.setTimeout` / `clearTimeout`.
pub struct WindowScheduler;

impl ResetScheduler for WindowScheduler {
    fn schedule(&self, delay_ms: i32, callback: Box<dyn FnOnce()>) -> TimerId {
        let closure = Closure::once(callback);
        let handle = web_sys::window()
            .and_then(|window| {
                window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(
                        closure.as_ref().unchecked_ref(),
                        delay_ms,
                    )
                    .ok()
            })
            // Outside a browser there is nothing to schedule; hand back an
            // inert handle so cancel() stays a no-op.
            .unwrap_or(-1);
        closure.forget(); // Keep the closure alive until the timeout fires
        TimerId(handle)
    }

    fn cancel(&self, timer: TimerId) {
        if timer.0 < 0 {
            return;
        }
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(timer.0);
        }
    }
}
