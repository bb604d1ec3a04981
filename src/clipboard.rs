//! Clipboard access behind a small port trait.
//!
//! The browser clipboard API is asynchronous and can be rejected
//! (permissions, insecure context, headless environment), so the port
//! reports its outcome through a completion callback instead of a return
//! value. The interaction logic only sees the trait; tests drive it with
//! synchronous stubs.

use std::fmt;

use wasm_bindgen_futures::{spawn_local, JsFuture};

/// A clipboard write was rejected by the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardError {
    message: String,
}

impl ClipboardError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ClipboardError {}

/// Environment capability: write a string to the system clipboard.
///
/// `done` is invoked exactly once with the outcome. It may run
/// synchronously (test stubs) or after a suspension (the browser promise).
pub trait ClipboardPort {
    fn write(&self, text: &str, done: Box<dyn FnOnce(Result<(), ClipboardError>)>);
}

/// `ClipboardPort` backed by the browser's `navigator.clipboard`.
pub struct NavigatorClipboard;

impl ClipboardPort for NavigatorClipboard {
    fn write(&self, text: &str, done: Box<dyn FnOnce(Result<(), ClipboardError>)>) {
        let window = match web_sys::window() {
            Some(w) => w,
            None => {
                done(Err(ClipboardError::new("no window object")));
                return;
            }
        };

        let promise = window.navigator().clipboard().write_text(text);
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => done(Ok(())),
                Err(err) => {
                    // The rejection reason is usually a DOMException; its
                    // string form is all we need for diagnostics.
                    let reason = err
                        .as_string()
                        .unwrap_or_else(|| format!("{:?}", err));
                    done(Err(ClipboardError::new(reason)));
                }
            }
        });
    }
}
