//! Fire-and-forget diagnostics reporting.
//!
//! The only runtime failure in this app is a rejected clipboard write,
//! which is deliberately non-fatal: the user just doesn't get the
//! "copied" confirmation. The detail still goes somewhere a developer
//! can see it.

/// Consumes human-readable failure reports. No acknowledgement, no
/// backpressure.
pub trait DiagnosticsSink {
    fn report(&self, message: &str);
}

/// `DiagnosticsSink` that warns to the browser console.
pub struct ConsoleSink;

impl DiagnosticsSink for ConsoleSink {
    fn report(&self, message: &str) {
        web_sys::console::warn_1(&message.into());
    }
}
