//! Per-section interaction state: the tab/copy state machine.
//!
//! Each mounted section owns one `SectionController`. The controller
//! holds the ephemeral UI state (active tab, copy acknowledgement),
//! drives the clipboard and reset-timer ports, and pushes every state
//! change through an `on_change` callback so the rendering layer can
//! mirror it however it likes. Nothing here depends on the UI framework,
//! which keeps the whole machine testable under the native test harness
//! with stub ports and a virtual clock.

use std::cell::Cell;
use std::rc::Rc;

use crate::catalog::Section;
use crate::clipboard::ClipboardPort;
use crate::diagnostics::DiagnosticsSink;
use crate::schedule::{ResetScheduler, TimerId};

/// How long the copy button shows its "copied" acknowledgement.
pub const COPY_ACK_WINDOW_MS: i32 = 2000;

/// Which pane of a section is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Preview,
    Code,
}

/// Ephemeral UI state of one section. Created when the section is
/// displayed, dropped when it unmounts; never shared across sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionUiState {
    pub active_tab: Tab,
    pub copy_acknowledged: bool,
}

impl SectionUiState {
    pub fn new() -> Self {
        Self {
            active_tab: Tab::Preview,
            copy_acknowledged: false,
        }
    }
}

impl Default for SectionUiState {
    fn default() -> Self {
        Self::new()
    }
}

struct Inner {
    section: &'static Section,
    state: Cell<SectionUiState>,
    /// Reset task for the acknowledgement window. At most one pending;
    /// a new successful copy cancels it before scheduling its own.
    pending_reset: Cell<Option<TimerId>>,
    clipboard: Rc<dyn ClipboardPort>,
    scheduler: Rc<dyn ResetScheduler>,
    diagnostics: Rc<dyn DiagnosticsSink>,
    on_change: Box<dyn Fn(SectionUiState)>,
}

/// Drives one section's interaction state machine.
///
/// Cheap to clone (shared handle); clones are what event closures and
/// timer callbacks capture.
#[derive(Clone)]
pub struct SectionController {
    inner: Rc<Inner>,
}

impl SectionController {
    pub fn new(
        section: &'static Section,
        clipboard: Rc<dyn ClipboardPort>,
        scheduler: Rc<dyn ResetScheduler>,
        diagnostics: Rc<dyn DiagnosticsSink>,
        on_change: impl Fn(SectionUiState) + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                section,
                state: Cell::new(SectionUiState::new()),
                pending_reset: Cell::new(None),
                clipboard,
                scheduler,
                diagnostics,
                on_change: Box::new(on_change),
            }),
        }
    }

    pub fn section(&self) -> &'static Section {
        self.inner.section
    }

    pub fn state(&self) -> SectionUiState {
        self.inner.state.get()
    }

    pub fn select_preview(&self) {
        self.set_tab(Tab::Preview);
    }

    pub fn select_code(&self) {
        self.set_tab(Tab::Code);
    }

    /// Write the section's code text to the clipboard.
    ///
    /// On success the acknowledgement flag turns on and a fresh reset is
    /// scheduled, superseding any pending one. On failure the state is
    /// left exactly as it was and the detail goes to diagnostics only.
    pub fn copy(&self) {
        let this = self.clone();
        self.inner.clipboard.write(
            self.inner.section.code,
            Box::new(move |result| match result {
                Ok(()) => this.acknowledge_copy(),
                Err(err) => this.inner.diagnostics.report(&format!(
                    "Aboutme: copy to clipboard failed for \"{}\": {}",
                    this.inner.section.title, err
                )),
            }),
        );
    }

    fn set_tab(&self, tab: Tab) {
        let mut state = self.inner.state.get();
        if state.active_tab == tab {
            // Clicking the already-active tab is a no-op, not an error.
            return;
        }
        state.active_tab = tab;
        self.inner.state.set(state);
        (self.inner.on_change)(state);
    }

    fn acknowledge_copy(&self) {
        if let Some(timer) = self.inner.pending_reset.take() {
            self.inner.scheduler.cancel(timer);
        }
        self.set_acknowledged(true);

        let this = self.clone();
        let timer = self.inner.scheduler.schedule(
            COPY_ACK_WINDOW_MS,
            Box::new(move || {
                this.inner.pending_reset.set(None);
                this.set_acknowledged(false);
            }),
        );
        self.inner.pending_reset.set(Some(timer));
    }

    fn set_acknowledged(&self, on: bool) {
        let mut state = self.inner.state.get();
        state.copy_acknowledged = on;
        self.inner.state.set(state);
        (self.inner.on_change)(state);
    }
}
