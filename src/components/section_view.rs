use std::rc::Rc;

use leptos::*;

use super::{CopyButton, IconTerminal, TabSwitcher};
use crate::catalog::Section;
use crate::clipboard::NavigatorClipboard;
use crate::diagnostics::ConsoleSink;
use crate::schedule::WindowScheduler;
use crate::section_state::{SectionController, SectionUiState, Tab};

/// One section card: title bar, Preview/Code tabs, content pane.
///
/// Owns its section's interaction state exclusively. The controller runs
/// the state machine against the real browser ports and mirrors every
/// change into a signal for rendering.
#[component]
pub fn SectionView(section: &'static Section) -> impl IntoView {
    let (state, set_state) = create_signal(SectionUiState::new());
    let controller = SectionController::new(
        section,
        Rc::new(NavigatorClipboard),
        Rc::new(WindowScheduler),
        Rc::new(ConsoleSink),
        move |next| set_state.set(next),
    );

    let active_tab = Signal::derive(move || state.get().active_tab);
    let copied = Signal::derive(move || state.get().copy_acknowledged);

    let tabs = controller.clone();
    let on_select = move |tab| match tab {
        Tab::Preview => tabs.select_preview(),
        Tab::Code => tabs.select_code(),
    };
    let on_copy = Callback::new(move |_: ()| controller.copy());

    view! {
        <div class="section-card">
            <div class="section-title-bar">
                <IconTerminal/>
                <span class="section-title">{section.title}</span>
            </div>
            <TabSwitcher active_tab=active_tab on_select=on_select/>
            <div class="section-body">
                {move || match active_tab.get() {
                    Tab::Preview => view! {
                        <div class="preview-pane">{section.preview}</div>
                    }
                    .into_view(),
                    Tab::Code => view! {
                        <pre class="code-pane"><code>{section.code}</code></pre>
                        <CopyButton copied=copied on_copy=on_copy/>
                    }
                    .into_view(),
                }}
            </div>
        </div>
    }
}
