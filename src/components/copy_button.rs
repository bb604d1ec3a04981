use leptos::*;

use super::{IconClipboard, IconClipboardCheck};

/// Copy affordance shown over the code pane. Two mutually exclusive
/// visual states: idle clipboard, or clipboard-check while the
/// acknowledgement window is open.
#[component]
pub fn CopyButton(copied: Signal<bool>, #[prop(into)] on_copy: Callback<()>) -> impl IntoView {
    view! {
        <button
            class="copy-button"
            class:copied=move || copied.get()
            title=move || if copied.get() { "Copied" } else { "Copy to clipboard" }
            on:click=move |_| on_copy.call(())
        >
            {move || if copied.get() {
                view! { <IconClipboardCheck/> }.into_view()
            } else {
                view! { <IconClipboard/> }.into_view()
            }}
        </button>
    }
}
