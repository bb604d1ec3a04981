use leptos::*;

use super::{IconCode, IconEye};
use crate::section_state::Tab;

/// Preview/Code tab bar for one section. Both tabs are always clickable;
/// the active one is marked with the `active` class.
#[component]
pub fn TabSwitcher(
    active_tab: Signal<Tab>,
    #[prop(into)] on_select: Callback<Tab>,
) -> impl IntoView {
    view! {
        <div class="tab-switcher">
            <button
                class="tab-button"
                class:active=move || active_tab.get() == Tab::Preview
                on:click=move |_| on_select.call(Tab::Preview)
            >
                <IconEye/>
                " Preview"
            </button>
            <button
                class="tab-button"
                class:active=move || active_tab.get() == Tab::Code
                on:click=move |_| on_select.call(Tab::Code)
            >
                <IconCode/>
                " Code"
            </button>
        </div>
    }
}
