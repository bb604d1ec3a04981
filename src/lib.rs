pub mod catalog;
pub mod clipboard;
pub mod components;
pub mod diagnostics;
pub mod pages;
pub mod schedule;
pub mod section_state;

use leptos::*;
use pages::AboutPage;
use wasm_bindgen::prelude::*;

/// Root component. The about page is self-contained; an embedding site
/// supplies its own chrome and routing around it.
#[component]
fn Root() -> impl IntoView {
    view! { <AboutPage/> }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(Root);
}
