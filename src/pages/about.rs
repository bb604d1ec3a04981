use leptos::*;

use crate::catalog;
use crate::components::{IconBookOpen, SectionView};

/// The about page: a static header followed by one section card per
/// catalog entry, in catalog order. The catalog is a fixed list, so each
/// card keeps independent, stable state across re-renders by position.
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <main class="container about-page">
            <header class="page-header">
                <IconBookOpen/>
                <h1>
                    <a href="https://github.com/acy2k5" target="_blank" rel="noopener noreferrer">
                        "acy2k5"
                    </a>
                    "/"
                    <span class="page-filename">"ABOUTME.md"</span>
                </h1>
            </header>

            {catalog::sections()
                .iter()
                .map(|section| view! { <SectionView section=section/> })
                .collect_view()}
        </main>
    }
}
