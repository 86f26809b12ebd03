//! Importer page placeholder.

use leptos::prelude::*;

/// Screen for bringing in outside study material.
#[component]
pub fn ImporterPage() -> impl IntoView {
    view! {
        <div class="page page--importer">
            <h1>"Importer"</h1>
            <p>"Import your own study material."</p>
        </div>
    }
}
