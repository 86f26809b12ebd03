//! Home page placeholder.

use leptos::prelude::*;

/// Landing screen shown for the default route.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page--home">
            <h1>"Home"</h1>
            <p>"Pick a lesson to get started."</p>
        </div>
    }
}
