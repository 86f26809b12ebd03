//! Settings page placeholder.

use leptos::prelude::*;

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <div class="page page--settings">
            <h1>"Settings"</h1>
            <p>"Nothing to configure yet."</p>
        </div>
    }
}
