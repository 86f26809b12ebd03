//! Lesson page placeholder.

use leptos::prelude::*;

/// Lesson screen bound to the id extracted from the route.
///
/// Renders the id verbatim; no lesson content model exists yet.
#[component]
pub fn LessonPage(id: String) -> impl IntoView {
    view! {
        <div class="page page--lesson">
            <h1>"Lesson " {id}</h1>
            <p>"Content coming soon."</p>
        </div>
    }
}
