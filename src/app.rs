//! Root application component with routing and context providers.
//!
//! DESIGN
//! ======
//! The fragment is re-parsed on every `hashchange` notification; the
//! browser is the only source of navigation events, so writing a new
//! fragment (bottom nav) and pressing back both flow through the same
//! listener. Unrecognized fragments render `Home`; there is no error
//! surface.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::bottom_nav::BottomNav;
use crate::components::toolbar::Toolbar;
use crate::net::supabase::Supabase;
use crate::pages::{
    home::HomePage, importer::ImporterPage, lesson::LessonPage, settings::SettingsPage,
};
use crate::state::route::Route;
use crate::state::ui::UiState;
use crate::util::{location, theme};

/// Root application component.
///
/// Owns the two pieces of render-trigger state (route and theme),
/// provides shared contexts, and dispatches the current route to exactly
/// one page component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let route = RwSignal::new(Route::parse(&location::current_fragment()));
    let ui = RwSignal::new(UiState::default());

    provide_context(route);
    provide_context(ui);
    // Inert until the record-store integration lands; no view reads it.
    provide_context(Supabase::from_env());

    theme::apply(ui.get_untracked().theme);

    // Re-derive the route whenever the browser reports a fragment change.
    #[cfg(feature = "web")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let on_hash_change = Closure::wrap(Box::new(move || {
            let next = Route::parse(&location::current_fragment());
            log::debug!("route -> {next:?}");
            route.set(next);
        }) as Box<dyn FnMut()>);
        if let Some(window) = web_sys::window() {
            let _ = window.add_event_listener_with_callback(
                "hashchange",
                on_hash_change.as_ref().unchecked_ref(),
            );
        }
        on_hash_change.forget();
    }

    let page = move || match route.get() {
        Route::Home => view! { <HomePage/> }.into_any(),
        Route::Importer => view! { <ImporterPage/> }.into_any(),
        Route::Settings => view! { <SettingsPage/> }.into_any(),
        Route::Lesson(id) => view! { <LessonPage id=id/> }.into_any(),
    };

    view! {
        <Title text="Learn English"/>

        <div class="app">
            <Toolbar/>
            <main class="app__main">{page}</main>
            <BottomNav/>
        </div>
    }
}
