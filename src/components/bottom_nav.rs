//! Bottom navigation bar with the three top-level destinations.

use leptos::prelude::*;

use crate::state::route::Route;
use crate::util::location;

#[cfg(test)]
#[path = "bottom_nav_test.rs"]
mod bottom_nav_test;

/// Class for a nav item; the `--active` modifier marks the item whose
/// route matches the current one.
fn item_class(current: &Route, item: &Route) -> &'static str {
    if current == item {
        "bottom-nav__item bottom-nav__item--active"
    } else {
        "bottom-nav__item"
    }
}

/// Bottom navigation.
///
/// Clicking an item writes its fragment token; the router picks the
/// change up through the browser's own notification.
#[component]
pub fn BottomNav() -> impl IntoView {
    let route = expect_context::<RwSignal<Route>>();

    let items = [
        (Route::Home, "Home"),
        (Route::Importer, "Importer"),
        (Route::Settings, "Settings"),
    ];

    view! {
        <nav class="bottom-nav">
            {items
                .into_iter()
                .map(|(target, label)| {
                    let class = {
                        let target = target.clone();
                        move || item_class(&route.get(), &target)
                    };
                    let on_click = move |_| location::set_fragment(&target.fragment());
                    view! {
                        <button class=class on:click=on_click>
                            {label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
