//! Top bar displaying the product title and the theme toggle.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme;

/// Header bar for the shell.
///
/// The toggle button is labeled with the mode a click switches to.
#[component]
pub fn Toolbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <header class="toolbar">
            <span class="toolbar__title">"Learn English"</span>
            <span class="toolbar__spacer"></span>
            <button
                class="btn toolbar__theme-toggle"
                on:click=move |_| {
                    let next = theme::toggle(ui.get().theme);
                    ui.update(|u| u.theme = next);
                }
                title="Toggle theme"
            >
                {move || ui.get().theme.toggle_label()}
            </button>
        </header>
    }
}
