//! Theme attribute synchronization.
//!
//! Mirrors the in-memory theme flag onto the `data-theme` attribute of
//! the `<html>` element. The flag is not persisted; every load starts
//! from the default. Requires a browser environment; off-browser builds
//! no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::ui::Theme;

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "web")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = theme;
    }
}

/// Toggle the theme and update the document attribute.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    next
}
