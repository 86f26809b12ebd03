//! Local UI chrome state (theme flag).
//!
//! DESIGN
//! ======
//! Keeps the presentation flag out of routing state so the shell's two
//! render triggers stay independently owned. The theme is deliberately
//! not persisted across reloads; every load starts dark.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Two-valued display mode mirrored onto the document root element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Initial mode for the shell.
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Value carried by the `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Toggle button label — names the mode a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Light",
            Self::Light => "Dark",
        }
    }
}

/// UI state for the theme flag.
///
/// Provided as an `RwSignal` context by the root component.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
}
