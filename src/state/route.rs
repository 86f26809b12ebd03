//! Route tokens parsed from the URL fragment.
//!
//! DESIGN
//! ======
//! The fragment is the sole routing signal, dispatched through an
//! explicit enum rather than raw string comparison. Parsing is total:
//! every input maps to a route, with unrecognized tokens falling back to
//! `Home` rather than surfacing an error.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// Route selected by the current URL fragment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    Importer,
    Settings,
    /// Lesson view bound to the first path segment after `lesson/`.
    Lesson(String),
}

impl Route {
    /// Parse a URL fragment (without the leading `#`) into a route.
    ///
    /// An empty fragment selects `Home`, as does any unrecognized token.
    /// A fragment under the `lesson/` prefix binds everything up to the
    /// next `/` as the lesson id; a bare `lesson` with no slash is an
    /// unrecognized token.
    pub fn parse(fragment: &str) -> Self {
        if let Some(rest) = fragment.strip_prefix("lesson/") {
            let id = rest.split('/').next().unwrap_or(rest);
            return Self::Lesson(id.to_owned());
        }
        match fragment {
            "importer" => Self::Importer,
            "settings" => Self::Settings,
            _ => Self::Home,
        }
    }

    /// Fragment token written to the URL when navigating to this route.
    pub fn fragment(&self) -> String {
        match self {
            Self::Home => "home".to_owned(),
            Self::Importer => "importer".to_owned(),
            Self::Settings => "settings".to_owned(),
            Self::Lesson(id) => format!("lesson/{id}"),
        }
    }
}
