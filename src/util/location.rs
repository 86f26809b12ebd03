//! URL fragment access.
//!
//! The fragment is the shell's only navigation signal: writing it here
//! triggers the browser's own `hashchange` notification, which the root
//! component observes. Off-browser builds read an empty fragment and
//! treat writes as no-ops.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

/// Strip the leading `#` from a raw `location.hash` value.
pub fn normalize_fragment(hash: &str) -> &str {
    hash.strip_prefix('#').unwrap_or(hash)
}

/// Read the current URL fragment, without the leading `#`.
pub fn current_fragment() -> String {
    #[cfg(feature = "web")]
    {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .map(|hash| normalize_fragment(&hash).to_owned())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "web"))]
    {
        String::new()
    }
}

/// Write a new URL fragment.
pub fn set_fragment(token: &str) {
    #[cfg(feature = "web")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(token);
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = token;
    }
}
