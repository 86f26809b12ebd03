//! Placeholder record-store client.
//!
//! Constructed from two build-time configuration strings and provided as
//! a context at startup. No view exercises it; the capability set
//! (read/write records) lands with the real backend integration.

#[cfg(test)]
#[path = "supabase_test.rs"]
mod supabase_test;

/// Inert client for the hosted record store.
#[derive(Clone, Debug, Default)]
pub struct Supabase {
    pub url: String,
    pub anon_key: String,
}

impl Supabase {
    /// Build a client from explicit configuration values.
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
        }
    }

    /// Build a client from the build-time environment.
    ///
    /// Missing values default to empty strings; nothing is validated
    /// because no operation consumes the configuration yet.
    pub fn from_env() -> Self {
        Self::new(
            option_env!("SUPABASE_URL").unwrap_or_default(),
            option_env!("SUPABASE_ANON_KEY").unwrap_or_default(),
        )
    }
}
