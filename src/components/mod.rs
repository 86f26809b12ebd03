//! Shared chrome components for the app shell.

pub mod bottom_nav;
pub mod toolbar;
