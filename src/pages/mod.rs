//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is a pure rendering component. Route-scoped inputs arrive
//! as props; no page fetches data, holds cross-page state, or has
//! loading/error states.

pub mod home;
pub mod importer;
pub mod lesson;
pub mod settings;
