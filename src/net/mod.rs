//! Backend integration point.
//!
//! SYSTEM CONTEXT
//! ==============
//! `supabase` holds the placeholder record-store client. No network or
//! storage operation is implemented yet; pages render without data.

pub mod supabase;
