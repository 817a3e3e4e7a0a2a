//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components render `signon` state and report user intent upward through
//! callbacks; requests and navigation stay in `pages`.

pub mod auth_form;
pub mod require_auth;
pub mod visibility_toggle;
