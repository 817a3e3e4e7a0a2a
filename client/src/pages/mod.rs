//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (requests, navigation, page
//! error) and delegates rendering details to `components`.

pub mod dashboard;
pub mod home;
pub mod login;
