//! Networking for the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` implements the core `Transport` seam over `gloo-net` so the
//! shared JSON wrapper in `signon::net::api` runs unchanged in the browser.

pub mod transport;
