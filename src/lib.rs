//! Interactive single-page patient chart viewer.
//!
//! The binary in `main.rs` wires configuration, the record service client
//! and the startup fetches together, then hands off to
//! [`session::run_session`] for the interactive loop.

pub mod session;
