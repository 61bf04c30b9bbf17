//! Shared building blocks for the gridflex workspace.
//!
//! Holds the pieces every other crate needs without pulling in the
//! recurrence engine or the HTTP stack: configuration, the core error
//! type, route constants, and the small enums that travel on the wire.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
