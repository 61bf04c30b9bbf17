//! Gridflex schedule server - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `gridflex_test::` paths.

pub mod component {
    pub use gridflex_recur as recur;
    pub use gridflex_service as service;

    // Re-export config from both core and app
    pub mod config {
        pub use gridflex_app::state::ConfigHandler;
        pub use gridflex_core::config::*;
    }

    pub mod types {
        pub use gridflex_core::types::*;
    }
}

// Re-export top-level modules for convenience
pub mod app {
    pub use gridflex_app::*;

    pub mod api {
        pub use gridflex_app::app::api::*;
    }
}
