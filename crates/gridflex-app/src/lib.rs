//! HTTP surface of the gridflex scheduling server.

pub mod app;
pub mod error;
pub mod state;
