//! Error handling module
//!
//! Defines the library error type and the exit codes the driver maps it to

pub mod types;

pub use types::*;
