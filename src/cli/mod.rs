//! Command-line interface module
//!
//! The demo program: which options it reads and what it does with them

pub mod args;
pub mod commands;

pub use args::*;
pub use commands::*;
