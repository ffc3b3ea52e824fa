//! Option map module
//!
//! Turns a raw argument vector into an [`OptionMap`] and provides the typed
//! lookups callers use to read it back.

pub mod accessor;
pub mod parser;
pub mod value;

pub use parser::{ParseMode, Parser, parse};
pub use value::{MAIN_OPTION, OptionMap, OptionValue, normalize_key};
