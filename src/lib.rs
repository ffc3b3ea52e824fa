//! `ConsoleKit` - Option parsing and leveled logging for command-line programs
//!
//! This library turns a raw argument vector into a queryable option map and
//! logs leveled messages to the console and/or a per-run text file.
//!
//! ```
//! use consolekit::options::parse;
//!
//! let options = parse(["input.txt", "-Level", "3", "-verbose"]).unwrap();
//!
//! assert_eq!(options.get_main(), Some("input.txt"));
//! assert_eq!(options.get_parsed::<u8>("level").unwrap(), Some(3));
//! assert!(options.get_switch("Verbose"));
//! assert_eq!(
//!     options.missing_required(&["level", "output"]).collect::<Vec<_>>(),
//!     vec!["output"]
//! );
//! ```

pub mod cli;
pub mod error;
pub mod log;
pub mod options;
pub mod system;

use anyhow::Result;
use crate::cli::{Args, dump, execute};
use crate::log::{Level, Logger};
use crate::options::OptionMap;

/// Main entry point for the demo program
///
/// Validates the required options and reports them through `logger`. A
/// missing required option is logged as an error before it is returned.
pub fn run(options: &OptionMap, logger: &Logger<'_>) -> Result<()> {
    let args = Args::from_options(options).inspect_err(|err| logger.log_error(Level::Error, err))?;
    execute(&args, logger);
    Ok(())
}

/// Run the dump command
pub fn run_dump(options: &OptionMap) -> Result<()> {
    dump(options)
}
