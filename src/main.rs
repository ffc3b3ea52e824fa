//! # `ConsoleKit`
//!
//! Demo program for the `consolekit` library: parses its own arguments into an
//! option map, checks the required ones, and logs what it found.
//!
//! ## Usage
//!
//! ```sh
//! consolekit target -RequiredParam1 one -RequiredParam2 two -Switch -OptionalParam extra
//! ```
//!
//! Sink options: `-logdir <dir>`, `-noconsole`, `-nologfile`, `-nocolor`.
//! Other switches: `-dump` prints the parsed options as JSON, `-strict` turns
//! off positional arguments, `-verbose` enables debug diagnostics.

use anyhow::Result;
use consolekit::cli::{DUMP_OPTION, VERBOSE_OPTION, parse_command_line};
use consolekit::error::KitError;
use consolekit::log::{LogConfig, Logger};
use consolekit::system::RealSystem;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let raw: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let parsed = parse_command_line(&raw);

    // Initialize tracing subscriber based on verbose flag
    let log_level = if parsed
        .as_ref()
        .is_ok_and(|options| options.get_switch(VERBOSE_OPTION))
    {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_target(false).with_env_filter(filter).init();

    let options = match parsed {
        Ok(options) => options,
        Err(err) => {
            error!("{}", err);
            std::process::exit(err.exit_code());
        }
    };

    // Handle dump mode
    if options.get_switch(DUMP_OPTION) {
        match consolekit::run_dump(&options) {
            Ok(()) => std::process::exit(0),
            Err(err) => {
                error!("{}", err);
                std::process::exit(1);
            }
        }
    }

    // Normal execution mode
    let system = RealSystem::new();
    let config = LogConfig::for_system(&system).with_options(&options);
    let logger = Logger::new(config, &system);

    match consolekit::run(&options, &logger) {
        Ok(()) => std::process::exit(0),
        Err(err) => std::process::exit(
            err.downcast_ref::<KitError>()
                .map_or(1, KitError::exit_code),
        ),
    }
}
