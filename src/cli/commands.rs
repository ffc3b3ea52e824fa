//! CLI command implementations

use crate::cli::Args;
use crate::log::Logger;
use crate::options::OptionMap;
use anyhow::Result;

/// Report the demo program's options through the logger
///
/// The main argument is logged as an error, the two required values as info
/// and warning. With the switch set, the optional value is logged as critical.
pub fn execute(args: &Args, logger: &Logger<'_>) {
    if let Some(main) = args.main.as_deref().filter(|main| !main.is_empty()) {
        logger.error(main);
    }

    logger.info(&args.required_param1);
    logger.warn(&args.required_param2);

    if args.switch {
        match args.optional_param.as_deref().filter(|value| !value.is_empty()) {
            Some(value) => logger.critical(value),
            None => logger.info("No optional value supplied!"),
        }
    }
}

/// Print the parsed options as pretty JSON on stdout
pub fn dump(options: &OptionMap) -> Result<()> {
    let json = serde_json::to_string_pretty(options)?;
    println!("{json}");
    Ok(())
}
