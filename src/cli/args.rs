use crate::error::KitError;
use crate::options::{OptionMap, Parser, normalize_key};

/// First required option of the demo program
pub const REQUIRED_PARAM_1: &str = "RequiredParam1";
/// Second required option of the demo program
pub const REQUIRED_PARAM_2: &str = "RequiredParam2";
/// Optional string option, reported when [`SWITCH`] is set
pub const OPTIONAL_PARAM: &str = "OptionalParam";
/// Optional switch
pub const SWITCH: &str = "Switch";

pub const REQUIRED_OPTIONS: [&str; 2] = [REQUIRED_PARAM_1, REQUIRED_PARAM_2];

/// Print the parsed options as JSON instead of running
pub const DUMP_OPTION: &str = "dump";
/// Parse without positional support or trimming
pub const STRICT_OPTION: &str = "strict";
/// Enable debug diagnostics
pub const VERBOSE_OPTION: &str = "verbose";

/// Options of the demo program, validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub main: Option<String>,
    pub required_param1: String,
    pub required_param2: String,
    pub optional_param: Option<String>,
    pub switch: bool,
}

impl Args {
    /// Extract the demo program's options
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `RequiredParam1` or `RequiredParam2` is missing
    pub fn from_options(options: &OptionMap) -> Result<Self, KitError> {
        options.check_required(&REQUIRED_OPTIONS)?;

        Ok(Self {
            main: options.get_main().map(str::to_owned),
            required_param1: options.get_string_or(REQUIRED_PARAM_1, "").to_owned(),
            required_param2: options.get_string_or(REQUIRED_PARAM_2, "").to_owned(),
            optional_param: options.get_string(OPTIONAL_PARAM).map(str::to_owned),
            switch: options.get_switch(SWITCH),
        })
    }
}

/// Parse the process arguments, honoring `-strict`
///
/// The strict switch is looked for in the raw tokens before anything is
/// parsed, so strict mode applies its own rules to every argument.
///
/// # Errors
///
/// Returns an error if:
/// - Any argument is empty (or only whitespace without `-strict`)
pub fn parse_command_line<S: AsRef<str>>(raw: &[S]) -> Result<OptionMap, KitError> {
    let strict = raw.iter().any(|arg| {
        let token = arg.as_ref().trim();
        token.starts_with('-') && normalize_key(token) == STRICT_OPTION
    });

    if strict {
        Parser::strict().parse(raw)
    } else {
        Parser::new().parse(raw)
    }
}
