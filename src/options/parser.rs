//! Argument vector to option map conversion

use crate::error::KitError;
use crate::options::value::{MAIN_OPTION, OptionMap, OptionValue, normalize_key};
use tracing::{debug, trace};

/// Which parsing rules to apply to an argument vector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParseMode {
    /// Trim every token and capture the first bare token as the main value
    #[default]
    Positional,
    /// Take tokens as given and ignore bare tokens that are not option values
    Strict,
}

/// Single-pass parser for `-name value` style arguments
///
/// A token starting with `-` names an option. If the next token does not also
/// start with `-` it becomes the option's value, otherwise the option is a
/// switch. Parsing allocates a fresh [`OptionMap`] per call and keeps no state
/// between calls.
///
/// # Example
/// ```
/// use consolekit::options::Parser;
///
/// let options = Parser::new().parse(["build", "-Target", "release", "-v"]).unwrap();
///
/// assert_eq!(options.get_main(), Some("build"));
/// assert_eq!(options.get_string("target"), Some("release"));
/// assert!(options.get_switch("V"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parser {
    mode: ParseMode,
}

impl Parser {
    /// Create a parser with positional support and whitespace trimming
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self {
            mode: ParseMode::Positional,
        }
    }

    /// Create a parser without positional support or trimming
    #[must_use]
    #[inline]
    pub const fn strict() -> Self {
        Self {
            mode: ParseMode::Strict,
        }
    }

    #[must_use]
    #[inline]
    pub const fn with_mode(mode: ParseMode) -> Self {
        Self { mode }
    }

    #[must_use]
    #[inline]
    pub const fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Parse an argument vector into an option map
    ///
    /// Option names are stored lower-cased with leading dashes stripped. When
    /// an option appears more than once the last value wins.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any token is empty (or only whitespace in positional mode); nothing
    ///   is parsed in that case
    pub fn parse<I, S>(&self, args: I) -> Result<OptionMap, KitError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let tokens = self.tokens(&args)?;

        let mut options = OptionMap::new();
        let mut index = 0;

        while let Some(&token) = tokens.get(index) {
            if !is_option(token) {
                if self.mode == ParseMode::Positional && options.get_main().is_none() {
                    trace!("Main argument: {token}");
                    options.set_main(token.to_lowercase());
                } else {
                    debug!("Ignoring argument #{}: {token}", index + 1);
                }
                index += 1;
                continue;
            }

            let key = normalize_key(token);
            // Only the current token is trimmed; the next one is inspected as given
            let next = args.get(index + 1).map(|next| -> &str { next.as_ref() });
            let (value, consumed) = match next {
                Some(next) if !is_option(next) => (OptionValue::Str(next.to_owned()), 2),
                _ => (OptionValue::Switch, 1),
            };

            if key == MAIN_OPTION {
                debug!("Option {token} is shadowed by the main argument and cannot be read back");
            }
            trace!("Option '{key}': {value:?}");
            if let Some(previous) = options.insert(key, value) {
                debug!("Option {token} given more than once, replacing {previous:?}");
            }
            index += consumed;
        }

        Ok(options)
    }

    /// Validate every token up front and apply the mode's normalization
    fn tokens<'args, S: AsRef<str>>(&self, args: &'args [S]) -> Result<Vec<&'args str>, KitError> {
        args.iter()
            .enumerate()
            .map(|(index, arg)| {
                let raw: &str = arg.as_ref();
                let token = match self.mode {
                    ParseMode::Positional => raw.trim(),
                    ParseMode::Strict => raw,
                };

                if token.is_empty() {
                    let reason = if raw.is_empty() {
                        "argument is empty"
                    } else {
                        "argument contains only whitespace"
                    };
                    return Err(KitError::invalid_argument(index, reason));
                }

                Ok(token)
            })
            .collect()
    }
}

/// Parse with the default (positional) rules
///
/// # Errors
///
/// See [`Parser::parse`].
#[inline]
pub fn parse<I, S>(args: I) -> Result<OptionMap, KitError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Parser::new().parse(args)
}

fn is_option(token: &str) -> bool {
    token.starts_with('-')
}
