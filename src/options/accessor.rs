//! Typed lookups over a parsed option map
//!
//! None of these lookups fail on a missing option or on a value of the wrong
//! kind. A switch asked for as a string reads as absent.

use crate::error::KitError;
use crate::options::value::OptionMap;
use std::fmt::Display;
use std::str::FromStr;

impl OptionMap {
    /// Check whether an option was supplied
    #[must_use]
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get the string value of an option
    ///
    /// Returns `None` when the option is missing or was given as a switch.
    #[must_use]
    #[inline]
    pub fn get_string(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|value| value.as_str())
    }

    /// Get the string value of an option, or `default` when it is missing or empty
    #[must_use]
    #[inline]
    pub fn get_string_or<'map>(&'map self, name: &str, default: &'map str) -> &'map str {
        match self.get_string(name) {
            Some(value) if !value.is_empty() => value,
            _ => default,
        }
    }

    /// True when the option is present, whatever kind of value it holds
    #[must_use]
    #[inline]
    pub fn get_switch(&self, name: &str) -> bool {
        self.contains(name)
    }

    /// Parse the string value of an option into `T`
    ///
    /// Missing options and switches give `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The option has a value that `T` cannot be parsed from
    pub fn get_parsed<T>(&self, name: &str) -> Result<Option<T>, KitError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let Some(value) = self.get_string(name) else {
            return Ok(None);
        };

        value
            .parse::<T>()
            .map(Some)
            .map_err(|err| KitError::invalid_value(name, value, err.to_string()))
    }

    /// Required option names that were not supplied, in the order given
    ///
    /// The iterator is lazy and borrows both the map and `required`.
    pub fn missing_required<'req, S: AsRef<str>>(
        &self,
        required: &'req [S],
    ) -> impl Iterator<Item = &'req str> {
        required
            .iter()
            .map(|name| name.as_ref())
            .filter(move |name| !self.contains(name))
    }

    /// Verify that every required option was supplied
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any required option is missing; the error lists all of them
    pub fn check_required<S: AsRef<str>>(&self, required: &[S]) -> Result<(), KitError> {
        let missing: Vec<&str> = self.missing_required(required).collect();
        if missing.is_empty() {
            return Ok(());
        }
        Err(KitError::missing_required(missing))
    }
}
