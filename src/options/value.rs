//! Parsed option values and the map that holds them

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Reserved name under which the positional (main) argument is reported
pub const MAIN_OPTION: &str = "__main__";

/// Value stored for a named option
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionValue {
    /// The token that followed the option
    Str(String),
    /// The option was present without a value
    Switch,
}

impl OptionValue {
    /// The string payload, if this is not a switch
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            Self::Switch => None,
        }
    }

    #[must_use]
    #[inline]
    pub const fn is_switch(&self) -> bool {
        matches!(self, Self::Switch)
    }
}

impl Serialize for OptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Str(value) => serializer.serialize_str(value),
            Self::Switch => serializer.serialize_bool(true),
        }
    }
}

/// Normalize an option name to its stored form
///
/// Leading dashes are stripped and the remainder is lower-cased, so `-Name`,
/// `--name` and `name` all refer to the same key.
#[must_use]
#[inline]
pub fn normalize_key(name: &str) -> String {
    name.trim_start_matches('-').to_lowercase()
}

/// Options parsed from one argument vector
///
/// Built once by [`crate::options::Parser`] and read through the accessor
/// methods. Keys are kept sorted so debug and JSON output are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptionMap {
    #[serde(rename = "__main__", skip_serializing_if = "Option::is_none")]
    main: Option<OptionValue>,
    #[serde(flatten)]
    options: BTreeMap<String, OptionValue>,
}

impl OptionMap {
    /// Create an empty option map
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under an already-normalized key, returning the value it replaced
    pub(crate) fn insert(&mut self, key: String, value: OptionValue) -> Option<OptionValue> {
        self.options.insert(key, value)
    }

    pub(crate) fn set_main(&mut self, value: String) {
        self.main = Some(OptionValue::Str(value));
    }

    /// Raw lookup by (un-normalized) name
    ///
    /// [`MAIN_OPTION`] resolves to the positional argument.
    #[must_use]
    #[inline]
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        let key = normalize_key(name);
        if key == MAIN_OPTION {
            return self.main.as_ref();
        }
        self.options.get(&key)
    }

    /// The positional argument, if one was captured
    #[must_use]
    #[inline]
    pub fn get_main(&self) -> Option<&str> {
        self.main.as_ref().and_then(OptionValue::as_str)
    }

    /// Number of named options (the main value is not counted)
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// True when neither a named option nor a main value was parsed
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty() && self.main.is_none()
    }

    /// Iterate named options in key order
    #[inline]
    pub fn iter(&self) -> btree_map::Iter<'_, String, OptionValue> {
        self.options.iter()
    }
}

impl<'map> IntoIterator for &'map OptionMap {
    type Item = (&'map String, &'map OptionValue);
    type IntoIter = btree_map::Iter<'map, String, OptionValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
