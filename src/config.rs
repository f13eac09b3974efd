//! The immutable option store.
//!
//! A [`Config`] keeps every option under its full dotted path and, for each
//! ancestor of a stored path, an object aggregating that ancestor's children.
//! After `core.prefix.function = "jaxon_"` is written the store holds:
//!
//! ```text
//! core                  {"prefix": {"function": "jaxon_"}}
//! core.prefix           {"function": "jaxon_"}
//! core.prefix.function  "jaxon_"
//! ```
//!
//! Whole subtrees and single leaves are both one lookup away. `Config` has no
//! mutators; [`ConfigSetter`](crate::ConfigSetter) returns new instances.

use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Options;
use crate::error::ConfigError;
use crate::path::{self, contains_options};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Config {
    values: Options,
    #[serde(skip)]
    changed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// An empty store. A fresh store counts as changed.
    pub fn new() -> Self {
        Self::from_parts(Options::new(), true)
    }

    pub(crate) fn from_parts(values: Options, changed: bool) -> Self {
        Self { values, changed }
    }

    /// The flat path-to-value mapping.
    pub fn values(&self) -> &Options {
        &self.values
    }

    pub fn into_values(self) -> Options {
        self.values
    }

    /// `false` when the write that produced this store was a no-op because its
    /// path did not resolve.
    pub fn changed(&self) -> bool {
        self.changed
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Stored `(path, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    /// Look up the value stored at a dotted path.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(&path::normalize(name))
    }

    /// The value stored at `name`, or `default` when the path is absent.
    pub fn get_or(&self, name: &str, default: Value) -> Value {
        self.get(name).cloned().unwrap_or(default)
    }

    /// Deserialize the value stored at `name` into `T`.
    ///
    /// Returns `Ok(None)` when the path is absent.
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, ConfigError> {
        let Some(value) = self.get(name) else {
            return Ok(None);
        };
        T::deserialize(value)
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                key: path::normalize(name),
                reason: e.to_string(),
            })
    }

    pub fn has(&self, name: &str) -> bool {
        self.values.contains_key(&path::normalize(name))
    }

    /// The option names one level under `prefix`, as `short name → full name`.
    ///
    /// ```ignore
    /// // jaxon.core.language, jaxon.core.prefix.function, jaxon.core.prefix.class
    /// config.option_names("jaxon.core");
    /// // {"language": "jaxon.core.language", "prefix": "jaxon.core.prefix"}
    /// ```
    ///
    /// Terminal values have no children, so a list stored at `prefix` yields
    /// an empty map. An empty prefix lists the top-level names instead of
    /// looking up an empty path, which is never stored.
    pub fn option_names(&self, prefix: &str) -> BTreeMap<String, String> {
        let prefix = path::normalize(prefix);
        if prefix.is_empty() {
            return self
                .values
                .keys()
                .filter(|key| !key.contains('.'))
                .map(|key| (key.clone(), key.clone()))
                .collect();
        }

        match self.values.get(&prefix) {
            Some(value @ Value::Object(children)) if contains_options(value) => children
                .keys()
                .map(|name| (name.clone(), format!("{prefix}.{name}")))
                .collect(),
            _ => BTreeMap::new(),
        }
    }
}
