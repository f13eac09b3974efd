//! Writes into immutable [`Config`] stores.
//!
//! Every operation takes the current store by reference and returns a new
//! one. Merges run on a private copy of the values, so a failed merge leaves
//! nothing behind.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::Options;
use crate::config::Config;
use crate::error::ConfigError;
use crate::path::{self, contains_options, explode_name};

/// Deepest level [`ConfigSetter::set_options`] descends to by default. The
/// root of the options tree is level 0, so ten nested levels are accepted.
pub const DEFAULT_MAX_DEPTH: usize = 9;

/// Builds new [`Config`] values from raw option trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSetter {
    max_depth: usize,
}

impl Default for ConfigSetter {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ConfigSetter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the deepest nesting level accepted by
    /// [`set_options`](Self::set_options) (default: [`DEFAULT_MAX_DEPTH`]).
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Create a store from a raw options tree.
    ///
    /// See [`set_options`](Self::set_options) for the meaning of the prefixes.
    pub fn new_config(
        &self,
        options: &Options,
        name_prefix: &str,
        value_prefix: &str,
    ) -> Result<Config, ConfigError> {
        if options.is_empty() {
            return Ok(Config::new());
        }
        self.set_options(&Config::new(), options, name_prefix, value_prefix)
    }

    /// Set a single option, back-filling the aggregates of all its ancestors.
    ///
    /// `value` is stored as is, even when it is itself an object. An empty
    /// name yields the unchanged store with `changed() == false`.
    pub fn set_option(&self, config: &Config, name: &str, value: impl Into<Value>) -> Config {
        let mut values = config.values().clone();
        if !set_value(&mut values, name, value.into()) {
            debug!(name, "Empty option name, config left unchanged");
            return Config::from_parts(values, false);
        }
        Config::from_parts(values, true)
    }

    /// Merge a raw options tree into a store.
    ///
    /// - `value_prefix` selects a subtree of `options` first (`"jaxon"` merges
    ///   `options["jaxon"]`). If a segment is missing or not an object, the
    ///   original values come back with `changed() == false`.
    /// - `name_prefix` is prepended to every stored path.
    ///
    /// Nested objects that [contain options](path::contains_options) are
    /// walked; every other value is stored whole under its path. Descending
    /// past the configured max depth fails with [`ConfigError::DataDepth`].
    pub fn set_options(
        &self,
        config: &Config,
        options: &Options,
        name_prefix: &str,
        value_prefix: &str,
    ) -> Result<Config, ConfigError> {
        let Some(options) = locate(options, value_prefix) else {
            debug!(value_prefix, "Options section not found");
            return Ok(Config::from_parts(config.values().clone(), false));
        };

        let mut name_prefix = path::normalize(name_prefix);
        if !name_prefix.is_empty() {
            name_prefix.push('.');
        }

        let mut values = config.values().clone();
        self.set_values(&mut values, options, &name_prefix, 0)?;
        Ok(Config::from_parts(values, true))
    }

    /// Convert any serializable map (a `toml::Table`, a `HashMap`, a struct)
    /// into a raw options tree.
    pub fn options_from<S: Serialize + ?Sized>(source: &S) -> Result<Options, ConfigError> {
        match serde_json::to_value(source) {
            Ok(Value::Object(options)) => Ok(options),
            Ok(other) => Err(ConfigError::InvalidOptions(format!(
                "expected a mapping, got {}",
                kind(&other)
            ))),
            Err(e) => Err(ConfigError::InvalidOptions(e.to_string())),
        }
    }

    fn set_values(
        &self,
        values: &mut Options,
        options: &Options,
        name_prefix: &str,
        depth: usize,
    ) -> Result<(), ConfigError> {
        if depth > self.max_depth {
            debug!(name_prefix, depth, "Options nested too deep");
            return Err(ConfigError::DataDepth {
                prefix: name_prefix.to_string(),
                depth,
            });
        }

        for (name, value) in options {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            if let Value::Object(children) = value
                && contains_options(value)
            {
                let next_prefix = format!("{name_prefix}{name}.");
                self.set_values(values, children, &next_prefix, depth + 1)?;
                continue;
            }
            set_value(values, &format!("{name_prefix}{name}"), value.clone());
        }
        Ok(())
    }
}

/// Walk `options` down the segments of `value_prefix`.
fn locate<'a>(mut options: &'a Options, value_prefix: &str) -> Option<&'a Options> {
    for key in explode_name(value_prefix) {
        options = options.get(key)?.as_object()?;
    }
    Some(options)
}

/// Store `value` at `name` and merge it into every ancestor's aggregate.
///
/// An ancestor that does not hold options is replaced by a single-entry
/// object. Returns `false`, leaving `values` untouched, for an empty name.
fn set_value(values: &mut Options, name: &str, value: Value) -> bool {
    let mut names = explode_name(name);
    if names.is_empty() {
        return false;
    }
    let full_name = names.join(".");
    trace!(name = %full_name, "Setting option");

    let mut child = value.clone();
    while let Some(leaf) = names.pop() {
        if names.is_empty() {
            break;
        }
        let parent = names.join(".");
        let mut siblings = match values.get(&parent) {
            Some(current @ Value::Object(map)) if contains_options(current) => map.clone(),
            _ => Options::new(),
        };
        siblings.insert(leaf.to_string(), child);
        child = Value::Object(siblings);
        values.insert(parent, child.clone());
    }

    values.insert(full_name, value);
    true
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
