//! Immutable, dotted-key hierarchical configuration.
//!
//! Options live in a [`Config`] under dotted paths such as
//! `core.prefix.function`. Writes go through a [`ConfigSetter`], which never
//! touches the store it is given and returns a new one instead.
//!
//! ```ignore
//! let setter = ConfigSetter::new();
//! let config = setter.new_config(&options, "", "jaxon")?;
//! let config = setter.set_option(&config, "core.prefix.function", "jaxon_");
//!
//! assert_eq!(config.get("core.prefix.function"), Some(&json!("jaxon_")));
//! ```
//!
//! # Flat paths with parent aggregates
//!
//! The store is a flat mapping from path to value. Alongside every leaf it
//! keeps one entry per ancestor holding an object of that ancestor's children,
//! so both of these are single lookups:
//!
//! | Lookup | Result |
//! |--------|--------|
//! | `get("core.prefix.function")` | `"jaxon_"` |
//! | `get("core.prefix")` | `{"function": "jaxon_"}` |
//!
//! [`Config::option_names`] reads the aggregate at a prefix to list the names
//! one level below it.
//!
//! # Options subtrees and terminal values
//!
//! Raw options are nested `serde_json` objects. While merging, a nested
//! object is walked as further options only if it is non-empty and none of
//! its keys is an integer (see [`path::contains_options`]). Everything else
//! is a terminal and is stored whole: `core.array = [1, 2, 3, 4]` stays one
//! value, and no `core.array.0` path appears.
//!
//! # Prefixes
//!
//! [`ConfigSetter::set_options`] takes two dotted prefixes:
//!
//! - **value prefix** selects a section of the raw tree before merging. A
//!   section that is missing, or is not an object, is not an error: the
//!   original values come back and [`Config::changed`] reports `false`. This
//!   lets callers probe optional sections.
//! - **name prefix** is prepended to every path written.
//!
//! # Depth limit
//!
//! Merging descends at most [`DEFAULT_MAX_DEPTH`] levels below the root of
//! the tree (configurable with [`ConfigSetter::max_depth`]). Going deeper
//! fails the whole merge with [`ConfigError::DataDepth`]; the input store is
//! never modified, so no partial merge can leak.
//!
//! # Config files
//!
//! This crate does not parse files itself. Implement [`OptionsReader`] for a
//! format, register it on a [`ConfigReader`], and
//! [`load`](ConfigReader::load) a section of a file into a store. Readers
//! are chosen by file extension.
//!
//! # Error handling
//!
//! All fallible operations return [`ConfigError`]. See the [`error`] module.

pub mod error;
pub mod path;

mod config;
mod reader;
mod setter;

#[cfg(test)]
mod fixtures;

pub use config::Config;
pub use error::ConfigError;
pub use reader::{ConfigReader, OptionsReader};
pub use setter::{ConfigSetter, DEFAULT_MAX_DEPTH};

/// A raw options tree, and the flat store inside a [`Config`].
pub type Options = serde_json::Map<String, serde_json::Value>;
