//! Loading option trees from config files.
//!
//! Parsing is left to [`OptionsReader`] implementations, one per file format.
//! A [`ConfigReader`] picks the reader by file extension and merges the
//! requested section of the file into a [`Config`].

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::Options;
use crate::config::Config;
use crate::error::ConfigError;
use crate::setter::ConfigSetter;

/// Parses one config file format into a raw options tree.
///
/// Implementations report [`ConfigError::FileAccess`] for unreadable files,
/// [`ConfigError::FileContent`] when the content does not parse to a mapping,
/// and [`ConfigError::MissingSupport`] when the format cannot be handled at
/// runtime.
pub trait OptionsReader {
    /// Lowercase file extensions handled by this reader, without the dot.
    fn extensions(&self) -> &[&str];

    fn read(&self, path: &Path) -> Result<Options, ConfigError>;
}

/// Dispatches config files to registered [`OptionsReader`]s.
pub struct ConfigReader {
    readers: Vec<Box<dyn OptionsReader + Send + Sync>>,
    setter: ConfigSetter,
}

impl Default for ConfigReader {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConfigReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let extensions: Vec<&str> = self
            .readers
            .iter()
            .flat_map(|reader| reader.extensions().iter().copied())
            .collect();
        f.debug_struct("ConfigReader")
            .field("extensions", &extensions)
            .field("setter", &self.setter)
            .finish()
    }
}

impl ConfigReader {
    /// A reader with no formats registered.
    pub fn new() -> Self {
        Self {
            readers: Vec::new(),
            setter: ConfigSetter::default(),
        }
    }

    /// Register a format reader. When two readers claim the same extension,
    /// the one registered last is used.
    pub fn with_reader<R>(mut self, reader: R) -> Self
    where
        R: OptionsReader + Send + Sync + 'static,
    {
        self.readers.push(Box::new(reader));
        self
    }

    /// Replace the setter used by [`load`](Self::load).
    pub fn with_setter(mut self, setter: ConfigSetter) -> Self {
        self.setter = setter;
        self
    }

    pub fn setter(&self) -> &ConfigSetter {
        &self.setter
    }

    /// Whether a reader is registered for the file's extension.
    pub fn supports(&self, path: impl AsRef<Path>) -> bool {
        self.reader_for(path.as_ref()).is_some()
    }

    /// Read a config file into a raw options tree.
    ///
    /// A blank path yields empty options.
    pub fn read(&self, path: impl AsRef<Path>) -> Result<Options, ConfigError> {
        let path = path.as_ref();
        let path = match path.to_str() {
            Some(s) => Path::new(s.trim()),
            None => path,
        };
        if path.as_os_str().is_empty() {
            return Ok(Options::new());
        }

        let reader = self
            .reader_for(path)
            .ok_or_else(|| ConfigError::FileExtension(path.to_path_buf()))?;
        reader.read(path)
    }

    /// Read a config file and merge its `section` (a dotted path inside the
    /// file, empty for the whole file) into `config`.
    ///
    /// A section missing from the file is not an error: the returned config
    /// reports `changed() == false`.
    pub fn load(
        &self,
        config: &Config,
        path: impl AsRef<Path>,
        section: &str,
    ) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), section, "Loading config file");
        let options = self.read(path)?;
        self.setter.set_options(config, &options, "", section)
    }

    fn reader_for(&self, path: &Path) -> Option<&(dyn OptionsReader + Send + Sync)> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        self.readers
            .iter()
            .rev()
            .find(|reader| reader.extensions().contains(&extension.as_str()))
            .map(|reader| reader.as_ref())
    }
}
