#[cfg(test)]
pub mod test {
    use std::path::Path;

    use serde_json::{Value, json};

    use crate::error::ConfigError;
    use crate::reader::OptionsReader;
    use crate::{Config, ConfigSetter, Options};

    /// Unwrap a `json!` object literal into raw options.
    pub fn options(value: Value) -> Options {
        match value {
            Value::Object(options) => options,
            other => panic!("fixture is not an object: {other}"),
        }
    }

    /// A tree `levels` mappings deep, root included:
    /// `{"l1": {"l2": ... {"param": "Value"}}}`.
    pub fn nested(levels: usize) -> Options {
        let mut tree = options(json!({"param": "Value"}));
        for level in (1..levels).rev() {
            let mut parent = Options::new();
            parent.insert(format!("l{level}"), Value::Object(tree));
            tree = parent;
        }
        tree
    }

    pub fn jaxon_options() -> Options {
        options(json!({
            "jaxon": {
                "core": {
                    "language": "en",
                    "prefix": {"function": "jaxon_", "class": "Jaxon"},
                    "debug": {"on": false}
                }
            }
        }))
    }

    pub fn jaxon_config() -> Config {
        ConfigSetter::new()
            .new_config(&jaxon_options(), "", "")
            .unwrap()
    }

    // -- On-disk fixtures ----------------------------------------------------

    pub const CONFIG_JSON: &str = r#"{
        "jaxon": {
            "core": {
                "language": "en",
                "prefix": {"function": "jaxon_", "class": "Jaxon"},
                "debug": {"on": false}
            }
        }
    }"#;

    pub const CONFIG_TOML: &str = r#"
        [jaxon.core]
        language = "en"

        [jaxon.core.prefix]
        function = "jaxon_"
        class = "Jaxon"

        [jaxon.core.debug]
        on = false
    "#;

    pub const ARRAY_TOML: &str = r#"
        [core]
        array = [1, 2, 3, 4]
    "#;

    pub fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn read_file(path: &Path) -> Result<String, ConfigError> {
        std::fs::read_to_string(path).map_err(|e| ConfigError::FileAccess {
            path: path.to_path_buf(),
            source: Some(e),
        })
    }

    fn into_options(path: &Path, value: Value) -> Result<Options, ConfigError> {
        match value {
            Value::Object(options) => Ok(options),
            _ => Err(ConfigError::FileContent {
                path: path.to_path_buf(),
                reason: "content is not a mapping".into(),
            }),
        }
    }

    /// Reads `.json` files with `serde_json`.
    pub struct JsonReader;

    impl OptionsReader for JsonReader {
        fn extensions(&self) -> &[&str] {
            &["json"]
        }

        fn read(&self, path: &Path) -> Result<Options, ConfigError> {
            let content = read_file(path)?;
            let value: Value =
                serde_json::from_str(&content).map_err(|e| ConfigError::FileContent {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?;
            into_options(path, value)
        }
    }

    /// Reads `.toml` files with `toml`.
    pub struct TomlReader;

    impl OptionsReader for TomlReader {
        fn extensions(&self) -> &[&str] {
            &["toml"]
        }

        fn read(&self, path: &Path) -> Result<Options, ConfigError> {
            let content = read_file(path)?;
            let table: toml::Table =
                toml::from_str(&content).map_err(|e| ConfigError::FileContent {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?;
            let value = serde_json::to_value(table).map_err(|e| ConfigError::FileContent {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
            into_options(path, value)
        }
    }

    /// Claims `.yaml`/`.yml` but has no parser behind it.
    pub struct UnavailableYamlReader;

    impl OptionsReader for UnavailableYamlReader {
        fn extensions(&self) -> &[&str] {
            &["yaml", "yml"]
        }

        fn read(&self, _path: &Path) -> Result<Options, ConfigError> {
            Err(ConfigError::MissingSupport {
                format: "YAML".into(),
                reason: "no YAML parser is linked in".into(),
            })
        }
    }

    #[test]
    fn nested_builds_requested_depth() {
        let expected = json!({"l1": {"l2": {"param": "Value"}}});
        assert_eq!(Value::Object(nested(3)), expected);
        assert_eq!(Value::Object(nested(1)), json!({"param": "Value"}));
    }

    #[test]
    fn jaxon_config_loads() {
        let config = jaxon_config();
        assert_eq!(config.get("jaxon.core.prefix.class"), Some(&json!("Jaxon")));
    }
}
