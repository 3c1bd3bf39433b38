use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "cuedoc.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory (or single file) searched for schema files
    pub input_path: PathBuf,
    /// Directory the generated pages are written under
    pub output_path: PathBuf,
    /// Page template the fragments are embedded into
    pub template_path: PathBuf,
    /// Regex matched against file names during discovery
    pub pattern: String,
    /// Suffix of the `language-*` class on code containers
    pub code_language: String,
    /// HTML-escape code lines
    pub escape_code: bool,
    /// Process files concurrently
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("."),
            output_path: PathBuf::from("dist"),
            template_path: PathBuf::from("templates/index.html"),
            pattern: r".*\.cue$".to_string(),
            code_language: "go".to_string(),
            escape_code: false,
            parallel: true,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        config.input_path = Self::expand_path(&config.input_path).unwrap_or(config.input_path);
        config.output_path = Self::expand_path(&config.output_path).unwrap_or(config.output_path);
        config.template_path =
            Self::expand_path(&config.template_path).unwrap_or(config.template_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Load the config file if present, falling back to defaults
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load()?.unwrap_or_default())
    }

    pub fn config_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE_NAME)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    fn write_config(content: &str) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_file, content).unwrap();
        (temp_dir, config_file)
    }

    #[test]
    fn test_config_path() {
        assert_eq!(Config::config_path(), PathBuf::from("cuedoc.toml"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.input_path, PathBuf::from("."));
        assert_eq!(config.output_path, PathBuf::from("dist"));
        assert_eq!(config.pattern, r".*\.cue$");
        assert_eq!(config.code_language, "go");
        assert!(!config.escape_code);
        assert!(config.parallel);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let (_dir, config_file) = write_config(
            r#"
output_path = "site"
parallel = false
"#,
        );

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(config.output_path, PathBuf::from("site"));
        assert!(!config.parallel);
        assert_eq!(config.input_path, PathBuf::from("."));
        assert_eq!(config.template_path, PathBuf::from("templates/index.html"));
    }

    #[test]
    fn test_full_config() {
        let (_dir, config_file) = write_config(
            r#"
input_path = "schemas"
output_path = "public"
template_path = "page.html"
pattern = '.*\.schema\.cue$'
code_language = "cue"
escape_code = true
parallel = false
"#,
        );

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(
            config,
            Config {
                input_path: PathBuf::from("schemas"),
                output_path: PathBuf::from("public"),
                template_path: PathBuf::from("page.html"),
                pattern: r".*\.schema\.cue$".to_string(),
                code_language: "cue".to_string(),
                escape_code: true,
                parallel: false,
            }
        );
    }

    #[test]
    fn test_invalid_config_is_parse_error() {
        let (_dir, config_file) = write_config("parallel = \"sometimes\"");

        let result = Config::load_from_path(&config_file);

        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            output_path: PathBuf::from("/tmp/docs"),
            ..Config::default()
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_config_with_env_var_in_toml() {
        unsafe {
            env::set_var("CUEDOC_TEST_SCHEMAS", "/custom/schemas");
        }

        let (_dir, config_file) = write_config(
            r#"
input_path = "$CUEDOC_TEST_SCHEMAS/api"
"#,
        );
        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(config.input_path, PathBuf::from("/custom/schemas/api"));

        unsafe {
            env::remove_var("CUEDOC_TEST_SCHEMAS");
        }
    }

    #[test]
    fn test_expand_path_with_relative_path() {
        let path = PathBuf::from("relative/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }
}
