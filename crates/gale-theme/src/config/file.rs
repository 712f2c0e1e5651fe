//! Reading and writing configuration files.
//!
//! A configuration file is YAML or JSON in the same shape that
//! [`ThemeConfig`] serializes to. The format is picked from the extension:
//!
//! | Extension | Format |
//! |-----------|--------|
//! | `.yaml`, `.yml` | YAML |
//! | `.json` | JSON |
//!
//! # Discovery
//!
//! [`find_config_file`] looks for one of [`CONFIG_FILENAMES`] in the start
//! directory, then in each parent directory in turn. Within one directory the
//! first name in the list wins, so `gale-theme.yaml` shadows `gale-theme.json`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use super::theme_config::ThemeConfig;
use crate::error::ConfigError;

/// Well-known configuration file names, in priority order.
pub const CONFIG_FILENAMES: &[&str] = &["gale-theme.yaml", "gale-theme.yml", "gale-theme.json"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
}

impl Format {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Some(Format::Yaml),
            Some("json") => Some(Format::Json),
            _ => None,
        }
    }
}

impl ThemeConfig {
    /// Parses a configuration from YAML content.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::parse(None, e))
    }

    /// Parses a configuration from JSON content.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::parse(None, e))
    }

    /// Loads a configuration file, choosing the parser from its extension.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::UnsupportedFormat`] for an unknown extension
    /// - [`ConfigError::Io`] if the file cannot be read
    /// - [`ConfigError::Parse`] if the content does not match the config shape
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = Format::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed: Result<Self, String> = match format {
            Format::Yaml => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
            Format::Json => serde_json::from_str(&content).map_err(|e| e.to_string()),
        };
        let config = parsed.map_err(|e| ConfigError::parse(Some(path), e))?;

        debug!(
            ?format,
            content_patterns = config.content_patterns().len(),
            plugins = config.plugins().len(),
            "loaded theme config"
        );
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

/// Finds the nearest configuration file, starting at `start_dir`.
#[instrument(skip_all, fields(start = %start_dir.as_ref().display()))]
pub fn find_config_file(start_dir: impl AsRef<Path>) -> Option<PathBuf> {
    let found = find_in_dirs(start_dir.as_ref().ancestors());

    match &found {
        Some(path) => debug!(path = %path.display(), "found theme config"),
        None => debug!("no theme config found"),
    }
    found
}

/// Returns the first config file in `dirs`, checking names in priority order
/// within each directory.
fn find_in_dirs<'a>(dirs: impl IntoIterator<Item = &'a Path>) -> Option<PathBuf> {
    dirs.into_iter().find_map(|dir| {
        CONFIG_FILENAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

/// Finds and loads the nearest configuration file.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] if no file exists in `start_dir` or any
/// of its ancestors, otherwise any error from [`ThemeConfig::from_file`].
pub fn discover(start_dir: impl AsRef<Path>) -> Result<ThemeConfig, ConfigError> {
    let start_dir = start_dir.as_ref();
    let path = find_config_file(start_dir).ok_or_else(|| ConfigError::NotFound {
        start: start_dir.to_path_buf(),
    })?;
    ThemeConfig::from_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            Format::from_path(Path::new("a/gale-theme.yaml")),
            Some(Format::Yaml)
        );
        assert_eq!(
            Format::from_path(Path::new("gale-theme.yml")),
            Some(Format::Yaml)
        );
        assert_eq!(
            Format::from_path(Path::new("gale-theme.json")),
            Some(Format::Json)
        );
        assert_eq!(Format::from_path(Path::new("tailwind.config.js")), None);
        assert_eq!(Format::from_path(Path::new("gale-theme")), None);
    }

    #[test]
    fn test_from_yaml_minimal() {
        let config = ThemeConfig::from_yaml("content: ['./templates/**/*.html']").unwrap();

        assert_eq!(config.content_patterns(), &["./templates/**/*.html"]);
        assert!(config.theme_extensions().is_empty());
        assert!(config.theme_overrides().is_empty());
        assert!(config.plugins().is_empty());
    }

    #[test]
    fn test_from_yaml_theme_sections() {
        let config = ThemeConfig::from_yaml(
            r##"
            content:
              - ./templates/**/*.html
            theme:
              spacing:
                "4": 1rem
              extend:
                colors:
                  main: "#353a65"
            "##,
        )
        .unwrap();

        assert_eq!(config.theme_overrides().get("spacing", "4"), Some("1rem"));
        assert_eq!(
            config.theme_extensions().get("colors", "main"),
            Some("#353a65")
        );
        assert!(config.theme_overrides().category("extend").is_none());
    }

    #[test]
    fn test_from_yaml_unquoted_scalars_in_both_theme_positions() {
        let config = ThemeConfig::from_yaml(
            r#"
            content: ["./templates/**/*.html"]
            theme:
              spacing:
                4: 1rem
              fontWeight:
                bold: 700
              extend:
                spacing:
                  8: 2rem
                fontWeight:
                  black: 900
            "#,
        )
        .unwrap();

        let overrides = config.theme_overrides();
        assert_eq!(overrides.get("spacing", "4"), Some("1rem"));
        assert_eq!(overrides.get("fontWeight", "bold"), Some("700"));

        let extend = config.theme_extensions();
        assert_eq!(extend.get("spacing", "8"), Some("2rem"));
        assert_eq!(extend.get("fontWeight", "black"), Some("900"));
    }

    #[test]
    fn test_from_json_numeric_values_in_both_theme_positions() {
        let config = ThemeConfig::from_json(
            r#"{
                "content": ["./templates/**/*.html"],
                "theme": {
                    "fontWeight": { "bold": 700 },
                    "extend": { "opacity": { "50": 0.5 } }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            config.theme_overrides().get("fontWeight", "bold"),
            Some("700")
        );
        assert_eq!(config.theme_extensions().get("opacity", "50"), Some("0.5"));
    }

    #[test]
    fn test_from_yaml_requires_content() {
        let result = ThemeConfig::from_yaml("plugins: []");
        assert!(matches!(result, Err(ConfigError::Parse { path: None, .. })));
    }

    #[test]
    fn test_from_yaml_rejects_unknown_keys() {
        let result = ThemeConfig::from_yaml("content: []\ndarkMode: class");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_from_json() {
        let config = ThemeConfig::from_json(
            r##"{
                "content": ["./templates/**/*.html"],
                "theme": { "extend": { "colors": { "widget": "#3c416e" } } },
                "plugins": []
            }"##,
        )
        .unwrap();

        assert_eq!(
            config.theme_extensions().get("colors", "widget"),
            Some("#3c416e")
        );
    }

    #[test]
    fn test_from_json_null_plugins_rejected() {
        let result = ThemeConfig::from_json(r#"{ "content": [], "plugins": null }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_unsupported_extension() {
        let result = ThemeConfig::from_file("ui/tailwind.config.js");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat { .. })));
    }

    #[test]
    fn test_from_file_not_found() {
        let result = ThemeConfig::from_file("/nonexistent/path/gale-theme.yaml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_find_in_dirs_none_within_root() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let nested = temp_dir.path().join("ui").join("templates");
        fs::create_dir_all(&nested).unwrap();

        let within_root = nested
            .ancestors()
            .take_while(|dir| dir.starts_with(temp_dir.path()));
        assert_eq!(find_in_dirs(within_root), None);
    }

    #[test]
    fn test_find_in_dirs_stops_at_root() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let root = temp_dir.path().join("project");
        let nested = root.join("ui");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join("gale-theme.yaml"), "content: []").unwrap();

        let within_root = nested.ancestors().take_while(|dir| dir.starts_with(&root));
        assert_eq!(find_in_dirs(within_root), None);

        let within_temp = nested
            .ancestors()
            .take_while(|dir| dir.starts_with(temp_dir.path()));
        assert_eq!(
            find_in_dirs(within_temp),
            Some(temp_dir.path().join("gale-theme.yaml"))
        );
    }
}
