//! The theme configuration record and how to obtain one.
//!
//! There are three ways to get a [`ThemeConfig`]:
//!
//! - [`load`]: the built-in configuration for the gale developer UI
//! - [`ThemeConfig::builder`]: programmatic construction
//! - [`discover`] / [`ThemeConfig::from_file`]: a YAML or JSON file on disk

mod builder;
mod file;
mod theme_config;

pub use builder::ThemeConfigBuilder;
pub use file::{discover, find_config_file, CONFIG_FILENAMES};
pub use theme_config::ThemeConfig;

/// Templates scanned for utility class names.
pub const TEMPLATES_PATTERN: &str = "./templates/**/*.html";

/// Returns the gale developer UI theme configuration.
///
/// Scans the UI templates and adds the `main` and `widget` colors on top of
/// the generator's default palette. No plugins are registered.
pub fn load() -> ThemeConfig {
    ThemeConfig::builder()
        .content(TEMPLATES_PATTERN)
        .extend("colors", "main", "#353a65")
        .extend("colors", "widget", "#3c416e")
        .build()
}
