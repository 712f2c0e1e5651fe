//! The configuration record handed to the stylesheet generator.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::builder::ThemeConfigBuilder;
use crate::error::ConfigError;
use crate::plugin::PluginDescriptor;
use crate::theme::ThemeTokens;

/// Which templates to scan, how to layer the theme, and which plugins to run.
///
/// The record is immutable once built: construct it with [`crate::load`],
/// [`ThemeConfig::builder`] or one of the file loaders, then read it through
/// the accessors.
///
/// Serialized, it keeps the familiar generator config shape:
///
/// ```yaml
/// content:
///   - ./templates/**/*.html
/// theme:
///   extend:
///     colors:
///       main: "#353a65"
/// plugins: []
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    #[serde(rename = "content")]
    content_patterns: Vec<String>,
    #[serde(default)]
    theme: ThemeSection,
    #[serde(default)]
    plugins: Vec<PluginDescriptor>,
}

/// The `theme` table: `extend` merges, every other key replaces a category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct ThemeSection {
    #[serde(default, skip_serializing_if = "ThemeTokens::is_empty")]
    extend: ThemeTokens,
    #[serde(flatten)]
    overrides: ThemeTokens,
}

impl ThemeConfig {
    /// Starts an empty builder.
    pub fn builder() -> ThemeConfigBuilder {
        ThemeConfigBuilder::new()
    }

    pub(crate) fn from_parts(
        content_patterns: Vec<String>,
        extend: ThemeTokens,
        overrides: ThemeTokens,
        plugins: Vec<PluginDescriptor>,
    ) -> Self {
        Self {
            content_patterns,
            theme: ThemeSection { extend, overrides },
            plugins,
        }
    }

    /// Glob patterns for the files the generator scans for class names.
    pub fn content_patterns(&self) -> &[String] {
        &self.content_patterns
    }

    /// Tokens merged into the default theme (`theme.extend`).
    pub fn theme_extensions(&self) -> &ThemeTokens {
        &self.theme.extend
    }

    /// Categories that replace the default theme's category outright.
    pub fn theme_overrides(&self) -> &ThemeTokens {
        &self.theme.overrides
    }

    /// Registered plugins. Empty rather than absent when none are declared.
    pub fn plugins(&self) -> &[PluginDescriptor] {
        &self.plugins
    }

    /// Applies this configuration's theme on top of `defaults`.
    ///
    /// Override categories replace their default counterpart first, then the
    /// extension tokens are merged in (see [`ThemeTokens::merged`]).
    #[instrument(skip_all)]
    pub fn resolve(&self, defaults: &ThemeTokens) -> ThemeTokens {
        let resolved = defaults
            .replaced(&self.theme.overrides)
            .merged(&self.theme.extend);
        debug!(
            default_categories = defaults.len(),
            resolved_categories = resolved.len(),
            "resolved theme"
        );
        resolved
    }

    /// Checks every token declared in a color category.
    ///
    /// Loading never runs this check; the generator calls it before emitting
    /// a stylesheet.
    pub fn validate_colors(&self) -> Result<(), ConfigError> {
        self.theme.overrides.validate_colors()?;
        self.theme.extend.validate_colors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::TokenSet;

    #[test]
    fn test_resolve_applies_overrides_before_extend() {
        let base = TokenSet::new().with("base", "#ffffff");
        let config = ThemeConfig::builder()
            .content("./templates/**/*.html")
            .override_category("colors", base)
            .extend("colors", "main", "#353a65")
            .build();
        let defaults = ThemeTokens::new()
            .with_category("colors", TokenSet::new().with("primary", "#000000"));

        let resolved = config.resolve(&defaults);
        let colors = resolved.category("colors").unwrap();

        assert_eq!(colors.len(), 2);
        assert_eq!(colors.get("base"), Some("#ffffff"));
        assert_eq!(colors.get("main"), Some("#353a65"));
        assert!(!colors.contains("primary"));
    }

    #[test]
    fn test_resolve_with_empty_defaults() {
        let config = ThemeConfig::builder()
            .content("./templates/**/*.html")
            .extend("colors", "main", "#353a65")
            .build();

        let resolved = config.resolve(&ThemeTokens::new());
        assert_eq!(resolved, *config.theme_extensions());
    }

    #[test]
    fn test_validate_colors_checks_overrides() {
        let text = TokenSet::new().with("muted", "grey-ish");
        let config = ThemeConfig::builder()
            .content("./templates/**/*.html")
            .override_category("textColor", text)
            .build();

        match config.validate_colors() {
            Err(ConfigError::InvalidColor { category, token, .. }) => {
                assert_eq!(category, "textColor");
                assert_eq!(token, "muted");
            }
            other => panic!("expected InvalidColor, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_colors_ignores_non_color_categories() {
        let config = ThemeConfig::builder()
            .content("./templates/**/*.html")
            .extend("fontFamily", "display", "Inter, sans-serif")
            .build();

        assert!(config.validate_colors().is_ok());
    }
}
