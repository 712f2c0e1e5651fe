//! Builder for [`ThemeConfig`].

use std::collections::HashSet;

use tracing::warn;

use super::theme_config::ThemeConfig;
use crate::plugin::PluginDescriptor;
use crate::theme::{ThemeTokens, TokenSet};

/// Collects configuration pieces and produces an immutable [`ThemeConfig`].
///
/// # Example
///
/// ```rust
/// use gale_theme::ThemeConfig;
///
/// let config = ThemeConfig::builder()
///     .content("./templates/**/*.html")
///     .extend("colors", "main", "#353a65")
///     .build();
///
/// assert_eq!(config.theme_extensions().get("colors", "main"), Some("#353a65"));
/// assert!(config.plugins().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ThemeConfigBuilder {
    content_patterns: Vec<String>,
    extend: ThemeTokens,
    overrides: ThemeTokens,
    plugins: Vec<PluginDescriptor>,
}

impl ThemeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a content glob pattern.
    pub fn content(mut self, pattern: impl Into<String>) -> Self {
        self.content_patterns.push(pattern.into());
        self
    }

    /// Adds one token to the `extend` section.
    pub fn extend(
        mut self,
        category: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.extend.insert(category, name, value);
        self
    }

    /// Merges a whole token set into an `extend` category.
    pub fn extend_category(mut self, category: impl Into<String>, tokens: TokenSet) -> Self {
        self.extend = self
            .extend
            .merged(&ThemeTokens::new().with_category(category, tokens));
        self
    }

    /// Sets a category that replaces the default theme's category.
    pub fn override_category(mut self, category: impl Into<String>, tokens: TokenSet) -> Self {
        self.overrides = self.overrides.with_category(category, tokens);
        self
    }

    pub fn plugin(mut self, plugin: PluginDescriptor) -> Self {
        self.plugins.push(plugin);
        self
    }

    /// Finishes the configuration.
    ///
    /// An empty content list or repeated patterns are logged as warnings but
    /// kept as given; the generator decides what to do with them.
    pub fn build(self) -> ThemeConfig {
        if self.content_patterns.is_empty() {
            warn!("theme config has no content patterns; no templates will be scanned");
        }

        let mut seen = HashSet::new();
        for pattern in &self.content_patterns {
            if !seen.insert(pattern.as_str()) {
                warn!(%pattern, "duplicate content pattern");
            }
        }

        ThemeConfig::from_parts(
            self.content_patterns,
            self.extend,
            self.overrides,
            self.plugins,
        )
    }
}
