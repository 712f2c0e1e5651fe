//! Design-token maps and the category-scoped merge.
//!
//! A theme is a two-level map: category name (`colors`, `spacing`, ...) to a
//! [`TokenSet`], which maps token names to values. Both levels keep insertion
//! order so that generated utilities come out in declaration order.
//!
//! # Merging
//!
//! [`ThemeTokens::merged`] layers extension tokens on top of a default theme:
//!
//! 1. Start with every default category
//! 2. For each extension category, insert each token, replacing on collision
//! 3. Categories the extension does not mention pass through unchanged
//!
//! The merge is one level deep: token values are plain strings and are
//! replaced, never combined.
//!
//! ```rust
//! use gale_theme::theme::{ThemeTokens, TokenSet};
//!
//! let defaults = ThemeTokens::new()
//!     .with_category("colors", TokenSet::new().with("primary", "#000000"));
//! let extend = ThemeTokens::new()
//!     .with_category("colors", TokenSet::new().with("main", "#353a65"));
//!
//! let merged = defaults.merged(&extend);
//! assert_eq!(merged.get("colors", "primary"), Some("#000000"));
//! assert_eq!(merged.get("colors", "main"), Some("#353a65"));
//! ```

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, instrument};

use super::color::{is_color_category, ColorValue};
use crate::error::ConfigError;

/// Token name to token value within one category.
///
/// When deserializing, scalar keys and values of any type are accepted and
/// kept in their textual form, so `4: 1rem` and `bold: 700` load the same as
/// their quoted spellings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenSet {
    tokens: IndexMap<String, String>,
}

impl TokenSet {
    /// Creates an empty token set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token, returning the updated set for chaining.
    ///
    /// An existing token with the same name is replaced in place.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts a token, returning the previous value if the name was taken.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.tokens.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.tokens.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tokens.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates tokens in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlays `other` onto this set. Tokens in `other` win on collision.
    pub fn extend_from(&mut self, other: &TokenSet) {
        for (name, value) in &other.tokens {
            self.tokens.insert(name.clone(), value.clone());
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TokenSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            tokens: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'de> Deserialize<'de> for TokenSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TokenSetVisitor)
    }
}

struct TokenSetVisitor;

impl<'de> Visitor<'de> for TokenSetVisitor {
    type Value = TokenSet;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping of token names to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<TokenSet, A::Error> {
        let mut tokens = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((TokenScalar(name), TokenScalar(value))) = map.next_entry()? {
            tokens.insert(name, value);
        }
        Ok(TokenSet { tokens })
    }
}

/// A token name or value in its textual form.
///
/// Buffered input (the flattened `theme` table) hands over numbers and
/// booleans as typed values rather than strings; they are stringified here.
struct TokenScalar(String);

impl<'de> Deserialize<'de> for TokenScalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TokenScalarVisitor)
    }
}

struct TokenScalarVisitor;

impl<'de> Visitor<'de> for TokenScalarVisitor {
    type Value = TokenScalar;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number or boolean")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<TokenScalar, E> {
        Ok(TokenScalar(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<TokenScalar, E> {
        Ok(TokenScalar(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<TokenScalar, E> {
        Ok(TokenScalar(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<TokenScalar, E> {
        Ok(TokenScalar(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<TokenScalar, E> {
        Ok(TokenScalar(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<TokenScalar, E> {
        Ok(TokenScalar(v.to_string()))
    }
}

/// Category name to [`TokenSet`].
///
/// Used both for a generator's default theme and for the `extend` and
/// override sections of a [`ThemeConfig`](crate::ThemeConfig).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeTokens {
    categories: IndexMap<String, TokenSet>,
}

impl ThemeTokens {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a whole category, returning the updated theme for chaining.
    pub fn with_category(mut self, name: impl Into<String>, tokens: TokenSet) -> Self {
        self.categories.insert(name.into(), tokens);
        self
    }

    /// Inserts a single token, creating its category if needed.
    pub fn insert(
        &mut self,
        category: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.categories
            .entry(category.into())
            .or_default()
            .insert(name, value)
    }

    /// Loads a theme from YAML content.
    ///
    /// The expected shape is a mapping of categories to token mappings:
    ///
    /// ```yaml
    /// colors:
    ///   primary: "#000000"
    /// spacing:
    ///   "4": 1rem
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::parse(None, e))
    }

    /// Loads a theme from a YAML file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tokens: Self =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::parse(Some(path), e))?;
        debug!(categories = tokens.len(), "loaded theme tokens");
        Ok(tokens)
    }

    pub fn category(&self, name: &str) -> Option<&TokenSet> {
        self.categories.get(name)
    }

    /// Looks up a single token value.
    pub fn get(&self, category: &str, name: &str) -> Option<&str> {
        self.categories.get(category).and_then(|set| set.get(name))
    }

    /// Iterates categories in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &TokenSet)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Returns this theme with `extension` layered on top.
    ///
    /// For every category in `extension`, its tokens are inserted into the
    /// matching category (created if missing), replacing values on key
    /// collision. Tokens and categories not named by `extension` are kept
    /// untouched.
    pub fn merged(&self, extension: &ThemeTokens) -> ThemeTokens {
        let mut result = self.clone();
        for (category, tokens) in &extension.categories {
            result
                .categories
                .entry(category.clone())
                .or_default()
                .extend_from(tokens);
        }
        result
    }

    /// Returns this theme with each category in `overrides` replaced whole.
    ///
    /// Unlike [`merged`](Self::merged), a replaced category keeps none of its
    /// previous tokens.
    pub fn replaced(&self, overrides: &ThemeTokens) -> ThemeTokens {
        let mut result = self.clone();
        for (category, tokens) in &overrides.categories {
            result.categories.insert(category.clone(), tokens.clone());
        }
        result
    }

    /// Checks that every token in a color category is a color literal.
    ///
    /// Categories outside [`COLOR_CATEGORIES`](super::COLOR_CATEGORIES) are
    /// not inspected. Returns the first invalid token in declaration order.
    pub fn validate_colors(&self) -> Result<(), ConfigError> {
        for (category, tokens) in self.categories() {
            if !is_color_category(category) {
                continue;
            }
            for (name, value) in tokens.iter() {
                ColorValue::parse(value).map_err(|reason| ConfigError::InvalidColor {
                    category: category.to_string(),
                    token: name.to_string(),
                    value: value.to_string(),
                    reason,
                })?;
            }
        }
        Ok(())
    }
}
