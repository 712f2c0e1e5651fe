//! # gale-theme - Stylesheet Configuration for the gale Developer UI
//!
//! The gale developer UI is styled with a utility-class generator. This crate
//! owns the configuration that generator reads: which templates to scan for
//! class names, which design tokens to add to its default theme, and which
//! plugins to run.
//!
//! ## Core Concepts
//!
//! - [`ThemeConfig`]: the immutable configuration record
//! - [`ThemeTokens`] / [`TokenSet`]: category → token → value maps
//! - [`load`]: the built-in configuration, no I/O
//! - [`discover`]: load the nearest `gale-theme.{yaml,yml,json}` instead
//!
//! ## Quick Start
//!
//! ```rust
//! use gale_theme::{load, ThemeTokens, TokenSet};
//!
//! let config = load();
//! assert_eq!(config.content_patterns(), &["./templates/**/*.html"]);
//!
//! // The generator supplies its own defaults; the config extends them.
//! let defaults = ThemeTokens::new()
//!     .with_category("colors", TokenSet::new().with("primary", "#000000"));
//! let theme = config.resolve(&defaults);
//!
//! assert_eq!(theme.get("colors", "primary"), Some("#000000"));
//! assert_eq!(theme.get("colors", "main"), Some("#353a65"));
//! assert_eq!(theme.get("colors", "widget"), Some("#3c416e"));
//! ```
//!
//! ## Extend vs. Override
//!
//! Tokens under `theme.extend` are merged into the matching default category
//! and win on a name collision. Any other key under `theme` replaces the
//! default category as a whole:
//!
//! ```rust
//! use gale_theme::ThemeConfig;
//!
//! let config = ThemeConfig::from_yaml(r##"
//! content:
//!   - ./templates/**/*.html
//! theme:
//!   fontFamily:
//!     sans: Inter, sans-serif
//!   extend:
//!     colors:
//!       main: "#353a65"
//! "##).unwrap();
//!
//! assert_eq!(config.theme_overrides().get("fontFamily", "sans"), Some("Inter, sans-serif"));
//! ```
//!
//! ## Color Checks
//!
//! Token values are passed through as written. Call
//! [`ThemeConfig::validate_colors`] right before generating a stylesheet to
//! reject malformed color literals.
//!
//! ## Logging
//!
//! File loading and theme resolution emit [`tracing`] spans and events. The
//! crate never installs a subscriber.

pub mod config;
pub mod error;
pub mod plugin;
pub mod theme;

pub use config::{discover, find_config_file, load, ThemeConfig, ThemeConfigBuilder};
pub use error::ConfigError;
pub use plugin::PluginDescriptor;
pub use theme::{ColorValue, ThemeTokens, TokenSet};
