//! Error types for configuration loading and token validation.
//!
//! [`load`](crate::load) never fails. Everything layered on top of it (file
//! discovery, YAML/JSON parsing, color checks) reports a [`ConfigError`].

use std::io;
use std::path::{Path, PathBuf};

/// Errors produced while reading, parsing or validating a theme configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// The file that was being read.
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// YAML or JSON content did not match the configuration shape.
    #[error("Failed to parse theme config{}: {message}", location(.path.as_deref()))]
    Parse {
        /// Source file, when the content came from disk.
        path: Option<PathBuf>,
        /// Message from the underlying parser.
        message: String,
    },

    /// The configuration could not be serialized.
    #[error("Failed to serialize theme config: {0}")]
    Serialize(String),

    /// The file extension does not name a supported format.
    #[error("Unsupported config format for {} (expected .yaml, .yml or .json)", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// No configuration file was found in the start directory or its ancestors.
    #[error("No theme config found in {} or any parent directory", .start.display())]
    NotFound { start: PathBuf },

    /// A token in a color category is not a valid color literal.
    #[error("Invalid color '{value}' for token '{category}.{token}': {reason}")]
    InvalidColor {
        category: String,
        token: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn parse(path: Option<&Path>, message: impl ToString) -> Self {
        Self::Parse {
            path: path.map(Path::to_path_buf),
            message: message.to_string(),
        }
    }
}

fn location(path: Option<&Path>) -> String {
    path.map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}
