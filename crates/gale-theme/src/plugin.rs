//! Plugin descriptors.
//!
//! The generator's plugin list is an extension point with no contract yet, so
//! a descriptor is kept as an opaque value. It is carried through parsing and
//! serialization unchanged and never interpreted by this crate.

use serde::{Deserialize, Serialize};

/// An entry in the configuration's plugin list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginDescriptor(serde_json::Value);

impl PluginDescriptor {
    /// Wraps an arbitrary descriptor value.
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// A descriptor that only names a plugin.
    pub fn named(name: impl Into<String>) -> Self {
        Self(serde_json::Value::String(name.into()))
    }

    /// The plugin name, when the descriptor is a bare string or has a
    /// `name` field.
    pub fn name(&self) -> Option<&str> {
        match &self.0 {
            serde_json::Value::String(name) => Some(name.as_str()),
            value => value.get("name").and_then(serde_json::Value::as_str),
        }
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_descriptor() {
        let plugin = PluginDescriptor::named("forms");
        assert_eq!(plugin.name(), Some("forms"));
    }

    #[test]
    fn test_object_descriptor_name() {
        let plugin = PluginDescriptor::new(serde_json::json!({
            "name": "typography",
            "options": { "className": "prose" }
        }));
        assert_eq!(plugin.name(), Some("typography"));
        assert_eq!(plugin.as_value()["options"]["className"], "prose");
    }

    #[test]
    fn test_descriptor_without_name() {
        let plugin = PluginDescriptor::new(serde_json::json!([1, 2]));
        assert_eq!(plugin.name(), None);
    }

    #[test]
    fn test_descriptor_from_yaml() {
        let yaml = "{ name: forms, strategy: class }";
        let plugin: PluginDescriptor = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(plugin.name(), Some("forms"));
    }
}
