//! Read-only adapter over the externally supplied component registry.
//!
//! The host hands over a [`BuilderConfig`] describing, per component type,
//! its prop schema and whether it is a container. The registry is injected
//! into whatever needs it; tree algorithms never reach for ambient state.
//!
//! Two failure grades, per the host contract: a missing configuration
//! *section* is fatal (setup error, logged and raised), a missing entry for
//! one component name only warns and lets the edit degrade gracefully.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("component configuration set is not configured")]
    MissingComponentConfigs,
    #[error("container category of the components is not configured")]
    MissingContainers,
}

/// Schema of one named child slot on a container component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotSchema {
    #[serde(default)]
    pub is_required: bool,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// Registry metadata for one component type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSchema {
    /// Named-slot schemas, when the component exposes named insertion points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_props_config: Option<IndexMap<String, SlotSchema>>,
    /// Whether the component requires children overall.
    #[serde(default)]
    pub is_required: bool,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// The externally supplied configuration object.
///
/// Both sections are optional so that a half-configured host surfaces the
/// fatal condition at use time, matching the adapter contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuilderConfig {
    #[serde(default, rename = "AllComponentConfigs")]
    pub all_component_configs: Option<IndexMap<String, ComponentSchema>>,
    #[serde(default)]
    pub containers: Option<Vec<String>>,
}

type WarnSink = Box<dyn Fn(&str) + Send + Sync>;

/// Read-only lookup service over a [`BuilderConfig`], with a pluggable
/// warning sink. Warnings never abort the current operation.
pub struct Registry {
    config: BuilderConfig,
    warn_sink: Option<WarnSink>,
}

impl Registry {
    pub fn new(config: BuilderConfig) -> Self {
        Self {
            config,
            warn_sink: None,
        }
    }

    /// Route warnings to `sink` instead of the default `log` channel.
    pub fn with_warn_sink(mut self, sink: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.warn_sink = Some(Box::new(sink));
        self
    }

    /// Looks up the schema for `component_name`.
    ///
    /// `Ok(None)` (after a warning) when the component has no entry; the
    /// caller treats it as having no constraints.
    pub fn component_config(
        &self,
        component_name: &str,
    ) -> Result<Option<&ComponentSchema>, RegistryError> {
        let Some(all) = self.config.all_component_configs.as_ref() else {
            log::error!("component configuration set is not configured");
            return Err(RegistryError::MissingComponentConfigs);
        };
        let schema = all.get(component_name);
        if schema.is_none() {
            self.warn(&format!(
                "configuration information for `{component_name}` not found"
            ));
        }
        Ok(schema)
    }

    /// Whether `component_name` is registered as a container (accepts
    /// children).
    pub fn is_container(&self, component_name: &str) -> Result<bool, RegistryError> {
        let Some(containers) = self.config.containers.as_ref() else {
            log::error!("container category of the components is not configured");
            return Err(RegistryError::MissingContainers);
        };
        Ok(containers.iter().any(|name| name == component_name))
    }

    pub fn warn(&self, msg: &str) {
        match &self.warn_sink {
            Some(sink) => sink(msg),
            None => log::warn!("{msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn config_with(name: &str, schema: ComponentSchema) -> BuilderConfig {
        let mut all = IndexMap::new();
        all.insert(name.to_string(), schema);
        BuilderConfig {
            all_component_configs: Some(all),
            containers: Some(vec!["Layout".into()]),
        }
    }

    #[test]
    fn missing_config_sections_are_fatal() {
        let registry = Registry::new(BuilderConfig::default());
        assert_eq!(
            registry.component_config("Button").unwrap_err(),
            RegistryError::MissingComponentConfigs
        );
        assert_eq!(
            registry.is_container("Layout").unwrap_err(),
            RegistryError::MissingContainers
        );
    }

    #[test]
    fn unknown_component_warns_and_returns_none() {
        let warnings: Arc<Mutex<Vec<String>>> = Arc::default();
        let captured = Arc::clone(&warnings);
        let registry = Registry::new(config_with("Button", ComponentSchema::default()))
            .with_warn_sink(move |msg| captured.lock().unwrap().push(msg.to_string()));

        assert!(registry.component_config("Ghost").unwrap().is_none());
        let warnings = warnings.lock().unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Ghost"));
    }

    #[test]
    fn known_component_resolves_without_warning() {
        let warnings: Arc<Mutex<Vec<String>>> = Arc::default();
        let captured = Arc::clone(&warnings);
        let schema = ComponentSchema {
            is_required: true,
            ..ComponentSchema::default()
        };
        let registry = Registry::new(config_with("Button", schema))
            .with_warn_sink(move |msg| captured.lock().unwrap().push(msg.to_string()));

        let resolved = registry.component_config("Button").unwrap().unwrap();
        assert!(resolved.is_required);
        assert!(warnings.lock().unwrap().is_empty());
    }

    #[test]
    fn container_lookup_checks_the_configured_list() {
        let registry = Registry::new(config_with("Button", ComponentSchema::default()));
        assert!(registry.is_container("Layout").unwrap());
        assert!(!registry.is_container("Button").unwrap());
    }

    #[test]
    fn builder_config_deserializes_from_host_json() {
        let config: BuilderConfig = serde_json::from_value(serde_json::json!({
            "AllComponentConfigs": {
                "Tabs": {
                    "isRequired": true,
                    "nodePropsConfig": { "body": { "isRequired": true } }
                }
            },
            "containers": ["Tabs"]
        }))
        .unwrap();

        let registry = Registry::new(config);
        let tabs = registry.component_config("Tabs").unwrap().unwrap();
        assert!(tabs.is_required);
        let slots = tabs.node_props_config.as_ref().unwrap();
        assert!(slots["body"].is_required);
        assert!(registry.is_container("Tabs").unwrap());
    }
}
