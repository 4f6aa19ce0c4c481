#![allow(dead_code)]

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde_json::json;
use wps::config::ConfigProvider;
use wps::{InMemoryProcessFactoryRegistry, ProcessFactoryRegistry, ProcessGroupDiscovery};

/// Discovery over a registry holding one factory per type name.
pub fn discovery_of(type_names: &[&str]) -> ProcessGroupDiscovery {
    ProcessGroupDiscovery::new(registry_of(type_names))
}

pub fn registry_of(type_names: &[&str]) -> Arc<dyn ProcessFactoryRegistry> {
    Arc::new(InMemoryProcessFactoryRegistry::from_type_names(
        type_names.iter().copied(),
    ))
}

/// Host configuration pointing the wps module at `data_dir`.
pub struct TestConfigProvider {
    modules: HashMap<String, serde_json::Value>,
}

impl TestConfigProvider {
    pub fn with_data_dir(data_dir: &Path) -> Self {
        let mut modules = HashMap::new();
        modules.insert(
            "wps".to_owned(),
            json!({ "config": { "data_dir": data_dir } }),
        );
        Self { modules }
    }
}

impl ConfigProvider for TestConfigProvider {
    fn get_module_config(&self, module_name: &str) -> Option<&serde_json::Value> {
        self.modules.get(module_name)
    }
}
