//! In-process process factory registry.

use std::sync::Arc;

use parking_lot::RwLock;
use wps_sdk::{ProcessFactory, ProcessFactoryRegistry};

/// Process factory known only by its type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticProcessFactory {
    type_name: String,
}

impl StaticProcessFactory {
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }
}

impl ProcessFactory for StaticProcessFactory {
    fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// Registry populated by the host as factories become available.
///
/// Every call to [`ProcessFactoryRegistry::process_factories`] returns a
/// snapshot; registrations made afterwards do not affect it.
#[derive(Default)]
pub struct InMemoryProcessFactoryRegistry {
    entries: RwLock<Vec<Option<Arc<dyn ProcessFactory>>>>,
}

impl InMemoryProcessFactoryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding one [`StaticProcessFactory`] per type name.
    #[must_use]
    pub fn from_type_names<I, S>(type_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = type_names
            .into_iter()
            .map(|name| Some(Arc::new(StaticProcessFactory::new(name)) as Arc<dyn ProcessFactory>))
            .collect();
        Self {
            entries: RwLock::new(entries),
        }
    }

    pub fn register(&self, factory: Arc<dyn ProcessFactory>) {
        self.entries.write().push(Some(factory));
    }

    /// Records an entry whose implementation could not be resolved.
    pub fn register_unresolved(&self) {
        self.entries.write().push(None);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl ProcessFactoryRegistry for InMemoryProcessFactoryRegistry {
    fn process_factories(&self) -> Vec<Option<Arc<dyn ProcessFactory>>> {
        self.entries.read().clone()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_from_type_names_preserves_registration_order() {
        let registry = InMemoryProcessFactoryRegistry::from_type_names(["b.Impl", "a.Impl"]);
        let names: Vec<String> = registry
            .process_factories()
            .into_iter()
            .flatten()
            .map(|f| f.type_name().to_owned())
            .collect();

        assert_eq!(names, vec!["b.Impl", "a.Impl"]);
    }

    #[test]
    fn test_snapshot_is_not_affected_by_later_registrations() {
        let registry = InMemoryProcessFactoryRegistry::new();
        assert!(registry.is_empty());

        registry.register(Arc::new(StaticProcessFactory::new("a.Impl")));
        let snapshot = registry.process_factories();
        registry.register_unresolved();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(registry.len(), 2);
        assert!(registry.process_factories()[1].is_none());
    }
}
