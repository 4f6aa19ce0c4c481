//! Discovery of process groups from the host's process factory registry.

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{debug, warn};
use wps_sdk::{ProcessFactory, ProcessFactoryRegistry, ProcessGroupInfo};

/// Builds the initial list of process groups, one per available factory.
///
/// The result is ordered by factory type name so that repeated discovery over
/// the same set of factories always yields the same list, whatever order the
/// registry reports them in.
#[derive(Clone)]
pub struct ProcessGroupDiscovery {
    registry: Arc<dyn ProcessFactoryRegistry>,
}

impl ProcessGroupDiscovery {
    #[must_use]
    pub fn new(registry: Arc<dyn ProcessFactoryRegistry>) -> Self {
        Self { registry }
    }

    /// Returns one enabled [`ProcessGroupInfo`] per registered factory, sorted
    /// with [`compare_factories`].
    ///
    /// Unresolved registry entries sort first and carry no type name, so they
    /// produce no group.
    #[must_use]
    pub fn discover(&self) -> Vec<ProcessGroupInfo> {
        let mut factories = self.registry.process_factories();
        factories.sort_by(|a, b| compare_factories(a.as_deref(), b.as_deref()));

        let mut groups = Vec::with_capacity(factories.len());
        for factory in &factories {
            match factory {
                Some(factory) => groups.push(ProcessGroupInfo::new(factory.type_name())),
                None => warn!("skipping unresolved process factory entry"),
            }
        }

        debug!(
            registered = factories.len(),
            groups = groups.len(),
            "discovered process groups"
        );
        groups
    }
}

/// Total order over registry entries.
///
/// Missing entries come before present ones and are equal to each other;
/// present entries compare by type name.
#[must_use]
pub fn compare_factories(
    a: Option<&dyn ProcessFactory>,
    b: Option<&dyn ProcessFactory>,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.type_name().cmp(b.type_name()),
    }
}
