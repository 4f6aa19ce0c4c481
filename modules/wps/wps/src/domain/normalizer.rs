//! Fills in defaults for a loaded or freshly created service configuration.

use tracing::debug;
use wps_sdk::{DEFAULT_CONNECTION_TIMEOUT, DEFAULT_VERSION, MetadataMap, ServiceInfo, Version};

use super::discovery::ProcessGroupDiscovery;

/// Normalizes `service` in place.
///
/// Absent collections become empty, an empty `versions` list is seeded with
/// [`DEFAULT_VERSION`], a zero connection timeout becomes
/// [`DEFAULT_CONNECTION_TIMEOUT`], and absent process groups are filled by
/// `discovery`. Values already present are left alone, so running this twice
/// is the same as running it once. A present but empty process group list is
/// kept empty.
pub fn normalize<S>(service: &mut S, discovery: &ProcessGroupDiscovery)
where
    S: ServiceInfo + ?Sized,
{
    if service.keywords().is_none() {
        service.set_keywords(Vec::new());
    }
    if service.exception_formats().is_none() {
        service.set_exception_formats(Vec::new());
    }
    if service.metadata().is_none() {
        service.set_metadata(MetadataMap::new());
    }
    if service.client_properties().is_none() {
        service.set_client_properties(MetadataMap::new());
    }
    if service.versions().is_none() {
        service.set_versions(Vec::new());
    }
    if service.versions().is_some_and(<[Version]>::is_empty) {
        debug!(service = service.id(), version = DEFAULT_VERSION, "seeding default version");
        service.set_versions(vec![Version::new(DEFAULT_VERSION)]);
    }
    if service.connection_timeout() == 0 {
        debug!(
            service = service.id(),
            timeout = DEFAULT_CONNECTION_TIMEOUT,
            "connection timeout not set, using default"
        );
        service.set_connection_timeout(DEFAULT_CONNECTION_TIMEOUT);
    }
    if service.process_groups().is_none() {
        let groups = discovery.discover();
        debug!(
            service = service.id(),
            count = groups.len(),
            "populating process groups from discovery"
        );
        service.set_process_groups(groups);
    }
}
