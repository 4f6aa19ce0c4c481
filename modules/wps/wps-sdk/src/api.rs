//! Traits at the seams between the WPS configuration core and its host.

use std::sync::Arc;

use crate::models::{MetadataMap, ProcessGroupInfo, Version};

/// Accessor view over a service configuration.
///
/// Normalization is written against this trait rather than [`crate::WpsInfo`]
/// so that alternate backing representations can be normalized too.
pub trait ServiceInfo {
    fn id(&self) -> &str;

    fn keywords(&self) -> Option<&[String]>;
    fn set_keywords(&mut self, keywords: Vec<String>);

    fn exception_formats(&self) -> Option<&[String]>;
    fn set_exception_formats(&mut self, formats: Vec<String>);

    fn metadata(&self) -> Option<&MetadataMap>;
    fn set_metadata(&mut self, metadata: MetadataMap);

    fn client_properties(&self) -> Option<&MetadataMap>;
    fn set_client_properties(&mut self, properties: MetadataMap);

    fn versions(&self) -> Option<&[Version]>;
    fn set_versions(&mut self, versions: Vec<Version>);

    /// Seconds; `0` means the value was never configured.
    fn connection_timeout(&self) -> i64;
    fn set_connection_timeout(&mut self, timeout: i64);

    fn process_groups(&self) -> Option<&[ProcessGroupInfo]>;
    fn set_process_groups(&mut self, groups: Vec<ProcessGroupInfo>);
}

/// A pluggable source of processes.
pub trait ProcessFactory: Send + Sync {
    /// Fully-qualified type name of the implementation.
    ///
    /// Used as the discovery ordering key and persisted as
    /// [`ProcessGroupInfo::factory_class`].
    fn type_name(&self) -> &str;
}

/// Read-only view of the process factories currently available in the host.
///
/// A registry may report entries it could not resolve to an implementation;
/// those are `None`.
pub trait ProcessFactoryRegistry: Send + Sync {
    /// Returns a snapshot of the registered factories, in no particular order.
    fn process_factories(&self) -> Vec<Option<Arc<dyn ProcessFactory>>>;
}
