//! Service loader contract and its WPS implementation.

use tracing::info;
use wps_sdk::{ServiceInfo, WPS_SERVICE_ID, WpsError, WpsInfo};

use super::discovery::ProcessGroupDiscovery;
use super::normalizer::normalize;
use crate::infra::ServicePersister;

/// Per-service hook the host calls to obtain a ready-to-use configuration.
///
/// Implementors provide storage access and the service-specific defaults;
/// [`ServiceLoader::load`] ties them together.
pub trait ServiceLoader {
    type Service: ServiceInfo;

    /// Stable identifier of the service handled by this loader.
    fn service_id(&self) -> &'static str;

    /// Builds a configuration for a service that has never been persisted.
    fn create_service_from_scratch(&self) -> Self::Service;

    /// Brings a loaded or newly created configuration into a usable state.
    fn initialize(&self, service: Self::Service) -> Self::Service;

    /// Reads the persisted configuration, if any.
    ///
    /// # Errors
    /// Returns `WpsError` if stored data exists but cannot be read or parsed.
    fn read(&self) -> Result<Option<Self::Service>, WpsError>;

    /// Persists `service`.
    ///
    /// # Errors
    /// Returns `WpsError` if the configuration cannot be written.
    fn write(&self, service: &Self::Service) -> Result<(), WpsError>;

    /// Reads the persisted configuration or creates one from scratch, then
    /// initializes it.
    ///
    /// # Errors
    /// Returns `WpsError` if stored data exists but cannot be read or parsed.
    fn load(&self) -> Result<Self::Service, WpsError> {
        let service = if let Some(stored) = self.read()? {
            info!(service = self.service_id(), "loaded persisted service configuration");
            stored
        } else {
            info!(
                service = self.service_id(),
                "no persisted configuration, creating service from scratch"
            );
            self.create_service_from_scratch()
        };
        Ok(self.initialize(service))
    }
}

/// Loader for the WPS service configuration.
pub struct WpsServiceLoader {
    persister: ServicePersister,
    discovery: ProcessGroupDiscovery,
}

impl WpsServiceLoader {
    #[must_use]
    pub fn new(persister: ServicePersister, discovery: ProcessGroupDiscovery) -> Self {
        Self {
            persister,
            discovery,
        }
    }

    #[must_use]
    pub fn persister(&self) -> &ServicePersister {
        &self.persister
    }
}

impl ServiceLoader for WpsServiceLoader {
    type Service = WpsInfo;

    fn service_id(&self) -> &'static str {
        WPS_SERVICE_ID
    }

    fn create_service_from_scratch(&self) -> WpsInfo {
        WpsInfo::new(self.service_id())
    }

    fn initialize(&self, mut service: WpsInfo) -> WpsInfo {
        normalize(&mut service, &self.discovery);
        service
    }

    fn read(&self) -> Result<Option<WpsInfo>, WpsError> {
        self.persister.read()
    }

    fn write(&self, service: &WpsInfo) -> Result<(), WpsError> {
        self.persister.write(service)
    }
}
