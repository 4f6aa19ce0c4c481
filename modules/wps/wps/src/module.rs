//! Module declaration for the WPS module.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};
use wps_sdk::{ProcessFactoryRegistry, WpsError, WpsInfo};

use crate::config::{ConfigProvider, MODULE_NAME, WpsModuleConfig, module_config_or_default};
use crate::domain::{ProcessGroupDiscovery, ServiceLoader, WpsServiceLoader};
use crate::infra::ServicePersister;

/// WPS module.
///
/// Owns the service configuration for the lifetime of the host. On `init` the
/// persisted document is loaded (or created) and normalized; a document that
/// did not exist yet is written back so discovered process groups become
/// operator-owned configuration.
pub struct WpsModule {
    loader: WpsServiceLoader,
    service: RwLock<WpsInfo>,
}

impl WpsModule {
    /// Initializes the module from the host configuration.
    ///
    /// # Errors
    /// Returns an error if the module configuration is invalid or the service
    /// document cannot be read or written.
    pub fn init(
        provider: &dyn ConfigProvider,
        registry: Arc<dyn ProcessFactoryRegistry>,
    ) -> anyhow::Result<Self> {
        info!("Initializing wps module");

        let cfg: WpsModuleConfig = module_config_or_default(provider, MODULE_NAME)?;
        debug!(
            "Loaded wps config: data_dir={}, file_name={}",
            cfg.data_dir.display(),
            cfg.file_name
        );

        let loader = WpsServiceLoader::new(
            ServicePersister::new(cfg.service_file()),
            ProcessGroupDiscovery::new(registry),
        );

        let first_run = !loader.persister().exists();
        let service = loader
            .load()
            .map_err(|e| anyhow::anyhow!("Failed to load wps service configuration: {e}"))?;
        if first_run {
            loader.write(&service)?;
        }

        info!(
            process_groups = service.process_groups.as_ref().map_or(0, Vec::len),
            "wps module initialized"
        );
        Ok(Self {
            loader,
            service: RwLock::new(service),
        })
    }

    /// Returns a copy of the current service configuration.
    #[must_use]
    pub fn service(&self) -> WpsInfo {
        self.service.read().clone()
    }

    /// Applies an operator edit, re-normalizes and persists the result.
    ///
    /// The stored configuration is only replaced once the write succeeded.
    ///
    /// # Errors
    /// Returns `WpsError` if the updated document cannot be written.
    pub fn update<F>(&self, edit: F) -> Result<WpsInfo, WpsError>
    where
        F: FnOnce(&mut WpsInfo),
    {
        let mut guard = self.service.write();
        let mut updated = guard.clone();
        edit(&mut updated);
        let updated = self.loader.initialize(updated);
        self.loader.write(&updated)?;
        *guard = updated.clone();
        Ok(updated)
    }
}
