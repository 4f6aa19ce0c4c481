//! WPS SDK
//!
//! This crate provides the public API for the `wps` module:
//!
//! - [`WpsInfo`], [`ProcessGroupInfo`], [`QualifiedName`], [`Version`] - persisted configuration models
//! - [`ServiceInfo`] - accessor trait the normalizer works against
//! - [`ProcessFactory`], [`ProcessFactoryRegistry`] - process factory discovery seam
//! - [`SingleValueConverter`], [`QualifiedNameConverter`] - single-value string converters
//! - [`WpsError`] - error types
//!
//! ## Usage
//!
//! Hosts expose their process factories through a registry and hand it to the
//! `wps` module:
//!
//! ```ignore
//! use wps_sdk::{ProcessFactoryRegistry, ServiceInfo};
//!
//! let registry: Arc<dyn ProcessFactoryRegistry> = host.process_factory_registry();
//! let module = WpsModule::init(&config_provider, registry)?;
//! let service = module.service();
//! assert!(service.versions().is_some_and(|v| !v.is_empty()));
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod codec;
pub mod error;
pub mod models;

// Re-export main types at crate root
pub use api::{ProcessFactory, ProcessFactoryRegistry, ServiceInfo};
pub use codec::{QualifiedNameConverter, SingleValueConverter};
pub use error::WpsError;
pub use models::{
    DEFAULT_CONNECTION_TIMEOUT, DEFAULT_VERSION, MetadataMap, ProcessGroupInfo, QualifiedName,
    Version, WPS_SERVICE_ID, WpsInfo,
};
