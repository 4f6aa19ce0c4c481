//! WPS Module Implementation
//!
//! Loads, normalizes and persists the configuration of the optional Web
//! Processing Service. The public models and traits live in `wps-sdk` and are
//! re-exported here.
//!
//! ## Architecture
//!
//! - **Discovery**: process factories are read from an injected
//!   [`ProcessFactoryRegistry`] and mirrored into [`ProcessGroupInfo`] entries
//!   in a deterministic order
//! - **Normalization**: absent or zero-valued fields get fixed defaults,
//!   present values are never overwritten
//! - **Persistence**: the service document is stored as YAML under the module's
//!   data directory

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === PUBLIC API (from SDK) ===
pub use wps_sdk::{
    DEFAULT_CONNECTION_TIMEOUT, DEFAULT_VERSION, MetadataMap, ProcessFactory,
    ProcessFactoryRegistry, ProcessGroupInfo, QualifiedName, QualifiedNameConverter, ServiceInfo,
    SingleValueConverter, Version, WPS_SERVICE_ID, WpsError, WpsInfo,
};

// === MODULE DEFINITION ===
pub mod module;
pub use module::WpsModule;

// === CONFIGURATION ===
pub mod config;

// === INTERNAL MODULES ===
pub mod domain;
pub mod infra;

pub use domain::{ProcessGroupDiscovery, ServiceLoader, WpsServiceLoader, normalize};
pub use infra::{InMemoryProcessFactoryRegistry, ServicePersister, StaticProcessFactory};
