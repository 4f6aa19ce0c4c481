//! Domain layer for the WPS module.
//!
//! Contains process group discovery, service normalization and the service
//! loader contract.

pub mod discovery;
pub mod loader;
pub mod normalizer;

pub use discovery::{ProcessGroupDiscovery, compare_factories};
pub use loader::{ServiceLoader, WpsServiceLoader};
pub use normalizer::normalize;
