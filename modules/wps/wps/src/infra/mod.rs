//! Infrastructure layer: document storage and the in-process factory registry.

pub mod registry;
pub mod storage;

pub use registry::{InMemoryProcessFactoryRegistry, StaticProcessFactory};
pub use storage::ServicePersister;
