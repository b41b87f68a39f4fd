//! Validated configuration types.

mod registry_url;

pub use registry_url::{DEFAULT_REGISTRY, RegistryUrl};
