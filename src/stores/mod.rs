//! Named, resettable application state containers and their registry.
//!
//! A [`StoreRegistry`] is a fixed, ordered collection of named [`Store`]
//! instances built once at process initialization and dependency-injected
//! into consumers. Consumers fan out through [`StoreRegistry::for_each`] and
//! [`StoreRegistry::reset`]; they never index the registry directly.

mod registry;

pub use registry::{
    BoxError, ResetData, Store, StoreRegistry, StoreRegistryBuilder, StoreResetError,
};
