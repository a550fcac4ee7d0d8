//! Store registry: ordered fan-out to named state containers.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Boxed error type returned by a store's `reset`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A reset payload: a mapping from store name to that store's slice.
pub type ResetData = serde_json::Map<String, Value>;

/// A named, resettable unit of application state.
///
/// Each store has two observable states, initialized-empty and populated,
/// toggled only by `reset`. Only the store's own `reset` mutates it; the
/// registry never reaches into a store's internals.
pub trait Store: Send + Sync {
    /// Resets this store to the given slice, or clears it on `None`.
    ///
    /// Expected never to fail. A failure is not recovered by the registry:
    /// it aborts the remaining resets of the current fan-out.
    ///
    /// # Errors
    ///
    /// Implementations that cannot apply the slice return their own error;
    /// the registry wraps it in [`StoreResetError`].
    fn reset(&self, slice: Option<Value>) -> Result<(), BoxError>;
}

/// Error returned when a store's `reset` fails during a registry fan-out.
///
/// Carries the failing store's registry name; stores registered after it
/// were not reset.
#[derive(Debug, Error)]
#[error("store {name} failed to reset")]
pub struct StoreResetError {
    name: String,
    #[source]
    source: BoxError,
}

impl StoreResetError {
    /// Returns the registry name of the store whose reset failed.
    #[must_use]
    pub fn store_name(&self) -> &str {
        &self.name
    }
}

/// The fixed, ordered collection of all stores.
///
/// Built once via [`StoreRegistry::builder`] and never mutated afterwards.
/// Iteration order is registration order, for both [`for_each`] and
/// [`reset`].
///
/// # Thread Safety
///
/// `StoreRegistry` is `Send + Sync`. No locking is involved: the registry
/// is immutable after build, and stores mutate only themselves behind their
/// own interior mutability. Reentrant `reset` calls from within a visitor
/// are disallowed by convention.
///
/// [`for_each`]: StoreRegistry::for_each
/// [`reset`]: StoreRegistry::reset
///
/// # Example
///
/// ```rust
/// use graphql_api::{BoxError, Store, StoreRegistry};
/// use serde_json::Value;
/// use std::sync::Mutex;
///
/// struct RepoStore {
///     state: Mutex<Option<Value>>,
/// }
///
/// impl Store for RepoStore {
///     fn reset(&self, slice: Option<Value>) -> Result<(), BoxError> {
///         *self.state.lock().unwrap() = slice;
///         Ok(())
///     }
/// }
///
/// let registry = StoreRegistry::builder()
///     .register("RepoStore", RepoStore { state: Mutex::new(None) })
///     .build();
///
/// // Full clear: every store receives None.
/// registry.reset(None).unwrap();
/// ```
#[derive(Default)]
pub struct StoreRegistry {
    /// Name/instance pairs in registration order.
    stores: Vec<(String, Box<dyn Store>)>,
}

impl fmt::Debug for StoreRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreRegistry")
            .field("stores", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

// Verify StoreRegistry is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreRegistry>();
};

impl StoreRegistry {
    /// Creates a new builder for constructing a registry.
    #[must_use]
    pub fn builder() -> StoreRegistryBuilder {
        StoreRegistryBuilder::default()
    }

    /// Returns the number of registered stores.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    /// Returns `true` if no stores are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    /// Returns the registered store names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stores.iter().map(|(name, _)| name.as_str())
    }

    /// Invokes `visitor` once per registered store, in registration order,
    /// passing the store instance and its registry name.
    ///
    /// Visitors must not trigger a reentrant `reset`.
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(&dyn Store, &str),
    {
        for (name, store) in &self.stores {
            visitor(store.as_ref(), name);
        }
    }

    /// Resets every store, in registration order, with its slice of `data`.
    ///
    /// With `None`, every store receives `None`, a full clear. With a
    /// payload, each store receives the value under its own name; a store
    /// the payload does not mention receives `None`, so a partial payload
    /// clears the stores it omits.
    ///
    /// # Errors
    ///
    /// A store's failure propagates immediately as [`StoreResetError`] and
    /// aborts the resets of all later-registered stores.
    pub fn reset(&self, data: Option<&ResetData>) -> Result<(), StoreResetError> {
        for (name, store) in &self.stores {
            let slice = data.and_then(|data| data.get(name.as_str())).cloned();
            store.reset(slice).map_err(|source| StoreResetError {
                name: name.clone(),
                source,
            })?;
        }
        Ok(())
    }
}

/// Builder for constructing a [`StoreRegistry`].
///
/// Registration order is preserved; re-registering a name replaces the
/// store while keeping its original position.
#[derive(Default)]
pub struct StoreRegistryBuilder {
    stores: Vec<(String, Box<dyn Store>)>,
}

impl StoreRegistryBuilder {
    /// Registers a store under the given name.
    #[must_use]
    pub fn register(mut self, name: impl Into<String>, store: impl Store + 'static) -> Self {
        let name = name.into();
        match self.stores.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = Box::new(store),
            None => self.stores.push((name, Box::new(store))),
        }
        self
    }

    /// Builds the registry. The registry is immutable from here on.
    #[must_use]
    pub fn build(self) -> StoreRegistry {
        StoreRegistry {
            stores: self.stores,
        }
    }
}
