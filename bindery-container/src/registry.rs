//! Binding registry — stores one binding per key.
//!
//! A [`Binding`] maps a [`TypeKey`] to the factory that produces its
//! instances, together with the cache slot used by Singleton scope.

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use once_cell::sync::OnceCell;
use tracing::{debug, trace};

use crate::container::Container;
use crate::error::{AlreadyBoundError, ContainerError, Result};
use crate::instance::Instance;
use crate::key::TypeKey;
use crate::scope::Scope;

/// Type alias for factory functions.
///
/// A factory receives the container performing the resolution, so it can
/// resolve its own dependencies (or hand out the container itself).
///
/// `Arc` rather than `Box`: a binding is shared between every thread that
/// resolves it.
pub type FactoryFn = Arc<dyn Fn(&Container) -> Result<Instance> + Send + Sync>;

/// What a key is bound to.
///
/// These are the three binding shapes; pick the scope separately.
#[derive(Clone)]
pub enum Target {
    /// Bind the key to itself: construct the type directly. Only valid
    /// for instantiable types.
    SelfType,
    /// Bind an abstraction to another type. The target is resolved lazily
    /// on every resolution, so it may itself be an abstraction bound later.
    Type(TypeKey),
    /// Bind the key to a custom factory. No type checks apply.
    Factory(FactoryFn),
}

impl Target {
    /// Bind to the type named by `key`.
    pub fn to(key: impl Into<TypeKey>) -> Self {
        Target::Type(key.into())
    }

    /// Bind to the Rust type `T`.
    pub fn to_type<T: ?Sized + 'static>() -> Self {
        Target::Type(TypeKey::of::<T>())
    }

    /// Bind to a factory returning an [`Instance`].
    pub fn factory(
        factory: impl Fn(&Container) -> Result<Instance> + Send + Sync + 'static,
    ) -> Self {
        Target::Factory(Arc::new(factory))
    }

    /// Bind to a factory returning a plain value.
    pub fn typed<T: Send + Sync + 'static>(
        factory: impl Fn(&Container) -> Result<T> + Send + Sync + 'static,
    ) -> Self {
        Target::Factory(Arc::new(move |container: &Container| {
            Ok(Instance::new(factory(container)?))
        }))
    }

    pub(crate) fn describe(&self) -> BindingTarget {
        match self {
            Target::SelfType => BindingTarget::SelfType,
            Target::Type(key) => BindingTarget::Type(key.clone()),
            Target::Factory(_) => BindingTarget::Factory,
        }
    }
}

impl From<TypeKey> for Target {
    fn from(key: TypeKey) -> Self {
        Target::Type(key)
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.describe().fmt(f)
    }
}

/// Description of a binding's target, without the factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingTarget {
    SelfType,
    Type(TypeKey),
    Factory,
}

/// Read-only view of a binding, as returned by
/// [`Container::bindings`](crate::container::Container::bindings).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingInfo {
    pub key: TypeKey,
    pub target: BindingTarget,
    pub scope: Scope,
    /// `true` once a Singleton binding holds its instance.
    pub cached: bool,
}

/// Registration entry for a single key.
pub(crate) struct Binding {
    pub key: TypeKey,
    pub target: BindingTarget,
    pub scope: Scope,
    /// Installed by `resolve` on a miss rather than by an explicit bind.
    pub implicit: bool,
    factory: FactoryFn,
    instance: OnceCell<Instance>,
}

impl Binding {
    pub fn new(key: TypeKey, target: BindingTarget, scope: Scope, factory: FactoryFn) -> Self {
        Self {
            key,
            target,
            scope,
            implicit: false,
            factory,
            instance: OnceCell::new(),
        }
    }

    /// Runs the factory according to the binding's scope.
    ///
    /// Singleton: the first successful call fills the slot, every later call
    /// returns the same instance. Threads racing on an empty slot block
    /// until the winner finishes, so the factory runs at most once. A
    /// failed factory leaves the slot empty.
    pub fn produce(&self, container: &Container) -> Result<Instance> {
        if !self.scope.is_cached() {
            return (self.factory)(container);
        }

        self.instance
            .get_or_try_init(|| {
                trace!(key = %self.key, "Creating singleton instance");
                (self.factory)(container)
            })
            .cloned()
    }

    pub fn info(&self) -> BindingInfo {
        BindingInfo {
            key: self.key.clone(),
            target: self.target.clone(),
            scope: self.scope,
            cached: self.instance.get().is_some(),
        }
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("key", &self.key)
            .field("target", &self.target)
            .field("scope", &self.scope)
            .field("implicit", &self.implicit)
            .field("cached", &self.instance.get().is_some())
            .finish()
    }
}

/// Stores all bindings of a container.
///
/// Lookups hand out `Arc<Binding>` clones so no map lock is held while a
/// factory runs.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    bindings: DashMap<TypeKey, Arc<Binding>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a binding, replacing any previous binding for the key
    /// (and with it, any cached singleton instance).
    ///
    /// # Errors
    /// Returns [`ContainerError::AlreadyBound`] if the key is already
    /// explicitly bound and `allow_override` is false. A binding installed
    /// by [`install_if_absent`](Self::install_if_absent) is always replaced.
    pub fn install(&self, binding: Binding, allow_override: bool) -> Result<Arc<Binding>> {
        let key = binding.key.clone();
        let binding = Arc::new(binding);

        match self.bindings.entry(key) {
            Entry::Occupied(mut entry) => {
                if !allow_override && !entry.get().implicit {
                    return Err(ContainerError::AlreadyBound(AlreadyBoundError {
                        key: entry.key().clone(),
                    }));
                }
                debug!(key = %entry.key(), scope = %binding.scope, "Replaced binding");
                entry.insert(binding.clone());
            }
            Entry::Vacant(entry) => {
                debug!(key = %entry.key(), scope = %binding.scope, "Bound");
                entry.insert(binding.clone());
            }
        }

        Ok(binding)
    }

    /// Installs `binding` unless the key got bound in the meantime, and
    /// returns whichever binding ends up registered. The new binding is
    /// marked implicit.
    pub fn install_if_absent(&self, mut binding: Binding) -> Arc<Binding> {
        binding.implicit = true;
        self.bindings
            .entry(binding.key.clone())
            .or_insert_with(|| {
                debug!(key = %binding.key, scope = %binding.scope, "Bound implicitly");
                Arc::new(binding)
            })
            .value()
            .clone()
    }

    /// Looks up the binding for `key` (no alias following).
    pub fn get(&self, key: &TypeKey) -> Option<Arc<Binding>> {
        self.bindings.get(key).map(|entry| entry.value().clone())
    }

    /// Returns `true` if `key` has a binding.
    pub fn contains(&self, key: &TypeKey) -> bool {
        self.bindings.contains_key(key)
    }

    /// Returns the number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Snapshot of every binding, sorted by key.
    pub fn infos(&self) -> Vec<BindingInfo> {
        let mut infos: Vec<BindingInfo> = self
            .bindings
            .iter()
            .map(|entry| entry.value().info())
            .collect();
        infos.sort_by(|a, b| a.key.cmp(&b.key));
        infos
    }

    /// Every bound key, sorted.
    pub fn keys(&self) -> Vec<TypeKey> {
        let mut keys: Vec<TypeKey> = self.bindings.iter().map(|entry| entry.key().clone()).collect();
        keys.sort();
        keys
    }
}
