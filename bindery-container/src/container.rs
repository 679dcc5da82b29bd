//! # The Container — binding and resolution
//!
//! The container maps keys (abstract types, concrete types, aliases) to
//! factories and produces instances on demand.
//!
//! # Architecture
//! ```text
//! resolve(key)
//!    │  alias table: key → … → canonical key
//!    ▼
//! binding registry ──miss──> bind(key, SelfType, Temporal)   (auto_bind)
//!    │
//!    ▼
//! binding.produce(container)   Temporal: call factory
//!                              Singleton: call factory once, then cache
//! ```
//!
//! Binding an abstraction to another type does not validate the whole
//! chain: the installed factory resolves the target again at call time, so
//! `dyn Outer → dyn Inner → Concrete` works as long as `dyn Inner` is bound
//! by the time `dyn Outer` is resolved.
//!
//! # Examples
//! ```rust
//! use bindery_container::prelude::*;
//! use std::sync::Arc;
//!
//! trait Logger: Send + Sync {
//!     fn log(&self, msg: &str) -> String;
//! }
//!
//! #[derive(Default)]
//! struct ConsoleLogger;
//! impl Logger for ConsoleLogger {
//!     fn log(&self, msg: &str) -> String { format!("[console] {msg}") }
//! }
//!
//! let types = TypeCatalog::builder()
//!     .abstract_type::<dyn Logger>()
//!     .concrete::<ConsoleLogger>()
//!     .implements::<ConsoleLogger, dyn Logger>(|l| l as Arc<dyn Logger>)
//!     .build();
//!
//! let container = Container::new(types);
//! container
//!     .singleton(TypeKey::of::<dyn Logger>(), Target::to_type::<ConsoleLogger>())
//!     .expect("valid binding");
//! container.alias("logger", TypeKey::of::<dyn Logger>()).expect("valid alias");
//!
//! let logger: Arc<dyn Logger> = container.resolve_dyn("logger").expect("resolves");
//! assert_eq!(logger.log("hi"), "[console] hi");
//! ```

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use bindery_support::rendering::suggest_similar;
use tracing::{debug, info, instrument, trace};

use crate::alias::AliasTable;
use crate::catalog::TypeIntrospector;
use crate::error::{
    ContainerError, InvalidBindingError, InvalidBindingReason, NotBoundError, Result,
};
use crate::graph::GraphValidator;
use crate::guard::ResolutionGuard;
use crate::instance::Instance;
use crate::key::TypeKey;
use crate::provider::{Binder, Provider};
use crate::registry::{Binding, BindingInfo, FactoryFn, Registry, Target};
use crate::scope::Scope;
use crate::settings::ContainerSettings;

const MAX_SUGGESTIONS: usize = 3;

// ============================================================
// ContainerBuilder
// ============================================================

/// Builds a [`Container`] with custom settings and providers.
///
/// # Examples
/// ```rust,ignore
/// let container = Container::builder(types)
///     .auto_bind(false)
///     .add_provider(MailProvider)
///     .validate_on_build(true)
///     .build()?;
/// ```
pub struct ContainerBuilder {
    types: Arc<dyn TypeIntrospector>,
    settings: ContainerSettings,
    providers: Vec<Box<dyn Provider>>,
}

impl ContainerBuilder {
    fn new(types: Arc<dyn TypeIntrospector>) -> Self {
        Self {
            types,
            settings: ContainerSettings::default(),
            providers: Vec::new(),
        }
    }

    /// Replace all settings at once.
    pub fn settings(mut self, settings: ContainerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Bind unbound keys to themselves on resolve.
    pub fn auto_bind(mut self, enabled: bool) -> Self {
        self.settings.auto_bind = enabled;
        self
    }

    /// Allow replacing existing bindings.
    ///
    /// Self-bindings that `resolve` installs on a miss never count as
    /// existing: an explicit bind replaces them even when this is off.
    pub fn allow_override(mut self, allow: bool) -> Self {
        self.settings.allow_override = allow;
        self
    }

    /// Maximum nesting of resolutions on one thread.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.settings.max_depth = depth;
        self
    }

    /// Validate the binding graph at the end of [`build`](Self::build).
    pub fn validate_on_build(mut self, enabled: bool) -> Self {
        self.settings.validate_on_build = enabled;
        self
    }

    /// Add a [`Provider`] module, registered during [`build`](Self::build).
    pub fn add_provider(mut self, provider: impl Provider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Build the container and run its providers.
    ///
    /// # Errors
    /// Whatever a provider's bindings fail with, or a graph validation
    /// error when `validate_on_build` is set.
    #[instrument(skip(self), name = "container_build")]
    pub fn build(self) -> Result<Container> {
        info!(providers = self.providers.len(), "Building container");

        let validate = self.settings.validate_on_build;
        let container = Container::from_parts(self.types, self.settings);

        for provider in &self.providers {
            container.add_provider(provider.as_ref())?;
        }

        if validate {
            container.validate()?;
        }

        info!(bindings = container.inner.registry.len(), "Container built");
        Ok(container)
    }
}

// ═══════════════════════════════════════════
// Container
// ═══════════════════════════════════════════

struct ContainerInner {
    types: Arc<dyn TypeIntrospector>,
    settings: ContainerSettings,
    aliases: AliasTable,
    registry: Registry,
}

/// Thread-safe binding-and-resolution container.
///
/// `Container` is a handle: clones share the same bindings, aliases and
/// singleton instances. Independent containers share nothing.
///
/// Every operation takes `&self`. Resolutions may run concurrently with
/// each other and with `bind`/`alias`; a resolution racing a rebind sees
/// either the old or the new binding.
#[derive(Clone)]
pub struct Container {
    inner: Arc<ContainerInner>,
}

impl Container {
    /// Create a container with default settings.
    pub fn new(types: impl TypeIntrospector + 'static) -> Self {
        Self::from_parts(Arc::new(types), ContainerSettings::default())
    }

    /// Create a builder.
    pub fn builder(types: impl TypeIntrospector + 'static) -> ContainerBuilder {
        ContainerBuilder::new(Arc::new(types))
    }

    fn from_parts(types: Arc<dyn TypeIntrospector>, settings: ContainerSettings) -> Self {
        Self {
            inner: Arc::new(ContainerInner {
                types,
                settings,
                aliases: AliasTable::new(),
                registry: Registry::new(),
            }),
        }
    }

    /// The settings this container was built with.
    pub fn settings(&self) -> &ContainerSettings {
        &self.inner.settings
    }

    /// The type information used to validate bindings.
    pub fn types(&self) -> &dyn TypeIntrospector {
        self.inner.types.as_ref()
    }

    /// `true` if both handles point to the same container.
    pub fn ptr_eq(a: &Container, b: &Container) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    fn id(&self) -> usize {
        Arc::as_ptr(&self.inner) as usize
    }

    // ── Resolution ──

    /// Resolve `key` to an instance.
    ///
    /// Aliases are followed first. If the resulting key has no binding it
    /// is bound to itself with Temporal scope (unless `auto_bind` is off),
    /// which succeeds only for instantiable types.
    ///
    /// # Errors
    /// - [`ContainerError::InvalidBinding`] if the implicit self-binding is
    ///   rejected (unknown name, unbound abstraction)
    /// - [`ContainerError::NotBound`] if the key is unbound and `auto_bind`
    ///   is off
    /// - [`ContainerError::AliasCycle`], [`ContainerError::CircularDependency`],
    ///   [`ContainerError::DepthExceeded`]
    /// - anything a factory returns, unchanged
    pub fn resolve(&self, key: impl Into<TypeKey>) -> Result<Instance> {
        let requested = key.into();
        let key = self.inner.aliases.canonical(&requested)?;
        trace!(requested = %requested, key = %key, "Resolving");

        let required_by = ResolutionGuard::current(self.id());
        let _guard = ResolutionGuard::enter(self.id(), &key, self.inner.settings.max_depth)?;

        let binding = match self.inner.registry.get(&key) {
            Some(binding) => binding,
            None => self.bind_on_miss(&key, required_by)?,
        };

        binding.produce(self)
    }

    /// Resolve `key` and downcast the instance to `T`.
    ///
    /// # Errors
    /// As [`resolve`](Self::resolve), plus [`ContainerError::TypeMismatch`].
    pub fn resolve_as<T: Send + Sync + 'static>(&self, key: impl Into<TypeKey>) -> Result<Arc<T>> {
        let key = key.into();
        self.resolve(&key)?.downcast_for::<T>(&key)
    }

    /// Resolve `key` as the trait object `I`.
    ///
    /// Works when the instance is an `Arc<I>` produced by a factory, or when
    /// the catalog declares an upcast from the instance's concrete type to
    /// `I` (see [`TypeCatalogBuilder::implements`](crate::catalog::TypeCatalogBuilder::implements)).
    ///
    /// # Errors
    /// As [`resolve`](Self::resolve), plus [`ContainerError::TypeMismatch`].
    pub fn resolve_dyn<I>(&self, key: impl Into<TypeKey>) -> Result<Arc<I>>
    where
        I: ?Sized + Send + Sync + 'static,
    {
        let key = key.into();
        let instance = self.resolve(&key)?;

        if let Some(shared) = instance.downcast::<Arc<I>>() {
            return Ok(Arc::clone(&*shared));
        }

        let mismatch = || ContainerError::TypeMismatch {
            key: key.clone(),
            expected: type_name::<I>(),
            actual: instance.type_key().clone(),
        };

        let boxed = self
            .inner
            .types
            .cast(&instance, &TypeKey::of::<I>())
            .ok_or_else(mismatch)?;

        boxed
            .downcast::<Arc<I>>()
            .map(|shared| *shared)
            .map_err(|_| mismatch())
    }

    /// Resolve the Rust type `T` by its own key.
    ///
    /// ```rust,ignore
    /// let config: Arc<Config> = container.get()?;
    /// ```
    pub fn get<T: Send + Sync + 'static>(&self) -> Result<Arc<T>> {
        self.resolve_as::<T>(TypeKey::of::<T>())
    }

    /// Resolve the trait object `I` by its own key.
    pub fn get_dyn<I: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<I>> {
        self.resolve_dyn::<I>(TypeKey::of::<I>())
    }

    /// `true` if `key` itself has a binding. Aliases are not followed.
    pub fn is_bound(&self, key: impl Into<TypeKey>) -> bool {
        self.inner.registry.contains(&key.into())
    }

    /// `true` if `key` is a declared alias.
    pub fn is_alias(&self, key: impl Into<TypeKey>) -> bool {
        self.inner.aliases.is_alias(&key.into())
    }

    fn bind_on_miss(&self, key: &TypeKey, required_by: Option<TypeKey>) -> Result<Arc<Binding>> {
        if !self.inner.settings.auto_bind {
            return Err(ContainerError::NotBound(NotBoundError {
                requested: key.clone(),
                required_by,
                suggestions: self.bound_suggestions(key),
            }));
        }

        debug!(key = %key, "Binding unbound key to itself");
        let binding = self.make_binding(key.clone(), Target::SelfType, Scope::Temporal)?;
        Ok(self.inner.registry.install_if_absent(binding))
    }

    // ── Binding ──

    /// Bind `key` to `target` with the given scope.
    ///
    /// A later bind for the same key replaces this one, dropping any cached
    /// singleton instance. A rejected bind changes nothing.
    ///
    /// # Errors
    /// - [`ContainerError::InvalidBinding`] when `key` (or a type target) is
    ///   not a known type, when an instantiable `key` is bound to a
    ///   different type, or when an abstract `key` is bound to a type that
    ///   is not a strict subtype of it
    /// - [`ContainerError::AlreadyBound`] when overriding is disabled
    pub fn bind(&self, key: impl Into<TypeKey>, target: Target, scope: Scope) -> Result<()> {
        let binding = self.make_binding(key.into(), target, scope)?;
        self.inner
            .registry
            .install(binding, self.inner.settings.allow_override)?;
        Ok(())
    }

    /// Bind an instantiable type to itself.
    pub fn bind_self(&self, key: impl Into<TypeKey>, scope: Scope) -> Result<()> {
        self.bind(key, Target::SelfType, scope)
    }

    /// Bind an abstraction to another type.
    pub fn bind_type(
        &self,
        key: impl Into<TypeKey>,
        concrete: impl Into<TypeKey>,
        scope: Scope,
    ) -> Result<()> {
        self.bind(key, Target::Type(concrete.into()), scope)
    }

    /// Bind `key` to a custom factory.
    pub fn bind_factory(
        &self,
        key: impl Into<TypeKey>,
        factory: impl Fn(&Container) -> Result<Instance> + Send + Sync + 'static,
        scope: Scope,
    ) -> Result<()> {
        self.bind(key, Target::factory(factory), scope)
    }

    /// Shorthand for `bind(key, target, Scope::Singleton)`.
    pub fn singleton(&self, key: impl Into<TypeKey>, target: Target) -> Result<()> {
        self.bind(key, target, Scope::Singleton)
    }

    /// Shorthand for `bind(key, target, Scope::Temporal)`.
    pub fn temporal(&self, key: impl Into<TypeKey>, target: Target) -> Result<()> {
        self.bind(key, target, Scope::Temporal)
    }

    /// Make `alias` resolve as `target`. The target does not need to be
    /// bound (or even exist) yet.
    ///
    /// # Errors
    /// [`ContainerError::InvalidArgument`] for malformed names or an alias
    /// pointing at itself.
    pub fn alias(&self, alias: impl Into<TypeKey>, target: impl Into<TypeKey>) -> Result<()> {
        self.inner.aliases.declare(alias.into(), target.into())
    }

    /// Register a provider's bindings into this container.
    pub fn add_provider(&self, provider: &dyn Provider) -> Result<()> {
        debug!(provider = provider.name(), "Registering provider");
        provider.register(self)
    }

    /// Validates the binding graph without resolving anything.
    ///
    /// Checks that alias chains end, that type targets do not form cycles,
    /// and that every type target can be resolved. Factory bindings are
    /// opaque and always pass.
    #[instrument(skip(self), name = "container_validate")]
    pub fn validate(&self) -> Result<()> {
        let mut validator = GraphValidator::new(
            self.inner.registry.infos(),
            &self.inner.aliases,
            self.inner.types.as_ref(),
            self.inner.settings.auto_bind,
        );
        validator.validate()
    }

    /// Snapshot of every binding, sorted by key.
    pub fn bindings(&self) -> Vec<BindingInfo> {
        self.inner.registry.infos()
    }

    /// Snapshot of every alias, sorted by alias name.
    pub fn aliases(&self) -> Vec<(TypeKey, TypeKey)> {
        self.inner.aliases.entries()
    }

    // ── Internal ──

    /// Validates a binding request and builds the binding to install.
    fn make_binding(&self, key: TypeKey, target: Target, scope: Scope) -> Result<Binding> {
        if !self.inner.types.type_exists(&key) {
            let suggestions = self.type_suggestions(&key);
            return Err(self.invalid(key, InvalidBindingReason::AbstractNotFound, suggestions));
        }

        let described = target.describe();
        let factory = match target {
            Target::Factory(factory) => factory,
            Target::SelfType => self.type_factory(&key, key.clone())?,
            Target::Type(concrete) => self.type_factory(&key, concrete)?,
        };

        Ok(Binding::new(key, described, scope, factory))
    }

    /// Factory for `key` bound to the type `concrete`.
    fn type_factory(&self, key: &TypeKey, concrete: TypeKey) -> Result<FactoryFn> {
        let types = &self.inner.types;

        if !types.type_exists(&concrete) {
            let suggestions = self.type_suggestions(&concrete);
            return Err(self.invalid(
                key.clone(),
                InvalidBindingReason::ConcreteNotFound { concrete },
                suggestions,
            ));
        }

        if types.is_instantiable(key) {
            if &concrete != key {
                return Err(self.invalid(
                    key.clone(),
                    InvalidBindingReason::NotAbstract { concrete },
                    Vec::new(),
                ));
            }
            return Ok(Arc::new(move |container: &Container| {
                container.inner.types.construct(&concrete)
            }));
        }

        if !types.is_subtype_of(&concrete, key) {
            return Err(self.invalid(
                key.clone(),
                InvalidBindingReason::NotASubtype { concrete },
                Vec::new(),
            ));
        }

        Ok(Arc::new(move |container: &Container| container.resolve(&concrete)))
    }

    fn invalid(
        &self,
        key: TypeKey,
        reason: InvalidBindingReason,
        suggestions: Vec<TypeKey>,
    ) -> ContainerError {
        debug!(key = %key, reason = ?reason, "Rejected binding");
        ContainerError::InvalidBinding(InvalidBindingError {
            key,
            reason,
            suggestions,
        })
    }

    fn type_suggestions(&self, key: &TypeKey) -> Vec<TypeKey> {
        suggest_keys(key, &self.inner.types.known_types())
    }

    fn bound_suggestions(&self, key: &TypeKey) -> Vec<TypeKey> {
        suggest_keys(key, &self.inner.registry.keys())
    }
}

pub(crate) fn suggest_keys(key: &TypeKey, available: &[TypeKey]) -> Vec<TypeKey> {
    let names: Vec<&str> = available.iter().map(TypeKey::as_str).collect();
    suggest_similar(key.as_str(), &names, MAX_SUGGESTIONS)
        .into_iter()
        .map(TypeKey::from)
        .collect()
}

impl Binder for Container {
    fn bind(&self, key: TypeKey, target: Target, scope: Scope) -> Result<()> {
        Container::bind(self, key, target, scope)
    }

    fn alias(&self, alias: TypeKey, target: TypeKey) -> Result<()> {
        Container::alias(self, alias, target)
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("bindings", &self.inner.registry.len())
            .field("aliases", &self.inner.aliases.len())
            .field("settings", &self.inner.settings)
            .finish()
    }
}

// ═══════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════

pub mod prelude {
    pub use super::{Container, ContainerBuilder};
    pub use crate::catalog::{TypeCatalog, TypeIntrospector};
    pub use crate::error::{ContainerError, Result};
    pub use crate::instance::Instance;
    pub use crate::key::TypeKey;
    pub use crate::provider::{Binder, Provider};
    pub use crate::registry::Target;
    pub use crate::scope::Scope;
    pub use crate::settings::ContainerSettings;
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TypeCatalog;
    use std::sync::atomic::{AtomicU32, Ordering};

    trait Greeter: Send + Sync {
        fn greet(&self) -> String;
    }

    #[derive(Default)]
    struct English;
    impl Greeter for English {
        fn greet(&self) -> String {
            "hello".into()
        }
    }

    #[derive(Debug, Default)]
    struct Counter;

    fn types() -> TypeCatalog {
        TypeCatalog::builder()
            .abstract_type::<dyn Greeter>()
            .concrete::<English>()
            .implements::<English, dyn Greeter>(|e| e as Arc<dyn Greeter>)
            .concrete::<Counter>()
            .build()
    }

    #[test]
    fn resolve_unbound_concrete_auto_binds() {
        let container = Container::new(types());
        assert!(!container.is_bound(TypeKey::of::<English>()));

        let instance = container.resolve(TypeKey::of::<English>()).unwrap();
        assert!(instance.is::<English>());
        assert!(container.is_bound(TypeKey::of::<English>()));
    }

    #[test]
    fn resolve_dyn_through_catalog_upcast() {
        let container = Container::new(types());
        container
            .bind_type(TypeKey::of::<dyn Greeter>(), TypeKey::of::<English>(), Scope::Temporal)
            .unwrap();

        let greeter = container.get_dyn::<dyn Greeter>().unwrap();
        assert_eq!(greeter.greet(), "hello");
    }

    #[test]
    fn resolve_dyn_from_factory_arc() {
        let container = Container::new(types());
        container
            .bind_factory(
                TypeKey::of::<dyn Greeter>(),
                |_| Ok(Instance::new(Arc::new(English) as Arc<dyn Greeter>)),
                Scope::Temporal,
            )
            .unwrap();

        let greeter: Arc<dyn Greeter> = container.get_dyn().unwrap();
        assert_eq!(greeter.greet(), "hello");
    }

    #[test]
    fn resolve_as_reports_type_mismatch() {
        let container = Container::new(types());
        let err = container
            .resolve_as::<Counter>(TypeKey::of::<English>())
            .unwrap_err();
        assert!(matches!(err, ContainerError::TypeMismatch { .. }));
    }

    #[test]
    fn typed_factory_singleton_called_once() {
        let calls = Arc::new(AtomicU32::new(0));
        let container = Container::new(types());

        container
            .singleton(
                TypeKey::of::<Counter>(),
                Target::typed({
                    let calls = calls.clone();
                    move |_| {
                        calls.fetch_add(1, Ordering::SeqCst);
                        Ok(Counter)
                    }
                }),
            )
            .unwrap();

        let a = container.resolve(TypeKey::of::<Counter>()).unwrap();
        let b = container.resolve(TypeKey::of::<Counter>()).unwrap();
        assert!(Instance::ptr_eq(&a, &b));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(container.bindings()[0].cached);
    }

    #[test]
    fn failed_singleton_factory_is_retried() {
        let calls = Arc::new(AtomicU32::new(0));
        let container = Container::new(types());

        container
            .bind_factory(
                TypeKey::of::<Counter>(),
                {
                    let calls = calls.clone();
                    move |_| {
                        if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                            Err(ContainerError::construction(TypeKey::of::<Counter>(), "not yet"))
                        } else {
                            Ok(Instance::new(Counter))
                        }
                    }
                },
                Scope::Singleton,
            )
            .unwrap();

        assert!(container.resolve(TypeKey::of::<Counter>()).is_err());
        assert!(container.resolve(TypeKey::of::<Counter>()).is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn strict_mode_reports_not_bound() {
        let container = Container::builder(types()).auto_bind(false).build().unwrap();

        match container.resolve(TypeKey::of::<English>()).unwrap_err() {
            ContainerError::NotBound(err) => {
                assert_eq!(err.requested, TypeKey::of::<English>());
            }
            other => panic!("Expected NotBound, got: {other:?}"),
        }
        assert!(!container.is_bound(TypeKey::of::<English>()));
    }

    #[test]
    fn override_disabled_rejects_rebind() {
        let container = Container::builder(types())
            .allow_override(false)
            .build()
            .unwrap();

        container.bind_self(TypeKey::of::<English>(), Scope::Temporal).unwrap();
        let err = container
            .bind_self(TypeKey::of::<English>(), Scope::Singleton)
            .unwrap_err();
        assert!(matches!(err, ContainerError::AlreadyBound(_)));
        assert_eq!(container.bindings()[0].scope, Scope::Temporal);
    }

    #[test]
    fn override_disabled_still_replaces_implicit_self_binding() {
        let container = Container::builder(types())
            .allow_override(false)
            .build()
            .unwrap();

        let first = container.resolve(TypeKey::of::<English>()).unwrap();
        container
            .singleton(TypeKey::of::<English>(), Target::SelfType)
            .unwrap();

        let a = container.resolve(TypeKey::of::<English>()).unwrap();
        let b = container.resolve(TypeKey::of::<English>()).unwrap();
        assert!(!Instance::ptr_eq(&first, &a));
        assert!(Instance::ptr_eq(&a, &b));
        assert!(container.singleton(TypeKey::of::<English>(), Target::SelfType).is_err());
    }

    #[test]
    fn factory_self_reference_is_a_cycle() {
        let container = Container::new(types());
        container
            .bind_factory(
                TypeKey::of::<Counter>(),
                |c| c.resolve(TypeKey::of::<Counter>()),
                Scope::Singleton,
            )
            .unwrap();

        let err = container.resolve(TypeKey::of::<Counter>()).unwrap_err();
        assert!(matches!(err, ContainerError::CircularDependency(_)));
    }

    #[test]
    fn unknown_type_error_suggests_known_types() {
        let container = Container::new(types());
        let misspelled = TypeKey::named(format!("{}s", TypeKey::of::<English>()));

        let err = container.resolve(misspelled).unwrap_err();
        match err {
            ContainerError::InvalidBinding(err) => {
                assert_eq!(err.reason, InvalidBindingReason::AbstractNotFound);
                assert!(err.suggestions.contains(&TypeKey::of::<English>()));
            }
            other => panic!("Expected InvalidBinding, got: {other:?}"),
        }
    }

    #[test]
    fn debug_display() {
        let container = Container::new(types());
        container.bind_self(TypeKey::of::<English>(), Scope::Temporal).unwrap();
        container.alias("en", TypeKey::of::<English>()).unwrap();

        let debug = format!("{container:?}");
        assert!(debug.contains("Container"));
        assert!(debug.contains("bindings: 1"));
        assert!(debug.contains("aliases: 1"));
    }
}
