//! Type introspection.
//!
//! The binder needs to answer four questions about a name: does the type
//! exist, can it be constructed, is it a subtype of another type, and how
//! is a default instance built. Rust has no runtime reflection for any of
//! this, so types describe themselves in a [`TypeCatalog`]:
//!
//! ```rust
//! use bindery_container::catalog::{TypeCatalog, TypeIntrospector};
//! use bindery_container::key::TypeKey;
//! use std::sync::Arc;
//!
//! trait Storage: Send + Sync {}
//!
//! #[derive(Default)]
//! struct MemoryStorage;
//! impl Storage for MemoryStorage {}
//!
//! let catalog = TypeCatalog::builder()
//!     .abstract_type::<dyn Storage>()
//!     .concrete::<MemoryStorage>()
//!     .implements::<MemoryStorage, dyn Storage>(|s| s as Arc<dyn Storage>)
//!     .build();
//!
//! let storage = TypeKey::of::<dyn Storage>();
//! let memory = TypeKey::of::<MemoryStorage>();
//! assert!(catalog.type_exists(&storage));
//! assert!(!catalog.is_instantiable(&storage));
//! assert!(catalog.is_subtype_of(&memory, &storage));
//! ```
//!
//! Types can also register themselves from anywhere in the binary with
//! [`register_types!`](crate::register_types) and be collected with
//! [`TypeCatalogBuilder::with_registered`].

use std::any::Any;
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::error::{ContainerError, Result};
use crate::instance::Instance;
use crate::key::TypeKey;

/// Builds a default instance of a concrete type.
pub type Constructor = Arc<dyn Fn() -> Instance + Send + Sync>;

/// Turns an instance into a boxed `Arc<dyn Trait>`.
type Caster = Arc<dyn Fn(&Instance) -> Option<Box<dyn Any + Send + Sync>> + Send + Sync>;

/// Answers the binder's questions about types.
///
/// [`TypeCatalog`] is the stock implementation; implement this trait to
/// plug in another source of type information.
pub trait TypeIntrospector: Send + Sync {
    /// `true` if `key` names a known type, abstract or concrete.
    fn type_exists(&self, key: &TypeKey) -> bool;

    /// `true` if `key` names a type that can be constructed directly.
    fn is_instantiable(&self, key: &TypeKey) -> bool;

    /// `true` if `concrete` is a strict subtype of (or implements)
    /// `abstract_type`. A type is never its own strict subtype.
    fn is_subtype_of(&self, concrete: &TypeKey, abstract_type: &TypeKey) -> bool;

    /// Builds a default instance of an instantiable type.
    fn construct(&self, key: &TypeKey) -> Result<Instance>;

    /// Converts `instance` into a boxed `Arc<I>` where `I` is the type
    /// named by `target` (usually a `dyn Trait`).
    fn cast(&self, _instance: &Instance, _target: &TypeKey) -> Option<Box<dyn Any + Send + Sync>> {
        None
    }

    /// Every known type, used for "did you mean?" suggestions.
    fn known_types(&self) -> Vec<TypeKey> {
        Vec::new()
    }
}

impl<T: TypeIntrospector + ?Sized> TypeIntrospector for Arc<T> {
    fn type_exists(&self, key: &TypeKey) -> bool {
        (**self).type_exists(key)
    }

    fn is_instantiable(&self, key: &TypeKey) -> bool {
        (**self).is_instantiable(key)
    }

    fn is_subtype_of(&self, concrete: &TypeKey, abstract_type: &TypeKey) -> bool {
        (**self).is_subtype_of(concrete, abstract_type)
    }

    fn construct(&self, key: &TypeKey) -> Result<Instance> {
        (**self).construct(key)
    }

    fn cast(&self, instance: &Instance, target: &TypeKey) -> Option<Box<dyn Any + Send + Sync>> {
        (**self).cast(instance, target)
    }

    fn known_types(&self) -> Vec<TypeKey> {
        (**self).known_types()
    }
}

/// How a declared type can be used.
#[derive(Clone)]
pub enum TypeKind {
    /// Constructible through its constructor.
    Concrete(Constructor),
    /// An abstraction (trait object): must be bound to an implementation.
    Abstract,
    /// Known, but only a factory can produce it.
    Opaque,
}

impl fmt::Debug for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Concrete(_) => write!(f, "Concrete"),
            TypeKind::Abstract => write!(f, "Abstract"),
            TypeKind::Opaque => write!(f, "Opaque"),
        }
    }
}

/// A static registry of types: kinds, supertype edges and upcasts.
///
/// Immutable once built; share it between containers with an `Arc`.
pub struct TypeCatalog {
    types: HashMap<TypeKey, TypeKind>,
    supertypes: HashMap<TypeKey, BTreeSet<TypeKey>>,
    casts: HashMap<(TypeKey, TypeKey), Caster>,
}

impl TypeCatalog {
    /// Creates a new builder.
    pub fn builder() -> TypeCatalogBuilder {
        TypeCatalogBuilder::new()
    }

    /// Kind of a declared type.
    pub fn kind(&self, key: &TypeKey) -> Option<&TypeKind> {
        self.types.get(key)
    }

    /// Number of declared types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if no types are declared.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeIntrospector for TypeCatalog {
    fn type_exists(&self, key: &TypeKey) -> bool {
        self.types.contains_key(key)
    }

    fn is_instantiable(&self, key: &TypeKey) -> bool {
        matches!(self.types.get(key), Some(TypeKind::Concrete(_)))
    }

    fn is_subtype_of(&self, concrete: &TypeKey, abstract_type: &TypeKey) -> bool {
        // Breadth-first over declared supertype edges. Starting from the
        // direct supertypes keeps the relation strict.
        let mut seen: HashSet<&TypeKey> = HashSet::new();
        let mut queue: VecDeque<&TypeKey> = VecDeque::new();

        if let Some(direct) = self.supertypes.get(concrete) {
            queue.extend(direct.iter());
        }

        while let Some(current) = queue.pop_front() {
            if current == abstract_type {
                trace!(concrete = %concrete, abstract_type = %abstract_type, "Subtype edge found");
                return true;
            }
            if !seen.insert(current) {
                continue;
            }
            if let Some(next) = self.supertypes.get(current) {
                queue.extend(next.iter());
            }
        }

        false
    }

    fn construct(&self, key: &TypeKey) -> Result<Instance> {
        match self.types.get(key) {
            Some(TypeKind::Concrete(constructor)) => Ok(constructor()),
            Some(kind) => Err(ContainerError::construction(
                key.clone(),
                format!("{kind:?} type cannot be constructed"),
            )),
            None => Err(ContainerError::construction(key.clone(), "unknown type")),
        }
    }

    fn cast(&self, instance: &Instance, target: &TypeKey) -> Option<Box<dyn Any + Send + Sync>> {
        let caster = self
            .casts
            .get(&(instance.type_key().clone(), target.clone()))?;
        caster(instance)
    }

    fn known_types(&self) -> Vec<TypeKey> {
        let mut keys: Vec<TypeKey> = self.types.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl fmt::Debug for TypeCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeCatalog")
            .field("types", &self.types.len())
            .field("supertype_edges", &self.supertypes.values().map(BTreeSet::len).sum::<usize>())
            .field("casts", &self.casts.len())
            .finish()
    }
}

/// Builds a [`TypeCatalog`].
///
/// Declarations can come in any order: a supertype edge may name types
/// declared later. Declaring a key twice keeps the last kind.
#[derive(Default)]
pub struct TypeCatalogBuilder {
    types: HashMap<TypeKey, TypeKind>,
    supertypes: HashMap<TypeKey, BTreeSet<TypeKey>>,
    casts: HashMap<(TypeKey, TypeKey), Caster>,
}

impl TypeCatalogBuilder {
    fn new() -> Self {
        Self::default()
    }

    // ── Declarations ──

    /// Declare a concrete type built with `T::default()`.
    pub fn concrete<T: Default + Send + Sync + 'static>(self) -> Self {
        self.concrete_with::<T>(T::default)
    }

    /// Declare a concrete type built with `constructor`.
    pub fn concrete_with<T: Send + Sync + 'static>(
        self,
        constructor: impl Fn() -> T + Send + Sync + 'static,
    ) -> Self {
        self.declare(
            TypeKey::of::<T>(),
            TypeKind::Concrete(Arc::new(move || Instance::new(constructor()))),
        )
    }

    /// Declare an abstraction, typically `dyn Trait`.
    pub fn abstract_type<T: ?Sized + 'static>(self) -> Self {
        self.declare(TypeKey::of::<T>(), TypeKind::Abstract)
    }

    /// Declare a type the catalog knows about but cannot construct.
    ///
    /// Such a type can only be bound to a factory.
    pub fn opaque<T: ?Sized + 'static>(self) -> Self {
        self.declare(TypeKey::of::<T>(), TypeKind::Opaque)
    }

    /// Declare a type by name.
    pub fn declare(mut self, key: impl Into<TypeKey>, kind: TypeKind) -> Self {
        self.types.insert(key.into(), kind);
        self
    }

    // ── Relations ──

    /// Declare that `Sub` directly extends `Super`.
    pub fn subtype<Sub: ?Sized + 'static, Super: ?Sized + 'static>(self) -> Self {
        self.extends(TypeKey::of::<Sub>(), TypeKey::of::<Super>())
    }

    /// Declare that the type named `sub` directly extends `sup`.
    pub fn extends(mut self, sub: impl Into<TypeKey>, sup: impl Into<TypeKey>) -> Self {
        self.supertypes.entry(sub.into()).or_default().insert(sup.into());
        self
    }

    /// Declare that `C` implements the trait object `I`, with the upcast
    /// used by [`Container::resolve_dyn`](crate::container::Container::resolve_dyn).
    ///
    /// Only the direct pair gets an upcast; declare each trait `C` should
    /// be resolvable as.
    pub fn implements<C, I>(self, cast: fn(Arc<C>) -> Arc<I>) -> Self
    where
        C: Send + Sync + 'static,
        I: ?Sized + Send + Sync + 'static,
    {
        let pair = (TypeKey::of::<C>(), TypeKey::of::<I>());
        let caster: Caster = Arc::new(move |instance: &Instance| {
            instance
                .downcast::<C>()
                .map(|concrete| Box::new(cast(concrete)) as Box<dyn Any + Send + Sync>)
        });

        let mut this = self.subtype::<C, I>();
        this.casts.insert(pair, caster);
        this
    }

    /// Apply every [`TypeRegistration`] submitted with
    /// [`register_types!`](crate::register_types).
    pub fn with_registered(self) -> Self {
        let mut builder = self;
        for registration in inventory::iter::<TypeRegistration> {
            builder = (registration.register)(builder);
        }
        builder
    }

    /// Finish the catalog.
    pub fn build(self) -> TypeCatalog {
        trace!(
            types = self.types.len(),
            casts = self.casts.len(),
            "Type catalog built"
        );
        TypeCatalog {
            types: self.types,
            supertypes: self.supertypes,
            casts: self.casts,
        }
    }
}

/// A self-registration entry collected at link time.
///
/// Submit one with [`register_types!`](crate::register_types).
pub struct TypeRegistration {
    pub register: fn(TypeCatalogBuilder) -> TypeCatalogBuilder,
}

inventory::collect!(TypeRegistration);

/// Registers types into every catalog built with
/// [`TypeCatalogBuilder::with_registered`].
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct SmtpMailer;
///
/// bindery_container::register_types!(|types| types.concrete::<SmtpMailer>());
/// ```
#[macro_export]
macro_rules! register_types {
    ($register:expr) => {
        $crate::inventory::submit! {
            $crate::catalog::TypeRegistration { register: $register }
        }
    };
}
