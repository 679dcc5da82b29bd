//! Type-erased resolved instances.

use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

use crate::error::{ContainerError, Result};
use crate::key::TypeKey;

/// A value produced by the container.
///
/// Instances are reference-counted: cloning an `Instance` shares the same
/// value, and [`Instance::ptr_eq`] tells whether two instances are the very
/// same object (what a Singleton binding guarantees).
///
/// # Examples
/// ```
/// use bindery_container::instance::Instance;
///
/// let a = Instance::new(String::from("hello"));
/// let b = a.clone();
/// assert!(Instance::ptr_eq(&a, &b));
/// assert_eq!(*a.downcast::<String>().unwrap(), "hello");
/// ```
#[derive(Clone)]
pub struct Instance {
    value: Arc<dyn Any + Send + Sync>,
    type_key: TypeKey,
}

impl Instance {
    /// Wraps a freshly built value.
    pub fn new<T: Send + Sync + 'static>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Wraps an already shared value without copying it.
    pub fn from_arc<T: Send + Sync + 'static>(value: Arc<T>) -> Self {
        Self {
            value,
            type_key: TypeKey::of::<T>(),
        }
    }

    /// Key of the concrete type held by this instance.
    #[inline]
    pub fn type_key(&self) -> &TypeKey {
        &self.type_key
    }

    /// Returns `true` if the held value is a `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Returns the held value as `Arc<T>`, sharing the allocation.
    pub fn downcast<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.value.clone().downcast::<T>().ok()
    }

    /// Like [`Instance::downcast`], but reports a mismatch as an error
    /// mentioning `key`.
    pub fn downcast_for<T: Send + Sync + 'static>(&self, key: &TypeKey) -> Result<Arc<T>> {
        self.downcast::<T>().ok_or_else(|| ContainerError::TypeMismatch {
            key: key.clone(),
            expected: type_name::<T>(),
            actual: self.type_key.clone(),
        })
    }

    /// Identity comparison: `true` when both hold the same allocation.
    #[inline]
    pub fn ptr_eq(a: &Instance, b: &Instance) -> bool {
        Arc::ptr_eq(&a.value, &b.value)
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("type", &self.type_key)
            .finish()
    }
}
