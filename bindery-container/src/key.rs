//! Type identification keys.
//!
//! [`TypeKey`] is the single key space shared by the alias table and the
//! binding registry. A key is just a name: either the `type_name` of a Rust
//! type or an arbitrary string used as an alias.

use std::any::type_name;
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use bindery_support::names::check_name;
use bindery_support::rendering::shorten_type_name;

use crate::error::{ContainerError, Result};

/// Identifies an abstract type, a concrete type, or an alias.
///
/// Keys compare by name. Cloning is cheap (the name is reference-counted).
///
/// # Examples
/// ```
/// use bindery_container::key::TypeKey;
///
/// // Key of a Rust type
/// let key = TypeKey::of::<String>();
/// assert_eq!(key.as_str(), "alloc::string::String");
/// assert_eq!(key.short_name(), "String");
///
/// // Free-form key, e.g. an alias
/// let alias = TypeKey::named("mailer");
/// assert_eq!(alias, TypeKey::from("mailer"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeKey(Arc<str>);

impl TypeKey {
    /// Creates the key for type `T`.
    ///
    /// Works for unsized types, so `TypeKey::of::<dyn Logger>()` is the key
    /// of the `Logger` abstraction.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self(Arc::from(type_name::<T>()))
    }

    /// Creates a key from an arbitrary name.
    #[inline]
    pub fn named(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Returns the full name.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the name with module paths stripped, for display.
    pub fn short_name(&self) -> String {
        shorten_type_name(&self.0)
    }

    /// Checks that this key is usable as an alias or alias target.
    ///
    /// # Errors
    /// [`ContainerError::InvalidArgument`] for empty names, names with
    /// surrounding whitespace, or names with control characters.
    pub fn validate(&self) -> Result<()> {
        check_name(&self.0).map_err(|problem| {
            ContainerError::InvalidArgument(format!(
                "invalid name {:?}: {}",
                self.as_str(),
                problem.describe()
            ))
        })
    }
}

impl From<&str> for TypeKey {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<String> for TypeKey {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl From<&String> for TypeKey {
    fn from(name: &String) -> Self {
        Self::named(name)
    }
}

impl From<&TypeKey> for TypeKey {
    fn from(key: &TypeKey) -> Self {
        key.clone()
    }
}

impl AsRef<str> for TypeKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TypeKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKey({})", self.0)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
