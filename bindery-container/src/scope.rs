//! Binding lifecycle scopes.
//!
//! A scope decides how long a resolved instance lives:
//! - [`Scope::Temporal`] — a new instance on every resolution
//! - [`Scope::Singleton`] — one instance per binding, memoized on first
//!   resolution and shared until the binding is replaced or the container
//!   is dropped
//!
//! # Ordering
//! `Singleton > Temporal`: a Singleton outlives a Temporal.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Defines the lifetime of instances produced by a binding.
///
/// # Examples
/// ```
/// use bindery_container::scope::Scope;
///
/// assert_eq!(Scope::default(), Scope::Temporal);
/// assert!(Scope::Singleton > Scope::Temporal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// New instance produced on every resolve call.
    ///
    /// The factory runs each time; nothing is cached.
    #[default]
    Temporal,

    /// One instance shared by every resolution of the binding.
    ///
    /// The factory runs at most once, on first resolve, even when several
    /// threads race for it.
    Singleton,
}

impl Scope {
    /// Returns `true` if this scope caches instances.
    #[inline]
    pub fn is_cached(&self) -> bool {
        matches!(self, Scope::Singleton)
    }

    /// Ordering value (higher = longer lifetime).
    #[inline]
    fn ordering(&self) -> u8 {
        match self {
            Scope::Singleton => 1,
            Scope::Temporal => 0,
        }
    }
}

impl PartialOrd for Scope {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scope {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.ordering().cmp(&other.ordering())
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Singleton => write!(f, "Singleton"),
            Scope::Temporal => write!(f, "Temporal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_ordering() {
        assert!(Scope::Singleton > Scope::Temporal);
    }

    #[test]
    fn scope_is_cached() {
        assert!(Scope::Singleton.is_cached());
        assert!(!Scope::Temporal.is_cached());
    }

    #[test]
    fn scope_display() {
        assert_eq!(format!("{}", Scope::Singleton), "Singleton");
        assert_eq!(format!("{}", Scope::Temporal), "Temporal");
    }

    #[test]
    fn scope_serde_names() {
        let json = serde_json::to_string(&Scope::Singleton).unwrap();
        assert_eq!(json, "\"singleton\"");
        let scope: Scope = serde_json::from_str("\"temporal\"").unwrap();
        assert_eq!(scope, Scope::Temporal);
    }
}
