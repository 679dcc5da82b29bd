//! Alias table — name indirection consulted before binding lookup.
//!
//! An alias points at another name: a further alias, an abstract type or a
//! concrete type. Targets are not checked when the alias is declared, so an
//! alias may be declared before (or without) its target ever being bound.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use crate::error::{AliasCycleError, ContainerError, Result};
use crate::key::TypeKey;

/// Maps alias names to their targets.
#[derive(Debug, Default)]
pub(crate) struct AliasTable {
    aliases: RwLock<HashMap<TypeKey, TypeKey>>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `alias → target`, replacing any previous target.
    ///
    /// # Errors
    /// [`ContainerError::InvalidArgument`] if either name is malformed or
    /// the alias points at itself.
    pub fn declare(&self, alias: TypeKey, target: TypeKey) -> Result<()> {
        alias.validate()?;
        target.validate()?;

        if alias == target {
            return Err(ContainerError::InvalidArgument(format!(
                "alias {alias:?} cannot point to itself"
            )));
        }

        debug!(alias = %alias, target = %target, "Declared alias");
        self.aliases.write().insert(alias, target);
        Ok(())
    }

    /// Returns `true` if `key` is a declared alias.
    pub fn is_alias(&self, key: &TypeKey) -> bool {
        self.aliases.read().contains_key(key)
    }

    /// Follows aliases from `key` until a name that is not an alias.
    ///
    /// Returns `key` itself when it is not an alias.
    ///
    /// # Errors
    /// [`ContainerError::AliasCycle`] if the chain revisits a name.
    pub fn canonical(&self, key: &TypeKey) -> Result<TypeKey> {
        let aliases = self.aliases.read();
        let mut chain: Vec<TypeKey> = vec![key.clone()];
        let mut current = key;

        while let Some(target) = aliases.get(current) {
            trace!(from = %current, to = %target, "Following alias");

            if chain.contains(target) {
                chain.push(target.clone());
                warn!(chain = ?chain, "Alias cycle detected");
                return Err(ContainerError::AliasCycle(AliasCycleError { chain }));
            }

            chain.push(target.clone());
            current = target;
        }

        Ok(current.clone())
    }

    /// Snapshot of every `(alias, target)` pair, sorted by alias.
    pub fn entries(&self) -> Vec<(TypeKey, TypeKey)> {
        let mut entries: Vec<_> = self
            .aliases
            .read()
            .iter()
            .map(|(alias, target)| (alias.clone(), target.clone()))
            .collect();
        entries.sort();
        entries
    }

    /// Number of declared aliases.
    pub fn len(&self) -> usize {
        self.aliases.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> TypeKey {
        TypeKey::named(name)
    }

    #[test]
    fn non_alias_is_its_own_canonical_name() {
        let table = AliasTable::new();
        assert_eq!(table.canonical(&key("app::Mailer")).unwrap(), key("app::Mailer"));
    }

    #[test]
    fn chains_are_followed() {
        let table = AliasTable::new();
        table.declare(key("a"), key("app::Mailer")).unwrap();
        table.declare(key("b"), key("a")).unwrap();
        table.declare(key("c"), key("b")).unwrap();

        assert_eq!(table.canonical(&key("c")).unwrap(), key("app::Mailer"));
        assert!(table.is_alias(&key("b")));
        assert!(!table.is_alias(&key("app::Mailer")));
    }

    #[test]
    fn redeclaring_overwrites() {
        let table = AliasTable::new();
        table.declare(key("a"), key("first")).unwrap();
        table.declare(key("a"), key("second")).unwrap();
        assert_eq!(table.canonical(&key("a")).unwrap(), key("second"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn self_alias_rejected() {
        let table = AliasTable::new();
        let err = table.declare(key("a"), key("a")).unwrap_err();
        assert!(matches!(err, ContainerError::InvalidArgument(_)));
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn malformed_names_rejected() {
        let table = AliasTable::new();
        assert!(table.declare(key(""), key("x")).is_err());
        assert!(table.declare(key("x"), key(" y")).is_err());
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn cycle_detected() {
        let table = AliasTable::new();
        table.declare(key("a"), key("b")).unwrap();
        table.declare(key("b"), key("a")).unwrap();

        match table.canonical(&key("a")).unwrap_err() {
            ContainerError::AliasCycle(err) => {
                assert_eq!(err.chain, vec![key("a"), key("b"), key("a")]);
            }
            other => panic!("Expected AliasCycle, got: {other:?}"),
        }
    }
}
