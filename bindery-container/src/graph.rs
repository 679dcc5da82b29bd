//! Binding graph validation.
//!
//! Walks the bindings without resolving anything:
//! - Detects alias cycles
//! - Detects cycles between type targets
//! - Checks that every type target and alias target can be resolved
//!
//! Factory bindings are leaves: what a factory resolves is only known
//! when it runs.

use std::collections::{HashMap, HashSet};

use tracing::{debug, instrument, warn};

use crate::alias::AliasTable;
use crate::catalog::TypeIntrospector;
use crate::container::suggest_keys;
use crate::error::{CircularDependencyError, ContainerError, NotBoundError, Result};
use crate::key::TypeKey;
use crate::registry::{BindingInfo, BindingTarget};

/// Validates a snapshot of a container's bindings.
///
/// # Algorithm
/// Depth-first search over `Type` targets, after following aliases.
/// Maintains a "path" of keys being visited to detect cycles.
pub(crate) struct GraphValidator<'a> {
    bindings: HashMap<TypeKey, BindingInfo>,
    aliases: &'a AliasTable,
    types: &'a dyn TypeIntrospector,
    auto_bind: bool,
    /// Currently being visited (for cycle detection)
    visiting: HashSet<TypeKey>,
    /// Already validated (cache)
    validated: HashSet<TypeKey>,
    /// Current DFS path (for error reporting)
    path: Vec<TypeKey>,
}

impl<'a> GraphValidator<'a> {
    pub fn new(
        bindings: Vec<BindingInfo>,
        aliases: &'a AliasTable,
        types: &'a dyn TypeIntrospector,
        auto_bind: bool,
    ) -> Self {
        Self {
            bindings: bindings
                .into_iter()
                .map(|info| (info.key.clone(), info))
                .collect(),
            aliases,
            types,
            auto_bind,
            visiting: HashSet::new(),
            validated: HashSet::new(),
            path: Vec::new(),
        }
    }

    /// Validates every binding, then every alias.
    ///
    /// # Errors
    /// - [`ContainerError::AliasCycle`] — an alias chain loops
    /// - [`ContainerError::CircularDependency`] — type targets loop
    /// - [`ContainerError::NotBound`] — a target would fail to resolve
    #[instrument(skip(self), name = "graph_validation")]
    pub fn validate(&mut self) -> Result<()> {
        let mut keys: Vec<TypeKey> = self.bindings.keys().cloned().collect();
        keys.sort();

        debug!(bindings = keys.len(), "Starting binding graph validation");

        for key in keys {
            self.validate_key(&key)?;
        }

        for (alias, _) in self.aliases.entries() {
            let target = self.aliases.canonical(&alias)?;
            self.path.push(alias);
            let checked = self.validate_key(&target);
            self.path.pop();
            checked?;
        }

        debug!("Binding graph validation passed");
        Ok(())
    }

    fn validate_key(&mut self, key: &TypeKey) -> Result<()> {
        if self.validated.contains(key) {
            return Ok(());
        }

        if self.visiting.contains(key) {
            let start = self.path.iter().position(|k| k == key).unwrap_or(0);
            let mut chain: Vec<TypeKey> = self.path[start..].to_vec();
            chain.push(key.clone());

            warn!(chain = ?chain, "Circular dependency detected");
            return Err(ContainerError::CircularDependency(
                CircularDependencyError { chain },
            ));
        }

        let target = match self.bindings.get(key) {
            Some(info) => info.target.clone(),
            None => return self.check_unbound(key),
        };

        if let BindingTarget::Type(concrete) = target {
            let next = self.aliases.canonical(&concrete)?;

            self.visiting.insert(key.clone());
            self.path.push(key.clone());
            let checked = self.validate_key(&next);
            self.path.pop();
            self.visiting.remove(key);
            checked?;
        }

        self.validated.insert(key.clone());
        Ok(())
    }

    /// An unbound key passes only if resolving it would bind it to itself.
    fn check_unbound(&mut self, key: &TypeKey) -> Result<()> {
        if self.auto_bind && self.types.is_instantiable(key) {
            self.validated.insert(key.clone());
            return Ok(());
        }

        let mut bound: Vec<TypeKey> = self.bindings.keys().cloned().collect();
        bound.sort();

        Err(ContainerError::NotBound(NotBoundError {
            requested: key.clone(),
            required_by: self.path.last().cloned(),
            suggestions: suggest_keys(key, &bound),
        }))
    }
}
