//! Re-entrancy tracking for resolution.
//!
//! Each thread keeps a stack of the keys it is currently resolving, tagged
//! with the owning container. Entering a key that is already on the stack
//! for the same container means a binding (directly or through factories)
//! depends on itself.

use std::cell::RefCell;

use tracing::warn;

use crate::error::{CircularDependencyError, ContainerError, Result};
use crate::key::TypeKey;

thread_local! {
    static RESOLUTION_STACK: RefCell<Vec<(usize, TypeKey)>> = const { RefCell::new(Vec::new()) };
}

/// Marks `key` as being resolved by container `owner` until dropped.
#[derive(Debug)]
#[must_use]
pub(crate) struct ResolutionGuard {
    owner: usize,
}

impl ResolutionGuard {
    /// Pushes `key` onto this thread's resolution stack.
    ///
    /// # Errors
    /// - [`ContainerError::CircularDependency`] if `key` is already being
    ///   resolved by `owner` on this thread
    /// - [`ContainerError::DepthExceeded`] if `owner` already has
    ///   `max_depth` resolutions in flight on this thread
    pub fn enter(owner: usize, key: &TypeKey, max_depth: usize) -> Result<Self> {
        RESOLUTION_STACK.with(|stack| {
            let mut stack = stack.borrow_mut();

            if let Some(start) = stack.iter().position(|(o, k)| *o == owner && k == key) {
                let mut chain: Vec<TypeKey> = stack[start..]
                    .iter()
                    .filter(|(o, _)| *o == owner)
                    .map(|(_, k)| k.clone())
                    .collect();
                chain.push(key.clone());

                warn!(chain = ?chain, "Circular dependency detected");
                return Err(ContainerError::CircularDependency(
                    CircularDependencyError { chain },
                ));
            }

            let depth = stack.iter().filter(|(o, _)| *o == owner).count();
            if depth >= max_depth {
                return Err(ContainerError::DepthExceeded {
                    key: key.clone(),
                    max_depth,
                });
            }

            stack.push((owner, key.clone()));
            Ok(Self { owner })
        })
    }

    /// The key `owner` is currently resolving on this thread, if any.
    pub fn current(owner: usize) -> Option<TypeKey> {
        RESOLUTION_STACK.with(|stack| {
            stack
                .borrow()
                .iter()
                .rev()
                .find(|(o, _)| *o == owner)
                .map(|(_, k)| k.clone())
        })
    }
}

impl Drop for ResolutionGuard {
    fn drop(&mut self) {
        RESOLUTION_STACK.with(|stack| {
            let mut stack = stack.borrow_mut();
            // Guards drop in LIFO order, so the top entry is ours.
            if let Some(pos) = stack.iter().rposition(|(o, _)| *o == self.owner) {
                stack.remove(pos);
            }
        });
    }
}
