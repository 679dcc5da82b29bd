//! Error types for container operations.
//!
//! Binding mistakes are configuration errors: they are reported
//! synchronously to the caller, never retried, and a failed `bind`
//! leaves the container untouched.

use std::fmt;

use bindery_support::rendering::render_chain_short;

use crate::key::TypeKey;

/// Main error type for all container operations.
#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    /// Malformed call input, e.g. an empty alias name.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The binder rejected a binding (also raised by the implicit
    /// self-binding performed by `resolve`).
    #[error("{}", .0)]
    InvalidBinding(InvalidBindingError),

    /// Nothing is bound for the key and implicit self-binding is disabled,
    /// or a binding points at an abstraction nothing is bound for.
    #[error("{}", .0)]
    NotBound(NotBoundError),

    /// The key is already bound and overriding is disabled.
    #[error("{}", .0)]
    AlreadyBound(AlreadyBoundError),

    /// A key was re-entered while it was still being resolved.
    #[error("{}", .0)]
    CircularDependency(CircularDependencyError),

    /// Following aliases came back to an alias already visited.
    #[error("{}", .0)]
    AliasCycle(AliasCycleError),

    /// Nested resolution went deeper than the configured limit.
    #[error("Resolution of {key} exceeded the maximum depth of {max_depth}")]
    DepthExceeded { key: TypeKey, max_depth: usize },

    /// A constructor or factory could not produce an instance.
    #[error("Failed to construct {key}: {source}")]
    ConstructionFailed {
        key: TypeKey,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The resolved instance is not of the requested Rust type.
    #[error("Type mismatch: {key} resolved to {actual}, expected {expected}")]
    TypeMismatch {
        key: TypeKey,
        expected: &'static str,
        actual: TypeKey,
    },
}

impl ContainerError {
    /// Shorthand for [`ContainerError::ConstructionFailed`] with a message.
    pub fn construction(key: TypeKey, message: impl Into<String>) -> Self {
        let message: String = message.into();
        ContainerError::ConstructionFailed {
            key,
            source: message.into(),
        }
    }

    /// Returns the binder's reason if this is an [`ContainerError::InvalidBinding`].
    pub fn invalid_binding_reason(&self) -> Option<&InvalidBindingReason> {
        match self {
            ContainerError::InvalidBinding(err) => Some(&err.reason),
            _ => None,
        }
    }
}

/// Why the binder refused a binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidBindingReason {
    /// The abstract side is not a known type.
    AbstractNotFound,
    /// The concrete side is not a known type.
    ConcreteNotFound { concrete: TypeKey },
    /// The abstract side is instantiable and the target is a different type.
    NotAbstract { concrete: TypeKey },
    /// The target is not a strict subtype of the abstract side.
    NotASubtype { concrete: TypeKey },
}

/// Error when the binder rejects a binding.
#[derive(Debug)]
pub struct InvalidBindingError {
    /// The key being bound
    pub key: TypeKey,
    pub reason: InvalidBindingReason,
    /// Known types with similar names, for unknown-type errors
    pub suggestions: Vec<TypeKey>,
}

impl fmt::Display for InvalidBindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            InvalidBindingReason::AbstractNotFound => write!(
                f,
                "Invalid binding: type `{}` was not found and cannot be bound",
                self.key
            )?,
            InvalidBindingReason::ConcreteNotFound { concrete } => write!(
                f,
                "Invalid binding: type `{concrete}` was not found and cannot be bound to `{}`",
                self.key
            )?,
            InvalidBindingReason::NotAbstract { concrete } => {
                write!(
                    f,
                    "Invalid binding: `{}` is not abstract and cannot be bound to `{concrete}`",
                    self.key
                )?;
                write!(
                    f,
                    "\n  Hint: A concrete type can only be bound to itself or to a factory"
                )?;
            }
            InvalidBindingReason::NotASubtype { concrete } => {
                write!(
                    f,
                    "Invalid binding: `{concrete}` is not a subtype of `{}` and cannot be bound to it",
                    self.key
                )?;
                if concrete == &self.key {
                    write!(
                        f,
                        "\n  Hint: An abstract type must be bound to an implementation, not to itself"
                    )?;
                }
            }
        }

        if !self.suggestions.is_empty() {
            write!(f, "\n  Did you mean one of:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n    - {suggestion}")?;
            }
        }
        Ok(())
    }
}

/// Error when nothing is bound for a key.
#[derive(Debug)]
pub struct NotBoundError {
    /// The key that was requested
    pub requested: TypeKey,
    /// The binding that points at it (if known)
    pub required_by: Option<TypeKey>,
    /// Similar keys that ARE bound
    pub suggestions: Vec<TypeKey>,
}

impl fmt::Display for NotBoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nothing is bound for: {}", self.requested)?;

        if let Some(ref parent) = self.required_by {
            write!(f, "\n  Required by: {parent}")?;
        }

        if !self.suggestions.is_empty() {
            write!(f, "\n  Did you mean one of:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n    - {suggestion}")?;
            }
        }

        write!(
            f,
            "\n  Hint: Bind `{}` explicitly, or enable auto_bind for concrete types",
            self.requested.short_name()
        )
    }
}

/// Error when trying to bind a key that already has a binding.
#[derive(Debug)]
pub struct AlreadyBoundError {
    pub key: TypeKey,
}

impl fmt::Display for AlreadyBoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Already bound: {}", self.key)?;
        write!(
            f,
            "\n  Hint: Enable allow_override to replace existing bindings"
        )
    }
}

/// Error when a key is re-entered during its own resolution.
///
/// The chain starts and ends with the re-entered key.
#[derive(Debug)]
pub struct CircularDependencyError {
    /// Example: ["A", "B", "A"]
    pub chain: Vec<TypeKey>,
}

impl fmt::Display for CircularDependencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circular dependency detected:\n  ")?;
        write!(f, "{}", render_chain_short(&self.chain))?;
        write!(
            f,
            "\n  Hint: Break the cycle by binding one of these keys to a concrete type or factory"
        )
    }
}

/// Error when aliases point at each other.
#[derive(Debug)]
pub struct AliasCycleError {
    /// Example: ["a", "b", "a"]
    pub chain: Vec<TypeKey>,
}

impl fmt::Display for AliasCycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alias cycle detected:\n  {}", render_chain_short(&self.chain))
    }
}

/// Convenient Result type for container operations.
pub type Result<T> = std::result::Result<T, ContainerError>;
