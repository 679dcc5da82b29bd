//! Core container implementation for Bindery.

mod alias;
pub mod catalog;
pub mod container;
pub mod error;
mod graph;
mod guard;
pub mod instance;
pub mod key;
pub mod provider;
pub mod registry;
pub mod scope;
pub mod settings;

#[doc(hidden)]
pub use inventory;

pub use catalog::{TypeCatalog, TypeCatalogBuilder, TypeIntrospector, TypeKind};
pub use container::{Container, ContainerBuilder, prelude};
pub use error::{ContainerError, Result};
pub use instance::Instance;
pub use key::TypeKey;
pub use provider::{Binder, Provider};
pub use registry::{BindingInfo, BindingTarget, Target};
pub use scope::Scope;
pub use settings::ContainerSettings;
