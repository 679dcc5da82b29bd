//! # Bindery — binding-and-resolution container for Rust
//!
//! Bind abstractions (trait objects) to implementations, concrete types to
//! themselves, or any key to a factory; pick Temporal or Singleton scope;
//! add aliases; then resolve by key.
//!
//! ```rust
//! use bindery::prelude::*;
//! use std::sync::Arc;
//!
//! trait Clock: Send + Sync {
//!     fn now(&self) -> u64;
//! }
//!
//! #[derive(Default)]
//! struct FixedClock;
//! impl Clock for FixedClock {
//!     fn now(&self) -> u64 { 42 }
//! }
//!
//! let types = TypeCatalog::builder()
//!     .abstract_type::<dyn Clock>()
//!     .concrete::<FixedClock>()
//!     .implements::<FixedClock, dyn Clock>(|c| c as Arc<dyn Clock>)
//!     .build();
//!
//! let container = Container::new(types);
//! container.singleton(TypeKey::of::<dyn Clock>(), Target::to_type::<FixedClock>())?;
//! container.alias("clock", TypeKey::of::<dyn Clock>())?;
//!
//! let clock: Arc<dyn Clock> = container.resolve_dyn("clock")?;
//! assert_eq!(clock.now(), 42);
//! # Ok::<(), bindery::ContainerError>(())
//! ```

pub use bindery_container::*;
pub use bindery_support::*;
