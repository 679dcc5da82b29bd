//! Provider trait — a module of related bindings.
//!
//! # Examples
//! ```rust,ignore
//! struct MailProvider;
//!
//! impl Provider for MailProvider {
//!     fn register(&self, binder: &dyn Binder) -> Result<()> {
//!         binder.singleton(TypeKey::of::<dyn Mailer>(), Target::to_type::<SmtpMailer>())?;
//!         binder.alias("mailer".into(), TypeKey::of::<dyn Mailer>())
//!     }
//! }
//! ```

use crate::error::Result;
use crate::key::TypeKey;
use crate::registry::Target;
use crate::scope::Scope;

/// A module that registers related bindings into a container.
///
/// Providers run once, either from
/// [`ContainerBuilder::add_provider`](crate::container::ContainerBuilder::add_provider)
/// during `build`, or from
/// [`Container::add_provider`](crate::container::Container::add_provider).
pub trait Provider: Send + Sync {
    /// Register bindings. The first failing binding aborts registration.
    fn register(&self, binder: &dyn Binder) -> Result<()>;

    /// Human-readable name for logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// The part of the container API that providers use.
///
/// Kept separate from [`Container`](crate::container::Container) so
/// providers can be tested against a recording binder.
pub trait Binder {
    /// Bind `key` to `target` with `scope`.
    fn bind(&self, key: TypeKey, target: Target, scope: Scope) -> Result<()>;

    /// Declare `alias → target`.
    fn alias(&self, alias: TypeKey, target: TypeKey) -> Result<()>;

    fn singleton(&self, key: TypeKey, target: Target) -> Result<()> {
        self.bind(key, target, Scope::Singleton)
    }

    fn temporal(&self, key: TypeKey, target: Target) -> Result<()> {
        self.bind(key, target, Scope::Temporal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Instance;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingBinder {
        bindings: Mutex<Vec<(TypeKey, Scope)>>,
        aliases: Mutex<Vec<(TypeKey, TypeKey)>>,
    }

    impl Binder for RecordingBinder {
        fn bind(&self, key: TypeKey, _target: Target, scope: Scope) -> Result<()> {
            self.bindings.lock().push((key, scope));
            Ok(())
        }

        fn alias(&self, alias: TypeKey, target: TypeKey) -> Result<()> {
            self.aliases.lock().push((alias, target));
            Ok(())
        }
    }

    struct TestProvider;

    impl Provider for TestProvider {
        fn register(&self, binder: &dyn Binder) -> Result<()> {
            binder.singleton(
                TypeKey::of::<String>(),
                Target::factory(|_| Ok(Instance::new(String::from("hello")))),
            )?;
            binder.temporal(TypeKey::of::<i32>(), Target::typed(|_| Ok(42i32)))?;
            binder.alias(TypeKey::named("greeting"), TypeKey::of::<String>())
        }
    }

    #[test]
    fn provider_registers_bindings() {
        let binder = RecordingBinder::default();
        TestProvider.register(&binder).unwrap();

        assert_eq!(
            *binder.bindings.lock(),
            vec![
                (TypeKey::of::<String>(), Scope::Singleton),
                (TypeKey::of::<i32>(), Scope::Temporal),
            ]
        );
        assert_eq!(binder.aliases.lock().len(), 1);
    }

    #[test]
    fn provider_has_name() {
        assert!(TestProvider.name().contains("TestProvider"));
    }
}
