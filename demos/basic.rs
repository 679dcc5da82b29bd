//! Basic example of the Bindery container.

use bindery::prelude::*;
use std::sync::Arc;

// === Define your traits and types ===

trait Logger: Send + Sync {
    fn log(&self, msg: &str);
}

#[derive(Default)]
struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, msg: &str) {
        println!("[LOG] {msg}");
    }
}

struct Config {
    database_url: String,
}

trait Repository: Send + Sync {
    fn find_user(&self, id: u64) -> String;
}

struct Database {
    url: String,
    logger: Arc<dyn Logger>,
}

impl Repository for Database {
    fn find_user(&self, id: u64) -> String {
        self.logger.log(&format!("SELECT * FROM users WHERE id = {id}"));
        format!("user {id} from {}", self.url)
    }
}

struct UserService {
    repo: Arc<dyn Repository>,
    logger: Arc<dyn Logger>,
}

impl UserService {
    fn get_user(&self, id: u64) -> String {
        self.logger.log(&format!("Getting user {id}"));
        self.repo.find_user(id)
    }
}

// === Group bindings in a provider ===

struct InfrastructureProvider;

impl Provider for InfrastructureProvider {
    fn register(&self, binder: &dyn Binder) -> Result<()> {
        binder.singleton(TypeKey::of::<dyn Logger>(), Target::to_type::<ConsoleLogger>())?;
        binder.alias("logger".into(), TypeKey::of::<dyn Logger>())?;

        binder.singleton(
            TypeKey::of::<Config>(),
            Target::typed(|_| {
                Ok(Config {
                    database_url: "postgres://localhost/app".to_string(),
                })
            }),
        )?;

        binder.singleton(
            TypeKey::of::<dyn Repository>(),
            Target::factory(|c| {
                let config: Arc<Config> = c.get()?;
                let logger: Arc<dyn Logger> = c.resolve_dyn("logger")?;
                let repo: Arc<dyn Repository> = Arc::new(Database {
                    url: config.database_url.clone(),
                    logger,
                });
                Ok(Instance::new(repo))
            }),
        )
    }
}

fn main() -> Result<()> {
    // Initialize tracing (logging)
    tracing_subscriber::fmt()
        .with_env_filter("bindery_container=debug")
        .init();

    let types = TypeCatalog::builder()
        .abstract_type::<dyn Logger>()
        .abstract_type::<dyn Repository>()
        .concrete::<ConsoleLogger>()
        .implements::<ConsoleLogger, dyn Logger>(|l| l as Arc<dyn Logger>)
        .opaque::<Config>()
        .opaque::<UserService>()
        .build();

    let container = Container::builder(types)
        .add_provider(InfrastructureProvider)
        .validate_on_build(true)
        .build()?;

    // UserService — temporal (new each time)
    container.temporal(
        TypeKey::of::<UserService>(),
        Target::typed(|c| {
            Ok(UserService {
                repo: c.get_dyn()?,
                logger: c.resolve_dyn("logger")?,
            })
        }),
    )?;

    println!("Container built: {container:?}");

    let service: Arc<UserService> = container.get()?;
    println!("{}", service.get_user(42));

    let again: Arc<UserService> = container.get()?;
    println!("Same repository: {}", Arc::ptr_eq(&service.repo, &again.repo));

    for binding in container.bindings() {
        println!("  {} -> {:?} ({})", binding.key.short_name(), binding.target, binding.scope);
    }

    Ok(())
}
