mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, MessagingConfig, ReminderConfig};
pub use repos::{
    CompanyQuery, ICompanyRepo, IDocumentCollectionRepo, IReminderPassRepo, IUserRepo, Page,
    Repos,
};
pub use services::*;
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;
use tracing::warn;

#[derive(Clone)]
pub struct SignflowContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub dispatcher: Arc<dyn IReminderDispatcher>,
}

struct ContextParams {
    pub postgres_connection_string: String,
}

impl SignflowContext {
    fn new(repos: Repos, config: Config, sys: Arc<dyn ISys>) -> Self {
        let providers = MessageProviderRegistry::from_config(&config.messaging);
        let dispatcher = Arc::new(NotificationDispatcher::new(
            providers,
            repos.document_collections.clone(),
            sys.clone(),
        ));
        Self {
            repos,
            config,
            sys,
            dispatcher,
        }
    }

    async fn create(params: ContextParams) -> Self {
        let repos = Repos::create_postgres(&params.postgres_connection_string)
            .await
            .expect("Postgres credentials must be set and valid");
        Self::new(repos, Config::new(), Arc::new(RealSys {}))
    }

    pub fn create_inmemory() -> Self {
        Self::new(Repos::create_inmemory(), Config::new(), Arc::new(RealSys {}))
    }
}

/// Will setup the infrastructure context given the environment.
/// Without `DATABASE_URL` everything is kept in memory.
pub async fn setup_context() -> SignflowContext {
    match get_psql_connection_string() {
        Some(postgres_connection_string) => {
            SignflowContext::create(ContextParams {
                postgres_connection_string,
            })
            .await
        }
        None => {
            warn!("DATABASE_URL env var is not present, all data will be kept in memory.");
            SignflowContext::create_inmemory()
        }
    }
}

fn get_psql_connection_string() -> Option<String> {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING).ok()
}

pub async fn run_migration() -> Result<(), MigrateError> {
    let connection_string = match get_psql_connection_string() {
        Some(connection_string) => connection_string,
        None => return Ok(()),
    };
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&connection_string)
        .await
        .expect("TO CONNECT TO POSTGRES");

    sqlx::migrate!().run(&pool).await
}
