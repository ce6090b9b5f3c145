mod company;
mod document_collection;
mod reminder_pass;
mod shared;
mod user;

pub use company::ICompanyRepo;
use company::{InMemoryCompanyRepo, PostgresCompanyRepo};
pub use document_collection::IDocumentCollectionRepo;
use document_collection::{InMemoryDocumentCollectionRepo, PostgresDocumentCollectionRepo};
pub use reminder_pass::IReminderPassRepo;
use reminder_pass::{InMemoryReminderPassRepo, PostgresReminderPassRepo};
pub use shared::query_structs::*;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;
pub use user::IUserRepo;
use user::{InMemoryUserRepo, PostgresUserRepo};

#[derive(Clone)]
pub struct Repos {
    pub companies: Arc<dyn ICompanyRepo>,
    pub users: Arc<dyn IUserRepo>,
    pub document_collections: Arc<dyn IDocumentCollectionRepo>,
    pub reminder_passes: Arc<dyn IReminderPassRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            companies: Arc::new(PostgresCompanyRepo::new(pool.clone())),
            users: Arc::new(PostgresUserRepo::new(pool.clone())),
            document_collections: Arc::new(PostgresDocumentCollectionRepo::new(pool.clone())),
            reminder_passes: Arc::new(PostgresReminderPassRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            companies: Arc::new(InMemoryCompanyRepo::new()),
            users: Arc::new(InMemoryUserRepo::new()),
            document_collections: Arc::new(InMemoryDocumentCollectionRepo::new()),
            reminder_passes: Arc::new(InMemoryReminderPassRepo::new()),
        }
    }
}
