mod account;
mod document;
mod reminder;
mod shared;
mod transaction;

use account::{IAccountRepo, InMemoryAccountRepo, PostgresAccountRepo};
use chrono::FixedOffset;
use document::{IDocumentRepo, InMemoryDocumentRepo, PostgresDocumentRepo};
use reminder::{InMemoryReminderRepo, PostgresReminderRepo};
use sqlx::{migrate::Migrator, postgres::PgPoolOptions, PgPool};
use std::sync::Arc;
use tracing::info;
use transaction::{InMemoryTransactionRepo, PostgresTransactionRepo};

pub use reminder::IReminderRepo;
pub use transaction::ITransactionRepo;

/// Connection strings of the stores. Every entity family lives in its own
/// database and nothing joins across them.
#[derive(Debug, Clone)]
pub struct DatabaseUrls {
    pub accounts: String,
    pub documents: String,
    pub transactions: String,
    pub reminders: String,
}

#[derive(Clone)]
pub struct Repos {
    pub accounts: Arc<dyn IAccountRepo>,
    pub documents: Arc<dyn IDocumentRepo>,
    pub transactions: Arc<dyn ITransactionRepo>,
    pub reminders: Arc<dyn IReminderRepo>,
}

async fn connect(name: &str, url: &str, mut migrator: Migrator) -> anyhow::Result<PgPool> {
    info!("DB CHECKING CONNECTION TO {} STORE ...", name);
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(url)
        .await?;
    // The stores may share one database, in which case the other
    // stores' migrations show up as applied but unknown
    migrator.set_ignore_missing(true);
    migrator.run(&pool).await?;
    info!("DB CHECKING CONNECTION TO {} STORE ... [done]", name);
    Ok(pool)
}

impl Repos {
    pub async fn create_postgres(
        urls: &DatabaseUrls,
        local_offset: FixedOffset,
    ) -> anyhow::Result<Self> {
        let accounts = connect(
            "ACCOUNT",
            &urls.accounts,
            sqlx::migrate!("./migrations/accounts"),
        )
        .await?;
        let documents = connect(
            "DOCUMENT",
            &urls.documents,
            sqlx::migrate!("./migrations/documents"),
        )
        .await?;
        let transactions = connect(
            "TRANSACTION",
            &urls.transactions,
            sqlx::migrate!("./migrations/transactions"),
        )
        .await?;
        let reminders = connect(
            "REMINDER",
            &urls.reminders,
            sqlx::migrate!("./migrations/reminders"),
        )
        .await?;

        Ok(Self {
            accounts: Arc::new(PostgresAccountRepo::new(accounts)),
            documents: Arc::new(PostgresDocumentRepo::new(documents)),
            transactions: Arc::new(PostgresTransactionRepo::new(transactions, local_offset)),
            reminders: Arc::new(PostgresReminderRepo::new(reminders)),
        })
    }

    pub fn create_inmemory(local_offset: FixedOffset) -> Self {
        Self {
            accounts: Arc::new(InMemoryAccountRepo::new()),
            documents: Arc::new(InMemoryDocumentRepo::new()),
            transactions: Arc::new(InMemoryTransactionRepo::new(local_offset)),
            reminders: Arc::new(InMemoryReminderRepo::new()),
        }
    }
}
