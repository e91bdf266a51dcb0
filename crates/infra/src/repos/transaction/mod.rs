mod inmemory;
mod postgres;

pub use inmemory::InMemoryTransactionRepo;
pub use postgres::PostgresTransactionRepo;

use chrono::{DateTime, Utc};
use fincv_domain::{Transaction, ID};

#[async_trait::async_trait]
pub trait ITransactionRepo: Send + Sync {
    async fn insert(&self, transaction: &Transaction) -> anyhow::Result<()>;
    async fn save(&self, transaction: &Transaction) -> anyhow::Result<()>;
    async fn find(&self, transaction_id: &ID) -> Option<Transaction>;
    /// Newest first
    async fn find_all(&self) -> anyhow::Result<Vec<Transaction>>;
    /// Newest first
    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Transaction>>;
    async fn find_open(&self) -> anyhow::Result<Vec<Transaction>>;
    /// Open transactions whose normalized due lies within `[from, until]`
    async fn find_open_due_between(
        &self,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> anyhow::Result<Vec<Transaction>>;
    async fn delete(&self, transaction_id: &ID) -> Option<Transaction>;
}
