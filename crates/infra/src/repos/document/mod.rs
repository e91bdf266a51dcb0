mod inmemory;
mod postgres;

pub use inmemory::InMemoryDocumentRepo;
pub use postgres::PostgresDocumentRepo;

use fincv_domain::{Document, ID};

#[async_trait::async_trait]
pub trait IDocumentRepo: Send + Sync {
    async fn insert(&self, document: &Document) -> anyhow::Result<()>;
    async fn save(&self, document: &Document) -> anyhow::Result<()>;
    async fn find(&self, document_id: &ID) -> Option<Document>;
    async fn find_all(&self) -> anyhow::Result<Vec<Document>>;
    /// Documents of a user, optionally only those with the given classification
    async fn find_by_user(
        &self,
        user_id: &ID,
        classification_id: Option<u8>,
    ) -> anyhow::Result<Vec<Document>>;
    async fn delete(&self, document_id: &ID) -> Option<Document>;
}
