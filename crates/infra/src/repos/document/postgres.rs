use super::IDocumentRepo;
use chrono::{DateTime, NaiveDate, Utc};
use fincv_domain::{Document, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresDocumentRepo {
    pool: PgPool,
}

impl PostgresDocumentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DocumentRaw {
    document_uid: Uuid,
    user_uid: Uuid,
    title: String,
    amount: i64,
    partner: String,
    bank: String,
    account_number: String,
    partner_number: String,
    due: NaiveDate,
    classification_id: i16,
    content: Option<String>,
    path: Option<String>,
    created: DateTime<Utc>,
}

impl From<DocumentRaw> for Document {
    fn from(e: DocumentRaw) -> Self {
        Self {
            id: e.document_uid.into(),
            user_id: e.user_uid.into(),
            title: e.title,
            amount: e.amount,
            partner: e.partner,
            bank: e.bank,
            account_number: e.account_number,
            partner_number: e.partner_number,
            due: e.due,
            classification_id: e.classification_id as u8,
            content: e.content,
            path: e.path,
            created: e.created,
        }
    }
}

#[async_trait::async_trait]
impl IDocumentRepo for PostgresDocumentRepo {
    async fn insert(&self, document: &Document) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO documents
            (document_uid, user_uid, title, amount, partner, bank, account_number,
             partner_number, due, classification_id, content, path, created)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(document.id.inner_ref())
        .bind(document.user_id.inner_ref())
        .bind(&document.title)
        .bind(document.amount)
        .bind(&document.partner)
        .bind(&document.bank)
        .bind(&document.account_number)
        .bind(&document.partner_number)
        .bind(document.due)
        .bind(document.classification_id as i16)
        .bind(&document.content)
        .bind(&document.path)
        .bind(document.created)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert document: {:?}. DB returned error: {:?}",
                document, e
            );
            e
        })?;
        Ok(())
    }

    async fn save(&self, document: &Document) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE documents
            SET title = $2,
            amount = $3,
            partner = $4,
            bank = $5,
            account_number = $6,
            partner_number = $7,
            due = $8,
            classification_id = $9,
            content = $10,
            path = $11
            WHERE document_uid = $1
            "#,
        )
        .bind(document.id.inner_ref())
        .bind(&document.title)
        .bind(document.amount)
        .bind(&document.partner)
        .bind(&document.bank)
        .bind(&document.account_number)
        .bind(&document.partner_number)
        .bind(document.due)
        .bind(document.classification_id as i16)
        .bind(&document.content)
        .bind(&document.path)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to save document: {:?}. DB returned error: {:?}",
                document, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, document_id: &ID) -> Option<Document> {
        let res: Option<DocumentRaw> = sqlx::query_as(
            r#"
            SELECT * FROM documents
            WHERE document_uid = $1
            "#,
        )
        .bind(document_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find document with id: {:?} failed. DB returned error: {:?}",
                document_id, e
            );
            e
        })
        .ok()?;
        res.map(|doc| doc.into())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Document>> {
        let documents: Vec<DocumentRaw> = sqlx::query_as(
            r#"
            SELECT * FROM documents
            ORDER BY created DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find all documents failed. DB returned error: {:?}", e);
            e
        })?;
        Ok(documents.into_iter().map(|doc| doc.into()).collect())
    }

    async fn find_by_user(
        &self,
        user_id: &ID,
        classification_id: Option<u8>,
    ) -> anyhow::Result<Vec<Document>> {
        let documents: Vec<DocumentRaw> = sqlx::query_as(
            r#"
            SELECT * FROM documents
            WHERE user_uid = $1
            AND ($2::SMALLINT IS NULL OR classification_id = $2)
            ORDER BY created DESC
            "#,
        )
        .bind(user_id.inner_ref())
        .bind(classification_id.map(i16::from))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find documents for user: {:?} with classification: {:?} failed. DB returned error: {:?}",
                user_id, classification_id, e
            );
            e
        })?;
        Ok(documents.into_iter().map(|doc| doc.into()).collect())
    }

    async fn delete(&self, document_id: &ID) -> Option<Document> {
        let res: Option<DocumentRaw> = sqlx::query_as(
            r#"
            DELETE FROM documents
            WHERE document_uid = $1
            RETURNING *
            "#,
        )
        .bind(document_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete document with id: {:?} failed. DB returned error: {:?}",
                document_id, e
            );
            e
        })
        .ok()?;
        res.map(|doc| doc.into())
    }
}
