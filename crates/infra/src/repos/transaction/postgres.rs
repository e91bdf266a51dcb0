use super::ITransactionRepo;
use chrono::{DateTime, FixedOffset, Utc};
use fincv_domain::{DueValue, Transaction, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

/// Stores the due value as the client sent it next to its normalized
/// instant `due_at`, which is what the reminder job queries on.
pub struct PostgresTransactionRepo {
    pool: PgPool,
    local_offset: FixedOffset,
}

impl PostgresTransactionRepo {
    pub fn new(pool: PgPool, local_offset: FixedOffset) -> Self {
        Self { pool, local_offset }
    }

    fn due_at(&self, transaction: &Transaction) -> anyhow::Result<DateTime<Utc>> {
        transaction
            .due
            .normalize(&self.local_offset)
            .map(|due_at| due_at.with_timezone(&Utc))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Due value: {} of transaction: {} is out of range",
                    transaction.due,
                    transaction.id
                )
            })
    }
}

#[derive(Debug, FromRow)]
struct TransactionRaw {
    transaction_uid: Uuid,
    user_uid: Uuid,
    partner_uid: Uuid,
    title: String,
    balance: i64,
    due: String,
    closed: bool,
    recurring: bool,
    created: DateTime<Utc>,
}

impl TryFrom<TransactionRaw> for Transaction {
    type Error = anyhow::Error;

    fn try_from(e: TransactionRaw) -> anyhow::Result<Self> {
        let due: DueValue = e.due.parse()?;
        Ok(Self {
            id: e.transaction_uid.into(),
            user_id: e.user_uid.into(),
            partner_id: e.partner_uid.into(),
            title: e.title,
            balance: e.balance,
            due,
            closed: e.closed,
            recurring: e.recurring,
            created: e.created,
        })
    }
}

fn into_transactions(raws: Vec<TransactionRaw>) -> anyhow::Result<Vec<Transaction>> {
    raws.into_iter().map(Transaction::try_from).collect()
}

fn into_transaction(raw: TransactionRaw) -> Option<Transaction> {
    let transaction_uid = raw.transaction_uid;
    Transaction::try_from(raw)
        .map_err(|e| {
            error!(
                "Stored transaction: {:?} is malformed. Error: {:?}",
                transaction_uid, e
            );
            e
        })
        .ok()
}

#[async_trait::async_trait]
impl ITransactionRepo for PostgresTransactionRepo {
    async fn insert(&self, transaction: &Transaction) -> anyhow::Result<()> {
        let due_at = self.due_at(transaction)?;
        sqlx::query(
            r#"
            INSERT INTO transactions
            (transaction_uid, user_uid, partner_uid, title, balance, due, due_at, closed, recurring, created)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(transaction.id.inner_ref())
        .bind(transaction.user_id.inner_ref())
        .bind(transaction.partner_id.inner_ref())
        .bind(&transaction.title)
        .bind(transaction.balance)
        .bind(transaction.due.to_string())
        .bind(due_at)
        .bind(transaction.closed)
        .bind(transaction.recurring)
        .bind(transaction.created)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert transaction: {:?}. DB returned error: {:?}",
                transaction, e
            );
            e
        })?;
        Ok(())
    }

    async fn save(&self, transaction: &Transaction) -> anyhow::Result<()> {
        let due_at = self.due_at(transaction)?;
        sqlx::query(
            r#"
            UPDATE transactions
            SET partner_uid = $2,
            title = $3,
            balance = $4,
            due = $5,
            due_at = $6,
            closed = $7,
            recurring = $8
            WHERE transaction_uid = $1
            "#,
        )
        .bind(transaction.id.inner_ref())
        .bind(transaction.partner_id.inner_ref())
        .bind(&transaction.title)
        .bind(transaction.balance)
        .bind(transaction.due.to_string())
        .bind(due_at)
        .bind(transaction.closed)
        .bind(transaction.recurring)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to save transaction: {:?}. DB returned error: {:?}",
                transaction, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, transaction_id: &ID) -> Option<Transaction> {
        let res: Option<TransactionRaw> = sqlx::query_as(
            r#"
            SELECT transaction_uid, user_uid, partner_uid, title, balance, due, closed, recurring, created
            FROM transactions
            WHERE transaction_uid = $1
            "#,
        )
        .bind(transaction_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find transaction with id: {:?} failed. DB returned error: {:?}",
                transaction_id, e
            );
            e
        })
        .ok()?;
        res.and_then(into_transaction)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Transaction>> {
        let transactions: Vec<TransactionRaw> = sqlx::query_as(
            r#"
            SELECT transaction_uid, user_uid, partner_uid, title, balance, due, closed, recurring, created
            FROM transactions
            ORDER BY created DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find all transactions failed. DB returned error: {:?}", e);
            e
        })?;
        into_transactions(transactions)
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Transaction>> {
        let transactions: Vec<TransactionRaw> = sqlx::query_as(
            r#"
            SELECT transaction_uid, user_uid, partner_uid, title, balance, due, closed, recurring, created
            FROM transactions
            WHERE user_uid = $1
            ORDER BY created DESC
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find transactions for user: {:?} failed. DB returned error: {:?}",
                user_id, e
            );
            e
        })?;
        into_transactions(transactions)
    }

    async fn find_open(&self) -> anyhow::Result<Vec<Transaction>> {
        let transactions: Vec<TransactionRaw> = sqlx::query_as(
            r#"
            SELECT transaction_uid, user_uid, partner_uid, title, balance, due, closed, recurring, created
            FROM transactions
            WHERE closed = FALSE
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find open transactions failed. DB returned error: {:?}", e);
            e
        })?;
        into_transactions(transactions)
    }

    async fn find_open_due_between(
        &self,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> anyhow::Result<Vec<Transaction>> {
        let transactions: Vec<TransactionRaw> = sqlx::query_as(
            r#"
            SELECT transaction_uid, user_uid, partner_uid, title, balance, due, closed, recurring, created
            FROM transactions
            WHERE closed = FALSE
            AND due_at BETWEEN $1 AND $2
            "#,
        )
        .bind(from)
        .bind(until)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find open transactions due between {} and {} failed. DB returned error: {:?}",
                from, until, e
            );
            e
        })?;
        into_transactions(transactions)
    }

    async fn delete(&self, transaction_id: &ID) -> Option<Transaction> {
        let res: Option<TransactionRaw> = sqlx::query_as(
            r#"
            DELETE FROM transactions
            WHERE transaction_uid = $1
            RETURNING transaction_uid, user_uid, partner_uid, title, balance, due, closed, recurring, created
            "#,
        )
        .bind(transaction_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete transaction with id: {:?} failed. DB returned error: {:?}",
                transaction_id, e
            );
            e
        })
        .ok()?;
        res.and_then(into_transaction)
    }
}
