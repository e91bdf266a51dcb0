use super::IAccountRepo;
use chrono::{DateTime, Utc};
use fincv_domain::{Account, Transfer, TransferError, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresAccountRepo {
    pool: PgPool,
}

impl PostgresAccountRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AccountRaw {
    account_uid: Uuid,
    user_uid: Uuid,
    number: String,
    bank: String,
    balance: i64,
    usage_count: i64,
    created: DateTime<Utc>,
}

impl From<AccountRaw> for Account {
    fn from(e: AccountRaw) -> Self {
        Self {
            id: e.account_uid.into(),
            user_id: e.user_uid.into(),
            number: e.number,
            bank: e.bank,
            balance: e.balance,
            usage_count: e.usage_count,
            created: e.created,
        }
    }
}

#[async_trait::async_trait]
impl IAccountRepo for PostgresAccountRepo {
    async fn insert(&self, account: &Account) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO accounts(account_uid, user_uid, number, bank, balance, usage_count, created)
            VALUES($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(account.id.inner_ref())
        .bind(account.user_id.inner_ref())
        .bind(&account.number)
        .bind(&account.bank)
        .bind(account.balance)
        .bind(account.usage_count)
        .bind(account.created)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert account: {:?}. DB returned error: {:?}",
                account, e
            );
            e
        })?;
        Ok(())
    }

    async fn save(&self, account: &Account) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE accounts
            SET number = $2,
            bank = $3,
            balance = $4,
            usage_count = $5
            WHERE account_uid = $1
            "#,
        )
        .bind(account.id.inner_ref())
        .bind(&account.number)
        .bind(&account.bank)
        .bind(account.balance)
        .bind(account.usage_count)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to save account: {:?}. DB returned error: {:?}",
                account, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, account_id: &ID) -> Option<Account> {
        let res: Option<AccountRaw> = sqlx::query_as(
            r#"
            SELECT * FROM accounts
            WHERE account_uid = $1
            "#,
        )
        .bind(account_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find account with id: {:?} failed. DB returned error: {:?}",
                account_id, e
            );
            e
        })
        .ok()?;
        res.map(|account| account.into())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Account>> {
        let accounts: Vec<AccountRaw> = sqlx::query_as(
            r#"
            SELECT * FROM accounts
            ORDER BY created DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find all accounts failed. DB returned error: {:?}", e);
            e
        })?;
        Ok(accounts.into_iter().map(|acc| acc.into()).collect())
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Account>> {
        let accounts: Vec<AccountRaw> = sqlx::query_as(
            r#"
            SELECT * FROM accounts
            WHERE user_uid = $1
            ORDER BY created DESC
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find accounts for user: {:?} failed. DB returned error: {:?}",
                user_id, e
            );
            e
        })?;
        Ok(accounts.into_iter().map(|acc| acc.into()).collect())
    }

    async fn find_by_number(&self, number: &str) -> Option<Account> {
        let res: Option<AccountRaw> = sqlx::query_as(
            r#"
            SELECT * FROM accounts
            WHERE number = $1
            "#,
        )
        .bind(number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find account with number: {:?} failed. DB returned error: {:?}",
                number, e
            );
            e
        })
        .ok()?;
        res.map(|acc| acc.into())
    }

    async fn delete(&self, account_id: &ID) -> Option<Account> {
        let res: Option<AccountRaw> = sqlx::query_as(
            r#"
            DELETE FROM accounts
            WHERE account_uid = $1
            RETURNING *
            "#,
        )
        .bind(account_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete account with id: {:?} failed. DB returned error: {:?}",
                account_id, e
            );
            e
        })
        .ok()?;
        res.map(|acc| acc.into())
    }

    async fn transfer(&self, transfer: &Transfer) -> Result<(Account, Account), TransferError> {
        let storage_error = |e: sqlx::Error| {
            error!(
                "Transfer: {:?} failed. DB returned error: {:?}",
                transfer, e
            );
            TransferError::StorageError
        };

        let mut tx = self.pool.begin().await.map_err(storage_error)?;

        // Rows are locked in number order so concurrent transfers cannot deadlock
        let locked: Vec<AccountRaw> = sqlx::query_as(
            r#"
            SELECT * FROM accounts
            WHERE number = ANY($1)
            ORDER BY number
            FOR UPDATE
            "#,
        )
        .bind(vec![transfer.from_number.clone(), transfer.to_number.clone()])
        .fetch_all(&mut *tx)
        .await
        .map_err(storage_error)?;

        let locked: Vec<Account> = locked.into_iter().map(|acc| acc.into()).collect();
        let by_number = |number: &str| {
            locked
                .iter()
                .find(|acc| acc.number == number)
                .cloned()
                .ok_or_else(|| TransferError::AccountNotFound(number.to_string()))
        };
        let mut from = by_number(&transfer.from_number)?;
        let mut to = by_number(&transfer.to_number)?;

        if let Err(e) = transfer.apply(&mut from, &mut to) {
            tx.rollback().await.ok();
            return Err(e);
        }

        for account in [&from, &to] {
            sqlx::query(
                r#"
                UPDATE accounts
                SET balance = $2,
                usage_count = $3
                WHERE account_uid = $1
                "#,
            )
            .bind(account.id.inner_ref())
            .bind(account.balance)
            .bind(account.usage_count)
            .execute(&mut *tx)
            .await
            .map_err(storage_error)?;
        }

        tx.commit().await.map_err(storage_error)?;

        Ok((from, to))
    }
}
