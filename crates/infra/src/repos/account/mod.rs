mod inmemory;
mod postgres;

pub use inmemory::InMemoryAccountRepo;
pub use postgres::PostgresAccountRepo;

use fincv_domain::{Account, Transfer, TransferError, ID};

#[async_trait::async_trait]
pub trait IAccountRepo: Send + Sync {
    async fn insert(&self, account: &Account) -> anyhow::Result<()>;
    async fn save(&self, account: &Account) -> anyhow::Result<()>;
    async fn find(&self, account_id: &ID) -> Option<Account>;
    async fn find_all(&self) -> anyhow::Result<Vec<Account>>;
    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Account>>;
    async fn find_by_number(&self, number: &str) -> Option<Account>;
    async fn delete(&self, account_id: &ID) -> Option<Account>;
    /// Applies the `Transfer` to both accounts atomically and returns
    /// them as `(from, to)` after the transfer
    async fn transfer(&self, transfer: &Transfer) -> Result<(Account, Account), TransferError>;
}

#[cfg(test)]
mod tests {
    use crate::{setup_context, FincvContext};
    use chrono::{TimeZone, Utc};
    use fincv_domain::{Account, Transfer, TransferError, ID};

    /// Creates the inmemory context and the postgres context when a
    /// database is configured, otherwise two inmemory contexts
    async fn create_contexts() -> Vec<FincvContext> {
        vec![
            FincvContext::create_inmemory(),
            setup_context().await.unwrap(),
        ]
    }

    fn account(number: &str, balance: i64) -> Account {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        Account::new(ID::default(), number.into(), "국민은행".into(), balance, created)
    }

    fn unique_number() -> String {
        ID::default().as_string()
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn create_and_delete() {
        for ctx in create_contexts().await {
            let account = account(&unique_number(), 1000);

            // Insert
            assert!(ctx.repos.accounts.insert(&account).await.is_ok());

            // Different find methods
            let res = ctx.repos.accounts.find(&account.id).await.unwrap();
            assert_eq!(res.id, account.id);
            assert_eq!(res.balance, 1000);
            let res = ctx
                .repos
                .accounts
                .find_by_number(&account.number)
                .await
                .unwrap();
            assert_eq!(res.id, account.id);
            let res = ctx
                .repos
                .accounts
                .find_by_user(&account.user_id)
                .await
                .unwrap();
            assert_eq!(res.len(), 1);
            assert_eq!(res[0].id, account.id);

            // Delete
            let res = ctx.repos.accounts.delete(&account.id).await;
            assert!(res.is_some());
            assert_eq!(res.unwrap().id, account.id);

            // Find
            assert!(ctx.repos.accounts.find(&account.id).await.is_none());
        }
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn update() {
        for ctx in create_contexts().await {
            let mut account = account(&unique_number(), 0);
            assert!(ctx.repos.accounts.insert(&account).await.is_ok());

            account.bank = "신한은행".into();
            account.balance = 42;
            assert!(ctx.repos.accounts.save(&account).await.is_ok());

            let res = ctx.repos.accounts.find(&account.id).await.unwrap();
            assert_eq!(res.bank, "신한은행");
            assert_eq!(res.balance, 42);
        }
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn transfer_moves_balance() {
        for ctx in create_contexts().await {
            let from = account(&unique_number(), 10_000);
            let to = account(&unique_number(), 1_000);
            ctx.repos.accounts.insert(&from).await.unwrap();
            ctx.repos.accounts.insert(&to).await.unwrap();

            let transfer =
                Transfer::new(from.number.clone(), 2_500, to.number.clone(), 2_500).unwrap();
            let (from_res, to_res) = ctx.repos.accounts.transfer(&transfer).await.unwrap();
            assert_eq!(from_res.balance, 7_500);
            assert_eq!(from_res.usage_count, 1);
            assert_eq!(to_res.balance, 3_500);

            let stored_from = ctx.repos.accounts.find(&from.id).await.unwrap();
            let stored_to = ctx.repos.accounts.find(&to.id).await.unwrap();
            assert_eq!(stored_from.balance, 7_500);
            assert_eq!(stored_from.usage_count, 1);
            assert_eq!(stored_to.balance, 3_500);
        }
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn transfer_rejections_leave_balances_unchanged() {
        for ctx in create_contexts().await {
            let from = account(&unique_number(), 100);
            let to = account(&unique_number(), 0);
            ctx.repos.accounts.insert(&from).await.unwrap();
            ctx.repos.accounts.insert(&to).await.unwrap();

            let overdraft =
                Transfer::new(from.number.clone(), 101, to.number.clone(), 101).unwrap();
            assert_eq!(
                ctx.repos.accounts.transfer(&overdraft).await,
                Err(TransferError::InsufficientBalance {
                    balance: 100,
                    needed: 101
                })
            );

            let missing = unique_number();
            let unknown = Transfer::new(from.number.clone(), 1, missing.clone(), 1).unwrap();
            assert_eq!(
                ctx.repos.accounts.transfer(&unknown).await,
                Err(TransferError::AccountNotFound(missing))
            );

            let same = Transfer::new(from.number.clone(), 1, from.number.clone(), 1).unwrap();
            assert_eq!(
                ctx.repos.accounts.transfer(&same).await,
                Err(TransferError::SameAccount)
            );

            let stored_from = ctx.repos.accounts.find(&from.id).await.unwrap();
            let stored_to = ctx.repos.accounts.find(&to.id).await.unwrap();
            assert_eq!(stored_from.balance, 100);
            assert_eq!(stored_from.usage_count, 0);
            assert_eq!(stored_to.balance, 0);
        }
    }
}
