use super::ITransactionRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::{DateTime, FixedOffset, Utc};
use fincv_domain::{Transaction, ID};

pub struct InMemoryTransactionRepo {
    transactions: std::sync::Mutex<Vec<Transaction>>,
    local_offset: FixedOffset,
}

impl InMemoryTransactionRepo {
    pub fn new(local_offset: FixedOffset) -> Self {
        Self {
            transactions: std::sync::Mutex::new(Vec::new()),
            local_offset,
        }
    }
}

fn newest_first(mut transactions: Vec<Transaction>) -> Vec<Transaction> {
    transactions.sort_by(|a, b| b.created.cmp(&a.created));
    transactions
}

#[async_trait::async_trait]
impl ITransactionRepo for InMemoryTransactionRepo {
    async fn insert(&self, transaction: &Transaction) -> anyhow::Result<()> {
        insert(transaction, &self.transactions);
        Ok(())
    }

    async fn save(&self, transaction: &Transaction) -> anyhow::Result<()> {
        save(transaction, &self.transactions);
        Ok(())
    }

    async fn find(&self, transaction_id: &ID) -> Option<Transaction> {
        find(transaction_id, &self.transactions)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Transaction>> {
        Ok(newest_first(find_by(&self.transactions, |_| true)))
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Transaction>> {
        Ok(newest_first(find_by(&self.transactions, |tx| {
            tx.user_id == *user_id
        })))
    }

    async fn find_open(&self) -> anyhow::Result<Vec<Transaction>> {
        Ok(find_by(&self.transactions, |tx| !tx.closed))
    }

    async fn find_open_due_between(
        &self,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> anyhow::Result<Vec<Transaction>> {
        Ok(find_by(&self.transactions, |tx| {
            match tx.due.normalize(&self.local_offset) {
                Some(due_at) => {
                    let due_at = due_at.with_timezone(&Utc);
                    !tx.closed && due_at >= from && due_at <= until
                }
                None => false,
            }
        }))
    }

    async fn delete(&self, transaction_id: &ID) -> Option<Transaction> {
        delete(transaction_id, &self.transactions)
    }
}
