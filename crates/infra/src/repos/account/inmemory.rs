use super::IAccountRepo;
use crate::repos::shared::inmemory_repo::*;
use fincv_domain::{Account, Transfer, TransferError, ID};

pub struct InMemoryAccountRepo {
    accounts: std::sync::Mutex<Vec<Account>>,
}

impl InMemoryAccountRepo {
    pub fn new() -> Self {
        Self {
            accounts: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IAccountRepo for InMemoryAccountRepo {
    async fn insert(&self, account: &Account) -> anyhow::Result<()> {
        let mut accounts = lock(&self.accounts);
        if accounts.iter().any(|a| a.number == account.number) {
            return Err(anyhow::anyhow!(
                "Account number: {} is already taken",
                account.number
            ));
        }
        accounts.push(account.clone());
        Ok(())
    }

    async fn save(&self, account: &Account) -> anyhow::Result<()> {
        save(account, &self.accounts);
        Ok(())
    }

    async fn find(&self, account_id: &ID) -> Option<Account> {
        find(account_id, &self.accounts)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Account>> {
        Ok(find_by(&self.accounts, |_| true))
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Account>> {
        Ok(find_by(&self.accounts, |a| a.user_id == *user_id))
    }

    async fn find_by_number(&self, number: &str) -> Option<Account> {
        find_by(&self.accounts, |a| a.number == number)
            .into_iter()
            .next()
    }

    async fn delete(&self, account_id: &ID) -> Option<Account> {
        delete(account_id, &self.accounts)
    }

    async fn transfer(&self, transfer: &Transfer) -> Result<(Account, Account), TransferError> {
        let mut accounts = lock(&self.accounts);
        let position = |number: &str| {
            accounts
                .iter()
                .position(|a| a.number == number)
                .ok_or_else(|| TransferError::AccountNotFound(number.to_string()))
        };
        let from_index = position(&transfer.from_number)?;
        let to_index = position(&transfer.to_number)?;

        let mut from = accounts[from_index].clone();
        let mut to = accounts[to_index].clone();
        transfer.apply(&mut from, &mut to)?;

        accounts[from_index] = from.clone();
        accounts[to_index] = to.clone();
        Ok((from, to))
    }
}
