use crate::account::Account;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TransferError {
    #[error("Transfer amounts must be positive")]
    InvalidAmount,
    #[error("Withdraw amount: {withdraw} does not match deposit amount: {deposit}")]
    AmountMismatch { withdraw: i64, deposit: i64 },
    #[error("Account with number: {0} was not found")]
    AccountNotFound(String),
    #[error("Cannot transfer between the same account")]
    SameAccount,
    #[error("Insufficient balance: {balance}, needed: {needed}")]
    InsufficientBalance { balance: i64, needed: i64 },
    #[error("Depositing: {amount} would overflow the balance: {balance} of the destination account")]
    BalanceOverflow { balance: i64, amount: i64 },
    #[error("Transfer could not be stored")]
    StorageError,
}

/// A validated request to move money between two accounts by number.
#[derive(Debug, Clone, PartialEq)]
pub struct Transfer {
    pub from_number: String,
    pub to_number: String,
    pub amount: i64,
}

impl Transfer {
    pub fn new(
        from_number: String,
        withdraw_amount: i64,
        to_number: String,
        deposit_amount: i64,
    ) -> Result<Self, TransferError> {
        if withdraw_amount <= 0 || deposit_amount <= 0 {
            return Err(TransferError::InvalidAmount);
        }
        if withdraw_amount != deposit_amount {
            return Err(TransferError::AmountMismatch {
                withdraw: withdraw_amount,
                deposit: deposit_amount,
            });
        }
        Ok(Self {
            from_number,
            to_number,
            amount: withdraw_amount,
        })
    }

    /// Moves the amount from `from` to `to` and counts the usage of `from`.
    /// Both accounts are left untouched when the transfer is rejected.
    pub fn apply(&self, from: &mut Account, to: &mut Account) -> Result<(), TransferError> {
        if from.id == to.id {
            return Err(TransferError::SameAccount);
        }
        if self.amount > from.balance {
            return Err(TransferError::InsufficientBalance {
                balance: from.balance,
                needed: self.amount,
            });
        }
        let credited = to
            .balance
            .checked_add(self.amount)
            .ok_or(TransferError::BalanceOverflow {
                balance: to.balance,
                amount: self.amount,
            })?;

        from.balance -= self.amount;
        from.usage_count += 1;
        to.balance = credited;
        Ok(())
    }
}
