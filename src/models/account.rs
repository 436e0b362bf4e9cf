use crate::models::LedgerError;
use crate::types::AccountKey;
use rust_decimal::Decimal;

/// A single account row: the two-part key plus its current balance.
///
/// The balance is never written directly by callers; it only moves through
/// `credit` and `debit`, and the store commits each move together with
/// exactly one transaction record.
#[derive(Debug, Clone)]
pub struct Account {
    pub key: AccountKey,
    pub balance: Decimal,
}

impl Account {
    /// Creates an account with the given opening balance.
    pub fn new(key: AccountKey, initial_balance: Decimal) -> Self {
        Self {
            key,
            balance: initial_balance,
        }
    }

    /// Increases the balance by `amount`.
    ///
    /// # Errors
    /// Returns `InvalidAmount` if `amount` is not strictly positive.
    pub fn credit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        Self::require_positive(amount)?;
        self.balance += amount;
        Ok(())
    }

    /// Decreases the balance by `amount` after the read-check-write
    /// verification that funds cover it.
    ///
    /// The caller must hold the account's exclusive lock for the whole
    /// check-and-update; see `LedgerStore::mutate`.
    ///
    /// # Errors
    /// Returns `InvalidAmount` if `amount` is not strictly positive, or
    /// `InsufficientFunds` if the debit would drive the balance negative.
    pub fn debit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        Self::require_positive(amount)?;

        if self.balance < amount {
            return Err(LedgerError::insufficient_funds(&self.key, amount, self.balance));
        }

        self.balance -= amount;
        Ok(())
    }

    fn require_positive(amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(amount));
        }

        Ok(())
    }
}
