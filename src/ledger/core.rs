use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use crate::ledger::TransactionFilter;
use crate::models::{ExternalParty, LedgerError, NewTransaction, Party, TransactionRecord};
use crate::storage::LedgerStore;
use crate::types::AccountKey;

/// The account ledger core.
///
/// Couples every balance change to exactly one transaction record: a credit
/// appends a record with `EXTERNAL_DEPOSIT` as sender, a debit appends one
/// with `CASH_WITHDRAWAL` as receiver, and both commit atomically with the
/// balance through [`LedgerStore::mutate`]. The store is an injected
/// capability; the core holds no connection state of its own and never
/// caches balances between calls.
pub struct Ledger<S: LedgerStore> {
    store: Arc<S>,
}

impl<S: LedgerStore> Ledger<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Creates an account with the given opening balance.
    ///
    /// # Errors
    /// Returns `InvalidAmount` if the opening balance is negative, or
    /// `AccountExists` if the key is already taken.
    pub fn open_account(&self, key: &AccountKey, initial_balance: Decimal) -> Result<(), LedgerError> {
        if initial_balance < Decimal::ZERO {
            return Err(LedgerError::invalid_amount(initial_balance));
        }

        self.store.create_account(key, initial_balance)?;
        debug!("Opened account [{key}] with balance [{initial_balance}]");

        Ok(())
    }

    /// Increases the account balance by `amount` and appends the matching
    /// deposit record. Returns the updated balance.
    pub fn credit(&self, key: &AccountKey, amount: Decimal) -> Result<Decimal, LedgerError> {
        let (balance, record) = self.store.mutate(key, &mut |account| {
            account.credit(amount)?;

            Ok(NewTransaction::new(
                Party::External(ExternalParty::Deposit),
                Party::Account(account.key.clone()),
                amount,
            ))
        })?;

        debug!("Credit [{amount}] on [{key}] committed as record [{}]", record.id);

        Ok(balance)
    }

    /// Decreases the account balance by `amount` and appends the matching
    /// withdrawal record. The funds check and the decrement run under the
    /// account's row lock, so concurrent debits cannot both pass the check
    /// against the same starting balance. Returns the updated balance.
    pub fn debit(&self, key: &AccountKey, amount: Decimal) -> Result<Decimal, LedgerError> {
        let (balance, record) = self.store.mutate(key, &mut |account| {
            account.debit(amount)?;

            Ok(NewTransaction::new(
                Party::Account(account.key.clone()),
                Party::External(ExternalParty::Withdrawal),
                amount,
            ))
        })?;

        debug!("Debit [{amount}] on [{key}] committed as record [{}]", record.id);

        Ok(balance)
    }

    /// Current committed balance.
    pub fn balance(&self, key: &AccountKey) -> Result<Decimal, LedgerError> {
        self.store.read_balance(key)
    }

    /// Records where the account is sender or receiver, narrowed by the
    /// filter and ordered by (timestamp, id) so listings are reproducible.
    pub fn transactions(
        &self,
        key: &AccountKey,
        filter: &TransactionFilter,
    ) -> Result<Vec<TransactionRecord>, LedgerError> {
        let mut records = self.store.transactions_for(key)?;
        records.retain(|record| filter.matches(record));
        records.sort_by(|a, b| (a.timestamp, a.id).cmp(&(b.timestamp, b.id)));

        Ok(records)
    }
}
