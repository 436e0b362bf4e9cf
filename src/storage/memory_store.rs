use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use dashmap::DashMap;
use dashmap::iter::Iter;
use dashmap::mapref::entry::Entry;
use rust_decimal::Decimal;

use crate::models::{Account, LedgerError, NewTransaction, TransactionRecord};
use crate::storage::LedgerStore;
use crate::types::AccountKey;

/// In-memory store backing the ledger core.
///
/// The `DashMap` entry guard doubles as the per-account row lock: `mutate`
/// holds it across the read-check-write and the log append, so concurrent
/// mutations against the same key serialize while other accounts proceed.
pub struct MemoryStore {
    accounts: DashMap<AccountKey, Account>,
    log: Mutex<Vec<TransactionRecord>>,
    next_id: AtomicU64,
    fail_next_commit: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
            log: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
            fail_next_commit: AtomicBool::new(false),
        }
    }

    pub fn iter(&self) -> Iter<'_, AccountKey, Account> {
        self.accounts.iter()
    }

    /// Arms a one-shot fault: the next `mutate` fails after the closure has
    /// produced its result but before anything is committed. Lets tests
    /// verify that a failure between the balance update and the record
    /// insert leaves the store untouched.
    pub fn fail_next_commit(&self) {
        self.fail_next_commit.store(true, Ordering::SeqCst);
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for MemoryStore {
    fn create_account(&self, key: &AccountKey, initial_balance: Decimal) -> Result<(), LedgerError> {
        match self.accounts.entry(key.clone()) {
            Entry::Occupied(_) => Err(LedgerError::account_exists(key)),
            Entry::Vacant(vacant) => {
                vacant.insert(Account::new(key.clone(), initial_balance));
                Ok(())
            }
        }
    }

    fn read_balance(&self, key: &AccountKey) -> Result<Decimal, LedgerError> {
        self.accounts
            .get(key)
            .map(|account| account.balance)
            .ok_or_else(|| LedgerError::account_not_found(key))
    }

    fn mutate(
        &self,
        key: &AccountKey,
        op: &mut dyn FnMut(&mut Account) -> Result<NewTransaction, LedgerError>,
    ) -> Result<(Decimal, TransactionRecord), LedgerError> {
        // Entry guard held until return: no interleaving from other
        // mutations against the same account.
        let mut entry = self
            .accounts
            .get_mut(key)
            .ok_or_else(|| LedgerError::account_not_found(key))?;

        // Work on a copy so a failure partway through commits nothing.
        let mut working = entry.clone();
        let new_transaction = op(&mut working)?;

        if self.fail_next_commit.swap(false, Ordering::SeqCst) {
            return Err(LedgerError::store_unavailable("injected commit fault"));
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let record = new_transaction.into_record(id);

        let mut log = self
            .log
            .lock()
            .map_err(|_| LedgerError::store_unavailable("transaction log poisoned"))?;
        log.push(record.clone());
        *entry = working;

        Ok((entry.balance, record))
    }

    fn transactions_for(&self, key: &AccountKey) -> Result<Vec<TransactionRecord>, LedgerError> {
        if !self.accounts.contains_key(key) {
            return Err(LedgerError::account_not_found(key));
        }

        let log = self
            .log
            .lock()
            .map_err(|_| LedgerError::store_unavailable("transaction log poisoned"))?;

        Ok(log
            .iter()
            .filter(|record| record.sender.is_account(key) || record.receiver.is_account(key))
            .cloned()
            .collect())
    }
}
