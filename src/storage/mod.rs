mod memory_store;

use rust_decimal::Decimal;

use crate::models::{Account, LedgerError, NewTransaction, TransactionRecord};
use crate::types::AccountKey;

pub use memory_store::MemoryStore;

/// Injected persistence capability for the ledger core.
///
/// `mutate` is the atomic unit behind every credit and debit: the
/// implementation runs the closure with the account row exclusively locked,
/// then commits the new balance together with the returned record, or commits
/// nothing when the closure or the store itself fails. The lock is released
/// on both paths, so a failed operation never wedges the account.
pub trait LedgerStore: Send + Sync + 'static {
    fn create_account(&self, key: &AccountKey, initial_balance: Decimal) -> Result<(), LedgerError>;

    fn read_balance(&self, key: &AccountKey) -> Result<Decimal, LedgerError>;

    fn mutate(
        &self,
        key: &AccountKey,
        op: &mut dyn FnMut(&mut Account) -> Result<NewTransaction, LedgerError>,
    ) -> Result<(Decimal, TransactionRecord), LedgerError>;

    /// All committed records where the account is sender or receiver.
    fn transactions_for(&self, key: &AccountKey) -> Result<Vec<TransactionRecord>, LedgerError>;
}
