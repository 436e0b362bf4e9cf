use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::Party;
use crate::types::TransactionId;

/// A committed transaction record.
///
/// Immutable once written: no update or delete operation exists anywhere in
/// the crate. One of `sender`/`receiver` is an external sentinel for
/// deposits and withdrawals.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    /// Store-assigned identifier, monotonically increasing.
    pub id: TransactionId,
    pub sender: Party,
    pub receiver: Party,
    /// Signed amount as seen by the ledger; always positive for the
    /// credit/debit pair, the direction is carried by the parties.
    pub amount: Decimal,
    pub timestamp: DateTime<Utc>,
}

/// A transaction record before the store has assigned it an identifier.
///
/// Built inside the mutation closure so that the balance change and the
/// record append commit as one unit.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub sender: Party,
    pub receiver: Party,
    pub amount: Decimal,
    pub timestamp: DateTime<Utc>,
}

impl NewTransaction {
    pub fn new(sender: Party, receiver: Party, amount: Decimal) -> Self {
        Self {
            sender,
            receiver,
            amount,
            timestamp: Utc::now(),
        }
    }

    /// Completes the record with the id the store assigned at commit time.
    pub fn into_record(self, id: TransactionId) -> TransactionRecord {
        TransactionRecord {
            id,
            sender: self.sender,
            receiver: self.receiver,
            amount: self.amount,
            timestamp: self.timestamp,
        }
    }
}
