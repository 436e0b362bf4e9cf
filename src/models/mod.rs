mod account;
mod errors;
mod transaction;

use std::fmt;
use std::fmt::{Display, Formatter};

use crate::types::AccountKey;

pub use account::Account;
pub use errors::LedgerError;
pub use transaction::{NewTransaction, TransactionRecord};

/// Sentinel counterpart for transactions that originate or terminate
/// outside the ledger.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ExternalParty {
    Deposit,
    Withdrawal,
}

impl Display for ExternalParty {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ExternalParty::Deposit => write!(formatter, "EXTERNAL_DEPOSIT"),
            ExternalParty::Withdrawal => write!(formatter, "CASH_WITHDRAWAL"),
        }
    }
}

/// One side of a transaction record: a ledger account or an external party.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Party {
    Account(AccountKey),
    External(ExternalParty),
}

impl Party {
    /// True when this side of the record refers to the given account.
    pub fn is_account(&self, key: &AccountKey) -> bool {
        matches!(self, Party::Account(k) if k == key)
    }
}

impl Display for Party {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Party::Account(key) => write!(formatter, "{key}"),
            Party::External(party) => write!(formatter, "{party}"),
        }
    }
}
