use crate::types::AccountKey;
use rust_decimal::Decimal;
use thiserror::Error;

/// Failure taxonomy for ledger operations.
///
/// Every variant reports a failure that left persisted state untouched; the
/// caller can always retry safely. The ledger itself never retries.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Amount [{amount}] must be positive")]
    InvalidAmount { amount: Decimal },
    #[error("Account [{key}] was not found")]
    AccountNotFound { key: AccountKey },
    #[error("Account [{key}] already exists")]
    AccountExists { key: AccountKey },
    #[error("Insufficient funds on account [{key}]: requested [{requested}], available [{available}]")]
    InsufficientFunds {
        key: AccountKey,
        requested: Decimal,
        available: Decimal,
    },
    #[error("Store unavailable: {reason}")]
    StoreUnavailable { reason: String },
}

impl LedgerError {
    pub fn invalid_amount(amount: Decimal) -> Self {
        Self::InvalidAmount { amount }
    }

    pub fn account_not_found(key: &AccountKey) -> Self {
        Self::AccountNotFound { key: key.clone() }
    }

    pub fn account_exists(key: &AccountKey) -> Self {
        Self::AccountExists { key: key.clone() }
    }

    pub fn insufficient_funds(key: &AccountKey, requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds {
            key: key.clone(),
            requested,
            available,
        }
    }

    pub fn store_unavailable(reason: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            reason: reason.into(),
        }
    }
}
