mod generator;
mod lcg;
#[cfg(test)]
mod tests;

use chrono::NaiveDate;
use serde::Serialize;

pub use generator::{generate_history, generate_history_on};
pub use lcg::Lcg;

/// Spending category attached to a synthetic transaction.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Category {
    Income,
    Housing,
    General,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Credit,
    Debit,
}

/// A generated transaction. Same shape as a ledger record but never
/// persisted; it exists only inside an [`AccountHistory`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct SyntheticTransaction {
    pub id: String,
    pub date: NaiveDate,
    pub amount: i64,
    pub category: Category,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub direction: Direction,
}

/// The full generator output for one identity: the synthetic transactions
/// newest-first plus a derived display balance. Unrelated to any persisted
/// ledger account.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AccountHistory {
    pub identity: String,
    /// Masked account number shown by the dashboard, `****` plus the tail
    /// of the identity.
    pub account_mask: String,
    pub currency: &'static str,
    /// Display balance: a fixed baseline plus the sum of all amounts.
    pub balance: i64,
    pub transactions: Vec<SyntheticTransaction>,
}
