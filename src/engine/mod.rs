mod ops_engine;

use rust_decimal::Decimal;
use serde::Deserialize;

pub use ops_engine::OpsEngine;

use crate::types::AccountKey;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Open,
    Credit,
    Debit,
}

/// One row of the operations CSV.
///
/// `amount` is optional because `open` defaults to a zero opening balance;
/// `credit` and `debit` rows without an amount are rejected at apply time.
#[derive(Debug, Clone, Deserialize)]
pub struct Operation {
    #[serde(rename = "op")]
    pub kind: OperationKind,
    #[serde(rename = "account")]
    pub account_no: String,
    #[serde(rename = "routing")]
    pub routing_no: String,
    pub amount: Option<Decimal>,
}

impl Operation {
    pub fn account_key(&self) -> AccountKey {
        AccountKey::new(self.account_no.clone(), self.routing_no.clone())
    }
}
