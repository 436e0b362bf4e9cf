use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Two-part account key: the (account number, routing number) pair.
///
/// A single part on its own does not identify an account; equality and
/// hashing always cover both parts.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct AccountKey {
    pub account_no: String,
    pub routing_no: String,
}

impl AccountKey {
    pub fn new(account_no: impl Into<String>, routing_no: impl Into<String>) -> Self {
        Self {
            account_no: account_no.into(),
            routing_no: routing_no.into(),
        }
    }
}

impl Display for AccountKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}/{}", self.account_no, self.routing_no)
    }
}
