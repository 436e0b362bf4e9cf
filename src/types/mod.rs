mod account_key;

pub use account_key::AccountKey;

pub type TransactionId = u64;
