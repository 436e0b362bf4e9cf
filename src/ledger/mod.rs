mod core;
mod filter;

pub use self::core::Ledger;
pub use filter::TransactionFilter;
