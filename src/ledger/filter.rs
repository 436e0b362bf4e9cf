use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::TransactionRecord;

/// Narrowing criteria for a transaction listing. The variants are mutually
/// exclusive; the boundary supplies at most one of them per request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransactionFilter {
    AllTime,
    /// Exact calendar date, interpreted in UTC.
    Date(NaiveDate),
    /// Minimum signed amount.
    MinAmount(Decimal),
    /// Minimum time of day, interpreted in UTC.
    MinTime(NaiveTime),
}

impl TransactionFilter {
    /// Maps the boundary strings (`alltime`, `date`, `amount`, `time`) onto
    /// a filter. Unrecognized kinds and unparsable values fall back to
    /// all-time rather than failing the request.
    pub fn parse(kind: &str, value: &str) -> Self {
        match kind.to_lowercase().as_str() {
            "date" => NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map(Self::Date)
                .unwrap_or(Self::AllTime),
            "amount" => Decimal::from_str(value)
                .map(Self::MinAmount)
                .unwrap_or(Self::AllTime),
            "time" => NaiveTime::parse_from_str(value, "%H:%M:%S")
                .map(Self::MinTime)
                .unwrap_or(Self::AllTime),
            _ => Self::AllTime,
        }
    }

    pub fn matches(&self, record: &TransactionRecord) -> bool {
        match self {
            Self::AllTime => true,
            Self::Date(date) => record.timestamp.date_naive() == *date,
            Self::MinAmount(minimum) => record.amount >= *minimum,
            Self::MinTime(minimum) => record.timestamp.time() >= *minimum,
        }
    }
}
