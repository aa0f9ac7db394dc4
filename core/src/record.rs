//! The transaction record and its fixed enumerations.
//!
//! A record is immutable once built. The transaction id encodes ground
//! truth: FRAUD_-prefixed ids are synthetic fraud, TXN_-prefixed ids are
//! normal traffic. Serialization is fixed-format (column order, 2-decimal
//! amounts, 6-decimal coordinates, `YYYY-MM-DD HH:MM:SS` timestamps) so
//! the CSV contract holds without a downstream schema.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};

/// Timestamp wire format, second resolution. Zero-padded, so
/// lexicographic order of formatted timestamps is chronological order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Identifier prefix marking synthetic-fraud ground truth.
pub const FRAUD_ID_PREFIX: &str = "FRAUD_";

/// Identifier prefix for normal transactions.
pub const NORMAL_ID_PREFIX: &str = "TXN_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Purchase,
    Withdrawal,
    Transfer,
    Payment,
}

impl TransactionType {
    pub const ALL: [TransactionType; 4] = [
        TransactionType::Purchase,
        TransactionType::Withdrawal,
        TransactionType::Transfer,
        TransactionType::Payment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Purchase => "PURCHASE",
            Self::Withdrawal => "WITHDRAWAL",
            Self::Transfer => "TRANSFER",
            Self::Payment => "PAYMENT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Channel {
    Atm,
    Mobile,
    Online,
    Pos,
}

impl Channel {
    pub const ALL: [Channel; 4] =
        [Channel::Atm, Channel::Mobile, Channel::Online, Channel::Pos];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Atm => "ATM",
            Self::Mobile => "MOBILE",
            Self::Online => "ONLINE",
            Self::Pos => "POS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Approved,
    Pending,
    Declined,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Approved, Status::Pending, Status::Declined];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "APPROVED",
            Self::Pending => "PENDING",
            Self::Declined => "DECLINED",
        }
    }
}

/// One synthesized financial event. Field order is the serialized
/// column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    pub transaction_id: String,
    pub account_id: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: NaiveDateTime,
    #[serde(serialize_with = "serialize_amount")]
    pub amount: f64,
    pub merchant_name: String,
    pub transaction_type: TransactionType,
    #[serde(serialize_with = "serialize_coordinate")]
    pub latitude: f64,
    #[serde(serialize_with = "serialize_coordinate")]
    pub longitude: f64,
    pub channel: Channel,
    pub status: Status,
}

impl TransactionRecord {
    /// Whether this record is synthetic-fraud ground truth.
    pub fn is_fraud(&self) -> bool {
        self.transaction_id.starts_with(FRAUD_ID_PREFIX)
    }

    /// Wire-format timestamp string.
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Id for the index-th normal transaction.
pub fn normal_txn_id(index: usize) -> String {
    format!("{NORMAL_ID_PREFIX}{index:06}")
}

/// Id for the index-th fraud transaction (1-based sequence).
pub fn fraud_txn_id(index: usize) -> String {
    format!("{FRAUD_ID_PREFIX}{index:03}")
}

/// Build a second-resolution timestamp from a date and clock fields.
/// Callers draw the fields from bounded ranges; out-of-range values are
/// a programming error, not a runtime condition.
pub(crate) fn at_clock(date: NaiveDate, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, minute, second)
        .expect("clock fields within range")
}

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn serialize_timestamp<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&ts.format(TIMESTAMP_FORMAT))
}

fn serialize_amount<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&format_args!("{v:.2}"))
}

fn serialize_coordinate<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&format_args!("{v:.6}"))
}
