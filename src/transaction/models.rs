//! Data models for transfer records

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transaction lifecycle status
///
/// Every record starts as `Pending`; the update operation may move it to
/// `Completed` or `Failed`. No current-state guard exists, so a record can be
/// flipped between the two terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

impl TransactionStatus {
    /// String form stored in the `status` column
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for status strings that are none of pending/completed/failed
#[derive(Debug, thiserror::Error, PartialEq)]
#[error("unknown transaction status: '{0}'")]
pub struct ParseStatusError(pub String);

impl FromStr for TransactionStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TransactionStatus::Pending),
            "completed" => Ok(TransactionStatus::Completed),
            "failed" => Ok(TransactionStatus::Failed),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// A single transfer record
///
/// `id`, `status` and `created_at` are server-controlled: the gateway assigns
/// them on create and ignores any client-supplied values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// Monetary value; serialized as a string to preserve precision
    pub amount: Decimal,
    pub currency: String,
    pub sender: String,
    pub receiver: String,
    pub status: TransactionStatus,
    pub created_at: DateTime<Utc>,
}

/// Client payload for the create operation
///
/// All fields default so that a missing field surfaces as a validation
/// violation rather than a decode failure. Unknown fields (including a
/// client-supplied `id` or `status`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTransaction {
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub receiver: String,
}
