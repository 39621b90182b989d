//! Canonical transaction model shared by every scheme.

use crate::amount::Amount;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Canonical transaction type.
///
/// Text outside the canonical vocabulary is carried verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Deposit,
    Trade,
    Withdrawal,
    Buy,
    Sell,
    Other(String),
}

impl TransactionType {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionType::Deposit => "Deposit",
            TransactionType::Trade => "Trade",
            TransactionType::Withdrawal => "Withdrawal",
            TransactionType::Buy => "Buy",
            TransactionType::Sell => "Sell",
            TransactionType::Other(raw) => raw,
        }
    }
}

impl From<&str> for TransactionType {
    /// Exact, case-sensitive match on the canonical spelling.
    fn from(value: &str) -> Self {
        match value {
            "Deposit" => TransactionType::Deposit,
            "Trade" => TransactionType::Trade,
            "Withdrawal" => TransactionType::Withdrawal,
            "Buy" => TransactionType::Buy,
            "Sell" => TransactionType::Sell,
            other => TransactionType::Other(other.to_string()),
        }
    }
}

impl From<String> for TransactionType {
    fn from(value: String) -> Self {
        TransactionType::from(value.as_str())
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TransactionType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TransactionType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(TransactionType::from(s))
    }
}

/// A normalized, scheme-independent transaction record.
///
/// A record may carry a received leg, a sent leg, or both. Absent fields
/// serialize as `null`, never as zero or an empty string.
///
/// # Legs by type
///
/// A `Withdrawal` is expected to carry a sent leg and a `Deposit` or `Buy` a
/// received leg. Exports are normalized as written, so this is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalTransaction {
    /// Source timestamp, verbatim.
    pub date: String,

    pub transaction_type: TransactionType,

    pub received_amount: Option<Amount>,

    pub received_currency_iso: Option<String>,

    pub sent_amount: Option<Amount>,

    pub sent_currency_iso: Option<String>,
}

impl CanonicalTransaction {
    /// Creates a record with both legs absent.
    pub fn new(date: impl Into<String>, transaction_type: TransactionType) -> Self {
        CanonicalTransaction {
            date: date.into(),
            transaction_type,
            received_amount: None,
            received_currency_iso: None,
            sent_amount: None,
            sent_currency_iso: None,
        }
    }

    /// Builder: sets the received leg.
    pub fn with_received(mut self, amount: Option<Amount>, currency: Option<String>) -> Self {
        self.received_amount = amount;
        self.received_currency_iso = currency;
        self
    }

    /// Builder: sets the sent leg.
    pub fn with_sent(mut self, amount: Option<Amount>, currency: Option<String>) -> Self {
        self.sent_amount = amount;
        self.sent_currency_iso = currency;
        self
    }
}
