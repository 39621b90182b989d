//! `type1` layout: `TRANSACTION_ID, TYPE, DATE, AMOUNT, CURRENCY`.
//!
//! One logical transaction spans one or two rows sharing a transaction id.
//! A negative amount is the sent leg, anything else the received leg.

use crate::error::{NormalizeError, Result};
use crate::loader::RawRow;
use crate::transaction::{CanonicalTransaction, TransactionType};
use log::{debug, warn};
use std::collections::HashMap;

const TRANSACTION_ID: &str = "TRANSACTION_ID";
const TYPE: &str = "TYPE";
const DATE: &str = "DATE";
const AMOUNT: &str = "AMOUNT";
const CURRENCY: &str = "CURRENCY";

/// Maps the export's type vocabulary onto the canonical one.
fn map_type(raw: &str) -> Option<TransactionType> {
    match raw {
        "DEPOSIT" => Some(TransactionType::Deposit),
        "TRADE" => Some(TransactionType::Trade),
        "WITHDRAWAL" => Some(TransactionType::Withdrawal),
        _ => None,
    }
}

/// Groups rows by transaction id, keeping first-seen id order.
fn group_by_id(rows: &[RawRow]) -> Result<Vec<(String, Vec<&RawRow>)>> {
    let mut groups: Vec<(String, Vec<&RawRow>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let id = row.require_text(TRANSACTION_ID)?;
        match index.get(&id) {
            Some(&pos) => groups[pos].1.push(row),
            None => {
                index.insert(id.clone(), groups.len());
                groups.push((id, vec![row]));
            }
        }
    }

    Ok(groups)
}

/// Builds one canonical record from the rows of a single transaction.
fn normalize_group(id: &str, rows: &[&RawRow]) -> Result<CanonicalTransaction> {
    // Groups are never empty: each is created with its first row.
    let first = rows[0];

    let raw_type = first.require_text(TYPE)?;
    let transaction_type =
        map_type(&raw_type).ok_or_else(|| NormalizeError::UnknownTransactionType {
            transaction_id: id.to_string(),
            value: raw_type.clone(),
        })?;
    let date = first.require_text(DATE)?;

    let mut received = None;
    let mut sent = None;

    for row in rows {
        let amount = row.require_amount(AMOUNT)?;
        let currency = row.get(CURRENCY).as_text();

        if amount.is_negative() {
            if sent.is_some() {
                warn!(
                    "Row {}: Transaction {} has more than one sent leg, keeping the last",
                    row.line, id
                );
            }
            sent = Some((-amount, currency));
        } else {
            if received.is_some() {
                warn!(
                    "Row {}: Transaction {} has more than one received leg, keeping the last",
                    row.line, id
                );
            }
            received = Some((amount, currency));
        }
    }

    let mut tx = CanonicalTransaction::new(date, transaction_type);
    if let Some((amount, currency)) = received {
        tx = tx.with_received(Some(amount), currency);
    }
    if let Some((amount, currency)) = sent {
        tx = tx.with_sent(Some(amount), currency);
    }
    Ok(tx)
}

/// Normalizes `type1` rows into one record per transaction id.
pub fn normalize(rows: &[RawRow]) -> Result<Vec<CanonicalTransaction>> {
    let groups = group_by_id(rows)?;
    debug!(
        "type1: {} rows grouped into {} transactions",
        rows.len(),
        groups.len()
    );

    groups
        .iter()
        .map(|(id, group)| normalize_group(id, group))
        .collect()
}
