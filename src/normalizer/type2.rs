//! `type2` layout: `TYPE, TIME, SOLD AMOUNT, BOUGHT AMOUNT, CURRENCIES`.
//!
//! Each row is one transaction. `CURRENCIES` is either a single code, a
//! two-token pair such as `BTC-EUR`, or a three-token code whose first and
//! third tokens are the sent and received currencies.

use crate::error::Result;
use crate::loader::RawRow;
use crate::transaction::{CanonicalTransaction, TransactionType};
use log::debug;

const TYPE: &str = "TYPE";
const TIME: &str = "TIME";
const SOLD_AMOUNT: &str = "SOLD AMOUNT";
const BOUGHT_AMOUNT: &str = "BOUGHT AMOUNT";
const CURRENCIES: &str = "CURRENCIES";

const CURRENCY_DELIMITER: char = '-';

/// Returns `(sent, received)` currencies for a three-or-more token code.
fn split_compound(currencies: &str) -> Option<(String, String)> {
    let parts: Vec<&str> = currencies.split(CURRENCY_DELIMITER).collect();
    if parts.len() > 2 {
        Some((parts[0].to_string(), parts[2].to_string()))
    } else {
        None
    }
}

fn normalize_row(row: &RawRow) -> Result<CanonicalTransaction> {
    let transaction_type = TransactionType::from(row.require_text(TYPE)?);
    let date = row.require_text(TIME)?;
    let sold = row.optional_amount(SOLD_AMOUNT)?;
    let bought = row.optional_amount(BOUGHT_AMOUNT)?;
    let currencies = row.get(CURRENCIES).as_text();

    let mut sent_currency = sold.and(currencies.clone());
    let mut received_currency = bought.and(currencies.clone());

    if let Some((sent, received)) = currencies.as_deref().and_then(split_compound) {
        sent_currency = Some(sent);
        received_currency = Some(received);
    }

    if currencies.is_none() && (sold.is_some() || bought.is_some()) {
        debug!("Row {}: No currencies given for traded amounts", row.line);
    }

    Ok(CanonicalTransaction::new(date, transaction_type)
        .with_received(bought, received_currency)
        .with_sent(sold, sent_currency))
}

/// Normalizes `type2` rows, one record per row in source order.
///
/// Every row starts from empty legs; nothing carries over between rows.
pub fn normalize(rows: &[RawRow]) -> Result<Vec<CanonicalTransaction>> {
    debug!("type2: normalizing {} rows", rows.len());
    rows.iter().map(normalize_row).collect()
}
