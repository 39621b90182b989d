//! Tabular loader: reads a delimited file into a column signature and rows.

use crate::amount::Amount;
use crate::error::{NormalizeError, Result};
use csv::{ReaderBuilder, Trim};
use log::debug;
use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::str::FromStr;

/// Options controlling how input files are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
}

impl LoadOptions {
    /// Returns options using the given delimiter.
    pub fn with_delimiter(delimiter: u8) -> Self {
        LoadOptions { delimiter }
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions { delimiter: b',' }
    }
}

/// A single typed cell value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// A value that parses as a decimal number, with its source text.
    Number(Amount, String),

    /// Any other non-empty value.
    Text(String),

    /// An empty field.
    Missing,
}

impl Cell {
    /// Types a trimmed field: empty is missing, decimals are numbers.
    pub fn infer(field: &str) -> Self {
        if field.is_empty() {
            return Cell::Missing;
        }
        match Amount::from_str(field) {
            Ok(amount) => Cell::Number(amount, field.to_string()),
            Err(_) => Cell::Text(field.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Returns the cell's source text, or `None` when missing.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Missing => None,
            other => Some(other.to_string()),
        }
    }

    /// Returns the numeric value, if this cell is a number.
    pub fn as_amount(&self) -> Option<Amount> {
        match self {
            Cell::Number(amount, _) => Some(*amount),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(_, raw) | Cell::Text(raw) => f.write_str(raw),
            Cell::Missing => Ok(()),
        }
    }
}

/// One physical data line of the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-indexed line number in the source, counting the header.
    pub line: usize,

    cells: HashMap<String, Cell>,
}

impl RawRow {
    /// Builds a row from `(column, cell)` pairs.
    pub fn new<I, S>(line: usize, cells: I) -> Self
    where
        I: IntoIterator<Item = (S, Cell)>,
        S: Into<String>,
    {
        RawRow {
            line,
            cells: cells.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Returns the cell for `column`; unknown columns read as missing.
    pub fn get(&self, column: &str) -> &Cell {
        self.cells.get(column).unwrap_or(&Cell::Missing)
    }

    /// Returns the cell as text or an `InvalidCell` error if it is missing.
    pub fn require_text(&self, column: &str) -> Result<String> {
        self.get(column)
            .as_text()
            .ok_or_else(|| self.invalid(column, "value is missing"))
    }

    /// Returns the cell as a number or an `InvalidCell` error.
    pub fn require_amount(&self, column: &str) -> Result<Amount> {
        match self.get(column) {
            Cell::Number(amount, _) => Ok(*amount),
            Cell::Missing => Err(self.invalid(column, "amount is missing")),
            Cell::Text(text) => Err(self.invalid(column, &format!("{:?} is not a number", text))),
        }
    }

    /// Returns the cell as an optional number; text is an `InvalidCell` error.
    pub fn optional_amount(&self, column: &str) -> Result<Option<Amount>> {
        match self.get(column) {
            Cell::Number(amount, _) => Ok(Some(*amount)),
            Cell::Missing => Ok(None),
            Cell::Text(text) => Err(self.invalid(column, &format!("{:?} is not a number", text))),
        }
    }

    fn invalid(&self, column: &str, message: &str) -> NormalizeError {
        NormalizeError::InvalidCell {
            row: self.line,
            column: column.to_string(),
            message: message.to_string(),
        }
    }
}

/// A loaded file: its column signature and its rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<RawRow>,
}

/// Reads a delimited file into a [`Table`].
///
/// Header names are kept byte-exact; field values are trimmed. A file with
/// no header line is an `EmptyInput` error.
pub fn load_csv<R: Read>(reader: R, options: LoadOptions) -> Result<Table> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .trim(Trim::Fields)
        .flexible(true)
        .from_reader(reader);

    let columns: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
    if columns.is_empty() || columns.iter().all(String::is_empty) {
        return Err(NormalizeError::EmptyInput);
    }

    let mut rows = Vec::new();
    for (row_idx, result) in csv_reader.records().enumerate() {
        let record = result?;
        let line = row_idx + 2; // 1-indexed, accounting for header row
        let cells = columns
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), Cell::infer(record.get(i).unwrap_or(""))));
        rows.push(RawRow::new(line, cells));
    }

    debug!("Loaded {} rows with columns {:?}", rows.len(), columns);
    Ok(Table { columns, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_cell_inference() {
        assert_eq!(Cell::infer(""), Cell::Missing);
        assert_eq!(
            Cell::infer("-50"),
            Cell::Number(Amount::from_str("-50").unwrap(), "-50".to_string())
        );
        assert_eq!(Cell::infer("BTC-EUR"), Cell::Text("BTC-EUR".to_string()));
        assert_eq!(
            Cell::infer("2021-03-01 10:00:00"),
            Cell::Text("2021-03-01 10:00:00".to_string())
        );
    }

    #[test]
    fn test_cell_renders_verbatim() {
        assert_eq!(Cell::infer("1.50").as_text().as_deref(), Some("1.50"));
        assert_eq!(Cell::infer("T1").as_text().as_deref(), Some("T1"));
        assert_eq!(Cell::Missing.as_text(), None);
    }

    #[test]
    fn test_numeric_looking_cells_keep_their_spelling() {
        for field in ["+1612137600", "0020210101", "20210101_1000", "007"] {
            let cell = Cell::infer(field);
            assert_eq!(cell.as_text().as_deref(), Some(field));
        }
        assert_eq!(
            Cell::infer("0020210101").as_amount(),
            Some(Amount::from_str("20210101").unwrap())
        );
    }

    #[test]
    fn test_load_keeps_header_order_and_trims_fields() {
        let csv = "TRANSACTION_ID,TYPE,DATE,AMOUNT,CURRENCY\nT1, DEPOSIT ,2021-01-01, 100 ,EUR\n";
        let table = load_csv(Cursor::new(csv), LoadOptions::default()).unwrap();

        assert_eq!(
            table.columns,
            vec!["TRANSACTION_ID", "TYPE", "DATE", "AMOUNT", "CURRENCY"]
        );
        assert_eq!(table.rows.len(), 1);
        let row = &table.rows[0];
        assert_eq!(row.line, 2);
        assert_eq!(row.get("TYPE"), &Cell::Text("DEPOSIT".to_string()));
        assert_eq!(row.require_amount("AMOUNT").unwrap().to_string(), "100");
    }

    #[test]
    fn test_header_is_not_trimmed() {
        let csv = "TYPE, TIME\nDEPOSIT,now\n";
        let table = load_csv(Cursor::new(csv), LoadOptions::default()).unwrap();
        assert_eq!(table.columns, vec!["TYPE", " TIME"]);
    }

    #[test]
    fn test_short_rows_read_as_missing() {
        let csv = "TYPE,TIME,SOLD AMOUNT\nTRADE,now\n";
        let table = load_csv(Cursor::new(csv), LoadOptions::default()).unwrap();
        assert!(table.rows[0].get("SOLD AMOUNT").is_missing());
        assert_eq!(table.rows[0].optional_amount("SOLD AMOUNT").unwrap(), None);
    }

    #[test]
    fn test_custom_delimiter() {
        let csv = "TYPE;TIME\nTRADE;now\n";
        let table = load_csv(Cursor::new(csv), LoadOptions::with_delimiter(b';')).unwrap();
        assert_eq!(table.columns, vec!["TYPE", "TIME"]);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let result = load_csv(Cursor::new(""), LoadOptions::default());
        assert!(matches!(result, Err(NormalizeError::EmptyInput)));
    }

    #[test]
    fn test_require_reports_row_and_column() {
        let row = RawRow::new(7, vec![("AMOUNT", Cell::Text("abc".to_string()))]);
        match row.require_amount("AMOUNT") {
            Err(NormalizeError::InvalidCell { row, column, .. }) => {
                assert_eq!(row, 7);
                assert_eq!(column, "AMOUNT");
            }
            other => panic!("Expected InvalidCell, got {:?}", other),
        }
        assert!(row.require_text("DATE").is_err());
    }
}
