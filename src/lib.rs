//! # Exchange Normalizer
//!
//! Recognizes the transaction export layout of a cryptocurrency exchange or
//! wallet from its column header and normalizes its rows into canonical
//! transaction records.
//!
//! ## Design Principles
//!
//! - **Exact detection**: a layout matches only on an identical, ordered
//!   column signature; unknown layouts are rejected, never guessed
//! - **All or nothing**: a file either normalizes completely or yields no
//!   transactions and an error
//! - **Exact amounts**: amounts are decimals via `rust_decimal`
//! - **Deterministic output**: records follow source order
//!
//! ## Example
//!
//! ```no_run
//! use exchange_normalizer::StatementParser;
//! use std::io::Cursor;
//!
//! let csv = "TRANSACTION_ID,TYPE,DATE,AMOUNT,CURRENCY\nT1,DEPOSIT,2021-01-01,100,EUR\n";
//! let parser = StatementParser::new();
//! let result = parser.parse_reader(Cursor::new(csv)).unwrap();
//! result.write_json(std::io::stdout()).unwrap();
//! ```

pub mod amount;
pub mod error;
pub mod loader;
pub mod normalizer;
pub mod parser;
pub mod scheme;
pub mod transaction;

pub use amount::Amount;
pub use error::{NormalizeError, Result};
pub use loader::{load_csv, Cell, LoadOptions, RawRow, Table};
pub use parser::{write_transactions, ParseResult, StatementParser};
pub use scheme::{Scheme, SchemeKind, SchemeRegistry, TYPE1_COLUMNS, TYPE2_COLUMNS};
pub use transaction::{CanonicalTransaction, TransactionType};
