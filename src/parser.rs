//! Parser facade: load, detect, normalize.
//!
//! Detection failure short-circuits: no rows are normalized against a
//! layout the file was not recognized as.

use crate::error::{NormalizeError, Result};
use crate::loader::{load_csv, LoadOptions, Table};
use crate::normalizer;
use crate::scheme::{SchemeKind, SchemeRegistry};
use crate::transaction::CanonicalTransaction;
use log::{debug, warn};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

/// Outcome of parsing one input.
///
/// Holds either the normalized transactions, or no transactions and the
/// error that stopped detection or normalization.
#[derive(Debug)]
pub struct ParseResult {
    scheme: Option<SchemeKind>,
    transactions: Vec<CanonicalTransaction>,
    error: Option<NormalizeError>,
}

impl ParseResult {
    fn success(scheme: SchemeKind, transactions: Vec<CanonicalTransaction>) -> Self {
        ParseResult {
            scheme: Some(scheme),
            transactions,
            error: None,
        }
    }

    fn failure(scheme: Option<SchemeKind>, error: NormalizeError) -> Self {
        ParseResult {
            scheme,
            transactions: Vec::new(),
            error: Some(error),
        }
    }

    /// The detected scheme, if detection succeeded.
    pub fn scheme(&self) -> Option<SchemeKind> {
        self.scheme
    }

    pub fn transactions(&self) -> &[CanonicalTransaction] {
        &self.transactions
    }

    pub fn error(&self) -> Option<&NormalizeError> {
        self.error.as_ref()
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Converts into the transactions, or the recorded error.
    pub fn into_result(self) -> Result<Vec<CanonicalTransaction>> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.transactions),
        }
    }

    /// Writes the transactions as a pretty-printed JSON array.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        write_transactions(&self.transactions, writer)
    }
}

/// Writes transactions as a JSON array with two-space indentation.
pub fn write_transactions<W: Write>(transactions: &[CanonicalTransaction], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, transactions)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Detects and normalizes exchange export files.
///
/// Holds only immutable configuration, so one parser can serve any number of
/// files.
#[derive(Debug, Clone, Default)]
pub struct StatementParser {
    registry: SchemeRegistry,
    options: LoadOptions,
}

impl StatementParser {
    /// Creates a parser for the built-in schemes with default load options.
    pub fn new() -> Self {
        StatementParser::default()
    }

    /// Creates a parser that recognizes the schemes in `registry`.
    pub fn with_registry(registry: SchemeRegistry) -> Self {
        StatementParser {
            registry,
            options: LoadOptions::default(),
        }
    }

    /// Replaces the load options.
    pub fn with_options(mut self, options: LoadOptions) -> Self {
        self.options = options;
        self
    }

    pub fn registry(&self) -> &SchemeRegistry {
        &self.registry
    }

    /// Parses the file at `path`.
    ///
    /// Load failures are returned as `Err`; detection and normalization
    /// failures are recorded in the returned [`ParseResult`].
    pub fn parse_path<P: AsRef<Path>>(&self, path: P) -> Result<ParseResult> {
        let path = path.as_ref();
        debug!("Parsing {}", path.display());
        let file = File::open(path)?;
        self.parse_reader(BufReader::new(file))
    }

    /// Parses delimited input from any reader.
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<ParseResult> {
        let table = load_csv(reader, self.options)?;
        Ok(self.parse_table(table))
    }

    /// Detects the scheme of a loaded table and normalizes its rows.
    pub fn parse_table(&self, table: Table) -> ParseResult {
        let scheme = match self.registry.detect(table.columns.as_slice()) {
            Some(scheme) => scheme,
            None => {
                warn!("No scheme matches columns {:?}", table.columns);
                return ParseResult::failure(
                    None,
                    NormalizeError::SchemeNotDetected {
                        columns: table.columns,
                    },
                );
            }
        };
        debug!("Detected scheme {}", scheme);

        match normalizer::normalize(scheme, &table.rows) {
            Ok(transactions) => {
                debug!(
                    "{}: {} rows normalized into {} transactions",
                    scheme,
                    table.rows.len(),
                    transactions.len()
                );
                ParseResult::success(scheme, transactions)
            }
            Err(e) => {
                warn!("{}: normalization failed: {}", scheme, e);
                ParseResult::failure(Some(scheme), e)
            }
        }
    }
}
