//! Scheme registry and detection.
//!
//! A scheme is identified solely by its column signature: the header names
//! of a file, in order, compared byte for byte.

use std::fmt;

/// Columns of the `type1` layout: one row per leg, signed amounts.
pub const TYPE1_COLUMNS: &[&str] = &["TRANSACTION_ID", "TYPE", "DATE", "AMOUNT", "CURRENCY"];

/// Columns of the `type2` layout: one row per transaction, compound currencies.
pub const TYPE2_COLUMNS: &[&str] = &["TYPE", "TIME", "SOLD AMOUNT", "BOUGHT AMOUNT", "CURRENCIES"];

/// Supported export layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeKind {
    Type1,
    Type2,
}

impl SchemeKind {
    pub fn name(&self) -> &'static str {
        match self {
            SchemeKind::Type1 => "type1",
            SchemeKind::Type2 => "type2",
        }
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A registered layout: its kind and exact column signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheme {
    pub kind: SchemeKind,
    pub columns: Vec<String>,
}

impl Scheme {
    pub fn new<S: AsRef<str>>(kind: SchemeKind, columns: &[S]) -> Self {
        Scheme {
            kind,
            columns: columns.iter().map(|c| c.as_ref().to_string()).collect(),
        }
    }

    /// Exact, order-sensitive signature comparison.
    pub fn matches<S: AsRef<str>>(&self, columns: &[S]) -> bool {
        self.columns.len() == columns.len()
            && self
                .columns
                .iter()
                .zip(columns)
                .all(|(expected, actual)| expected.as_str() == actual.as_ref())
    }
}

/// The set of layouts a parser recognizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeRegistry {
    schemes: Vec<Scheme>,
}

impl SchemeRegistry {
    /// Creates a registry from an explicit list; earlier entries win.
    pub fn new(schemes: Vec<Scheme>) -> Self {
        SchemeRegistry { schemes }
    }

    /// The built-in `type1` and `type2` layouts.
    pub fn builtin() -> Self {
        SchemeRegistry::new(vec![
            Scheme::new(SchemeKind::Type1, TYPE1_COLUMNS),
            Scheme::new(SchemeKind::Type2, TYPE2_COLUMNS),
        ])
    }

    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }

    /// Returns the first scheme whose signature equals `columns` exactly.
    pub fn detect<S: AsRef<str>>(&self, columns: &[S]) -> Option<SchemeKind> {
        self.schemes
            .iter()
            .find(|scheme| scheme.matches(columns))
            .map(|scheme| scheme.kind)
    }
}

impl Default for SchemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_builtin_schemes() {
        let registry = SchemeRegistry::builtin();
        assert_eq!(registry.detect(TYPE1_COLUMNS), Some(SchemeKind::Type1));
        assert_eq!(registry.detect(TYPE2_COLUMNS), Some(SchemeKind::Type2));
    }

    #[test]
    fn test_builtin_lists_schemes_in_order() {
        let registry = SchemeRegistry::builtin();
        let kinds: Vec<SchemeKind> = registry.schemes().iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![SchemeKind::Type1, SchemeKind::Type2]);
        assert_eq!(registry.schemes()[1].columns, TYPE2_COLUMNS);
    }

    #[test]
    fn test_order_matters() {
        let registry = SchemeRegistry::builtin();
        let swapped = ["TYPE", "TRANSACTION_ID", "DATE", "AMOUNT", "CURRENCY"];
        assert_eq!(registry.detect(&swapped), None);
    }

    #[test]
    fn test_case_and_spacing_matter() {
        let registry = SchemeRegistry::builtin();
        assert_eq!(
            registry.detect(&["transaction_id", "TYPE", "DATE", "AMOUNT", "CURRENCY"]),
            None
        );
        assert_eq!(
            registry.detect(&["TYPE", "TIME", "SOLD AMOUNt", "BOUGHT AMOUNT", "CURRENCIES"]),
            None
        );
        assert_eq!(
            registry.detect(&["TRANSACTION_ID", " TYPE", "DATE", "AMOUNT", "CURRENCY"]),
            None
        );
    }

    #[test]
    fn test_extra_or_missing_columns_do_not_match() {
        let registry = SchemeRegistry::builtin();
        assert_eq!(
            registry.detect(&["TRANSACTION_ID", "TYPE", "DATE", "AMOUNT"]),
            None
        );
        assert_eq!(
            registry.detect(&["TRANSACTION_ID", "TYPE", "DATE", "AMOUNT", "CURRENCY", "FEE"]),
            None
        );
        let empty: [&str; 0] = [];
        assert_eq!(registry.detect(&empty), None);
    }

    #[test]
    fn test_first_match_wins() {
        let registry = SchemeRegistry::new(vec![
            Scheme::new(SchemeKind::Type2, &["A", "B"]),
            Scheme::new(SchemeKind::Type1, &["A", "B"]),
        ]);
        assert_eq!(registry.detect(&["A", "B"]), Some(SchemeKind::Type2));
    }

    #[test]
    fn test_scheme_names() {
        assert_eq!(SchemeKind::Type1.to_string(), "type1");
        assert_eq!(SchemeKind::Type2.name(), "type2");
    }
}
