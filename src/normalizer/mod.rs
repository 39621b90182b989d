//! Per-scheme normalizers.
//!
//! Each normalizer is a pure function from a scheme's raw rows to canonical
//! records. Dispatch is a `match` on [`SchemeKind`].

pub mod type1;
pub mod type2;

use crate::error::Result;
use crate::loader::RawRow;
use crate::scheme::SchemeKind;
use crate::transaction::CanonicalTransaction;

/// Normalizes `rows` according to `scheme`.
///
/// Any error rejects the whole input; no partial output is returned.
pub fn normalize(scheme: SchemeKind, rows: &[RawRow]) -> Result<Vec<CanonicalTransaction>> {
    match scheme {
        SchemeKind::Type1 => type1::normalize(rows),
        SchemeKind::Type2 => type2::normalize(rows),
    }
}
