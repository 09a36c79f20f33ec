use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-fatal anomalies recorded while processing an export.
///
/// Structural failures abort with a typed error; everything per-row or
/// per-cell becomes a diagnostic, is skipped, and never stops the run.
/// Diagnostics are returned alongside results so callers can surface them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A label matched nothing in the catalog even after fuzzy matching.
    /// The row is still processed under its original label.
    UnresolvedParameter { label: String },
    /// A single date or numeric cell failed to parse and was dropped.
    InvalidCell {
        row: usize,
        column: usize,
        content: String,
        reason: String,
    },
    /// A body row was skipped entirely (empty label, header marker,
    /// sub-category heading).
    SkippedRow {
        row: usize,
        label: String,
        reason: String,
    },
    /// Range resolution found nothing for a parameter; classification
    /// degrades to unknown.
    RangeNotFound { parameter: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnresolvedParameter { label } => {
                write!(f, "unresolved parameter label: {label}")
            }
            Diagnostic::InvalidCell {
                row,
                column,
                content,
                reason,
            } => {
                write!(f, "invalid cell at row {row}, column {column} ({content:?}): {reason}")
            }
            Diagnostic::SkippedRow { row, label, reason } => {
                write!(f, "skipped row {row} ({label:?}): {reason}")
            }
            Diagnostic::RangeNotFound { parameter } => {
                write!(f, "no reference range for parameter: {parameter}")
            }
        }
    }
}
