use thiserror::Error;

/// Fatal structural failures of an extraction.
///
/// The grid is unusable as a whole and no partial result is returned.
/// Per-row and per-cell anomalies never end up here; they become
/// [`bloodwork_model::Diagnostic`] entries instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("grid is empty")]
    EmptyGrid,

    #[error("grid has {rows} row(s); a header row and at least one body row are required")]
    TooFewRows { rows: usize },

    #[error("header row contains no parseable date columns")]
    NoDateColumns,

    #[error("grid body contains no usable parameter rows")]
    NoParameterRows,
}
