use bloodwork_model::RangeSex;
use thiserror::Error;

/// Structural defects in a parameter catalog, surfaced at load time.
///
/// Extraction never sees these: a catalog is validated once when built and
/// is immutable afterwards.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("parameter at position {position} has an empty name")]
    EmptyName { position: usize },

    #[error("duplicate parameter name: {name}")]
    DuplicateName { name: String },

    #[error("parameter {parameter}: range has min {min} greater than max {max}")]
    InvalidRange {
        parameter: String,
        min: f64,
        max: f64,
    },

    #[error("parameter {parameter}: more than one {sex} reference range")]
    DuplicateSexRange { parameter: String, sex: RangeSex },
}
