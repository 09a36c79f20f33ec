//! Turns raw spreadsheet grids of blood-test results into a normalized
//! chronological series with per-parameter summary metrics.

pub mod cell;
pub mod dates;
pub mod error;
pub mod pipeline;

pub use cell::Cell;
pub use dates::parse_date_cell;
pub use error::ExtractError;
pub use pipeline::{Extraction, extract};
