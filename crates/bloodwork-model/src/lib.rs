pub mod diagnostics;
pub mod parameter;
pub mod ranges;
pub mod series;

pub use diagnostics::Diagnostic;
pub use parameter::Parameter;
pub use ranges::{RangeSex, RangeSource, RangeStatus, ReferenceRange, Sex};
pub use series::{DataPoint, Metric};
