use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex of a subject.
///
/// Supplied explicitly by callers on each range lookup; the engine never
/// reads it from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(format!("Unknown sex value: {s}")),
        }
    }
}

/// Sex tag on a reference range.
///
/// `Both` is the broad entry used when no sex-specific range applies.
/// Catalogs may tag at most one range per parameter with each variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeSex {
    Male,
    Female,
    /// Applies to any subject. Accepts the legacy `unspecified` spelling.
    #[serde(alias = "unspecified")]
    Both,
}

impl RangeSex {
    /// True when this tag is specific to the given sex. `Both` never matches
    /// here; it is handled as a separate fallback tier.
    pub fn matches(&self, sex: Sex) -> bool {
        matches!(
            (self, sex),
            (RangeSex::Male, Sex::Male) | (RangeSex::Female, Sex::Female)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RangeSex::Male => "male",
            RangeSex::Female => "female",
            RangeSex::Both => "both",
        }
    }

    fn default_both() -> Self {
        RangeSex::Both
    }
}

impl fmt::Display for RangeSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Sex> for RangeSex {
    fn from(sex: Sex) -> Self {
        match sex {
            Sex::Male => RangeSex::Male,
            Sex::Female => RangeSex::Female,
        }
    }
}

/// Provenance of a reference range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeSource {
    /// Declared in the parameter catalog.
    #[default]
    Catalog,
    /// Synthetic sentinel substituted when no catalog range exists.
    /// Never suitable for clinical display without flagging its provenance.
    Fallback,
}

/// The clinically normal interval for a parameter, optionally sex-specific.
///
/// Invariant `min <= max`, enforced by catalog validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRange {
    pub min: f64,
    pub max: f64,
    pub unit: String,
    #[serde(default = "RangeSex::default_both")]
    pub sex: RangeSex,
    #[serde(default)]
    pub source: RangeSource,
}

impl ReferenceRange {
    pub fn new(min: f64, max: f64, unit: impl Into<String>, sex: RangeSex) -> Self {
        Self {
            min,
            max,
            unit: unit.into(),
            sex,
            source: RangeSource::Catalog,
        }
    }

    /// The sentinel range substituted when a parameter has no catalog range.
    /// Callers must treat it as a placeholder, not a clinical value.
    pub fn fallback() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            unit: "units".to_string(),
            sex: RangeSex::Both,
            source: RangeSource::Fallback,
        }
    }

    /// Boundary-inclusive containment check.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn is_well_formed(&self) -> bool {
        self.min <= self.max
    }
}

/// Classification of a measured value against a resolved reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeStatus {
    Low,
    Normal,
    High,
    /// No range could be resolved for the parameter.
    Unknown,
}

impl RangeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeStatus::Low => "low",
            RangeStatus::Normal => "normal",
            RangeStatus::High => "high",
            RangeStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
