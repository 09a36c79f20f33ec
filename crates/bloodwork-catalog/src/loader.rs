//! JSON catalog loading.
//!
//! External catalogs arrive as a JSON array of parameter documents. Older
//! documents carry a single `range` object instead of the tagged `ranges`
//! sequence; the loader lifts that legacy shape into a one-element sequence
//! tagged `both` so the in-memory model stays single-representation.

use serde::Deserialize;

use bloodwork_model::{Parameter, RangeSex, ReferenceRange};

#[derive(Debug, Deserialize)]
struct ParameterDoc {
    name: String,
    category: String,
    unit: String,
    #[serde(default)]
    ranges: Vec<ReferenceRange>,
    /// Deprecated single-range field, kept for backward compatibility.
    #[serde(default)]
    range: Option<LegacyRange>,
    #[serde(default)]
    aliases: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct LegacyRange {
    min: f64,
    max: f64,
    #[serde(default)]
    unit: Option<String>,
}

pub(crate) fn parameters_from_json(json: &str) -> Result<Vec<Parameter>, serde_json::Error> {
    let docs: Vec<ParameterDoc> = serde_json::from_str(json)?;
    Ok(docs.into_iter().map(lift).collect())
}

fn lift(doc: ParameterDoc) -> Parameter {
    let mut ranges = doc.ranges;
    if ranges.is_empty()
        && let Some(legacy) = doc.range
    {
        let unit = legacy.unit.unwrap_or_else(|| doc.unit.clone());
        ranges.push(ReferenceRange::new(
            legacy.min,
            legacy.max,
            unit,
            RangeSex::Both,
        ));
    }
    Parameter {
        name: doc.name,
        category: doc.category,
        unit: doc.unit,
        ranges,
        aliases: doc.aliases,
    }
}
