//! Sex-aware reference range resolution and value classification.
//!
//! Lookup policy, tiered: sex-specific range first, then the broad `both`
//! entry, then the first declared range as a last resort. Classification is
//! boundary-inclusive. `safe_range` substitutes a sentinel so rendering
//! callers never crash on an unknown parameter; the sentinel carries a
//! `fallback` provenance tag and must be flagged before clinical display.

use std::collections::BTreeSet;

use tracing::warn;

use bloodwork_catalog::Catalog;
use bloodwork_model::{Diagnostic, RangeSex, RangeStatus, ReferenceRange, Sex};

/// Resolves reference ranges against a catalog.
pub struct RangeResolver<'a> {
    catalog: &'a Catalog,
}

impl<'a> RangeResolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// The applicable range for a parameter, or `None` when the parameter
    /// is unknown or declares no ranges.
    ///
    /// The parameter is found by exact name, case-insensitive name, or
    /// alias; the range tiers are: exact sex tag, `both`, first declared.
    pub fn range_for(&self, name: &str, sex: Option<Sex>) -> Option<&'a ReferenceRange> {
        let parameter = self.catalog.get(name)?;
        let ranges = &parameter.ranges;
        if let Some(sex) = sex
            && let Some(range) = ranges.iter().find(|range| range.sex.matches(sex))
        {
            return Some(range);
        }
        if let Some(range) = ranges.iter().find(|range| range.sex == RangeSex::Both) {
            return Some(range);
        }
        ranges.first()
    }

    /// Like [`RangeResolver::range_for`] but reports a miss as a
    /// [`Diagnostic::RangeNotFound`] for callers collecting diagnostics.
    pub fn range_checked(
        &self,
        name: &str,
        sex: Option<Sex>,
    ) -> Result<&'a ReferenceRange, Diagnostic> {
        self.range_for(name, sex).ok_or_else(|| Diagnostic::RangeNotFound {
            parameter: name.trim().to_string(),
        })
    }

    /// Classifies a value against the resolved range. Boundary values are
    /// `Normal`; no resolvable range yields `Unknown`.
    pub fn classify(&self, value: f64, name: &str, sex: Option<Sex>) -> RangeStatus {
        match self.range_for(name, sex) {
            None => RangeStatus::Unknown,
            Some(range) if value < range.min => RangeStatus::Low,
            Some(range) if value > range.max => RangeStatus::High,
            Some(_) => RangeStatus::Normal,
        }
    }

    /// Like [`RangeResolver::range_for`] but always returns a range,
    /// substituting the sentinel fallback when resolution fails.
    pub fn safe_range(&self, name: &str, sex: Option<Sex>) -> ReferenceRange {
        match self.range_for(name, sex) {
            Some(range) => range.clone(),
            None => {
                warn!(parameter = name, "no reference range; substituting sentinel");
                ReferenceRange::fallback()
            }
        }
    }

    /// Sexes for which a sex-specific (non-`both`) range is declared.
    /// Empty means only a broad range, or no range at all, exists.
    pub fn available_sexes(&self, name: &str) -> BTreeSet<Sex> {
        let Some(parameter) = self.catalog.get(name) else {
            return BTreeSet::new();
        };
        parameter
            .ranges
            .iter()
            .filter_map(|range| match range.sex {
                RangeSex::Male => Some(Sex::Male),
                RangeSex::Female => Some(Sex::Female),
                RangeSex::Both => None,
            })
            .collect()
    }

    pub fn has_sex_specific_ranges(&self, name: &str) -> bool {
        !self.available_sexes(name).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloodwork_model::{Parameter, RangeSource};

    fn catalog_with(parameters: Vec<Parameter>) -> Catalog {
        Catalog::new(parameters).expect("test catalog is valid")
    }

    fn sexed_parameter() -> Parameter {
        Parameter {
            name: "Haemoglobin".to_string(),
            category: "Full Blood Count".to_string(),
            unit: "g/L".to_string(),
            ranges: vec![
                ReferenceRange::new(130.0, 170.0, "g/L", RangeSex::Male),
                ReferenceRange::new(115.0, 155.0, "g/L", RangeSex::Female),
                ReferenceRange::new(120.0, 160.0, "g/L", RangeSex::Both),
            ],
            aliases: vec!["Hb".to_string()],
        }
    }

    #[test]
    fn sex_specific_range_wins_when_sex_supplied() {
        let catalog = catalog_with(vec![sexed_parameter()]);
        let resolver = RangeResolver::new(&catalog);
        let male = resolver.range_for("Haemoglobin", Some(Sex::Male)).unwrap();
        assert_eq!(male.min, 130.0);
        let female = resolver.range_for("Haemoglobin", Some(Sex::Female)).unwrap();
        assert_eq!(female.min, 115.0);
    }

    #[test]
    fn broad_range_wins_when_sex_omitted() {
        let catalog = catalog_with(vec![sexed_parameter()]);
        let resolver = RangeResolver::new(&catalog);
        let broad = resolver.range_for("Haemoglobin", None).unwrap();
        assert_eq!(broad.sex, RangeSex::Both);
        assert_eq!(broad.min, 120.0);
    }

    #[test]
    fn first_range_is_the_last_resort() {
        let mut parameter = sexed_parameter();
        parameter.ranges.retain(|range| range.sex == RangeSex::Male);
        let catalog = catalog_with(vec![parameter]);
        let resolver = RangeResolver::new(&catalog);
        // No female range, no broad range: fall through to the first one.
        let range = resolver.range_for("Haemoglobin", Some(Sex::Female)).unwrap();
        assert_eq!(range.sex, RangeSex::Male);
        let range = resolver.range_for("Haemoglobin", None).unwrap();
        assert_eq!(range.sex, RangeSex::Male);
    }

    #[test]
    fn lookup_works_through_aliases() {
        let catalog = catalog_with(vec![sexed_parameter()]);
        let resolver = RangeResolver::new(&catalog);
        assert!(resolver.range_for("hb", Some(Sex::Male)).is_some());
    }

    #[test]
    fn classification_is_boundary_inclusive() {
        let catalog = catalog_with(vec![sexed_parameter()]);
        let resolver = RangeResolver::new(&catalog);
        let sex = Some(Sex::Male);
        assert_eq!(resolver.classify(130.0, "Haemoglobin", sex), RangeStatus::Normal);
        assert_eq!(resolver.classify(170.0, "Haemoglobin", sex), RangeStatus::Normal);
        assert_eq!(resolver.classify(129.9, "Haemoglobin", sex), RangeStatus::Low);
        assert_eq!(resolver.classify(170.1, "Haemoglobin", sex), RangeStatus::High);
        assert_eq!(
            resolver.classify(1.0, "Unknown Parameter", None),
            RangeStatus::Unknown
        );
    }

    #[test]
    fn checked_lookup_reports_misses_as_diagnostics() {
        let catalog = catalog_with(vec![sexed_parameter()]);
        let resolver = RangeResolver::new(&catalog);
        assert!(resolver.range_checked("Haemoglobin", None).is_ok());
        let diagnostic = resolver
            .range_checked(" Osmolality ", None)
            .expect_err("unknown parameter has no range");
        assert_eq!(
            diagnostic,
            Diagnostic::RangeNotFound {
                parameter: "Osmolality".to_string()
            }
        );
    }

    #[test]
    fn safe_range_substitutes_tagged_sentinel() {
        let catalog = catalog_with(vec![sexed_parameter()]);
        let resolver = RangeResolver::new(&catalog);
        let range = resolver.safe_range("Unknown Parameter", None);
        assert_eq!(range.source, RangeSource::Fallback);
        assert_eq!(range.min, 0.0);
        assert_eq!(range.max, 100.0);
        assert_eq!(range.unit, "units");

        let real = resolver.safe_range("Haemoglobin", Some(Sex::Female));
        assert_eq!(real.source, RangeSource::Catalog);
    }

    #[test]
    fn available_sexes_lists_specific_tags_only() {
        let catalog = Catalog::builtin();
        let resolver = RangeResolver::new(&catalog);
        let sexes = resolver.available_sexes("Haemoglobin");
        assert!(sexes.contains(&Sex::Male));
        assert!(sexes.contains(&Sex::Female));
        assert!(resolver.has_sex_specific_ranges("Haemoglobin"));

        assert!(resolver.available_sexes("Sodium").is_empty());
        assert!(!resolver.has_sex_specific_ranges("Sodium"));
        assert!(resolver.available_sexes("Unknown Parameter").is_empty());
    }

    #[test]
    fn parameter_without_ranges_resolves_to_none() {
        let parameter = Parameter {
            name: "Osmolality".to_string(),
            category: "Urea & Electrolytes".to_string(),
            unit: "mOsm/kg".to_string(),
            ranges: vec![],
            aliases: vec![],
        };
        let catalog = catalog_with(vec![parameter]);
        let resolver = RangeResolver::new(&catalog);
        assert!(resolver.range_for("Osmolality", Some(Sex::Male)).is_none());
        assert_eq!(resolver.classify(300.0, "Osmolality", None), RangeStatus::Unknown);
    }
}
