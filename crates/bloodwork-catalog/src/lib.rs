//! Canonical parameter catalog.
//!
//! The catalog is the authoritative list of blood-test parameters with
//! their categories, units, reference ranges, and aliases. It is loaded
//! once, validated, and treated as immutable configuration afterwards; it
//! can be shared across threads without locking.

pub mod builtin;
mod error;
mod loader;

pub use error::CatalogError;

use std::collections::BTreeSet;
use std::io::Read;

use bloodwork_model::Parameter;

/// Immutable, validated catalog of canonical parameters.
///
/// Iteration order is declaration order. That order is load-bearing: it is
/// the output ordering for known parameters and the documented tie-break
/// order for fuzzy matching.
#[derive(Debug, Clone)]
pub struct Catalog {
    parameters: Vec<Parameter>,
}

impl Catalog {
    /// Builds a catalog from a parameter list, validating structure:
    /// non-empty unique names (case-insensitive), well-formed ranges, and
    /// at most one range per (parameter, sex) tag.
    pub fn new(parameters: Vec<Parameter>) -> Result<Self, CatalogError> {
        validate(&parameters)?;
        Ok(Self { parameters })
    }

    /// The built-in catalog. Its validity is a compile-time data invariant,
    /// covered by tests.
    pub fn builtin() -> Self {
        Self::new(builtin::parameters()).expect("builtin catalog is structurally valid")
    }

    /// Loads and validates a catalog from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let parameters = loader::parameters_from_json(json)?;
        Self::new(parameters)
    }

    /// Loads and validates a catalog from a JSON reader.
    pub fn from_json_reader(mut reader: impl Read) -> Result<Self, CatalogError> {
        let mut json = String::new();
        reader
            .read_to_string(&mut json)
            .map_err(|err| CatalogError::Json(serde_json::Error::io(err)))?;
        Self::from_json_str(&json)
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter()
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Finds a parameter by exact name, case-insensitive name, or alias
    /// (case-insensitive), in that order.
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.find(name).map(|(_, parameter)| parameter)
    }

    /// The catalog position of a parameter, under the same matching rules
    /// as [`Catalog::get`]. Used for output ordering.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.find(name).map(|(index, _)| index)
    }

    fn find(&self, name: &str) -> Option<(usize, &Parameter)> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Some(found) = self
            .parameters
            .iter()
            .enumerate()
            .find(|(_, parameter)| parameter.name == trimmed)
        {
            return Some(found);
        }
        if let Some(found) = self
            .parameters
            .iter()
            .enumerate()
            .find(|(_, parameter)| parameter.matches_name(trimmed))
        {
            return Some(found);
        }
        self.parameters
            .iter()
            .enumerate()
            .find(|(_, parameter)| parameter.matches_alias(trimmed))
    }
}

fn validate(parameters: &[Parameter]) -> Result<(), CatalogError> {
    let mut seen = BTreeSet::new();
    for (position, parameter) in parameters.iter().enumerate() {
        if parameter.name.trim().is_empty() {
            return Err(CatalogError::EmptyName { position });
        }
        if !seen.insert(parameter.name.to_lowercase()) {
            return Err(CatalogError::DuplicateName {
                name: parameter.name.clone(),
            });
        }
        let mut sexes = BTreeSet::new();
        for range in &parameter.ranges {
            if !range.is_well_formed() {
                return Err(CatalogError::InvalidRange {
                    parameter: parameter.name.clone(),
                    min: range.min,
                    max: range.max,
                });
            }
            if !sexes.insert(range.sex) {
                return Err(CatalogError::DuplicateSexRange {
                    parameter: parameter.name.clone(),
                    sex: range.sex,
                });
            }
        }
    }
    Ok(())
}
