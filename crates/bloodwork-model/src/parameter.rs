use serde::{Deserialize, Serialize};

use crate::ranges::ReferenceRange;

/// A canonical blood-test parameter as declared in the catalog.
///
/// `name` is the single authoritative spelling; `aliases` hold alternate
/// spellings and abbreviations seen in lab exports. Case variants are not
/// pre-included: lookup is case-insensitive where it needs to be.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub category: String,
    pub unit: String,
    #[serde(default)]
    pub ranges: Vec<ReferenceRange>,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl Parameter {
    /// True when `label` is this parameter's name, ignoring case.
    pub fn matches_name(&self, label: &str) -> bool {
        self.name.eq_ignore_ascii_case(label.trim())
    }

    /// True when `label` is one of this parameter's declared aliases,
    /// ignoring case.
    pub fn matches_alias(&self, label: &str) -> bool {
        let trimmed = label.trim();
        self.aliases
            .iter()
            .any(|alias| alias.eq_ignore_ascii_case(trimmed))
    }

    /// True when `label` matches the name or any alias, ignoring case.
    pub fn matches_label(&self, label: &str) -> bool {
        self.matches_name(label) || self.matches_alias(label)
    }
}
