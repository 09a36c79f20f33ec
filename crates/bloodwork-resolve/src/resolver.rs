//! Alias resolution: maps arbitrary lab-report labels onto canonical
//! catalog names.
//!
//! Matching runs in strict order, first success wins: exact alias,
//! case-insensitive alias, exact canonical name, case-insensitive canonical
//! name, then normalized-Levenshtein fuzzy matching. Resolution never
//! fails: a label that matches nothing comes back trimmed but otherwise
//! unchanged, and downstream consumers treat it as an unknown parameter.

use rapidfuzz::distance::levenshtein;
use tracing::debug;

use bloodwork_catalog::Catalog;

/// Default similarity threshold for the fuzzy step.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.8;

/// Threshold the extraction pipeline resolves with. Lower than the default
/// to maximize coverage of noisy export labels.
pub const INGEST_FUZZY_THRESHOLD: f64 = 0.7;

/// Resolves free-text labels against a catalog.
///
/// The fuzzy candidate table (every canonical name and alias, as-is and
/// lowercased) is built once at construction and reused for every lookup,
/// since unmemoized Levenshtein over the whole catalog dominates the cost
/// of a wide extraction.
pub struct NameResolver<'a> {
    catalog: &'a Catalog,
    /// (variant key, canonical name), in catalog order then alias
    /// declaration order. First entry wins on duplicate keys and on fuzzy
    /// score ties, which makes tie-breaking stable and documented.
    variants: Vec<(String, &'a str)>,
}

impl<'a> NameResolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        let mut variants: Vec<(String, &'a str)> = Vec::new();
        for parameter in catalog.iter() {
            let canonical = parameter.name.as_str();
            push_variant(&mut variants, canonical.to_string(), canonical);
            push_variant(&mut variants, canonical.to_lowercase(), canonical);
            for alias in &parameter.aliases {
                push_variant(&mut variants, alias.clone(), canonical);
                push_variant(&mut variants, alias.to_lowercase(), canonical);
            }
        }
        Self { catalog, variants }
    }

    /// Resolves a label to a canonical name, or returns the trimmed label
    /// unchanged when nothing matches. Fuzzy step runs at
    /// [`DEFAULT_FUZZY_THRESHOLD`].
    pub fn resolve(&self, input: &str) -> String {
        self.resolve_with_threshold(input, DEFAULT_FUZZY_THRESHOLD)
    }

    /// [`NameResolver::resolve`] with a caller-supplied fuzzy threshold.
    pub fn resolve_with_threshold(&self, input: &str, threshold: f64) -> String {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return String::new();
        }
        if let Some(canonical) = self.alias_lookup(trimmed) {
            return canonical.to_string();
        }
        if let Some(canonical) = self.name_lookup(trimmed) {
            return canonical.to_string();
        }
        if let Some(canonical) = self.find_best_match(trimmed, threshold) {
            return canonical.to_string();
        }
        debug!(label = trimmed, "label resolved to nothing; keeping as-is");
        trimmed.to_string()
    }

    /// True when the label resolves to a canonical catalog name.
    pub fn exists(&self, name: &str) -> bool {
        let resolved = self.resolve(name);
        self.catalog
            .iter()
            .any(|parameter| parameter.name == resolved)
    }

    /// Best fuzzy candidate at or above `threshold`, or `None`.
    ///
    /// Scores `(max_len - levenshtein) / max_len` between the lowercased
    /// input and each candidate key, computed over full strings with unit
    /// edit costs. Only a strictly better score displaces the current
    /// best, so ties keep the first-encountered candidate.
    pub fn find_best_match(&self, input: &str, threshold: f64) -> Option<&'a str> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        let mut best: Option<(&'a str, f64)> = None;
        for (key, canonical) in &self.variants {
            let score = similarity(&needle, key);
            if score >= threshold && best.is_none_or(|(_, current)| score > current) {
                best = Some((canonical, score));
            }
        }
        best.map(|(canonical, _)| canonical)
    }

    /// Steps 1-2 of the chain: exact alias, then case-insensitive alias,
    /// each scanned across the whole catalog before falling through.
    fn alias_lookup(&self, label: &str) -> Option<&'a str> {
        for parameter in self.catalog.iter() {
            if parameter.aliases.iter().any(|alias| alias == label) {
                return Some(parameter.name.as_str());
            }
        }
        for parameter in self.catalog.iter() {
            if parameter.matches_alias(label) {
                return Some(parameter.name.as_str());
            }
        }
        None
    }

    /// Steps 3-4: exact canonical name, then case-insensitive.
    fn name_lookup(&self, label: &str) -> Option<&'a str> {
        for parameter in self.catalog.iter() {
            if parameter.name == label {
                return Some(parameter.name.as_str());
            }
        }
        for parameter in self.catalog.iter() {
            if parameter.matches_name(label) {
                return Some(parameter.name.as_str());
            }
        }
        None
    }
}

fn push_variant<'a>(variants: &mut Vec<(String, &'a str)>, key: String, canonical: &'a str) {
    if variants.iter().any(|(existing, _)| *existing == key) {
        return;
    }
    variants.push((key, canonical));
}

/// Normalized Levenshtein similarity over full-length strings.
fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    let distance = levenshtein::distance(a.chars(), b.chars());
    (max_len - distance) as f64 / max_len as f64
}
