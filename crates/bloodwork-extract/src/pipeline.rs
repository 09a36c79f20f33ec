//! The tabular extraction pipeline: a raw cell grid in, a chronological
//! series plus per-parameter metrics out.
//!
//! Layout contract for the grid: `row[0]` is the header, with date cells
//! from column 2 onward; every following row is `label, unit, value...`.
//! The pipeline favors maximal partial success: one valid date column and
//! one usable parameter row are enough, and everything else degrades to
//! diagnostics.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use bloodwork_catalog::Catalog;
use bloodwork_model::{DataPoint, Diagnostic, Metric};
use bloodwork_resolve::{INGEST_FUZZY_THRESHOLD, NameResolver};

use crate::cell::Cell;
use crate::dates::parse_date_cell;
use crate::error::ExtractError;

/// Columns 0 and 1 hold the parameter label and unit; dates start here.
const FIRST_DATE_COLUMN: usize = 2;
/// Literal marker some exports repeat as an inner header row.
const UNIT_HEADER_MARKER: &str = "Unit";
/// Category assigned to labels the catalog knows nothing about.
const UNKNOWN_CATEGORY: &str = "Other";

/// Everything produced by one [`extract`] call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    /// One entry per distinct valid date, ascending.
    pub series: Vec<DataPoint>,
    /// One entry per observed parameter, catalog order first, then
    /// unknown parameters sorted by name.
    pub metrics: Vec<Metric>,
    /// Parameter names in the same order as `metrics`.
    pub parameters: Vec<String>,
    /// Non-fatal anomalies encountered along the way.
    pub diagnostics: Vec<Diagnostic>,
}

/// A body row after label resolution, before assembly into outputs.
struct ParameterRow {
    canonical: String,
    unit: String,
    category: String,
    catalog_index: Option<usize>,
    values: BTreeMap<NaiveDate, f64>,
}

/// Extracts a normalized time series and metrics summary from a raw grid.
///
/// Fails only on structural defects ([`ExtractError`]); every per-row or
/// per-cell anomaly is recorded as a [`Diagnostic`] and skipped.
pub fn extract(catalog: &Catalog, grid: &[Vec<Cell>]) -> Result<Extraction, ExtractError> {
    if grid.is_empty() {
        return Err(ExtractError::EmptyGrid);
    }
    if grid.len() < 2 {
        return Err(ExtractError::TooFewRows { rows: grid.len() });
    }

    let mut diagnostics = Vec::new();
    let date_columns = parse_header(&grid[0], &mut diagnostics)?;

    let resolver = NameResolver::new(catalog);
    let mut rows: Vec<ParameterRow> = Vec::new();
    for (row_index, row) in grid.iter().enumerate().skip(1) {
        if let Some(parsed) = parse_body_row(
            catalog,
            &resolver,
            row_index,
            row,
            &date_columns,
            &mut diagnostics,
        ) {
            merge_row(&mut rows, parsed);
        }
    }
    if rows.is_empty() {
        return Err(ExtractError::NoParameterRows);
    }

    let ordered = order_rows(&rows);
    let series = build_series(&date_columns, &ordered);
    let metrics = build_metrics(&ordered);
    let parameters = ordered.iter().map(|row| row.canonical.clone()).collect();

    Ok(Extraction {
        series,
        metrics,
        parameters,
        diagnostics,
    })
}

/// Parses the header's date cells. Invalid cells are diagnostics; zero
/// valid cells is fatal. The result is sorted ascending by date, original
/// column order preserved for equal dates.
fn parse_header(
    header: &[Cell],
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<(usize, NaiveDate)>, ExtractError> {
    let mut columns = Vec::new();
    for (column, cell) in header.iter().enumerate().skip(FIRST_DATE_COLUMN) {
        if cell.is_empty() {
            continue;
        }
        match parse_date_cell(cell) {
            Some(date) => columns.push((column, date)),
            None => {
                debug!(column, content = %cell.display(), "unparseable header date cell");
                diagnostics.push(Diagnostic::InvalidCell {
                    row: 0,
                    column,
                    content: cell.display(),
                    reason: "not a recognizable date".to_string(),
                });
            }
        }
    }
    if columns.is_empty() {
        return Err(ExtractError::NoDateColumns);
    }
    columns.sort_by_key(|(_, date)| *date);
    Ok(columns)
}

fn parse_body_row(
    catalog: &Catalog,
    resolver: &NameResolver<'_>,
    row_index: usize,
    row: &[Cell],
    date_columns: &[(usize, NaiveDate)],
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<ParameterRow> {
    let label = row.first().and_then(Cell::as_text).unwrap_or("").trim();
    if label.is_empty() {
        diagnostics.push(Diagnostic::SkippedRow {
            row: row_index,
            label: String::new(),
            reason: "empty parameter label".to_string(),
        });
        return None;
    }
    if label == UNIT_HEADER_MARKER {
        diagnostics.push(Diagnostic::SkippedRow {
            row: row_index,
            label: label.to_string(),
            reason: "repeated header marker".to_string(),
        });
        return None;
    }
    if label.contains('(') {
        diagnostics.push(Diagnostic::SkippedRow {
            row: row_index,
            label: label.to_string(),
            reason: "sub-category heading".to_string(),
        });
        return None;
    }

    let row_unit = row
        .get(1)
        .and_then(Cell::as_text)
        .map(str::trim)
        .unwrap_or("")
        .to_string();

    let resolved = resolver.resolve_with_threshold(label, INGEST_FUZZY_THRESHOLD);
    let (canonical, unit, category, catalog_index) = match catalog.get(&resolved) {
        Some(parameter) => (
            parameter.name.clone(),
            parameter.unit.clone(),
            parameter.category.clone(),
            catalog.index_of(&parameter.name),
        ),
        None => {
            warn!(label, "label matched no catalog parameter");
            diagnostics.push(Diagnostic::UnresolvedParameter {
                label: label.to_string(),
            });
            (resolved, row_unit, UNKNOWN_CATEGORY.to_string(), None)
        }
    };

    let mut values = BTreeMap::new();
    for (column, date) in date_columns {
        let Some(cell) = row.get(*column) else {
            continue;
        };
        if cell.is_empty() {
            continue;
        }
        match cell.as_number() {
            Some(value) => {
                values.insert(*date, value);
            }
            None => diagnostics.push(Diagnostic::InvalidCell {
                row: row_index,
                column: *column,
                content: cell.display(),
                reason: "not numeric".to_string(),
            }),
        }
    }

    Some(ParameterRow {
        canonical,
        unit,
        category,
        catalog_index,
        values,
    })
}

/// Rows resolving to the same canonical name collapse onto the first
/// occurrence; later observations override same-date values.
fn merge_row(rows: &mut Vec<ParameterRow>, parsed: ParameterRow) {
    if let Some(existing) = rows.iter_mut().find(|row| row.canonical == parsed.canonical) {
        existing.values.extend(parsed.values);
    } else {
        rows.push(parsed);
    }
}

/// Catalog parameters in catalog order, then unknowns sorted by name.
fn order_rows(rows: &[ParameterRow]) -> Vec<&ParameterRow> {
    let mut known: Vec<&ParameterRow> = rows
        .iter()
        .filter(|row| row.catalog_index.is_some())
        .collect();
    known.sort_by_key(|row| row.catalog_index);
    let mut unknown: Vec<&ParameterRow> = rows
        .iter()
        .filter(|row| row.catalog_index.is_none())
        .collect();
    unknown.sort_by(|a, b| a.canonical.cmp(&b.canonical));
    known.extend(unknown);
    known
}

fn build_series(
    date_columns: &[(usize, NaiveDate)],
    ordered: &[&ParameterRow],
) -> Vec<DataPoint> {
    let mut dates: Vec<NaiveDate> = date_columns.iter().map(|(_, date)| *date).collect();
    // Already sorted; duplicate header columns collapse onto one point.
    dates.dedup();
    dates
        .into_iter()
        .map(|date| DataPoint {
            date,
            values: ordered
                .iter()
                .filter_map(|row| {
                    row.values
                        .get(&date)
                        .map(|value| (row.canonical.clone(), *value))
                })
                .collect(),
        })
        .collect()
}

fn build_metrics(ordered: &[&ParameterRow]) -> Vec<Metric> {
    ordered
        .iter()
        .map(|row| {
            let mut recent = row.values.values().rev();
            let latest_value = recent.next().copied();
            let previous_value = recent.next().copied();
            Metric {
                name: row.canonical.clone(),
                latest_value,
                previous_value,
                trend: Metric::trend_between(latest_value, previous_value),
                unit: row.unit.clone(),
                category: row.category.clone(),
            }
        })
        .collect()
}
