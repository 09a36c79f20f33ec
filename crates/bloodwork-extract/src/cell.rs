use serde::{Deserialize, Serialize};

/// A single spreadsheet cell as handed over by the decoding collaborator.
///
/// Deserializes untagged, so a JSON grid of `number | string | null` maps
/// straight onto it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    /// Empty, or text that is only whitespace.
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(text) => text.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Numeric cells pass through; text cells attempt a float parse.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => Some(*value),
            Cell::Text(text) => text.trim().parse().ok(),
            Cell::Empty => None,
        }
    }

    /// Lossy display form for diagnostics.
    pub fn display(&self) -> String {
        match self {
            Cell::Number(value) => value.to_string(),
            Cell::Text(text) => text.clone(),
            Cell::Empty => String::new(),
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_json_maps_onto_cells() {
        let grid: Vec<Vec<Cell>> =
            serde_json::from_str(r#"[["Haemoglobin", "g/L", 140.5, null, "n/a"]]"#)
                .expect("deserialize grid");
        assert_eq!(
            grid[0],
            vec![
                Cell::from("Haemoglobin"),
                Cell::from("g/L"),
                Cell::from(140.5),
                Cell::Empty,
                Cell::from("n/a"),
            ]
        );
    }

    #[test]
    fn numeric_coercion_covers_text_numbers() {
        assert_eq!(Cell::from(140.0).as_number(), Some(140.0));
        assert_eq!(Cell::from(" 140.5 ").as_number(), Some(140.5));
        assert_eq!(Cell::from("n/a").as_number(), None);
        assert_eq!(Cell::Empty.as_number(), None);
    }

    #[test]
    fn whitespace_text_counts_as_empty() {
        assert!(Cell::Empty.is_empty());
        assert!(Cell::from("   ").is_empty());
        assert!(!Cell::from(0.0).is_empty());
    }
}
