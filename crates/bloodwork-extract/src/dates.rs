//! Date-cell parsing for the three representations seen in lab exports:
//! spreadsheet serial numbers, slash-delimited `DD/MM/YYYY`, and ISO
//! strings. Anything else is invalid and the cell is skipped, never fatal.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use crate::cell::Cell;

/// Serial number of 1970-01-01 in the 1900 spreadsheet epoch.
const UNIX_EPOCH_SERIAL: f64 = 25569.0;

/// Parses a header cell as a calendar date, or `None` when the cell does
/// not hold a recognizable date.
pub fn parse_date_cell(cell: &Cell) -> Option<NaiveDate> {
    match cell {
        Cell::Number(serial) => parse_serial(*serial),
        Cell::Text(text) => parse_text(text.trim()),
        Cell::Empty => None,
    }
}

/// 1900-epoch day count: `1970-01-01 + (serial - 25569)` days. Fractional
/// time-of-day is truncated; out-of-range serials are invalid.
fn parse_serial(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() {
        return None;
    }
    let days = (serial - UNIX_EPOCH_SERIAL).floor();
    if days < i64::MIN as f64 || days > i64::MAX as f64 {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)?;
    epoch.checked_add_signed(TimeDelta::try_days(days as i64)?)
}

fn parse_text(text: &str) -> Option<NaiveDate> {
    if text.is_empty() {
        return None;
    }
    if text.contains('/') {
        return parse_slash_date(text);
    }
    if let Ok(date) = text.parse::<NaiveDate>() {
        return Some(date);
    }
    text.parse::<NaiveDateTime>().ok().map(|dt| dt.date())
}

/// `DD/MM/YYYY`. The day is sanity-checked before composing an ISO string,
/// so a transposed value like `36/5/2019` is rejected rather than
/// reinterpreted as a different date.
fn parse_slash_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split('/');
    let day: u32 = parts.next()?.trim().parse().ok()?;
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let year: i32 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    if day > 31 {
        return None;
    }
    format!("{year:04}-{month:02}-{day:02}").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn serial_25569_is_the_unix_epoch() {
        assert_eq!(parse_date_cell(&Cell::from(25569.0)), Some(date(1970, 1, 1)));
    }

    #[test]
    fn serial_day_counts_offset_from_the_epoch() {
        assert_eq!(parse_date_cell(&Cell::from(25570.0)), Some(date(1970, 1, 2)));
        assert_eq!(parse_date_cell(&Cell::from(44927.0)), Some(date(2023, 1, 1)));
        // Fractional part is time-of-day; the date part stands.
        assert_eq!(parse_date_cell(&Cell::from(44927.75)), Some(date(2023, 1, 1)));
    }

    #[test]
    fn absurd_serials_are_invalid() {
        assert_eq!(parse_date_cell(&Cell::from(f64::NAN)), None);
        assert_eq!(parse_date_cell(&Cell::from(f64::INFINITY)), None);
        assert_eq!(parse_date_cell(&Cell::from(1.0e18)), None);
    }

    #[test]
    fn slash_dates_are_day_month_year() {
        assert_eq!(
            parse_date_cell(&Cell::from("31/01/2020")),
            Some(date(2020, 1, 31))
        );
        // Single-digit components are zero-padded before parsing.
        assert_eq!(parse_date_cell(&Cell::from("1/2/2020")), Some(date(2020, 2, 1)));
    }

    #[test]
    fn slash_dates_with_impossible_days_are_rejected() {
        assert_eq!(parse_date_cell(&Cell::from("36/5/2019")), None);
        assert_eq!(parse_date_cell(&Cell::from("31/02/2020")), None);
        assert_eq!(parse_date_cell(&Cell::from("10/13/2020")), None);
        assert_eq!(parse_date_cell(&Cell::from("10/2020")), None);
        assert_eq!(parse_date_cell(&Cell::from("a/b/c")), None);
    }

    #[test]
    fn iso_strings_parse_directly() {
        assert_eq!(
            parse_date_cell(&Cell::from("2023-01-01")),
            Some(date(2023, 1, 1))
        );
        assert_eq!(
            parse_date_cell(&Cell::from("2023-01-01T08:30:00")),
            Some(date(2023, 1, 1))
        );
    }

    #[test]
    fn garbage_and_empty_cells_are_invalid() {
        assert_eq!(parse_date_cell(&Cell::from("not a date")), None);
        assert_eq!(parse_date_cell(&Cell::from("")), None);
        assert_eq!(parse_date_cell(&Cell::Empty), None);
    }
}
