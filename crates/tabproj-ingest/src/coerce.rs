//! Tolerant date coercion.
//!
//! Cells of date-role columns arrive as arbitrary text. Coercion tries an
//! ordered list of formats and yields either a valid `NaiveDate` or the
//! explicit `Unparsed` sentinel — never an error, never a silent epoch.
//! Day-first slash formats are tried before month-first, matching the
//! registers this tool is pointed at.

use chrono::{NaiveDate, NaiveDateTime};
use tabproj_core::CellValue;

/// Date-only formats, in trial order
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%d/%m/%Y",
    "%m/%d/%Y",
    "%d-%m-%Y",
    "%Y/%m/%d",
    "%d.%m.%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
];

/// Date-time formats whose date portion is kept
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M",
];

/// Parse a date from arbitrary text, trying each known format in order
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Some(datetime.date());
        }
    }
    None
}

/// Coerce one cell of a date-role column.
///
/// Already-typed dates pass through; everything that does not parse — blanks
/// and bare numbers included — becomes the unparsed sentinel.
pub fn coerce_cell(cell: CellValue) -> CellValue {
    match cell {
        CellValue::Date(date) => CellValue::Date(date),
        CellValue::Text(text) => parse_date(&text).map_or(CellValue::Unparsed, CellValue::Date),
        CellValue::Empty | CellValue::Number(_) | CellValue::Unparsed => CellValue::Unparsed,
    }
}
