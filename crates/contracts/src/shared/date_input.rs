//! Date strings exchanged by the date pickers and the data provider.
//!
//! Dates are stored as `dd/mm/yyyy`; `yyyy-mm-dd` (what `<input type="date">`
//! produces) is accepted on input.

use anyhow::{anyhow, bail, Context};
use chrono::{Datelike, NaiveDate};

pub const STORAGE_FORMAT: &str = "%d/%m/%Y";
pub const ISO_FORMAT: &str = "%Y-%m-%d";
pub const PLACEHOLDER: &str = "Seleccionar fecha";

const MONTHS_ES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

pub fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        bail!("empty date");
    }
    if value.contains('/') {
        NaiveDate::parse_from_str(value, STORAGE_FORMAT)
            .with_context(|| format!("invalid date '{}', expected dd/mm/yyyy", value))
    } else {
        let date_part = value.split('T').next().unwrap_or(value);
        NaiveDate::parse_from_str(date_part, ISO_FORMAT)
            .with_context(|| format!("invalid date '{}', expected yyyy-mm-dd", value))
    }
}

pub fn to_storage(date: NaiveDate) -> String {
    date.format(STORAGE_FORMAT).to_string()
}

/// Normalise any accepted input to `dd/mm/yyyy`
pub fn normalize(value: &str) -> anyhow::Result<String> {
    parse_date(value).map(to_storage)
}

/// Value for an `<input type="date">`, empty when unparsable
pub fn to_input_value(value: &str) -> String {
    parse_date(value)
        .map(|d| d.format(ISO_FORMAT).to_string())
        .unwrap_or_default()
}

/// `05 de ene, 2025`; the placeholder when the value cannot be parsed
pub fn display_date(value: &str) -> String {
    match parse_date(value) {
        Ok(d) => format!(
            "{:02} de {}, {}",
            d.day(),
            MONTHS_ES[d.month0() as usize],
            d.year()
        ),
        Err(_) => PLACEHOLDER.to_string(),
    }
}

/// Parse both ends and check `start <= end`
pub fn parse_range(start: &str, end: &str) -> anyhow::Result<(NaiveDate, NaiveDate)> {
    let start_date = parse_date(start)?;
    let end_date = parse_date(end)?;
    if start_date > end_date {
        return Err(anyhow!(
            "start date {} is after end date {}",
            to_storage(start_date),
            to_storage(end_date)
        ));
    }
    Ok((start_date, end_date))
}
