//! Date helpers for the dashboard widgets.
//!
//! Parsing lives in `contracts::shared::date_input`; this module only
//! formats for display.

use chrono::NaiveDateTime;
use contracts::enums::ProcessStatus;

pub use contracts::shared::date_input::{display_date, normalize, to_input_value};

/// "02/01/2025 08:00"
pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format("%d/%m/%Y %H:%M").to_string()
}

/// Status tooltip, extended with who ran the step and when
pub fn status_tooltip(
    status: ProcessStatus,
    executed_by: Option<&str>,
    last_update: Option<&NaiveDateTime>,
) -> String {
    let mut text = status.tooltip().to_string();
    if let Some(by) = executed_by {
        text.push_str(" · ");
        text.push_str(by);
    }
    if let Some(at) = last_update {
        text.push_str(" · ");
        text.push_str(&format_datetime(at));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::shared::date_input::PLACEHOLDER;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(8, 5, 0)
            .unwrap()
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime(&at()), "02/01/2025 08:05");
    }

    #[test]
    fn test_status_tooltip() {
        assert_eq!(
            status_tooltip(ProcessStatus::Pending, None, None),
            "Esperando procesamiento"
        );
        assert_eq!(
            status_tooltip(ProcessStatus::Success, Some("mgarcia"), Some(&at())),
            "Enviado correctamente · mgarcia · 02/01/2025 08:05"
        );
    }

    #[test]
    fn test_display_placeholder() {
        assert_eq!(display_date("no es fecha"), PLACEHOLDER);
        assert_eq!(display_date("01/03/2025"), "01 de mar, 2025");
    }
}
