//! Display formatting for domain values: weights, calendar dates and order
//! statuses. Everything here is a pure function over its input; the UI calls
//! these per render and tests pin the exact output strings.

#![allow(dead_code)]

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Month};

/// ISO date layout used by `<input type="date">` and persisted state.
const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Shown when a stored date string no longer parses.
pub const INVALID_DATE: &str = "Date invalide";

/// Renders a weight in grams. At or above one kilogram the value switches to
/// kilograms with two decimals; below it stays in grams as-is.
pub fn format_weight(grams: f64) -> String {
    if grams >= 1000.0 {
        format!("{:.2} kg", grams / 1000.0)
    } else {
        format!("{grams} g")
    }
}

/// Renders a calendar date in French long form, e.g. "14 mars 2024".
pub fn format_date(date: Date) -> String {
    format!(
        "{} {} {}",
        date.day(),
        french_month(date.month()),
        date.year()
    )
}

/// Parses the ISO `YYYY-MM-DD` layout used by date inputs and stored state.
pub fn parse_iso_date(input: &str) -> Option<Date> {
    Date::parse(input, ISO_DATE).ok()
}

/// Parses an ISO `YYYY-MM-DD` string and renders it like [`format_date`].
/// Malformed input yields the fixed [`INVALID_DATE`] sentinel.
pub fn format_date_str(input: &str) -> String {
    match parse_iso_date(input) {
        Some(date) => format_date(date),
        None => INVALID_DATE.to_string(),
    }
}

fn french_month(month: Month) -> &'static str {
    match month {
        Month::January => "janvier",
        Month::February => "février",
        Month::March => "mars",
        Month::April => "avril",
        Month::May => "mai",
        Month::June => "juin",
        Month::July => "juillet",
        Month::August => "août",
        Month::September => "septembre",
        Month::October => "octobre",
        Month::November => "novembre",
        Month::December => "décembre",
    }
}

/// French display label for a status code. Codes outside the known set pass
/// through unchanged so stale persisted data still renders something.
pub fn translate_status(status: &str) -> String {
    match status {
        "pending" => "En attente".to_string(),
        "confirmed" => "Confirmée".to_string(),
        "processing" => "En traitement".to_string(),
        "completed" => "Terminée".to_string(),
        "cancelled" => "Annulée".to_string(),
        _ => status.to_string(),
    }
}

/// Badge classes (background, text, border) for a status code. Unknown codes
/// fall back to the neutral gray palette.
pub fn status_color(status: &str) -> &'static str {
    match status {
        "pending" => "bg-yellow-500/10 text-yellow-300 border-yellow-500/40",
        "confirmed" => "bg-blue-500/10 text-blue-300 border-blue-500/40",
        "processing" => "bg-purple-500/10 text-purple-300 border-purple-500/40",
        "completed" => "bg-green-500/10 text-green-300 border-green-500/40",
        "cancelled" => "bg-red-500/10 text-red-300 border-red-500/40",
        _ => "bg-gray-500/10 text-gray-300 border-gray-500/40",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrderStatus;
    use time::macros::date;

    #[test]
    fn weight_below_threshold_stays_in_grams() {
        assert_eq!(format_weight(999.0), "999 g");
        assert_eq!(format_weight(0.0), "0 g");
        assert_eq!(format_weight(250.5), "250.5 g");
    }

    #[test]
    fn weight_at_or_above_threshold_switches_to_kilograms() {
        assert_eq!(format_weight(1000.0), "1.00 kg");
        assert_eq!(format_weight(1500.0), "1.50 kg");
        assert_eq!(format_weight(2375.0), "2.38 kg");
    }

    #[test]
    fn date_renders_in_french_long_form() {
        assert_eq!(format_date(date!(2024 - 03 - 14)), "14 mars 2024");
        assert_eq!(format_date(date!(2025 - 12 - 01)), "1 décembre 2025");
    }

    #[test]
    fn date_string_parses_iso_input() {
        assert_eq!(format_date_str("2024-03-14"), "14 mars 2024");
    }

    #[test]
    fn malformed_date_string_yields_sentinel() {
        assert_eq!(format_date_str("pas une date"), INVALID_DATE);
        assert_eq!(format_date_str("2024-13-40"), INVALID_DATE);
        assert_eq!(format_date_str(""), INVALID_DATE);
    }

    #[test]
    fn known_statuses_have_french_labels() {
        assert_eq!(translate_status("pending"), "En attente");
        assert_eq!(translate_status("confirmed"), "Confirmée");
        assert_eq!(translate_status("processing"), "En traitement");
        assert_eq!(translate_status("completed"), "Terminée");
        assert_eq!(translate_status("cancelled"), "Annulée");
    }

    #[test]
    fn unknown_status_passes_through() {
        assert_eq!(translate_status("unknown_code"), "unknown_code");
        assert_eq!(translate_status(""), "");
    }

    #[test]
    fn status_colors_map_to_expected_palettes() {
        assert!(status_color("pending").contains("yellow"));
        assert!(status_color("confirmed").contains("blue"));
        assert!(status_color("processing").contains("purple"));
        assert!(status_color("completed").contains("green"));
        assert!(status_color("cancelled").contains("red"));
        assert!(status_color("nonsense").contains("gray"));
    }

    #[test]
    fn every_known_status_gets_label_and_color() {
        for status in OrderStatus::ALL {
            let code = status.code();
            assert_ne!(translate_status(code), code);
            assert!(!status_color(code).contains("gray"));
        }
    }

    #[test]
    fn formatters_are_idempotent_over_repeated_calls() {
        assert_eq!(format_weight(1234.0), format_weight(1234.0));
        assert_eq!(translate_status("pending"), translate_status("pending"));
        assert_eq!(status_color("completed"), status_color("completed"));
        assert_eq!(format_date_str("2024-03-14"), format_date_str("2024-03-14"));
    }
}
