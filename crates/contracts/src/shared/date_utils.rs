/// Utilities for date and time formatting
///
/// Backend timestamps arrive as ISO strings (with or without offset, or as
/// bare dates). Displayed values use Spanish month abbreviations.
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};

const MONTHS_ES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

/// Format used by `<input type="datetime-local">`
pub const FORM_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parse an ISO timestamp into its wall-clock time.
///
/// Offsets are kept as sent by the server (no conversion to local time).
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    for fmt in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parse a timestamp as UTC (naive values are taken as UTC)
pub fn parse_utc(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value.trim()) {
        return Some(dt.with_timezone(&Utc));
    }
    parse_timestamp(value).map(|naive| naive.and_utc())
}

fn month_abbr(month: u32) -> &'static str {
    MONTHS_ES[(month.clamp(1, 12) - 1) as usize]
}

/// "15 oct 2024, 14:02"
pub fn format_datetime_es(dt: &NaiveDateTime) -> String {
    format!(
        "{} {} {}, {:02}:{:02}",
        dt.day(),
        month_abbr(dt.month()),
        dt.year(),
        dt.hour(),
        dt.minute()
    )
}

/// "15 oct 2024"
pub fn format_date_es(dt: &NaiveDateTime) -> String {
    format!("{} {} {}", dt.day(), month_abbr(dt.month()), dt.year())
}

/// "oct 2024"
pub fn format_month_es(dt: &NaiveDateTime) -> String {
    format!("{} {}", month_abbr(dt.month()), dt.year())
}

/// "15/10/2024"
pub fn format_date_numeric(dt: &NaiveDateTime) -> String {
    dt.format("%d/%m/%Y").to_string()
}

/// "15/10/2024, 14:02"
pub fn format_datetime_numeric(dt: &NaiveDateTime) -> String {
    dt.format("%d/%m/%Y, %H:%M").to_string()
}

/// Parse and format, or a fixed placeholder when the value is not a date
pub fn display_datetime(value: &str, placeholder: &str) -> String {
    parse_timestamp(value)
        .map(|dt| format_datetime_es(&dt))
        .unwrap_or_else(|| placeholder.to_string())
}

pub fn to_form_datetime(dt: &DateTime<Utc>) -> String {
    dt.format(FORM_DATETIME_FORMAT).to_string()
}

/// `datetime-local` value to RFC 3339 (`2024-10-15T14:02:00+00:00`)
pub fn form_datetime_to_iso(value: &str) -> Option<String> {
    NaiveDateTime::parse_from_str(value, FORM_DATETIME_FORMAT)
        .ok()
        .map(|naive| naive.and_utc().to_rfc3339())
}

/// "2024-10-15", used in export file names
pub fn today_iso(now: &DateTime<Utc>) -> String {
    now.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variants() {
        let expected = NaiveDate::from_ymd_opt(2024, 10, 15)
            .unwrap()
            .and_hms_opt(14, 2, 26)
            .unwrap();
        assert_eq!(parse_timestamp("2024-10-15T14:02:26Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-10-15T14:02:26.123456"), Some(expected + chrono::Duration::microseconds(123456)));
        assert_eq!(parse_timestamp("2024-10-15T14:02:26-04:00"), Some(expected));
        assert!(parse_timestamp("2024-10-15").is_some());
        assert!(parse_timestamp("15/10/2024").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_format_datetime_es() {
        let dt = parse_timestamp("2024-09-05T08:07:00Z").unwrap();
        assert_eq!(format_datetime_es(&dt), "5 sept 2024, 08:07");
        assert_eq!(format_date_es(&dt), "5 sept 2024");
        assert_eq!(format_month_es(&dt), "sept 2024");
        assert_eq!(format_date_numeric(&dt), "05/09/2024");
        assert_eq!(format_datetime_numeric(&dt), "05/09/2024, 08:07");
    }

    #[test]
    fn test_display_datetime_placeholder() {
        assert_eq!(display_datetime("nope", "Fecha no disponible"), "Fecha no disponible");
    }

    #[test]
    fn test_form_datetime_roundtrip() {
        let iso = form_datetime_to_iso("2024-10-15T14:02").unwrap();
        assert_eq!(iso, "2024-10-15T14:02:00+00:00");
        assert!(form_datetime_to_iso("2024-10-15").is_none());
    }
}
