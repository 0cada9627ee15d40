//! Time related utils.

use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create a new DateTime with the current time.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into the RFC 1123 form used by the HTTP `Date` header:
/// `Tue, 03 Jun 2025 04:00:00 GMT`
pub fn format_http_date(t: DateTime) -> String {
    t.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_http_date() {
        let t = Utc.with_ymd_and_hms(2025, 6, 3, 4, 0, 0).unwrap();
        assert_eq!(format_http_date(t), "Tue, 03 Jun 2025 04:00:00 GMT");
    }

    #[test]
    fn test_format_http_date_pads_day() {
        let t = Utc.with_ymd_and_hms(2022, 8, 1, 16, 5, 9).unwrap();
        assert_eq!(format_http_date(t), "Mon, 01 Aug 2022 16:05:09 GMT");
    }
}
