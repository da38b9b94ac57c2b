use chrono::{DateTime, NaiveDate, SubsecRound, Utc};

/// Parse a meal instant.
///
/// Accepts RFC 3339 date-times with any offset (normalised to UTC) and bare
/// `YYYY-MM-DD` dates, which land on midnight UTC. No timezone semantics are
/// implied beyond producing a sortable instant. Sub-second digits past the
/// sixth are truncated, matching the microsecond resolution meals are stored at.
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc).trunc_subsecs(6));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
