use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Date format used once a notification is a week old (en-US short date, e.g. 10/9/2026)
pub const ABSOLUTE_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Parse a notification timestamp.
///
/// Accepted forms:
/// - `2026-10-17T09:30:00` (optionally with fractional seconds, or a space instead of `T`)
/// - RFC 3339 with an offset; the offset is dropped and the wall clock kept
/// - `20261017T093000Z`, the compact form used by the legislative data pipelines
/// - `2026-10-17`, read as midnight
pub fn parse_timestamp(timestamp_str: &str) -> Option<NaiveDateTime> {
    let s = timestamp_str.trim();

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    if let Some(dt) = parse_compact_timestamp(s) {
        return Some(dt);
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Format: 20250428T040000Z
fn parse_compact_timestamp(s: &str) -> Option<NaiveDateTime> {
    if s.len() != 16 || !s.ends_with('Z') || s.as_bytes()[8] != b'T' || !s.is_ascii() {
        return None;
    }

    let date_part = &s[0..8]; // YYYYMMDD
    let time_part = &s[9..15]; // HHMMSS

    let year: i32 = date_part[0..4].parse().ok()?;
    let month: u32 = date_part[4..6].parse().ok()?;
    let day: u32 = date_part[6..8].parse().ok()?;

    let hour: u32 = time_part[0..2].parse().ok()?;
    let minute: u32 = time_part[2..4].parse().ok()?;
    let second: u32 = time_part[4..6].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)
}

/// Midnight at the start of the calendar day containing `now`
pub fn start_of_day(now: NaiveDateTime) -> NaiveDateTime {
    now.date().and_time(NaiveTime::MIN)
}

/// Human-readable age of a notification relative to `now`.
///
/// Units roll over at their boundary: exactly 60 minutes is "1h ago", exactly
/// 24 hours is "1d ago", and from 7 days on the absolute date is shown.
/// A timestamp after `now` counts as zero elapsed time.
pub fn format_relative_time(timestamp: NaiveDateTime, now: NaiveDateTime) -> String {
    let elapsed = (now - timestamp).max(Duration::zero());

    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{}h ago", hours);
    }

    let days = elapsed.num_days();
    if days < 7 {
        return format!("{}d ago", days);
    }

    timestamp.format(ABSOLUTE_DATE_FORMAT).to_string()
}

/// Serde adapter for notification timestamps: writes ISO-8601 without offset,
/// reads anything [`parse_timestamp`] accepts.
pub mod serde_timestamp {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp '{}'", raw)))
    }
}
