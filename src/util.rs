// Formatting helpers shared by the message bubbles.

use chrono::{DateTime, Local, NaiveDateTime};

/// Relative label for a message timestamp, compared by local calendar day.
///
/// Returns an empty string when `iso` is empty or cannot be parsed.
pub fn format_message_time(iso: &str, now: NaiveDateTime) -> String {
    let Some(at) = parse_local(iso) else {
        return String::new();
    };
    let clock = at.format("%H:%M");
    match (now.date() - at.date()).num_days() {
        0 => clock.to_string(),
        1 => format!("Yesterday at {}", clock),
        n @ 2..=6 => format!("{}d ago at {}", n, clock),
        _ => at.format("%d/%m/%Y %H:%M").to_string(),
    }
}

/// Parses either a naive ISO timestamp (already local) or an RFC 3339 one
/// carrying an offset, which is converted to local time.
pub fn parse_local(iso: &str) -> Option<NaiveDateTime> {
    let s = iso.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn format_duration(secs: u64) -> String {
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    if h > 0 {
        format!("{:01}:{:02}:{:02}", h, m, s)
    } else if m > 0 {
        format!("{:02}:{:02}", m, s)
    } else {
        format!("{}s", s)
    }
}

/// Average pace as `m'ss"/km`; `None` for a zero or non-finite distance.
pub fn format_pace(distance_km: f64, secs: u64) -> Option<String> {
    if !distance_km.is_finite() || distance_km <= 0.0 || secs == 0 {
        return None;
    }
    let per_km = (secs as f64 / distance_km).round() as u64;
    Some(format!("{}'{:02}\"/km", per_km / 60, per_km % 60))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    #[test]
    fn test_same_day_shows_clock() {
        let now = at("2024-01-02T10:00:00");
        assert_eq!(format_message_time("2024-01-02T09:00:00", now), "09:00");
    }

    #[test]
    fn test_previous_calendar_day_is_yesterday() {
        let now = at("2024-01-02T10:00:00");
        assert_eq!(format_message_time("2024-01-01T23:30:00", now), "Yesterday at 23:30");
    }

    #[test]
    fn test_just_after_midnight_is_yesterday_not_hours() {
        let now = at("2024-01-02T00:30:00");
        assert_eq!(format_message_time("2024-01-01T22:30:00", now), "Yesterday at 22:30");
    }

    #[test]
    fn test_within_week_shows_days_ago() {
        let now = at("2024-01-02T10:00:00");
        assert_eq!(format_message_time("2023-12-27T08:00:00", now), "6d ago at 08:00");
        assert_eq!(format_message_time("2023-12-31T08:15:00", now), "2d ago at 08:15");
    }

    #[test]
    fn test_older_shows_full_date() {
        let now = at("2024-01-02T10:00:00");
        assert_eq!(format_message_time("2023-12-01T08:00:00", now), "01/12/2023 08:00");
        assert_eq!(format_message_time("2023-12-26T08:00:00", now), "26/12/2023 08:00");
    }

    #[test]
    fn test_fractional_seconds_accepted() {
        let now = at("2024-01-02T10:00:00");
        assert_eq!(format_message_time("2024-01-02T09:05:12.345", now), "09:05");
    }

    #[test]
    fn test_empty_or_garbage_is_empty() {
        let now = at("2024-01-02T10:00:00");
        assert_eq!(format_message_time("", now), "");
        assert_eq!(format_message_time("not a date", now), "");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(42), "42s");
        assert_eq!(format_duration(125), "02:05");
        assert_eq!(format_duration(3725), "1:02:05");
    }

    #[test]
    fn test_format_pace() {
        assert_eq!(format_pace(10.0, 3000).as_deref(), Some("5'00\"/km"));
        assert_eq!(format_pace(5.0, 1650).as_deref(), Some("5'30\"/km"));
        assert_eq!(format_pace(0.0, 1650), None);
    }
}
