use chrono::{DateTime, Local, LocalResult, NaiveDateTime, TimeZone, Utc};

const DATETIME_LOCAL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Accepts RFC 3339 or the value of an `<input type="datetime-local">`, which carries no
/// offset and is read in the browser's zone.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    let naive = DATETIME_LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())?;
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(local) => Some(local.with_timezone(&Utc)),
        // DST overlap: take the earlier instant.
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => None,
    }
}

pub fn to_datetime_local_input(value: &DateTime<Utc>) -> String {
    value
        .with_timezone(&Local)
        .format("%Y-%m-%dT%H:%M")
        .to_string()
}

pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value
        .with_timezone(&Local)
        .format("%b %-d, %Y %H:%M")
        .to_string()
}

pub fn format_range(start: &DateTime<Utc>, end: &DateTime<Utc>) -> String {
    let start_local = start.with_timezone(&Local);
    let end_local = end.with_timezone(&Local);
    if start_local.date_naive() == end_local.date_naive() {
        format!(
            "{} - {}",
            start_local.format("%b %-d, %Y %H:%M"),
            end_local.format("%H:%M")
        )
    } else {
        format!("{} - {}", format_timestamp(start), format_timestamp(end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_with_offset() {
        let parsed = parse_timestamp("2024-01-01T10:00:00+01:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap());
    }

    #[test]
    fn parses_datetime_local_in_local_zone() {
        let parsed = parse_timestamp("2024-06-01T09:30").unwrap();
        let expected = Local
            .with_ymd_and_hms(2024, 6, 1, 9, 30, 0)
            .earliest()
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(parsed, expected);
        assert_eq!(to_datetime_local_input(&parsed), "2024-06-01T09:30");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("tomorrow").is_none());
        assert!(parse_timestamp("2024-13-01T09:00").is_none());
    }

    #[test]
    fn same_day_range_omits_second_date() {
        let start = parse_timestamp("2024-06-01T09:00").unwrap();
        let end = parse_timestamp("2024-06-01T10:30").unwrap();
        assert_eq!(format_range(&start, &end), "Jun 1, 2024 09:00 - 10:30");
    }
}
