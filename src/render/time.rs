use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::view::Element;

/// What the browser prints for a timestamp it cannot parse.
pub const INVALID_DATE: &str = "Invalid Date";

/// Weekday, month, day, year, hours and minutes; no seconds or zone suffix.
const EVENT_TIME_FORMAT: &str = "%a %b %d %Y %H:%M";

/// Zoneless timestamps are read as local time in `offset`.
const LOCAL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

const STEPS: [f64; 6] = [60.0, 60.0, 24.0, 7.0, 365.0 / 7.0 / 12.0, 12.0];
const UNITS: [&str; 7] = ["second", "minute", "hour", "day", "week", "month", "year"];

pub fn parse_timestamp(raw: &str, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&offset));
    }
    for format in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return offset.from_local_datetime(&naive).single();
        }
    }
    // Date-only strings are midnight UTC.
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).with_timezone(&offset))
}

/// Formats an event time for the listing and the detail modal.
pub fn format_event_time(raw: Option<&str>, offset: FixedOffset) -> String {
    raw.and_then(|raw| parse_timestamp(raw, offset))
        .map(|time| time.format(EVENT_TIME_FORMAT).to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Relative wording such as "3 hours ago" or "in 2 days".
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_milliseconds() as f64 / 1000.0;
    let future = seconds < 0.0;

    let mut diff = seconds.abs();
    let mut idx = 0;
    while idx < STEPS.len() && diff >= STEPS[idx] {
        diff /= STEPS[idx];
        idx += 1;
    }
    let count = diff.floor() as i64;
    let plural = count > if idx == 0 { 9 } else { 1 };

    match (idx, plural, future) {
        (0, false, false) => "just now".to_string(),
        (0, false, true) => "right now".to_string(),
        (_, true, false) => format!("{count} {}s ago", UNITS[idx]),
        (_, true, true) => format!("in {count} {}s", UNITS[idx]),
        (_, false, false) => format!("1 {} ago", UNITS[idx]),
        (_, false, true) => format!("in 1 {}", UNITS[idx]),
    }
}

/// Fills every `.timeago` element under `root` from its `datetime` attribute.
/// Unparsable timestamps leave the element empty.
pub fn render_timeago(root: &mut Element, now: DateTime<Utc>, offset: FixedOffset) {
    root.for_each_mut(&mut |element| {
        if !element.has_class("timeago") {
            return;
        }
        if let Some(then) = element
            .attribute("datetime")
            .and_then(|raw| parse_timestamp(raw, offset))
        {
            element.text = time_ago(then.with_timezone(&Utc), now);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn test_format_event_time() {
        assert_eq!(
            format_event_time(Some("2021-05-01T10:00:00Z"), utc()),
            "Sat May 01 2021 10:00"
        );
        let eastern = FixedOffset::west_opt(4 * 3600).unwrap();
        assert_eq!(
            format_event_time(Some("2021-05-01T10:00:00Z"), eastern),
            "Sat May 01 2021 06:00"
        );
        assert_eq!(
            format_event_time(Some("2020-08-14T18:30"), eastern),
            "Fri Aug 14 2020 18:30"
        );
    }

    #[test]
    fn test_date_only_is_utc_midnight() {
        let eastern = FixedOffset::west_opt(4 * 3600).unwrap();
        assert_eq!(
            format_event_time(Some("2021-05-01"), eastern),
            "Fri Apr 30 2021 20:00"
        );
    }

    #[test]
    fn test_invalid_event_time() {
        assert_eq!(format_event_time(None, utc()), INVALID_DATE);
        assert_eq!(format_event_time(Some("next tuesday"), utc()), INVALID_DATE);
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = Utc.with_ymd_and_hms(2021, 5, 1, 12, 0, 0).unwrap();
        let ago = |d: Duration| time_ago(now - d, now);

        assert_eq!(ago(Duration::seconds(5)), "just now");
        assert_eq!(ago(Duration::seconds(30)), "30 seconds ago");
        assert_eq!(ago(Duration::seconds(90)), "1 minute ago");
        assert_eq!(ago(Duration::minutes(12)), "12 minutes ago");
        assert_eq!(ago(Duration::hours(3)), "3 hours ago");
        assert_eq!(ago(Duration::hours(30)), "1 day ago");
        assert_eq!(ago(Duration::days(3)), "3 days ago");
        assert_eq!(ago(Duration::days(15)), "2 weeks ago");
        assert_eq!(ago(Duration::days(70)), "2 months ago");
        assert_eq!(ago(Duration::days(800)), "2 years ago");
        assert_eq!(time_ago(now + Duration::hours(2), now), "in 2 hours");
    }

    #[test]
    fn test_render_timeago() {
        let now = Utc.with_ymd_and_hms(2021, 5, 1, 12, 0, 0).unwrap();
        let mut root = Element::new("div");
        root.append(
            Element::new("time")
                .class("timeago")
                .attr("datetime", "2021-05-01T09:00:00Z"),
        );
        root.append(Element::new("time").class("timeago").attr("datetime", "garbage"));

        render_timeago(&mut root, now, utc());

        assert_eq!(root.children[0].text, "3 hours ago");
        assert_eq!(root.children[1].text, "");
    }
}
