use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use recast_api::Culture;
use recast_api::culture::DateOrder;

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f %:z",
    "%Y-%m-%d %H:%M:%S%.f %z",
];

const ISO_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a date/time in local time.
///
/// Runs of whitespace count as one space. Text carrying an offset
/// (RFC 3339, RFC 2822, ISO with offset) is converted to local time; text
/// without one is taken as local time. Besides ISO 8601 the culture's short
/// date order and separator are accepted, optionally followed by a time.
/// A date alone means midnight.
pub fn parse(text: &str, culture: &Culture) -> Option<DateTime<Local>> {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(&text) {
        return Some(dt.with_timezone(&Local));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(&text) {
        return Some(dt.with_timezone(&Local));
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&text, format) {
            return Some(dt.with_timezone(&Local));
        }
    }

    parse_naive(&text, culture).and_then(|naive| Local.from_local_datetime(&naive).earliest())
}

fn parse_naive(text: &str, culture: &Culture) -> Option<NaiveDateTime> {
    for format in ISO_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }

    let date = culture_date_format(culture);
    for time in culture_time_formats(culture) {
        let format = format!("{date} {time}");
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, &format) {
            return Some(naive);
        }
    }
    NaiveDate::parse_from_str(text, &date)
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

pub(crate) fn culture_date_format(culture: &Culture) -> String {
    let sep = culture.date_separator;
    match culture.date_order {
        DateOrder::Dmy => format!("%d{sep}%m{sep}%Y"),
        DateOrder::Mdy => format!("%m{sep}%d{sep}%Y"),
        DateOrder::Ymd => format!("%Y{sep}%m{sep}%d"),
    }
}

pub(crate) fn culture_time_formats(culture: &Culture) -> &'static [&'static str] {
    if culture.twelve_hour {
        &["%I:%M:%S %p", "%I:%M %p", "%H:%M:%S%.f", "%H:%M"]
    } else {
        &["%H:%M:%S%.f", "%H:%M"]
    }
}
