use chrono::{DateTime, NaiveDate, NaiveDateTime};

// 日期优先（day-first）格式，`%.f` 在没有小数部分时不消耗任何字符
// 两位年份必须排在 `%Y` 之前：`%Y` 也接受 1~2 位数字，会把 `24` 读成 0024 年
const DATETIME_FORMATS: &[&str] = &[
    "%d/%m/%y %H:%M:%S%.f",
    "%d/%m/%y %H:%M",
    "%d-%m-%y %H:%M:%S%.f",
    "%d-%m-%y %H:%M",
    "%d.%m.%y %H:%M:%S%.f",
    "%d.%m.%y %H:%M",
    "%d/%m/%Y %H:%M:%S%.f",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S%.f",
    "%d-%m-%Y %H:%M",
    "%d.%m.%Y %H:%M:%S%.f",
    "%d.%m.%Y %H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
];

const DATE_FORMATS: &[&str] = &[
    "%d/%m/%y",
    "%d-%m-%y",
    "%d.%m.%y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
];

/// Parse a timestamp cell. Ambiguous dates such as `01/02/2024` are read
/// day-first (1 February) and two-digit years land in 19xx/20xx. ISO-8601
/// and RFC 3339 values are accepted too; offsets are dropped and the
/// wall-clock time is kept.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if let Some(parsed) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
    {
        return Some(parsed);
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.naive_local());
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Format a timestamp for display, e.g. `2024-02-01 10:00:00.250`
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

/// Seconds since the Unix epoch, used as the x coordinate in charts
pub fn to_plot_seconds(timestamp: &NaiveDateTime) -> f64 {
    timestamp.and_utc().timestamp_millis() as f64 / 1000.0
}

const SUB_SECOND_SPAN: f64 = 10.0;
const ONE_DAY_SPAN: f64 = 86_400.0;

/// Axis label for a chart x coordinate produced by [`to_plot_seconds`].
///
/// `span` is the visible width of the axis in seconds: below 10 s ticks carry
/// milliseconds, above one day they carry the date.
pub fn format_plot_seconds(seconds: f64, span: f64) -> String {
    let fmt = if span < SUB_SECOND_SPAN {
        "%H:%M:%S%.3f"
    } else if span > ONE_DAY_SPAN {
        "%Y-%m-%d %H:%M"
    } else {
        "%H:%M:%S"
    };

    match DateTime::from_timestamp_millis((seconds * 1000.0).round() as i64) {
        Some(dt) => dt.naive_utc().format(fmt).to_string(),
        None => format!("{:.1}s", seconds),
    }
}
