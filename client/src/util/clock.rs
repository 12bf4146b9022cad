//! Wall-clock helpers for transcript timestamps.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

const MS_PER_MINUTE: f64 = 60_000.0;
const MINUTES_PER_DAY: i64 = 24 * 60;

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

/// Offset of local time from UTC in minutes (east positive).
pub fn local_offset_minutes() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let offset = -js_sys::Date::new_0().get_timezone_offset().round() as i64;
        offset
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

/// Format an epoch timestamp as `HH:MM` at the given UTC offset.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_time(timestamp_ms: f64, offset_minutes: i64) -> String {
    if !timestamp_ms.is_finite() {
        return "--:--".to_owned();
    }
    let minutes = (timestamp_ms / MS_PER_MINUTE).floor() as i64 + offset_minutes;
    let of_day = minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", of_day / 60, of_day % 60)
}
