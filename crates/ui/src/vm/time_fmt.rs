use chrono::{DateTime, Utc};

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

/// `m:ss` for a span between two instants; negative spans clamp to zero.
#[must_use]
pub fn format_duration(from: DateTime<Utc>, to: DateTime<Utc>) -> String {
    let seconds = u64::try_from((to - from).num_seconds()).unwrap_or(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use quiz_core::time::fixed_now;

    #[test]
    fn formats_minutes_and_seconds() {
        let start = fixed_now();
        assert_eq!(format_duration(start, start + Duration::seconds(75)), "1:15");
        assert_eq!(format_duration(start + Duration::seconds(5), start), "0:00");
        assert_eq!(format_datetime(start), "2023-11-14 22:13");
    }
}
