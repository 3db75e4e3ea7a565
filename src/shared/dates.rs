use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};

/// 00:00 UTC on the first day of `now`'s month
pub fn start_of_month(now: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
        .single()
        .unwrap_or(now)
}

/// Start of the rolling seven-day window ending at `now`
pub fn start_of_week_window(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(7)
}

/// Calendar day (UTC) of a timestamp
pub fn day_of(at: DateTime<Utc>) -> NaiveDate {
    at.date_naive()
}
