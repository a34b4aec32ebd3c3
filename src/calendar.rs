use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Entry dates follow Japan Standard Time regardless of the host timezone.
const UTC_OFFSET_SECS: i32 = 9 * 60 * 60;

pub fn today() -> NaiveDate {
    today_at(Utc::now())
}

pub fn today_at(now: DateTime<Utc>) -> NaiveDate {
    match FixedOffset::east_opt(UTC_OFFSET_SECS) {
        Some(offset) => now.with_timezone(&offset).date_naive(),
        None => now.date_naive(),
    }
}
