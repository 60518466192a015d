use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Utc};

/// Current instant as a naive UTC timestamp, the form stored on records.
pub fn now_utc() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Today's calendar date in UTC. Used as the default expense date.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// The Sunday on or before `date`.
pub fn week_start_sunday(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday() as i64;
    date - Duration::days(offset)
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// January 1st of the year containing `date`.
pub fn year_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date)
}

/// First day of the month before the month starting at `start`.
pub fn previous_month_start(start: NaiveDate) -> NaiveDate {
    let (year, month) = if start.month() == 1 {
        (start.year() - 1, 12)
    } else {
        (start.year(), start.month() - 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(start)
}
