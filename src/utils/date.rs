use chrono::{Datelike, Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Most recent Sunday at or before `d` (day-of-week index 0 = Sunday).
pub fn week_start(d: NaiveDate) -> NaiveDate {
    let days_from_sunday = d.weekday().num_days_from_sunday() as i64;
    d - Duration::days(days_from_sunday)
}

/// First calendar day of `d`'s month.
pub fn month_start(d: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(d.year(), d.month(), 1).unwrap_or(d)
}

/// `YYYY-MM` key used for monthly grouping.
pub fn month_key(d: NaiveDate) -> String {
    d.format("%Y-%m").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn week_starts_on_sunday() {
        // 2024-01-07 is a Sunday
        assert_eq!(week_start(d("2024-01-07")), d("2024-01-07"));
        // the Saturday before belongs to the previous week
        assert_eq!(week_start(d("2024-01-06")), d("2023-12-31"));
        // mid-week rolls back to the same Sunday
        assert_eq!(week_start(d("2024-01-10")), d("2024-01-07"));
    }

    #[test]
    fn month_start_is_first_day() {
        assert_eq!(month_start(d("2024-02-29")), d("2024-02-01"));
        assert_eq!(month_key(d("2024-02-29")), "2024-02");
    }
}
