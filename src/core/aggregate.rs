//! Aggregate hour computations.
//!
//! Pure functions over a store snapshot and a reference "now". Only closed
//! sessions count toward any bucket: an in-progress session is displayed
//! separately and folds in once it is clocked out.

use crate::models::{Summary, TimeRecord};
use crate::utils::date::{month_key, month_start, week_start};
use chrono::{DateTime, NaiveDate, Utc};

/// Summary for all of `user_id`'s closed records, bucketed against `now`.
///
/// Bucket boundaries: today = `now`'s calendar day; week = most recent Sunday
/// at or before `now`, inclusive; month = first day of `now`'s month.
pub fn summarize(records: &[TimeRecord], user_id: &str, now: DateTime<Utc>) -> Summary {
    summarize_range(records, user_id, now, None)
}

/// Same as [`summarize`] but limited to an inclusive `date` range.
pub fn summarize_range(
    records: &[TimeRecord],
    user_id: &str,
    now: DateTime<Utc>,
    range: Option<(NaiveDate, NaiveDate)>,
) -> Summary {
    let today = now.date_naive();
    let week_from = week_start(today);
    let month_from = month_start(today);

    let mut summary = Summary::default();

    for record in records {
        if record.user_id != user_id || record.is_open() {
            continue;
        }
        if let Some((from, to)) = range {
            if record.date < from || record.date > to {
                continue;
            }
        }
        let Some(hours) = record.duration_hours(None) else {
            continue;
        };

        summary.total_sessions += 1;
        summary.total_hours += hours;

        if record.date == today {
            summary.today += hours;
        }
        if record.date >= week_from {
            summary.week += hours;
        }
        if record.date >= month_from {
            summary.month += hours;
        }

        *summary.daily_breakdown.entry(record.date_str()).or_insert(0.0) += hours;
        *summary
            .weekly_breakdown
            .entry(week_start(record.date).format("%Y-%m-%d").to_string())
            .or_insert(0.0) += hours;
        *summary
            .monthly_breakdown
            .entry(month_key(record.date))
            .or_insert(0.0) += hours;
    }

    if summary.total_sessions > 0 {
        summary.average_session_length = summary.total_hours / summary.total_sessions as f64;
    }
    summary
}
