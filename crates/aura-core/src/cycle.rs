//! Next-period prediction from the daily log history.

use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::{Span, Timestamp};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::daily_log::DailyLog;

/// Assumed cycle length until per-user averaging exists.
pub const AVG_CYCLE_DAYS: i64 = 28;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CyclePrediction {
    pub last_period: Date,
    pub next_period: Date,
    /// Days from today until `next_period`; zero once it has passed.
    pub days_until: i32,
}

/// Predict the next period from the most recent period log.
///
/// Returns `None` when no log is marked as a period day.
pub fn predict_next(logs: &[DailyLog], now: Timestamp, tz: &TimeZone) -> Option<CyclePrediction> {
    let last_period = logs
        .iter()
        .filter(|log| log.is_period)
        .map(|log| log.date.to_zoned(tz.clone()).date())
        .max()?;

    let next_period = last_period
        .checked_add(Span::new().days(AVG_CYCLE_DAYS))
        .ok()?;
    let today = now.to_zoned(tz.clone()).date();
    let days_until = (next_period - today).get_days().max(0);

    Some(CyclePrediction {
        last_period,
        next_period,
        days_until,
    })
}
