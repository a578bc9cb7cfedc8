use chrono::{DateTime, Months, Utc};

use crate::error::{Error, Result};

const MILLIS_PER_DAY: i64 = 86_400_000;

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Adds calendar months, clamping to the last day of the target month
/// (2024-01-31 + 1 month = 2024-02-29).
pub fn add_months(dt: DateTime<Utc>, months: u32) -> Result<DateTime<Utc>> {
    dt.checked_add_months(Months::new(months))
        .ok_or_else(|| Error::Internal(format!("date overflow adding {} months to {}", months, dt)))
}

/// Subtracts calendar months with the same clamping rule as [`add_months`].
pub fn sub_months(dt: DateTime<Utc>, months: u32) -> Result<DateTime<Utc>> {
    dt.checked_sub_months(Months::new(months)).ok_or_else(|| {
        Error::Internal(format!("date overflow subtracting {} months from {}", months, dt))
    })
}

/// Whole days between two instants, rounded half up.
pub fn round_days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    let millis = (to - from).num_milliseconds();
    (millis as f64 / MILLIS_PER_DAY as f64).round() as i64
}

/// Whole days between two instants, rounded toward negative infinity.
pub fn floor_days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}
