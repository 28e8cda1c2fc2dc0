use chrono::{Duration, NaiveTime, Timelike};

use super::entities::{RawShiftInput, ShiftRecord, TimeCategory, Weekday};

/// Computes every derived metric for a raw shift. Pure, never fails: ratios
/// with a zero denominator come out as 0 instead of NaN, and a zero-length
/// shift gets a wage of 0.
pub fn derive_record(raw: RawShiftInput) -> ShiftRecord {
    let working_hours = working_hours(raw.start_time, raw.end_time);
    let hourly_wage = if working_hours > 0. {
        round_half_up(raw.total_sales as f64 / working_hours)
    } else {
        0
    };

    let paid_conversion_rate = ratio(raw.paid_users, raw.total_customers);
    let coin_user_rate = ratio(raw.coin_users, raw.total_customers);
    let regular_rate = ratio(raw.regular_customers, raw.total_customers);
    let high_spender_rate = ratio(raw.high_spenders, raw.total_customers);
    let tip_rate = if raw.total_sales > 0 {
        raw.tips as f64 / raw.total_sales as f64
    } else {
        0.
    };

    let weekday = Weekday::from_date(raw.date);
    let time_category = TimeCategory::from_start_hour(raw.start_time.hour());

    ShiftRecord {
        working_hours,
        hourly_wage,
        paid_conversion_rate,
        coin_user_rate,
        regular_rate,
        high_spender_rate,
        tip_rate,
        weekday,
        time_category,
        raw,
    }
}

/// Length of a shift in hours. An end before the start means the shift ran
/// past midnight, so the end belongs to the next day. Equal times are a
/// zero-length shift, not a full day.
pub fn working_hours(start: NaiveTime, end: NaiveTime) -> f64 {
    let mut span = end - start;
    if span < Duration::zero() {
        span += Duration::days(1);
    }
    span.num_seconds() as f64 / 3600.
}

/// Rounds to the nearest integer with halves going up.
pub fn round_half_up(value: f64) -> u64 {
    (value + 0.5).floor() as u64
}

fn ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator > 0 {
        numerator as f64 / denominator as f64
    } else {
        0.
    }
}
