use chrono::NaiveDate;
use chrono::NaiveTime;

use serde::Deserialize;
use serde::Serialize;

use std::fmt::Display;

/// Everything the user enters for a single shift. Validation (time format,
/// rating range) happens at the cli boundary, so counts and ratings in here
/// are already in range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawShiftInput {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub device: String,
    pub health: u8,
    pub motivation: u8,

    pub total_customers: u32,
    pub coin_users: u32,
    pub regular_customers: u32,
    pub paid_users: u32,
    pub high_spenders: u32,

    pub total_sales: u64,
    pub entrance_fee: u64,
    pub tips: u64,
    pub special_reward: u64,

    pub talk_theme: String,
    pub sales_approach: String,
    pub tension: String,
    pub success_memo: String,
    pub failure_memo: String,

    pub has_event: bool,
    pub payday: String,
}

/// A raw input together with its derived metrics. Derived fields depend only
/// on the raw fields of the same record, never on the rest of the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    #[serde(flatten)]
    pub raw: RawShiftInput,

    pub working_hours: f64,
    pub hourly_wage: u64,
    pub paid_conversion_rate: f64,
    pub coin_user_rate: f64,
    pub regular_rate: f64,
    pub high_spender_rate: f64,
    pub tip_rate: f64,
    pub weekday: Weekday,
    pub time_category: TimeCategory,
}

/// Day of week with Sunday first, so that the index into [Weekday::TABLE]
/// matches the day-of-week number of the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Weekday {
    pub const TABLE: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    /// Order used by the weekday wage chart.
    pub const CHART_ORDER: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    pub fn from_date(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Self::TABLE[date.weekday().num_days_from_sunday() as usize]
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Sun => "Sun",
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
        };
        write!(f, "{name}")
    }
}

/// Bucket of the day a shift started in, taken from the hour component of
/// the start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeCategory {
    LateNight,
    Morning,
    Afternoon,
    Evening,
}

impl TimeCategory {
    pub fn from_start_hour(hour: u32) -> Self {
        if hour < 6 {
            TimeCategory::LateNight
        } else if hour < 12 {
            TimeCategory::Morning
        } else if hour < 17 {
            TimeCategory::Afternoon
        } else {
            TimeCategory::Evening
        }
    }
}

impl Display for TimeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TimeCategory::LateNight => "late night",
            TimeCategory::Morning => "morning",
            TimeCategory::Afternoon => "afternoon",
            TimeCategory::Evening => "evening",
        };
        write!(f, "{name}")
    }
}
