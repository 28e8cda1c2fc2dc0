//! Simple to use cli for logging work shifts and analyzing your earnings.
//! Every record carries its derived metrics (working hours, hourly wage,
//! conversion rates), so dashboard, calendar and chart views are plain
//! reads over the stored collection.
//!

pub mod cli;
pub mod record;
pub mod storage;
pub mod utils;
