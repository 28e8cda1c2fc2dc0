use std::fmt::Display;

use ansi_term::Colour;
use anyhow::Result;
use chrono::{DateTime, Datelike, Local};
use chrono_english::parse_date_string;
use clap::{CommandFactory, Parser, ValueEnum};
use now::DateTimeNow;

use crate::{record::analysis, storage::blob_store::BlobStore};

use super::{
    load_store,
    output::{format_hours, format_yen, stars},
    Args,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DateStyle {
    Uk,
    Us,
}

impl From<DateStyle> for chrono_english::Dialect {
    fn from(value: DateStyle) -> Self {
        match value {
            DateStyle::Uk => Self::Uk,
            DateStyle::Us => Self::Us,
        }
    }
}

impl Display for DateStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateStyle::Uk => write!(f, "uk"),
            DateStyle::Us => write!(f, "us"),
        }
    }
}

#[derive(Debug, Parser)]
pub struct CalendarCommand {
    #[arg(
        long = "date",
        short,
        help = "Any date inside the month to display. Examples are \"today\", \"1 week ago\", \"15/03/2025\""
    )]
    date: Option<String>,
    #[arg(long, default_value_t = DateStyle::Uk, help = "Style of dates used during parsing. For Uk it's day/month/year. For Us it's month/day/year")]
    date_style: DateStyle,
}

#[derive(Debug, Parser)]
pub struct DayCommand {
    #[arg(
        long = "date",
        short,
        help = "Day to display. Examples are \"yesterday\", \"15/03/2025\""
    )]
    date: Option<String>,
    #[arg(long, default_value_t = DateStyle::Uk, help = "Style of dates used during parsing. For Uk it's day/month/year. For Us it's month/day/year")]
    date_style: DateStyle,
}

/// Defaults to now when no date was given.
fn parse_cli_date(date: Option<String>, date_style: DateStyle) -> Result<DateTime<Local>> {
    let now = Local::now();
    match date.map(|s| parse_date_string(&s, now, date_style.into())) {
        Some(Ok(v)) => Ok(v.with_timezone(&Local)),
        Some(Err(e)) => Err(Args::command()
            .error(
                clap::error::ErrorKind::ValueValidation,
                format!("Failed to validate date {e}"),
            )
            .into()),
        None => Ok(now),
    }
}

/// Renders one month as a Su..Sa grid and highlights the day numbers that
/// have at least one record. Presence is keyed by day-of-month over the
/// whole store, the same day number in another month lights up too.
pub async fn process_calendar_command(
    CalendarCommand { date, date_style }: CalendarCommand,
    blob_store: &impl BlobStore,
) -> Result<()> {
    let target = parse_cli_date(date, date_style)?;
    let store = load_store(blob_store).await;
    let presence = analysis::calendar_presence(&store);

    let first = target.beginning_of_month();
    let days_in_month = target.end_of_month().day();
    let offset = first.weekday().num_days_from_sunday();

    println!("{}", target.format("%B %Y"));
    println!("Su Mo Tu We Th Fr Sa");
    for _ in 0..offset {
        print!("   ");
    }
    for day in 1..=days_in_month {
        if presence.contains(&day) {
            print!("{} ", Colour::Green.bold().paint(format!("{day:2}")));
        } else {
            print!("{day:2} ");
        }
        if (offset + day) % 7 == 0 {
            println!();
        }
    }
    if (offset + days_in_month) % 7 != 0 {
        println!();
    }
    Ok(())
}

/// Prints the full detail panel for the first record of a day.
pub async fn process_day_command(
    DayCommand { date, date_style }: DayCommand,
    blob_store: &impl BlobStore,
) -> Result<()> {
    let date = parse_cli_date(date, date_style)?.date_naive();
    let store = load_store(blob_store).await;

    let Some(record) = analysis::day_detail(&store, date) else {
        println!("No record for {date}");
        return Ok(());
    };

    println!("{} ({})", record.raw.date, record.weekday);
    println!("Total sales\t{}", format_yen(record.raw.total_sales));
    println!("Hourly wage\t{}", format_yen(record.hourly_wage));
    println!("Working hours\t{}", format_hours(record.working_hours));
    println!("Time of day\t{}", record.time_category);
    println!("Customers\t{}", record.raw.total_customers);
    println!("Health\t{}", stars(record.raw.health));
    println!("Motivation\t{}", stars(record.raw.motivation));
    if record.raw.has_event {
        println!("Event day");
    }
    if !record.raw.success_memo.is_empty() {
        println!("Worked\t{}", record.raw.success_memo);
    }
    if !record.raw.failure_memo.is_empty() {
        println!("Didn't work\t{}", record.raw.failure_memo);
    }
    Ok(())
}
