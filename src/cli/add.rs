use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use clap::Parser;
use tracing::info;

use crate::{
    record::{derive::derive_record, entities::RawShiftInput},
    storage::blob_store::BlobStore,
    utils::time::{parse_clock, parse_iso_date},
};

use super::{
    load_store,
    output::{format_hours, format_yen},
    save_store,
};

#[derive(Debug, Parser)]
pub struct AddCommand {
    #[arg(long, value_parser = parse_iso_date, help = "Shift date, for example 2025-03-15")]
    date: NaiveDate,
    #[arg(long, value_parser = parse_clock, help = "Start of the shift as HH:MM")]
    start: NaiveTime,
    #[arg(
        long,
        value_parser = parse_clock,
        help = "End of the shift as HH:MM. An end before the start means the shift ran past midnight"
    )]
    end: NaiveTime,
    #[arg(long, default_value = "", help = "Device the shift ran on")]
    device: String,
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5), help = "Health rating from 1 to 5")]
    health: u8,
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5), help = "Motivation rating from 1 to 5")]
    motivation: u8,

    #[arg(long = "customers", default_value_t = 0, help = "Total customers seen")]
    total_customers: u32,
    #[arg(long, default_value_t = 0, help = "Customers that used coins")]
    coin_users: u32,
    #[arg(long = "regulars", default_value_t = 0, help = "Returning customers")]
    regular_customers: u32,
    #[arg(long, default_value_t = 0, help = "Customers that moved to paid")]
    paid_users: u32,
    #[arg(long, default_value_t = 0, help = "High spending customers")]
    high_spenders: u32,

    #[arg(long = "sales", default_value_t = 0, help = "Total sales for the shift")]
    total_sales: u64,
    #[arg(long = "entrance", default_value_t = 0, help = "Entrance fee part of the sales")]
    entrance_fee: u64,
    #[arg(long, default_value_t = 0, help = "Tips part of the sales")]
    tips: u64,
    #[arg(long = "special", default_value_t = 0, help = "Special reward part of the sales")]
    special_reward: u64,

    #[arg(long, default_value = "", help = "What the talk was about")]
    talk_theme: String,
    #[arg(long, default_value = "", help = "Sales approach used")]
    sales_approach: String,
    #[arg(long, default_value = "", help = "Own tension during the shift")]
    tension: String,
    #[arg(long, default_value = "", help = "What worked")]
    success_memo: String,
    #[arg(long, default_value = "", help = "What didn't work")]
    failure_memo: String,

    #[arg(long, help = "Mark the day as an event day")]
    event: bool,
    #[arg(long, default_value = "", help = "Payday marker")]
    payday: String,
}

impl AddCommand {
    fn into_raw(self) -> RawShiftInput {
        RawShiftInput {
            date: self.date,
            start_time: self.start,
            end_time: self.end,
            device: self.device,
            health: self.health,
            motivation: self.motivation,
            total_customers: self.total_customers,
            coin_users: self.coin_users,
            regular_customers: self.regular_customers,
            paid_users: self.paid_users,
            high_spenders: self.high_spenders,
            total_sales: self.total_sales,
            entrance_fee: self.entrance_fee,
            tips: self.tips,
            special_reward: self.special_reward,
            talk_theme: self.talk_theme,
            sales_approach: self.sales_approach,
            tension: self.tension,
            success_memo: self.success_memo,
            failure_memo: self.failure_memo,
            has_event: self.event,
            payday: self.payday,
        }
    }
}

/// Derives the metrics for the entered shift, appends it to the store and
/// persists the whole collection. A failed save is reported to the caller,
/// the record itself and the previously stored ones are left as they were.
pub async fn process_add_command(
    command: AddCommand,
    blob_store: &impl BlobStore,
) -> Result<()> {
    let record = derive_record(command.into_raw());
    let mut store = load_store(blob_store).await;

    println!(
        "Logged {} ({}), {} shift",
        record.raw.date, record.weekday, record.time_category
    );
    println!("Working hours\t{}", format_hours(record.working_hours));
    println!("Hourly wage\t{}", format_yen(record.hourly_wage));
    println!("Tip rate\t{:.0}%", record.tip_rate * 100.);

    store.append(record);
    save_store(blob_store, &store)
        .await
        .context("Failed to persist the new record")?;
    info!("Store now holds {} records", store.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::AddCommand;

    #[derive(Debug, Parser)]
    struct TestArgs {
        #[command(flatten)]
        command: AddCommand,
    }

    #[test]
    fn test_add_command_builds_raw_input() {
        let args = TestArgs::parse_from([
            "test", "--date", "2024-01-15", "--start", "20:00", "--end", "01:30", "--sales",
            "12000", "--customers", "18", "--health", "4", "--event",
        ]);
        let raw = args.command.into_raw();

        assert_eq!(raw.date.to_string(), "2024-01-15");
        assert_eq!(raw.start_time.to_string(), "20:00:00");
        assert_eq!(raw.end_time.to_string(), "01:30:00");
        assert_eq!(raw.total_sales, 12000);
        assert_eq!(raw.total_customers, 18);
        assert_eq!(raw.health, 4);
        assert_eq!(raw.motivation, 3);
        assert!(raw.has_event);
        assert_eq!(raw.payday, "");
    }

    #[test]
    fn test_ratings_outside_range_are_rejected() {
        let result = TestArgs::try_parse_from([
            "test", "--date", "2024-01-15", "--start", "20:00", "--end", "23:00", "--health", "6",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_time_is_rejected() {
        let result = TestArgs::try_parse_from([
            "test", "--date", "2024-01-15", "--start", "evening", "--end", "23:00",
        ]);
        assert!(result.is_err());
    }
}
