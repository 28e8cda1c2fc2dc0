use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::{
    record::{analysis, store::RecordStore},
    storage::blob_store::BlobStore,
    utils::time::date_to_label,
};

use super::load_store;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ChartKind {
    /// Revenue split by source
    Breakdown,
    /// Sales of every logged day in date order
    Daily,
    /// Average customer counts along the funnel
    Funnel,
    /// Average hourly wage per weekday
    Weekday,
}

#[derive(Debug, Parser)]
pub struct ChartsCommand {
    #[arg(long, short, help = "Which series to print")]
    kind: ChartKind,
}

/// What the charting collaborator consumes, one label per value.
#[derive(Debug, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

pub fn breakdown_series(store: &RecordStore) -> ChartSeries {
    let breakdown = analysis::revenue_breakdown(store);
    ChartSeries {
        labels: vec![
            "Entrance fees".into(),
            "Tips".into(),
            "Special rewards".into(),
        ],
        values: vec![
            breakdown.entrance.amount as f64,
            breakdown.tips.amount as f64,
            breakdown.special.amount as f64,
        ],
    }
}

pub fn daily_series(store: &RecordStore) -> ChartSeries {
    let series = analysis::daily_sales_series(store);
    ChartSeries {
        labels: series.iter().map(|(date, _)| date_to_label(*date)).collect(),
        values: series.iter().map(|(_, sales)| *sales as f64).collect(),
    }
}

pub fn funnel_series(store: &RecordStore) -> ChartSeries {
    let averages = analysis::customer_funnel_averages(store);
    ChartSeries {
        labels: vec!["Total customers".into(), "Coin users".into(), "Paid users".into()],
        values: vec![averages.avg_total, averages.avg_coin, averages.avg_paid],
    }
}

pub fn weekday_series(store: &RecordStore) -> ChartSeries {
    let by_weekday = analysis::weekday_average_wage(store);
    ChartSeries {
        labels: by_weekday.iter().map(|(day, _)| day.to_string()).collect(),
        values: by_weekday.iter().map(|(_, wage)| *wage).collect(),
    }
}

pub async fn process_charts_command(
    ChartsCommand { kind }: ChartsCommand,
    blob_store: &impl BlobStore,
) -> Result<()> {
    let store = load_store(blob_store).await;

    let series = match kind {
        ChartKind::Breakdown => breakdown_series(&store),
        ChartKind::Daily => daily_series(&store),
        ChartKind::Funnel => funnel_series(&store),
        ChartKind::Weekday => weekday_series(&store),
    };

    for (label, value) in series.labels.iter().zip(&series.values) {
        println!("{label}\t{value}");
    }
    Ok(())
}
