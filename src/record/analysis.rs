use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use crate::utils::percentage::{amount_share, Percentage};

use super::{
    derive::round_half_up,
    entities::{ShiftRecord, Weekday},
    store::RecordStore,
};

/// Headline numbers for the dashboard.
#[derive(Debug, PartialEq, Eq)]
pub struct Summary {
    pub total_sales: u64,
    pub avg_hourly_wage: u64,
    pub session_count: usize,
    pub avg_customers: u64,
}

/// Computes the dashboard summary. An empty store produces all zeros rather
/// than an error, queries never fail.
pub fn summary(store: &RecordStore) -> Summary {
    let records = store.records();
    let total_sales = records.iter().map(|r| r.raw.total_sales).sum();
    let wage_sum: u64 = records.iter().map(|r| r.hourly_wage).sum();
    let customer_sum: u64 = records.iter().map(|r| u64::from(r.raw.total_customers)).sum();

    Summary {
        total_sales,
        avg_hourly_wage: mean(wage_sum, records.len()),
        session_count: records.len(),
        avg_customers: mean(customer_sum, records.len()),
    }
}

#[derive(Debug, PartialEq)]
pub struct RevenueSlice {
    pub amount: u64,
    pub share: Percentage,
}

/// Revenue split into its three sources, each with its share of the total.
#[derive(Debug, PartialEq)]
pub struct RevenueBreakdown {
    pub entrance: RevenueSlice,
    pub tips: RevenueSlice,
    pub special: RevenueSlice,
}

pub fn revenue_breakdown(store: &RecordStore) -> RevenueBreakdown {
    let records = store.records();
    let entrance: u64 = records.iter().map(|r| r.raw.entrance_fee).sum();
    let tips: u64 = records.iter().map(|r| r.raw.tips).sum();
    let special: u64 = records.iter().map(|r| r.raw.special_reward).sum();
    let total = entrance + tips + special;

    let slice = |amount| RevenueSlice {
        amount,
        share: amount_share(amount, total),
    };

    RevenueBreakdown {
        entrance: slice(entrance),
        tips: slice(tips),
        special: slice(special),
    }
}

/// Day-of-month numbers that have at least one record. Keyed by day number
/// only, so the same day in different months lands on the same entry.
pub fn calendar_presence(store: &RecordStore) -> BTreeSet<u32> {
    store.records().iter().map(|r| r.raw.date.day()).collect()
}

/// First record for the exact date, in store order.
pub fn day_detail(store: &RecordStore, date: NaiveDate) -> Option<&ShiftRecord> {
    store.records().iter().find(|r| r.raw.date == date)
}

/// One (date, sales) point per record, ascending by date. The sort is
/// stable, records sharing a date keep their insertion order.
pub fn daily_sales_series(store: &RecordStore) -> Vec<(NaiveDate, u64)> {
    let mut series = store
        .records()
        .iter()
        .map(|r| (r.raw.date, r.raw.total_sales))
        .collect::<Vec<_>>();
    series.sort_by_key(|(date, _)| *date);
    series
}

/// Average customer counts along the funnel. Left unrounded, the chart
/// collaborator decides how to format them.
#[derive(Debug, PartialEq)]
pub struct FunnelAverages {
    pub avg_total: f64,
    pub avg_coin: f64,
    pub avg_paid: f64,
}

pub fn customer_funnel_averages(store: &RecordStore) -> FunnelAverages {
    let records = store.records();
    let avg = |count: u64| {
        if records.is_empty() {
            0.
        } else {
            count as f64 / records.len() as f64
        }
    };

    let total: u64 = records.iter().map(|r| u64::from(r.raw.total_customers)).sum();
    let coin: u64 = records.iter().map(|r| u64::from(r.raw.coin_users)).sum();
    let paid: u64 = records.iter().map(|r| u64::from(r.raw.paid_users)).sum();

    FunnelAverages {
        avg_total: avg(total),
        avg_coin: avg(coin),
        avg_paid: avg(paid),
    }
}

/// Average hourly wage per weekday in Mon..Sun order. Always yields all
/// seven weekdays, days without records average to 0.
pub fn weekday_average_wage(store: &RecordStore) -> [(Weekday, f64); 7] {
    Weekday::CHART_ORDER.map(|day| {
        let mut sum = 0u64;
        let mut count = 0usize;
        for record in store.records().iter().filter(|r| r.weekday == day) {
            sum += record.hourly_wage;
            count += 1;
        }
        let average = if count == 0 { 0. } else { sum as f64 / count as f64 };
        (day, average)
    })
}

fn mean(sum: u64, count: usize) -> u64 {
    if count == 0 {
        0
    } else {
        round_half_up(sum as f64 / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::record::{
        derive::{derive_record, tests::sample_raw},
        entities::Weekday,
        store::RecordStore,
    };

    use super::{
        calendar_presence, customer_funnel_averages, daily_sales_series, day_detail,
        revenue_breakdown, summary, weekday_average_wage,
    };

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn store_of(entries: &[(u32, u64)]) -> RecordStore {
        let mut store = RecordStore::new();
        for (day, sales) in entries {
            let mut raw = sample_raw();
            raw.date = date(*day);
            raw.total_sales = *sales;
            store.append(derive_record(raw));
        }
        store
    }

    #[test]
    fn test_summary_on_empty_store_is_zero() {
        let result = summary(&RecordStore::new());
        assert_eq!(result.total_sales, 0);
        assert_eq!(result.avg_hourly_wage, 0);
        assert_eq!(result.session_count, 0);
        assert_eq!(result.avg_customers, 0);
    }

    #[test]
    fn test_summary_sums_and_means() {
        // both shifts are 3h: wages 400 and 200, customers 20 each
        let store = store_of(&[(1, 1200), (2, 600)]);
        let result = summary(&store);
        assert_eq!(result.total_sales, 1800);
        assert_eq!(result.avg_hourly_wage, 300);
        assert_eq!(result.session_count, 2);
        assert_eq!(result.avg_customers, 20);
    }

    #[test]
    fn test_revenue_breakdown_shares() {
        let mut store = RecordStore::new();
        let mut raw = sample_raw();
        raw.entrance_fee = 100;
        raw.tips = 100;
        raw.special_reward = 0;
        store.append(derive_record(raw));

        let breakdown = revenue_breakdown(&store);
        assert_eq!(breakdown.entrance.amount, 100);
        assert_eq!(*breakdown.entrance.share, 50.);
        assert_eq!(*breakdown.tips.share, 50.);
        assert_eq!(breakdown.special.amount, 0);
        assert_eq!(*breakdown.special.share, 0.);
    }

    #[test]
    fn test_revenue_breakdown_empty_store_has_zero_shares() {
        let breakdown = revenue_breakdown(&RecordStore::new());
        assert_eq!(breakdown.entrance.amount, 0);
        assert_eq!(*breakdown.entrance.share, 0.);
        assert_eq!(*breakdown.tips.share, 0.);
        assert_eq!(*breakdown.special.share, 0.);
    }

    #[test]
    fn test_calendar_presence_collects_day_numbers() {
        let store = store_of(&[(3, 10), (21, 10), (3, 20)]);
        let days = calendar_presence(&store);
        assert_eq!(days.into_iter().collect::<Vec<_>>(), vec![3, 21]);
    }

    #[test]
    fn test_day_detail_returns_first_match() {
        let store = store_of(&[(3, 10), (5, 20), (5, 30)]);
        let record = day_detail(&store, date(5)).unwrap();
        assert_eq!(record.raw.total_sales, 20);
        assert!(day_detail(&store, date(6)).is_none());
    }

    #[test]
    fn test_daily_sales_series_is_sorted_by_date() {
        let store = store_of(&[(3, 30), (1, 10), (2, 20)]);
        assert_eq!(
            daily_sales_series(&store),
            vec![(date(1), 10), (date(2), 20), (date(3), 30)]
        );
    }

    #[test]
    fn test_customer_funnel_averages() {
        let empty = customer_funnel_averages(&RecordStore::new());
        assert_eq!(empty.avg_total, 0.);
        assert_eq!(empty.avg_coin, 0.);
        assert_eq!(empty.avg_paid, 0.);

        // sample_raw: 20 total, 8 coin, 4 paid per record
        let store = store_of(&[(1, 10), (2, 20)]);
        let averages = customer_funnel_averages(&store);
        assert_eq!(averages.avg_total, 20.);
        assert_eq!(averages.avg_coin, 8.);
        assert_eq!(averages.avg_paid, 4.);
    }

    #[test]
    fn test_weekday_average_wage_has_all_seven_entries() {
        // 2024-01-01 is a Monday, 2024-01-07 a Sunday, both 3h shifts
        let store = store_of(&[(1, 300), (7, 600)]);
        let by_weekday = weekday_average_wage(&store);

        assert_eq!(by_weekday.len(), 7);
        assert_eq!(by_weekday[0], (Weekday::Mon, 100.));
        assert_eq!(by_weekday[6], (Weekday::Sun, 200.));
        for (day, wage) in &by_weekday[1..6] {
            assert_eq!(*wage, 0., "no records on {day}");
        }
    }

    #[test]
    fn test_weekday_average_wage_averages_within_a_day() {
        // two Mondays with wages 100 and 200
        let store = store_of(&[(1, 300), (8, 600)]);
        let by_weekday = weekday_average_wage(&store);
        assert_eq!(by_weekday[0], (Weekday::Mon, 150.));
    }
}
