
use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};


/// This is the standard way of converting a date to a string in shiftlog.
pub fn date_to_label(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses HH:MM clock input from the cli.
pub fn parse_clock(value: &str) -> Result<NaiveTime> {
    Ok(NaiveTime::parse_from_str(value.trim(), "%H:%M")?)
}

/// Parses a calendar date given as year-month-day.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")?)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::{date_to_label, parse_clock, parse_iso_date};

    #[test]
    fn test_parse_clock() {
        assert_eq!(
            parse_clock("22:30").unwrap(),
            NaiveTime::from_hms_opt(22, 30, 0).unwrap()
        );
        assert!(parse_clock("25:00").is_err());
        assert!(parse_clock("evening").is_err());
    }

    #[test]
    fn test_parse_iso_date_and_label_round_trip() {
        let date = parse_iso_date("2024-01-05").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(date_to_label(date), "2024-01-05");
        assert!(parse_iso_date("05/01/2024").is_err());
    }
}
