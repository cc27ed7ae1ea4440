#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use dailyrep::libs::calendar::{date_range, dates_between, parse_date};
    use dailyrep::libs::error::ReportError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_single_day_range() {
        let dates = date_range("2024-01-01", "2024-01-01").unwrap();
        assert_eq!(dates, vec![date(2024, 1, 1)]);
    }

    #[test]
    fn test_range_is_inclusive_and_ascending() {
        let dates = date_range("2024-01-01", "2024-01-03").unwrap();
        assert_eq!(dates, vec![date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)]);
    }

    #[test]
    fn test_range_length_matches_day_count() {
        let dates = date_range("2024-01-01", "2024-12-31").unwrap();
        assert_eq!(dates.len(), 366);
        assert!(dates.windows(2).all(|pair| pair[1] == pair[0].succ_opt().unwrap()));
    }

    #[test]
    fn test_range_crosses_leap_day() {
        let dates = date_range("2024-02-28", "2024-03-01").unwrap();
        assert_eq!(dates, vec![date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]);
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let err = date_range("2024-01-03", "2024-01-01").unwrap_err();
        match err {
            ReportError::InvalidRange { start, end } => {
                assert_eq!(start, "2024-01-03");
                assert_eq!(end, "2024-01-01");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_dates_are_rejected() {
        assert!(matches!(date_range("2024-13-01", "2024-12-01"), Err(ReportError::InvalidDateFormat(_))));
        assert!(matches!(date_range("2024-01-01", "tomorrow"), Err(ReportError::InvalidDateFormat(_))));
        assert!(matches!(parse_date(""), Err(ReportError::InvalidDateFormat(_))));
        assert!(matches!(parse_date("today"), Err(ReportError::InvalidDateFormat(_))));
        assert!(matches!(parse_date("2024-01-01 "), Err(ReportError::InvalidDateFormat(_))));
    }

    #[test]
    fn test_dates_between_parsed_bounds() {
        let dates = dates_between(date(2023, 12, 31), date(2024, 1, 1)).unwrap();
        assert_eq!(dates, vec![date(2023, 12, 31), date(2024, 1, 1)]);
    }
}
