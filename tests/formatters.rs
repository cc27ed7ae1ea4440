#[cfg(test)]
mod tests {
    use dailyrep::libs::formatter::{format_bar_label, format_count, format_money, format_number, format_summary_row};
    use dailyrep::libs::report::Metric;
    use dailyrep::libs::summary::SummaryStat;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(1234.5), "$1,234.50");
        assert_eq!(format_money(1234567.891), "$1,234,567.89");
        assert_eq!(format_money(-12.0), "-$12.00");
        assert_eq!(format_money(999.999), "$1,000.00");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(12345678), "12,345,678");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(33.3333, 1), "33.3");
        assert_eq!(format_number(1500.0, 0), "1,500");
        assert_eq!(format_number(-0.001, 2), "0.00");
    }

    #[test]
    fn test_format_bar_label() {
        assert_eq!(format_bar_label(1500.0), "1,500");
        assert_eq!(format_bar_label(499.6), "500");
    }

    #[test]
    fn test_summary_row_money() {
        let stat = SummaryStat {
            total: 3000.0,
            average: 1000.0,
            max: 1500.0,
            min: 0.0,
            days_with_data: 2,
        };
        let row = format_summary_row(Metric::Gmv, &stat);
        assert_eq!(row, ["$3,000.00", "$1,000.00", "$1,500.00", "$0.00", "2"].map(String::from));
    }

    #[test]
    fn test_summary_row_bookings() {
        let stat = SummaryStat {
            total: 100.0,
            average: 100.0 / 3.0,
            max: 100.0,
            min: 0.0,
            days_with_data: 1,
        };
        let row = format_summary_row(Metric::BookingCount, &stat);
        assert_eq!(row, ["100", "33.3", "100", "0", "1"].map(String::from));
    }

    #[test]
    fn test_metric_labels() {
        let labels: Vec<String> = Metric::ALL.iter().map(|metric| metric.label()).collect();
        assert_eq!(labels, vec!["Daily Gmv", "Daily Gross Revenue", "Daily Booking Count"]);
    }
}
