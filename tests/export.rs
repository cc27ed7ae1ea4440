#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use dailyrep::api::models::{HotelInfo, MetricRows, RawMetricRow, ReservationRecord};
    use dailyrep::commands::report::write_outputs;
    use dailyrep::libs::calendar::date_range;
    use dailyrep::libs::config::Palette;
    use dailyrep::libs::export::{to_json_string, ExportFormat, Exporter};
    use dailyrep::libs::report::{Report, ReportScope};
    use dailyrep::libs::series::{EstimationPolicy, SeriesNormalizer};
    use serde_json::{json, Value};
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn scope() -> ReportScope {
        ReportScope {
            space_id: "42".to_string(),
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
        }
    }

    fn basic_report() -> Report {
        let calendar = date_range("2024-01-01", "2024-01-03").unwrap();
        let mut rows = MetricRows::new();
        rows.insert(
            "2024-01-02".to_string(),
            RawMetricRow {
                total_book_price: 500.0,
                gross: 400.0,
                no_of_booking: 2,
            },
        );
        let series = SeriesNormalizer::reported_only().normalize(&calendar, &rows, &[]);
        Report::assemble(scope(), series, None, None)
    }

    fn detailed_report() -> Report {
        let calendar = date_range("2024-01-01", "2024-01-03").unwrap();
        let reservations = vec![
            ReservationRecord::new("Room A", Some("2024-01-01 10:00:00")),
            ReservationRecord::new("Room B", Some("2024-01-02T17:30:00Z")),
        ];
        let series = SeriesNormalizer::new(true, EstimationPolicy::default()).normalize(&calendar, &MetricRows::new(), &reservations);
        let hotel_info = HotelInfo {
            name: "Harbour View".to_string(),
            cancelled_count: 1,
            emails: vec!["ops@example.com".to_string()],
        };
        Report::assemble(scope(), series, Some(hotel_info), Some(reservations))
    }

    #[test]
    fn test_basic_report_json() {
        let report = basic_report();
        let value: Value = serde_json::from_str(&to_json_string(&report).unwrap()).unwrap();

        assert_eq!(
            value,
            json!({
                "daily_gmv": { "2024-01-01": 0.0, "2024-01-02": 500.0, "2024-01-03": 0.0 },
                "daily_gross_revenue": { "2024-01-01": 0.0, "2024-01-02": 400.0, "2024-01-03": 0.0 },
                "daily_booking_count": { "2024-01-01": 0, "2024-01-02": 2, "2024-01-03": 0 }
            })
        );
        assert!(!report.is_detailed());
        assert!(!report.estimated);
        assert!(report.flow.is_none());
    }

    #[test]
    fn test_json_field_order() {
        let text = to_json_string(&basic_report()).unwrap();
        let gmv = text.find("daily_gmv").unwrap();
        let gross = text.find("daily_gross_revenue").unwrap();
        let bookings = text.find("daily_booking_count").unwrap();
        assert!(gmv < gross && gross < bookings);
        assert!(text.find("2024-01-01").unwrap() < text.find("2024-01-03").unwrap());
    }

    #[test]
    fn test_detailed_report_json() {
        let report = detailed_report();
        let value: Value = serde_json::from_str(&to_json_string(&report).unwrap()).unwrap();

        assert_eq!(value["daily_booking_count"], json!({ "2024-01-01": 1, "2024-01-02": 0, "2024-01-03": 1 }));
        assert_eq!(value["daily_gmv"]["2024-01-03"], json!(1500.0));
        assert_eq!(value["hotel_info"]["name"], json!("Harbour View"));
        assert_eq!(value["reservation_details"].as_array().unwrap().len(), 2);
        assert!(report.estimated);
        assert_eq!(report.flow.as_ref().unwrap().total(), 2);
    }

    #[test]
    fn test_summary_is_assembled() {
        let report = basic_report();
        assert_eq!(report.summary.gmv.total, 500.0);
        assert!((report.summary.gmv.average - 500.0 / 3.0).abs() < 1e-9);
        assert_eq!(report.summary.booking_count.days_with_data, 1);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_json_export_writes_file(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("out").join("report.json");
        let report = basic_report();

        Exporter::new(ExportFormat::Json, &path).export(&report, &Palette::default()).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let expected: Value = serde_json::from_str(&to_json_string(&report).unwrap()).unwrap();
        assert_eq!(written, expected);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_json_export_replaces_existing_file(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("report.json");
        fs::write(&path, "stale").unwrap();

        Exporter::new(ExportFormat::Json, &path).export(&basic_report(), &Palette::default()).unwrap();

        assert!(fs::read_to_string(&path).unwrap().starts_with('{'));
        let leftovers = fs::read_dir(ctx.temp_dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_pdf_export(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("report.pdf");

        Exporter::new(ExportFormat::Pdf, &path).export(&basic_report(), &Palette::default()).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_detailed_pdf_export(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("detailed.pdf");

        Exporter::new(ExportFormat::Pdf, &path).export(&detailed_report(), &Palette::default()).unwrap();

        let basic = ctx.temp_dir.path().join("basic.pdf");
        Exporter::new(ExportFormat::Pdf, &basic).export(&basic_report(), &Palette::default()).unwrap();

        let detailed_len = fs::metadata(&path).unwrap().len();
        assert!(detailed_len > 0);
        assert!(detailed_len > fs::metadata(&basic).unwrap().len());
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_failed_export_leaves_no_file(ctx: &mut ExportTestContext) {
        let blocker = ctx.temp_dir.path().join("not_a_dir");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("report.json");

        let result = Exporter::new(ExportFormat::Json, &path).export(&basic_report(), &Palette::default());

        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_detailed_json_keeps_null_hotel_info() {
        let calendar = date_range("2024-01-01", "2024-01-03").unwrap();
        let series = SeriesNormalizer::new(true, EstimationPolicy::default()).normalize(&calendar, &MetricRows::new(), &[]);
        let report = Report::assemble(scope(), series, None, Some(vec![]));

        let value: Value = serde_json::from_str(&to_json_string(&report).unwrap()).unwrap();
        let object = value.as_object().unwrap();

        assert!(object.contains_key("hotel_info"));
        assert!(value["hotel_info"].is_null());
        assert_eq!(value["reservation_details"], json!([]));

        let basic: Value = serde_json::from_str(&to_json_string(&basic_report()).unwrap()).unwrap();
        assert!(!basic.as_object().unwrap().contains_key("hotel_info"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_failed_json_keeps_pdf(ctx: &mut ExportTestContext) {
        let blocker = ctx.temp_dir.path().join("not_a_dir");
        fs::write(&blocker, "").unwrap();
        let json_path = blocker.join("report.json");
        let pdf_path = ctx.temp_dir.path().join("report.pdf");
        let exporters = vec![
            Exporter::new(ExportFormat::Json, &json_path),
            Exporter::new(ExportFormat::Pdf, &pdf_path),
        ];

        let failed = write_outputs(&basic_report(), &exporters, &Palette::default());

        assert_eq!(failed, vec![ExportFormat::Json]);
        assert!(!json_path.exists());
        assert!(fs::read(&pdf_path).unwrap().starts_with(b"%PDF"));
    }
}
