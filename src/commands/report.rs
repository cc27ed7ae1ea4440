use crate::{
    api::{report_api::TOKEN_ENV, MetricsSource, RangeQuery, ReportApi},
    libs::{
        calendar::{dates_between, parse_date},
        config::{Config, Palette},
        export::{ExportFormat, Exporter},
        messages::Message,
        report::{Report, ReportScope},
        series::{EstimationPolicy, SeriesNormalizer},
        view::View,
    },
    msg_bail_anyhow, msg_error, msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Property identifier
    #[arg(long)]
    space_id: String,

    /// First day of the report, YYYY-MM-DD
    #[arg(long)]
    start_date: String,

    /// Last day of the report (inclusive), YYYY-MM-DD
    #[arg(long)]
    end_date: String,

    /// Write the JSON snapshot to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the PDF report to this file
    #[arg(long)]
    pdf: Option<PathBuf>,

    /// Include hotel info, reservation details and the flow diagram
    #[arg(short, long)]
    detailed: bool,
}

pub async fn cmd(report_args: ReportArgs) -> Result<()> {
    let start = parse_date(&report_args.start_date)?;
    let end = parse_date(&report_args.end_date)?;
    let calendar = dates_between(start, end)?;

    let config = Config::read()?;
    let api_config = config.api_config();
    if !api_config.has_token() {
        msg_warning!(Message::ApiTokenMissing(TOKEN_ENV.to_string()));
    }

    let query = RangeQuery::new(&report_args.space_id, start, end);
    let report = {
        let api = ReportApi::new(&api_config)?;
        build_report(&api, &query, &calendar, report_args.detailed, config.estimation_policy()).await
    };

    View::report(&report);

    let mut exporters = Vec::new();
    if let Some(path) = report_args.output {
        exporters.push(Exporter::new(ExportFormat::Json, path));
    }
    if let Some(path) = report_args.pdf {
        exporters.push(Exporter::new(ExportFormat::Pdf, path));
    }

    let failed: Vec<&str> = write_outputs(&report, &exporters, &config.palette())
        .iter()
        .map(ExportFormat::name)
        .collect();
    if !failed.is_empty() {
        msg_bail_anyhow!(Message::ExportsIncomplete(failed.join(", ")));
    }
    Ok(())
}

/// Runs every exporter, reporting each outcome. A failure does not stop or
/// undo the others. Returns the formats that failed.
pub fn write_outputs(report: &Report, exporters: &[Exporter], palette: &Palette) -> Vec<ExportFormat> {
    let mut failed = Vec::new();
    for exporter in exporters {
        let path = exporter.output_path().display().to_string();
        match exporter.export(report, palette) {
            Ok(()) => match exporter.format() {
                ExportFormat::Json => msg_success!(Message::JsonSaved(path)),
                ExportFormat::Pdf => msg_success!(Message::PdfGenerated(path)),
            },
            Err(e) => {
                msg_error!(Message::ExportFailed(path, e.to_string()));
                failed.push(exporter.format());
            }
        }
    }
    failed
}

/// Fetches one range from `source` and assembles the report.
///
/// Calls run one after another. Hotel info and reservations are only requested
/// when `detailed` is set, which is also the only case where series may be
/// derived from reservations.
pub async fn build_report<S: MetricsSource>(
    source: &S,
    query: &RangeQuery,
    calendar: &[NaiveDate],
    detailed: bool,
    policy: EstimationPolicy,
) -> Report {
    msg_info!(Message::FetchingMetrics(query.space_id.clone()));
    let rows = source.daily_metrics(query).await;
    if rows.is_empty() {
        msg_info!(Message::NoMetricRows);
    }

    let (hotel_info, reservations) = if detailed {
        msg_info!(Message::FetchingHotelInfo);
        let hotel_info = source.hotel_info(query).await;
        msg_info!(Message::FetchingReservations);
        let reservations = source.reservations(query).await;
        msg_info!(Message::ReservationsFetched(reservations.len()));
        (hotel_info, Some(reservations))
    } else {
        (None, None)
    };

    let normalizer = SeriesNormalizer::new(detailed, policy);
    let series = normalizer.normalize(calendar, &rows, reservations.as_deref().unwrap_or_default());
    if series.is_estimated() {
        msg_warning!(Message::SeriesDerived(series.booking_count.values().sum()));
    }

    let scope = ReportScope {
        space_id: query.space_id.clone(),
        start: query.start,
        end: query.end,
    };
    Report::assemble(scope, series, hotel_info, reservations)
}
