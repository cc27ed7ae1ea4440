use super::calendar::DATE_FORMAT;
use super::formatter::{format_count, format_money, format_summary_row};
use super::messages::Message;
use super::report::{Metric, Report};
use crate::api::models::HotelInfo;
use crate::msg_print;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints the per-day series and the summary table of a report.
    pub fn report(report: &Report) {
        msg_print!(Message::ReportHeader(report.scope.start.to_string(), report.scope.end.to_string()), true);

        if let Some(info) = &report.hotel_info {
            Self::hotel_info(info);
        }
        if report.estimated {
            msg_print!(Message::SeriesEstimated);
        }

        let mut table = Table::new();
        table.add_row(row!["DATE", "GMV", "GROSS REVENUE", "BOOKINGS"]);
        for (date, gmv) in report.gmv.iter() {
            table.add_row(row![
                date.format(DATE_FORMAT),
                r->format_money(gmv),
                r->format_money(report.gross_revenue.get(&date).unwrap_or_default()),
                r->format_count(report.booking_count.get(&date).unwrap_or_default())
            ]);
        }
        table.add_row(row![
            b->"TOTAL",
            br->format_money(report.summary.gmv.total),
            br->format_money(report.summary.gross_revenue.total),
            br->format_count(report.summary.booking_count.total as u64)
        ]);
        table.printstd();

        Self::summary(report);

        if let Some(flow) = report.flow.as_ref().filter(|flow| !flow.is_empty()) {
            msg_print!(Message::FlowHeader, true);
            let mut table = Table::new();
            table.add_row(row!["ROOM", "TIME SLOT", "CHECKOUTS"]);
            for ((room, slot), count) in &flow.by_room_slot {
                table.add_row(row![room, slot, r->format_count(*count)]);
            }
            table.printstd();
        }
    }

    pub fn summary(report: &Report) {
        msg_print!(Message::SummaryHeader, true);
        let mut table = Table::new();
        table.add_row(row!["METRIC", "TOTAL", "AVERAGE", "MAX", "MIN", "DAYS WITH DATA"]);
        for metric in Metric::ALL {
            let [total, average, max, min, days] = format_summary_row(metric, report.summary.get(metric));
            table.add_row(row![metric.label(), r->total, r->average, r->max, r->min, r->days]);
        }
        table.printstd();
    }

    fn hotel_info(info: &HotelInfo) {
        let mut table = Table::new();
        table.add_row(row!["HOTEL", "CANCELLED BOOKINGS", "NOTIFICATION EMAILS"]);
        table.add_row(row![info.name, r->format_count(info.cancelled_count), info.emails.join(", ")]);
        table.printstd();
    }
}
